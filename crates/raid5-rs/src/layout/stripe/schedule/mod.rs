//! Rotating parity-disc schedule.
//!
//! The parity slot bounces between the outer discs: it starts on the last
//! disc, walks down to disc 0, turns around at disc 1 and walks up to the last
//! disc again, turning around at `disc_count - 2`. Every traversal builds its
//! own cursor from [`ParityCursor::start`], so two traversals that advance the
//! same number of times always agree on the parity disc of a row.

#[cfg(test)]
mod schedule_tests;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
/// ParityCursor names the parity disc of the current row and the walk direction.
pub struct ParityCursor {
    pub skip_index: usize,
    pub decrementing: bool,
}

impl ParityCursor {
    #[inline]
    #[must_use]
    /// `start` returns the cursor for row 0: last disc, walking down.
    pub const fn start(disc_count: usize) -> Self {
        Self {
            skip_index: disc_count.saturating_sub(1),
            decrementing: true,
        }
    }

    #[inline]
    #[must_use]
    /// `advance` returns the cursor for the next row.
    ///
    /// # Arguments
    /// * `disc_count` - The number of discs in the list.
    pub const fn advance(self, disc_count: usize) -> Self {
        let (skip_index, decrementing) =
            adjust_skip_index(self.skip_index, disc_count, self.decrementing);
        Self {
            skip_index,
            decrementing,
        }
    }
}

#[inline]
#[must_use]
/// `adjust_skip_index` moves the parity index one step along the bounce.
///
/// Walking down past disc 0 resets to disc 1 and turns upward; walking up to
/// `disc_count` resets to `disc_count - 2` and turns downward.
///
/// # Arguments
/// * `skip_index` - The parity disc of the current row.
/// * `disc_count` - The number of discs in the list.
/// * `decrementing` - Whether the walk currently moves toward disc 0.
pub const fn adjust_skip_index(
    skip_index: usize,
    disc_count: usize,
    decrementing: bool,
) -> (usize, bool) {
    if decrementing {
        if skip_index == 0 {
            (1, false)
        } else {
            (skip_index - 1, true)
        }
    } else {
        let next = skip_index + 1;
        if next >= disc_count {
            (disc_count.saturating_sub(2), true)
        } else {
            (next, false)
        }
    }
}

/// ParitySchedule yields the parity disc for row 0, 1, 2, and so on.
///
/// The iterator never ends; callers bound it with the row count.
#[derive(Clone, Debug)]
pub struct ParitySchedule {
    cursor: ParityCursor,
    disc_count: usize,
}

impl ParitySchedule {
    #[must_use]
    pub const fn new(disc_count: usize) -> Self {
        Self {
            cursor: ParityCursor::start(disc_count),
            disc_count,
        }
    }
}

impl Iterator for ParitySchedule {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let skip = self.cursor.skip_index;
        self.cursor = self.cursor.advance(self.disc_count);
        Some(skip)
    }
}

#[must_use]
/// `parity_disc_for_row` returns the disc holding parity in the given row.
///
/// # Arguments
/// * `disc_count` - The number of discs in the list.
/// * `row` - The stripe row index.
pub fn parity_disc_for_row(disc_count: usize, row: usize) -> usize {
    // One full bounce visits every disc twice except the two ends.
    let period = 2 * disc_count.saturating_sub(1);
    let row = if period == 0 { row } else { row % period };
    ParitySchedule::new(disc_count)
        .nth(row)
        .unwrap_or_default()
}
