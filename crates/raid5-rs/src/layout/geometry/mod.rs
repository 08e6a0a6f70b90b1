//! Row geometry for striping a bit stream over a disc list.

#[cfg(test)]
mod geometry_tests;

use crate::error::{Raid5Error, Result};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Geometry {
    pub discs: usize,
    /// Data bits per stripe row; one slot per row is reserved for parity.
    pub bits_per_row: usize,
}

/// `geometry` describes the stripe rows of a list with `disc_count` discs.
///
/// # Errors
/// Returns [`Raid5Error::TooFewDiscs`] when fewer than two discs are given,
/// since a row then has no room for data next to its parity bit.
pub const fn geometry(disc_count: usize) -> Result<Geometry> {
    if disc_count < 2 {
        return Err(Raid5Error::TooFewDiscs { discs: disc_count });
    }
    Ok(Geometry {
        discs: disc_count,
        bits_per_row: disc_count - 1,
    })
}

impl Geometry {
    #[inline]
    #[must_use]
    /// `rows_for` returns how many stripe rows hold `len` data bits.
    pub const fn rows_for(&self, len: usize) -> usize {
        len.div_ceil(self.bits_per_row)
    }

    #[inline]
    #[must_use]
    /// `padded_len` rounds `len` up to a whole number of rows.
    pub const fn padded_len(&self, len: usize) -> usize {
        self.rows_for(len) * self.bits_per_row
    }

    #[inline]
    #[must_use]
    /// `capacity` returns the number of data bits stored in `rows` rows.
    pub const fn capacity(&self, rows: usize) -> usize {
        rows.saturating_mul(self.bits_per_row)
    }

    #[inline]
    #[must_use]
    /// `locate_bit` maps a data bit index to its row and data slot in that row.
    pub const fn locate_bit(&self, bit_index: usize) -> (usize, usize) {
        (bit_index / self.bits_per_row, bit_index % self.bits_per_row)
    }
}

#[inline]
#[must_use]
/// `disc_for_slot` maps a data slot to a disc index, stepping over the parity disc.
///
/// # Arguments
/// * `slot` - The data slot within the row, `0..bits_per_row`.
/// * `skip_index` - The parity disc of the row.
pub const fn disc_for_slot(slot: usize, skip_index: usize) -> usize {
    if slot < skip_index { slot } else { slot + 1 }
}
