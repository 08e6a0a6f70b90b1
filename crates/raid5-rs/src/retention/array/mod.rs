//! Disc list holding the RAID5 stripe matrix, plus the operations on it.
//!
//! Every traversal (placement, parity, read-back) walks rows in order with its
//! own [`ParitySchedule`], so the three always agree on which disc holds parity
//! in a given row.


use std::fmt::Write;
use std::time::Instant;

use tracing::debug;

use crate::error::{Raid5Error, Result};
use crate::layout::bits::{Bit, xor_values};
use crate::layout::geometry::{disc_for_slot, geometry};
use crate::layout::stripe::schedule::{ParitySchedule, parity_disc_for_row};
use crate::layout::stripe::traits::restore::Restore;
use crate::metrics::{self, ClusterOp, OpKind};

/// DiscList is an ordered set of discs, each an ordered sequence of bits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiscList(Vec<Vec<Bit>>);

#[must_use]
/// `create_disc_list` returns `disc_count` empty discs.
pub fn create_disc_list(disc_count: usize) -> DiscList {
    DiscList::new(disc_count)
}

impl DiscList {
    #[must_use]
    pub fn new(disc_count: usize) -> Self {
        Self(vec![Vec::new(); disc_count])
    }

    #[must_use]
    /// `from_discs` wraps existing disc contents without validating them.
    ///
    /// Shape problems surface from the operations that need rows.
    pub const fn from_discs(discs: Vec<Vec<Bit>>) -> Self {
        Self(discs)
    }

    #[must_use]
    pub fn into_discs(self) -> Vec<Vec<Bit>> {
        self.0
    }

    #[must_use]
    pub fn discs(&self) -> &[Vec<Bit>] {
        &self.0
    }

    #[must_use]
    pub fn disc_count(&self) -> usize {
        self.0.len()
    }

    /// `disc` returns the contents of one disc.
    ///
    /// # Errors
    /// Returns [`Raid5Error::DiscIndexOutOfRange`] for an unknown index.
    pub fn disc(&self, i: usize) -> Result<&[Bit]> {
        self.check_index(i)?;
        Ok(&self.0[i])
    }

    /// `row_count` returns the number of stripe rows.
    ///
    /// # Errors
    /// Returns [`Raid5Error::RaggedDiscs`] if the discs differ in length.
    pub fn row_count(&self) -> Result<usize> {
        self.rows_excluding(None)
    }

    #[must_use]
    /// `parity_disc_for_row` returns the disc holding parity in `row`.
    pub fn parity_disc_for_row(&self, row: usize) -> usize {
        parity_disc_for_row(self.disc_count(), row)
    }

    /// `save_data` stripes `data` across the discs and computes parity.
    ///
    /// Data is padded with `false` up to a whole number of rows, so each disc
    /// ends up `ceil(data.len() / (discs - 1))` bits long.
    ///
    /// # Errors
    /// Fails without touching the list if it has fewer than two discs or any
    /// disc already holds bits.
    pub fn save_data(&mut self, data: &[Bit]) -> Result<()> {
        let started = Instant::now();
        let result = self.place(data);
        self.record(OpKind::Save, data.len(), started, result.is_err());
        result
    }

    /// `sum_control` recomputes the parity bit of every row.
    ///
    /// Running it twice in a row leaves the list unchanged.
    ///
    /// # Errors
    /// Fails on a list with fewer than two discs or with ragged discs.
    pub fn sum_control(&mut self) -> Result<()> {
        let started = Instant::now();
        let result = self.parity_pass().map(|_| ());
        self.record(OpKind::Parity, 0, started, result.is_err());
        result
    }

    /// `read_data` reassembles the first `original_size` data bits.
    ///
    /// # Errors
    /// Fails on a ragged list, on fewer than two discs, or when the list
    /// stores fewer than `original_size` data bits.
    pub fn read_data(&self, original_size: usize) -> Result<Vec<Bit>> {
        let started = Instant::now();
        let result = self.extract(original_size);
        self.record(OpKind::Read, original_size, started, result.is_err());
        result
    }

    /// `simulate_damage` replaces disc `i` with a zero-filled disc of the same length.
    ///
    /// # Errors
    /// Returns [`Raid5Error::DiscIndexOutOfRange`] for an unknown index and
    /// [`Raid5Error::RaggedDiscs`] for a ragged list; the list is unchanged.
    pub fn simulate_damage(&mut self, i: usize) -> Result<()> {
        let started = Instant::now();
        let result = self.wipe(i);
        self.record(OpKind::Damage, 0, started, result.is_err());
        result
    }

    /// `recover_data` rebuilds disc `i` from the other discs and returns it.
    ///
    /// The XOR of a whole row is always zero, so the missing bit of each row is
    /// the XOR of the surviving ones, whether it held data or parity. Parity is
    /// recomputed afterwards so the rebuilt disc carries correct flags. The
    /// contents of disc `i` are ignored, including its length.
    ///
    /// # Errors
    /// Fails for an unknown index, on ragged survivors, on fewer than two
    /// discs, or when `original_size` exceeds what the list stores.
    pub fn recover_data(&mut self, i: usize, original_size: usize) -> Result<Vec<Bit>> {
        let started = Instant::now();
        let result = self.rebuild(i, original_size);
        self.record(OpKind::Recover, original_size, started, result.is_err());
        result
    }

    /// `verify_parity` returns the rows whose bits do not XOR to zero.
    ///
    /// # Errors
    /// Returns [`Raid5Error::RaggedDiscs`] if the discs differ in length.
    pub fn verify_parity(&self) -> Result<Vec<usize>> {
        let rows = self.row_count()?;
        Ok((0..rows)
            .filter(|&row| self.xor_row(row, None))
            .collect())
    }

    #[must_use]
    /// `status_string` renders one line per disc, parity bits in brackets.
    pub fn status_string(&self) -> String {
        let mut out = String::new();
        for (i, disc) in self.0.iter().enumerate() {
            let _ = write!(out, "disc {i}:");
            for bit in disc {
                if bit.is_parity() {
                    let _ = write!(out, " [{bit}]");
                } else {
                    let _ = write!(out, " {bit}");
                }
            }
            out.push('\n');
        }
        out
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.disc_count() {
            return Err(Raid5Error::DiscIndexOutOfRange {
                index: i,
                discs: self.disc_count(),
            });
        }
        Ok(())
    }

    fn rows_excluding(&self, skip: Option<usize>) -> Result<usize> {
        let mut expected = None;
        for (disc, bits) in self.0.iter().enumerate() {
            if Some(disc) == skip {
                continue;
            }
            match expected {
                None => expected = Some(bits.len()),
                Some(e) if e != bits.len() => {
                    return Err(Raid5Error::RaggedDiscs {
                        disc,
                        expected: e,
                        found: bits.len(),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(expected.unwrap_or(0))
    }

    fn xor_row(&self, row: usize, skip: Option<usize>) -> bool {
        xor_values(
            self.0
                .iter()
                .enumerate()
                .filter(|(j, _)| Some(*j) != skip)
                .map(|(_, disc)| &disc[row]),
        )
    }

    fn place(&mut self, data: &[Bit]) -> Result<()> {
        let geom = geometry(self.disc_count())?;
        if let Some(disc) = self.0.iter().position(|d| !d.is_empty()) {
            return Err(Raid5Error::NotEmpty { disc });
        }

        let rows = geom.rows_for(data.len());
        for disc in &mut self.0 {
            disc.resize(rows, Bit::ZERO);
        }

        // Placeholders stay zero until the parity pass overwrites them.
        for (index, bit) in data.iter().enumerate() {
            let (row, slot) = geom.locate_bit(index);
            let disc = disc_for_slot(slot, self.parity_disc_for_row(row));
            self.0[disc][row] = bit.as_data();
        }

        debug!(
            discs = geom.discs,
            rows,
            bits = data.len(),
            padding = geom.padded_len(data.len()) - data.len(),
            "data striped"
        );
        self.parity_pass().map(|_| ())
    }

    /// Writes the parity bit of every row and clears stale parity flags.
    /// Returns the rows whose parity slot changed.
    fn parity_pass(&mut self) -> Result<Vec<usize>> {
        let geom = geometry(self.disc_count())?;
        let rows = self.row_count()?;
        let mut rewritten = Vec::new();

        for (row, skip) in ParitySchedule::new(geom.discs).take(rows).enumerate() {
            let slot = Bit::parity(self.xor_row(row, Some(skip)));
            for (j, disc) in self.0.iter_mut().enumerate() {
                if j == skip {
                    if disc[row] != slot {
                        disc[row] = slot;
                        rewritten.push(row);
                    }
                } else if disc[row].is_parity() {
                    disc[row] = disc[row].as_data();
                }
            }
        }
        Ok(rewritten)
    }

    fn capacity_check(&self, rows: usize, original_size: usize) -> Result<()> {
        let available = geometry(self.disc_count())?.capacity(rows);
        if original_size > available {
            return Err(Raid5Error::ShortRead {
                requested: original_size,
                available,
            });
        }
        Ok(())
    }

    fn extract(&self, original_size: usize) -> Result<Vec<Bit>> {
        let rows = self.row_count()?;
        self.capacity_check(rows, original_size)?;

        let discs = &self.0;
        let out: Vec<Bit> = ParitySchedule::new(discs.len())
            .take(rows)
            .enumerate()
            .flat_map(move |(row, skip)| {
                discs
                    .iter()
                    .enumerate()
                    .filter(move |(j, _)| *j != skip)
                    .map(move |(_, disc)| disc[row])
            })
            .take(original_size)
            .collect();
        Ok(out)
    }

    fn wipe(&mut self, i: usize) -> Result<()> {
        self.check_index(i)?;
        let rows = self.row_count()?;
        self.0[i] = vec![Bit::ZERO; rows];
        debug!(disc = i, rows, "disc wiped");
        Ok(())
    }

    fn rebuild(&mut self, i: usize, original_size: usize) -> Result<Vec<Bit>> {
        self.check_index(i)?;
        let rows = self.rows_excluding(Some(i))?;
        self.capacity_check(rows, original_size)?;

        let recovered: Vec<Bit> = (0..rows)
            .map(|row| Bit::data(self.xor_row(row, Some(i))))
            .collect();
        self.0[i] = recovered;
        let parity_rows = self.parity_pass()?;

        debug!(
            disc = i,
            rows,
            parity_rows = parity_rows.len(),
            "disc rebuilt"
        );
        Ok(self.0[i].clone())
    }

    fn record(&self, op: OpKind, bits: usize, started: Instant, error: bool) {
        if !metrics::is_enabled() {
            return;
        }
        metrics::record_cluster_op(ClusterOp {
            op,
            discs: self.disc_count(),
            rows: self.0.first().map_or(0, Vec::len),
            bits,
            latency_seconds: started.elapsed().as_secs_f64(),
            error,
        });
    }
}

impl Restore for DiscList {
    fn restore(&mut self, i: usize) -> Result<()> {
        self.check_index(i)?;
        let rows = self.rows_excluding(Some(i))?;
        let capacity = geometry(self.disc_count())?.capacity(rows);
        self.recover_data(i, capacity).map(|_| ())
    }

    fn scrub(&mut self) -> Result<Vec<usize>> {
        self.parity_pass()
    }
}
