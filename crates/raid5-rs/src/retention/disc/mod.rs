//! Setup parameters for a stripe set.

#[cfg(test)]
mod disc_tests;

use crate::error::Result;
use crate::layout::bits::{Bit, to_list};
use crate::retention::array::{DiscList, create_disc_list};

/// Disc holds the requested disc count and the source bit string.
///
/// Failure and recovery targets are passed to [`DiscList`] as plain indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disc {
    disc_count: usize,
    data: String,
}

impl Disc {
    #[must_use]
    pub fn new(disc_count: usize, data: impl Into<String>) -> Self {
        Self {
            disc_count,
            data: data.into(),
        }
    }

    #[must_use]
    pub const fn disc_count(&self) -> usize {
        self.disc_count
    }

    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// `bits` parses the source string.
    ///
    /// # Errors
    /// Returns an error if the string holds anything besides `'0'` and `'1'`.
    pub fn bits(&self) -> Result<Vec<Bit>> {
        to_list(&self.data)
    }

    #[must_use]
    pub fn create_disc_list(&self) -> DiscList {
        create_disc_list(self.disc_count)
    }

    /// `stripe` parses the data, saves it onto a fresh disc list and returns
    /// the list together with the original bit count.
    ///
    /// # Errors
    /// Fails on a malformed source string or fewer than two discs.
    pub fn stripe(&self) -> Result<(DiscList, usize)> {
        let bits = self.bits()?;
        let mut discs = self.create_disc_list();
        discs.save_data(&bits)?;
        Ok((discs, bits.len()))
    }
}
