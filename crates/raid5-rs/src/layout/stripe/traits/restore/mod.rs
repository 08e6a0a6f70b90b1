//! Restoration helpers for rebuilding a lost disc.

use crate::error::Result;

/// Restore defines hooks for rebuilding missing or stale stripe members.
pub trait Restore {
    /// restore rebuilds the disc at the provided index from its peers.
    ///
    /// # Arguments
    /// * `i` - The disc index to rebuild.
    ///
    /// # Errors
    /// Returns an error if `i` is not a disc index or the layout is unusable.
    fn restore(&mut self, i: usize) -> Result<()>;

    /// scrub recomputes redundancy and returns the rows that had to be rewritten.
    ///
    /// # Errors
    /// Returns an error if the layout is unusable.
    fn scrub(&mut self) -> Result<Vec<usize>> {
        Ok(Vec::new())
    }
}
