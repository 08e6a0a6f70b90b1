//! Lock-protected disc list for callers that share one stripe set across threads.


use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Raid5Error, Result};
use crate::layout::bits::Bit;
use crate::retention::array::DiscList;

/// SharedDiscList serializes mutating traversals and lets reads overlap.
///
/// Each mutating operation holds the write lock for its whole traversal, so no
/// reader observes a half-written row.
#[derive(Clone, Debug, Default)]
pub struct SharedDiscList {
    inner: Arc<RwLock<DiscList>>,
}

impl SharedDiscList {
    #[must_use]
    pub fn new(discs: DiscList) -> Self {
        Self {
            inner: Arc::new(RwLock::new(discs)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, DiscList>> {
        self.inner.read().map_err(|_| Raid5Error::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, DiscList>> {
        self.inner.write().map_err(|_| Raid5Error::LockPoisoned)
    }

    /// # Errors
    /// See [`DiscList::save_data`]; also fails on a poisoned lock.
    pub fn save_data(&self, data: &[Bit]) -> Result<()> {
        self.write()?.save_data(data)
    }

    /// # Errors
    /// See [`DiscList::sum_control`]; also fails on a poisoned lock.
    pub fn sum_control(&self) -> Result<()> {
        self.write()?.sum_control()
    }

    /// # Errors
    /// See [`DiscList::simulate_damage`]; also fails on a poisoned lock.
    pub fn simulate_damage(&self, i: usize) -> Result<()> {
        self.write()?.simulate_damage(i)
    }

    /// # Errors
    /// See [`DiscList::recover_data`]; also fails on a poisoned lock.
    pub fn recover_data(&self, i: usize, original_size: usize) -> Result<Vec<Bit>> {
        self.write()?.recover_data(i, original_size)
    }

    /// # Errors
    /// See [`DiscList::read_data`]; also fails on a poisoned lock.
    pub fn read_data(&self, original_size: usize) -> Result<Vec<Bit>> {
        self.read()?.read_data(original_size)
    }

    /// `snapshot` clones the current disc list under the read lock.
    ///
    /// # Errors
    /// Fails on a poisoned lock.
    pub fn snapshot(&self) -> Result<DiscList> {
        Ok(self.read()?.clone())
    }
}
