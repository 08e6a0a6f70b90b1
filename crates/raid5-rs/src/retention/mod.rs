//! Disc-list storage, setup parameters and shared access.

pub mod array;
pub mod disc;
pub mod shared;
