//! Parity placement for RAID5 stripe rows.

pub mod schedule;
pub mod traits;
