//! Bit units, row geometry and parity placement.

pub mod bits;
pub mod geometry;
pub mod stripe;
