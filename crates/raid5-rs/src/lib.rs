//! RAID5 bit striping with rotating parity and single-disc recovery.
#![allow(clippy::cargo_common_metadata)]

pub mod error;
pub mod layout;
pub mod metrics;
pub mod retention;

pub use error::{Raid5Error, Result};
pub use layout::bits::{Bit, bits_to_string, to_list};
pub use retention::array::{DiscList, create_disc_list};
pub use retention::disc::Disc;
pub use retention::shared::SharedDiscList;
