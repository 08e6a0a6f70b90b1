//! Error types for disc-list operations.

use thiserror::Error;

/// Result type alias using [`Raid5Error`].
pub type Result<T> = std::result::Result<T, Raid5Error>;

/// Errors raised by the striping engine and its value types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Raid5Error {
    /// A disc index does not name a disc in the list.
    #[error("disc index out of range: {index} (discs={discs})")]
    DiscIndexOutOfRange { index: usize, discs: usize },

    /// Discs hold different numbers of rows.
    #[error("ragged disc list: disc {disc} has {found} rows, expected {expected}")]
    RaggedDiscs {
        disc: usize,
        expected: usize,
        found: usize,
    },

    /// Striping needs at least one data disc next to the parity disc.
    #[error("at least 2 discs are required, got {discs}")]
    TooFewDiscs { discs: usize },

    /// Data can only be placed onto an empty disc list.
    #[error("disc {disc} already holds data")]
    NotEmpty { disc: usize },

    /// Source text contained something other than '0' or '1'.
    #[error("invalid character {character:?} at position {position}, expected '0' or '1'")]
    InvalidCharacter { character: char, position: usize },

    /// More bits were requested than the disc list stores.
    #[error("requested {requested} bits but the disc list stores only {available}")]
    ShortRead { requested: usize, available: usize },

    /// A thread panicked while holding the disc-list lock.
    #[error("disc list lock poisoned")]
    LockPoisoned,
}
