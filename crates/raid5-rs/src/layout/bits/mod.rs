//! Single-bit stripe units with text conversion helpers.

use std::fmt;

use crate::error::{Raid5Error, Result};


#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
/// Bit stores one stripe unit together with its parity flag.
///
/// Bits are never edited in place; a slot is overwritten with a new value
/// whenever a row changes.
pub struct Bit {
    value: bool,
    is_parity: bool,
}

impl Bit {
    /// `ZERO` is the non-parity `false` bit used for padding and placeholders.
    pub const ZERO: Self = Self::data(false);

    #[inline]
    #[must_use]
    /// `data` returns a non-parity bit.
    pub const fn data(value: bool) -> Self {
        Self {
            value,
            is_parity: false,
        }
    }

    #[inline]
    #[must_use]
    /// `parity` returns a bit flagged as a computed parity value.
    pub const fn parity(value: bool) -> Self {
        Self {
            value,
            is_parity: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> bool {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn is_parity(self) -> bool {
        self.is_parity
    }

    #[inline]
    #[must_use]
    /// `as_data` drops the parity flag and keeps the value.
    pub const fn as_data(self) -> Self {
        Self::data(self.value)
    }

    #[inline]
    #[must_use]
    /// `as_char` renders the value as `'0'` or `'1'`.
    pub const fn as_char(self) -> char {
        if self.value { '1' } else { '0' }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Self::data(value)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// `xor_values` folds the values of the provided bits with XOR.
///
/// # Arguments
/// * `bits` - The bits to combine.
pub fn xor_values<'a, I>(bits: I) -> bool
where
    I: IntoIterator<Item = &'a Bit>,
{
    bits.into_iter().fold(false, |acc, b| acc ^ b.value)
}

/// `to_list` parses a `'0'`/`'1'` string into non-parity bits.
///
/// Leading and trailing whitespace is ignored. Any other character is rejected.
///
/// # Errors
/// Returns [`Raid5Error::InvalidCharacter`] with the position of the first
/// character that is neither `'0'` nor `'1'`.
pub fn to_list(data: &str) -> Result<Vec<Bit>> {
    data.trim()
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0' => Ok(Bit::ZERO),
            '1' => Ok(Bit::data(true)),
            _ => Err(Raid5Error::InvalidCharacter {
                character,
                position,
            }),
        })
        .collect()
}

#[must_use]
/// `bits_to_string` renders bits as a `'0'`/`'1'` string.
pub fn bits_to_string(bits: &[Bit]) -> String {
    bits.iter().map(|b| b.as_char()).collect()
}
