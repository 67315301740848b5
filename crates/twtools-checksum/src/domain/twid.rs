//! Taiwan national identification number (TWID) checksum
//!
//! This module provides the letter code table lookup, validation and the
//! bounded check digit search used by the generator.

use crate::constants::{TWID_LENGTH, TWID_LETTER_CODES, TWID_WEIGHTS};
use thiserror::Error;

/// Gender digit (second character of a TWID)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Digit `1`
    Male,
    /// Digit `2`
    Female,
}

impl Gender {
    /// Digit used in the TWID
    pub fn digit(self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Digit as ASCII character
    pub fn as_char(self) -> char {
        char::from(b'0' + self.digit())
    }
}

impl TryFrom<u8> for Gender {
    type Error = TwidError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Male),
            2 => Ok(Self::Female),
            other => Err(TwidError::InvalidGender(other)),
        }
    }
}

/// A region letter that is present in the letter code table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegionLetter(char);

impl RegionLetter {
    /// All region letters in table order
    pub fn all() -> impl Iterator<Item = RegionLetter> {
        TWID_LETTER_CODES.iter().map(|&(letter, _)| RegionLetter(letter))
    }

    /// Letter as character
    pub fn as_char(self) -> char {
        self.0
    }

    /// Numeric code of this letter
    pub fn code(self) -> u8 {
        // Construction guarantees table membership
        letter_code(self.0).unwrap_or_default()
    }
}

impl TryFrom<char> for RegionLetter {
    type Error = TwidError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match letter_code(value) {
            Some(_) => Ok(Self(value)),
            None => Err(TwidError::UnknownLetter(value)),
        }
    }
}

/// Errors raised when converting raw input into TWID options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TwidError {
    /// Gender digit other than 1 or 2
    #[error("Invalid gender digit: {0} (expected 1 or 2)")]
    InvalidGender(u8),
    /// Letter not present in the region table
    #[error("Unknown region letter: {0:?}")]
    UnknownLetter(char),
}

/// Look up the numeric code of a region letter
///
/// Only uppercase letters are accepted.
pub fn letter_code(letter: char) -> Option<u8> {
    TWID_LETTER_CODES
        .iter()
        .find(|&&(l, _)| l == letter)
        .map(|&(_, code)| code)
}

/// Check whether `id` has the shape `[A-Z][12][0-9]{8}`
fn has_twid_shape(id: &[u8]) -> bool {
    id.len() == TWID_LENGTH
        && id[0].is_ascii_uppercase()
        && matches!(id[1], b'1' | b'2')
        && id[2..].iter().all(u8::is_ascii_digit)
}

/// Weighted sum over the 11-digit expansion of a well-formed TWID
fn weighted_sum(code: u8, id: &[u8]) -> u32 {
    let letter_digits = [u32::from(code / 10), u32::from(code % 10)];
    let id_digits = id[1..].iter().map(|&b| u32::from(b - b'0'));

    letter_digits
        .into_iter()
        .chain(id_digits)
        .zip(TWID_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum()
}

/// Validate a TWID
///
/// Returns `false` for anything that is not exactly one uppercase letter,
/// a gender digit (1 or 2) and 8 digits, or whose weighted sum is not a
/// multiple of 10. Case- and length-sensitive: no trimming is done here.
pub fn is_valid_twid(id: &str) -> bool {
    let bytes = id.as_bytes();
    if !has_twid_shape(bytes) {
        return false;
    }

    let Some(code) = letter_code(char::from(bytes[0])) else {
        return false;
    };

    weighted_sum(code, bytes) % 10 == 0
}

/// Complete a 9-character base with the first check digit (0-9) that validates
///
/// Returns `None` if no digit yields a valid TWID, which only happens when the
/// base itself is malformed.
pub fn complete_twid(base: &str) -> Option<String> {
    (0..=9u8).find_map(|digit| {
        let candidate = format!("{}{}", base, digit);
        is_valid_twid(&candidate).then_some(candidate)
    })
}
