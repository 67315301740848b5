//! Consent code format
//!
//! A consent code is a 5-digit ROC year-month prefix, one letter A-D and a
//! 6-digit zero-padded serial, e.g. `11409B000042`. There is no checksum.

use crate::constants::{
    CONSENT_LETTERS, CONSENT_PREFIX_LENGTH, CONSENT_SERIAL_LENGTH, CONSENT_SERIAL_MAX,
};
use thiserror::Error;

/// Consent code construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsentError {
    /// Prefix is not exactly 5 ASCII digits
    #[error("Invalid prefix: {0:?} (expected 5 digits, e.g. 11409)")]
    InvalidPrefix(String),
    /// Letter outside A-D
    #[error("Invalid letter: {0:?} (expected one of A, B, C, D)")]
    InvalidLetter(char),
    /// Serial does not fit in 6 digits
    #[error("Serial {0} exceeds {max}", max = CONSENT_SERIAL_MAX)]
    SerialOverflow(u32),
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a consent code against `^\d{5}[ABCD]\d{6}$`
pub fn is_valid_consent(code: &str) -> bool {
    if !code.is_ascii() || code.len() != CONSENT_PREFIX_LENGTH + 1 + CONSENT_SERIAL_LENGTH {
        return false;
    }

    let (prefix, rest) = code.split_at(CONSENT_PREFIX_LENGTH);
    let (letter, serial) = rest.split_at(1);

    is_digits(prefix, CONSENT_PREFIX_LENGTH)
        && letter.chars().all(|c| CONSENT_LETTERS.contains(&c))
        && is_digits(serial, CONSENT_SERIAL_LENGTH)
}

/// Build a consent code from its parts
pub fn format_consent(prefix: &str, letter: char, seq: u32) -> Result<String, ConsentError> {
    if !is_digits(prefix, CONSENT_PREFIX_LENGTH) {
        return Err(ConsentError::InvalidPrefix(prefix.to_string()));
    }
    if !CONSENT_LETTERS.contains(&letter) {
        return Err(ConsentError::InvalidLetter(letter));
    }
    if seq > CONSENT_SERIAL_MAX {
        return Err(ConsentError::SerialOverflow(seq));
    }

    Ok(format!(
        "{}{}{:0width$}",
        prefix,
        letter,
        seq,
        width = CONSENT_SERIAL_LENGTH
    ))
}
