//! Identifier generation workflow
//!
//! Every generator has a `_with` variant taking the random source explicitly,
//! so callers (and tests) can inject a seeded generator. The plain variants
//! use `rand::thread_rng()`.

use crate::constants::{
    CONSENT_LETTERS, TWID_LETTER_CODES, TWID_SERIAL_DIGITS, UBN_BATCH_MAX, UBN_BATCH_MIN,
    UBN_FALLBACK, UBN_LENGTH,
};
use crate::domain::consent::{ConsentError, format_consent};
use crate::domain::twid::{Gender, RegionLetter, complete_twid};
use crate::domain::ubn::complete_ubn;
use rand::Rng;
use tracing::{debug, warn};

/// Options for TWID generation
///
/// Unset fields are chosen at random.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TwidOptions {
    /// Fixed gender digit
    pub gender: Option<Gender>,
    /// Fixed region letter
    pub letter: Option<RegionLetter>,
}

impl TwidOptions {
    /// Fix the gender digit
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Fix the region letter
    pub fn with_letter(mut self, letter: RegionLetter) -> Self {
        self.letter = Some(letter);
        self
    }
}

fn push_random_digits<R: Rng + ?Sized>(rng: &mut R, buf: &mut String, count: usize) {
    for _ in 0..count {
        buf.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
}

// =============================================================================
// TWID
// =============================================================================

/// Generate a valid TWID using the thread-local random source
pub fn generate_twid(options: TwidOptions) -> String {
    generate_twid_with(&mut rand::thread_rng(), options)
}

/// Generate a valid TWID
///
/// 1. Pick the letter and gender (from options or at random)
/// 2. Append 7 random digits
/// 3. Search 0-9 for the check digit
pub fn generate_twid_with<R: Rng + ?Sized>(rng: &mut R, options: TwidOptions) -> String {
    let letter = options
        .letter
        .map(RegionLetter::as_char)
        .unwrap_or_else(|| TWID_LETTER_CODES[rng.gen_range(0..TWID_LETTER_CODES.len())].0);
    let gender = options.gender.unwrap_or_else(|| {
        if rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    });

    let mut base = String::with_capacity(TWID_SERIAL_DIGITS + 3);
    base.push(letter);
    base.push(gender.as_char());
    push_random_digits(rng, &mut base, TWID_SERIAL_DIGITS);

    match complete_twid(&base) {
        Some(id) => {
            debug!(%id, "generated TWID");
            id
        }
        None => {
            // Unreachable for a well-formed base: exactly one digit satisfies mod 10
            warn!(%base, "no TWID check digit found, appending 0");
            base.push('0');
            base
        }
    }
}

// =============================================================================
// UBN
// =============================================================================

/// Generate a valid UBN using the thread-local random source
pub fn generate_ubn() -> String {
    generate_ubn_with(&mut rand::thread_rng())
}

/// Generate a valid UBN
///
/// Seven random digits followed by the first check digit (0-9) that validates.
pub fn generate_ubn_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut base = String::with_capacity(UBN_LENGTH);
    push_random_digits(rng, &mut base, UBN_LENGTH - 1);

    match complete_ubn(&base) {
        Some(ubn) => {
            debug!(%ubn, "generated UBN");
            ubn
        }
        None => {
            warn!(%base, fallback = UBN_FALLBACK, "no UBN check digit found, using fallback");
            UBN_FALLBACK.to_string()
        }
    }
}

/// Clamp a requested batch size to [1, 1000], flooring fractional values
///
/// NaN and negative values clamp to the minimum.
pub fn clamp_batch_count(count: f64) -> usize {
    if count.is_nan() {
        return UBN_BATCH_MIN;
    }
    count
        .floor()
        .clamp(UBN_BATCH_MIN as f64, UBN_BATCH_MAX as f64) as usize
}

/// Generate a batch of UBNs using the thread-local random source
///
/// `count` is clamped to [1, 1000]. Duplicates are possible.
pub fn generate_ubns(count: usize) -> Vec<String> {
    generate_ubns_with(&mut rand::thread_rng(), count)
}

/// Generate a batch of UBNs from the given random source
pub fn generate_ubns_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    let n = count.clamp(UBN_BATCH_MIN, UBN_BATCH_MAX);
    debug!(requested = count, n, "generating UBN batch");
    (0..n).map(|_| generate_ubn_with(rng)).collect()
}

/// Generate a batch of UBNs in parallel
///
/// Same contract as [`generate_ubns`]; each rayon worker uses its own
/// thread-local random source.
#[cfg(feature = "parallel")]
pub fn generate_ubns_parallel(count: usize) -> Vec<String> {
    use rayon::prelude::*;

    let n = count.clamp(UBN_BATCH_MIN, UBN_BATCH_MAX);
    debug!(requested = count, n, "generating UBN batch in parallel");
    (0..n)
        .into_par_iter()
        .map_init(rand::thread_rng, |rng, _| generate_ubn_with(rng))
        .collect()
}

// =============================================================================
// Consent code
// =============================================================================

/// Build a consent code with a random letter using the thread-local random source
pub fn generate_consent(prefix: &str, seq: u32) -> Result<String, ConsentError> {
    generate_consent_with(&mut rand::thread_rng(), prefix, seq)
}

/// Build a consent code with a letter drawn uniformly from A-D
pub fn generate_consent_with<R: Rng + ?Sized>(
    rng: &mut R,
    prefix: &str,
    seq: u32,
) -> Result<String, ConsentError> {
    let letter = CONSENT_LETTERS[rng.gen_range(0..CONSENT_LETTERS.len())];
    let code = format_consent(prefix, letter, seq)?;
    debug!(%code, "generated consent code");
    Ok(code)
}
