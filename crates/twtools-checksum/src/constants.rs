//! Checksum tables and generation limits
//!
//! Note: the TWID letter table follows the national standard ordering and is
//! not derivable from alphabetical position.

// =============================================================================
// TWID (national identification number)
// =============================================================================

/// Total length of a TWID (letter + gender digit + 8 digits)
pub const TWID_LENGTH: usize = 10;

/// Region letter to numeric code table (26 entries)
///
/// I, O, W and Z are placed out of alphabetical order.
pub const TWID_LETTER_CODES: [(char, u8); 26] = [
    ('A', 10),
    ('B', 11),
    ('C', 12),
    ('D', 13),
    ('E', 14),
    ('F', 15),
    ('G', 16),
    ('H', 17),
    ('J', 18),
    ('K', 19),
    ('L', 20),
    ('M', 21),
    ('N', 22),
    ('P', 23),
    ('Q', 24),
    ('R', 25),
    ('S', 26),
    ('T', 27),
    ('U', 28),
    ('V', 29),
    ('X', 30),
    ('Y', 31),
    ('W', 32),
    ('Z', 33),
    ('I', 34),
    ('O', 35),
];

/// Weights for the 11-digit expansion (2 letter-code digits + 9 id digits)
pub const TWID_WEIGHTS: [u32; 11] = [1, 9, 8, 7, 6, 5, 4, 3, 2, 1, 1];

/// Number of random serial digits between the gender digit and the check digit
pub const TWID_SERIAL_DIGITS: usize = 7;

// =============================================================================
// UBN (unified business number)
// =============================================================================

/// Length of a UBN
pub const UBN_LENGTH: usize = 8;

/// Positional weights
pub const UBN_WEIGHTS: [u32; UBN_LENGTH] = [1, 2, 1, 2, 1, 2, 4, 1];

/// Position (0-indexed) of the digit that enables the exception rule
pub const UBN_SPECIAL_POSITION: usize = 6;

/// Digit value at `UBN_SPECIAL_POSITION` that enables the exception rule
pub const UBN_SPECIAL_DIGIT: u32 = 7;

/// Known-valid UBN returned if the check digit search ever comes up empty
pub const UBN_FALLBACK: &str = "24536806";

/// Smallest batch produced by batch generation
pub const UBN_BATCH_MIN: usize = 1;

/// Largest batch produced by batch generation
pub const UBN_BATCH_MAX: usize = 1000;

// =============================================================================
// Consent code
// =============================================================================

/// Letters allowed between prefix and serial
pub const CONSENT_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Prefix length (ROC year + month, e.g. 11409)
pub const CONSENT_PREFIX_LENGTH: usize = 5;

/// Zero-padded serial length
pub const CONSENT_SERIAL_LENGTH: usize = 6;

/// Largest serial that fits in `CONSENT_SERIAL_LENGTH` digits
pub const CONSENT_SERIAL_MAX: u32 = 999_999;
