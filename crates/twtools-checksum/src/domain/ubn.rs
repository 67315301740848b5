//! Unified business number (UBN) checksum
//!
//! Each digit is multiplied by its weight and the product is folded to the sum
//! of its tens and units digits. A UBN passes if the folded total is a
//! multiple of 10, or if the digit at position 6 is 7 and the total ends in 9.

use crate::constants::{UBN_LENGTH, UBN_SPECIAL_DIGIT, UBN_SPECIAL_POSITION, UBN_WEIGHTS};

/// Strip every non-digit character and keep at most the first 8 digits
pub fn normalize_ubn(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(UBN_LENGTH)
        .collect()
}

/// Fold a weighted product (at most 9 * 4 = 36) into tens + units
///
/// Folds exactly once, so 28 becomes 10.
#[inline]
fn fold_product(product: u32) -> u32 {
    product / 10 + product % 10
}

/// Folded weighted total of 8 digits
fn folded_total(digits: &[u32; UBN_LENGTH]) -> u32 {
    digits
        .iter()
        .zip(UBN_WEIGHTS)
        .map(|(&digit, weight)| fold_product(digit * weight))
        .sum()
}

/// Parse a normalized UBN into its digits
fn parse_digits(normalized: &str) -> Option<[u32; UBN_LENGTH]> {
    if normalized.len() != UBN_LENGTH {
        return None;
    }

    let mut digits = [0u32; UBN_LENGTH];
    for (slot, c) in digits.iter_mut().zip(normalized.chars()) {
        *slot = c.to_digit(10)?;
    }
    Some(digits)
}

/// Validate a UBN
///
/// The input is normalized first, so separators such as `12-34-5678` are
/// accepted. Anything with fewer than 8 digits returns `false`.
pub fn is_valid_ubn(input: &str) -> bool {
    let normalized = normalize_ubn(input);
    let Some(digits) = parse_digits(&normalized) else {
        return false;
    };

    let remainder = folded_total(&digits) % 10;
    if remainder == 0 {
        return true;
    }

    // Exception rule: 7 at position 6 also accepts a remainder of 9
    digits[UBN_SPECIAL_POSITION] == UBN_SPECIAL_DIGIT && remainder == 9
}

/// Complete a 7-digit base with the first check digit (0-9) that validates
///
/// Returns `None` unless `base` is exactly 7 ASCII digits.
pub fn complete_ubn(base: &str) -> Option<String> {
    if base.len() != UBN_LENGTH - 1 || !base.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    (0..=9u8).find_map(|digit| {
        let candidate = format!("{}{}", base, digit);
        is_valid_ubn(&candidate).then_some(candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize_ubn("12-34-5678"), "12345678");
        assert_eq!(normalize_ubn(" 1234 5678 "), "12345678");
    }

    #[test]
    fn test_normalize_truncates() {
        assert_eq!(normalize_ubn("1234567890"), "12345678");
    }

    #[test]
    fn test_normalize_short_and_empty() {
        assert_eq!(normalize_ubn("12a3"), "123");
        assert_eq!(normalize_ubn("abc"), "");
    }

    #[test]
    fn test_fold_product() {
        assert_eq!(fold_product(0), 0);
        assert_eq!(fold_product(9), 9);
        assert_eq!(fold_product(18), 9);
        assert_eq!(fold_product(28), 10);
        assert_eq!(fold_product(36), 9);
    }

    #[test]
    fn test_folded_total() {
        // 2 + 8 + 5 + 6 + 6 + (1+6) + 0 + 6
        assert_eq!(folded_total(&[2, 4, 5, 3, 6, 8, 0, 6]), 40);
    }

    #[test]
    fn test_valid_ubn() {
        assert!(is_valid_ubn("24536806"));
        assert!(is_valid_ubn("04595257"));
    }

    #[test]
    fn test_invalid_ubn() {
        assert!(!is_valid_ubn("24536807"));
        assert!(!is_valid_ubn("1234567"));
        assert!(!is_valid_ubn(""));
    }

    #[test]
    fn test_special_case_position_six() {
        // total = 1 + (2+8) + 8 = 19
        assert!(is_valid_ubn("10000078"));
        // same remainder without 7 at position 6
        assert!(!is_valid_ubn("10000008"));
    }

    #[test]
    fn test_complete_ubn() {
        assert_eq!(complete_ubn("2453680").as_deref(), Some("24536806"));
    }

    #[test]
    fn test_complete_ubn_special_case_prefers_lowest_digit() {
        // digit 8 passes via the exception before 9 passes the primary rule
        assert_eq!(complete_ubn("1000007").as_deref(), Some("10000078"));
    }

    #[test]
    fn test_complete_ubn_short_base() {
        assert_eq!(complete_ubn("12"), None);
    }

    #[test]
    fn test_complete_ubn_rejects_malformed_base() {
        // full 8 digits would otherwise be truncated back to a valid UBN
        assert_eq!(complete_ubn("24536806"), None);
        assert_eq!(complete_ubn("1234-567"), None);
        assert_eq!(complete_ubn("123456a"), None);
        assert_eq!(complete_ubn(""), None);
    }
}
