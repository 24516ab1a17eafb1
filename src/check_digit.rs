//! GS1 modulo-10 check digits.
//!
//! Every symbology handled by this crate ends in a check digit computed from
//! the preceding digits. Counting from the digit next to the check digit and
//! moving left, digits are weighted 3, 1, 3, 1, ... and the check digit is the
//! amount needed to round the weighted sum up to a multiple of ten.
//!
//! EAN-8, EAN-13 and GTIN-14 bodies are walked in reverse. UPC-A bodies have
//! an odd digit count, so the same weights fall on the same positions when the
//! body is walked forward; [`weighted_sum`] does that for UPC-A.

use crate::symbology::Symbology;
use serde::{Deserialize, Serialize};

/// Declared and computed check digit of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDigit {
    /// Last digit of the code as scanned
    pub declared: u8,
    /// Check digit derived from the body of the code
    pub computed: u8,
}

impl CheckDigit {
    /// Whether the declared digit equals the computed one.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.declared == self.computed
    }
}

/// Convert an ASCII digit string into digit values.
///
/// Returns `None` if the string is empty or holds anything but `0`-`9`.
///
/// # Examples
///
/// ```
/// use eanid::check_digit::parse_digits;
///
/// assert_eq!(parse_digits("0421"), Some(vec![0, 4, 2, 1]));
/// assert_eq!(parse_digits("04-21"), None);
/// assert_eq!(parse_digits(""), None);
/// ```
#[must_use]
pub fn parse_digits(code: &str) -> Option<Vec<u8>> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(code.bytes().map(|b| b - b'0').collect())
}

/// Weighted sum of a code body (all digits except the check digit).
///
/// EAN-8, EAN-13 and GTIN-14 reverse the body and weight even indices by 3;
/// UPC-A keeps the body in order and weights even indices by 3.
#[must_use]
pub fn weighted_sum(body: &[u8], symbology: Symbology) -> u32 {
    let weight = |(i, d): (usize, &u8)| {
        let d = u32::from(*d);
        if i % 2 == 0 {
            d * 3
        } else {
            d
        }
    };

    match symbology {
        Symbology::UpcA => body.iter().enumerate().map(weight).sum(),
        _ => body.iter().rev().enumerate().map(weight).sum(),
    }
}

/// Turn a weighted sum into a check digit.
#[must_use]
pub const fn check_digit_from_sum(sum: u32) -> u8 {
    // Always < 10
    #[allow(clippy::cast_possible_truncation)]
    let digit = ((10 - (sum % 10)) % 10) as u8;
    digit
}

/// Compute the GS1 check digit for a body of any length.
///
/// # Examples
///
/// ```
/// use eanid::check_digit::compute_check_digit;
///
/// // 400638133393 + check digit 1 = 4006381333931
/// assert_eq!(compute_check_digit(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
/// ```
#[must_use]
pub fn compute_check_digit(body: &[u8]) -> u8 {
    check_digit_from_sum(weighted_sum(body, Symbology::Unknown))
}

/// Split off the trailing check digit and compare it to the computed one.
///
/// Returns `None` when `digits` is empty.
#[must_use]
pub fn verify(digits: &[u8], symbology: Symbology) -> Option<CheckDigit> {
    let (declared, body) = digits.split_last()?;
    let sum = weighted_sum(body, symbology);
    let computed = check_digit_from_sum(sum);
    tracing::trace!(%symbology, sum, computed, declared = *declared, "check digit");
    Some(CheckDigit {
        declared: *declared,
        computed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(code: &str) -> Vec<u8> {
        parse_digits(code).unwrap()
    }

    #[test]
    fn test_ean13_check_digit() {
        let check = verify(&digits("4006381333931"), Symbology::Ean13).unwrap();
        assert_eq!(check.computed, 1);
        assert!(check.is_match());
    }

    #[test]
    fn test_upca_check_digit() {
        let check = verify(&digits("036000291452"), Symbology::UpcA).unwrap();
        assert_eq!(check.computed, 2);
        assert!(check.is_match());
    }

    #[test]
    fn test_ean8_check_digit() {
        let check = verify(&digits("96385074"), Symbology::Ean8).unwrap();
        assert_eq!(check.computed, 4);
        assert!(check.is_match());
    }

    #[test]
    fn test_gtin14_check_digit() {
        let check = verify(&digits("00012345600012"), Symbology::Gtin14).unwrap();
        assert_eq!(check.computed, 2);
        assert!(check.is_match());
    }

    #[test]
    fn test_mismatch_reported() {
        let check = verify(&digits("4006381333932"), Symbology::Ean13).unwrap();
        assert_eq!(check.declared, 2);
        assert_eq!(check.computed, 1);
        assert!(!check.is_match());
    }

    #[test]
    fn test_sum_multiple_of_ten_gives_zero() {
        assert_eq!(check_digit_from_sum(0), 0);
        assert_eq!(check_digit_from_sum(90), 0);
        assert_eq!(check_digit_from_sum(89), 1);
    }

    #[test]
    fn test_upca_forward_equals_reversed() {
        let body = digits("03600029145");
        assert_eq!(
            weighted_sum(&body, Symbology::UpcA),
            weighted_sum(&body, Symbology::Ean13)
        );
    }

    #[test]
    fn test_verify_empty() {
        assert_eq!(verify(&[], Symbology::Ean8), None);
    }

    #[test]
    fn test_parse_digits_rejects_non_ascii() {
        assert_eq!(parse_digits("１２３"), None);
        assert_eq!(parse_digits(" 123"), None);
        assert_eq!(parse_digits("abc"), None);
    }
}
