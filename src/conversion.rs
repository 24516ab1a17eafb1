//! Normalisation and conversion between GTIN formats.
//!
//! EAN-8, UPC-A, EAN-13 and GTIN-14 are all GTINs: a shorter code becomes a
//! longer one by adding leading zeros, and the check digit stays the same
//! because leading zeros do not change the weighted sum.

use crate::check_digit::{compute_check_digit, parse_digits};
use crate::error::{BarcodeError, Result};
use crate::symbology::Symbology;

/// Remove spaces and hyphens from a code.
///
/// # Examples
///
/// ```
/// use eanid::conversion::normalize;
///
/// assert_eq!(normalize("400-6381-33393-1"), "4006381333931");
/// assert_eq!(normalize("0 36000 29145 2"), "036000291452");
/// ```
#[must_use]
pub fn normalize(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn require_digits(code: &str) -> Result<Vec<u8>> {
    parse_digits(code).ok_or_else(|| {
        BarcodeError::InvalidFormat(format!("expected only digits, got {code:?}"))
    })
}

/// Append the check digit to a code body.
///
/// Accepts bodies of 7, 11, 12 or 13 digits, producing EAN-8, UPC-A, EAN-13
/// or GTIN-14 codes respectively.
///
/// # Examples
///
/// ```
/// use eanid::conversion::complete;
///
/// assert_eq!(complete("400638133393")?, "4006381333931");
/// assert_eq!(complete("9638507")?, "96385074");
/// # Ok::<(), eanid::BarcodeError>(())
/// ```
///
/// # Errors
///
/// Returns [`BarcodeError::InvalidFormat`] for non-digit input and
/// [`BarcodeError::UnsupportedLength`] if the body length does not lead to a
/// supported symbology.
pub fn complete(body: &str) -> Result<String> {
    let digits = require_digits(body)?;
    if Symbology::from_length(digits.len() + 1) == Symbology::Unknown {
        return Err(BarcodeError::UnsupportedLength {
            length: digits.len(),
        });
    }
    let check = compute_check_digit(&digits);
    Ok(format!("{body}{check}"))
}

/// Convert a UPC-A code to its EAN-13 form by prefixing `0`.
///
/// # Errors
///
/// Returns [`BarcodeError::InvalidFormat`] for non-digit input and
/// [`BarcodeError::UnsupportedLength`] unless the code has 12 digits.
pub fn upca_to_ean13(code: &str) -> Result<String> {
    let digits = require_digits(code)?;
    if digits.len() != 12 {
        return Err(BarcodeError::UnsupportedLength {
            length: digits.len(),
        });
    }
    Ok(format!("0{code}"))
}

/// Convert an EAN-13 starting with `0` back to UPC-A.
///
/// Returns `None` when the code is not a 13-digit string with a leading zero.
#[must_use]
pub fn ean13_to_upca(code: &str) -> Option<String> {
    match parse_digits(code) {
        Some(digits) if digits.len() == 13 && digits[0] == 0 => Some(code[1..].to_string()),
        _ => None,
    }
}

/// Left-pad any supported code to the 14-digit GTIN form.
///
/// # Examples
///
/// ```
/// use eanid::conversion::to_gtin14;
///
/// assert_eq!(to_gtin14("96385074")?, "00000096385074");
/// assert_eq!(to_gtin14("4006381333931")?, "04006381333931");
/// # Ok::<(), eanid::BarcodeError>(())
/// ```
///
/// # Errors
///
/// Returns [`BarcodeError::InvalidFormat`] for non-digit input and
/// [`BarcodeError::UnsupportedLength`] for lengths other than 8, 12, 13 or 14.
pub fn to_gtin14(code: &str) -> Result<String> {
    let digits = require_digits(code)?;
    if Symbology::from_length(digits.len()) == Symbology::Unknown {
        return Err(BarcodeError::UnsupportedLength {
            length: digits.len(),
        });
    }
    Ok(format!("{code:0>14}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize(" 96385074 "), "96385074");
        assert_eq!(normalize("0-0012345-600012"), "00012345600012");
        assert_eq!(normalize("abc"), "abc");
    }

    #[test]
    fn test_complete_each_length() {
        assert_eq!(complete("9638507").unwrap(), "96385074");
        assert_eq!(complete("03600029145").unwrap(), "036000291452");
        assert_eq!(complete("400638133393").unwrap(), "4006381333931");
        assert_eq!(complete("0001234560001").unwrap(), "00012345600012");
    }

    #[test]
    fn test_complete_rejects_bad_bodies() {
        assert!(matches!(
            complete("123"),
            Err(BarcodeError::UnsupportedLength { length: 3 })
        ));
        assert!(matches!(
            complete("96385O7"),
            Err(BarcodeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_upca_ean13_conversion() {
        assert_eq!(upca_to_ean13("036000291452").unwrap(), "0036000291452");
        assert_eq!(
            ean13_to_upca("0036000291452"),
            Some("036000291452".to_string())
        );
        assert_eq!(ean13_to_upca("4006381333931"), None);
        assert!(upca_to_ean13("96385074").is_err());
    }

    #[test]
    fn test_to_gtin14() {
        assert_eq!(to_gtin14("036000291452").unwrap(), "00036000291452");
        assert_eq!(to_gtin14("00012345600012").unwrap(), "00012345600012");
        assert!(matches!(
            to_gtin14("12345"),
            Err(BarcodeError::UnsupportedLength { length: 5 })
        ));
    }
}
