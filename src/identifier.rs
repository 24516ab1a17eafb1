//! Barcode identification and validation.
//!
//! [`BarcodeIdentifier`] turns a digit string into a [`BarcodeRecord`]:
//!
//! 1. The input is screened according to the [`IdentifyConfig`].
//! 2. The symbology is chosen from the digit count.
//! 3. The code is cut into fields following the symbology's layout, and
//!    fields covered by a lookup table receive a label.
//! 4. The check digit is verified for EAN-8, UPC-A and EAN-13 (and GTIN-14
//!    when configured). Where it is not verified, `is_valid` is `true`.
//!
//! # Field layouts
//!
//! | Symbology | Fields (1-based digit positions)                                     |
//! |-----------|----------------------------------------------------------------------|
//! | EAN-13    | country 1-3, manufacturer 4-7, product 8-12, check 13                |
//! | UPC-A     | system 1, manufacturer 2-6, product 7-11, check 12                   |
//! | EAN-8     | country 1-2, product 3-7, check 8                                    |
//! | GTIN-14   | indicator 1, company prefix 2-7, item reference 8-13, check 14       |

use std::borrow::Cow;

use crate::check_digit::{self, parse_digits};
use crate::config::{IdentifyConfig, InputPolicy};
use crate::conversion::normalize;
use crate::error::{BarcodeError, Result};
use crate::lookup::{RangeLookup, GS1_PREFIXES, GTIN14_INDICATORS, UPC_NUMBER_SYSTEMS};
use crate::record::{BarcodeField, BarcodeRecord, FieldName};
use crate::symbology::Symbology;

/// Position and meaning of one field within a symbology's layout.
#[derive(Clone, Copy)]
struct FieldSpec {
    name: FieldName,
    start: usize,
    end: usize,
    table: Option<&'static dyn RangeLookup>,
}

impl FieldSpec {
    const fn plain(name: FieldName, start: usize, end: usize) -> Self {
        FieldSpec {
            name,
            start,
            end,
            table: None,
        }
    }

    const fn labelled(
        name: FieldName,
        start: usize,
        end: usize,
        table: &'static dyn RangeLookup,
    ) -> Self {
        FieldSpec {
            name,
            start,
            end,
            table: Some(table),
        }
    }
}

const EAN13_LAYOUT: &[FieldSpec] = &[
    FieldSpec::labelled(FieldName::CountryCode, 0, 3, &GS1_PREFIXES),
    FieldSpec::plain(FieldName::ManufacturerCode, 3, 7),
    FieldSpec::plain(FieldName::ProductCode, 7, 12),
    FieldSpec::plain(FieldName::CheckDigit, 12, 13),
];

const UPCA_LAYOUT: &[FieldSpec] = &[
    FieldSpec::labelled(FieldName::SystemDigit, 0, 1, &UPC_NUMBER_SYSTEMS),
    FieldSpec::plain(FieldName::ManufacturerCode, 1, 6),
    FieldSpec::plain(FieldName::ProductCode, 6, 11),
    FieldSpec::plain(FieldName::CheckDigit, 11, 12),
];

const EAN8_LAYOUT: &[FieldSpec] = &[
    FieldSpec::plain(FieldName::CountryCode, 0, 2),
    FieldSpec::plain(FieldName::ProductCode, 2, 7),
    FieldSpec::plain(FieldName::CheckDigit, 7, 8),
];

const GTIN14_LAYOUT: &[FieldSpec] = &[
    FieldSpec::labelled(FieldName::IndicatorDigit, 0, 1, &GTIN14_INDICATORS),
    FieldSpec::plain(FieldName::CompanyPrefix, 1, 7),
    FieldSpec::plain(FieldName::ItemReference, 7, 13),
    FieldSpec::plain(FieldName::CheckDigit, 13, 14),
];

fn layout(symbology: Symbology) -> &'static [FieldSpec] {
    match symbology {
        Symbology::Ean13 => EAN13_LAYOUT,
        Symbology::UpcA => UPCA_LAYOUT,
        Symbology::Ean8 => EAN8_LAYOUT,
        Symbology::Gtin14 => GTIN14_LAYOUT,
        Symbology::Unknown => &[],
    }
}

/// Classifies and validates retail barcodes.
///
/// The identifier holds only its configuration and is cheap to copy and
/// safe to share across threads.
///
/// # Examples
///
/// ```
/// use eanid::{BarcodeIdentifier, IdentifyConfig, Symbology};
///
/// let identifier = BarcodeIdentifier::with_config(IdentifyConfig {
///     strip_separators: true,
///     ..Default::default()
/// });
/// let record = identifier.identify("0 36000 29145 2")?;
/// assert_eq!(record.symbology, Symbology::UpcA);
/// assert!(record.is_valid);
/// # Ok::<(), eanid::BarcodeError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BarcodeIdentifier {
    config: IdentifyConfig,
}

impl BarcodeIdentifier {
    /// Create an identifier with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an identifier with a custom configuration.
    #[must_use]
    pub const fn with_config(config: IdentifyConfig) -> Self {
        BarcodeIdentifier { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &IdentifyConfig {
        &self.config
    }

    /// Identify a code.
    ///
    /// Unsupported lengths are not an error: they produce an `Unknown` record
    /// with no fields and `is_valid = true`.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidFormat`] if the input is empty or holds
    /// a non-digit character and the input policy is
    /// [`InputPolicy::Strict`].
    pub fn identify(&self, code: &str) -> Result<BarcodeRecord> {
        let code: Cow<'_, str> = if self.config.strip_separators {
            Cow::Owned(normalize(code))
        } else {
            Cow::Borrowed(code)
        };

        let Some(digits) = parse_digits(&code) else {
            return match self.config.input_policy {
                InputPolicy::Strict => Err(describe_format_error(&code)),
                InputPolicy::Permissive => {
                    tracing::debug!(code = %code, "non-digit input treated as unknown");
                    Ok(BarcodeRecord::unknown(code))
                },
            };
        };

        let symbology = Symbology::from_length(digits.len());
        let mut record = BarcodeRecord::unknown(&*code);
        record.symbology = symbology;

        for spec in layout(symbology) {
            let value = &code[spec.start..spec.end];
            let label = spec.table.and_then(|t| t.lookup_str(value));
            record
                .fields
                .insert(spec.name, BarcodeField::labelled(value, label));
        }

        if self.verifies(symbology) {
            record.check = check_digit::verify(&digits, symbology);
            record.is_valid = record.check.map_or(true, |c| c.is_match());
        }

        tracing::debug!(
            code = %record.code,
            symbology = %record.symbology,
            is_valid = record.is_valid,
            "identified barcode"
        );
        Ok(record)
    }

    /// Identify a code and require it to be a known, correctly checked
    /// barcode.
    ///
    /// The check digit is verified for every known symbology, including
    /// GTIN-14 regardless of [`IdentifyConfig::validate_gtin14`].
    ///
    /// # Errors
    ///
    /// - [`BarcodeError::InvalidFormat`] for empty or non-digit input, under
    ///   either input policy.
    /// - [`BarcodeError::UnsupportedLength`] if the symbology is unknown.
    /// - [`BarcodeError::CheckDigitMismatch`] if the check digit is wrong.
    pub fn validate(&self, code: &str) -> Result<BarcodeRecord> {
        let strict = BarcodeIdentifier::with_config(IdentifyConfig {
            input_policy: InputPolicy::Strict,
            validate_gtin14: true,
            ..self.config
        });
        let record = strict.identify(code)?;

        if !record.is_known() {
            return Err(BarcodeError::UnsupportedLength {
                length: record.code.len(),
            });
        }

        match record.check {
            Some(check) if !check.is_match() => Err(BarcodeError::CheckDigitMismatch {
                expected: check.computed,
                found: check.declared,
            }),
            _ => Ok(record),
        }
    }

    fn verifies(&self, symbology: Symbology) -> bool {
        symbology.verifies_check_digit()
            || (symbology == Symbology::Gtin14 && self.config.validate_gtin14)
    }
}

fn describe_format_error(code: &str) -> BarcodeError {
    match code.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((pos, c)) => {
            BarcodeError::InvalidFormat(format!("non-digit character {c:?} at position {pos}"))
        },
        None => BarcodeError::InvalidFormat("empty input".to_string()),
    }
}

/// Identify a code with the default configuration.
///
/// # Examples
///
/// ```
/// use eanid::{identify, Symbology};
///
/// let record = identify("96385074")?;
/// assert_eq!(record.symbology, Symbology::Ean8);
/// assert!(record.is_valid);
///
/// assert!(identify("abc").is_err());
/// # Ok::<(), eanid::BarcodeError>(())
/// ```
///
/// # Errors
///
/// Returns [`BarcodeError::InvalidFormat`] for empty or non-digit input.
pub fn identify(code: &str) -> Result<BarcodeRecord> {
    BarcodeIdentifier::new().identify(code)
}

/// Validate a code with the default configuration.
///
/// See [`BarcodeIdentifier::validate`].
///
/// # Errors
///
/// Returns an error if the code is malformed, of unsupported length, or
/// carries a wrong check digit.
pub fn validate(code: &str) -> Result<BarcodeRecord> {
    BarcodeIdentifier::new().validate(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13_layout() {
        let record = identify("4006381333931").unwrap();
        assert_eq!(record.symbology, Symbology::Ean13);
        let names: Vec<_> = record.fields.keys().copied().collect();
        assert_eq!(
            names,
            vec![
                FieldName::CountryCode,
                FieldName::ManufacturerCode,
                FieldName::ProductCode,
                FieldName::CheckDigit,
            ]
        );
        assert_eq!(record.field_value(FieldName::ManufacturerCode), Some("6381"));
        assert_eq!(record.field_value(FieldName::ProductCode), Some("33393"));
        assert_eq!(record.field_value(FieldName::CheckDigit), Some("1"));
    }

    #[test]
    fn test_layouts_cover_whole_code() {
        for symbology in Symbology::KNOWN {
            let specs = layout(symbology);
            assert_eq!(specs[0].start, 0);
            for pair in specs.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
            assert_eq!(Some(specs[specs.len() - 1].end), symbology.length());
        }
    }

    #[test]
    fn test_format_error_message() {
        match identify("12a4") {
            Err(BarcodeError::InvalidFormat(msg)) => {
                assert_eq!(msg, "non-digit character 'a' at position 2");
            },
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
        match identify("１２a") {
            Err(BarcodeError::InvalidFormat(msg)) => {
                assert_eq!(msg, "non-digit character '１' at position 0");
            },
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
        match identify("12é4") {
            Err(BarcodeError::InvalidFormat(msg)) => {
                assert_eq!(msg, "non-digit character 'é' at position 2");
            },
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
        match identify("") {
            Err(BarcodeError::InvalidFormat(msg)) => assert_eq!(msg, "empty input"),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_permissive_unknown() {
        let identifier = BarcodeIdentifier::with_config(IdentifyConfig::permissive());
        let record = identifier.identify("abc").unwrap();
        assert_eq!(record.symbology, Symbology::Unknown);
        assert!(record.fields.is_empty());
        assert!(record.is_valid);
    }

    #[test]
    fn test_permissive_non_digit_of_supported_length() {
        let identifier = BarcodeIdentifier::with_config(IdentifyConfig::permissive());
        let record = identifier.identify("400638133393X").unwrap();
        assert_eq!(record.symbology, Symbology::Unknown);
        assert!(record.is_valid);
    }

    #[test]
    fn test_validate_ignores_permissive_policy() {
        let identifier = BarcodeIdentifier::with_config(IdentifyConfig::permissive());
        assert!(matches!(
            identifier.validate("abc"),
            Err(BarcodeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_gtin14_not_verified_by_default() {
        let record = identify("00012345600019").unwrap();
        assert_eq!(record.symbology, Symbology::Gtin14);
        assert!(record.is_valid);
        assert!(!record.check_applied());
    }

    #[test]
    fn test_gtin14_verified_when_configured() {
        let identifier = BarcodeIdentifier::with_config(IdentifyConfig {
            validate_gtin14: true,
            ..Default::default()
        });
        assert!(identifier.identify("00012345600012").unwrap().is_valid);
        assert!(!identifier.identify("00012345600019").unwrap().is_valid);
    }
}
