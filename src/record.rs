//! Identified barcode records.
//!
//! A [`BarcodeRecord`] is derived from a digit string by
//! [`BarcodeIdentifier`](crate::BarcodeIdentifier). Nothing in it is
//! persisted: every member is a pure function of `code`.

use crate::check_digit::CheckDigit;
use crate::symbology::Symbology;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named sub-range of a barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    /// GS1 country or region prefix (EAN-8, EAN-13)
    CountryCode,
    /// UPC-A number system digit
    SystemDigit,
    /// GTIN-14 packaging indicator digit
    IndicatorDigit,
    /// Manufacturer code (EAN-13, UPC-A)
    ManufacturerCode,
    /// GS1 company prefix (GTIN-14)
    CompanyPrefix,
    /// Product code (EAN-8, EAN-13, UPC-A)
    ProductCode,
    /// Item reference (GTIN-14)
    ItemReference,
    /// Trailing check digit
    CheckDigit,
}

impl FieldName {
    /// Snake-case identifier used in exports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldName::CountryCode => "country_code",
            FieldName::SystemDigit => "system_digit",
            FieldName::IndicatorDigit => "indicator_digit",
            FieldName::ManufacturerCode => "manufacturer_code",
            FieldName::CompanyPrefix => "company_prefix",
            FieldName::ProductCode => "product_code",
            FieldName::ItemReference => "item_reference",
            FieldName::CheckDigit => "check_digit",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded field of a barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeField {
    /// Digits of the field as they appear in the code
    pub value: String,
    /// Meaning of the value, when a lookup table covers it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BarcodeField {
    /// Create a field without a label.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        BarcodeField {
            value: value.into(),
            label: None,
        }
    }

    /// Create a field with an optional label.
    #[must_use]
    pub fn labelled(value: impl Into<String>, label: Option<&str>) -> Self {
        BarcodeField {
            value: value.into(),
            label: label.map(str::to_string),
        }
    }
}

/// A barcode classified by symbology and split into its fields.
///
/// # Examples
///
/// ```
/// use eanid::{identify, FieldName, Symbology};
///
/// let record = identify("4006381333931")?;
/// assert_eq!(record.symbology, Symbology::Ean13);
/// assert_eq!(record.field_value(FieldName::CountryCode), Some("400"));
/// assert_eq!(record.country(), Some("Germany"));
/// assert!(record.is_valid);
/// # Ok::<(), eanid::BarcodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRecord {
    /// The digit string that was identified
    pub code: String,
    /// Symbology inferred from the digit count
    pub symbology: Symbology,
    /// Fields in the order they appear in the code; empty for `Unknown`
    pub fields: IndexMap<FieldName, BarcodeField>,
    /// Whether the check digit verifies; `true` when validation does not apply
    pub is_valid: bool,
    /// Declared and computed check digit, when validation applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<CheckDigit>,
}

impl BarcodeRecord {
    /// A record for a code whose symbology could not be determined.
    #[must_use]
    pub fn unknown(code: impl Into<String>) -> Self {
        BarcodeRecord {
            code: code.into(),
            symbology: Symbology::Unknown,
            fields: IndexMap::new(),
            is_valid: true,
            check: None,
        }
    }

    /// Whether the symbology was recognised.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.symbology != Symbology::Unknown
    }

    /// Whether the check digit was actually compared.
    #[must_use]
    pub fn check_applied(&self) -> bool {
        self.check.is_some()
    }

    /// Look up a field.
    #[must_use]
    pub fn field(&self, name: FieldName) -> Option<&BarcodeField> {
        self.fields.get(&name)
    }

    /// Digits of a field.
    #[must_use]
    pub fn field_value(&self, name: FieldName) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    /// Label of a field, if its value was found in a lookup table.
    #[must_use]
    pub fn field_label(&self, name: FieldName) -> Option<&str> {
        self.field(name).and_then(|f| f.label.as_deref())
    }

    /// Country or region named by the GS1 prefix.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.field_label(FieldName::CountryCode)
    }

    /// Declared check digit (last digit of the code).
    #[must_use]
    pub fn check_digit(&self) -> Option<u8> {
        self.field_value(FieldName::CheckDigit)
            .and_then(|v| v.parse().ok())
    }
}

impl fmt::Display for BarcodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbology, self.code)?;
        if !self.is_valid {
            write!(f, " (invalid check digit)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_record() {
        let record = BarcodeRecord::unknown("12345");
        assert!(!record.is_known());
        assert!(record.is_valid);
        assert!(record.fields.is_empty());
        assert!(!record.check_applied());
        assert_eq!(record.check_digit(), None);
    }

    #[test]
    fn test_field_accessors() {
        let mut record = BarcodeRecord::unknown("96385074");
        record.symbology = Symbology::Ean8;
        record
            .fields
            .insert(FieldName::CountryCode, BarcodeField::new("96"));
        record.fields.insert(
            FieldName::CheckDigit,
            BarcodeField::labelled("4", None),
        );

        assert_eq!(record.field_value(FieldName::CountryCode), Some("96"));
        assert_eq!(record.country(), None);
        assert_eq!(record.check_digit(), Some(4));
        assert_eq!(record.field(FieldName::ProductCode), None);
    }

    #[test]
    fn test_display() {
        let mut record = BarcodeRecord::unknown("036000291452");
        record.symbology = Symbology::UpcA;
        assert_eq!(record.to_string(), "UPC-A 036000291452");
        record.is_valid = false;
        assert_eq!(
            record.to_string(),
            "UPC-A 036000291452 (invalid check digit)"
        );
    }

    #[test]
    fn test_field_name_strings() {
        assert_eq!(FieldName::ManufacturerCode.as_str(), "manufacturer_code");
        assert_eq!(
            serde_json::to_string(&FieldName::ItemReference).unwrap(),
            "\"item_reference\""
        );
    }
}
