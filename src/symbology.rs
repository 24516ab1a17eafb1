//! Barcode symbologies recognised by digit count.
//!
//! | Digits | Symbology |
//! |--------|-----------|
//! | 8      | EAN-8     |
//! | 12     | UPC-A     |
//! | 13     | EAN-13    |
//! | 14     | GTIN-14   |
//!
//! Any other length is [`Symbology::Unknown`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The barcode standard a code belongs to, inferred from its length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Symbology {
    /// 8-digit European Article Number
    #[serde(rename = "EAN-8")]
    Ean8,
    /// 13-digit European/International Article Number
    #[serde(rename = "EAN-13")]
    Ean13,
    /// 12-digit Universal Product Code, version A
    #[serde(rename = "UPC-A")]
    UpcA,
    /// 14-digit Global Trade Item Number used on trade units
    #[serde(rename = "GTIN-14")]
    Gtin14,
    /// Length outside the supported set
    #[default]
    Unknown,
}

impl Symbology {
    /// All known symbologies, shortest first.
    pub const KNOWN: [Symbology; 4] = [
        Symbology::Ean8,
        Symbology::UpcA,
        Symbology::Ean13,
        Symbology::Gtin14,
    ];

    /// Classify a code by its digit count.
    ///
    /// # Examples
    ///
    /// ```
    /// use eanid::Symbology;
    ///
    /// assert_eq!(Symbology::from_length(13), Symbology::Ean13);
    /// assert_eq!(Symbology::from_length(10), Symbology::Unknown);
    /// ```
    #[must_use]
    pub const fn from_length(length: usize) -> Self {
        match length {
            8 => Symbology::Ean8,
            12 => Symbology::UpcA,
            13 => Symbology::Ean13,
            14 => Symbology::Gtin14,
            _ => Symbology::Unknown,
        }
    }

    /// Digit count of codes in this symbology, `None` for `Unknown`.
    #[must_use]
    pub const fn length(&self) -> Option<usize> {
        match self {
            Symbology::Ean8 => Some(8),
            Symbology::UpcA => Some(12),
            Symbology::Ean13 => Some(13),
            Symbology::Gtin14 => Some(14),
            Symbology::Unknown => None,
        }
    }

    /// Whether the check digit of this symbology is verified by default.
    ///
    /// GTIN-14 is reported as not applicable unless
    /// [`IdentifyConfig::validate_gtin14`](crate::IdentifyConfig::validate_gtin14) is set.
    #[must_use]
    pub const fn verifies_check_digit(&self) -> bool {
        matches!(self, Symbology::Ean8 | Symbology::UpcA | Symbology::Ean13)
    }

    /// Display name as printed in GS1 literature.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Symbology::Ean8 => "EAN-8",
            Symbology::Ean13 => "EAN-13",
            Symbology::UpcA => "UPC-A",
            Symbology::Gtin14 => "GTIN-14",
            Symbology::Unknown => "Unknown",
        }
    }

    /// Parse a display name back into a symbology.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "EAN-8" => Some(Symbology::Ean8),
            "EAN-13" => Some(Symbology::Ean13),
            "UPC-A" => Some(Symbology::UpcA),
            "GTIN-14" => Some(Symbology::Gtin14),
            "Unknown" => Some(Symbology::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
