//! Configuration options for barcode identification.
//!
//! This module provides the [`IdentifyConfig`] struct which controls how input
//! strings are screened before classification and which check digits are
//! verified.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How input that is not a plain digit string is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Empty or non-digit input fails with
    /// [`BarcodeError::InvalidFormat`](crate::BarcodeError::InvalidFormat)
    #[default]
    Strict,
    /// Empty or non-digit input yields an `Unknown` record with
    /// `is_valid = true`
    Permissive,
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Permissive => write!(f, "permissive"),
        }
    }
}

/// Configuration for [`BarcodeIdentifier`](crate::BarcodeIdentifier).
///
/// # Examples
///
/// ```
/// use eanid::{IdentifyConfig, InputPolicy};
///
/// // Default configuration (strict input, GTIN-14 check digit not verified)
/// let config = IdentifyConfig::default();
/// assert_eq!(config.input_policy, InputPolicy::Strict);
///
/// // Accept hand-typed codes such as "400-6381-33393-1"
/// let config = IdentifyConfig {
///     strip_separators: true,
///     ..Default::default()
/// };
/// assert!(config.strip_separators);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifyConfig {
    /// Treatment of empty or non-digit input.
    pub input_policy: InputPolicy,

    /// Remove spaces and hyphens before classification.
    ///
    /// The record's `code` holds the stripped digits.
    pub strip_separators: bool,

    /// Verify the GTIN-14 check digit.
    ///
    /// When false (default), GTIN-14 records report `is_valid = true` and
    /// carry no check digit comparison.
    pub validate_gtin14: bool,
}

impl IdentifyConfig {
    /// Configuration that accepts any input without failing.
    #[must_use]
    pub fn permissive() -> Self {
        IdentifyConfig {
            input_policy: InputPolicy::Permissive,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IdentifyConfig::default();
        assert_eq!(config.input_policy, InputPolicy::Strict);
        assert!(!config.strip_separators);
        assert!(!config.validate_gtin14);
    }

    #[test]
    fn test_permissive() {
        assert_eq!(
            IdentifyConfig::permissive().input_policy,
            InputPolicy::Permissive
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: IdentifyConfig =
            serde_json::from_str(r#"{"input_policy": "permissive"}"#).unwrap();
        assert_eq!(config.input_policy, InputPolicy::Permissive);
        assert!(!config.validate_gtin14);
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(InputPolicy::Strict.to_string(), "strict");
        assert_eq!(InputPolicy::Permissive.to_string(), "permissive");
    }
}
