//! JSON serialization and deserialization of barcode records.
//!
//! Records serialize with their fields in code order:
//!
//! ```json
//! {
//!   "code": "4006381333931",
//!   "symbology": "EAN-13",
//!   "fields": {
//!     "country_code": { "value": "400", "label": "Germany" },
//!     "manufacturer_code": { "value": "6381" },
//!     "product_code": { "value": "33393" },
//!     "check_digit": { "value": "1" }
//!   },
//!   "is_valid": true,
//!   "check": { "declared": 1, "computed": 1 }
//! }
//! ```
//!
//! Because every member of a record is derived from `code`, reading JSON
//! back identifies the code again instead of trusting the payload.

use serde_json::Value;

use crate::config::IdentifyConfig;
use crate::error::{BarcodeError, Result};
use crate::identifier::BarcodeIdentifier;
use crate::record::BarcodeRecord;
use crate::symbology::Symbology;

/// Convert a barcode record to JSON.
///
/// # Errors
///
/// Returns an error if the record cannot be converted to JSON.
pub fn record_to_json(record: &BarcodeRecord) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Convert a slice of barcode records to a JSON array.
///
/// # Errors
///
/// Returns an error if any record cannot be converted to JSON.
pub fn records_to_json(records: &[BarcodeRecord]) -> Result<Value> {
    records
        .iter()
        .map(record_to_json)
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Rebuild a barcode record from JSON with the default configuration.
///
/// Only `code` is required. The record is identified again; if the payload
/// names a `symbology`, it must agree with the one derived from the code. A
/// payload carrying a `check` member has its GTIN-14 check digit verified.
///
/// # Examples
///
/// ```
/// use eanid::json::json_to_record;
/// use eanid::Symbology;
/// use serde_json::json;
///
/// let record = json_to_record(&json!({ "code": "96385074" }))?;
/// assert_eq!(record.symbology, Symbology::Ean8);
/// # Ok::<(), eanid::BarcodeError>(())
/// ```
///
/// # Errors
///
/// Returns [`BarcodeError::InvalidFormat`] if `code` is not a digit string,
/// and [`BarcodeError::Serialization`] if `code` is missing or the declared
/// symbology disagrees with the code.
pub fn json_to_record(json: &Value) -> Result<BarcodeRecord> {
    json_to_record_with(json, &IdentifyConfig::default())
}

/// Rebuild a barcode record from JSON, identifying the code under `config`.
///
/// Use [`IdentifyConfig::permissive`] to read back records exported from a
/// permissive identifier.
///
/// # Errors
///
/// Same as [`json_to_record`], with the input policy taken from `config`.
pub fn json_to_record_with(json: &Value, config: &IdentifyConfig) -> Result<BarcodeRecord> {
    let code = json
        .get("code")
        .and_then(Value::as_str)
        .ok_or_else(|| BarcodeError::Serialization("Missing code".to_string()))?;

    let identifier = BarcodeIdentifier::with_config(IdentifyConfig {
        validate_gtin14: config.validate_gtin14
            || json.get("check").is_some_and(|c| !c.is_null()),
        ..*config
    });
    let record = identifier.identify(code)?;

    if let Some(declared) = json.get("symbology").and_then(Value::as_str) {
        let declared = Symbology::from_name(declared).ok_or_else(|| {
            BarcodeError::Serialization(format!("Unknown symbology {declared:?}"))
        })?;
        if declared != record.symbology {
            return Err(BarcodeError::Serialization(format!(
                "Symbology {declared} does not match {} code {code}",
                record.symbology
            )));
        }
    }

    Ok(record)
}

/// Rebuild barcode records from a JSON array.
///
/// # Errors
///
/// Returns an error if the value is not an array or any element fails
/// [`json_to_record`].
pub fn json_to_records(json: &Value) -> Result<Vec<BarcodeRecord>> {
    json.as_array()
        .ok_or_else(|| BarcodeError::Serialization("Expected JSON array".to_string()))?
        .iter()
        .map(json_to_record)
        .collect()
}
