//! CSV export of barcode records.
//!
//! Produces one row per field with columns:
//! `code`, `symbology`, `is_valid`, `field`, `value`, `label`.
//! A record without fields (symbology `Unknown`) produces a single row whose
//! field columns are empty, so every input code shows up in the export.
//!
//! # Examples
//!
//! ```
//! use eanid::{csv, identify};
//!
//! let record = identify("96385074")?;
//! let text = csv::records_to_csv(&[record])?;
//! assert!(text.starts_with("code,symbology,is_valid,field,value,label\n"));
//! assert!(text.contains("96385074,EAN-8,true,product_code,38507,\n"));
//! # Ok::<(), eanid::BarcodeError>(())
//! ```

use std::io::Write;

use crate::error::{BarcodeError, Result};
use crate::record::BarcodeRecord;

const HEADER: [&str; 6] = ["code", "symbology", "is_valid", "field", "value", "label"];

/// Write records as CSV to any writer.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_csv<W: Write>(writer: W, records: &[BarcodeRecord]) -> Result<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for record in records {
        let symbology = record.symbology.name();
        let is_valid = if record.is_valid { "true" } else { "false" };

        if record.fields.is_empty() {
            csv_writer.write_record([record.code.as_str(), symbology, is_valid, "", "", ""])?;
            continue;
        }

        for (name, field) in &record.fields {
            csv_writer.write_record([
                record.code.as_str(),
                symbology,
                is_valid,
                name.as_str(),
                field.value.as_str(),
                field.label.as_deref().unwrap_or(""),
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Convert records to a CSV string.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn records_to_csv(records: &[BarcodeRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    String::from_utf8(buffer).map_err(|e| BarcodeError::Serialization(e.to_string()))
}

/// Convert a single record to a CSV string.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn record_to_csv(record: &BarcodeRecord) -> Result<String> {
    records_to_csv(std::slice::from_ref(record))
}
