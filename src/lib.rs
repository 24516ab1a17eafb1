#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # eanid: retail barcode identification
//!
//! Classifies numeric barcodes as EAN-8, EAN-13, UPC-A or GTIN-14 from their
//! length, splits them into their semantic fields, and verifies the GS1
//! modulo-10 check digit.
//!
//! ## Quick Start
//!
//! ```
//! use eanid::{identify, FieldName, Symbology};
//!
//! let record = identify("4006381333931")?;
//! assert_eq!(record.symbology, Symbology::Ean13);
//! assert_eq!(record.country(), Some("Germany"));
//! assert_eq!(record.field_value(FieldName::ManufacturerCode), Some("6381"));
//! assert!(record.is_valid);
//!
//! // A mistyped check digit is caught
//! assert!(!identify("4006381333932")?.is_valid);
//! # Ok::<(), eanid::BarcodeError>(())
//! ```
//!
//! ## Strict validation
//!
//! ```
//! use eanid::{validate, BarcodeError};
//!
//! assert!(validate("036000291452").is_ok());
//! assert!(matches!(
//!     validate("036000291453"),
//!     Err(BarcodeError::CheckDigitMismatch { expected: 2, found: 3 })
//! ));
//! assert!(matches!(
//!     validate("12345"),
//!     Err(BarcodeError::UnsupportedLength { length: 5 })
//! ));
//! ```
//!
//! ## Modules
//!
//! - [`identifier`] — Classification, field decomposition and validation
//! - [`symbology`] — Supported barcode standards
//! - [`record`] — Identified record structures (`BarcodeRecord`, `BarcodeField`)
//! - [`check_digit`] — GS1 modulo-10 check digits
//! - [`lookup`] — Static GS1 prefix and digit meaning tables
//! - [`config`] — Identification options
//! - [`conversion`] — Normalisation and GTIN conversions
//! - [`batch`] — Parallel identification of many codes
//! - [`json`] — JSON export and import
//! - [`csv`] — CSV export
//! - [`error`] — Error types and result type

pub mod batch;
pub mod check_digit;
pub mod config;
pub mod conversion;
pub mod csv;
pub mod error;
pub mod identifier;
pub mod json;
pub mod lookup;
pub mod record;
pub mod symbology;

pub use check_digit::CheckDigit;
pub use config::{IdentifyConfig, InputPolicy};
pub use error::{BarcodeError, Result};
pub use identifier::{identify, validate, BarcodeIdentifier};
pub use lookup::{DigitTable, RangeEntry, RangeLookup, RangeTable};
pub use record::{BarcodeField, BarcodeRecord, FieldName};
pub use symbology::Symbology;
