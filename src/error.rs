//! Error types for barcode operations.
//!
//! This module provides the [`BarcodeError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all barcode library operations.
///
/// Unsupported lengths are a soft case for [`identify`](crate::identify), which
/// reports them as [`Symbology::Unknown`](crate::Symbology::Unknown). Only
/// strict validation and the conversion helpers turn them into errors.
#[derive(Error, Debug)]
pub enum BarcodeError {
    /// The input is empty or contains characters other than ASCII digits.
    #[error("Invalid barcode format: {0}")]
    InvalidFormat(String),

    /// The digit count does not belong to any supported symbology.
    #[error("Unsupported barcode length: {length} digits")]
    UnsupportedLength {
        /// Number of digits in the rejected code
        length: usize,
    },

    /// The declared check digit does not match the computed one.
    #[error("Check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// Check digit computed from the body of the code
        expected: u8,
        /// Check digit carried by the code
        found: u8,
    },

    /// Error while encoding or decoding an exported record.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error from the underlying destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for BarcodeError {
    fn from(err: serde_json::Error) -> Self {
        BarcodeError::Serialization(err.to_string())
    }
}

impl From<::csv::Error> for BarcodeError {
    fn from(err: ::csv::Error) -> Self {
        BarcodeError::Serialization(err.to_string())
    }
}

/// Convenience type alias for [`std::result::Result`] with [`BarcodeError`].
pub type Result<T> = std::result::Result<T, BarcodeError>;
