//! Parallel barcode identification using Rayon.
//!
//! Catalogue imports hand over thousands of scanned codes at once. Each code
//! is identified independently, so the work is spread over Rayon's
//! work-stealing thread pool. Results always come back in input order.
//!
//! # Examples
//!
//! ```
//! use eanid::batch::identify_batch_parallel;
//! use eanid::IdentifyConfig;
//!
//! let codes = ["4006381333931", "036000291452", "96385074"];
//! let records = identify_batch_parallel(&codes, &IdentifyConfig::default())?;
//! assert_eq!(records.len(), 3);
//! assert!(records.iter().all(|r| r.is_valid));
//! # Ok::<(), eanid::BarcodeError>(())
//! ```

use rayon::prelude::*;

use crate::config::IdentifyConfig;
use crate::error::Result;
use crate::identifier::BarcodeIdentifier;
use crate::record::BarcodeRecord;

/// Identify a batch of codes in parallel.
///
/// # Errors
///
/// Returns the error of the earliest failing code in input order if any
/// code fails to identify under the given configuration.
pub fn identify_batch_parallel<S>(codes: &[S], config: &IdentifyConfig) -> Result<Vec<BarcodeRecord>>
where
    S: AsRef<str> + Sync,
{
    let identifier = BarcodeIdentifier::with_config(*config);
    let results: Vec<Result<BarcodeRecord>> = codes
        .par_iter()
        .map(|code| identifier.identify(code.as_ref()))
        .collect();
    results.into_iter().collect()
}

/// Identify at most `limit` codes from the front of a batch in parallel.
///
/// # Errors
///
/// Same as [`identify_batch_parallel`].
pub fn identify_batch_parallel_limited<S>(
    codes: &[S],
    config: &IdentifyConfig,
    limit: usize,
) -> Result<Vec<BarcodeRecord>>
where
    S: AsRef<str> + Sync,
{
    let end = limit.min(codes.len());
    identify_batch_parallel(&codes[..end], config)
}

/// Identify a batch of codes in parallel, keeping one result per input.
///
/// Failed rows are logged at `warn` level with their index.
pub fn identify_batch_lenient<S>(codes: &[S], config: &IdentifyConfig) -> Vec<Result<BarcodeRecord>>
where
    S: AsRef<str> + Sync,
{
    let identifier = BarcodeIdentifier::with_config(*config);
    codes
        .par_iter()
        .enumerate()
        .map(|(idx, code)| {
            let result = identifier.identify(code.as_ref());
            if let Err(err) = &result {
                tracing::warn!(index = idx, code = code.as_ref(), error = %err, "rejected barcode");
            }
            result
        })
        .collect()
}
