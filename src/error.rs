use thiserror::Error;

use crate::fetch::FetchError;

/// Terminal failure kinds of the estimation pipeline. None of these are
/// retryable; the first stage that cannot proceed stops the whole run.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("no product identifier found in the URL")]
    IdentifierNotFound,
    #[error("product metadata lookup failed: {0}")]
    MetadataFetch(#[from] FetchError),
    #[error("product metadata contains no dimensions field")]
    DimensionsNotLocated,
    #[error("product dimensions text did not match the expected format")]
    DimensionsUnparsable,
}
