use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the folio workspace.
///
/// The query surface is total over its input domain; the only failure modes
/// are malformed input and missing fixture records, so the taxonomy is small.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FolioError {
    /// Invalid input argument (e.g. an unsupported horizon token).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "recommendation for ZZZZ".
        what: String,
    },
}

impl FolioError {
    /// Helper: build an `InvalidArg` error from any message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}
