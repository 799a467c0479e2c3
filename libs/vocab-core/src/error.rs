//! Error types for vocab-core.

use thiserror::Error;

/// Errors raised by a key-value store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to serialize value for key {key}: {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from replacing the active word list with an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no valid word entries found in upload")]
    NoValidEntries,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from driving a quiz session out of order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no card has been presented")]
    NoCardPresented,

    #[error("session is already complete")]
    Complete,
}
