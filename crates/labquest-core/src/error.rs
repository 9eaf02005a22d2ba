//! Store boundary errors.
//!
//! The engine itself has no error type: every failure at the store
//! boundary is caught, logged, and degraded to an empty result. These
//! errors exist for store implementations and for callers that talk to
//! a store directly.

use thiserror::Error;

/// Errors produced by [`crate::store::ProgressionStore`] implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read/write store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse store JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to access data directory: {0}")]
    DataDir(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
