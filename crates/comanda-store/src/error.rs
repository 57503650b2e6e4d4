//! # Store Error Types
//!
//! Error types for flat-file store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / csv::Error / bad cell values                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file name and row context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller displays the message, or load_or_default() downgrades a       │
//! │  Malformed store to an empty collection with a warning                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal. A failed operation either never started writing
//! or was replaced atomically, so prior persisted state survives intact.

use comanda_core::CoreError;
use thiserror::Error;

/// Flat-file store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file system failure (permissions, disk full, ...).
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A store file exists but its contents do not parse.
    ///
    /// ## When This Occurs
    /// - Hand-edited rows with bad numbers or timestamps
    /// - A truncated download restored over a store file
    /// - Unknown status/method tokens
    ///
    /// Recoverable: `load_or_default` logs it and carries on with an
    /// empty collection so the operator can keep taking orders.
    #[error("malformed store file {file}: {detail}")]
    Malformed { file: String, detail: String },

    /// A domain rule rejected the operation mid read-modify-write.
    ///
    /// ## When This Occurs
    /// - `update_status` against an id the store does not have
    /// - `open_day` with a negative float
    #[error(transparent)]
    Domain(#[from] CoreError),
}

impl StoreError {
    /// Creates a Malformed error carrying the offending file's name.
    pub fn malformed(file: impl Into<String>, detail: impl Into<String>) -> Self {
        StoreError::Malformed {
            file: file.into(),
            detail: detail.into(),
        }
    }
}

/// A persisted rename that failed hands back the underlying I/O error.
impl From<tempfile::PersistError> for StoreError {
    fn from(err: tempfile::PersistError) -> Self {
        StoreError::Io(err.error)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_the_file() {
        let err = StoreError::malformed("orders.csv", "row 3: invalid money amount");
        assert_eq!(
            err.to_string(),
            "malformed store file orders.csv: row 3: invalid money amount"
        );
    }

    #[test]
    fn test_domain_error_passes_through() {
        let err: StoreError = CoreError::OrderNotFound(9).into();
        assert_eq!(err.to_string(), "order not found: 9");
    }
}
