//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← Adds context and categorization         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Operator-facing message                                            │
//! │                                                                     │
//! │  CoreError (validation, ledger) passes through unchanged wrapped    │
//! │  in StoreError::Core so callers keep one error type per call.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The original system assumed localStorage never fails; a file on disk
//! can, so the Rust seam is honest about it.

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the store document failed.
    ///
    /// ## When This Occurs
    /// - Store file unreadable or directory missing
    /// - Disk full / permissions on write
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value did not parse as the expected shape.
    ///
    /// ## When This Occurs
    /// - Hand-edited store document
    /// - Collection written by an incompatible version
    #[error("Stored data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A domain rule rejected the operation (validation, unknown vendor).
    #[error(transparent)]
    Core(#[from] souk_core::CoreError),
}

impl From<souk_core::ValidationError> for StoreError {
    fn from(err: souk_core::ValidationError) -> Self {
        StoreError::Core(err.into())
    }
}

/// Result type for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
