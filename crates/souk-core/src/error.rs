//! # Error Types
//!
//! Domain-specific error types for souk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  souk-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                       │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  souk-store errors (separate crate)                                 │
//! │  └── StoreError       - Key-value store read/write failures         │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → operator message  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (vendor id, field name)
//! 3. Errors are enum variants, never String
//! 4. A failed validation leaves the draft open for correction; it never
//!    mutates stored state

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// The taxonomy is deliberately narrow: posting either passes validation or
/// it doesn't, and ledger updates can miss their vendor. Everything else in
/// this core is a total function.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Vendor cannot be found in the ledger.
    ///
    /// ## When This Occurs
    /// - Applying an invoice remainder against an id that is not in the
    ///   vendors collection (a dangling `vendor_id` on a draft)
    #[error("Vendor not found: {0}")]
    VendorNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These block an operation before any state changes. Numeric *coercions*
/// are not validation errors: a garbled amount becomes zero (see
/// `Money::parse_or_zero`), only structurally unpostable drafts end up here.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A collection that must have at least one element is empty.
    #[error("{field} must contain at least one entry")]
    EmptyCollection { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
