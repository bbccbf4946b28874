//! # Error Types
//!
//! Domain-specific error types for bazar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  bazar-core errors (this file)                                      │
//! │  ├── DomainError      - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  Flow: ValidationError → DomainError → caller (presentation layer)  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (size label, id, counts)
//! 3. Errors are enum variants, never String
//! 4. A failed operation leaves no partial mutation behind

use thiserror::Error;

// =============================================================================
// Domain Error
// =============================================================================

/// Business rule violations surfaced by store operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A mutation targeted an id that does not exist.
    ///
    /// The store runs in strict mode: updating or deleting a missing
    /// product (or referencing a missing variant or cart line) is an
    /// error, never a silent no-op.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Requested quantity exceeds the variant's quantity on hand.
    ///
    /// Raised at cart-add time and re-raised at finalize time if stock
    /// was depleted in between.
    #[error("Insufficient stock for size {size_label}: available {available}, requested {requested}")]
    InsufficientStock {
        size_label: String,
        available: i64,
        requested: i64,
    },

    /// Sale finalization attempted with no cart lines.
    #[error("Cannot finalize sale: cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet structural requirements.
/// Used for early validation before any collection is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Duplicate value where uniqueness is required.
    #[error("{field} '{value}' appears more than once")]
    Duplicate { field: &'static str, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DomainError.
pub type DomainResult<T> = Result<T, DomainError>;

// =============================================================================
// Unit Tests
// =============================================================================
