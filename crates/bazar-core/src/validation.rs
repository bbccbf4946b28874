//! # Validation Module
//!
//! Input validation utilities for Bazar POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Presentation (TypeScript)                                 │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (Rust)                                        │
//! │  ├── Structural checks before any collection is touched             │
//! │  └── The store trusts nothing it did not validate here              │
//! │                                                                     │
//! │  Validation happens up front so failed operations never leave a     │
//! │  partial mutation behind.                                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_LINE_QUANTITY, MAX_NAME_LEN, MAX_SIZE_LABEL_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a variant size label.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 20 characters ("M", "42", "One Size")
pub fn validate_size_label(label: &str) -> ValidationResult<()> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required { field: "size_label" });
    }

    if label.len() > MAX_SIZE_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: "size_label",
            max: MAX_SIZE_LABEL_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity (quantity on hand).
///
/// ## Rules
/// - Must be non-negative (zero means sold out, which is valid stock)
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a requested cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (catches fat-finger entries like
///   1000 instead of 10 before the stock check even runs)
pub fn validate_requested_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a purchase price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: promotional/free stock)
pub fn validate_purchase_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "purchase_price",
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates the amount paid at finalization.
///
/// ## Rules
/// - Must be non-negative. It may legitimately differ from the sum of
///   list prices (rounding, negotiated totals), so no equality check.
pub fn validate_paid_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "final_paid_amount",
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
