//! # bazar-core: Pure Domain Logic for Bazar POS
//!
//! This crate is the **heart** of Bazar POS. It contains all domain
//! logic as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Bazar POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 Presentation (TypeScript)                     │ │
//! │  │    Inventory screen ──► Sales screen ──► Reports screen      │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                 bazar-store (Entity Store)                    │ │
//! │  │    products • variants • cart • sales  +  mutations          │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               ★ bazar-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌────────────┐     │ │
//! │  │   │  types   │ │  money   │ │ pricing  │ │ validation │     │ │
//! │  │   │ Product  │ │  Money   │ │  rules   │ │   checks   │     │ │
//! │  │   │ SaleItem │ │ bps math │ │ 4 prices │ │            │     │ │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └────────────┘     │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS         │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductMaster, ProductVariant, SaleOrder, …)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Derives the four price figures for a variant
//! - [`error`] - Domain error types
//! - [`validation`] - Structural input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic - same input = same output
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazar_core::Money` instead of
// `use bazar_core::money::Money`

pub use error::{DomainError, DomainResult, ValidationError};
pub use money::Money;
pub use pricing::{calculate_prices, PricingRules};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single cart line.
///
/// Catches fat-finger entries (1000 instead of 10) before the stock
/// check runs. Could become per-store configuration later.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum product name length.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum variant size label length.
pub const MAX_SIZE_LABEL_LEN: usize = 20;
