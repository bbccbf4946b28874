//! # bazar-store: In-Memory Entity Store for Bazar POS
//!
//! Owns the four domain collections — products, variants, cart, sales —
//! and every state transition over them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Presentation (inventory/sales/reports)              │
//! └──────────────────────────────┬──────────────────────────────────────┘
//!                                │ typed API, synchronous
//! ┌──────────────────────────────▼──────────────────────────────────────┐
//! │                   ★ bazar-store (THIS CRATE) ★                      │
//! │                                                                     │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐      │
//! │   │   store   │  │   cart    │  │ checkout  │  │  reports  │      │
//! │   │  add/upd/ │  │  assemble │  │ finalize  │  │  derived  │      │
//! │   │  delete   │  │  + stock  │  │  (atomic) │  │  on read  │      │
//! │   │  product  │  │   check   │  │           │  │           │      │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘      │
//! └──────────────────────────────┬──────────────────────────────────────┘
//!                                │
//! ┌──────────────────────────────▼──────────────────────────────────────┐
//! │              bazar-core (types, money, pricing, errors)             │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Entry Points
//! - [`EntityStore::add_product`] / [`EntityStore::update_product`] /
//!   [`EntityStore::delete_product`]
//! - [`EntityStore::add_to_cart`] / [`EntityStore::remove_from_cart`]
//! - [`EntityStore::finalize_sale`]
//!
//! Each is synchronous, takes `&mut self`, and returns either the
//! created/affected records or a typed [`DomainError`]. A failed call
//! leaves every collection exactly as it was.
//!
//! [`DomainError`]: bazar_core::DomainError

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod reports;
pub mod store;

#[cfg(test)]
pub(crate) mod testutil;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use reports::{InventorySummaryRow, SalesSummary};
pub use store::EntityStore;

// Callers need the domain vocabulary alongside the store.
pub use bazar_core::{
    calculate_prices, CalculatedPrices, DomainError, DomainResult, Money, PriceType, PricingRules,
    ProductDraft, ProductMaster, ProductVariant, SaleItem, SaleOrder, ValidationError,
    VariantDraft, VariantInput,
};

// =============================================================================
// End-to-End Scenario Tests
// =============================================================================
