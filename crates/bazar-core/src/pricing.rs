//! # Pricing Calculator
//!
//! Derives the four price figures for a variant from its base purchase
//! price and the configured markup/discount rules.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  purchase_price ($40.00)                                            │
//! │       │                                                             │
//! │       ├── + markup_bps (50%) ──────────► selling_price      $60.00  │
//! │       │        │                                                    │
//! │       │        ├── − general_discount_bps (10%)                     │
//! │       │        │            └──────────► general_discount   $54.00  │
//! │       │        │                                                    │
//! │       │        └── − special_discount_bps (20%)                     │
//! │       │                     └──────────► special_discount   $48.00  │
//! │       │                                                             │
//! │       └── + purchase_adjustment_bps (5%)                            │
//! │                └── min(selling) ───────► adjusted_purchase  $42.00  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator is pure: no clock, no state, no I/O. Identical inputs
//! always yield identical outputs, and the clamp at the end guarantees
//! `adjusted_purchase_price <= selling_price` for any rule set.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::CalculatedPrices;

// =============================================================================
// Pricing Rules
// =============================================================================

/// Markup and discount rates, all in basis points (1 bps = 0.01%).
///
/// Rules are configuration, not state: the store holds one rule set and
/// applies it whenever a price snapshot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingRules {
    /// Markup over purchase price that yields the selling price.
    pub markup_bps: u32,
    /// Storewide discount off the selling price.
    pub general_discount_bps: u32,
    /// Special/negotiated discount off the selling price.
    pub special_discount_bps: u32,
    /// Overhead loading on the purchase price (freight, handling) that
    /// yields the cost basis used for profit.
    pub purchase_adjustment_bps: u32,
}

impl Default for PricingRules {
    /// House defaults: 50% markup, 10%/20% discount tiers, 5% overhead.
    fn default() -> Self {
        PricingRules {
            markup_bps: 5000,
            general_discount_bps: 1000,
            special_discount_bps: 2000,
            purchase_adjustment_bps: 500,
        }
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes the four price figures for one unit.
///
/// ## Invariant
/// `adjusted_purchase_price <= selling_price`, enforced by clamping the
/// adjusted cost to the selling price. A rule set with a huge overhead
/// rate and a tiny markup therefore reports zero margin rather than a
/// cost basis above the price.
pub fn calculate_prices(purchase_price: Money, rules: &PricingRules) -> CalculatedPrices {
    let selling_price = purchase_price.apply_markup_bps(rules.markup_bps);
    let general_discount_price = selling_price.apply_discount_bps(rules.general_discount_bps);
    let special_discount_price = selling_price.apply_discount_bps(rules.special_discount_bps);

    let adjusted_purchase_price = purchase_price
        .apply_markup_bps(rules.purchase_adjustment_bps)
        .min_of(selling_price);

    CalculatedPrices {
        selling_price,
        general_discount_price,
        special_discount_price,
        adjusted_purchase_price,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
