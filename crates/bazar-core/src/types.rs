//! # Domain Types
//!
//! Core domain types used throughout Bazar POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌────────────────┐  │
//! │  │  ProductMaster   │   │  ProductVariant  │   │   SaleOrder    │  │
//! │  │  ──────────────  │   │  ──────────────  │   │  ────────────  │  │
//! │  │  id (UUID)       │◄──┤ product_master_id│   │  id (UUID)     │  │
//! │  │  name, category  │   │  size_label      │   │  items (frozen)│  │
//! │  │  purchase_price  │   │  quantity ≥ 0    │   │  profit        │  │
//! │  └──────────────────┘   └──────────────────┘   └────────────────┘  │
//! │                                                                     │
//! │  A SaleItem references both a variant and its parent product by    │
//! │  id, and snapshots the charged price and cost basis at the moment  │
//! │  it enters the cart.                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Model
//! Variants carry a `product_master_id` back-reference: they are stored
//! independently but logically scoped to exactly one product. Deleting a
//! product cascades into its variants and any cart lines touching them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Master
// =============================================================================

/// A product record with descriptive attributes.
///
/// Size/stock detail lives on [`ProductVariant`], one per size label.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductMaster {
    /// Unique identifier (UUID v4), minted by the store.
    pub id: String,

    /// Display name shown to the cashier.
    pub name: String,

    /// Top-level category (e.g. "Menswear").
    pub category: String,

    /// Subcategory within the category (e.g. "Shirts").
    pub subcategory: String,

    /// Image references for the presentation layer. Opaque here.
    pub images: Vec<String>,

    /// When this stock was purchased from the supplier.
    #[ts(as = "String")]
    pub purchase_date: DateTime<Utc>,

    /// Per-unit purchase price (cost basis before adjustment).
    pub purchase_price: Money,

    /// Color of this product line.
    pub color: String,

    /// Optional free-form description.
    pub description: Option<String>,
}

/// Attributes for a product that does not exist yet.
///
/// The store mints the `id`, so callers cannot invent or reuse one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub images: Vec<String>,
    #[ts(as = "String")]
    pub purchase_date: DateTime<Utc>,
    pub purchase_price: Money,
    pub color: String,
    pub description: Option<String>,
}

impl ProductDraft {
    /// Promotes the draft to a full record under a freshly minted id.
    pub fn into_product(self, id: String) -> ProductMaster {
        ProductMaster {
            id,
            name: self.name,
            category: self.category,
            subcategory: self.subcategory,
            images: self.images,
            purchase_date: self.purchase_date,
            purchase_price: self.purchase_price,
            color: self.color,
            description: self.description,
        }
    }
}

// =============================================================================
// Product Variant
// =============================================================================

/// A size/SKU instance of a product with its own stock count.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductVariant {
    /// Unique identifier (UUID v4), minted by the store.
    pub id: String,

    /// The product this variant belongs to (weak back-reference).
    pub product_master_id: String,

    /// Size label (e.g. "M", "42", "One Size").
    pub size_label: String,

    /// Quantity on hand. Never negative.
    pub quantity: i64,
}

/// A variant that has not been persisted yet (no id, no parent).
///
/// The store stamps both when the product is created or updated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VariantDraft {
    pub size_label: String,
    pub quantity: i64,
}

/// One entry in the finalized variant list handed to a product update.
///
/// This is the tagged replacement for the old "temporary id prefix"
/// convention: a draft never carries an id, so the two cases cannot be
/// confused.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariantInput {
    /// A brand-new variant; the store mints its id.
    Draft(VariantDraft),
    /// An already-persisted variant, kept under its existing id.
    Existing(ProductVariant),
}

// =============================================================================
// Price Type
// =============================================================================

/// Which price tier the cashier selected for a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    /// Full list price.
    Selling,
    /// Storewide discount tier.
    GeneralDiscount,
    /// Negotiated/special customer discount tier.
    SpecialDiscount,
}

// =============================================================================
// Calculated Prices
// =============================================================================

/// The four figures the pricing calculator derives for a variant.
///
/// Pure output: same inputs always produce the same four numbers, and
/// `adjusted_purchase_price <= selling_price` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatedPrices {
    pub selling_price: Money,
    pub general_discount_price: Money,
    pub special_discount_price: Money,
    pub adjusted_purchase_price: Money,
}

impl CalculatedPrices {
    /// Returns the unit price for the selected tier.
    pub fn price_for(&self, price_type: PriceType) -> Money {
        match price_type {
            PriceType::Selling => self.selling_price,
            PriceType::GeneralDiscount => self.general_discount_price,
            PriceType::SpecialDiscount => self.special_discount_price,
        }
    }
}

// =============================================================================
// Sale Item
// =============================================================================

/// A line in the cart or in a finalized order.
///
/// Uses the snapshot pattern: the charged unit price and the adjusted
/// purchase price are frozen when the line is created, so later product
/// or pricing edits never alter a pending line or a historical order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleItem {
    pub id: String,
    pub product_variant_id: String,
    pub product_master_id: String,
    /// Units requested.
    pub quantity: i64,
    /// Unit price charged, frozen at the moment of cart-add.
    pub unit_price_at_time_of_sale: Money,
    /// Which tier the unit price came from.
    pub unit_price_selected_type: PriceType,
    /// Cost basis per unit, frozen alongside the price.
    pub adjusted_purchase_price: Money,
}

impl SaleItem {
    /// Line revenue: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price_at_time_of_sale.multiply_quantity(self.quantity)
    }

    /// Line profit: (unit price − cost basis) × quantity.
    #[inline]
    pub fn line_profit(&self) -> Money {
        (self.unit_price_at_time_of_sale - self.adjusted_purchase_price)
            .multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Sale Order
// =============================================================================

/// An immutable record of a completed transaction.
///
/// `items` is a frozen copy of the cart at finalization; nothing in the
/// store mutates an order after it is appended to the sales collection.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleOrder {
    pub id: String,
    pub items: Vec<SaleItem>,
    /// What the customer actually paid. May differ from the sum of list
    /// prices (rounding, negotiated totals).
    pub final_paid_amount: Money,
    #[ts(as = "String")]
    pub sale_date: DateTime<Utc>,
    /// Σ (unit price − adjusted purchase price) × quantity over items.
    pub profit: Money,
}

impl SaleOrder {
    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: i64, cost: i64, qty: i64) -> SaleItem {
        SaleItem {
            id: "si1".to_string(),
            product_variant_id: "pv1".to_string(),
            product_master_id: "pm1".to_string(),
            quantity: qty,
            unit_price_at_time_of_sale: Money::from_cents(price),
            unit_price_selected_type: PriceType::Selling,
            adjusted_purchase_price: Money::from_cents(cost),
        }
    }

    #[test]
    fn test_line_total_and_profit() {
        let line = item(6000, 4200, 3);
        assert_eq!(line.line_total().cents(), 18000);
        assert_eq!(line.line_profit().cents(), (6000 - 4200) * 3);
    }

    #[test]
    fn test_price_for_tier() {
        let prices = CalculatedPrices {
            selling_price: Money::from_cents(6000),
            general_discount_price: Money::from_cents(5400),
            special_discount_price: Money::from_cents(4800),
            adjusted_purchase_price: Money::from_cents(4200),
        };
        assert_eq!(prices.price_for(PriceType::Selling).cents(), 6000);
        assert_eq!(prices.price_for(PriceType::GeneralDiscount).cents(), 5400);
        assert_eq!(prices.price_for(PriceType::SpecialDiscount).cents(), 4800);
    }

    #[test]
    fn test_variant_input_tags_are_distinct() {
        let draft = VariantInput::Draft(VariantDraft {
            size_label: "M".to_string(),
            quantity: 10,
        });
        assert!(matches!(draft, VariantInput::Draft(_)));

        let existing = VariantInput::Existing(ProductVariant {
            id: "pv1".to_string(),
            product_master_id: "pm1".to_string(),
            size_label: "L".to_string(),
            quantity: 4,
        });
        assert!(matches!(existing, VariantInput::Existing(_)));
    }
}
