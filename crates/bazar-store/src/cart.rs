//! # Cart Assembler
//!
//! Builds and validates cart lines against current variant stock.
//!
//! ## Cart Line Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Line Lifecycle                            │
//! │                                                                     │
//! │  add_to_cart(variant, qty, tier)                                    │
//! │       │                                                             │
//! │       ├── qty <= 0 or over cap? ──► Validation error                │
//! │       ├── variant missing?      ──► NotFound                        │
//! │       ├── qty > stock on hand?  ──► InsufficientStock               │
//! │       │                             (reject, never clamp)           │
//! │       ▼                                                             │
//! │  SaleItem appended with fresh id and prices SNAPSHOTTED from the    │
//! │  pricing calculator at this moment. Later price or product edits    │
//! │  never reach a pending line.                                        │
//! │       │                                                             │
//! │       ├── remove_from_cart(line_id) ──► line gone, stock untouched  │
//! │       └── finalize_sale (checkout.rs) ──► line becomes order history│
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock is NOT reserved by a cart line; it is only re-checked and
//! decremented at finalization.

use tracing::{debug, info};

use bazar_core::error::{DomainError, DomainResult};
use bazar_core::pricing::calculate_prices;
use bazar_core::types::{CalculatedPrices, PriceType, SaleItem};
use bazar_core::validation::validate_requested_quantity;

use crate::store::EntityStore;

impl EntityStore {
    /// Returns the current price figures for a variant's parent product.
    ///
    /// This is what the sales screen shows next to the tier selector;
    /// the same computation is snapshotted by [`add_to_cart`].
    ///
    /// [`add_to_cart`]: EntityStore::add_to_cart
    pub fn price_quote(&self, variant_id: &str) -> DomainResult<CalculatedPrices> {
        let variant = self
            .variants
            .iter()
            .find(|v| v.id == variant_id)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Variant",
                id: variant_id.to_string(),
            })?;

        let product = self
            .products
            .iter()
            .find(|p| p.id == variant.product_master_id)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Product",
                id: variant.product_master_id.clone(),
            })?;

        Ok(calculate_prices(product.purchase_price, &self.rules))
    }

    /// Appends a cart line for `quantity` units of a variant at the
    /// selected price tier.
    ///
    /// ## Rejections
    /// - `quantity <= 0` or over the per-line cap → `Validation`
    /// - unknown variant → `NotFound`
    /// - `quantity` over the variant's live stock → `InsufficientStock`
    ///   (the request is rejected outright, never silently clamped)
    ///
    /// ## Price Snapshot
    /// The unit price for the chosen tier and the adjusted purchase
    /// price are captured from the pricing calculator here and frozen
    /// on the line.
    ///
    /// Each successful call appends one new line with a fresh id, even
    /// for a variant already in the cart; finalization validates the
    /// aggregate.
    pub fn add_to_cart(
        &mut self,
        variant_id: &str,
        quantity: i64,
        price_type: PriceType,
    ) -> DomainResult<SaleItem> {
        debug!(variant_id = %variant_id, quantity = %quantity, ?price_type, "add_to_cart");

        validate_requested_quantity(quantity)?;

        let variant = self
            .variants
            .iter()
            .find(|v| v.id == variant_id)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Variant",
                id: variant_id.to_string(),
            })?;

        if quantity > variant.quantity {
            return Err(DomainError::InsufficientStock {
                size_label: variant.size_label.clone(),
                available: variant.quantity,
                requested: quantity,
            });
        }

        let prices = self.price_quote(variant_id)?;

        let line = SaleItem {
            id: Self::mint_id(),
            product_variant_id: variant.id.clone(),
            product_master_id: variant.product_master_id.clone(),
            quantity,
            unit_price_at_time_of_sale: prices.price_for(price_type),
            unit_price_selected_type: price_type,
            adjusted_purchase_price: prices.adjusted_purchase_price,
        };

        self.cart.push(line.clone());

        info!(line_id = %line.id, variant_id = %variant_id, quantity = %quantity, unit_price = %line.unit_price_at_time_of_sale, "Cart line added");

        Ok(line)
    }

    /// Removes a cart line by id. No other side effects: stock is not
    /// touched until finalization.
    pub fn remove_from_cart(&mut self, line_id: &str) -> DomainResult<()> {
        debug!(line_id = %line_id, "remove_from_cart");

        let before = self.cart.len();
        self.cart.retain(|line| line.id != line_id);

        if self.cart.len() == before {
            return Err(DomainError::NotFound {
                entity: "Cart line",
                id: line_id.to_string(),
            });
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{draft_variant, shirt_draft};
    use bazar_core::PricingRules;

    #[test]
    fn test_add_to_cart_appends_one_line_with_snapshot() {
        let mut store = EntityStore::default();
        let (product, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        let line = store
            .add_to_cart(&variants[0].id, 3, PriceType::Selling)
            .unwrap();

        assert_eq!(store.cart().len(), 1);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.product_master_id, product.id);
        assert_eq!(line.unit_price_selected_type, PriceType::Selling);

        // Snapshot matches the calculator for the current rules.
        let expected = calculate_prices(product.purchase_price, store.pricing_rules());
        assert_eq!(line.unit_price_at_time_of_sale, expected.selling_price);
        assert_eq!(line.adjusted_purchase_price, expected.adjusted_purchase_price);

        // Stock untouched until finalization.
        assert_eq!(store.variants()[0].quantity, 10);
    }

    #[test]
    fn test_add_to_cart_rejects_over_stock() {
        let mut store = EntityStore::default();
        let (_, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 2)])
            .unwrap();

        let err = store
            .add_to_cart(&variants[0].id, 3, PriceType::Selling)
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InsufficientStock { available: 2, requested: 3, .. }
        ));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_rejects_non_positive_quantity() {
        let mut store = EntityStore::default();
        let (_, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        for qty in [0, -1] {
            let err = store
                .add_to_cart(&variants[0].id, qty, PriceType::Selling)
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_unknown_variant() {
        let mut store = EntityStore::default();

        let err = store
            .add_to_cart("ghost", 1, PriceType::Selling)
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Variant", .. }));
    }

    #[test]
    fn test_pending_line_keeps_price_after_product_edit() {
        let mut store = EntityStore::default();
        let (product, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        let line = store
            .add_to_cart(&variants[0].id, 1, PriceType::GeneralDiscount)
            .unwrap();
        let frozen_price = line.unit_price_at_time_of_sale;

        // Double the purchase price; the pending line must not move.
        let mut repriced = product.clone();
        repriced.purchase_price = product.purchase_price * 2;
        store
            .update_product(repriced, vec![bazar_core::types::VariantInput::Existing(variants[0].clone())])
            .unwrap();

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart()[0].unit_price_at_time_of_sale, frozen_price);
    }

    #[test]
    fn test_remove_from_cart_by_line_id_only() {
        let mut store = EntityStore::default();
        let (_, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        let first = store
            .add_to_cart(&variants[0].id, 1, PriceType::Selling)
            .unwrap();
        let second = store
            .add_to_cart(&variants[0].id, 2, PriceType::Selling)
            .unwrap();

        store.remove_from_cart(&first.id).unwrap();

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart()[0].id, second.id);
        // Stock never moved.
        assert_eq!(store.variants()[0].quantity, 10);

        let err = store.remove_from_cart(&first.id).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Cart line", .. }));
    }

    #[test]
    fn test_price_tiers_select_different_snapshots() {
        let mut store = EntityStore::new(PricingRules::default());
        let (product, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        let expected = calculate_prices(product.purchase_price, store.pricing_rules());

        let selling = store
            .add_to_cart(&variants[0].id, 1, PriceType::Selling)
            .unwrap();
        let general = store
            .add_to_cart(&variants[0].id, 1, PriceType::GeneralDiscount)
            .unwrap();
        let special = store
            .add_to_cart(&variants[0].id, 1, PriceType::SpecialDiscount)
            .unwrap();

        assert_eq!(selling.unit_price_at_time_of_sale, expected.selling_price);
        assert_eq!(general.unit_price_at_time_of_sale, expected.general_discount_price);
        assert_eq!(special.unit_price_at_time_of_sale, expected.special_discount_price);
    }
}
