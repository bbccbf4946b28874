//! # Sale Finalizer
//!
//! Converts the pending cart into an immutable sale order.
//!
//! ## Finalization Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    finalize_sale(paid_amount)                       │
//! │                                                                     │
//! │  1. cart empty?              ──► EmptyCart                          │
//! │  2. re-check stock per       ──► InsufficientStock                  │
//! │     variant (aggregated          (stock may have moved since the    │
//! │     across lines)                 lines were added)                 │
//! │                                                                     │
//! │  ── everything below runs only after all checks pass ──             │
//! │                                                                     │
//! │  3. decrement each variant's stock by the aggregate quantity        │
//! │  4. profit = Σ (unit_price − adjusted_purchase_price) × qty         │
//! │  5. build SaleOrder: fresh id, frozen copy of the cart lines,       │
//! │     timestamp, paid amount, profit                                  │
//! │  6. append to sales, empty the cart                                 │
//! │                                                                     │
//! │  Atomic from the caller's view: an error means nothing moved.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Aggregate the Stock Check?
//! Two lines of 3 units each against a variant holding 5 would pass a
//! per-line check and drive stock to −1 at step 3. Validating the sum
//! per variant is what actually upholds the never-negative invariant.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info};

use bazar_core::error::{DomainError, DomainResult};
use bazar_core::types::SaleOrder;
use bazar_core::validation::validate_paid_amount;
use bazar_core::Money;

use crate::store::EntityStore;

impl EntityStore {
    /// Finalizes the current cart into a sale order.
    ///
    /// `paid_amount` is what the customer actually handed over; it may
    /// differ from the sum of list prices (rounding, negotiated totals)
    /// and only has to be non-negative.
    ///
    /// On success the new order is appended to the sales collection,
    /// every referenced variant's stock is decremented, and the cart is
    /// empty. On failure all three collections are untouched.
    pub fn finalize_sale(&mut self, paid_amount: Money) -> DomainResult<SaleOrder> {
        debug!(paid = %paid_amount, lines = self.cart.len(), "finalize_sale");

        validate_paid_amount(paid_amount)?;

        if self.cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }

        // Aggregate requested quantity per variant, then re-validate
        // against live stock. This is the single source of truth for
        // "enough stock exists"; the decrement below cannot underflow.
        let mut requested: HashMap<&str, i64> = HashMap::new();
        for line in &self.cart {
            *requested.entry(line.product_variant_id.as_str()).or_insert(0) += line.quantity;
        }

        for (variant_id, qty) in &requested {
            let variant = self
                .variants
                .iter()
                .find(|v| v.id == *variant_id)
                .ok_or_else(|| DomainError::NotFound {
                    entity: "Variant",
                    id: variant_id.to_string(),
                })?;

            if *qty > variant.quantity {
                return Err(DomainError::InsufficientStock {
                    size_label: variant.size_label.clone(),
                    available: variant.quantity,
                    requested: *qty,
                });
            }
        }

        // All checks passed; apply the full sequence.
        let requested: HashMap<String, i64> = requested
            .into_iter()
            .map(|(id, qty)| (id.to_string(), qty))
            .collect();

        for variant in self.variants.iter_mut() {
            if let Some(qty) = requested.get(&variant.id) {
                variant.quantity -= qty;
            }
        }

        let profit: Money = self
            .cart
            .iter()
            .map(|line| line.line_profit())
            .fold(Money::zero(), |acc, p| acc + p);

        let order = SaleOrder {
            id: Self::mint_id(),
            // The cart lines move into the order wholesale; the order
            // owns its items and the cart is left empty. History can
            // never be reached through a product edit again.
            items: std::mem::take(&mut self.cart),
            final_paid_amount: paid_amount,
            sale_date: Utc::now(),
            profit,
        };

        info!(order_id = %order.id, items = order.items.len(), paid = %paid_amount, profit = %profit, "Sale finalized");

        self.sales.push(order.clone());

        Ok(order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{draft_variant, shirt_draft};
    use bazar_core::types::{PriceType, VariantInput};

    #[test]
    fn test_finalize_decrements_stock_and_empties_cart() {
        let mut store = EntityStore::default();
        let (_, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        let line = store
            .add_to_cart(&variants[0].id, 3, PriceType::Selling)
            .unwrap();
        let paid = line.line_total();

        let order = store.finalize_sale(paid).unwrap();

        assert_eq!(store.variants()[0].quantity, 7);
        assert!(store.cart().is_empty());
        assert_eq!(store.sales().len(), 1);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.final_paid_amount, paid);
    }

    #[test]
    fn test_finalize_empty_cart_fails_without_mutation() {
        let mut store = EntityStore::default();
        store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        let err = store.finalize_sale(Money::from_cents(100)).unwrap_err();
        assert!(matches!(err, DomainError::EmptyCart));

        assert_eq!(store.variants()[0].quantity, 10);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_finalize_revalidates_stock_at_commit_time() {
        let mut store = EntityStore::default();
        let (product, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        store
            .add_to_cart(&variants[0].id, 4, PriceType::Selling)
            .unwrap();

        // Stock drops to 4 behind the cart's back, then a second line
        // squeezes in. Each line alone fits; the aggregate does not.
        let mut shrunk = variants[0].clone();
        shrunk.quantity = 4;
        store
            .update_product(product, vec![VariantInput::Existing(shrunk)])
            .unwrap();
        store
            .add_to_cart(&variants[0].id, 2, PriceType::Selling)
            .unwrap();

        let err = store.finalize_sale(Money::from_cents(1)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InsufficientStock { available: 4, requested: 6, .. }
        ));

        // Nothing moved: stock, cart, and sales all as before the call.
        assert_eq!(store.variants()[0].quantity, 4);
        assert_eq!(store.cart().len(), 2);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_finalize_aggregates_lines_per_variant() {
        let mut store = EntityStore::default();
        let (_, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 5)])
            .unwrap();

        store
            .add_to_cart(&variants[0].id, 3, PriceType::Selling)
            .unwrap();
        store
            .add_to_cart(&variants[0].id, 2, PriceType::GeneralDiscount)
            .unwrap();

        store.finalize_sale(Money::from_cents(10000)).unwrap();
        assert_eq!(store.variants()[0].quantity, 0);
    }

    #[test]
    fn test_profit_matches_independent_recomputation() {
        let mut store = EntityStore::default();
        let (_, variants) = store
            .add_product(
                shirt_draft(),
                vec![draft_variant("M", 10), draft_variant("L", 10)],
            )
            .unwrap();

        store
            .add_to_cart(&variants[0].id, 3, PriceType::Selling)
            .unwrap();
        store
            .add_to_cart(&variants[1].id, 2, PriceType::SpecialDiscount)
            .unwrap();

        let expected: i64 = store
            .cart()
            .iter()
            .map(|l| {
                (l.unit_price_at_time_of_sale.cents() - l.adjusted_purchase_price.cents())
                    * l.quantity
            })
            .sum();

        let order = store.finalize_sale(Money::from_cents(25000)).unwrap();
        assert_eq!(order.profit.cents(), expected);
    }

    #[test]
    fn test_order_is_frozen_against_later_edits() {
        let mut store = EntityStore::default();
        let (product, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        store
            .add_to_cart(&variants[0].id, 1, PriceType::Selling)
            .unwrap();
        let order = store.finalize_sale(Money::from_cents(6000)).unwrap();
        let frozen_price = order.items[0].unit_price_at_time_of_sale;

        // Delete the product entirely; the historical order keeps its
        // frozen line.
        store.delete_product(&product.id).unwrap();

        assert_eq!(store.sales().len(), 1);
        assert_eq!(store.sales()[0].items.len(), 1);
        assert_eq!(
            store.sales()[0].items[0].unit_price_at_time_of_sale,
            frozen_price
        );
    }

    #[test]
    fn test_finalize_rejects_negative_paid_amount() {
        let mut store = EntityStore::default();
        let (_, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();
        store
            .add_to_cart(&variants[0].id, 1, PriceType::Selling)
            .unwrap();

        let err = store.finalize_sale(Money::from_cents(-1)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.cart().len(), 1);
    }
}
