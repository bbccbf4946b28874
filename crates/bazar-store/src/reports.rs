//! # Derived Reports
//!
//! Read-only views computed from the live collections on every call.
//!
//! ## No Caching
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Reports screen ──► inventory_summary() ──┐                         │
//! │                 ──► sales_summary()     ──┤                         │
//! │                                           ▼                         │
//! │                          walk products/variants/sales NOW           │
//! │                                                                     │
//! │  Every call reflects the latest committed state. Nothing here       │
//! │  stores a result, so nothing here can go stale.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use bazar_core::Money;

use crate::store::EntityStore;

/// Stock position of one product across its variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummaryRow {
    pub product_id: String,
    pub name: String,
    pub category: String,
    /// Units on hand summed over all variants.
    pub units_on_hand: i64,
    /// Units on hand valued at the raw purchase price.
    pub stock_value: Money,
}

/// Totals over all finalized sale orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub order_count: usize,
    pub units_sold: i64,
    /// Sum of amounts actually paid.
    pub gross_revenue: Money,
    /// Sum of per-order computed profit.
    pub total_profit: Money,
}

impl EntityStore {
    /// Per-product stock position, in product insertion order.
    pub fn inventory_summary(&self) -> Vec<InventorySummaryRow> {
        self.products
            .iter()
            .map(|p| {
                let units_on_hand: i64 = self
                    .variants
                    .iter()
                    .filter(|v| v.product_master_id == p.id)
                    .map(|v| v.quantity)
                    .sum();

                InventorySummaryRow {
                    product_id: p.id.clone(),
                    name: p.name.clone(),
                    category: p.category.clone(),
                    units_on_hand,
                    stock_value: p.purchase_price.multiply_quantity(units_on_hand),
                }
            })
            .collect()
    }

    /// Totals across the whole sales history.
    pub fn sales_summary(&self) -> SalesSummary {
        let mut summary = SalesSummary {
            order_count: self.sales.len(),
            units_sold: 0,
            gross_revenue: Money::zero(),
            total_profit: Money::zero(),
        };

        for order in &self.sales {
            summary.units_sold += order.total_quantity();
            summary.gross_revenue += order.final_paid_amount;
            summary.total_profit += order.profit;
        }

        summary
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{draft_variant, shirt_draft};
    use bazar_core::types::PriceType;

    #[test]
    fn test_inventory_summary_sums_variants() {
        let mut store = EntityStore::default();
        let (product, _) = store
            .add_product(
                shirt_draft(),
                vec![draft_variant("M", 10), draft_variant("L", 4)],
            )
            .unwrap();

        let rows = store.inventory_summary();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_id, product.id);
        assert_eq!(rows[0].units_on_hand, 14);
        assert_eq!(
            rows[0].stock_value,
            product.purchase_price.multiply_quantity(14)
        );
    }

    #[test]
    fn test_reports_recompute_from_live_state() {
        let mut store = EntityStore::default();
        let (_, variants) = store
            .add_product(shirt_draft(), vec![draft_variant("M", 10)])
            .unwrap();

        assert_eq!(store.sales_summary().order_count, 0);
        assert_eq!(store.inventory_summary()[0].units_on_hand, 10);

        let line = store
            .add_to_cart(&variants[0].id, 3, PriceType::Selling)
            .unwrap();
        let order = store.finalize_sale(line.line_total()).unwrap();

        // Same calls, fresh answers.
        let summary = store.sales_summary();
        assert_eq!(summary.order_count, 1);
        assert_eq!(summary.units_sold, 3);
        assert_eq!(summary.gross_revenue, order.final_paid_amount);
        assert_eq!(summary.total_profit, order.profit);
        assert_eq!(store.inventory_summary()[0].units_on_hand, 7);
    }
}
