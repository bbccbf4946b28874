//! Shared fixtures for the unit tests in this crate.

use chrono::Utc;

use bazar_core::types::{ProductDraft, VariantDraft};
use bazar_core::Money;

/// A plain shirt draft: $40.00 cost, which under the default pricing
/// rules yields a $60.00 selling price (see the pricing tests).
pub fn shirt_draft() -> ProductDraft {
    ProductDraft {
        name: "Linen Shirt".to_string(),
        category: "Menswear".to_string(),
        subcategory: "Shirts".to_string(),
        images: vec!["shirt-front.jpg".to_string()],
        purchase_date: Utc::now(),
        purchase_price: Money::from_cents(4000),
        color: "White".to_string(),
        description: None,
    }
}

pub fn draft_variant(size_label: &str, quantity: i64) -> VariantDraft {
    VariantDraft {
        size_label: size_label.to_string(),
        quantity,
    }
}
