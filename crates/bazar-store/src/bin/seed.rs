//! # Demo Data Walkthrough
//!
//! Populates a store with sample inventory and walks one full sale,
//! printing the derived reports. Useful for eyeballing the state
//! transitions during development.
//!
//! ## Usage
//! ```bash
//! # Default run
//! cargo run -p bazar-store --bin seed
//!
//! # With store mutation logs
//! RUST_LOG=debug cargo run -p bazar-store --bin seed
//! ```

use chrono::Utc;

use bazar_store::{
    EntityStore, Money, PriceType, PricingRules, ProductDraft, VariantDraft,
};

/// Sample inventory: (name, category, subcategory, color, cost cents, sizes).
const PRODUCTS: &[(&str, &str, &str, &str, i64, &[(&str, i64)])] = &[
    (
        "Linen Shirt",
        "Menswear",
        "Shirts",
        "White",
        4000,
        &[("S", 4), ("M", 10), ("L", 6)],
    ),
    (
        "Chino Pants",
        "Menswear",
        "Pants",
        "Beige",
        5500,
        &[("30", 3), ("32", 8), ("34", 5)],
    ),
    (
        "Summer Dress",
        "Womenswear",
        "Dresses",
        "Floral",
        6200,
        &[("S", 7), ("M", 9)],
    ),
    (
        "Wool Scarf",
        "Accessories",
        "Scarves",
        "Grey",
        1800,
        &[("One Size", 15)],
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🌱 Bazar POS Demo Walkthrough");
    println!("=============================");
    println!();

    let mut store = EntityStore::new(PricingRules::default());

    // Seed inventory
    for (name, category, subcategory, color, cost, sizes) in PRODUCTS {
        let draft = ProductDraft {
            name: name.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            images: Vec::new(),
            purchase_date: Utc::now(),
            purchase_price: Money::from_cents(*cost),
            color: color.to_string(),
            description: None,
        };
        let variants = sizes
            .iter()
            .map(|(label, qty)| VariantDraft {
                size_label: label.to_string(),
                quantity: *qty,
            })
            .collect();

        let (product, variants) = store.add_product(draft, variants)?;
        println!("✓ Added {} ({} variants)", product.name, variants.len());
    }

    println!();
    println!("Inventory:");
    println!("{}", serde_json::to_string_pretty(&store.inventory_summary())?);

    // Walk one sale: 2 shirts size M at the selling price, 1 scarf at
    // the general discount tier.
    let shirt_m = store
        .variants()
        .iter()
        .find(|v| v.size_label == "M")
        .map(|v| v.id.clone())
        .ok_or("seed data missing size M")?;
    let scarf = store
        .variants()
        .iter()
        .find(|v| v.size_label == "One Size")
        .map(|v| v.id.clone())
        .ok_or("seed data missing scarf")?;

    println!();
    let quote = store.price_quote(&shirt_m)?;
    println!(
        "Shirt quote: selling {} / general {} / special {}",
        quote.selling_price, quote.general_discount_price, quote.special_discount_price
    );

    let first = store.add_to_cart(&shirt_m, 2, PriceType::Selling)?;
    let second = store.add_to_cart(&scarf, 1, PriceType::GeneralDiscount)?;
    let due = first.line_total() + second.line_total();
    println!("Cart: {} lines, {} due", store.cart().len(), due);

    let order = store.finalize_sale(due)?;
    println!(
        "✓ Sale {} finalized: paid {}, profit {}",
        order.id, order.final_paid_amount, order.profit
    );

    println!();
    println!("Sales summary:");
    println!("{}", serde_json::to_string_pretty(&store.sales_summary())?);

    println!();
    println!("✓ Walkthrough complete!");

    Ok(())
}
