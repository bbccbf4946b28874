//! # Entity Store
//!
//! The four domain collections and the product mutations over them.
//!
//! ## State Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         EntityStore                                 │
//! │                                                                     │
//! │  products: Vec<ProductMaster>   ◄── add / update / delete          │
//! │  variants: Vec<ProductVariant>  ◄── cascade with their product     │
//! │  cart:     Vec<SaleItem>        ◄── re-synced on update/delete     │
//! │  sales:    Vec<SaleOrder>       ◄── appended by finalize, frozen   │
//! │                                                                     │
//! │  Data flows one direction:                                          │
//! │    caller action ──► mutation ──► derived views on read            │
//! │                                                                     │
//! │  Mutations take &mut self, so single-actor access is a              │
//! │  compile-time property. No locks, no globals.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Partial Mutation
//! Every operation validates its whole input against the current state
//! first and only then applies the full cascade. A returned error means
//! the store is exactly as it was before the call.

use tracing::{debug, info};
use uuid::Uuid;

use bazar_core::error::{DomainError, DomainResult, ValidationError};
use bazar_core::types::{
    ProductDraft, ProductMaster, ProductVariant, SaleItem, SaleOrder, VariantDraft, VariantInput,
};
use bazar_core::validation::{
    validate_product_name, validate_purchase_price, validate_size_label, validate_stock_quantity,
};
use bazar_core::PricingRules;

/// In-memory store for products, variants, cart lines, and sale orders.
///
/// Holds the pricing rule set used whenever a cart line snapshots its
/// prices. Construct one per running application; there is no global.
#[derive(Debug, Clone)]
pub struct EntityStore {
    pub(crate) products: Vec<ProductMaster>,
    pub(crate) variants: Vec<ProductVariant>,
    pub(crate) cart: Vec<SaleItem>,
    pub(crate) sales: Vec<SaleOrder>,
    pub(crate) rules: PricingRules,
}

impl EntityStore {
    /// Creates an empty store with the given pricing rules.
    pub fn new(rules: PricingRules) -> Self {
        EntityStore {
            products: Vec::new(),
            variants: Vec::new(),
            cart: Vec::new(),
            sales: Vec::new(),
            rules,
        }
    }

    /// Mints a fresh opaque identifier.
    ///
    /// Callers never supply ids; uniqueness within a collection at time
    /// of creation is all the rest of the store relies on.
    pub(crate) fn mint_id() -> String {
        Uuid::new_v4().to_string()
    }

    // =========================================================================
    // Read Access
    // =========================================================================
    // Always the live collections, never a stale cache.

    /// Current products, in insertion order.
    pub fn products(&self) -> &[ProductMaster] {
        &self.products
    }

    /// Current variants across all products.
    pub fn variants(&self) -> &[ProductVariant] {
        &self.variants
    }

    /// Variants belonging to one product.
    pub fn variants_of(&self, product_id: &str) -> Vec<&ProductVariant> {
        self.variants
            .iter()
            .filter(|v| v.product_master_id == product_id)
            .collect()
    }

    /// Pending cart lines.
    pub fn cart(&self) -> &[SaleItem] {
        &self.cart
    }

    /// Finalized sale orders, oldest first.
    pub fn sales(&self) -> &[SaleOrder] {
        &self.sales
    }

    /// The pricing rule set applied at cart-add time.
    pub fn pricing_rules(&self) -> &PricingRules {
        &self.rules
    }

    // =========================================================================
    // Product Mutations
    // =========================================================================

    /// Adds a product with its initial variants.
    ///
    /// Mints a fresh id for the product and one per variant draft, and
    /// stamps each variant with the new product's id. Returns the
    /// created records.
    pub fn add_product(
        &mut self,
        draft: ProductDraft,
        variant_drafts: Vec<VariantDraft>,
    ) -> DomainResult<(ProductMaster, Vec<ProductVariant>)> {
        debug!(name = %draft.name, variants = variant_drafts.len(), "add_product");

        // Validate everything before any collection grows.
        validate_product_name(&draft.name)?;
        validate_purchase_price(draft.purchase_price)?;
        for vd in &variant_drafts {
            validate_size_label(&vd.size_label)?;
            validate_stock_quantity(vd.quantity)?;
        }

        let product_id = Self::mint_id();
        let product = draft.into_product(product_id.clone());

        let new_variants: Vec<ProductVariant> = variant_drafts
            .into_iter()
            .map(|vd| ProductVariant {
                id: Self::mint_id(),
                product_master_id: product_id.clone(),
                size_label: vd.size_label,
                quantity: vd.quantity,
            })
            .collect();

        self.products.push(product.clone());
        self.variants.extend(new_variants.iter().cloned());

        info!(product_id = %product.id, name = %product.name, variants = new_variants.len(), "Product added");

        Ok((product, new_variants))
    }

    /// Replaces a product record and its variant set wholesale.
    ///
    /// ## Semantics
    /// - The product matching `updated.id` is replaced in place
    ///   (order-preserving); a missing id is `NotFound` and nothing
    ///   changes.
    /// - `variant_inputs` is the finalized list: drafts get freshly
    ///   minted ids, existing variants keep theirs. All prior variants
    ///   of this product are then replaced by the finalized list
    ///   (delete-then-insert, not per-field merge).
    /// - The cart is re-synced afterwards: lines for this product whose
    ///   variant disappeared, or whose requested quantity now exceeds
    ///   the variant's new stock, are removed. Other products' lines are
    ///   untouched.
    ///
    /// Returns the finalized variant list as stored.
    pub fn update_product(
        &mut self,
        updated: ProductMaster,
        variant_inputs: Vec<VariantInput>,
    ) -> DomainResult<Vec<ProductVariant>> {
        debug!(product_id = %updated.id, inputs = variant_inputs.len(), "update_product");

        let product_idx = self
            .products
            .iter()
            .position(|p| p.id == updated.id)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Product",
                id: updated.id.clone(),
            })?;

        validate_product_name(&updated.name)?;
        validate_purchase_price(updated.purchase_price)?;

        // Existing inputs must be variants this product already owns;
        // anything else would let an update steal a variant id from a
        // different product and corrupt the collection.
        let prior_ids: Vec<&str> = self
            .variants
            .iter()
            .filter(|v| v.product_master_id == updated.id)
            .map(|v| v.id.as_str())
            .collect();

        let mut seen_ids: Vec<&str> = Vec::new();
        for input in &variant_inputs {
            match input {
                VariantInput::Draft(vd) => {
                    validate_size_label(&vd.size_label)?;
                    validate_stock_quantity(vd.quantity)?;
                }
                VariantInput::Existing(v) => {
                    validate_size_label(&v.size_label)?;
                    validate_stock_quantity(v.quantity)?;
                    if !prior_ids.contains(&v.id.as_str()) {
                        return Err(DomainError::NotFound {
                            entity: "Variant",
                            id: v.id.clone(),
                        });
                    }
                    if seen_ids.contains(&v.id.as_str()) {
                        return Err(ValidationError::Duplicate {
                            field: "variant id",
                            value: v.id.clone(),
                        }
                        .into());
                    }
                    seen_ids.push(v.id.as_str());
                }
            }
        }

        // All checks passed; apply the full cascade.
        let finalized: Vec<ProductVariant> = variant_inputs
            .into_iter()
            .map(|input| match input {
                VariantInput::Draft(vd) => ProductVariant {
                    id: Self::mint_id(),
                    product_master_id: updated.id.clone(),
                    size_label: vd.size_label,
                    quantity: vd.quantity,
                },
                VariantInput::Existing(mut v) => {
                    // Re-stamp the back-reference; the id is what persists.
                    v.product_master_id = updated.id.clone();
                    v
                }
            })
            .collect();

        let product_id = updated.id.clone();
        self.products[product_idx] = updated;

        self.variants.retain(|v| v.product_master_id != product_id);
        self.variants.extend(finalized.iter().cloned());

        let removed = self.sync_cart_for_product(&product_id, &finalized);

        info!(product_id = %product_id, variants = finalized.len(), cart_lines_dropped = removed, "Product updated");

        Ok(finalized)
    }

    /// Deletes a product, cascading into its variants and cart lines.
    ///
    /// All three collections are filtered by the same key, so removal
    /// order does not matter. A missing id is `NotFound` and nothing
    /// changes. Finalized sales are history and are never touched.
    pub fn delete_product(&mut self, product_id: &str) -> DomainResult<()> {
        debug!(product_id = %product_id, "delete_product");

        if !self.products.iter().any(|p| p.id == product_id) {
            return Err(DomainError::NotFound {
                entity: "Product",
                id: product_id.to_string(),
            });
        }

        self.products.retain(|p| p.id != product_id);
        self.variants.retain(|v| v.product_master_id != product_id);
        self.cart.retain(|line| line.product_master_id != product_id);

        info!(product_id = %product_id, "Product deleted");

        Ok(())
    }

    /// Drops cart lines for `product_id` whose variant no longer exists
    /// or no longer covers the requested quantity. Returns how many
    /// lines were removed.
    fn sync_cart_for_product(&mut self, product_id: &str, current: &[ProductVariant]) -> usize {
        let before = self.cart.len();
        self.cart.retain(|line| {
            if line.product_master_id != product_id {
                return true;
            }
            current
                .iter()
                .any(|v| v.id == line.product_variant_id && v.quantity >= line.quantity)
        });
        before - self.cart.len()
    }
}

impl Default for EntityStore {
    /// Empty store under the house pricing rules.
    fn default() -> Self {
        EntityStore::new(PricingRules::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
