//! Shopping cart state.
//!
//! [`CartStore`] owns an ordered list of [`CartLine`]s, at most one per
//! product when populated through [`CartStore::add_to_cart`]. Totals are
//! derived on every call rather than cached.
//!
//! Quantities are deliberately permissive: nothing here rejects zero or
//! negative values, and [`CartStore::update_quantity`] never removes a line.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// A product in the cart together with its quantity.
///
/// Product fields are copied at add-time, so later catalog edits do not
/// affect lines already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the product this line refers to.
    pub product_id: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Product description at add-time.
    pub description: String,
    /// Unit price at add-time.
    pub price: Price,
    /// Product image at add-time.
    pub image: String,
    /// Number of units.
    pub quantity: i64,
}

impl CartLine {
    /// Build a line from a product, copying only the product's own fields.
    #[must_use]
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// `price * quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// In-memory cart for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    items: Vec<CartLine>,
}

impl CartStore {
    /// Quantity used by [`CartStore::add_one`].
    pub const DEFAULT_QUANTITY: i64 = 1;

    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// First line for `product_id`, if any.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.items.iter().find(|line| line.product_id == product_id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace every line with `items`, as given.
    ///
    /// No deduplication or validation happens here; the caller is trusted to
    /// hand over a consistent cart (typically one it previously read back).
    pub fn set_cart_items(&mut self, items: Vec<CartLine>) {
        debug!(lines = items.len(), "Replacing cart contents");
        self.items = items;
    }

    /// Remove every line.
    pub fn clear_cart_state(&mut self) {
        debug!(lines = self.items.len(), "Clearing cart");
        self.items.clear();
    }

    /// Add `quantity` units of `product`.
    ///
    /// Increments the existing line for the product if there is one,
    /// otherwise appends a new line.
    pub fn add_to_cart(&mut self, product: &Product, quantity: i64) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            debug!(
                product_id = %product.id,
                quantity = line.quantity,
                "Incremented cart line"
            );
        } else {
            debug!(product_id = %product.id, quantity, "Added cart line");
            self.items.push(CartLine::from_product(product, quantity));
        }
    }

    /// Add a single unit of `product`.
    pub fn add_one(&mut self, product: &Product) {
        self.add_to_cart(product, Self::DEFAULT_QUANTITY);
    }

    /// Drop every line for `product_id`. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let before = self.items.len();
        self.items.retain(|line| line.product_id != product_id);
        debug!(
            %product_id,
            removed = before - self.items.len(),
            "Removed from cart"
        );
    }

    /// Overwrite the quantity of the line for `product_id`.
    ///
    /// Zero and negative quantities are stored as-is and the line stays in
    /// the cart. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = new_quantity;
                debug!(%product_id, quantity = new_quantity, "Updated cart quantity");
            }
            None => debug!(%product_id, "Quantity update for product not in cart"),
        }
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn cart_item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |count, line| count.saturating_add(line.quantity))
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total_cart_price(&self) -> Price {
        self.items.iter().map(CartLine::line_total).sum()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.items
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}
