//! Explicit application context.
//!
//! Handlers receive a [`StoreContext`] instead of reaching for global
//! stores, so every test can build an isolated instance.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::cart::CartStore;
use crate::catalog::ProductCatalog;
use crate::guard::{self, Navigation, Route};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;
use crate::types::{Price, ProductId};

/// Errors raised by context-level operations.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The requested product is not in the catalog.
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),
}

/// Totals captured when a checkout completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    /// Number of units purchased.
    pub item_count: i64,
    /// Amount charged.
    pub total: Price,
}

/// Catalog, cart and session for one storefront instance.
#[derive(Debug)]
pub struct StoreContext<S> {
    catalog: ProductCatalog,
    cart: CartStore,
    session: SessionStore<S>,
}

impl<S: KeyValueStore> StoreContext<S> {
    /// Build a context with an empty cart and a session restored from `storage`.
    pub fn new(catalog: ProductCatalog, storage: S) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
            session: SessionStore::new(storage),
        }
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart, mutably.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The session.
    #[must_use]
    pub const fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// The session, mutably.
    pub const fn session_mut(&mut self) -> &mut SessionStore<S> {
        &mut self.session
    }

    /// Add a catalog product to the cart by id.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::UnknownProduct`] if `id` is not in the catalog.
    pub fn add_product(&mut self, id: ProductId, quantity: i64) -> Result<(), ContextError> {
        let product = self
            .catalog
            .get(id)
            .ok_or(ContextError::UnknownProduct(id))?;
        self.cart.add_to_cart(product, quantity);
        Ok(())
    }

    /// Run the navigation guard for `route`.
    #[must_use]
    pub fn navigate(&self, route: &Route) -> Navigation {
        guard::before_each(route, &self.session)
    }

    /// Log out and drop the cart.
    pub fn sign_out(&mut self) {
        self.session.logout();
        self.cart.clear_cart_state();
    }

    /// Capture cart totals, then empty the cart.
    pub fn complete_checkout(&mut self) -> CheckoutSummary {
        let summary = CheckoutSummary {
            item_count: self.cart.cart_item_count(),
            total: self.cart.total_cart_price(),
        };
        self.cart.clear_cart_state();
        info!(
            item_count = summary.item_count,
            total = %summary.total,
            "Checkout complete"
        );
        summary
    }
}
