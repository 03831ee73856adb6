//! Command implementations.
//!
//! Every command takes the opened [`Shop`] plus an output sink, so the same
//! code backs the binary and the integration tests.

pub mod cart;
pub mod catalog;
pub mod navigate;
pub mod session;

use std::fs;

use sneakerhub_core::{
    CartLine, CatalogError, ContextError, KeyValueStore, ProductCatalog, StorageError,
    StoreContext,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ShopConfig;
use crate::file_store::JsonFileStore;

pub use session::LoginError;

/// Storage key under which the CLI keeps the cart between invocations.
pub const CART_KEY: &str = "cart";

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("{0}")]
    Context(#[from] ContextError),
    #[error("Invalid login: {0}")]
    Login(#[from] LoginError),
    #[error("No route matches {0}")]
    NoRoute(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Store context wired to the on-disk side channel.
#[derive(Debug)]
pub struct Shop {
    context: StoreContext<JsonFileStore>,
    cart_storage: JsonFileStore,
}

impl Shop {
    /// Load the catalog, restore the session and the saved cart.
    ///
    /// A saved cart that no longer parses is discarded with a warning. A
    /// storage file that is not valid JSON is replaced with an empty one, so
    /// the session starts logged out and the cart empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, or the storage
    /// directory cannot be created or a corrupt file cannot be replaced.
    pub fn open(config: &ShopConfig) -> Result<Self, CommandError> {
        let catalog = match &config.catalog_path {
            Some(path) => ProductCatalog::from_json(&fs::read_to_string(path)?)?,
            None => ProductCatalog::builtin(),
        };
        let storage = JsonFileStore::open(config.storage_path())?;
        let mut cart_storage = storage.clone();
        let mut context = StoreContext::new(catalog, storage);

        match cart_storage.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => context.cart_mut().set_cart_items(lines),
                Err(e) => warn!(error = %e, "Discarding unreadable saved cart"),
            },
            Ok(None) => {}
            Err(StorageError::Json(e)) => {
                warn!(
                    path = %cart_storage.path().display(),
                    error = %e,
                    "Storage file is corrupt; starting with empty storage"
                );
                cart_storage.reset()?;
            }
            Err(e) => warn!(error = %e, "Failed to read saved cart"),
        }

        debug!(
            products = context.catalog().len(),
            cart_lines = context.cart().items().len(),
            "Opened shop"
        );

        Ok(Self {
            context,
            cart_storage,
        })
    }

    /// The store context.
    #[must_use]
    pub const fn context(&self) -> &StoreContext<JsonFileStore> {
        &self.context
    }

    /// The store context, mutably.
    pub const fn context_mut(&mut self) -> &mut StoreContext<JsonFileStore> {
        &mut self.context
    }

    /// Persist the current cart. An empty cart removes the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file cannot be written.
    pub fn save_cart(&mut self) -> Result<(), CommandError> {
        let cart = self.context.cart();
        if cart.is_empty() {
            self.cart_storage.remove(CART_KEY)?;
        } else {
            let json = serde_json::to_string(cart.items())
                .map_err(|e| CommandError::Storage(StorageError::Json(e)))?;
            self.cart_storage.set(CART_KEY, &json)?;
        }
        Ok(())
    }
}
