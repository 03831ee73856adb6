//! Read-only product catalog.
//!
//! The catalog is loaded once at startup and never mutated. It is the input
//! side of [`CartStore::add_to_cart`](crate::CartStore::add_to_cart).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// Errors that can occur when loading a [`ProductCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The input is not a JSON array of products.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two products share the same id.
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
}

/// A product offered by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image file name, relative to the storefront's asset directory.
    pub image: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
        }
    }
}

/// Ordered, immutable sequence of [`Product`]s with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build a catalog from products, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// Prices may be given as JSON numbers or decimal strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ids are not unique.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The catalog bundled with the storefront.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product::new(
                    ProductId::new(1),
                    "Jordan 1 High",
                    "The original Air Jordan 1 Chicago colorway was first introduced in 1985 \
                     and has only been retroed a few times since. The Lost and Found release \
                     adds pre-yellowed accents and cracked leather uppers for a vintage look.",
                    Price::from(150),
                    "Jordan 1 - High Red.png",
                ),
                Product::new(
                    ProductId::new(2),
                    "Adidas Samba OG",
                    "An iconic low-profile sneaker originally designed for indoor football in \
                     the 1950s, with a smooth leather upper, suede T-toe, serrated 3-Stripes \
                     and a durable gum sole.",
                    Price::from(160),
                    "Samba.png",
                ),
                Product::new(
                    ProductId::new(3),
                    "Converse Chuck Taylor 70 Low Black",
                    "A premium, vintage-inspired Chuck Taylor with a durable canvas upper, \
                     OrthoLite cushioning, a glossy egret midsole and a taller rubber sidewall.",
                    Price::from(110),
                    "Converse.png",
                ),
            ],
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a ProductCatalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
