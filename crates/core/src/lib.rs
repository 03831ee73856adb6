//! SneakerHub Core - Catalog, cart and session state.
//!
//! This crate holds the storefront's state containers:
//! - [`ProductCatalog`] - Fixed, read-only list of products
//! - [`CartStore`] - In-memory cart with derived totals
//! - [`SessionStore`] - Login state mirrored into a [`KeyValueStore`]
//!
//! # Architecture
//!
//! Stores are plain values owned by a [`StoreContext`] and passed to
//! handlers explicitly. Persistence goes through the [`KeyValueStore`]
//! trait; this crate only ships the in-memory [`MemoryStore`], leaving file
//! or browser backends to the binaries.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and prices
//! - [`catalog`] - Products and the catalog
//! - [`cart`] - Cart lines and the cart store
//! - [`session`] - Session state and its storage keys
//! - [`storage`] - The side-channel storage port
//! - [`guard`] - Route table and authentication guard
//! - [`context`] - Dependency-injected store bundle

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod context;
pub mod guard;
pub mod session;
pub mod storage;
pub mod types;

pub use cart::{CartLine, CartStore};
pub use catalog::{CatalogError, Product, ProductCatalog};
pub use context::{CheckoutSummary, ContextError, StoreContext};
pub use guard::{LOGIN_PATH, Navigation, Route, RouteMatch, RouteMeta, RouteTable, before_each};
pub use session::{SessionState, SessionStore};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use types::*;
