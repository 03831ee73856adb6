//! SneakerHub CLI - Storefront shell over the core stores.
//!
//! The binary in `main.rs` parses arguments and dispatches to [`commands`];
//! this library half exists so integration tests can drive the same code.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod file_store;
pub mod routes;

pub use commands::{CommandError, Shop};
pub use config::{ConfigError, LogFormat, ShopConfig};
pub use file_store::JsonFileStore;
