//! Integration tests for SneakerHub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sneakerhub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart behaviour through the store context
//! - `session_persistence` - Session mirroring into storage backends
//! - `cli_commands` - Command implementations against a file-backed shop
//!
//! This library only provides shared fixtures.

use std::path::Path;

use sneakerhub_cli::{LogFormat, ShopConfig};
use tempfile::TempDir;

/// Temporary directory holding one shop's state, removed on drop.
#[derive(Debug)]
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a fresh directory under the system temp dir.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("sneakerhub-test-")
            .tempdir()
            .expect("failed to create test directory");
        Self { dir }
    }

    /// Directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// CLI configuration rooted in this directory, using the built-in catalog.
    #[must_use]
    pub fn config(&self) -> ShopConfig {
        ShopConfig {
            data_dir: self.path().join("data"),
            catalog_path: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
