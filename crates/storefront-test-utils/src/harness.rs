// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end catalog scenarios.
//!
//! `TestHarness` assembles a catalog store, an admin gate and a temp
//! directory for spreadsheet files.

use std::path::PathBuf;

use storefront_admin::AdminGate;
use storefront_catalog::{CatalogStore, seeded_store};
use storefront_config::StorefrontConfig;
use storefront_core::{CollectionDraft, ProductDraft, StorefrontError};

/// Admin password used by harnesses built with [`TestHarnessBuilder::with_admin`].
pub const TEST_ADMIN_PASSWORD: &str = "test-admin";

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    seed: bool,
    admin: bool,
    collections: Vec<CollectionDraft>,
    products: Vec<ProductDraft>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            seed: false,
            admin: false,
            collections: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Start from the demo catalog instead of an empty one.
    pub fn seeded(mut self) -> Self {
        self.seed = true;
        self
    }

    /// Configure an admin password and log in with it.
    pub fn with_admin(mut self) -> Self {
        self.admin = true;
        self
    }

    pub fn with_collection(mut self, name: &str, description: &str) -> Self {
        self.collections.push(CollectionDraft::new(name, description));
        self
    }

    pub fn with_product(mut self, draft: ProductDraft) -> Self {
        self.products.push(draft);
        self
    }

    pub fn build(self) -> Result<TestHarness, StorefrontError> {
        let temp_dir = tempfile::TempDir::new().map_err(|source| StorefrontError::Io {
            path: "temp dir".to_string(),
            source,
        })?;

        let mut config = StorefrontConfig::default();
        config.catalog.seed = self.seed;
        if self.admin {
            config.admin.password = Some(TEST_ADMIN_PASSWORD.to_string());
        }

        let mut store = if self.seed {
            seeded_store(config.store.clone())
        } else {
            CatalogStore::new(config.store.clone())
        };
        for collection in self.collections {
            store.add_collection(collection);
        }
        for product in self.products {
            store.add_product(product);
        }

        let mut gate = AdminGate::new(config.admin.password.clone());
        if self.admin {
            gate.login(TEST_ADMIN_PASSWORD);
        }

        Ok(TestHarness {
            config,
            store,
            gate,
            temp_dir,
        })
    }
}

/// A ready-to-use catalog with a scratch directory.
pub struct TestHarness {
    pub config: StorefrontConfig,
    pub store: CatalogStore,
    pub gate: AdminGate,
    temp_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Write `contents` to a file in the harness temp dir and return its path.
    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write harness file");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn product_named(&self, name: &str) -> Option<&storefront_core::Product> {
        self.store.products().iter().find(|p| p.name == name)
    }
}

/// A complete draft that passes admin form validation.
pub fn product_draft(name: &str, collection: &str, price: f64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price,
        description: format!("{name} para pruebas"),
        age: "3-6 años".to_string(),
        skills: vec!["Creatividad".to_string()],
        collection: collection.to_string(),
        image: None,
        visible: true,
        stock: None,
    }
}
