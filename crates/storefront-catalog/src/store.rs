// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory catalog store.
//!
//! `CatalogStore` owns the authoritative product and collection lists plus
//! the store settings. Its methods are the only write path; the storefront
//! reads through [`crate::filter::ProductQuery`] over [`CatalogStore::products`].
//!
//! Products reference collections by name. Renaming a collection rewrites
//! every product that used the old name, and deleting a collection is
//! refused while any product still references it.

use storefront_core::{
    Collection, CollectionDraft, CollectionId, Product, ProductDraft, ProductId, StoreConfig,
    StorefrontError,
};
use tracing::{debug, info, warn};

/// Authoritative catalog state: products, collections and store settings.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    collections: Vec<Collection>,
    config: StoreConfig,
}

impl CatalogStore {
    /// Create an empty catalog with the given store settings.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            products: Vec::new(),
            collections: Vec::new(),
            config,
        }
    }

    /// Create a catalog from existing records.
    pub fn with_records(
        config: StoreConfig,
        collections: Vec<Collection>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            products,
            collections,
            config,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn store_config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Find a collection by name, ignoring case.
    pub fn collection_by_name(&self, name: &str) -> Option<&Collection> {
        let wanted = name.to_lowercase();
        self.collections
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
    }

    /// Number of products whose collection is exactly `name`.
    pub fn products_in_collection(&self, name: &str) -> usize {
        self.products.iter().filter(|p| p.collection == name).count()
    }

    /// Replace the store settings wholesale.
    pub fn update_store_config(&mut self, config: StoreConfig) {
        info!(name = %config.name, "store settings updated");
        self.config = config;
    }

    /// Add a product under the next free id (`max(ids, 0) + 1`).
    ///
    /// The collection name is not checked against existing collections.
    pub fn add_product(&mut self, draft: ProductDraft) -> ProductId {
        let id = ProductId(next_id(self.products.iter().map(|p| p.id.0)));
        let product = Product::from_draft(id, draft);
        info!(id = %id, name = %product.name, collection = %product.collection, "product added");
        self.products.push(product);
        id
    }

    /// Replace every field of a product except its id.
    ///
    /// Unknown ids are ignored; returns whether a product was updated.
    pub fn update_product(&mut self, id: ProductId, draft: ProductDraft) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                *product = Product::from_draft(id, draft);
                info!(id = %id, "product updated");
                true
            }
            None => {
                debug!(id = %id, "update for unknown product ignored");
                false
            }
        }
    }

    /// Remove a product. Returns the removed product, if it existed.
    pub fn delete_product(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        let product = self.products.remove(index);
        info!(id = %id, name = %product.name, "product deleted");
        Some(product)
    }

    /// Flip a product's visibility. Returns the new visibility.
    pub fn toggle_product_visibility(&mut self, id: ProductId) -> Option<bool> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.visible = !product.visible;
        debug!(id = %id, visible = product.visible, "product visibility toggled");
        Some(product.visible)
    }

    /// Add a collection under the next free id.
    pub fn add_collection(&mut self, draft: CollectionDraft) -> CollectionId {
        let id = CollectionId(next_id(self.collections.iter().map(|c| c.id.0)));
        info!(id = %id, name = %draft.name, "collection added");
        self.collections.push(Collection {
            id,
            name: draft.name,
            description: draft.description,
        });
        id
    }

    /// Replace a collection's name and description.
    ///
    /// When the name changes, every product whose collection equals the old
    /// name is moved to the new name in the same pass. Returns the number of
    /// products rewritten, or `None` for an unknown id.
    pub fn update_collection(&mut self, id: CollectionId, draft: CollectionDraft) -> Option<usize> {
        let collection = self.collections.iter_mut().find(|c| c.id == id)?;
        let old_name = std::mem::replace(&mut collection.name, draft.name);
        collection.description = draft.description;

        let new_name = collection.name.clone();
        let mut renamed = 0;
        if old_name != new_name {
            for product in self.products.iter_mut().filter(|p| p.collection == old_name) {
                product.collection.clone_from(&new_name);
                renamed += 1;
            }
        }

        info!(id = %id, old = %old_name, new = %new_name, renamed, "collection updated");
        Some(renamed)
    }

    /// Delete a collection that no product references.
    ///
    /// Fails with `CollectionInUse` (carrying the blocking product count)
    /// while any product still references the collection by name. Products
    /// are never reassigned.
    pub fn delete_collection(&mut self, id: CollectionId) -> Result<Collection, StorefrontError> {
        let index = self
            .collections
            .iter()
            .position(|c| c.id == id)
            .ok_or(StorefrontError::NotFound {
                entity: "collection",
                id: id.0,
            })?;

        let name = &self.collections[index].name;
        let product_count = self.products_in_collection(name);
        if product_count > 0 {
            warn!(id = %id, name = %name, product_count, "refusing to delete collection in use");
            return Err(StorefrontError::CollectionInUse {
                name: name.clone(),
                product_count,
            });
        }

        let collection = self.collections.remove(index);
        info!(id = %id, name = %collection.name, "collection deleted");
        Ok(collection)
    }
}

/// `max(existing, 0) + 1`.
fn next_id(existing: impl Iterator<Item = u64>) -> u64 {
    existing.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    fn draft(name: &str, collection: &str) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            price: 10.0,
            description: String::new(),
            age: "3+".into(),
            skills: vec![],
            collection: collection.into(),
            image: None,
            visible: true,
            stock: None,
        }
    }

    fn store_with_collection(name: &str) -> (CatalogStore, CollectionId) {
        let mut store = CatalogStore::default();
        let id = store.add_collection(CollectionDraft::new(name, "desc"));
        (store, id)
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut store = CatalogStore::default();
        assert_eq!(store.add_product(draft("a", "x")), ProductId(1));
        assert_eq!(store.add_product(draft("b", "x")), ProductId(2));
    }

    #[test]
    fn ids_follow_the_maximum_not_the_count() {
        let mut store = CatalogStore::default();
        store.add_product(draft("a", "x"));
        let b = store.add_product(draft("b", "x"));
        store.add_product(draft("c", "x"));
        store.delete_product(b);
        assert_eq!(store.add_product(draft("d", "x")), ProductId(4));
    }

    #[test]
    fn add_product_does_not_check_collection() {
        let mut store = CatalogStore::default();
        let id = store.add_product(draft("a", "missing"));
        assert_eq!(store.product(id).map(|p| p.collection.as_str()), Some("missing"));
    }

    #[test]
    fn add_product_defaults_stock() {
        let mut store = CatalogStore::default();
        let id = store.add_product(draft("a", "x"));
        assert_eq!(store.product(id).map(|p| p.stock), Some(0));
    }

    #[test]
    fn update_product_keeps_id() {
        let mut store = CatalogStore::default();
        let id = store.add_product(draft("a", "x"));
        assert!(store.update_product(id, draft("renamed", "y")));
        let product = store.product(id).expect("product");
        assert_eq!(product.id, id);
        assert_eq!(product.name, "renamed");
        assert_eq!(product.collection, "y");
    }

    #[test]
    fn update_unknown_product_is_a_silent_no_op() {
        let mut store = CatalogStore::default();
        store.add_product(draft("a", "x"));
        assert!(!store.update_product(ProductId(99), draft("b", "x")));
        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].name, "a");
    }

    #[test]
    fn delete_product_removes_it() {
        let mut store = CatalogStore::default();
        let id = store.add_product(draft("a", "x"));
        assert!(store.delete_product(id).is_some());
        assert!(store.product(id).is_none());
        assert!(store.delete_product(id).is_none());
    }

    #[test]
    fn toggle_unknown_product_returns_none() {
        let mut store = CatalogStore::default();
        assert_eq!(store.toggle_product_visibility(ProductId(1)), None);
    }

    #[test]
    fn rename_cascades_to_products() {
        let (mut store, id) = store_with_collection("0-3 años");
        let a = store.add_product(draft("a", "0-3 años"));
        let b = store.add_product(draft("b", "otra"));

        let renamed = store.update_collection(id, CollectionDraft::new("Bebés", "desc"));
        assert_eq!(renamed, Some(1));
        assert_eq!(store.product(a).map(|p| p.collection.as_str()), Some("Bebés"));
        assert_eq!(store.product(b).map(|p| p.collection.as_str()), Some("otra"));
        assert_eq!(store.collection(id).map(|c| c.name.as_str()), Some("Bebés"));
    }

    #[test]
    fn description_only_update_touches_no_products() {
        let (mut store, id) = store_with_collection("0-3 años");
        store.add_product(draft("a", "0-3 años"));
        let renamed = store.update_collection(id, CollectionDraft::new("0-3 años", "nueva"));
        assert_eq!(renamed, Some(0));
        assert_eq!(store.collection(id).map(|c| c.description.as_str()), Some("nueva"));
    }

    #[test]
    fn update_unknown_collection_returns_none() {
        let mut store = CatalogStore::default();
        assert_eq!(
            store.update_collection(CollectionId(5), CollectionDraft::new("a", "b")),
            None
        );
    }

    #[test]
    #[traced_test]
    fn delete_collection_in_use_is_refused() {
        let (mut store, id) = store_with_collection("0-3 años");
        store.add_product(draft("a", "0-3 años"));
        store.add_product(draft("b", "0-3 años"));

        let err = store.delete_collection(id).expect_err("should refuse");
        assert!(matches!(
            err,
            StorefrontError::CollectionInUse { product_count: 2, .. }
        ));
        assert!(store.collection(id).is_some());
        assert!(logs_contain("refusing to delete collection in use"));
    }

    #[test]
    fn delete_collection_succeeds_after_products_leave() {
        let (mut store, id) = store_with_collection("0-3 años");
        let a = store.add_product(draft("a", "0-3 años"));
        let b = store.add_product(draft("b", "0-3 años"));
        assert!(store.delete_collection(id).is_err());

        store.delete_product(a);
        let mut moved = store.product(b).cloned().map(ProductDraft::from).expect("product");
        moved.collection = "otra".into();
        store.update_product(b, moved);

        let deleted = store.delete_collection(id).expect("should delete");
        assert_eq!(deleted.name, "0-3 años");
        assert!(store.collections().is_empty());
    }

    #[test]
    fn delete_collection_reference_check_is_exact_case() {
        let (mut store, id) = store_with_collection("General");
        store.add_product(draft("a", "general"));
        assert!(store.delete_collection(id).is_ok());
    }

    #[test]
    fn delete_unknown_collection_is_not_found() {
        let mut store = CatalogStore::default();
        let err = store.delete_collection(CollectionId(3)).expect_err("unknown");
        assert!(matches!(err, StorefrontError::NotFound { entity: "collection", id: 3 }));
    }

    #[test]
    fn collection_lookup_by_name_ignores_case() {
        let (store, id) = store_with_collection("6+ Años");
        assert_eq!(store.collection_by_name("6+ años").map(|c| c.id), Some(id));
        assert!(store.collection_by_name("6 años").is_none());
    }

    #[test]
    fn store_config_is_replaced_wholesale() {
        let mut store = CatalogStore::default();
        let config = StoreConfig {
            name: "Nueva".into(),
            payment_methods: vec![],
            ..StoreConfig::default()
        };
        store.update_store_config(config.clone());
        assert_eq!(store.store_config(), &config);
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_visibility(visible in any::<bool>(), count in 1usize..6) {
            let mut store = CatalogStore::default();
            let mut ids = Vec::new();
            for i in 0..count {
                let mut d = draft(&format!("p{i}"), "x");
                d.visible = visible;
                ids.push(store.add_product(d));
            }
            let target = ids[count - 1];
            store.toggle_product_visibility(target);
            store.toggle_product_visibility(target);
            prop_assert_eq!(store.product(target).map(|p| p.visible), Some(visible));
        }

        #[test]
        fn new_ids_are_unique(adds in 1usize..20, deletes in proptest::collection::vec(1u64..20, 0..10)) {
            let mut store = CatalogStore::default();
            for i in 0..adds {
                store.add_product(draft(&format!("p{i}"), "x"));
            }
            for id in deletes {
                store.delete_product(ProductId(id));
            }
            let id = store.add_product(draft("new", "x"));
            prop_assert_eq!(store.products().iter().filter(|p| p.id == id).count(), 1);
        }
    }
}
