// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Admin panel actions.
//!
//! `AdminActions` is handed out by an open [`AdminGate`] and checks form
//! input before delegating to the catalog store. Blank required fields are
//! reported as `MissingFields` and nothing is mutated.

use storefront_catalog::CatalogStore;
use storefront_core::{
    Collection, CollectionDraft, CollectionId, Product, ProductDraft, ProductId, StoreConfig,
    StorefrontError,
};

use crate::gate::AdminGate;

/// Validated write access to the catalog for an admin.
#[derive(Debug)]
pub struct AdminActions<'a> {
    store: &'a mut CatalogStore,
}

impl AdminGate {
    /// Borrow admin actions over `store`, if admin mode is on.
    pub fn actions<'a>(
        &self,
        store: &'a mut CatalogStore,
    ) -> Result<AdminActions<'a>, StorefrontError> {
        self.require_admin()?;
        Ok(AdminActions { store })
    }
}

fn ensure_complete(missing: Vec<&'static str>) -> Result<(), StorefrontError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(StorefrontError::MissingFields { fields: missing })
    }
}

fn product_not_found(id: ProductId) -> StorefrontError {
    StorefrontError::NotFound {
        entity: "product",
        id: id.0,
    }
}

fn collection_not_found(id: CollectionId) -> StorefrontError {
    StorefrontError::NotFound {
        entity: "collection",
        id: id.0,
    }
}

impl AdminActions<'_> {
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<ProductId, StorefrontError> {
        ensure_complete(draft.missing_fields())?;
        Ok(self.store.add_product(draft))
    }

    pub fn update_product(&mut self, id: ProductId, draft: ProductDraft) -> Result<(), StorefrontError> {
        ensure_complete(draft.missing_fields())?;
        if self.store.update_product(id, draft) {
            Ok(())
        } else {
            Err(product_not_found(id))
        }
    }

    pub fn delete_product(&mut self, id: ProductId) -> Result<Product, StorefrontError> {
        self.store.delete_product(id).ok_or(product_not_found(id))
    }

    pub fn toggle_product_visibility(&mut self, id: ProductId) -> Result<bool, StorefrontError> {
        self.store
            .toggle_product_visibility(id)
            .ok_or(product_not_found(id))
    }

    pub fn add_collection(&mut self, draft: CollectionDraft) -> Result<CollectionId, StorefrontError> {
        ensure_complete(draft.missing_fields())?;
        Ok(self.store.add_collection(draft))
    }

    /// Returns the number of products moved by a rename.
    pub fn update_collection(
        &mut self,
        id: CollectionId,
        draft: CollectionDraft,
    ) -> Result<usize, StorefrontError> {
        ensure_complete(draft.missing_fields())?;
        self.store
            .update_collection(id, draft)
            .ok_or(collection_not_found(id))
    }

    pub fn delete_collection(&mut self, id: CollectionId) -> Result<Collection, StorefrontError> {
        self.store.delete_collection(id)
    }

    pub fn update_store_config(&mut self, config: StoreConfig) {
        self.store.update_store_config(config);
    }
}
