// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog domain types shared by the store, importer and checkout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a product. Stable once assigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// Unique identifier for a collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CollectionId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, never negative.
    pub price: f64,
    pub description: String,
    /// Free-text age range token such as `0-3 años`, `3+` or `6-12 meses`.
    pub age: String,
    pub skills: Vec<String>,
    /// Name of the owning collection. Products reference collections by name.
    pub collection: String,
    pub image: Option<String>,
    pub visible: bool,
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Materialize a draft under the given id.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            description: draft.description,
            age: draft.age,
            skills: draft.skills,
            collection: draft.collection,
            image: draft.image,
            visible: draft.visible,
            stock: draft.stock.unwrap_or(0),
        }
    }
}

/// Product data without an id, as produced by admin forms and the importer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub age: String,
    pub skills: Vec<String>,
    pub collection: String,
    pub image: Option<String>,
    pub visible: bool,
    /// `None` is stored as zero.
    pub stock: Option<u32>,
}

impl ProductDraft {
    /// Names of required admin form fields that are blank.
    ///
    /// Name, description, age and collection must be non-blank and the
    /// price must be positive. Stock, skills and image are optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.price.is_nan() || self.price <= 0.0 {
            missing.push("price");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.age.trim().is_empty() {
            missing.push("age");
        }
        if self.collection.trim().is_empty() {
            missing.push("collection");
        }
        missing
    }
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            description: product.description,
            age: product.age,
            skills: product.skills,
            collection: product.collection,
            image: product.image,
            visible: product.visible,
            stock: Some(product.stock),
        }
    }
}

/// A named grouping of products, e.g. an age bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    /// Foreign-key value used by `Product::collection`.
    pub name: String,
    pub description: String,
}

/// Collection data without an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDraft {
    pub name: String,
    pub description: String,
}

impl CollectionDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Names of required admin form fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        missing
    }
}

/// Store-wide settings. A singleton that is replaced wholesale on update.
///
/// Doubles as the `[store]` configuration section, so unknown keys are
/// rejected and every field falls back to the demo store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_store_description")]
    pub description: String,

    /// Phone number used for the checkout link. Non-digits are stripped.
    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_payment_methods")]
    pub payment_methods: Vec<String>,

    #[serde(default = "default_delivery_zones")]
    pub delivery_zones: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            description: default_store_description(),
            whatsapp: default_whatsapp(),
            email: default_email(),
            address: default_address(),
            payment_methods: default_payment_methods(),
            delivery_zones: default_delivery_zones(),
        }
    }
}

fn default_store_name() -> String {
    "Tienda de Juguetes Didácticos".to_string()
}

fn default_store_description() -> String {
    "Desarrollando mentes brillantes, un juguete a la vez".to_string()
}

fn default_whatsapp() -> String {
    "+5352497432".to_string()
}

fn default_email() -> String {
    "contacto@tiendajuguetes.com".to_string()
}

fn default_address() -> String {
    "Calle Principal #123, Ciudad".to_string()
}

fn default_payment_methods() -> Vec<String> {
    ["Efectivo", "Transferencia", "Tarjeta"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_delivery_zones() -> Vec<String> {
    ["Centro", "Norte", "Sur", "Este", "Oeste"]
        .into_iter()
        .map(String::from)
        .collect()
}
