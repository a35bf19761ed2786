// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Storefront catalog.

use thiserror::Error;

/// The primary error type used across the catalog, import and checkout crates.
///
/// Row-level import problems are not errors: they are collected as strings
/// inside `ImportResult` and never leave the importer as an `Err`.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The spreadsheet could not be parsed. Aborts the whole import run.
    #[error("malformed spreadsheet: {message}")]
    Spreadsheet {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reading or writing a file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Required form fields were left blank. Nothing was mutated.
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    /// A collection cannot be deleted while products still reference it.
    #[error(
        "collection `{name}` cannot be deleted: {product_count} product(s) still reference it"
    )]
    CollectionInUse { name: String, product_count: usize },

    /// The referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u64 },

    /// An admin-only operation was attempted without logging in.
    #[error("admin access required")]
    Unauthorized,

    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The checkout link could not be assembled.
    #[error("invalid checkout link: {0}")]
    Link(String),
}

impl StorefrontError {
    /// Wrap a spreadsheet parser error.
    pub fn spreadsheet(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StorefrontError::Spreadsheet {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
