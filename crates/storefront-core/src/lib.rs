// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Storefront catalog.
//!
//! This crate provides the domain types (products, collections, store
//! settings) and the error type shared by every other crate in the
//! workspace.

pub mod error;
pub mod types;

pub use error::StorefrontError;
pub use types::{
    Collection, CollectionDraft, CollectionId, Product, ProductDraft, ProductId, StoreConfig,
};
