// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory catalog store and storefront filtering.
//!
//! [`CatalogStore`] is the single owner of products, collections and store
//! settings; [`ProductQuery`] is the read side used by the storefront.

pub mod age;
pub mod filter;
pub mod seed;
pub mod store;

pub use age::matches_age;
pub use filter::{Facets, ProductQuery, facets};
pub use seed::seeded_store;
pub use store::CatalogStore;
