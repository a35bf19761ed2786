// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storefront product queries.
//!
//! Reads are a pure projection over a product slice: the store never
//! filters on its own, callers pass `store.products()` through a
//! [`ProductQuery`].

use serde::{Deserialize, Serialize};
use storefront_core::Product;

use crate::age::matches_age;

/// Filter value meaning "no filter" for collection, age and skill.
pub const ALL: &str = "all";

/// Storefront search and filter criteria. Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring of the name or description.
    pub search: String,
    /// Exact collection name, or empty/`all`.
    pub collection: String,
    /// Age range token, or empty/`all`.
    pub age: String,
    /// Case-insensitive substring of any skill, or empty/`all`.
    pub skill: String,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.collection = name.into();
        self
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = skill.into();
        self
    }

    /// Whether a single product is shown for this query.
    ///
    /// Hidden products never match.
    pub fn matches(&self, product: &Product) -> bool {
        if !product.visible {
            return false;
        }

        let term = self.search.to_lowercase();
        let matches_search = product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term);

        let matches_collection = is_unset(&self.collection) || product.collection == self.collection;

        let matches_skill = is_unset(&self.skill) || {
            let skill = self.skill.to_lowercase();
            product
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(&skill))
        };

        matches_search
            && matches_collection
            && matches_age(&product.age, &self.age)
            && matches_skill
    }

    /// Products shown for this query, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

fn is_unset(value: &str) -> bool {
    value.is_empty() || value == ALL
}

/// Distinct values offered by the storefront filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct age tokens in first-appearance order.
    pub ages: Vec<String>,
    /// Distinct skills in first-appearance order.
    pub skills: Vec<String>,
}

/// Collect filter facets across all products, hidden ones included.
pub fn facets(products: &[Product]) -> Facets {
    let mut out = Facets::default();
    for product in products {
        if !out.ages.contains(&product.age) {
            out.ages.push(product.age.clone());
        }
        for skill in &product.skills {
            if !out.skills.contains(skill) {
                out.skills.push(skill.clone());
            }
        }
    }
    out
}
