// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-row validation and defaulting.
//!
//! Only a missing name rejects a row. Every other problem is repaired with a
//! default and reported as a warning. Collections named by rows but absent
//! from the catalog are synthesized once per run.

use storefront_config::ImportConfig;
use storefront_core::{Collection, CollectionDraft, ProductDraft};
use tracing::{debug, warn};
use url::Url;

use crate::sheet::RawRow;

const VISIBLE_TOKENS: [&str; 5] = ["si", "sí", "yes", "true", "1"];

/// Result of validating one row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowOutcome {
    pub product: Option<ProductDraft>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validation state for one import run.
///
/// The resolution set starts as the catalog's collections and grows with
/// every collection synthesized by an earlier row.
#[derive(Debug)]
pub struct RowValidator<'a> {
    config: &'a ImportConfig,
    known: Vec<String>,
    fallback: String,
    created: Vec<CollectionDraft>,
}

impl<'a> RowValidator<'a> {
    pub fn new(existing: &[Collection], config: &'a ImportConfig) -> Self {
        let fallback = existing
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| config.default_collection.clone());
        Self {
            config,
            known: existing.iter().map(|c| c.name.clone()).collect(),
            fallback,
            created: Vec::new(),
        }
    }

    /// Collections synthesized so far, in creation order.
    pub fn created(&self) -> &[CollectionDraft] {
        &self.created
    }

    pub fn into_created(self) -> Vec<CollectionDraft> {
        self.created
    }

    pub fn validate(&mut self, row: &RawRow) -> RowOutcome {
        let n = row.row;
        let Some(name) = row.name.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            debug!(row = n, "row rejected: no name");
            return RowOutcome {
                errors: vec![format!("Row {n}: name is required")],
                ..RowOutcome::default()
            };
        };

        let mut warnings = Vec::new();

        let price = parse_amount(row.price.as_deref(), "price", n, &mut warnings);
        let stock = parse_amount(row.stock.as_deref(), "stock", n, &mut warnings);
        if stock.fract() != 0.0 {
            warnings.push(format!("Row {n}: stock {stock} is not a whole number, rounded down"));
        }
        let stock = if stock > f64::from(u32::MAX) {
            warnings.push(format!("Row {n}: stock {stock} exceeds {}, capped", u32::MAX));
            u32::MAX
        } else {
            stock as u32
        };

        let description = row.description.clone().unwrap_or_default();
        let age = row
            .age
            .clone()
            .unwrap_or_else(|| self.config.default_age.clone());
        let skills = row.skills.as_deref().map(split_skills).unwrap_or_default();
        let collection = self.resolve_collection(row.collection.as_deref(), n, &mut warnings);
        let image = row
            .image
            .as_deref()
            .and_then(|raw| accept_image(raw, n, &mut warnings));
        let visible = row
            .visible
            .as_deref()
            .is_none_or(|v| VISIBLE_TOKENS.contains(&v.trim().to_lowercase().as_str()));

        debug!(row = n, name, collection = %collection, "row accepted");
        RowOutcome {
            product: Some(ProductDraft {
                name: name.to_string(),
                price,
                description,
                age,
                skills,
                collection,
                image,
                visible,
                stock: Some(stock),
            }),
            errors: Vec::new(),
            warnings,
        }
    }

    fn resolve_collection(&mut self, raw: Option<&str>, n: usize, warnings: &mut Vec<String>) -> String {
        let requested = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.fallback)
            .to_string();

        if let Some(canonical) = self.lookup(&requested) {
            return canonical.to_string();
        }

        warn!(row = n, collection = %requested, "synthesizing missing collection");
        warnings.push(format!(
            "Row {n}: collection `{requested}` did not exist and was created"
        ));
        self.known.push(requested.clone());
        self.created.push(CollectionDraft::new(
            requested.clone(),
            self.config.placeholder_description.clone(),
        ));
        requested
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.known
            .iter()
            .find(|known| known.to_lowercase() == wanted)
            .map(String::as_str)
    }
}

/// Parse a price or stock cell. Absent is zero; unparseable and negative
/// values become zero with a warning.
fn parse_amount(raw: Option<&str>, field: &str, n: usize, warnings: &mut Vec<String>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        Ok(value) if value.is_finite() => {
            warnings.push(format!("Row {n}: negative {field} {value} set to 0"));
            0.0
        }
        _ => {
            warnings.push(format!("Row {n}: {field} `{raw}` is not a number, set to 0"));
            0.0
        }
    }
}

fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Keep the URL as written if it parses, or with an `https://` prefix if
/// that parses instead.
fn accept_image(raw: &str, n: usize, warnings: &mut Vec<String>) -> Option<String> {
    if Url::parse(raw).is_ok() {
        return Some(raw.to_string());
    }
    let prefixed = format!("https://{raw}");
    if Url::parse(&prefixed).is_ok() {
        return Some(prefixed);
    }
    warn!(row = n, image = raw, "dropping invalid image url");
    warnings.push(format!("Row {n}: image URL `{raw}` is invalid and was ignored"));
    None
}
