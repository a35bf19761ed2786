// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Import runs: plan every row, then commit collections and products.

use std::path::Path;

use serde::Serialize;
use storefront_catalog::CatalogStore;
use storefront_config::ImportConfig;
use storefront_core::{Collection, CollectionDraft, ProductDraft, StorefrontError};
use tracing::info;

use crate::sheet::Spreadsheet;
use crate::validate::RowValidator;

/// Aggregate outcome of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    /// Number of products accepted.
    pub success: usize,
    /// Row errors in row order.
    pub errors: Vec<String>,
    /// Row warnings in row order.
    pub warnings: Vec<String>,
    /// Names of collections created by the run.
    pub new_collections: Vec<String>,
}

/// Everything an import would do, computed without touching the store.
#[derive(Debug, Clone, Default)]
pub struct ImportPlan {
    pub products: Vec<ProductDraft>,
    pub new_collections: Vec<CollectionDraft>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ImportPlan {
    /// Validate every row of `sheet` against the `existing` collections.
    ///
    /// `progress` receives a percentage before each row and 100 at the end.
    /// It is advisory only.
    pub fn build(
        sheet: &Spreadsheet,
        existing: &[Collection],
        config: &ImportConfig,
        mut progress: impl FnMut(u8),
    ) -> Self {
        let total = sheet.len();
        let mut validator = RowValidator::new(existing, config);
        let mut plan = ImportPlan::default();

        for (index, row) in sheet.rows().iter().enumerate() {
            progress(percent(index, total));
            let outcome = validator.validate(row);
            plan.errors.extend(outcome.errors);
            plan.warnings.extend(outcome.warnings);
            plan.products.extend(outcome.product);
        }
        progress(100);

        plan.new_collections = validator.into_created();
        plan
    }

    /// The result this plan would produce, without committing it.
    pub fn summary(&self) -> ImportResult {
        ImportResult {
            success: self.products.len(),
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
            new_collections: self.new_collections.iter().map(|c| c.name.clone()).collect(),
        }
    }

    /// Apply the plan: new collections first, then products.
    pub fn commit(self, store: &mut CatalogStore) -> ImportResult {
        let summary = self.summary();
        for collection in self.new_collections {
            store.add_collection(collection);
        }
        for product in self.products {
            store.add_product(product);
        }
        info!(
            imported = summary.success,
            rejected = summary.errors.len(),
            warnings = summary.warnings.len(),
            new_collections = summary.new_collections.len(),
            "import committed"
        );
        summary
    }
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    u8::try_from(done * 100 / total).unwrap_or(100)
}

/// Read, validate and commit a spreadsheet file in one step.
///
/// A file that cannot be read or parsed fails the whole run and leaves the
/// store untouched.
pub async fn import_file(
    path: &Path,
    store: &mut CatalogStore,
    config: &ImportConfig,
) -> Result<ImportResult, StorefrontError> {
    let sheet = Spreadsheet::read(path).await?;
    let plan = ImportPlan::build(&sheet, store.collections(), config, |_| {});
    Ok(plan.commit(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::seeded_store;
    use storefront_core::StoreConfig;

    fn sheet(csv: &str) -> Spreadsheet {
        Spreadsheet::parse(csv.as_bytes()).expect("parse")
    }

    #[test]
    fn plan_collects_messages_in_row_order() {
        let config = ImportConfig::default();
        let sheet = sheet("Nombre,Precio\n,1\nA,x\n,2\nB,3\n");
        let plan = ImportPlan::build(&sheet, &[], &config, |_| {});
        assert_eq!(plan.products.len(), 2);
        assert_eq!(
            plan.errors,
            vec!["Row 2: name is required", "Row 4: name is required"]
        );
        assert!(plan.warnings[0].starts_with("Row 3:"));
    }

    #[test]
    fn progress_ends_at_one_hundred() {
        let config = ImportConfig::default();
        let sheet = sheet("Nombre\nA\nB\nC\nD\n");
        let mut seen = Vec::new();
        ImportPlan::build(&sheet, &[], &config, |p| seen.push(p));
        assert_eq!(seen, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn commit_creates_collections_before_products() {
        let config = ImportConfig::default();
        let mut store = seeded_store(StoreConfig::default());
        let before = store.products().len();
        let sheet = sheet("Nombre,Colección\nRobot,Robótica\nDron,robótica\n");

        let plan = ImportPlan::build(&sheet, store.collections(), &config, |_| {});
        let result = plan.commit(&mut store);

        assert_eq!(result.success, 2);
        assert_eq!(result.new_collections, vec!["Robótica"]);
        assert_eq!(store.products().len(), before + 2);
        assert!(store.collection_by_name("ROBÓTICA").is_some());
        assert_eq!(store.products_in_collection("Robótica"), 2);
    }

    #[test]
    fn summary_does_not_mutate() {
        let config = ImportConfig::default();
        let store = CatalogStore::default();
        let sheet = sheet("Nombre\nA\n");
        let plan = ImportPlan::build(&sheet, store.collections(), &config, |_| {});
        let dry = plan.summary();
        assert_eq!(dry.success, 1);
        assert_eq!(dry.new_collections, vec!["General"]);
        assert!(store.products().is_empty());
    }

    #[test]
    fn percent_handles_empty_sheets() {
        assert_eq!(percent(0, 0), 100);
        assert_eq!(percent(1, 3), 33);
    }
}
