// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `storefront import` command implementation.
//!
//! Reads the spreadsheet, shows a preview of the first rows, validates
//! every row and commits the result unless `--dry-run` is given. Importing
//! is an admin action, so the configured admin password must be supplied.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;
use storefront_admin::AdminGate;
use storefront_catalog::CatalogStore;
use storefront_config::StorefrontConfig;
use storefront_core::StorefrontError;
use storefront_import::{ImportPlan, ImportResult, RawRow, Spreadsheet};
use tracing::debug;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file with a header row.
    file: PathBuf,
    /// Validate and report without changing the catalog.
    #[arg(long)]
    dry_run: bool,
    /// Number of rows to preview (defaults to `import.preview_rows`).
    #[arg(long)]
    preview: Option<usize>,
    /// Admin password.
    #[arg(long, default_value = "")]
    password: String,
    /// Output the import result as JSON.
    #[arg(long)]
    json: bool,
}

pub async fn run_import(
    config: &StorefrontConfig,
    store: &mut CatalogStore,
    args: &ImportArgs,
    plain: bool,
) -> Result<(), StorefrontError> {
    let mut gate = AdminGate::new(config.admin.password.clone());
    gate.login(&args.password);
    gate.require_admin()?;

    let sheet = Spreadsheet::read(&args.file).await?;
    let use_color = !plain && std::io::stdout().is_terminal();

    if !args.json {
        let rows = args.preview.unwrap_or(config.import.preview_rows);
        print_preview(sheet.preview(rows), sheet.len());
        if !sheet.ignored_columns().is_empty() {
            println!("  ignored columns: {}", sheet.ignored_columns().join(", "));
        }
    }

    let plan = ImportPlan::build(&sheet, store.collections(), &config.import, |percent| {
        debug!(percent, "import progress");
    });
    let result = if args.dry_run {
        plan.summary()
    } else {
        plan.commit(store)
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print_result(&result, args.dry_run, store.products().len(), use_color);
    }
    Ok(())
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn print_preview(rows: &[RawRow], total: usize) {
    println!();
    println!("  preview ({} of {total} rows)", rows.len());
    println!("  {}", "-".repeat(35));
    for row in rows {
        println!(
            "    {:>3}  {}  {}  {}  {}",
            row.row,
            cell(&row.name),
            cell(&row.price),
            cell(&row.age),
            cell(&row.collection)
        );
    }
}

fn print_result(result: &ImportResult, dry_run: bool, catalog_size: usize, use_color: bool) {
    let verb = if dry_run { "would import" } else { "imported" };
    println!();
    if use_color {
        use colored::Colorize;
        println!("  {} {} product(s)", "✓".green(), format!("{verb} {}", result.success).green());
        for collection in &result.new_collections {
            println!("  {} new collection: {collection}", "+".cyan());
        }
        for warning in &result.warnings {
            println!("  {} {warning}", "!".yellow());
        }
        for error in &result.errors {
            println!("  {} {error}", "✗".red());
        }
    } else {
        println!("  [OK] {verb} {} product(s)", result.success);
        for collection in &result.new_collections {
            println!("  [NEW] collection: {collection}");
        }
        for warning in &result.warnings {
            println!("  [WARN] {warning}");
        }
        for error in &result.errors {
            println!("  [ERR] {error}");
        }
    }
    println!("  catalog now has {catalog_size} product(s)");
    println!();
}
