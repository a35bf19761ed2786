// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storefront - toy store catalog with spreadsheet import and messaging checkout.
//!
//! This is the binary entry point. The catalog lives in memory for the
//! duration of one command.

mod catalog;
mod checkout;
mod import;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_catalog::{CatalogStore, seeded_store};
use storefront_config::StorefrontConfig;

/// Storefront - toy store catalog with spreadsheet import and messaging checkout.
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of the standard search paths.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List visible products, optionally filtered.
    Products(catalog::ProductsArgs),
    /// List collections with their product counts.
    Collections {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Import products from a CSV spreadsheet (admin only).
    Import(import::ImportArgs),
    /// Write the import spreadsheet template.
    Template {
        /// Destination file.
        out: PathBuf,
    },
    /// Build the order message and messaging link for a cart.
    Checkout(checkout::CheckoutArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => storefront_config::load_and_validate_path(path),
        None => storefront_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            storefront_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    let mut store = initial_store(&config);
    let result = match cli.command {
        Commands::Products(args) => catalog::run_products(&store, &args, cli.plain),
        Commands::Collections { json } => catalog::run_collections(&store, json, cli.plain),
        Commands::Import(args) => import::run_import(&config, &mut store, &args, cli.plain).await,
        Commands::Template { out } => {
            storefront_import::write_template(&out, store.collections()).await
        }
        Commands::Checkout(args) => checkout::run_checkout(&config, &store, &args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn initial_store(config: &StorefrontConfig) -> CatalogStore {
    if config.catalog.seed {
        seeded_store(config.store.clone())
    } else {
        CatalogStore::new(config.store.clone())
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("storefront={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
