// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `storefront products` and `storefront collections`.

use std::io::IsTerminal;

use clap::Args;
use serde::Serialize;
use storefront_catalog::{CatalogStore, ProductQuery, facets};
use storefront_core::{Product, StorefrontError};

#[derive(Args, Debug)]
pub struct ProductsArgs {
    /// Case-insensitive text in the name or description.
    #[arg(long, default_value = "")]
    search: String,
    /// Collection name, or `all`.
    #[arg(long, default_value = "")]
    collection: String,
    /// Age range such as `3-6 años` or `6+`, or `all`.
    #[arg(long, default_value = "")]
    age: String,
    /// Skill substring, or `all`.
    #[arg(long, default_value = "")]
    skill: String,
    /// Output as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ProductsResponse<'a> {
    products: Vec<&'a Product>,
    ages: Vec<String>,
    skills: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CollectionRow<'a> {
    id: u64,
    name: &'a str,
    description: &'a str,
    products: usize,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

pub fn run_products(
    store: &CatalogStore,
    args: &ProductsArgs,
    plain: bool,
) -> Result<(), StorefrontError> {
    let query = ProductQuery::new()
        .search(args.search.as_str())
        .collection(args.collection.as_str())
        .age(args.age.as_str())
        .skill(args.skill.as_str());
    let products = query.apply(store.products());

    if args.json {
        let facets = facets(store.products());
        let response = ProductsResponse {
            products,
            ages: facets.ages,
            skills: facets.skills,
        };
        println!("{}", to_json(&response));
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    println!();
    println!("  {} ({} products)", store.store_config().name, products.len());
    println!("  {}", "-".repeat(35));
    for product in products {
        let price = format!("${:.2}", product.price);
        if use_color {
            use colored::Colorize;
            println!(
                "    {:>3}  {}  {}  [{}]  {}",
                product.id.0,
                product.name.bold(),
                price.green(),
                product.age,
                product.collection.dimmed()
            );
        } else {
            println!(
                "    {:>3}  {}  {}  [{}]  {}",
                product.id.0, product.name, price, product.age, product.collection
            );
        }
    }
    println!();
    Ok(())
}

pub fn run_collections(store: &CatalogStore, json: bool, plain: bool) -> Result<(), StorefrontError> {
    let rows: Vec<CollectionRow<'_>> = store
        .collections()
        .iter()
        .map(|c| CollectionRow {
            id: c.id.0,
            name: &c.name,
            description: &c.description,
            products: store.products_in_collection(&c.name),
        })
        .collect();

    if json {
        println!("{}", to_json(&rows));
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    println!();
    println!("  Collections");
    println!("  {}", "-".repeat(35));
    for row in rows {
        if use_color {
            use colored::Colorize;
            println!(
                "    {:>3}  {} ({})  {}",
                row.id,
                row.name.bold(),
                row.products,
                row.description.dimmed()
            );
        } else {
            println!(
                "    {:>3}  {} ({})  {}",
                row.id, row.name, row.products, row.description
            );
        }
    }
    println!();
    Ok(())
}
