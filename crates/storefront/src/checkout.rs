// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `storefront checkout` command implementation.

use clap::Args;
use storefront_catalog::CatalogStore;
use storefront_checkout::{Cart, CustomerInfo, checkout};
use storefront_config::StorefrontConfig;
use storefront_core::{ProductId, StorefrontError};

#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Cart line as `<product id>:<quantity>`. Repeatable.
    #[arg(long = "item", value_parser = parse_item, required = true)]
    pub items: Vec<(u64, u32)>,
    /// Customer full name.
    #[arg(long, default_value = "")]
    name: String,
    /// Customer phone.
    #[arg(long, default_value = "")]
    phone: String,
    /// Delivery address.
    #[arg(long, default_value = "")]
    address: String,
    /// Chosen payment method.
    #[arg(long, default_value = "")]
    payment: String,
    /// Preferred delivery time.
    #[arg(long)]
    time: Option<String>,
    /// Additional comments.
    #[arg(long)]
    comments: Option<String>,
    /// Output message and link as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_item(raw: &str) -> Result<(u64, u32), String> {
    let (id, quantity) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <id>:<quantity>, got `{raw}`"))?;
    let id = id
        .trim()
        .parse()
        .map_err(|e| format!("invalid product id `{id}`: {e}"))?;
    let quantity = quantity
        .trim()
        .parse()
        .map_err(|e| format!("invalid quantity `{quantity}`: {e}"))?;
    Ok((id, quantity))
}

/// Fill a cart from `(id, quantity)` lines. Hidden products cannot be bought.
fn build_cart(store: &CatalogStore, items: &[(u64, u32)]) -> Result<Cart, StorefrontError> {
    let mut cart = Cart::new();
    for &(id, quantity) in items {
        let product = store
            .product(ProductId(id))
            .filter(|p| p.visible)
            .ok_or(StorefrontError::NotFound {
                entity: "product",
                id,
            })?;
        let current = cart.add(product);
        cart.set_quantity(product.id, (current - 1).saturating_add(quantity));
    }
    Ok(cart)
}

pub fn run_checkout(
    config: &StorefrontConfig,
    store: &CatalogStore,
    args: &CheckoutArgs,
) -> Result<(), StorefrontError> {
    let cart = build_cart(store, &args.items)?;
    let customer = CustomerInfo {
        full_name: args.name.clone(),
        phone: args.phone.clone(),
        address: args.address.clone(),
        payment_method: args.payment.clone(),
        preferred_time: args.time.clone(),
        comments: args.comments.clone(),
    };

    let handoff = checkout(
        store.store_config(),
        &config.checkout.tagline,
        &config.checkout.link_base,
        &cart,
        &customer,
    )?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&handoff).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        println!("{}", handoff.message);
        println!();
        println!("{}", handoff.link);
    }
    Ok(())
}
