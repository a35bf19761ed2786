// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cart arithmetic and the messaging checkout handoff.
//!
//! Checkout renders an order summary and wraps it in a messaging link for
//! the store's phone number. The link is returned to the caller; no network
//! I/O happens here.

pub mod cart;
pub mod link;
pub mod order;

use serde::Serialize;
use storefront_core::{StoreConfig, StorefrontError};
use tracing::info;

pub use cart::{Cart, CartItem};
pub use link::checkout_link;
pub use order::{CustomerInfo, OrderSummary};

/// Rendered order message and the link that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkout {
    pub message: String,
    pub link: String,
}

/// Validate the order and build the handoff link.
pub fn checkout(
    store: &StoreConfig,
    tagline: &str,
    link_base: &str,
    cart: &Cart,
    customer: &CustomerInfo,
) -> Result<Checkout, StorefrontError> {
    let message = OrderSummary::new(store, tagline, cart, customer)?.to_string();
    let link = checkout_link(link_base, &store.whatsapp, &message)?;
    info!(
        lines = cart.items().len(),
        units = cart.item_count(),
        total = cart.total(),
        "checkout link built"
    );
    Ok(Checkout { message, link })
}
