// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Storefront integration tests.
//!
//! # Components
//!
//! - [`TestHarness`] - Catalog store, admin gate and scratch directory
//! - [`SheetBuilder`] - CSV spreadsheets for import scenarios

pub mod harness;
pub mod sheet_builder;

pub use harness::{TEST_ADMIN_PASSWORD, TestHarness, product_draft};
pub use sheet_builder::SheetBuilder;
