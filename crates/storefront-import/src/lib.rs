// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bulk product import from spreadsheets.
//!
//! A run reads the file once, validates every row into a [`ImportPlan`]
//! and commits the plan to a [`storefront_catalog::CatalogStore`]. Row
//! problems become messages in the [`ImportResult`]; only an unreadable
//! file fails the run.

pub mod column;
pub mod run;
pub mod sheet;
pub mod template;
pub mod validate;

pub use column::Column;
pub use run::{ImportPlan, ImportResult, import_file};
pub use sheet::{RawRow, Spreadsheet};
pub use template::{template_csv, write_template};
pub use validate::{RowOutcome, RowValidator};
