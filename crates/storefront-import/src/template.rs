// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Downloadable import template.

use std::path::Path;

use storefront_core::{Collection, StorefrontError};
use strum::IntoEnumIterator;
use tracing::info;

use crate::column::Column;

/// Collection used by the example row when the catalog has none.
pub const EXAMPLE_COLLECTION: &str = "0-3 años";

fn example_cell(column: Column, collections: &[Collection]) -> String {
    match column {
        Column::Name => "Ejemplo: Bloques de Construcción".into(),
        Column::Price => "15000".into(),
        Column::Description => "Set de bloques coloridos para desarrollo motor".into(),
        Column::Age => "2-5 años".into(),
        Column::Skills => "Coordinación, Creatividad, Pensamiento espacial".into(),
        Column::Collection => collections
            .first()
            .map_or(EXAMPLE_COLLECTION, |c| c.name.as_str())
            .into(),
        Column::Image => "https://ejemplo.com/imagen.jpg".into(),
        Column::Stock => "10".into(),
        Column::Visible => "SI".into(),
    }
}

/// Render the template: the header row plus one example row.
pub fn template_csv(collections: &[Collection]) -> Result<Vec<u8>, StorefrontError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(Column::iter().map(|c| c.to_string()))
        .map_err(|e| StorefrontError::spreadsheet("could not write template header", e))?;
    writer
        .write_record(Column::iter().map(|c| example_cell(c, collections)))
        .map_err(|e| StorefrontError::spreadsheet("could not write template row", e))?;
    writer
        .into_inner()
        .map_err(|e| StorefrontError::spreadsheet("could not finish template", e.into_error()))
}

/// Write the template to `path`.
pub async fn write_template(path: &Path, collections: &[Collection]) -> Result<(), StorefrontError> {
    let bytes = template_csv(collections)?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| StorefrontError::Io {
            path: path.display().to_string(),
            source,
        })?;
    info!(path = %path.display(), "import template written");
    Ok(())
}
