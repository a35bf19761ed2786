// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Spreadsheet reading: CSV bytes to typed raw rows.

use std::path::Path;

use serde::Serialize;
use storefront_core::StorefrontError;
use tracing::debug;

use crate::column::Column;

/// One data row as read from the file, before validation.
///
/// Blank cells and missing columns are both `None`; present values are
/// trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawRow {
    /// Spreadsheet row number. The header is row 1.
    pub row: usize,
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub age: Option<String>,
    pub skills: Option<String>,
    pub collection: Option<String>,
    pub image: Option<String>,
    pub stock: Option<String>,
    pub visible: Option<String>,
}

impl RawRow {
    fn slot(&mut self, column: Column) -> &mut Option<String> {
        match column {
            Column::Name => &mut self.name,
            Column::Price => &mut self.price,
            Column::Description => &mut self.description,
            Column::Age => &mut self.age,
            Column::Skills => &mut self.skills,
            Column::Collection => &mut self.collection,
            Column::Image => &mut self.image,
            Column::Stock => &mut self.stock,
            Column::Visible => &mut self.visible,
        }
    }

    fn is_blank(&self) -> bool {
        [
            &self.name,
            &self.price,
            &self.description,
            &self.age,
            &self.skills,
            &self.collection,
            &self.image,
            &self.stock,
            &self.visible,
        ]
        .iter()
        .all(|cell| cell.is_none())
    }
}

/// A parsed spreadsheet: its data rows plus the headers that were ignored.
#[derive(Debug, Clone, Default)]
pub struct Spreadsheet {
    rows: Vec<RawRow>,
    ignored_columns: Vec<String>,
}

impl Spreadsheet {
    /// Parse CSV content with a header row.
    ///
    /// An input with no non-blank cells is an empty spreadsheet. A header row
    /// without a name column, or any record the CSV reader rejects, fails the
    /// whole parse.
    pub fn parse(data: &[u8]) -> Result<Self, StorefrontError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data);

        let headers = reader
            .headers()
            .map_err(|e| StorefrontError::spreadsheet("could not read header row", e))?
            .clone();
        let mut columns: Vec<Option<Column>> = Vec::with_capacity(headers.len());
        let mut ignored_columns = Vec::new();
        for header in headers.iter() {
            let column = Column::from_header(header).filter(|c| !columns.contains(&Some(*c)));
            if column.is_none() && !header.trim().is_empty() {
                ignored_columns.push(header.trim().to_string());
            }
            columns.push(column);
        }

        if !columns.contains(&Some(Column::Name)) {
            let headerless = headers.iter().all(|h| h.trim().is_empty());
            if headerless
                && reader
                    .records()
                    .all(|r| r.is_ok_and(|r| r.iter().all(|c| c.trim().is_empty())))
            {
                return Ok(Self::default());
            }
            return Err(StorefrontError::Spreadsheet {
                message: format!("header row has no `{}` column", Column::Name),
                source: None,
            });
        }

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                StorefrontError::spreadsheet(format!("could not read row {}", index + 2), e)
            })?;

            let mut row = RawRow {
                row: index + 2,
                ..RawRow::default()
            };
            for (cell, column) in record.iter().zip(&columns) {
                let Some(column) = column else { continue };
                let value = cell.trim();
                if !value.is_empty() {
                    *row.slot(*column) = Some(value.to_string());
                }
            }

            if row.is_blank() {
                debug!(row = row.row, "skipping blank row");
                continue;
            }
            rows.push(row);
        }

        debug!(rows = rows.len(), ignored = ignored_columns.len(), "spreadsheet parsed");
        Ok(Self {
            rows,
            ignored_columns,
        })
    }

    /// Read and parse a spreadsheet file.
    pub async fn read(path: &Path) -> Result<Self, StorefrontError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|source| StorefrontError::Io {
                path: path.display().to_string(),
                source,
            })?;
        Self::parse(&data)
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// The first `n` rows, for display before committing.
    pub fn preview(&self, n: usize) -> &[RawRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Headers present in the file that map to no known column.
    pub fn ignored_columns(&self) -> &[String] {
        &self.ignored_columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
