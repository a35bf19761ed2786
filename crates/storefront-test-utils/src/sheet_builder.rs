// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CSV spreadsheet builder for import tests.

/// Builds CSV content with a header row and any number of data rows.
#[derive(Debug, Clone)]
pub struct SheetBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SheetBuilder {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells are written empty.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len().max(cells.len()), String::new());
        self.rows.push(cells);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        writer
            .write_record(&self.headers)
            .expect("failed to write header");
        for row in &self.rows {
            writer.write_record(row).expect("failed to write row");
        }
        writer
            .into_inner()
            .map_err(|e| e.into_error())
            .expect("failed to flush sheet")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_are_padded() {
        let bytes = SheetBuilder::new(["Nombre", "Precio"]).row(["A"]).build();
        assert_eq!(String::from_utf8(bytes).expect("utf-8"), "Nombre,Precio\nA,\n");
    }

    #[test]
    fn cells_with_commas_are_quoted() {
        let bytes = SheetBuilder::new(["Habilidades"]).row(["a, b"]).build();
        assert_eq!(String::from_utf8(bytes).expect("utf-8"), "Habilidades\n\"a, b\"\n");
    }
}
