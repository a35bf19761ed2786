// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Spreadsheet columns understood by the importer.

use strum::{Display, EnumIter};

/// A recognized spreadsheet column.
///
/// `Display` yields the canonical Spanish header written by the template;
/// declaration order is the template's column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Column {
    #[strum(serialize = "Nombre")]
    Name,
    #[strum(serialize = "Precio")]
    Price,
    #[strum(serialize = "Descripción")]
    Description,
    #[strum(serialize = "Edad")]
    Age,
    #[strum(serialize = "Habilidades")]
    Skills,
    #[strum(serialize = "Colección")]
    Collection,
    #[strum(serialize = "Imagen URL")]
    Image,
    #[strum(serialize = "Stock")]
    Stock,
    #[strum(serialize = "Visible")]
    Visible,
}

impl Column {
    /// Map a header cell to a column, in Spanish or English.
    ///
    /// Matching ignores case, accents and surrounding or repeated whitespace.
    pub fn from_header(header: &str) -> Option<Self> {
        let column = match fold(header).as_str() {
            "nombre" | "name" => Column::Name,
            "precio" | "price" => Column::Price,
            "descripcion" | "description" => Column::Description,
            "edad" | "age" => Column::Age,
            "habilidades" | "skills" => Column::Skills,
            "coleccion" | "collection" => Column::Collection,
            "imagen url" | "imagen" | "image url" | "image" => Column::Image,
            "stock" | "existencias" => Column::Stock,
            "visible" => Column::Visible,
            _ => return None,
        };
        Some(column)
    }
}

fn fold(header: &str) -> String {
    let lowered: String = header
        .trim_start_matches('\u{feff}')
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            other => other,
        })
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}
