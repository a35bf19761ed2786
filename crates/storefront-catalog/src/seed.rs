// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in demo catalog.
//!
//! Returns hardcoded collections and products used when `catalog.seed` is
//! enabled. Nothing is read from disk.

use storefront_core::{Collection, CollectionId, Product, ProductId, StoreConfig};

use crate::store::CatalogStore;

/// Demo collections: one per age bracket.
pub fn seed_collections() -> Vec<Collection> {
    vec![
        Collection {
            id: CollectionId(1),
            name: "0-3 años".to_string(),
            description: "Manos, ojos y asombro. Juguetes que estimulan los sentidos y \
                          convierten el juego en aprendizaje."
                .to_string(),
        },
        Collection {
            id: CollectionId(2),
            name: "3-6 años".to_string(),
            description: "Imaginación y creatividad en pleno desarrollo.".to_string(),
        },
        Collection {
            id: CollectionId(3),
            name: "6+ años".to_string(),
            description: "Desafíos y aprendizaje avanzado.".to_string(),
        },
    ]
}

/// Demo products referencing [`seed_collections`].
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(1),
            name: "BABY GYM \"Explora y crece\"".to_string(),
            price: 16000.0,
            description: "Gimnasio para bebés con actividades sensoriales y juguetes colgantes."
                .to_string(),
            age: "0+".to_string(),
            skills: vec![
                "Estimulación sensorial".to_string(),
                "Coordinación ojo-mano".to_string(),
                "Desarrollo motor".to_string(),
            ],
            collection: "0-3 años".to_string(),
            image: None,
            visible: true,
            stock: 0,
        },
        Product {
            id: ProductId(2),
            name: "Bloques Apilables Coloridos".to_string(),
            price: 8500.0,
            description: "Bloques de madera natural en diferentes formas y colores.".to_string(),
            age: "1-3 años".to_string(),
            skills: vec![
                "Reconocimiento de formas".to_string(),
                "Coordinación".to_string(),
                "Pensamiento espacial".to_string(),
            ],
            collection: "0-3 años".to_string(),
            image: None,
            visible: true,
            stock: 0,
        },
        Product {
            id: ProductId(3),
            name: "Rompecabezas Educativo".to_string(),
            price: 12000.0,
            description: "Rompecabezas de madera con piezas grandes.".to_string(),
            age: "3-6 años".to_string(),
            skills: vec![
                "Pensamiento lógico".to_string(),
                "Paciencia".to_string(),
                "Resolución de problemas".to_string(),
            ],
            collection: "3-6 años".to_string(),
            image: None,
            visible: true,
            stock: 0,
        },
    ]
}

/// A store holding the demo collections and products.
pub fn seeded_store(config: StoreConfig) -> CatalogStore {
    CatalogStore::with_records(config, seed_collections(), seed_products())
}
