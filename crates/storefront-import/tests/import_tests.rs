// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end import runs against a catalog store.

use storefront_core::StorefrontError;
use storefront_import::{ImportPlan, Spreadsheet, import_file, template_csv, write_template};
use storefront_test_utils::{SheetBuilder, TestHarness};

#[tokio::test]
async fn name_only_row_imports_with_defaults_into_first_collection() {
    let mut harness = TestHarness::builder().seeded().build().expect("harness");
    let first = harness.store.collections()[0].name.clone();
    let path = harness.write_file("foo.csv", &SheetBuilder::new(["Nombre"]).row(["Foo"]).build());

    let result = import_file(&path, &mut harness.store, &harness.config.import)
        .await
        .expect("import");

    assert_eq!(result.success, 1);
    assert!(result.errors.is_empty());
    assert!(result.new_collections.is_empty());

    let foo = harness.product_named("Foo").expect("imported");
    assert_eq!(foo.price, 0.0);
    assert_eq!(foo.stock, 0);
    assert_eq!(foo.age, "Todas las edades");
    assert_eq!(foo.collection, first);
    assert!(foo.visible);
}

#[tokio::test]
async fn unedited_template_round_trips_to_one_product() {
    let mut harness = TestHarness::builder().seeded().build().expect("harness");
    let path = harness.path("plantilla.csv");
    write_template(&path, harness.store.collections())
        .await
        .expect("write template");
    let before = harness.store.products().len();

    let result = import_file(&path, &mut harness.store, &harness.config.import)
        .await
        .expect("import");

    assert_eq!(result.success, 1);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert!(result.new_collections.is_empty());
    assert_eq!(harness.store.products().len(), before + 1);

    let example = harness
        .product_named("Ejemplo: Bloques de Construcción")
        .expect("example row imported");
    assert_eq!(example.price, 15000.0);
    assert_eq!(example.age, "2-5 años");
    assert_eq!(
        example.skills,
        vec!["Coordinación", "Creatividad", "Pensamiento espacial"]
    );
    assert_eq!(example.collection, "0-3 años");
    assert_eq!(example.image.as_deref(), Some("https://ejemplo.com/imagen.jpg"));
    assert_eq!(example.stock, 10);
    assert!(example.visible);
}

#[tokio::test]
async fn malformed_file_aborts_without_changes() {
    let mut harness = TestHarness::builder().seeded().build().expect("harness");
    let before_products = harness.store.products().len();
    let before_collections = harness.store.collections().len();
    let path = harness.write_file("roto.csv", b"Nombre,Colecci\xf3n\nPelota,Nueva\n");

    let err = import_file(&path, &mut harness.store, &harness.config.import)
        .await
        .expect_err("invalid utf-8");

    assert!(matches!(err, StorefrontError::Spreadsheet { .. }));
    assert_eq!(harness.store.products().len(), before_products);
    assert_eq!(harness.store.collections().len(), before_collections);
}

#[tokio::test]
async fn mixed_sheet_reports_every_problem_and_keeps_good_rows() {
    let mut harness = TestHarness::builder().seeded().build().expect("harness");
    let sheet = SheetBuilder::new([
        "Name",
        "Price",
        "Collection",
        "Image URL",
        "Visible",
        "Proveedor",
    ])
    .row(["Cubo", "12.5", "3-6 AÑOS", "ejemplo.com/cubo.png", "si", "ACME"])
    .row(["", "5", "", "", "", ""])
    .row(["Yoyo", "-4", "Clásicos", "::", "no", ""])
    .row(["Trompo", "gratis", "clásicos", "", "", ""])
    .build();
    let path = harness.write_file("mixto.csv", &sheet);

    let result = import_file(&path, &mut harness.store, &harness.config.import)
        .await
        .expect("import");

    assert_eq!(result.success, 3);
    assert_eq!(result.errors, vec!["Row 3: name is required"]);
    assert_eq!(result.new_collections, vec!["Clásicos"]);
    assert_eq!(result.warnings.len(), 4);
    assert!(result.warnings.iter().all(|w| w.starts_with("Row 4:") || w.starts_with("Row 5:")));

    let cubo = harness.product_named("Cubo").expect("cubo");
    assert_eq!(cubo.collection, "3-6 años");
    assert_eq!(cubo.image.as_deref(), Some("https://ejemplo.com/cubo.png"));

    let yoyo = harness.product_named("Yoyo").expect("yoyo");
    assert_eq!(yoyo.price, 0.0);
    assert_eq!(yoyo.image, None);
    assert!(!yoyo.visible);

    assert_eq!(harness.store.products_in_collection("Clásicos"), 2);
}

#[test]
fn dry_run_plan_leaves_store_untouched() {
    let harness = TestHarness::builder().build().expect("harness");
    let sheet = Spreadsheet::parse(&template_csv(&[]).expect("template")).expect("parse");
    let plan = ImportPlan::build(&sheet, harness.store.collections(), &harness.config.import, |_| {});

    let summary = plan.summary();
    assert_eq!(summary.success, 1);
    assert_eq!(summary.new_collections, vec!["0-3 años"]);
    assert!(harness.store.collections().is_empty());
}
