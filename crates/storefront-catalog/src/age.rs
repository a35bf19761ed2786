// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free-text age range matching.
//!
//! Age tokens are whatever the admin typed (`0-3 años`, `3+`, `6-12 meses`,
//! `0+`). Matching is deliberately permissive: an exact match after
//! normalization wins, otherwise the numbers in both tokens are compared as
//! open-ended bounds, closed intervals or single points.

use std::sync::LazyLock;

use regex::Regex;

/// Unit words removed (years) or shortened to `m` (months) during normalization.
static YEARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"años?|año?").expect("valid regex"));
static MONTHS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"meses?|mes?").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Filter value meaning "no age filter".
pub const ANY_AGE: &str = "all";

/// Normalize an age token for exact comparison.
pub fn normalize_age(age: &str) -> String {
    let lower = age.to_lowercase();
    let without_years = YEARS.replace_all(&lower, "");
    let months = MONTHS.replace_all(&without_years, "m");
    WHITESPACE.replace_all(&months, "").into_owned()
}

/// All integers in the token, in order of appearance.
///
/// Numbers too large for `u32` are skipped.
pub fn extract_numbers(age: &str) -> Vec<u32> {
    NUMBER
        .find_iter(age)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Whether a product's age token satisfies an age filter.
///
/// An empty filter or `all` matches everything. Steps are applied in order
/// and the first applicable one decides:
/// 1. normalized tokens are equal;
/// 2. either side has no numbers: no match;
/// 3. a `+` on the product makes its first number a lower bound for the
///    filter's first number, and vice versa for a `+` on the filter;
/// 4. two numbers on both sides: the closed intervals overlap;
/// 5. one number against two: the number lies inside the interval;
/// 6. anything else: no match.
pub fn matches_age(product_age: &str, filter_age: &str) -> bool {
    if filter_age.is_empty() || filter_age == ANY_AGE {
        return true;
    }

    if normalize_age(product_age) == normalize_age(filter_age) {
        return true;
    }

    let product = extract_numbers(product_age);
    let filter = extract_numbers(filter_age);
    if product.is_empty() || filter.is_empty() {
        return false;
    }

    if product_age.contains('+') {
        return filter[0] >= product[0];
    }
    if filter_age.contains('+') {
        return product[0] >= filter[0];
    }

    match (product.as_slice(), filter.as_slice()) {
        ([p_min, p_max, ..], [f_min, f_max, ..]) => !(p_max < f_min || p_min > f_max),
        ([p], [f_min, f_max, ..]) => p >= f_min && p <= f_max,
        ([p_min, p_max, ..], [f]) => f >= p_min && f <= p_max,
        _ => false,
    }
}
