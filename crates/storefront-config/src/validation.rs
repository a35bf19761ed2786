// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that serde attributes cannot express.

use crate::diagnostic::ConfigError;
use crate::model::StorefrontConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check a deserialized configuration, reporting every problem at once.
pub fn validate_config(config: &StorefrontConfig) -> Result<(), Vec<ConfigError>> {
    let store = &config.store;
    let mut errors = Vec::new();

    if blank(&store.name) {
        errors.push(ConfigError::invalid("store.name", "must not be empty"));
    }
    if !store.whatsapp.chars().any(|c| c.is_ascii_digit()) {
        errors.push(ConfigError::invalid(
            "store.whatsapp",
            format!("`{}` contains no digits to dial", store.whatsapp),
        ));
    }
    for (list, values) in [
        ("store.payment_methods", &store.payment_methods),
        ("store.delivery_zones", &store.delivery_zones),
    ] {
        errors.extend(
            values
                .iter()
                .enumerate()
                .filter(|(_, v)| blank(v))
                .map(|(i, _)| ConfigError::invalid(format!("{list}[{i}]"), "must not be blank")),
        );
    }

    if blank(&config.import.default_collection) {
        errors.push(ConfigError::invalid(
            "import.default_collection",
            "must not be empty",
        ));
    }
    if config.import.preview_rows == 0 {
        errors.push(ConfigError::invalid("import.preview_rows", "must be at least 1"));
    }

    if let Err(e) = url::Url::parse(&config.checkout.link_base) {
        errors.push(ConfigError::invalid(
            "checkout.link_base",
            format!("`{}` is not an absolute URL ({e})", config.checkout.link_base),
        ));
    }

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ConfigError::invalid(
            "logging.level",
            format!("`{}` is not one of {}", config.logging.level, LOG_LEVELS.join(", ")),
        ));
    }

    if config.admin.password.as_deref() == Some("") {
        errors.push(ConfigError::invalid(
            "admin.password",
            "must not be empty when set; omit it to disable admin access",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
