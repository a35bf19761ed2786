// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Storefront catalog.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
pub use storefront_core::StoreConfig;

/// Top-level Storefront configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Store identity, contact details, payment methods and delivery zones.
    #[serde(default)]
    pub store: StoreConfig,

    /// Initial catalog contents.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Admin gate settings.
    #[serde(default)]
    pub admin: AdminConfig,

    /// Spreadsheet import defaults.
    #[serde(default)]
    pub import: ImportConfig,

    /// Checkout handoff settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Load the demo collections and products on startup.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

fn default_seed() -> bool {
    true
}

/// Admin gate configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Shared admin password. `None` keeps the admin gate closed.
    #[serde(default)]
    pub password: Option<String>,
}

/// Spreadsheet import defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImportConfig {
    /// Collection used for rows without one when the catalog has no collections.
    #[serde(default = "default_collection")]
    pub default_collection: String,

    /// Age token stored for rows without an age.
    #[serde(default = "default_age")]
    pub default_age: String,

    /// Description given to collections synthesized during an import.
    #[serde(default = "default_placeholder_description")]
    pub placeholder_description: String,

    /// Number of raw rows shown before committing an import.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_collection: default_collection(),
            default_age: default_age(),
            placeholder_description: default_placeholder_description(),
            preview_rows: default_preview_rows(),
        }
    }
}

fn default_collection() -> String {
    "General".to_string()
}

fn default_age() -> String {
    "Todas las edades".to_string()
}

fn default_placeholder_description() -> String {
    "Colección creada automáticamente durante la importación".to_string()
}

fn default_preview_rows() -> usize {
    5
}

/// Checkout handoff configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutConfig {
    /// Base of the messaging link. The phone digits are appended as a path segment.
    #[serde(default = "default_link_base")]
    pub link_base: String,

    /// Line printed under the store name in the order summary.
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            link_base: default_link_base(),
            tagline: default_tagline(),
        }
    }
}

fn default_link_base() -> String {
    "https://wa.me".to_string()
}

fn default_tagline() -> String {
    "Desarrollando mentes brillantes, un juguete a la vez".to_string()
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sections_are_populated() {
        let config = StorefrontConfig::default();
        assert!(config.catalog.seed);
        assert!(config.admin.password.is_none());
        assert_eq!(config.import.default_collection, "General");
        assert_eq!(config.import.default_age, "Todas las edades");
        assert_eq!(config.import.preview_rows, 5);
        assert_eq!(config.checkout.link_base, "https://wa.me");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_store_section_keeps_other_defaults() {
        let toml_str = r#"
[store]
name = "Juguetería Sol"
"#;
        let config: StorefrontConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.name, "Juguetería Sol");
        assert_eq!(config.store.payment_methods.len(), 3);
    }

    #[test]
    fn unknown_store_key_is_rejected() {
        let toml_str = r#"
[store]
whatsap = "+1 555"
"#;
        assert!(toml::from_str::<StorefrontConfig>(toml_str).is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let toml_str = r#"
[shipping]
zones = ["Norte"]
"#;
        assert!(toml::from_str::<StorefrontConfig>(toml_str).is_err());
    }
}
