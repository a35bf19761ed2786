// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading.
//!
//! Later layers win: compiled defaults, `/etc/storefront/storefront.toml`,
//! `~/.config/storefront/storefront.toml`, `./storefront.toml`, then
//! `STOREFRONT_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::StorefrontConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/storefront/storefront.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "storefront.toml";

/// Load every layer. Missing files are skipped.
pub fn load_config() -> Result<StorefrontConfig, figment::Error> {
    build_figment().extract()
}

/// Defaults overlaid with one TOML string. Files and environment are ignored.
pub fn load_config_from_str(toml_content: &str) -> Result<StorefrontConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StorefrontConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Defaults, then `path`, then environment variables.
pub fn load_config_from_path(path: &Path) -> Result<StorefrontConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StorefrontConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full provider stack behind [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(StorefrontConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `~/.config/storefront/storefront.toml`, when a config dir exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("storefront").join(LOCAL_CONFIG_FILE))
}

/// `STOREFRONT_STORE_PAYMENT_METHODS` maps to `store.payment_methods`: only
/// the first underscore after a section name becomes a dot.
fn env_provider() -> Env {
    Env::prefixed("STOREFRONT_").map(|key| {
        section_key(key.as_str()).into()
    })
}

/// Map a prefix-stripped env var name to its dotted config key.
fn section_key(key: &str) -> String {
    const SECTIONS: &[&str] = &["store", "catalog", "admin", "import", "checkout", "logging"];

    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(section_key("store_name"), "store.name");
        assert_eq!(section_key("store_payment_methods"), "store.payment_methods");
        assert_eq!(section_key("admin_password"), "admin.password");
        assert_eq!(section_key("import_default_age"), "import.default_age");
        assert_eq!(section_key("logging_level"), "logging.level");
    }

    #[test]
    fn unknown_env_section_is_left_alone() {
        assert_eq!(section_key("shipping_zone"), "shipping_zone");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config_from_path(Path::new("/nonexistent/storefront.toml"))
            .expect("missing file should be skipped");
        assert_eq!(config.import.default_collection, "General");
    }
}
