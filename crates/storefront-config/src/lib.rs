// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Storefront catalog.
//!
//! Settings are layered with figment (defaults, system, user and local TOML
//! files, then `STOREFRONT_*` variables), rejected on unknown keys, checked
//! semantically, and reported as miette diagnostics.
//!
//! # Usage
//!
//! ```no_run
//! use storefront_config::load_and_validate;
//!
//! match load_and_validate() {
//!     Ok(config) => println!("store: {}", config.store.name),
//!     Err(errors) => storefront_config::render_errors(&errors),
//! }
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::{Path, PathBuf};

pub use diagnostic::{ConfigError, SourceFile, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    AdminConfig, CatalogConfig, CheckoutConfig, ImportConfig, LoggingConfig, StorefrontConfig,
};

/// Validate a loaded config, or turn the load failure into diagnostics
/// pointing into `sources`.
fn finish(
    loaded: Result<StorefrontConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<SourceFile>,
) -> Result<StorefrontConfig, Vec<ConfigError>> {
    let config = loaded.map_err(|err| ConfigError::from_figment(err, &sources()))?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Load from the standard search paths and environment, then validate.
pub fn load_and_validate() -> Result<StorefrontConfig, Vec<ConfigError>> {
    finish(loader::load_config(), search_path_sources)
}

/// Load from one explicit file plus environment, then validate.
pub fn load_and_validate_path(path: &Path) -> Result<StorefrontConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        read_sources([path.to_path_buf()])
    })
}

/// Load from a TOML string alone, then validate.
pub fn load_and_validate_str(toml_content: &str) -> Result<StorefrontConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![SourceFile::inline(toml_content)]
    })
}

fn search_path_sources() -> Vec<SourceFile> {
    let local = std::env::current_dir()
        .map(|dir| dir.join(loader::LOCAL_CONFIG_FILE))
        .unwrap_or_else(|_| PathBuf::from(loader::LOCAL_CONFIG_FILE));
    let candidates = [
        Some(local),
        loader::user_config_path(),
        Some(PathBuf::from(loader::SYSTEM_CONFIG_PATH)),
    ];
    read_sources(candidates.into_iter().flatten())
}

/// Read whichever of `paths` exist. Names match figment's file metadata.
fn read_sources(paths: impl IntoIterator<Item = PathBuf>) -> Vec<SourceFile> {
    paths
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            Some(SourceFile::new(path.display().to_string(), content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_and_validate() {
        let config = load_and_validate_str("").expect("defaults are valid");
        assert_eq!(config.store.name, "Tienda de Juguetes Didácticos");
    }

    #[test]
    fn explicit_file_errors_point_into_that_file() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[catalog]\nsed = true\n").expect("write config");

        let errors = load_and_validate_path(&path).expect_err("unknown key");
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ConfigError::UnknownKey { span: Some(_), .. }))
        );
    }

    #[test]
    fn missing_sources_are_skipped() {
        let sources = read_sources([PathBuf::from("/nonexistent/storefront.toml")]);
        assert!(sources.is_empty());
    }
}
