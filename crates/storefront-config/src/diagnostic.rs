// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration diagnostics.
//!
//! Figment extraction failures and semantic validation failures both become
//! [`ConfigError`]s. miette renders them with the offending TOML line and,
//! for misspelled keys, a Jaro-Winkler "did you mean" hint.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, GraphicalReportHandler, NamedSource, SourceSpan};
use thiserror::Error;

/// Name under which an in-memory TOML string is registered.
pub const INLINE_SOURCE: &str = "<inline>";

/// Similarity a known key needs before it is offered as a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A TOML document that took part in loading, kept for span lookup.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn inline(content: impl Into<String>) -> Self {
        Self::new(INLINE_SOURCE, content)
    }
}

/// A problem with the loaded configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(storefront::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// Dotted path of the key, e.g. `store.whatsap`.
        key: String,
        suggestion: Option<String>,
        valid_keys: Vec<String>,
        #[label("not a known key in this section")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("`{key}` has the wrong type: found {found}")]
    #[diagnostic(code(storefront::config::wrong_type), help("expected {expected}"))]
    WrongType {
        key: String,
        found: String,
        expected: String,
    },

    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(storefront::config::missing_key),
        help("add `{key} = <value>` to storefront.toml")
    )]
    MissingKey { key: String },

    /// A value parsed but is not usable.
    #[error("invalid `{key}`: {message}")]
    #[diagnostic(code(storefront::config::invalid_value))]
    Invalid { key: String, message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(storefront::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &[String]) -> String {
    let valid = valid_keys.join(", ");
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid}"),
        None => format!("valid keys: {valid}"),
    }
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Split a figment error into one diagnostic per underlying failure.
    pub fn from_figment(err: figment::Error, sources: &[SourceFile]) -> Vec<Self> {
        use figment::error::Kind;

        err.into_iter()
            .map(|error| match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let section = error.path.first().map(String::as_str);
                    let (span, src) = locate(&error, section, field, sources).unzip();
                    ConfigError::UnknownKey {
                        key: dotted(&error.path, Some(&field[..])),
                        suggestion: closest_key(field, expected.iter().copied()).map(String::from),
                        valid_keys: expected.iter().map(|k| k.to_string()).collect(),
                        span,
                        src,
                    }
                }
                Kind::MissingField(field) => ConfigError::MissingKey {
                    key: dotted(&error.path, Some(&field[..])),
                },
                Kind::InvalidType(found, expected) => ConfigError::WrongType {
                    key: dotted(&error.path, None),
                    found: found.to_string(),
                    expected: expected.clone(),
                },
                _ => ConfigError::Other(error.to_string()),
            })
            .collect()
    }
}

fn dotted(path: &[String], leaf: Option<&str>) -> String {
    path.iter()
        .map(String::as_str)
        .chain(leaf)
        .collect::<Vec<_>>()
        .join(".")
}

/// Span and source text for `key` in whichever source produced `error`.
fn locate(
    error: &figment::error::Error,
    section: Option<&str>,
    key: &str,
    sources: &[SourceFile],
) -> Option<(SourceSpan, NamedSource<String>)> {
    let origin = match error.metadata.as_ref().and_then(|m| m.source.as_ref()) {
        Some(figment::Source::File(path)) => path.display().to_string(),
        _ => INLINE_SOURCE.to_string(),
    };
    let source = sources.iter().find(|s| s.name == origin)?;
    let offset = key_offset(&source.content, section, key)?;
    Some((
        SourceSpan::new(offset.into(), key.len()),
        NamedSource::new(&source.name, source.content.clone()),
    ))
}

/// Byte offset of `key = ...` inside `[section]`, or before any section
/// header when `section` is `None`.
pub fn key_offset(content: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let mut current: Option<&str> = None;
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        let body = line.trim_start();
        let indent = line.len() - body.len();
        if let Some(header) = body.trim_end().strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            current = Some(header.trim());
        } else if current == section
            && let Some((name, _)) = body.split_once('=')
            && name.trim_end() == key
        {
            return Some(offset + indent);
        }
        offset += line.len();
    }
    None
}

/// The candidate most similar to `unknown`, if any is similar enough.
pub fn closest_key<'a>(
    unknown: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    candidates
        .into_iter()
        .map(|candidate| (strsim::jaro_winkler(unknown, candidate), candidate))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate)
}

/// Print every error to stderr with miette's graphical report handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut out = String::new();
        match handler.render_report(&mut out, error) {
            Ok(()) => eprint!("{out}"),
            Err(_) => eprintln!("error: {error}"),
        }
    }
    eprintln!("storefront: {} configuration error(s)", errors.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misspelled_phone_key_is_corrected() {
        let valid = ["name", "whatsapp", "email", "address"];
        assert_eq!(closest_key("whatsap", valid), Some("whatsapp"));
    }

    #[test]
    fn singular_is_corrected_to_plural() {
        let valid = ["payment_methods", "delivery_zones"];
        assert_eq!(closest_key("payment_method", valid), Some("payment_methods"));
    }

    #[test]
    fn unrelated_key_gets_no_suggestion() {
        assert_eq!(closest_key("zzzzzz", ["name", "description", "email"]), None);
    }

    #[test]
    fn key_is_found_in_its_own_section_only() {
        let content = "[catalog]\nnmae = 1\n[store]\nnmae = \"x\"\n";
        let at = key_offset(content, Some("store"), "nmae").expect("offset");
        assert_eq!(at, content.rfind("nmae").expect("present"));
    }

    #[test]
    fn crlf_and_indentation_are_tolerated() {
        let content = "[store]\r\nname = \"a\"\r\n  nmae=\"b\"\r\n";
        let at = key_offset(content, Some("store"), "nmae").expect("offset");
        assert_eq!(&content[at..at + 4], "nmae");
    }

    #[test]
    fn top_level_keys_stop_at_first_header() {
        let content = "stray = 1\n[store]\nstray = 2\n";
        assert_eq!(key_offset(content, None, "stray"), Some(0));
        assert_eq!(key_offset(content, Some("catalog"), "stray"), None);
    }

    #[test]
    fn help_lists_valid_keys() {
        let keys = vec!["name".to_string(), "whatsapp".to_string()];
        assert_eq!(
            unknown_key_help(Some("whatsapp"), &keys),
            "did you mean `whatsapp`? Valid keys: name, whatsapp"
        );
        assert_eq!(unknown_key_help(None, &keys[..1]), "valid keys: name");
    }

    #[test]
    fn unknown_key_carries_span_into_inline_source() {
        let toml = "[store]\nwhatsap = \"1\"\n";
        let err = crate::loader::load_config_from_str(toml).expect_err("unknown key");
        let errors = ConfigError::from_figment(err, &[SourceFile::inline(toml)]);
        match &errors[0] {
            ConfigError::UnknownKey { key, span, .. } => {
                assert_eq!(key, "store.whatsap");
                assert_eq!(span.as_ref().map(|s| s.offset()), Some(8));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
