// SPDX-FileCopyrightText: 2026 Storefront Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Messaging deep link construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use storefront_core::StorefrontError;
use url::Url;

/// Characters left unescaped in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build `<base>/<digits of phone>?text=<encoded message>`.
///
/// The link is only produced; nothing is opened or sent.
pub fn checkout_link(link_base: &str, phone: &str, message: &str) -> Result<String, StorefrontError> {
    Url::parse(link_base)
        .map_err(|e| StorefrontError::Link(format!("invalid link base `{link_base}`: {e}")))?;

    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(StorefrontError::Link(format!(
            "store phone `{phone}` contains no digits"
        )));
    }

    Ok(format!(
        "{}/{digits}?text={}",
        link_base.trim_end_matches('/'),
        utf8_percent_encode(message, URI_COMPONENT)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_reduced_to_digits() {
        let link = checkout_link("https://wa.me", "+53 (524) 97-432", "hola").expect("link");
        assert_eq!(link, "https://wa.me/5352497432?text=hola");
    }

    #[test]
    fn message_is_component_encoded() {
        let link = checkout_link("https://wa.me/", "1", "¡Hola! a&b=c\n*x*").expect("link");
        assert_eq!(
            link,
            "https://wa.me/1?text=%C2%A1Hola!%20a%26b%3Dc%0A*x*"
        );
    }

    #[test]
    fn phone_without_digits_is_rejected() {
        let err = checkout_link("https://wa.me", "sin número", "x").expect_err("no digits");
        assert!(matches!(err, StorefrontError::Link(_)));
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = checkout_link("wa.me", "123", "x").expect_err("relative base");
        assert!(err.to_string().contains("invalid link base"));
    }
}
