//! Framing annotations attached to fields.
//!
//! An annotation is a comma separated list of tokens. In Rust sources it is written as
//! `#[tls(uint16prefixed)]` or `#[tls = "uint16prefixed"]`; struct-tag text such as
//! `tls:"uint16prefixed" json:"key"` is also understood, in which case only the `tls` tag is read.
//! Tokens that are not recognized are ignored.

use crate::schema::{PrefixWidth, UintWidth};

const TAG_START: &str = "tls:\"";

/// Tokens of a single field's annotation, in the order they were written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotation {
    tokens: Vec<String>,
}

impl Annotation {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let list = struct_tag(text).unwrap_or(text);
        Self {
            tokens: list
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// The first length prefix token, if any.
    #[must_use]
    pub fn length_prefix(&self) -> Option<PrefixWidth> {
        self.tokens().find_map(|token| match token {
            "uint8prefixed" => Some(PrefixWidth::U8),
            "uint16prefixed" => Some(PrefixWidth::U16),
            "uint24prefixed" => Some(PrefixWidth::U24),
            _ => None,
        })
    }

    /// The first non-standard integer width token, if any.
    #[must_use]
    pub fn uint_width(&self) -> Option<UintWidth> {
        self.tokens().find_map(|token| match token {
            "uint24" => Some(UintWidth::U24),
            "uint48" => Some(UintWidth::U48),
            _ => None,
        })
    }
}

/// Extracts the value of the `tls` tag from space separated struct-tag text.
fn struct_tag(text: &str) -> Option<&str> {
    text.split(' ')
        .find_map(|tag| tag.strip_prefix(TAG_START))
        .map(|value| value.strip_suffix('"').unwrap_or(value))
}
