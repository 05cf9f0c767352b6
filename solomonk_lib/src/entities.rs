//! Lenient HTML character reference decoding.
//!
//! Every reference is resolved on its own: an unknown one stays as written
//! and never stops the references around it from being decoded.

use quick_xml::escape::resolve_html5_entity;
use regex::{Captures, Regex};

use crate::error::ExtractError;

const REFERENCE_PATTERN: &str = r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*)(;?)";

/// Named references the site may emit without a trailing semicolon
/// (`&amp co`). Besides these, only Latin-1 names are accepted bare.
const BARE_NAMES: [&str; 8] = ["amp", "lt", "gt", "quot", "AMP", "LT", "GT", "QUOT"];

pub struct EntityDecoder {
    pattern: Regex,
}

impl EntityDecoder {
    pub fn new() -> Result<Self, ExtractError> {
        let pattern = Regex::new(REFERENCE_PATTERN).map_err(|source| ExtractError::Pattern {
            field: "entity",
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Decodes numeric and named references in `raw`.
    pub fn decode(&self, raw: &str) -> String {
        if !raw.contains('&') {
            return raw.to_string();
        }
        self.pattern
            .replace_all(raw, |cap: &Captures| {
                let body = &cap[1];
                let terminated = !cap[2].is_empty();
                resolve(body, terminated).unwrap_or_else(|| cap[0].to_string())
            })
            .into_owned()
    }
}

fn resolve(body: &str, terminated: bool) -> Option<String> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => num.parse::<u32>().ok(),
        };
        let ch = code
            .filter(|&c| c != 0)
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        return Some(ch.to_string());
    }

    let value = resolve_html5_entity(body)?;
    if terminated || BARE_NAMES.contains(&body) || is_latin1(value) {
        Some(value.to_string())
    } else {
        None
    }
}

fn is_latin1(value: &str) -> bool {
    let mut chars = value.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if ('\u{a0}'..='\u{ff}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> String {
        EntityDecoder::new().unwrap().decode(raw)
    }

    #[test]
    fn named_and_numeric() {
        assert_eq!(decode("Cr&eacute;atures &#38; co &#x27;"), "Créatures & co '");
        assert_eq!(decode("plain"), "plain");
    }

    #[test]
    fn bare_ampersand_does_not_block_decoding() {
        assert_eq!(decode("Tom & Jerry &amp; co"), "Tom & Jerry & co");
    }

    #[test]
    fn unknown_entity_kept_next_to_known_one() {
        assert_eq!(decode("A &foo; &amp; B"), "A &foo; & B");
        assert_eq!(decode("Tofu &notanentity; royal"), "Tofu &notanentity; royal");
    }

    #[test]
    fn legacy_names_without_semicolon() {
        assert_eq!(decode("Cr&eacute;ature &amp co"), "Créature & co");
        assert_eq!(decode("caf&eacute noir"), "café noir");
    }

    #[test]
    fn non_legacy_name_needs_semicolon() {
        assert_eq!(decode("a &hellip b"), "a &hellip b");
        assert_eq!(decode("a &hellip; b"), "a … b");
    }

    #[test]
    fn invalid_code_points_become_replacement() {
        assert_eq!(decode("&#0;"), "\u{fffd}");
        assert_eq!(decode("&#xD800;"), "\u{fffd}");
        assert_eq!(decode("&#99999999999;"), "\u{fffd}");
    }
}
