// crates/geostring-core/src/text.rs

//! # Text Folding
//!
//! The one place where raw text becomes a lookup key. The index builder,
//! the matcher and the horizontal resolver all go through [`Normalizer`],
//! so a key derived at build time always equals the key derived at query
//! time for the same raw string.

use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters removed from keys unless configured otherwise.
pub const DEFAULT_STRIP_PATTERN: &str = "[^a-z]";

static DEFAULT_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_STRIP_PATTERN).expect("invalid DEFAULT_STRIP_RE"));

/// Fold a raw value into its canonical display form.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Île-de-France` -> `Ile-de-France`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// Display names stored in ambiguity sets are in this form.
///
/// # Examples
///
/// ```rust
/// use geostring_core::text::fold_text;
///
/// assert_eq!(fold_text("  México "), "mexico");
/// assert_eq!(fold_text("Île-de-France"), "ile-de-france");
/// ```
pub fn fold_text(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase().trim().to_string()
}

/// Deterministic text → key transform.
///
/// A key is the [`fold_text`] form with every match of the strip pattern
/// removed. Collisions are intentional: `"México"` and `"Mexico"` share the
/// key `mexico`, and so do `"St. Louis"` and `"St Louis"`.
#[derive(Debug, Clone)]
pub struct Normalizer {
    strip: Regex,
}

impl Normalizer {
    /// Build a normalizer with a custom strip pattern.
    pub fn new(strip_pattern: &str) -> Result<Self> {
        Ok(Self {
            strip: Regex::new(strip_pattern)?,
        })
    }

    /// The pattern this normalizer removes.
    pub fn strip_pattern(&self) -> &str {
        self.strip.as_str()
    }

    /// Normalize raw text into a key.
    pub fn normalize(&self, text: &str) -> String {
        self.strip.replace_all(&fold_text(text), "").into_owned()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            strip: DEFAULT_STRIP_RE.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_case_and_padding() {
        assert_eq!(fold_text("  São Paulo  "), "sao paulo");
        assert_eq!(fold_text("ZÜRICH"), "zurich");
    }

    #[test]
    fn default_pattern_keeps_only_ascii_letters() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("St. Louis"), "stlouis");
        assert_eq!(n.normalize("Île-de-France"), "iledefrance");
        assert_eq!(n.normalize("  "), "");
    }

    #[test]
    fn accented_and_plain_spellings_collide() {
        let n = Normalizer::default();
        assert_eq!(n.normalize("México"), n.normalize("mexico"));
    }

    #[test]
    fn custom_pattern_is_respected() {
        let n = Normalizer::new("[^a-z ]").unwrap();
        assert_eq!(n.normalize("New York!"), "new york");
        assert_eq!(n.strip_pattern(), "[^a-z ]");
    }

    #[test]
    fn rejects_invalid_pattern() {
        assert!(Normalizer::new("[a-z").is_err());
    }
}
