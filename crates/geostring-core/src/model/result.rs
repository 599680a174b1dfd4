// crates/geostring-core/src/model/result.rs
use super::{AmbiguitySet, IndexEntry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of matching a single token against an index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The token as it appeared in the input.
    pub raw_input: String,
    /// The token after normalization.
    pub normalized_input: String,
    /// Best index key, `None` when nothing matched.
    pub matched_key: Option<String>,
    pub city: AmbiguitySet,
    pub subcountry: AmbiguitySet,
    pub country: AmbiguitySet,
    /// Edit distance to `matched_key`, `None` when nothing matched.
    pub edit_distance: Option<usize>,
    /// `edit_distance / max(len(normalized_input), len(matched_key))`,
    /// or `1.0` when nothing matched.
    pub tolerance: f64,
}

impl MatchResult {
    pub(crate) fn hit(
        raw_input: &str,
        normalized_input: String,
        key: &str,
        entry: &IndexEntry,
        edit_distance: usize,
    ) -> Self {
        let longest = normalized_input.chars().count().max(key.chars().count()).max(1);
        Self {
            raw_input: raw_input.to_string(),
            normalized_input,
            matched_key: Some(key.to_string()),
            city: entry.city.clone(),
            subcountry: entry.subcountry.clone(),
            country: entry.country.clone(),
            edit_distance: Some(edit_distance),
            tolerance: edit_distance as f64 / longest as f64,
        }
    }

    pub(crate) fn miss(raw_input: &str, normalized_input: String) -> Self {
        Self {
            raw_input: raw_input.to_string(),
            normalized_input,
            matched_key: None,
            city: AmbiguitySet::new(),
            subcountry: AmbiguitySet::new(),
            country: AmbiguitySet::new(),
            edit_distance: None,
            tolerance: 1.0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched_key.is_some()
    }
}

/// The final record for a whole input string.
///
/// Each field may still hold several candidates when the input could not
/// be disambiguated, or nothing at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub city: AmbiguitySet,
    pub subcountry: AmbiguitySet,
    pub country: AmbiguitySet,
}

impl ResolvedLocation {
    /// `true` when every populated field holds exactly one value.
    pub fn is_unambiguous(&self) -> bool {
        [&self.city, &self.subcountry, &self.country]
            .iter()
            .all(|s| s.len() <= 1)
    }
}

impl From<&MatchResult> for ResolvedLocation {
    fn from(m: &MatchResult) -> Self {
        Self {
            city: m.city.clone(),
            subcountry: m.subcountry.clone(),
            country: m.country.clone(),
        }
    }
}

impl fmt::Display for ResolvedLocation {
    /// `city | subcountry | country`, ambiguity sets joined by `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.city, self.subcountry, self.country)
    }
}

/// A raw input string together with one [`MatchResult`] per token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geostring {
    pub input: String,
    pub results: Vec<MatchResult>,
}
