// crates/geostring-core/src/model/ambiguity.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Separator used when an ambiguity set is rendered as a single string.
pub const AMBIGUITY_SEPARATOR: char = '?';

/// The candidate values a key may denote at one hierarchy level.
///
/// Members are kept sorted and deduplicated. Empty strings are never
/// stored: a blank source cell means "unknown at this level", not a value.
///
/// `Display` renders the members joined by [`AMBIGUITY_SEPARATOR`]
/// (`"illinois?missouri"`), which is the string form used at the output
/// boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmbiguitySet(BTreeSet<String>);

impl AmbiguitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding exactly `value`, or nothing when `value` is blank.
    pub fn single(value: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.insert(value);
        set
    }

    /// Adds `value`; blank values are ignored. Returns `true` if it was new.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() {
            return false;
        }
        self.0.insert(value)
    }

    pub fn extend_from(&mut self, other: &AmbiguitySet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the set holds exactly one value.
    pub fn is_resolved(&self) -> bool {
        self.0.len() == 1
    }

    /// The single member, if the set is resolved.
    pub fn as_single(&self) -> Option<&str> {
        if self.is_resolved() {
            self.0.iter().next().map(String::as_str)
        } else {
            None
        }
    }

    pub fn intersects(&self, other: &AmbiguitySet) -> bool {
        self.0.intersection(&other.0).next().is_some()
    }

    /// Members in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Keeps only the members for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|v| keep(v));
    }
}

impl fmt::Display for AmbiguitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{AMBIGUITY_SEPARATOR}")?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for AmbiguitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AmbiguitySet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
