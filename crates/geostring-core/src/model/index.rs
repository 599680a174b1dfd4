// crates/geostring-core/src/model/index.rs
use super::AmbiguitySet;
use crate::common::IndexStats;
use crate::text::Normalizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What one normalized key may denote.
///
/// A city key carries its canonical display name as a singleton `city`.
/// Subcountry-only and country-only keys leave `city` empty. `subcountry`
/// and `country` may hold several values when the same name exists in
/// several places.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub city: AmbiguitySet,
    pub subcountry: AmbiguitySet,
    pub country: AmbiguitySet,
}

/// Insertion-ordered key → entry table.
///
/// Replacing an existing key keeps its position; only new keys are
/// appended. The fuzzy matcher breaks ties by this order.
#[derive(Clone, Debug, Default)]
pub(crate) struct EntryTable {
    entries: Vec<(String, IndexEntry)>,
    positions: HashMap<String, usize>,
}

impl EntryTable {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, key: &str) -> Option<&IndexEntry> {
        self.positions.get(key).map(|&i| &self.entries[i].1)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut IndexEntry> {
        let i = *self.positions.get(key)?;
        Some(&mut self.entries[i].1)
    }

    /// The entry for `key`, appended as empty if absent.
    pub(crate) fn entry(&mut self, key: String) -> &mut IndexEntry {
        let i = match self.positions.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.positions.insert(key.clone(), i);
                self.entries.push((key, IndexEntry::default()));
                i
            }
        };
        &mut self.entries[i].1
    }

    /// Overwrites the slot for `key` in place, or appends it.
    pub(crate) fn insert(&mut self, key: String, entry: IndexEntry) {
        *self.entry(key) = entry;
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &IndexEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, IndexEntry)> {
        self.entries.into_iter()
    }
}

/// The master lookup table: normalized key → [`IndexEntry`].
///
/// Built once from gazetteer and nickname rows (see
/// [`build_index`](crate::model::build_index)) and read-only afterwards.
/// The index owns the [`Normalizer`] it was built with, so every query
/// derives keys exactly the way the index did.
///
/// Iteration order is the build order: city keys, then standalone
/// subcountry keys, then new country keys, then new nickname keys.
#[derive(Clone, Debug)]
pub struct LocationIndex {
    normalizer: Normalizer,
    table: EntryTable,
}

impl LocationIndex {
    pub(crate) fn from_table(normalizer: Normalizer, table: EntryTable) -> Self {
        Self { normalizer, table }
    }

    /// An index with no entries.
    pub fn empty(normalizer: Normalizer) -> Self {
        Self::from_table(normalizer, EntryTable::default())
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalize raw text with this index's rules.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Entry for an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&IndexEntry> {
        self.table.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.get(key).is_some()
    }

    /// Normalize `raw` and look the resulting key up.
    pub fn lookup(&self, raw: &str) -> Option<&IndexEntry> {
        self.get(&self.normalize(raw))
    }

    /// Keys in build order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.iter().map(|(k, _)| k)
    }

    /// `(key, entry)` pairs in build order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexEntry)> {
        self.table.iter()
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            entries: self.len(),
            ..IndexStats::default()
        };
        for (_, e) in self.iter() {
            if !e.city.is_empty() {
                stats.cities += 1;
            } else if !e.subcountry.is_empty() {
                stats.subcountries += 1;
            } else if !e.country.is_empty() {
                stats.countries += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(city: &str) -> IndexEntry {
        IndexEntry {
            city: AmbiguitySet::single(city),
            ..IndexEntry::default()
        }
    }

    #[test]
    fn replacing_a_key_keeps_its_position() {
        let mut table = EntryTable::default();
        table.insert("a".into(), entry("a"));
        table.insert("b".into(), entry("b"));
        table.insert("a".into(), entry("z"));
        table.insert("c".into(), entry("c"));

        let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(table.get("a").unwrap().city.as_single(), Some("z"));
    }

    #[test]
    fn lookup_normalizes_raw_text() {
        let mut table = EntryTable::default();
        table.insert("saopaulo".into(), entry("sao paulo"));
        let index = LocationIndex::from_table(Normalizer::default(), table);

        assert!(index.lookup("São Paulo").is_some());
        assert!(index.lookup("Rio").is_none());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn stats_classify_by_most_specific_slot() {
        let mut table = EntryTable::default();
        table.insert("paris".into(), entry("paris"));
        table.insert(
            "bavaria".into(),
            IndexEntry {
                subcountry: AmbiguitySet::single("bavaria"),
                country: AmbiguitySet::single("germany"),
                ..IndexEntry::default()
            },
        );
        table.insert(
            "germany".into(),
            IndexEntry {
                country: AmbiguitySet::single("germany"),
                ..IndexEntry::default()
            },
        );
        let stats = LocationIndex::from_table(Normalizer::default(), table).stats();
        assert_eq!(stats.entries, 3);
        assert_eq!((stats.cities, stats.subcountries, stats.countries), (1, 1, 1));
    }
}
