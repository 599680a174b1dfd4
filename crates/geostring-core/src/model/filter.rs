// crates/geostring-core/src/model/filter.rs
use super::{AmbiguitySet, EntryTable, IndexEntry, LocationIndex};
use crate::text::fold_text;
use serde::{Deserialize, Serialize};

/// Restricts an index to a subset of places.
///
/// The three dimensions are independent ORs: a row or entry passes if it
/// matches any non-empty list. Values are compared in display form, so
/// `"United States"` and `"united states"` select the same rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceFilter {
    pub cities: Vec<String>,
    pub subcountries: Vec<String>,
    pub countries: Vec<String>,
}

impl PlaceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cities<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.cities = values.into_iter().map(|v| v.as_ref().to_string()).collect();
        self
    }

    pub fn subcountries<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.subcountries = values.into_iter().map(|v| v.as_ref().to_string()).collect();
        self
    }

    pub fn countries<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.countries = values.into_iter().map(|v| v.as_ref().to_string()).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty() && self.subcountries.is_empty() && self.countries.is_empty()
    }

    /// The same filter with every value in display form.
    pub(crate) fn folded(&self) -> PlaceFilter {
        let fold = |values: &[String]| -> Vec<String> {
            values.iter().map(|v| fold_text(v)).collect()
        };
        PlaceFilter {
            cities: fold(&self.cities),
            subcountries: fold(&self.subcountries),
            countries: fold(&self.countries),
        }
    }

    /// Selects rows for index construction.
    ///
    /// Rows are gathered country matches first, then subcountry matches,
    /// then city matches. A row matching several dimensions appears more
    /// than once; the builder's first-seen ordering makes that harmless.
    /// `fields` maps a row to its folded `(city, subcountry, country)`.
    pub(crate) fn select_rows<'a, T, F>(&self, rows: &'a [T], fields: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> (&str, &str, &str),
    {
        if self.is_empty() {
            return rows.iter().collect();
        }
        let folded = self.folded();

        let mut out = Vec::new();
        for (wanted, slot) in [
            (&folded.countries, 2),
            (&folded.subcountries, 1),
            (&folded.cities, 0),
        ] {
            if wanted.is_empty() {
                continue;
            }
            out.extend(rows.iter().filter(|row| {
                let (city, subcountry, country) = fields(row);
                let value = match slot {
                    0 => city,
                    1 => subcountry,
                    _ => country,
                };
                wanted.iter().any(|w| w == value)
            }));
        }
        out
    }

    /// `true` if the entry's membership intersects any non-empty list.
    /// Expects a [`folded`](Self::folded) filter.
    pub(crate) fn admits(&self, entry: &IndexEntry) -> bool {
        let hit = |wanted: &[String], set: &AmbiguitySet| wanted.iter().any(|w| set.contains(w));
        hit(&self.countries, &entry.country)
            || hit(&self.subcountries, &entry.subcountry)
            || hit(&self.cities, &entry.city)
    }
}

impl LocationIndex {
    /// A narrowed copy holding only the entries admitted by `filter`.
    ///
    /// Surviving entries keep their data and their relative order, so
    /// fuzzy tie-breaks inside the subset agree with the full index. An
    /// empty filter admits nothing.
    pub fn subset(&self, filter: &PlaceFilter) -> LocationIndex {
        let filter = filter.folded();
        let mut table = EntryTable::default();
        for (key, entry) in self.iter() {
            if filter.admits(entry) {
                table.insert(key.to_string(), entry.clone());
            }
        }
        LocationIndex::from_table(self.normalizer().clone(), table)
    }
}
