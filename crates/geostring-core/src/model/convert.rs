// crates/geostring-core/src/model/convert.rs
use super::{AmbiguitySet, EntryTable, LocationIndex, PlaceFilter};
use crate::raw::{GazetteerRow, NicknameRow};
use crate::text::Normalizer;
use std::time::Instant;
use tracing::{info, warn};

/// **Standard Converter:** Raw rows -> [`LocationIndex`].
///
/// Steps, in order:
/// 1. Fold every field of every row to display form.
/// 2. Apply `filter` (if any list is non-empty).
/// 3. Build provisional city, subcountry and country tables.
/// 4. Merge: cities first; a subcountry key that collides with a city
///    folds its names and countries into that city entry, otherwise it is
///    appended; country entries then overwrite any colliding slot.
/// 5. Overlay nicknames, overwriting colliding keys.
///
/// Blank keys are never indexed.
///
/// The country overwrite in step 4 and the nickname overwrite in step 5
/// can discard city or subcountry data for a key that also names a
/// country (or a nickname). That precedence is deliberate and tested.
pub fn build_index(
    places: &[GazetteerRow],
    nicknames: Option<&[NicknameRow]>,
    normalizer: Normalizer,
    filter: &PlaceFilter,
) -> LocationIndex {
    let start = Instant::now();

    let places: Vec<GazetteerRow> = places.iter().map(GazetteerRow::folded).collect();
    let selected = filter.select_rows(&places, |r| {
        (r.city.as_str(), r.subcountry.as_str(), r.country.as_str())
    });
    if selected.is_empty() && !places.is_empty() {
        warn!("place filter {filter:?} selected no gazetteer rows");
    }

    let mut cities = EntryTable::default();
    let mut subcountries = EntryTable::default();
    let mut countries = EntryTable::default();

    for row in &selected {
        let key = normalizer.normalize(&row.city);
        if !key.is_empty() {
            let e = cities.entry(key);
            e.city = AmbiguitySet::single(row.city.as_str());
            e.subcountry.insert(row.subcountry.as_str());
            e.country.insert(row.country.as_str());
        }

        let key = normalizer.normalize(&row.subcountry);
        if !key.is_empty() {
            let e = subcountries.entry(key);
            e.subcountry = AmbiguitySet::single(row.subcountry.as_str());
            e.country.insert(row.country.as_str());
        }

        let key = normalizer.normalize(&row.country);
        if !key.is_empty() {
            countries.entry(key).country = AmbiguitySet::single(row.country.as_str());
        }
    }

    let mut table = cities;
    for (key, sub) in subcountries.into_entries() {
        match table.get_mut(&key) {
            Some(city) => {
                city.subcountry.extend_from(&sub.subcountry);
                city.country.extend_from(&sub.country);
            }
            None => table.insert(key, sub),
        }
    }
    for (key, country) in countries.into_entries() {
        table.insert(key, country);
    }

    if let Some(nicknames) = nicknames {
        overlay_nicknames(&mut table, nicknames, &normalizer, filter);
    }

    info!(
        "location index created: {} entries in {} ms",
        table.len(),
        start.elapsed().as_millis()
    );
    LocationIndex::from_table(normalizer, table)
}

fn overlay_nicknames(
    table: &mut EntryTable,
    nicknames: &[NicknameRow],
    normalizer: &Normalizer,
    filter: &PlaceFilter,
) {
    let rows: Vec<NicknameRow> = nicknames.iter().map(NicknameRow::folded).collect();
    let selected = filter.select_rows(&rows, |r| {
        (r.city.as_str(), r.subcountry.as_str(), r.country.as_str())
    });

    let mut overlay = EntryTable::default();
    for row in selected {
        let key = normalizer.normalize(&row.nickname);
        if key.is_empty() {
            continue;
        }
        let e = overlay.entry(key);
        e.city.insert(row.city.as_str());
        e.subcountry.insert(row.subcountry.as_str());
        e.country.insert(row.country.as_str());
    }

    for (key, entry) in overlay.into_entries() {
        table.insert(key, entry);
    }
}

impl LocationIndex {
    /// Convenience wrapper around [`build_index`] with no filter.
    pub fn build(
        places: &[GazetteerRow],
        nicknames: Option<&[NicknameRow]>,
        normalizer: Normalizer,
    ) -> Self {
        build_index(places, nicknames, normalizer, &PlaceFilter::default())
    }
}

/// Shorthand used by the tests in this crate.
#[cfg(test)]
pub(crate) fn entry(
    city: &[&str],
    subcountry: &[&str],
    country: &[&str],
) -> super::IndexEntry {
    super::IndexEntry {
        city: city.iter().copied().collect(),
        subcountry: subcountry.iter().copied().collect(),
        country: country.iter().copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(places: &[GazetteerRow]) -> LocationIndex {
        LocationIndex::build(places, None, Normalizer::default())
    }

    #[test]
    fn city_entries_accumulate_ambiguity() {
        let index = build(&[
            GazetteerRow::new("Springfield", "United States", "Illinois"),
            GazetteerRow::new("Springfield", "United States", "Missouri"),
            GazetteerRow::new("Cambridge", "United Kingdom", "England"),
            GazetteerRow::new("Cambridge", "United States", "Massachusetts"),
        ]);

        assert_eq!(
            index.get("springfield"),
            Some(&entry(&["springfield"], &["illinois", "missouri"], &["united states"]))
        );
        assert_eq!(
            index.get("cambridge"),
            Some(&entry(
                &["cambridge"],
                &["england", "massachusetts"],
                &["united kingdom", "united states"]
            ))
        );
        assert_eq!(
            index.get("illinois"),
            Some(&entry(&[], &["illinois"], &["united states"]))
        );
        assert_eq!(index.get("unitedstates"), Some(&entry(&[], &[], &["united states"])));
    }

    #[test]
    fn display_names_are_folded() {
        let index = build(&[GazetteerRow::new("  Zürich ", "Switzerland", "Zürich")]);
        let e = index.get("zurich").unwrap();
        assert_eq!(e.city.as_single(), Some("zurich"));
        assert_eq!(e.subcountry.as_single(), Some("zurich"));
    }

    #[test]
    fn colliding_subcountry_folds_into_city() {
        let index = build(&[
            GazetteerRow::new("Granada", "Spain", "Andalusia"),
            GazetteerRow::new("Rivas", "Nicaragua", "Granada"),
        ]);
        assert_eq!(
            index.get("granada"),
            Some(&entry(&["granada"], &["andalusia", "granada"], &["nicaragua", "spain"]))
        );
    }

    #[test]
    fn country_overwrites_colliding_keys() {
        let index = build(&[
            GazetteerRow::new("Atlanta", "United States", "Georgia"),
            GazetteerRow::new("Tbilisi", "Georgia", "Tbilisi"),
            GazetteerRow::new("Luxembourg", "Luxembourg", "Luxembourg"),
        ]);
        // The US state sense of "georgia" is lost to the country.
        assert_eq!(index.get("georgia"), Some(&entry(&[], &[], &["georgia"])));
        // So is the city sense of "luxembourg".
        assert_eq!(index.get("luxembourg"), Some(&entry(&[], &[], &["luxembourg"])));
    }

    #[test]
    fn insertion_order_is_cities_subcountries_countries_nicknames() {
        let index = LocationIndex::build(
            &[
                GazetteerRow::new("Boston", "United States", "Massachusetts"),
                GazetteerRow::new("Cambridge", "United Kingdom", "England"),
                GazetteerRow::new("Boston", "United Kingdom", "England"),
            ],
            Some(&[
                NicknameRow::new("Beantown", "Boston", "United States", "Massachusetts"),
                NicknameRow::new("Cambridge", "Cambridge", "United States", "Massachusetts"),
            ]),
            Normalizer::default(),
        );
        let keys: Vec<_> = index.keys().collect();
        assert_eq!(
            keys,
            vec![
                "boston",
                "cambridge",
                "massachusetts",
                "england",
                "unitedstates",
                "unitedkingdom",
                "beantown"
            ]
        );
    }

    #[test]
    fn nicknames_overwrite_and_aggregate() {
        let index = LocationIndex::build(
            &[GazetteerRow::new("Paris", "France", "Ile-de-France")],
            Some(&[
                NicknameRow::new("Paris", "Paris", "United States", "Texas"),
                NicknameRow::new("Big Apple", "New York City", "United States", "New York"),
                NicknameRow::new("Big Apple", "Manhattan", "United States", "New York"),
            ]),
            Normalizer::default(),
        );
        assert_eq!(
            index.get("paris"),
            Some(&entry(&["paris"], &["texas"], &["united states"]))
        );
        assert_eq!(
            index.get("bigapple"),
            Some(&entry(&["manhattan", "new york city"], &["new york"], &["united states"]))
        );
    }

    #[test]
    fn blank_keys_are_never_indexed() {
        let index = LocationIndex::build(
            &[GazetteerRow::new("Vaduz", "Liechtenstein", "")],
            Some(&[NicknameRow::new("!!!", "Vaduz", "Liechtenstein", "")]),
            Normalizer::default(),
        );
        assert!(!index.contains_key(""));
        assert_eq!(index.get("vaduz"), Some(&entry(&["vaduz"], &[], &["liechtenstein"])));
    }

    #[test]
    fn filter_restricts_rows_and_nicknames() {
        let index = build_index(
            &[
                GazetteerRow::new("Boston", "United States", "Massachusetts"),
                GazetteerRow::new("London", "United Kingdom", "England"),
            ],
            Some(&[
                NicknameRow::new("Beantown", "Boston", "United States", "Massachusetts"),
                NicknameRow::new("The Smoke", "London", "United Kingdom", "England"),
            ]),
            Normalizer::default(),
            &PlaceFilter::new().countries(["United Kingdom"]),
        );
        let keys: Vec<_> = index.keys().collect();
        assert_eq!(keys, vec!["london", "england", "unitedkingdom", "thesmoke"]);
    }
}
