// crates/geostring-core/src/resolve.rs

//! # Resolver
//!
//! tokenize → match → filter by tolerance → disambiguate.
//!
//! Disambiguation runs only when more than one token survives:
//!
//! - **Vertical**: per field, pool every surviving token's candidates and
//!   count votes. Cities keep every candidate. Subcountries and countries
//!   keep the values tied for the most votes. A token with nothing at a
//!   level casts a blank vote there, which can win but never appears in
//!   the output.
//! - **Horizontal**: keep subcountries that lie in a resolved country, then
//!   cities that lie in a surviving subcountry. Containment is checked by
//!   re-looking each candidate up in the index. A level with no concrete
//!   values left imposes no constraint on the level below it.

use crate::model::{AmbiguitySet, IndexEntry, LocationIndex, MatchResult, ResolvedLocation};
use crate::tokenize::Tokenizer;
use std::collections::HashMap;
use tracing::{debug, info};

/// Tolerance used when the caller does not pick one.
pub const DEFAULT_MAX_TOLERANCE: f64 = 0.25;

/// Knobs for [`LocationIndex::resolve`].
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Exact-match mode. Forces the tolerance to `0`.
    pub exact: bool,
    /// Tokens whose tolerance exceeds this are dropped. Applied clamped to
    /// `[0, 1]`; `NaN` is treated as `0`.
    pub max_tolerance: f64,
    /// Report dropped tokens at `info` level instead of `debug`.
    pub verbose: bool,
    pub tokenizer: Tokenizer,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            exact: false,
            max_tolerance: DEFAULT_MAX_TOLERANCE,
            verbose: false,
            tokenizer: Tokenizer::default(),
        }
    }
}

impl ResolveOptions {
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn max_tolerance(mut self, max_tolerance: f64) -> Self {
        self.max_tolerance = max_tolerance;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// The threshold actually applied.
    pub fn effective_tolerance(&self) -> f64 {
        if self.exact || self.max_tolerance.is_nan() {
            0.0
        } else {
            self.max_tolerance.clamp(0.0, 1.0)
        }
    }
}

macro_rules! diagnostic {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!($($arg)+);
        } else {
            debug!($($arg)+);
        }
    };
}

impl LocationIndex {
    /// Resolve a free-text input into a [`ResolvedLocation`].
    ///
    /// Returns `None` when no token survives tolerance filtering, which
    /// includes empty input and input made only of delimiters.
    pub fn resolve(&self, input: &str, opts: &ResolveOptions) -> Option<ResolvedLocation> {
        let max_tolerance = opts.effective_tolerance();
        let parsed = self.parse(input, opts.exact, &opts.tokenizer);

        let mut survivors: Vec<&MatchResult> = Vec::with_capacity(parsed.results.len());
        for m in &parsed.results {
            match &m.matched_key {
                None => {
                    diagnostic!(opts.verbose, "no match for {:?}; removing", m.raw_input);
                }
                Some(key) if m.tolerance > max_tolerance => {
                    diagnostic!(
                        opts.verbose,
                        "tolerance between {:?} and {:?} ({:.4}) exceeds max tolerance of {}; removing",
                        m.raw_input,
                        key,
                        m.tolerance,
                        max_tolerance
                    );
                }
                Some(_) => survivors.push(m),
            }
        }

        match survivors.as_slice() {
            [] => {
                diagnostic!(opts.verbose, "no results for {:?}", input);
                None
            }
            [only] => Some(ResolvedLocation::from(*only)),
            many => Some(self.horizontal(vertical(many))),
        }
    }

    /// Cross-field consistency: country ⊇ subcountry ⊇ city.
    pub(crate) fn horizontal(&self, mut resolved: ResolvedLocation) -> ResolvedLocation {
        if !resolved.country.is_empty() {
            let countries = self.expand(&resolved.country, |e| &e.country);
            resolved.subcountry.retain(|s| {
                self.lookup(s)
                    .is_some_and(|e| e.country.intersects(&countries))
            });
        }
        if !resolved.subcountry.is_empty() {
            let subcountries = self.expand(&resolved.subcountry, |e| &e.subcountry);
            resolved.city.retain(|c| {
                self.lookup(c)
                    .is_some_and(|e| e.subcountry.intersects(&subcountries))
            });
        }
        resolved
    }

    /// The full names each value denotes at one level, read back from the
    /// index. Values the index does not know stand for themselves.
    fn expand<F>(&self, values: &AmbiguitySet, level: F) -> AmbiguitySet
    where
        F: Fn(&IndexEntry) -> &AmbiguitySet,
    {
        let mut out = AmbiguitySet::new();
        for value in values.iter() {
            match self.lookup(value).map(&level) {
                Some(names) if !names.is_empty() => out.extend_from(names),
                _ => {
                    out.insert(value);
                }
            }
        }
        out
    }
}

/// Per-field majority vote across tokens.
pub(crate) fn vertical(matches: &[&MatchResult]) -> ResolvedLocation {
    ResolvedLocation {
        city: matches.iter().flat_map(|m| m.city.iter()).collect(),
        subcountry: majority(matches.iter().map(|m| &m.subcountry)),
        country: majority(matches.iter().map(|m| &m.country)),
    }
}

/// Values tied for the most votes. An empty set votes blank.
fn majority<'a>(fields: impl Iterator<Item = &'a AmbiguitySet>) -> AmbiguitySet {
    let mut votes: HashMap<&str, usize> = HashMap::new();
    for field in fields {
        if field.is_empty() {
            *votes.entry("").or_default() += 1;
        }
        for value in field.iter() {
            *votes.entry(value).or_default() += 1;
        }
    }
    let top = votes.values().copied().max().unwrap_or(0);
    votes
        .into_iter()
        .filter(|&(_, n)| n == top)
        .map(|(value, _)| value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::convert::entry;
    use crate::raw::GazetteerRow;
    use crate::text::Normalizer;

    fn set(values: &[&str]) -> AmbiguitySet {
        values.iter().copied().collect()
    }

    fn token(city: &[&str], subcountry: &[&str], country: &[&str]) -> MatchResult {
        let key = city.first().or(subcountry.first()).or(country.first()).copied();
        let e = entry(city, subcountry, country);
        MatchResult::hit("t", "t".into(), key.unwrap_or("t"), &e, 0)
    }

    fn world() -> LocationIndex {
        LocationIndex::build(
            &[
                GazetteerRow::new("Boston", "United States", "Massachusetts"),
                GazetteerRow::new("Cambridge", "United Kingdom", "England"),
                GazetteerRow::new("Cambridge", "United States", "Massachusetts"),
                GazetteerRow::new("London", "United Kingdom", "England"),
                GazetteerRow::new("Paris", "France", ""),
                GazetteerRow::new("Lyon", "France", ""),
                GazetteerRow::new("Berlin", "Germany", ""),
            ],
            None,
            Normalizer::default(),
        )
    }

    #[test]
    fn vertical_never_filters_cities() {
        let a = token(&["boston"], &["massachusetts"], &["united states"]);
        let b = token(&["london"], &["england"], &["united kingdom"]);
        let c = token(&["paris"], &[], &["france"]);
        let v = vertical(&[&a, &b, &c]);
        assert_eq!(v.city, set(&["boston", "london", "paris"]));
    }

    #[test]
    fn vertical_keeps_the_majority_country() {
        let a = token(&["paris"], &[], &["france"]);
        let b = token(&["lyon"], &[], &["france"]);
        let c = token(&["berlin"], &[], &["germany"]);
        let v = vertical(&[&a, &b, &c]);
        assert_eq!(v.country, set(&["france"]));
        assert!(v.subcountry.is_empty());
    }

    #[test]
    fn vertical_keeps_ties() {
        let a = token(&["cambridge"], &["england", "massachusetts"], &["united kingdom"]);
        let b = token(&[], &[], &["united states"]);
        let v = vertical(&[&a, &b]);
        assert_eq!(v.subcountry, set(&["england", "massachusetts"]));
        assert_eq!(v.country, set(&["united kingdom", "united states"]));
    }

    #[test]
    fn blank_votes_can_win() {
        let a = token(&[], &["bavaria"], &["germany"]);
        let b = token(&[], &[], &["germany"]);
        let c = token(&[], &[], &["austria"]);
        assert!(vertical(&[&a, &b, &c]).subcountry.is_empty());
    }

    #[test]
    fn horizontal_drops_subcountries_outside_the_country() {
        let index = world();
        let resolved = index.horizontal(ResolvedLocation {
            city: set(&["cambridge"]),
            subcountry: set(&["england", "massachusetts"]),
            country: set(&["united states"]),
        });
        assert_eq!(resolved.subcountry, set(&["massachusetts"]));
        assert_eq!(resolved.city, set(&["cambridge"]));
    }

    #[test]
    fn horizontal_drops_cities_outside_the_subcountry() {
        let index = world();
        let resolved = index.horizontal(ResolvedLocation {
            city: set(&["boston", "london"]),
            subcountry: set(&["massachusetts"]),
            country: set(&["united states"]),
        });
        assert_eq!(resolved.city, set(&["boston"]));
    }

    #[test]
    fn empty_parent_level_does_not_constrain() {
        let index = world();
        let resolved = index.horizontal(ResolvedLocation {
            city: set(&["paris", "lyon"]),
            subcountry: AmbiguitySet::new(),
            country: set(&["france"]),
        });
        assert_eq!(resolved.city, set(&["lyon", "paris"]));
    }

    #[test]
    fn unknown_candidates_fail_containment() {
        let index = world();
        let resolved = index.horizontal(ResolvedLocation {
            city: AmbiguitySet::new(),
            subcountry: set(&["atlantis", "england"]),
            country: set(&["united kingdom"]),
        });
        assert_eq!(resolved.subcountry, set(&["england"]));
    }

    #[test]
    fn exact_mode_forces_zero_tolerance() {
        let opts = ResolveOptions::default().exact(true).max_tolerance(0.9);
        assert_eq!(opts.effective_tolerance(), 0.0);
        assert_eq!(world().resolve("Bostn", &opts), None);
    }

    #[test]
    fn nan_tolerance_accepts_only_exact_hits() {
        let opts = ResolveOptions::default().max_tolerance(f64::NAN);
        assert_eq!(opts.effective_tolerance(), 0.0);
        let index = world();
        assert_eq!(index.resolve("Bostn", &opts), None);
        assert!(index.resolve("Boston", &opts).is_some());
    }

    #[test]
    fn out_of_range_tolerance_is_clamped() {
        let loose = ResolveOptions::default().max_tolerance(7.5);
        assert_eq!(loose.effective_tolerance(), 1.0);
        let negative = ResolveOptions::default().max_tolerance(-0.5);
        assert_eq!(negative.effective_tolerance(), 0.0);
        assert_eq!(world().resolve("Boston", &negative).map(|r| r.city.len()), Some(1));
    }

    #[test]
    fn resolves_cambridge_in_the_united_states() {
        let resolved = world()
            .resolve("Cambridge, United States", &ResolveOptions::default())
            .unwrap();
        assert_eq!(resolved.city, set(&["cambridge"]));
        assert_eq!(resolved.subcountry, set(&["massachusetts"]));
        assert_eq!(resolved.country, set(&["united states"]));
    }
}
