// crates/geostring-core/src/search.rs

//! # Token Matcher
//!
//! Maps one raw token to its best index entry.
//!
//! - **Exact** mode is a single hash lookup of the normalized token.
//! - **Fuzzy** mode scans every key in build order and keeps the first key
//!   with the strictly smallest edit distance. The scan is linear in index
//!   size and is the hot path of the whole engine.

use crate::model::{Geostring, LocationIndex, MatchResult};
use crate::tokenize::Tokenizer;
use crate::traits::{EditDistance, Levenshtein};

impl LocationIndex {
    /// Match `raw` against this index with Levenshtein distance.
    ///
    /// Fuzzy mode always returns the closest key unless the index is
    /// empty. A token that normalizes to nothing never matches.
    pub fn match_token(&self, raw: &str, exact: bool) -> MatchResult {
        self.match_token_with(raw, exact, &Levenshtein)
    }

    /// Same as [`match_token`](Self::match_token) with a custom metric.
    pub fn match_token_with<D>(&self, raw: &str, exact: bool, metric: &D) -> MatchResult
    where
        D: EditDistance + ?Sized,
    {
        let normalized = self.normalize(raw);
        if normalized.is_empty() {
            return MatchResult::miss(raw, normalized);
        }

        if exact {
            return match self.get(&normalized) {
                Some(entry) => {
                    let key = normalized.clone();
                    MatchResult::hit(raw, normalized, &key, entry, 0)
                }
                None => MatchResult::miss(raw, normalized),
            };
        }

        match self.nearest(&normalized, metric) {
            Some((key, distance)) => match self.get(key) {
                Some(entry) => MatchResult::hit(raw, normalized, key, entry, distance),
                None => MatchResult::miss(raw, normalized),
            },
            None => MatchResult::miss(raw, normalized),
        }
    }

    /// First key (in build order) with the strictly smallest distance.
    fn nearest<D>(&self, query: &str, metric: &D) -> Option<(&str, usize)>
    where
        D: EditDistance + ?Sized,
    {
        let query_len = query.chars().count();
        let mut best: Option<(&str, usize)> = None;

        for key in self.keys() {
            if let Some((_, best_distance)) = best {
                if best_distance == 0 {
                    break;
                }
                if metric.lower_bound(query_len, key.chars().count()) >= best_distance {
                    continue;
                }
            }
            let distance = metric.distance(query, key);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((key, distance));
            }
        }
        best
    }

    /// Tokenize `input` and match every token, keeping empty tokens.
    pub fn parse(&self, input: &str, exact: bool, tokenizer: &Tokenizer) -> Geostring {
        let results = tokenizer
            .split(input)
            .iter()
            .map(|token| self.match_token(token, exact))
            .collect();
        Geostring {
            input: input.to_string(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::GazetteerRow;
    use crate::text::Normalizer;

    fn index(rows: &[(&str, &str, &str)]) -> LocationIndex {
        let rows: Vec<_> = rows
            .iter()
            .map(|(c, n, s)| GazetteerRow::new(*c, *n, *s))
            .collect();
        LocationIndex::build(&rows, None, Normalizer::default())
    }

    #[test]
    fn exact_hit_has_zero_distance() {
        let idx = index(&[("Boston", "United States", "Massachusetts")]);
        let m = idx.match_token("  BOSTON ", true);
        assert_eq!(m.matched_key.as_deref(), Some("boston"));
        assert_eq!(m.edit_distance, Some(0));
        assert_eq!(m.tolerance, 0.0);
        assert_eq!(m.country.as_single(), Some("united states"));
    }

    #[test]
    fn exact_miss_is_a_no_match() {
        let idx = index(&[("Boston", "United States", "Massachusetts")]);
        let m = idx.match_token("Bostn", true);
        assert!(!m.is_match());
        assert_eq!(m.tolerance, 1.0);
        assert_eq!(m.normalized_input, "bostn");
    }

    #[test]
    fn fuzzy_finds_nearest_key() {
        let idx = index(&[
            ("Boston", "United States", "Massachusetts"),
            ("London", "United Kingdom", "England"),
        ]);
        let m = idx.match_token("Bostn", false);
        assert_eq!(m.matched_key.as_deref(), Some("boston"));
        assert_eq!(m.edit_distance, Some(1));
        assert!((m.tolerance - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn ties_go_to_the_first_key_in_build_order() {
        let lima_first = index(&[("Lima", "Peru", ""), ("Lida", "Belarus", "")]);
        let lida_first = index(&[("Lida", "Belarus", ""), ("Lima", "Peru", "")]);

        let a = lima_first.match_token("lina", false);
        let b = lima_first.match_token("lina", false);
        assert_eq!(a, b);
        assert_eq!(a.matched_key.as_deref(), Some("lima"));
        assert_eq!(a.edit_distance, Some(1));

        let c = lida_first.match_token("lina", false);
        assert_eq!(c.matched_key.as_deref(), Some("lida"));
    }

    #[test]
    fn empty_token_never_matches() {
        let idx = index(&[("Rome", "Italy", "Lazio")]);
        for exact in [true, false] {
            let m = idx.match_token("  -- ", exact);
            assert!(!m.is_match());
            assert_eq!(m.tolerance, 1.0);
        }
    }

    #[test]
    fn fuzzy_on_empty_index_is_a_no_match() {
        let idx = LocationIndex::empty(Normalizer::default());
        assert!(!idx.match_token("rome", false).is_match());
    }

    #[test]
    fn custom_metric_is_used() {
        struct Constant;
        impl EditDistance for Constant {
            fn distance(&self, _: &str, _: &str) -> usize {
                7
            }
        }
        let idx = index(&[("Rome", "Italy", "Lazio"), ("Oslo", "Norway", "Oslo")]);
        let m = idx.match_token_with("rome", false, &Constant);
        // Every key ties, so the first one wins.
        assert_eq!(m.matched_key.as_deref(), Some("rome"));
        assert_eq!(m.edit_distance, Some(7));
    }

    #[test]
    fn parse_matches_every_token() {
        let idx = index(&[("Paris", "France", ""), ("Lyon", "France", "")]);
        let g = idx.parse("Paris,,Lyon", false, &Tokenizer::default());
        assert_eq!(g.input, "Paris,,Lyon");
        assert_eq!(g.results.len(), 3);
        assert!(g.results[0].is_match());
        assert!(!g.results[1].is_match());
        assert_eq!(g.results[2].matched_key.as_deref(), Some("lyon"));
    }
}
