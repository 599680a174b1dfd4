// crates/geostring-core/src/traits.rs

/// String distance used by the fuzzy matcher.
///
/// The matcher keeps the key with the strictly smallest distance, so any
/// implementation must be deterministic. Distances are compared against
/// key lengths to compute tolerance, so they should be measured in the
/// same unit (characters).
///
/// # Examples
/// ```rust
/// use geostring_core::traits::{EditDistance, Levenshtein};
///
/// assert_eq!(Levenshtein.distance("bostn", "boston"), 1);
///
/// struct Hamming;
/// impl EditDistance for Hamming {
///     fn distance(&self, a: &str, b: &str) -> usize {
///         strsim::hamming(a, b).unwrap_or(a.len().max(b.len()))
///     }
/// }
/// assert_eq!(Hamming.distance("lima", "lida"), 1);
/// ```
pub trait EditDistance {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// A lower bound on `distance` for strings of these character lengths.
    /// The matcher skips keys whose bound cannot beat the current best.
    #[inline]
    fn lower_bound(&self, _a_len: usize, _b_len: usize) -> usize {
        0
    }
}

/// Character-level Levenshtein distance (`strsim::levenshtein`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl EditDistance for Levenshtein {
    #[inline]
    fn distance(&self, a: &str, b: &str) -> usize {
        strsim::levenshtein(a, b)
    }

    #[inline]
    fn lower_bound(&self, a_len: usize, b_len: usize) -> usize {
        a_len.abs_diff(b_len)
    }
}
