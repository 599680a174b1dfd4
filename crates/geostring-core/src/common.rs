// crates/geostring-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a [`LocationIndex`](crate::LocationIndex).
///
/// Entries are classified by their most specific populated slot, so a key
/// that is both a city and a subcountry counts once, as a city. Counts
/// reflect the index after any build-time filtering or subsetting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub entries: usize,
    pub cities: usize,
    pub subcountries: usize,
    pub countries: usize,
}
