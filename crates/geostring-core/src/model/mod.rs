// crates/geostring-core/src/model/mod.rs
mod ambiguity;
pub mod convert;
mod filter;
mod index;
mod result;

pub use ambiguity::{AmbiguitySet, AMBIGUITY_SEPARATOR};
pub use convert::build_index;
pub use filter::PlaceFilter;
pub(crate) use index::EntryTable;
pub use index::{IndexEntry, LocationIndex};
pub use result::{Geostring, MatchResult, ResolvedLocation};
