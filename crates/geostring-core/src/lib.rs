// crates/geostring-core/src/lib.rs

//! # geostring-core
//!
//! Resolves messy free-text place names (`"Cambridge, MA"`,
//! `"São Paulo / Brasil"`, `"Bostn"`) into a structured
//! `city | subcountry | country` record, backed by a flattened,
//! hierarchy-aware lookup table built from a gazetteer and an optional
//! nickname list.
//!
//! ```rust,no_run
//! use geostring_core::{GeostringConfig, ResolveOptions};
//!
//! let index = GeostringConfig::default().build_index()?;
//! let hit = index.resolve("Cambridge, United States", &ResolveOptions::default());
//! if let Some(place) = hit {
//!     println!("{place}");
//! }
//! # Ok::<(), geostring_core::GeoError>(())
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod registry;
pub mod resolve;
pub mod search;
pub mod text;
pub mod tokenize;
pub mod traits;
// Raw input rows shared by the loader and the builder
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::IndexStats;
pub use crate::config::GeostringConfig;
pub use crate::error::{GeoError, Result};
pub use crate::model::{
    build_index, AmbiguitySet, Geostring, IndexEntry, LocationIndex, MatchResult, PlaceFilter,
    ResolvedLocation,
};
pub use crate::raw::{GazetteerRow, NicknameRow};
pub use crate::resolve::ResolveOptions;
pub use crate::text::{fold_text, Normalizer};
pub use crate::tokenize::Tokenizer;

/// Resolve `input` against the process-wide default index.
///
/// See [`registry`] for how that default is initialized and replaced.
pub fn resolve(input: &str, opts: &ResolveOptions) -> Result<Option<ResolvedLocation>> {
    Ok(registry::current()?.resolve(input, opts))
}

/// Match a single token against the process-wide default index.
pub fn match_token(token: &str, exact: bool) -> Result<MatchResult> {
    Ok(registry::current()?.match_token(token, exact))
}
