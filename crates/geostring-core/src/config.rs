// crates/geostring-core/src/config.rs

//! Every tunable of the engine in one serde-friendly struct.

use crate::error::{GeoError, Result};
use crate::loader;
use crate::model::{build_index, LocationIndex, PlaceFilter};
use crate::resolve::{ResolveOptions, DEFAULT_MAX_TOLERANCE};
use crate::text::{Normalizer, DEFAULT_STRIP_PATTERN};
use crate::tokenize::{Tokenizer, DEFAULT_DELIMITERS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_PLACES_FILE: &str = "world_places.csv";
pub const DEFAULT_NICKNAMES_FILE: &str = "world_nicknames.csv";

/// Sources, normalization and matching settings.
///
/// Relative file names are resolved against [`data_dir`](Self::data_dir).
/// Absolute paths are used as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeostringConfig {
    /// `None` means the `data/` directory shipped with this crate.
    pub data_dir: Option<PathBuf>,
    pub places_file: PathBuf,
    /// `None` skips the nickname overlay.
    pub nicknames_file: Option<PathBuf>,
    pub strip_pattern: String,
    pub delimiters: Vec<String>,
    pub exact: bool,
    pub max_tolerance: f64,
    pub verbose: bool,
    /// Build-time restriction of the index.
    pub filter: PlaceFilter,
}

impl Default for GeostringConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            places_file: PathBuf::from(DEFAULT_PLACES_FILE),
            nicknames_file: Some(PathBuf::from(DEFAULT_NICKNAMES_FILE)),
            strip_pattern: DEFAULT_STRIP_PATTERN.to_string(),
            delimiters: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
            exact: false,
            max_tolerance: DEFAULT_MAX_TOLERANCE,
            verbose: false,
            filter: PlaceFilter::default(),
        }
    }
}

impl GeostringConfig {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Read a config from a JSON file. Missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            GeoError::NotFound(format!("config not found at {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.max_tolerance) {
            return Err(GeoError::InvalidData(format!(
                "max_tolerance must be within [0, 1], got {}",
                self.max_tolerance
            )));
        }
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(Self::default_data_dir)
    }

    pub fn places_path(&self) -> PathBuf {
        self.resolve_path(&self.places_file)
    }

    pub fn nicknames_path(&self) -> Option<PathBuf> {
        self.nicknames_file.as_deref().map(|p| self.resolve_path(p))
    }

    fn resolve_path(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir().join(file)
        }
    }

    pub fn normalizer(&self) -> Result<Normalizer> {
        Normalizer::new(&self.strip_pattern)
    }

    pub fn tokenizer(&self) -> Result<Tokenizer> {
        Tokenizer::new(self.delimiters.as_slice())
    }

    pub fn resolve_options(&self) -> Result<ResolveOptions> {
        self.validate()?;
        Ok(ResolveOptions {
            exact: self.exact,
            max_tolerance: self.max_tolerance,
            verbose: self.verbose,
            tokenizer: self.tokenizer()?,
        })
    }

    /// Load both sources and build the index they describe.
    pub fn build_index(&self) -> Result<LocationIndex> {
        let places_path = self.places_path();
        let places = loader::load_places(&places_path)?;
        let nicknames = match self.nicknames_path() {
            Some(path) => Some(loader::load_nicknames(path)?),
            None => None,
        };
        info!(
            "building location index from {} ({} rows)",
            places_path.display(),
            places.len()
        );
        Ok(build_index(
            &places,
            nicknames.as_deref(),
            self.normalizer()?,
            &self.filter,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let c = GeostringConfig::default();
        assert_eq!(c.max_tolerance, 0.25);
        assert_eq!(c.strip_pattern, "[^a-z]");
        assert_eq!(c.delimiters.len(), 7);
        assert!(c.places_path().ends_with("data/world_places.csv"));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_tolerance() {
        let c = GeostringConfig {
            max_tolerance: 1.5,
            ..GeostringConfig::default()
        };
        assert!(matches!(c.validate(), Err(GeoError::InvalidData(_))));
        assert!(c.resolve_options().is_err());
    }

    #[test]
    fn absolute_paths_ignore_data_dir() {
        let c = GeostringConfig {
            data_dir: Some(PathBuf::from("/srv/geo")),
            places_file: PathBuf::from("/tmp/places.csv"),
            nicknames_file: Some(PathBuf::from("nick.csv")),
            ..GeostringConfig::default()
        };
        assert_eq!(c.places_path(), PathBuf::from("/tmp/places.csv"));
        assert_eq!(c.nicknames_path(), Some(PathBuf::from("/srv/geo/nick.csv")));
    }

    #[test]
    fn partial_json_takes_defaults() {
        let c: GeostringConfig =
            serde_json::from_str(r#"{ "exact": true, "filter": { "countries": ["France"] } }"#)
                .unwrap();
        assert!(c.exact);
        assert_eq!(c.max_tolerance, 0.25);
        assert_eq!(c.filter.countries, vec!["France".to_string()]);
        assert_eq!(c.nicknames_file, Some(PathBuf::from("world_nicknames.csv")));
    }

    #[test]
    fn bundled_data_builds() {
        let index = GeostringConfig::default().build_index().unwrap();
        assert!(index.contains_key("boston"));
    }
}
