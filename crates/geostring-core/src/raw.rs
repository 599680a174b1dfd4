// crates/geostring-core/src/raw.rs

//! Raw source rows, exactly as the tabular sources provide them.
//!
//! Missing cells are empty strings, never `None`.

use crate::text::fold_text;
use serde::{Deserialize, Serialize};

/// One gazetteer row: `(city, country, subcountry)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerRow {
    pub city: String,
    pub country: String,
    pub subcountry: String,
}

impl GazetteerRow {
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        subcountry: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            subcountry: subcountry.into(),
        }
    }

    /// Every field in display form (see [`fold_text`]).
    pub fn folded(&self) -> Self {
        Self {
            city: fold_text(&self.city),
            country: fold_text(&self.country),
            subcountry: fold_text(&self.subcountry),
        }
    }
}

/// One nickname row: `(nickname, city, country, subcountry)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicknameRow {
    pub nickname: String,
    pub city: String,
    pub country: String,
    pub subcountry: String,
}

impl NicknameRow {
    pub fn new(
        nickname: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        subcountry: impl Into<String>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            city: city.into(),
            country: country.into(),
            subcountry: subcountry.into(),
        }
    }

    pub fn folded(&self) -> Self {
        Self {
            nickname: fold_text(&self.nickname),
            city: fold_text(&self.city),
            country: fold_text(&self.country),
            subcountry: fold_text(&self.subcountry),
        }
    }
}
