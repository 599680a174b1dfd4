// crates/geostring-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression) and turns the two
//! tabular sources into raw rows.
//!
//! Both tables are header-less CSV:
//!
//! - places: `city, country, subcountry`
//! - nicknames: `nickname, city, country, subcountry`
//!
//! The first row fixes the table width. A first row narrower than the
//! required column count is rejected with [`GeoError::MissingColumns`];
//! later short rows are padded with empty cells. A table with no rows at
//! all is rejected the same way.

use crate::error::{GeoError, Result};
use crate::raw::{GazetteerRow, NicknameRow};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub mod common_io;

const PLACE_COLUMNS: usize = 3;
const NICKNAME_COLUMNS: usize = 4;

/// Load the gazetteer table from disk (`.csv` or `.csv.gz`).
pub fn load_places(path: impl AsRef<Path>) -> Result<Vec<GazetteerRow>> {
    let path = path.as_ref();
    let rows = places_from_reader(common_io::open_stream(path)?, &path.display().to_string())?;
    debug!("loaded {} place rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the nickname table from disk (`.csv` or `.csv.gz`).
pub fn load_nicknames(path: impl AsRef<Path>) -> Result<Vec<NicknameRow>> {
    let path = path.as_ref();
    let rows =
        nicknames_from_reader(common_io::open_stream(path)?, &path.display().to_string())?;
    debug!("loaded {} nickname rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse gazetteer rows from any reader. `source_name` labels errors.
pub fn places_from_reader<R: Read>(reader: R, source_name: &str) -> Result<Vec<GazetteerRow>> {
    read_rows(reader, source_name, PLACE_COLUMNS, |cell| {
        GazetteerRow::new(cell(0), cell(1), cell(2))
    })
}

/// Parse nickname rows from any reader. `source_name` labels errors.
pub fn nicknames_from_reader<R: Read>(reader: R, source_name: &str) -> Result<Vec<NicknameRow>> {
    read_rows(reader, source_name, NICKNAME_COLUMNS, |cell| {
        NicknameRow::new(cell(0), cell(1), cell(2), cell(3))
    })
}

fn read_rows<R, T, F>(reader: R, source_name: &str, required: usize, make: F) -> Result<Vec<T>>
where
    R: Read,
    F: Fn(&dyn Fn(usize) -> String) -> T,
{
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, record) in csv.records().enumerate() {
        let record = record?;
        if i == 0 && record.len() < required {
            return Err(GeoError::MissingColumns {
                source_name: source_name.to_string(),
                expected: required,
                found: record.len(),
            });
        }
        let cell = |n: usize| record.get(n).unwrap_or("").to_string();
        rows.push(make(&cell));
    }
    if rows.is_empty() {
        return Err(GeoError::MissingColumns {
            source_name: source_name.to_string(),
            expected: required,
            found: 0,
        });
    }
    Ok(rows)
}
