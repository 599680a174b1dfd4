//! geostring-cli
//! ==============
//!
//! Command-line interface for the `geostring-core` place name resolver.
//!
//! This crate primarily provides a binary (`geostring`). The library target
//! only exists so that docs.rs renders this overview. See the README for
//! full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geostring --help
//! geostring resolve "Cambridge, United States" "Bostn"
//! geostring --exact match Springfield
//! geostring --only-countries "United Kingdom" resolve Cambridge
//! geostring stats
//! ```
//!
//! For programmatic access use the [`geostring-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; the binary is the deliverable.
