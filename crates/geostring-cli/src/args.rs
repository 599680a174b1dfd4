use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geostring
#[derive(Debug, Parser)]
#[command(
    name = "geostring",
    version,
    about = "Resolve free-text place names into city | subcountry | country"
)]
pub struct CliArgs {
    /// JSON config file; flags below override its values
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Gazetteer CSV (city,country,subcountry), optionally .gz
    #[arg(short = 'p', long = "places", global = true)]
    pub places: Option<PathBuf>,

    /// Nickname CSV (nickname,city,country,subcountry), optionally .gz
    #[arg(short = 'n', long = "nicknames", global = true)]
    pub nicknames: Option<PathBuf>,

    /// Build the index without the nickname overlay
    #[arg(long = "no-nicknames", global = true, conflicts_with = "nicknames")]
    pub no_nicknames: bool,

    /// Exact matching only (forces max tolerance to 0)
    #[arg(short = 'e', long = "exact", global = true)]
    pub exact: bool,

    /// Drop tokens whose tolerance exceeds this (0.0 - 1.0)
    #[arg(short = 't', long = "max-tolerance", global = true)]
    pub max_tolerance: Option<f64>,

    /// Report dropped tokens and index lifecycle on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Comma-separated cities to restrict the index to
    #[arg(long = "only-cities", global = true, value_delimiter = ',')]
    pub only_cities: Vec<String>,

    /// Comma-separated subcountries to restrict the index to
    #[arg(long = "only-subcountries", global = true, value_delimiter = ',')]
    pub only_subcountries: Vec<String>,

    /// Comma-separated countries to restrict the index to (e.g. France,Germany)
    #[arg(long = "only-countries", global = true, value_delimiter = ',')]
    pub only_countries: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve each input into one record
    Resolve {
        /// Free-text inputs, e.g. "Cambridge, MA"
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Match single tokens and show the diagnostics
    Match {
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Tokenize one input and match every token
    Parse {
        input: String,
    },

    /// Show a summary of the index contents
    Stats,
}
