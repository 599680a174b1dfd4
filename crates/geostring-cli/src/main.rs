//! geostring - Command-line interface for geostring-core
//!
//! Resolves free-text place names against the bundled gazetteer (or your
//! own tables) and prints `city | subcountry | country`. Ambiguity sets
//! are joined with `?`.
//!
//! Usage examples
//! --------------
//!
//! - Resolve one or more inputs
//!   $ geostring resolve "Cambridge, United States" "Paris; Lyon; Berlin"
//!
//! - Per-token diagnostics (key, edit distance, tolerance)
//!   $ geostring match Bostn Springfeld
//!   $ geostring parse "Bostn, Massachusets"
//!
//! - Restrict the index before querying
//!   $ geostring --only-countries "United Kingdom" resolve Cambridge
//!
//! - Index statistics
//!   $ geostring stats
//!
//! Data source
//! -----------
//!
//! By default the CLI loads `world_places.csv` and `world_nicknames.csv`
//! from the `data/` directory of `geostring-core`. Use `--places`,
//! `--nicknames` / `--no-nicknames` or a JSON `--config` to point elsewhere.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geostring_core::{registry, GeostringConfig, MatchResult, PlaceFilter, ResolvedLocation};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Resolution<'a> {
    input: &'a str,
    result: Option<ResolvedLocation>,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;
    let opts = config.resolve_options()?;
    let index = config.build_index().with_context(|| {
        format!(
            "failed to build the location index from {}",
            config.places_path().display()
        )
    })?;
    registry::install(index);

    let filter = PlaceFilter::new()
        .cities(&args.only_cities)
        .subcountries(&args.only_subcountries)
        .countries(&args.only_countries);
    if !filter.is_empty() && !registry::subset_locations(&filter)? {
        eprintln!("No entries match the --only-* filters; using the full index");
    }
    let index = registry::current()?;

    match args.command {
        Commands::Resolve { inputs } => {
            for input in &inputs {
                let result = index.resolve(input, &opts);
                if args.json {
                    println!("{}", serde_json::to_string(&Resolution { input, result })?);
                } else {
                    match result {
                        Some(place) => println!("{input}\t{place}"),
                        None => println!("{input}\t(no result)"),
                    }
                }
            }
        }

        Commands::Match { tokens } => {
            for token in &tokens {
                let m = index.match_token(token, opts.exact);
                print_match(&m, args.json)?;
            }
        }

        Commands::Parse { input } => {
            let parsed = index.parse(&input, opts.exact, &opts.tokenizer);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("{} token(s) in {:?}", parsed.results.len(), parsed.input);
                for m in &parsed.results {
                    print_match(m, false)?;
                }
            }
        }

        Commands::Stats => {
            let stats = index.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Index statistics:");
                println!("  Entries: {}", stats.entries);
                println!("  Cities: {}", stats.cities);
                println!("  Subcountries: {}", stats.subcountries);
                println!("  Countries: {}", stats.countries);
            }
        }
    }

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn load_config(args: &CliArgs) -> anyhow::Result<GeostringConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => GeostringConfig::default(),
    };

    if let Some(places) = &args.places {
        config.places_file = places.clone();
    }
    if let Some(nicknames) = &args.nicknames {
        config.nicknames_file = Some(nicknames.clone());
    }
    if args.no_nicknames {
        config.nicknames_file = None;
    }
    if let Some(t) = args.max_tolerance {
        config.max_tolerance = t;
    }
    config.exact |= args.exact;
    config.verbose |= args.verbose;
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "json")]
fn read_config(path: &Path) -> anyhow::Result<GeostringConfig> {
    GeostringConfig::from_json_path(path)
        .with_context(|| format!("failed to read config {}", path.display()))
}

#[cfg(not(feature = "json"))]
fn read_config(path: &Path) -> anyhow::Result<GeostringConfig> {
    anyhow::bail!("--config {} needs the 'json' feature", path.display())
}

fn print_match(m: &MatchResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(m)?);
        return Ok(());
    }
    match (&m.matched_key, m.edit_distance) {
        (Some(key), Some(distance)) => {
            println!(
                "{:?} -> {key} (distance {distance}, tolerance {:.3})",
                m.raw_input, m.tolerance
            );
            println!("    {} | {} | {}", m.city, m.subcountry, m.country);
        }
        _ => println!("{:?} -> no match", m.raw_input),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
