//! Basic usage example for geostring-rs
//!
//! This example demonstrates how to:
//! - Build the location index from the bundled tables
//! - Resolve free-text inputs, fuzzy and exact
//! - Inspect single-token matches

use geostring_core::{GeostringConfig, ResolveOptions, Result};

fn main() -> Result<()> {
    println!("=== geostring-rs Basic Usage Example ===\n");

    println!("Building location index...");
    let index = GeostringConfig::default().build_index()?;
    let stats = index.stats();
    println!(
        "✓ {} entries ({} cities, {} subcountries, {} countries)\n",
        stats.entries, stats.cities, stats.subcountries, stats.countries
    );

    // Example 1: Resolve whole strings
    println!("--- Example 1: Resolve ---");
    let opts = ResolveOptions::default();
    for input in [
        "Cambridge, United States",
        "Cambridge / England",
        "Paris; Lyon & Berlin",
        "Springfield",
        "Bostn",
        ",;|",
    ] {
        match index.resolve(input, &opts) {
            Some(place) => println!("{input:<28} -> {place}"),
            None => println!("{input:<28} -> (no result)"),
        }
    }
    println!();

    // Example 2: Exact mode refuses typos
    println!("--- Example 2: Exact mode ---");
    let exact = ResolveOptions::default().exact(true);
    println!("Bostn  -> {:?}", index.resolve("Bostn", &exact));
    println!("Boston -> {:?}\n", index.resolve("Boston", &exact).map(|p| p.to_string()));

    // Example 3: Per-token diagnostics
    println!("--- Example 3: Match single tokens ---");
    for token in ["Frisco", "Zurik", "Big Apple"] {
        let m = index.match_token(token, false);
        println!(
            "{token:<10} -> {:?} (distance {:?}, tolerance {:.3})",
            m.matched_key, m.edit_distance, m.tolerance
        );
    }

    Ok(())
}
