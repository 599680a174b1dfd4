//! Subsetting example for geostring-rs
//!
//! Narrows the process-wide default index to a few countries, resolves
//! against the subset, and restores the full index.

use geostring_core::registry::{current, install, restore_locations, subset_locations};
use geostring_core::{resolve, GeostringConfig, PlaceFilter, ResolveOptions, Result};

fn main() -> Result<()> {
    println!("=== geostring-rs Subsetting Example ===\n");

    install(GeostringConfig::default().build_index()?);
    let opts = ResolveOptions::default();
    println!("Full index: {} entries", current()?.len());
    println!("Cambridge -> {:?}\n", resolve("Cambridge", &opts)?.map(|p| p.to_string()));

    let uk = PlaceFilter::new().countries(["United Kingdom", "Ireland"]);
    if subset_locations(&uk)? {
        println!("Subset to UK + Ireland: {} entries", current()?.len());
        println!("Perth -> {:?}", resolve("Perth", &opts)?.map(|p| p.to_string()));
        println!("Bostn -> {:?}\n", resolve("Bostn", &opts)?.map(|p| p.to_string()));
    }

    // A filter that matches nothing leaves the current index in place.
    let nowhere = PlaceFilter::new().countries(["Atlantis"]);
    println!("Subset to Atlantis applied: {}", subset_locations(&nowhere)?);

    restore_locations()?;
    println!("Restored: {} entries", current()?.len());
    println!("Perth -> {:?}", resolve("Perth", &opts)?.map(|p| p.to_string()));

    Ok(())
}
