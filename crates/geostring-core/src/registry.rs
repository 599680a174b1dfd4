// crates/geostring-core/src/registry.rs

//! # Process-wide default index
//!
//! Callers that hold their own [`LocationIndex`] never need this module.
//! It exists for the convenience entry points ([`crate::resolve`],
//! [`crate::match_token`]) and for the subset/restore lifecycle:
//!
//! - **init**: the first [`current`] call builds the index described by
//!   [`GeostringConfig::default`], unless [`install`] ran first.
//! - **replace**: [`subset_locations`] swaps in a narrowed snapshot.
//! - **reset**: [`restore_locations`] swaps the full snapshot back.
//!
//! Snapshots are immutable `Arc`s. A swap never touches the index an
//! in-flight query already holds.

use crate::config::GeostringConfig;
use crate::error::Result;
use crate::model::{LocationIndex, PlaceFilter};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

struct Slots {
    full: Arc<LocationIndex>,
    current: Arc<LocationIndex>,
}

impl Slots {
    fn new(index: LocationIndex) -> Self {
        let full = Arc::new(index);
        Self {
            current: Arc::clone(&full),
            full,
        }
    }
}

static DEFAULT_INDEX: Lazy<RwLock<Option<Slots>>> = Lazy::new(|| RwLock::new(None));

/// Run `f` on the slots, building the default index first if needed.
fn with_slots<T>(f: impl FnOnce(&mut Slots) -> T) -> Result<T> {
    let mut guard = DEFAULT_INDEX.write();
    let mut slots = match guard.take() {
        Some(slots) => slots,
        None => {
            info!("no default location index installed; building from default config");
            Slots::new(GeostringConfig::default().build_index()?)
        }
    };
    let out = f(&mut slots);
    *guard = Some(slots);
    Ok(out)
}

/// The index queries should use right now.
pub fn current() -> Result<Arc<LocationIndex>> {
    if let Some(slots) = DEFAULT_INDEX.read().as_ref() {
        return Ok(Arc::clone(&slots.current));
    }
    with_slots(|slots| Arc::clone(&slots.current))
}

/// Make `index` both the full and the current default.
pub fn install(index: LocationIndex) {
    info!("installing default location index ({} entries)", index.len());
    *DEFAULT_INDEX.write() = Some(Slots::new(index));
}

/// Narrow the default to the entries admitted by `filter`.
///
/// The subset is always taken from the full index, never from a previous
/// subset. When nothing matches, the default is left unchanged and
/// `false` is returned.
pub fn subset_locations(filter: &PlaceFilter) -> Result<bool> {
    with_slots(|slots| {
        let subset = slots.full.subset(filter);
        if subset.is_empty() {
            warn!("location index not modified: {filter:?} matched no entries");
            return false;
        }
        info!(
            "location index subset to {} of {} entries",
            subset.len(),
            slots.full.len()
        );
        slots.current = Arc::new(subset);
        true
    })
}

/// Point the default back at the full index.
pub fn restore_locations() -> Result<()> {
    with_slots(|slots| {
        slots.current = Arc::clone(&slots.full);
        info!("location index restored ({} entries)", slots.full.len());
    })
}
