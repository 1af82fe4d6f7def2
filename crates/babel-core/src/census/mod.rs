//! Occurrence-count model
//!
//! How many addresses does the library claim to hold for a query? The count
//! is a fiction, but it must be a consistent one: the search generator
//! enumerates exactly this many variants, and repeated queries must agree.
//! The model decays exponentially with query length, then applies a ±25%
//! jitter seeded from the query hash so that equal-length queries still get
//! distinct counts.

use crate::prng::{hash_seed, SplitMix64};

/// Claimed count for a single-character query
const MAX_OCCURRENCES: i64 = 1_000_000_000;

/// Per-character exponential decay rate
const DECAY_RATE: f64 = 1.10;

/// Deterministic claimed number of addresses containing `text`
///
/// Always at least 1. Case-insensitive: the text is lowercased before both
/// the length measurement and the hash.
pub fn occurrence_count(text: &str) -> u64 {
    let lowered = text.to_lowercase();
    let length = lowered.chars().count().max(1);

    let base = (MAX_OCCURRENCES as f64 / DECAY_RATE.powi(length as i32 - 1)) as i64;
    let base = base.max(1);

    let mut rng = SplitMix64::new(hash_seed(lowered.as_bytes()));
    let variation = (base / 4).max(1);
    let adjustment = rng.next_below(2 * variation as u64) as i64 - variation;

    (base + adjustment).max(1) as u64
}
