//! RNG module - tile value and placement draws
//!
//! The board owns its own seeded generator; this module only holds the draws
//! it makes, so the odds live in one place and can be tested against any
//! seeded `rand::Rng`.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::types::{Tile, FOUR_ODDS};

/// Seed used when the system clock reads before the Unix epoch.
const FALLBACK_SEED: u64 = 0x2048_2048;

/// Seed derived from the wall clock (nanoseconds since the epoch).
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(FALLBACK_SEED)
}

/// Draw the value of a new tile: 4 with probability `1 / FOUR_ODDS`, else 2.
pub fn tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..FOUR_ODDS) == 0 {
        4
    } else {
        2
    }
}

/// Uniform index in `0..len`. `len` must be nonzero.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}
