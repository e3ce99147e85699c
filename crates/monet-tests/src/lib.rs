//! Integration tests for Monet crates.
//!
//! End-to-end checks across `monet-core`, `monet-cam` and `monet`: palette
//! shape and lightness ordering, gray and boundary behavior of the solver,
//! style-specific guarantees, and golden hashes that pin generated palettes.

use monet::MaterialYouPalette;
use sha2::{Digest, Sha256};

#[cfg(test)]
mod golden;
#[cfg(test)]
mod properties;

/// SHA-256 of the compact JSON form of a palette, as lowercase hex.
///
/// Field order is fixed by the struct, so equal palettes always hash equal.
pub fn palette_hash(palette: &MaterialYouPalette) -> serde_json::Result<String> {
    let bytes = serde_json::to_vec(palette)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Seeds used across the property tests: primaries, brand-like colors,
/// near-grays and extremes.
pub const SEEDS: [&str; 10] = [
    "#1B6EF3", "#B3261E", "#6750A4", "#00FF00", "#FFFF00", "#FF00FF", "#808890", "#000000", "#FFFFFF", "#3A7D44",
];
