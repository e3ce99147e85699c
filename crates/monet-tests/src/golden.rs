//! Golden palettes.
//!
//! Pins the exact output for the default seed so any change to the solver,
//! ramp grid or recipe tables shows up as a hash mismatch.

use crate::palette_hash;
use monet::{Style, generate};

/// `#1B6EF3` with `TONAL_SPOT`.
const GOOGLE_BLUE_TONAL_SPOT_HASH: &str = "31066a9a38333eb556aa6bfec4889ffb79c3b85cfc3ff573138aa81a4243254c";

const GOOGLE_BLUE_NEUTRAL1: [&str; 14] = [
    "#FFFFFF", "#FEFBFF", "#F2F0F4", "#E3E2E6", "#C7C6CA", "#ACABAF", "#919094", "#767679", "#5E5E62", "#46464A",
    "#303034", "#1B1B1F", "#000000", "#000000",
];

const GOOGLE_BLUE_ACCENT3: [&str; 14] = [
    "#FFFFFF", "#FFFBFF", "#FFEBFA", "#FDD7FA", "#E0BBDD", "#C3A0C1", "#A886A6", "#8B6C8B", "#725572", "#593D59",
    "#412742", "#2A122C", "#000000", "#000000",
];

#[test]
fn test_golden_google_blue_tonal_spot() {
    let palette = generate("#1B6EF3", Style::TonalSpot);
    assert_eq!(palette.system_neutral1, GOOGLE_BLUE_NEUTRAL1);
    assert_eq!(palette.system_accent3, GOOGLE_BLUE_ACCENT3);
    assert_eq!(palette_hash(&palette).unwrap(), GOOGLE_BLUE_TONAL_SPOT_HASH);
}

#[test]
fn test_determinism_across_calls() {
    for seed in crate::SEEDS {
        for style in Style::ALL {
            let first = palette_hash(&generate(seed, style)).unwrap();
            let second = palette_hash(&generate(seed, style)).unwrap();
            assert_eq!(first, second, "{seed} {style}");
        }
    }
}

#[test]
fn test_styles_differ() {
    let hashes: std::collections::HashSet<String> = Style::ALL
        .into_iter()
        .map(|style| palette_hash(&generate("#1B6EF3", style)).unwrap())
        .collect();
    assert_eq!(hashes.len(), Style::ALL.len());
}
