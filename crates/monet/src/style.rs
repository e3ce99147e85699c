//! Style recipes: how one seed hue/chroma becomes five hue/chroma pairs.
//!
//! Each [`Style`] is a fixed function of the seed. Some styles keep the seed
//! hue and pick fixed chromas, some rotate the hue by a table keyed on the
//! seed hue, and `CONTENT` scales the seed's own chroma.
//!
//! | Style | accent1 | accent2 | accent3 | neutral1 | neutral2 |
//! |-------|---------|---------|---------|----------|----------|
//! | SPRITZ | h, 12 | h, 8 | h, 16 | h, 2 | h, 2 |
//! | TONAL_SPOT | h, 36 | h, 16 | h+60, 24 | h, 4 | h, 8 |
//! | VIBRANT | h, 130 | vs(h), 24 | vt(h), 32 | h, 10 | h, 12 |
//! | EXPRESSIVE | h+240, 40 | es(h), 24 | et(h), 32 | h+15, 8 | h+15, 12 |
//! | RAINBOW | h, 48 | h, 16 | h+60, 24 | h, 0 | h, 0 |
//! | FRUIT_SALAD | h-50, 48 | h-50, 36 | h, 36 | h, 10 | h, 16 |
//! | CONTENT | h, c | h, 0.33c | h, 0.66c | h, 0.0833c | h, 0.1666c |
//! | MONOCHROMATIC | h, 0 | h, 0 | h, 0 | h, 0 | h, 0 |

use crate::error::{PaletteError, PaletteResult};
use crate::palette::Role;
use monet_math::sanitize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Palette generation style.
///
/// Serializes as the upper-case name, e.g. `TONAL_SPOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Style {
    /// Barely tinted, close to grayscale.
    Spritz,
    /// Calm, mid-chroma accents. The default.
    #[default]
    TonalSpot,
    /// Maximum chroma primary with rotated secondary and tertiary hues.
    Vibrant,
    /// Primary hue rotated away from the seed; playful.
    Expressive,
    /// Chromatic accents over pure gray neutrals.
    Rainbow,
    /// Primary and secondary rotated 50° back from the seed.
    FruitSalad,
    /// Chroma proportional to the seed's own chroma.
    Content,
    /// Grayscale everywhere.
    Monochromatic,
}

impl Style {
    /// Every style, in declaration order.
    pub const ALL: [Style; 8] = [
        Style::Spritz,
        Style::TonalSpot,
        Style::Vibrant,
        Style::Expressive,
        Style::Rainbow,
        Style::FruitSalad,
        Style::Content,
        Style::Monochromatic,
    ];

    /// The literal style name.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Spritz => "SPRITZ",
            Style::TonalSpot => "TONAL_SPOT",
            Style::Vibrant => "VIBRANT",
            Style::Expressive => "EXPRESSIVE",
            Style::Rainbow => "RAINBOW",
            Style::FruitSalad => "FRUIT_SALAD",
            Style::Content => "CONTENT",
            Style::Monochromatic => "MONOCHROMATIC",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = PaletteError;

    /// Parses a style name, ignoring ASCII case.
    fn from_str(s: &str) -> PaletteResult<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PaletteError::UnknownStyle { name: s.to_string() })
    }
}

/// A CAM16 hue (degrees) and chroma pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HueChroma {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Chroma, `>= 0`.
    pub chroma: f64,
}

impl HueChroma {
    /// Creates a pair as given.
    pub const fn new(hue: f64, chroma: f64) -> Self {
        Self { hue, chroma }
    }
}

/// Piecewise-constant hue rotation: `(start hue, rotation)`.
///
/// Segment `i` covers `[table[i].0, table[i + 1].0)`. The final 360 row only
/// closes the last segment.
pub type HueRotations = [(f64, f64); 9];

/// VIBRANT accent2 rotation.
pub const VIBRANT_SECONDARY: HueRotations = [
    (0.0, 18.0),
    (41.0, 15.0),
    (61.0, 10.0),
    (101.0, 12.0),
    (131.0, 15.0),
    (181.0, 18.0),
    (251.0, 15.0),
    (301.0, 12.0),
    (360.0, 12.0),
];

/// VIBRANT accent3 rotation.
pub const VIBRANT_TERTIARY: HueRotations = [
    (0.0, 35.0),
    (41.0, 30.0),
    (61.0, 20.0),
    (101.0, 25.0),
    (131.0, 30.0),
    (181.0, 35.0),
    (251.0, 30.0),
    (301.0, 25.0),
    (360.0, 25.0),
];

/// EXPRESSIVE accent2 rotation.
pub const EXPRESSIVE_SECONDARY: HueRotations = [
    (0.0, 45.0),
    (21.0, 95.0),
    (51.0, 45.0),
    (121.0, 20.0),
    (151.0, 45.0),
    (191.0, 90.0),
    (271.0, 45.0),
    (321.0, 45.0),
    (360.0, 45.0),
];

/// EXPRESSIVE accent3 rotation.
pub const EXPRESSIVE_TERTIARY: HueRotations = [
    (0.0, 120.0),
    (21.0, 120.0),
    (51.0, 20.0),
    (121.0, 45.0),
    (151.0, 20.0),
    (191.0, 15.0),
    (271.0, 20.0),
    (321.0, 120.0),
    (360.0, 120.0),
];

/// Rotates `source_hue` by the segment of `rotations` that contains it.
///
/// Hues outside `[0, 360)` are treated as 0.
pub fn hue_rotation(source_hue: f64, rotations: &[(f64, f64)]) -> f64 {
    let hue = if (0.0..360.0).contains(&source_hue) { source_hue } else { 0.0 };
    rotations
        .windows(2)
        .find(|pair| pair[0].0 <= hue && hue < pair[1].0)
        .map(|pair| sanitize_degrees(hue + pair[0].1))
        .unwrap_or(source_hue)
}

/// `hue + degrees`, wrapped to `[0, 360)`.
#[inline]
pub fn hue_add(hue: f64, degrees: f64) -> f64 {
    sanitize_degrees(hue + degrees)
}

/// `hue - degrees`, wrapped to `[0, 360)`.
#[inline]
pub fn hue_subtract(hue: f64, degrees: f64) -> f64 {
    sanitize_degrees(hue - degrees)
}

/// The five hue/chroma pairs a style derives from one seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleRecipe {
    /// Primary accent.
    pub accent1: HueChroma,
    /// Secondary accent.
    pub accent2: HueChroma,
    /// Tertiary accent.
    pub accent3: HueChroma,
    /// Surface neutral.
    pub neutral1: HueChroma,
    /// Surface-variant neutral.
    pub neutral2: HueChroma,
}

impl StyleRecipe {
    /// Applies `style` to a seed hue and chroma.
    ///
    /// The hue is wrapped to `[0, 360)` first, so 370° and 10° give the same
    /// recipe. The chroma is used as given; palette generation floors it at
    /// [`ACCENT1_CHROMA`](crate::palette::ACCENT1_CHROMA) beforehand.
    pub fn new(style: Style, hue: f64, chroma: f64) -> Self {
        let h = sanitize_degrees(hue);
        let hc = HueChroma::new;

        match style {
            Style::Spritz => Self::from_pairs([hc(h, 12.0), hc(h, 8.0), hc(h, 16.0), hc(h, 2.0), hc(h, 2.0)]),
            Style::TonalSpot => Self::from_pairs([
                hc(h, 36.0),
                hc(h, 16.0),
                hc(hue_add(h, 60.0), 24.0),
                hc(h, 4.0),
                hc(h, 8.0),
            ]),
            Style::Vibrant => Self::from_pairs([
                hc(h, 130.0),
                hc(hue_rotation(h, &VIBRANT_SECONDARY), 24.0),
                hc(hue_rotation(h, &VIBRANT_TERTIARY), 32.0),
                hc(h, 10.0),
                hc(h, 12.0),
            ]),
            Style::Expressive => Self::from_pairs([
                hc(hue_add(h, 240.0), 40.0),
                hc(hue_rotation(h, &EXPRESSIVE_SECONDARY), 24.0),
                hc(hue_rotation(h, &EXPRESSIVE_TERTIARY), 32.0),
                hc(hue_add(h, 15.0), 8.0),
                hc(hue_add(h, 15.0), 12.0),
            ]),
            Style::Rainbow => Self::from_pairs([
                hc(h, 48.0),
                hc(h, 16.0),
                hc(hue_add(h, 60.0), 24.0),
                hc(h, 0.0),
                hc(h, 0.0),
            ]),
            Style::FruitSalad => Self::from_pairs([
                hc(hue_subtract(h, 50.0), 48.0),
                hc(hue_subtract(h, 50.0), 36.0),
                hc(h, 36.0),
                hc(h, 10.0),
                hc(h, 16.0),
            ]),
            // Ratios are tuned for 4.5:1 contrast five ramp steps apart.
            Style::Content => Self::from_pairs([
                hc(h, chroma),
                hc(h, chroma * 0.33),
                hc(h, chroma * 0.66),
                hc(h, chroma * 0.0833),
                hc(h, chroma * 0.1666),
            ]),
            Style::Monochromatic => Self::from_pairs([hc(h, 0.0); 5]),
        }
    }

    fn from_pairs([accent1, accent2, accent3, neutral1, neutral2]: [HueChroma; 5]) -> Self {
        Self {
            accent1,
            accent2,
            accent3,
            neutral1,
            neutral2,
        }
    }

    /// The pair for one role.
    pub fn get(&self, role: Role) -> HueChroma {
        match role {
            Role::Accent1 => self.accent1,
            Role::Accent2 => self.accent2,
            Role::Accent3 => self.accent3,
            Role::Neutral1 => self.neutral1,
            Role::Neutral2 => self.neutral2,
        }
    }

    /// Pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, HueChroma)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}
