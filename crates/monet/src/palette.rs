//! Palette assembly: seed color + style -> five hex ramps.
//!
//! ```text
//! "#1B6EF3" -> Argb -> Cam (hue, max(chroma, 48))
//!           -> StyleRecipe (5 x hue/chroma)
//!           -> TonalRamp x 5 (14 shades each)
//!           -> MaterialYouPalette (5 x 14 "#RRGGBB")
//! ```

use crate::error::{PaletteError, PaletteResult};
use crate::shades::{SHADE_COUNT, TonalRamp};
use crate::style::{Style, StyleRecipe};
use monet_cam::Cam;
use monet_core::Argb;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Default seed color ("Google blue").
pub const GOOGLE_BLUE: Argb = Argb(0xFF1B_6EF3);

/// Minimum seed chroma fed into style recipes.
pub const ACCENT1_CHROMA: f64 = 48.0;

/// One of the five ramps in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Primary accent.
    Accent1,
    /// Secondary accent.
    Accent2,
    /// Tertiary accent.
    Accent3,
    /// Surface neutral.
    Neutral1,
    /// Surface-variant neutral.
    Neutral2,
}

impl Role {
    /// Every role, in palette order.
    pub const ALL: [Role; 5] = [Role::Accent1, Role::Accent2, Role::Accent3, Role::Neutral1, Role::Neutral2];

    /// Name of the palette field holding this ramp.
    pub const fn field_name(self) -> &'static str {
        match self {
            Role::Accent1 => "system_accent1",
            Role::Accent2 => "system_accent2",
            Role::Accent3 => "system_accent3",
            Role::Neutral1 => "system_neutral1",
            Role::Neutral2 => "system_neutral2",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Five ramps of `#RRGGBB` strings, lightest first.
///
/// Generated palettes always have 14 well-formed entries per ramp. Palettes
/// from elsewhere (deserialized, or from a platform source) are only trusted
/// after [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MaterialYouPalette {
    /// Primary accent ramp.
    pub system_accent1: Vec<String>,
    /// Secondary accent ramp.
    pub system_accent2: Vec<String>,
    /// Tertiary accent ramp.
    pub system_accent3: Vec<String>,
    /// Neutral ramp.
    pub system_neutral1: Vec<String>,
    /// Neutral-variant ramp.
    pub system_neutral2: Vec<String>,
}

impl MaterialYouPalette {
    /// Expands every hue/chroma pair of `recipe` into a ramp.
    pub fn from_recipe(recipe: &StyleRecipe) -> Self {
        let ramp = |role: Role| {
            let pair = recipe.get(role);
            TonalRamp::of(pair.hue, pair.chroma).to_hex()
        };
        Self {
            system_accent1: ramp(Role::Accent1),
            system_accent2: ramp(Role::Accent2),
            system_accent3: ramp(Role::Accent3),
            system_neutral1: ramp(Role::Neutral1),
            system_neutral2: ramp(Role::Neutral2),
        }
    }

    /// The ramp for `role`.
    pub fn ramp(&self, role: Role) -> &[String] {
        match role {
            Role::Accent1 => &self.system_accent1,
            Role::Accent2 => &self.system_accent2,
            Role::Accent3 => &self.system_accent3,
            Role::Neutral1 => &self.system_neutral1,
            Role::Neutral2 => &self.system_neutral2,
        }
    }

    /// Ramps in role order.
    pub fn roles(&self) -> impl Iterator<Item = (Role, &[String])> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.ramp(role)))
    }

    /// Parses the ramp for `role` back to packed colors.
    pub fn decode(&self, role: Role) -> PaletteResult<Vec<Argb>> {
        self.ramp(role)
            .iter()
            .enumerate()
            .map(|(index, value)| {
                Argb::from_hex(value).map_err(|_| PaletteError::InvalidShade {
                    role,
                    index,
                    value: value.clone(),
                })
            })
            .collect()
    }

    /// Checks every ramp has 14 `#RRGGBB` entries.
    pub fn validate(&self) -> PaletteResult<()> {
        for (role, ramp) in self.roles() {
            if ramp.len() != SHADE_COUNT {
                return Err(PaletteError::RampLength { role, len: ramp.len() });
            }
            if let Some((index, value)) = ramp.iter().enumerate().find(|(_, value)| !is_rrggbb(value)) {
                return Err(PaletteError::InvalidShade {
                    role,
                    index,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Strict `#RRGGBB`: leading `#` and six hex digits.
fn is_rrggbb(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Generates a palette from a packed seed color.
pub fn generate_from_argb(seed: Argb, style: Style) -> MaterialYouPalette {
    let cam = Cam::from_argb(seed);
    let hue = cam.hue();
    let chroma = cam.chroma().max(ACCENT1_CHROMA);
    debug!(seed = %seed, %style, hue, chroma, "Generating palette");

    MaterialYouPalette::from_recipe(&StyleRecipe::new(style, hue, chroma))
}

/// Generates a palette from a `#RRGGBB` seed, failing on malformed input.
pub fn try_generate(seed: &str, style: Style) -> PaletteResult<MaterialYouPalette> {
    let argb = Argb::from_hex(seed)?;
    Ok(generate_from_argb(argb, style))
}

/// Generates a palette from a `#RRGGBB` seed.
///
/// A malformed seed is logged and replaced by [`GOOGLE_BLUE`], so this
/// always returns a palette. The seed is never partially parsed: input such
/// as `"#12345G"` or `"#1B6EF3FF"` yields the Google blue palette rather than
/// a color built from whatever digits happen to be valid. Use
/// [`try_generate`] to reject such input instead.
///
/// # Example
///
/// ```rust
/// use monet::{Style, generate};
///
/// let palette = generate("#1b6ef3", Style::TonalSpot);
/// assert_eq!(palette.system_accent1.len(), 14);
/// assert_eq!(palette.system_accent1[0], "#FFFFFF");
/// ```
pub fn generate(seed: &str, style: Style) -> MaterialYouPalette {
    let argb = Argb::from_hex(seed).unwrap_or_else(|err| {
        warn!(seed, error = %err, "Malformed seed color, using default seed");
        GOOGLE_BLUE
    });
    generate_from_argb(argb, style)
}
