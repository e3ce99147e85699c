//! Palette configuration.
//!
//! A small YAML document choosing the seed and style:
//!
//! ```yaml
//! seed: auto            # or "#RRGGBB"
//! fallback_color: "#1B6EF3"
//! style: TONAL_SPOT
//! ```
//!
//! Every field is optional. With `seed: auto` the platform palette is used
//! when available and `fallback_color` seeds generation otherwise.

use crate::error::PaletteResult;
use crate::native::{NativePaletteSource, material_you_palette};
use crate::palette::{MaterialYouPalette, try_generate};
use crate::style::Style;
use monet_core::Argb;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default fallback seed.
pub const DEFAULT_FALLBACK_COLOR: &str = "#1B6EF3";

/// Where the seed comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeedColor {
    /// Prefer the platform palette.
    #[default]
    Auto,
    /// Always generate from this `#RRGGBB` color.
    Hex(String),
}

impl From<String> for SeedColor {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("auto") {
            SeedColor::Auto
        } else {
            SeedColor::Hex(value)
        }
    }
}

impl From<SeedColor> for String {
    fn from(seed: SeedColor) -> Self {
        match seed {
            SeedColor::Auto => "auto".to_string(),
            SeedColor::Hex(hex) => hex,
        }
    }
}

/// Palette settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Seed selection.
    pub seed: SeedColor,
    /// Seed used when `seed` is `auto` and no platform palette exists.
    pub fallback_color: String,
    /// Generation style.
    pub style: Style,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            seed: SeedColor::Auto,
            fallback_color: DEFAULT_FALLBACK_COLOR.to_string(),
            style: Style::default(),
        }
    }
}

impl PaletteConfig {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> PaletteResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> PaletteResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> PaletteResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Produces the configured palette.
    ///
    /// Seed strings are checked strictly here: a malformed `seed` or
    /// `fallback_color` is an error rather than a silent default.
    pub fn resolve(&self, native: Option<&dyn NativePaletteSource>) -> PaletteResult<MaterialYouPalette> {
        match &self.seed {
            SeedColor::Hex(hex) => try_generate(hex, self.style),
            SeedColor::Auto => {
                Argb::from_hex(&self.fallback_color)?;
                Ok(material_you_palette(native, &self.fallback_color, self.style))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use crate::native::Unavailable;
    use crate::palette::generate;

    #[test]
    fn test_defaults() {
        let config = PaletteConfig::default();
        assert_eq!(config.seed, SeedColor::Auto);
        assert_eq!(config.fallback_color, "#1B6EF3");
        assert_eq!(config.style, Style::TonalSpot);
    }

    #[test]
    fn test_parse_full() {
        let config = PaletteConfig::from_yaml_str(
            "seed: \"#B3261E\"\nfallback_color: \"#00FF00\"\nstyle: FRUIT_SALAD\n",
        )
        .unwrap();
        assert_eq!(config.seed, SeedColor::Hex("#B3261E".to_string()));
        assert_eq!(config.fallback_color, "#00FF00");
        assert_eq!(config.style, Style::FruitSalad);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = PaletteConfig::from_yaml_str("style: VIBRANT\n").unwrap();
        assert_eq!(config.seed, SeedColor::Auto);
        assert_eq!(config.fallback_color, DEFAULT_FALLBACK_COLOR);
        assert_eq!(config.style, Style::Vibrant);

        let auto = PaletteConfig::from_yaml_str("seed: AUTO\n").unwrap();
        assert_eq!(auto.seed, SeedColor::Auto);
    }

    #[test]
    fn test_unknown_style_is_yaml_error() {
        let err = PaletteConfig::from_yaml_str("style: NEON\n").unwrap_err();
        assert!(matches!(err, PaletteError::Yaml(_)));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = PaletteConfig {
            seed: SeedColor::Hex("#6750A4".to_string()),
            fallback_color: "#1B6EF3".to_string(),
            style: Style::Expressive,
        };
        let yaml = config.to_yaml_string().unwrap();
        assert!(yaml.contains("EXPRESSIVE"));
        assert_eq!(PaletteConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_resolve_explicit_seed() {
        let config = PaletteConfig::from_yaml_str("seed: \"#6750A4\"\nstyle: CONTENT\n").unwrap();
        let palette = config.resolve(Some(&Unavailable)).unwrap();
        assert_eq!(palette, generate("#6750A4", Style::Content));
    }

    #[test]
    fn test_resolve_auto_falls_back() {
        let config = PaletteConfig::default();
        let palette = config.resolve(None).unwrap();
        assert_eq!(palette, generate("#1B6EF3", Style::TonalSpot));
    }

    #[test]
    fn test_resolve_rejects_malformed_seed() {
        let config = PaletteConfig {
            seed: SeedColor::Hex("blue".to_string()),
            ..PaletteConfig::default()
        };
        assert!(matches!(config.resolve(None), Err(PaletteError::Seed(_))));

        let config = PaletteConfig {
            fallback_color: "#GGGGGG".to_string(),
            ..PaletteConfig::default()
        };
        assert!(matches!(config.resolve(None), Err(PaletteError::Seed(_))));
    }
}
