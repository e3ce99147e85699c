//! Packed ARGB colors.
//!
//! [`Argb`] stores a color as a single `u32` laid out as `0xAARRGGBB`.
//! Every color produced by the Monet pipeline is fully opaque; the alpha
//! byte exists so the packed value matches the platform color-int layout.
//!
//! # Hex strings
//!
//! The external representation is `#RRGGBB` (upper-case on output, any case on
//! input). Alpha is never written or read.
//!
//! ```rust
//! use monet_core::Argb;
//!
//! let c = Argb::from_rgb(0x1B, 0x6E, 0xF3);
//! assert_eq!(c.to_hex(), "#1B6EF3");
//! assert_eq!(Argb::from_hex("1b6ef3").unwrap(), c);
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A packed 32-bit color, `0xAARRGGBB`.
///
/// Serializes as its `#RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);

    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Creates an opaque color from 8-bit channels.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(0xFF00_0000 | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// True when all three channels are equal.
    #[inline]
    pub const fn is_gray(self) -> bool {
        self.red() == self.green() && self.green() == self.blue()
    }

    /// Formats as `#RRGGBB`, upper-case, alpha dropped.
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }

    /// Parses `#RRGGBB` or `RRGGBB`, case-insensitive, into an opaque color.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHex`] when the input is not exactly six hex digits
    /// after an optional leading `#`.
    pub fn from_hex(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex {
                input: input.to_string(),
            });
        }
        let rgb = u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidHex {
            input: input.to_string(),
        })?;
        Ok(Self(0xFF00_0000 | rgb))
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

impl FromStr for Argb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Argb {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Argb(0xFF1B_6EF3);
        assert_eq!(c.alpha(), 0xFF);
        assert_eq!(c.red(), 0x1B);
        assert_eq!(c.green(), 0x6E);
        assert_eq!(c.blue(), 0xF3);
        assert_eq!(c.to_rgb(), [0x1B, 0x6E, 0xF3]);
    }

    #[test]
    fn test_from_rgb_is_opaque() {
        let c = Argb::from_rgb(1, 2, 3);
        assert_eq!(c.0, 0xFF01_0203);
        assert_eq!(Argb::from_rgb(0, 0, 0), Argb::BLACK);
        assert_eq!(Argb::from_rgb(255, 255, 255), Argb::WHITE);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Argb::WHITE.to_hex(), "#FFFFFF");
        assert_eq!(Argb::BLACK.to_hex(), "#000000");
        assert_eq!(Argb::from_rgb(0, 0x0A, 0xB0).to_hex(), "#000AB0");
        assert_eq!(Argb::from_rgb(0xAB, 0xCD, 0xEF).to_string(), "#ABCDEF");
    }

    #[test]
    fn test_hex_parsing_is_case_insensitive() {
        let lower = Argb::from_hex("#1b6ef3").unwrap();
        let upper = Argb::from_hex("#1B6EF3").unwrap();
        let bare = Argb::from_hex("1B6EF3").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper, bare);
        assert_eq!(lower.alpha(), 0xFF);
    }

    #[test]
    fn test_hex_parsing_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "#GG0000", "##123456", "#12 456", "#ffé000"] {
            assert!(Argb::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_is_gray() {
        assert!(Argb::from_rgb(0x77, 0x77, 0x77).is_gray());
        assert!(!Argb::from_rgb(0x77, 0x77, 0x78).is_gray());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let c = Argb::from_rgb(0x1B, 0x6E, 0xF3);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#1B6EF3\"");
        let back: Argb = serde_json::from_str("\"#1b6ef3\"").unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Argb>("\"blue\"").is_err());
    }
}
