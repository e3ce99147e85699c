//! Error types for palette operations.
//!
//! Generation itself never fails. Errors come from the edges: parsing seed
//! strings, style names and config documents, and validating palettes that
//! arrive from outside the generator.

use crate::palette::Role;
use thiserror::Error;

/// Palette operation error.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// Seed color is not a `#RRGGBB` string.
    #[error("invalid seed color: {0}")]
    Seed(#[from] monet_core::Error),

    /// Style name does not match any known style.
    #[error("unknown style '{name}'")]
    UnknownStyle {
        /// The rejected name.
        name: String,
    },

    /// A ramp does not have exactly 14 entries.
    #[error("{role} ramp has {len} entries, expected 14")]
    RampLength {
        /// Ramp that failed.
        role: Role,
        /// Entries found.
        len: usize,
    },

    /// A ramp entry is not a `#RRGGBB` string.
    #[error("{role} ramp entry {index} is not a #RRGGBB color: '{value}'")]
    InvalidShade {
        /// Ramp that failed.
        role: Role,
        /// Position within the ramp.
        index: usize,
        /// The rejected entry.
        value: String,
    },

    /// Config document could not be parsed.
    #[error("config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;
