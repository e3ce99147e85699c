//! # monet
//!
//! Material You dynamic color: a complete palette from one seed color.
//!
//! A palette is five ramps (`accent1..3`, `neutral1..2`), each 14 `#RRGGBB`
//! shades from white to black on a fixed L* grid. The seed's CAM16 hue and
//! chroma go through a [`Style`] recipe to get five hue/chroma pairs; each
//! pair is expanded into a [`TonalRamp`] by the HCT solver in `monet-cam`.
//!
//! # Quick Start
//!
//! ```rust
//! use monet::{Role, Style, generate};
//!
//! let palette = generate("#1B6EF3", Style::TonalSpot);
//! for (role, ramp) in palette.roles() {
//!     assert_eq!(ramp.len(), 14, "{role}");
//! }
//! assert_eq!(palette.ramp(Role::Accent1)[0], "#FFFFFF");
//! ```
//!
//! With a platform palette source and a fallback:
//!
//! ```rust
//! use monet::{Style, Unavailable, material_you_palette};
//!
//! let palette = material_you_palette(Some(&Unavailable), "#1B6EF3", Style::Vibrant);
//! assert!(palette.validate().is_ok());
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (one `debug` per palette and per ramp, `warn` on
//! rejected input). No subscriber is installed.
//!
//! # Dependencies
//!
//! - `monet-core` - [`Argb`] and hex parsing
//! - `monet-cam` - CAM16 and the HCT solver

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod config;
pub mod native;
pub mod palette;
pub mod shades;
pub mod style;

pub use config::{PaletteConfig, SeedColor};
pub use error::{PaletteError, PaletteResult};
pub use native::{NativePaletteSource, Unavailable, material_you_palette};
pub use palette::{
    ACCENT1_CHROMA, GOOGLE_BLUE, MaterialYouPalette, Role, generate, generate_from_argb, try_generate,
};
pub use shades::{MAX_LIGHT_CHROMA, MIDDLE_LSTAR, SHADE_COUNT, SHADE_TONES, TonalRamp};
pub use style::{HueChroma, Style, StyleRecipe};

pub use monet_cam as cam;
pub use monet_core::Argb;
