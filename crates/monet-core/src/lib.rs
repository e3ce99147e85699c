//! # monet-core
//!
//! Core types shared by every Monet crate.
//!
//! - [`Argb`] - a packed 32-bit color (`0xAARRGGBB`), always opaque in practice
//! - [`Error`] / [`Result`] - failures of the few fallible operations (hex parsing)
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The color crates build on it:
//!
//! ```text
//! monet-core (this crate)
//!    ^
//!    |
//!    +-- monet-cam (CAM16, HCT solver)
//!    +-- monet (tonal ramps, style recipes, palettes)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use monet_core::Argb;
//!
//! let seed: Argb = "#1b6ef3".parse().unwrap();
//! assert_eq!(seed.red(), 0x1b);
//! assert_eq!(seed.to_hex(), "#1B6EF3");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod argb;
pub mod error;

pub use argb::Argb;
pub use error::{Error, Result};
