//! # monet-math
//!
//! Math primitives for perceptual color work.
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ/cone-response transforms
//! - [`Vec3`] - 3D vectors for RGB, XYZ and cone-response triplets
//! - Interpolation ([`lerp`])
//! - Angle helpers ([`sanitize_degrees`], [`sanitize_radians`], [`signum`])
//!
//! # Design
//!
//! Everything is `f64`. Palette generation must be bit-for-bit reproducible
//! and the solver compares luminance to within 0.002, which is below what
//! `f32` can hold reliably at Y = 100.
//!
//! Matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use monet_math::{Mat3, Vec3};
//!
//! let srgb_to_xyz = Mat3::from_rows([
//!     [0.41233895, 0.35762064, 0.18051042],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.01932141, 0.11916382, 0.95034478],
//! ]);
//! let xyz = srgb_to_xyz * Vec3::new(100.0, 100.0, 100.0);
//! assert!((xyz.y - 100.0).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - `glam` - evaluates the matrix-vector products behind [`Mat3`]
//!
//! # Used By
//!
//! - `monet-cam` - color space conversions, CAM16, HCT solver

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod interp;
mod mat3;
mod vec3;

pub use angle::*;
pub use interp::*;
pub use mat3::*;
pub use vec3::*;
