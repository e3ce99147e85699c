//! # monet-cam
//!
//! Color science for Monet: sRGB/XYZ/L* conversions, the CAM16 appearance
//! model and the HCT solver that turns (hue, chroma, L*) into sRGB.
//!
//! # Architecture
//!
//! ```text
//!          cam_to_argb / solve_in_frame
//!                    |
//!         +----------+----------+
//!         |                     |
//!        hct                  cam16
//!  (default frame:      (any frame: two-level
//!   Newton + bisection)   binary search)
//!         |                     |
//!         +----------+----------+
//!                    |
//!             frame, convert
//!                    |
//!                 transfer
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use monet_cam::{Cam, cam_to_argb, convert::lstar_from_argb};
//!
//! let seed = Cam::from_argb(monet_core::Argb(0xFF1B6EF3));
//! let tone_80 = cam_to_argb(seed.hue(), 36.0, 80.0);
//! assert!((lstar_from_argb(tone_80) - 80.0).abs() < 0.5);
//!
//! // Zero chroma collapses to the gray with the same L*.
//! assert_eq!(cam_to_argb(0.0, 0.0, 50.0).to_hex(), "#777777");
//! ```
//!
//! All arithmetic is f64.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cam16;
pub mod convert;
pub mod frame;
pub mod hct;
pub mod transfer;

pub use cam16::{Cam, find_cam_by_j, solve_in_frame};
pub use frame::Frame;

use monet_core::Argb;

/// Resolves (hue, chroma, L*) to sRGB in the default viewing frame.
///
/// The result always has the requested L*; chroma is reduced when the request
/// is out of gamut. Chroma near zero yields the gray [`convert::argb_from_lstar`]
/// would give for the same L*.
pub fn cam_to_argb(hue: f64, chroma: f64, lstar: f64) -> Argb {
    hct::solve_to_argb(hue, chroma, lstar)
}
