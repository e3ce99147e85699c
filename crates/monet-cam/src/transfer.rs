//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! Monet keeps linear channels on a `[0, 100]` scale so that linear RGB and
//! XYZ share units with relative luminance Y. The helpers here bridge that
//! scale and 8-bit channels.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB EOTF: decodes an encoded value in `[0, 1]` to linear `[0, 1]`.
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: encodes linear `[0, 1]` to an encoded value in `[0, 1]`.
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Linearizes an 8-bit channel to the `[0, 100]` linear scale.
#[inline]
pub fn linearized(channel: u8) -> f64 {
    eotf(f64::from(channel) / 255.0) * 100.0
}

/// Encodes a `[0, 100]` linear channel to `[0, 255]` without rounding.
///
/// Inputs outside `[0, 100]` give outputs outside `[0, 255]`.
#[inline]
pub fn true_delinearized(component: f64) -> f64 {
    oetf(component / 100.0) * 255.0
}

/// Encodes a `[0, 100]` linear channel to an 8-bit channel, rounding and
/// clamping to `[0, 255]`.
#[inline]
pub fn delinearized(component: f64) -> u8 {
    // NaN falls through `clamp` unchanged and saturates to 0 in the cast.
    true_delinearized(component).round().clamp(0.0, 255.0) as u8
}
