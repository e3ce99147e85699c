//! Angle and sign helpers.
//!
//! Hues are kept in `[0, 360)` degrees everywhere in Monet. Solver code that
//! works in radians uses [`sanitize_radians`] for small offsets around zero.

use std::f64::consts::PI;

/// Wraps a degree measure into `[0, 360)`.
///
/// # Example
///
/// ```rust
/// use monet_math::sanitize_degrees;
///
/// assert_eq!(sanitize_degrees(370.0), 10.0);
/// assert_eq!(sanitize_degrees(-30.0), 330.0);
/// assert_eq!(sanitize_degrees(360.0), 0.0);
/// ```
#[inline]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let d = degrees % 360.0;
    if d < 0.0 { d + 360.0 } else { d }
}

/// Maps an angle close to zero into `[0, 2π)`.
///
/// Valid for inputs greater than `-8π`, which covers differences of two
/// `atan2` results.
#[inline]
pub fn sanitize_radians(angle: f64) -> f64 {
    (angle + PI * 8.0) % (PI * 2.0)
}

/// Sign of `x`: `-1.0`, `0.0` or `1.0`.
///
/// Unlike [`f64::signum`], zero maps to zero.
#[inline]
pub fn signum(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        1.0
    }
}
