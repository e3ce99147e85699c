//! Interpolation utilities.

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use monet_math::lerp;
///
/// assert_eq!(lerp(0.525, 0.59, 0.0), 0.525);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
        assert_eq!(lerp(2.0, 6.0, 1.5), 8.0);
        assert_eq!(lerp(2.0, 6.0, -0.5), 0.0);
    }
}
