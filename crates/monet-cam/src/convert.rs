//! Conversions between packed sRGB, linear RGB, CIE XYZ and L*.
//!
//! Naming follows `<to>_from_<from>`: [`lstar_from_argb`] returns L* of a
//! packed color, [`argb_from_xyz`] packs an XYZ triplet.
//!
//! # Scales
//!
//! | Quantity | Range |
//! |----------|-------|
//! | 8-bit channel | 0..=255 |
//! | linear RGB | [0, 100] |
//! | XYZ | Y in [0, 100], D65 white = (95.047, 100, 108.883) |
//! | L* | [0, 100] |
//!
//! # Example
//!
//! ```rust
//! use monet_cam::convert::{argb_from_lstar, lstar_from_argb};
//!
//! let gray = argb_from_lstar(50.0);
//! assert!(gray.is_gray());
//! assert!((lstar_from_argb(gray) - 50.0).abs() < 0.5);
//! ```

use crate::transfer::{delinearized, linearized};
use monet_core::Argb;
use monet_math::{Mat3, Vec3};

/// Linear sRGB to XYZ.
///
/// Derived from the xyY primaries with a correction so that linear
/// (100, 100, 100) lands exactly on the D65 white point. The middle row is
/// the Rec.709 luminance weights.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
]);

/// XYZ to linear sRGB.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2413774792388685, -1.5376652402851851, -0.49885366846268053],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [0.05562093689691305, -0.20395524564742123, 1.0571799111220335],
]);

/// XYZ to linear sRGB with four-digit coefficients.
///
/// Only [`argb_from_viewed_xyz`] uses it, when a CAM16 appearance is rendered.
pub const XYZ_TO_SRGB_VIEWED: Mat3 = Mat3::from_rows([
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
]);

/// XYZ to CAM16 cone ('RGB') responses.
pub const XYZ_TO_CAM16RGB: Mat3 = Mat3::from_rows([
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
]);

/// CAM16 cone ('RGB') responses to XYZ.
pub const CAM16RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [1.86206786, -1.01125463, 0.14918677],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.0158415, -0.03412294, 1.04996444],
]);

/// D65 reference white in XYZ, Y normalized to 100.
pub const WHITE_POINT_D65: Vec3 = Vec3::new(95.047, 100.0, 108.883);

/// Weights turning linear RGB into relative luminance Y.
pub const Y_FROM_LINRGB: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// CIE ε: the Y/Yn breakpoint between the cube-root and linear segments.
pub const EPSILON: f64 = 216.0 / 24389.0;

/// CIE κ: slope of the linear segment of L*.
pub const KAPPA: f64 = 24389.0 / 27.0;

/// Linear RGB, `[0, 100]` per channel, of a packed color.
#[inline]
pub fn linrgb_from_argb(argb: Argb) -> Vec3 {
    Vec3::new(
        linearized(argb.red()),
        linearized(argb.green()),
        linearized(argb.blue()),
    )
}

/// XYZ of a packed color.
#[inline]
pub fn xyz_from_argb(argb: Argb) -> Vec3 {
    SRGB_TO_XYZ * linrgb_from_argb(argb)
}

/// Relative luminance Y, `[0, 100]`, of a packed color.
#[inline]
pub fn y_from_argb(argb: Argb) -> f64 {
    linrgb_from_argb(argb).dot(Y_FROM_LINRGB)
}

/// L* of a packed color.
#[inline]
pub fn lstar_from_argb(argb: Argb) -> f64 {
    lstar_from_y(y_from_argb(argb))
}

/// Converts relative luminance Y, `[0, 100]`, to L*.
pub fn lstar_from_y(y: f64) -> f64 {
    let y = y / 100.0;
    if y <= EPSILON {
        KAPPA * y
    } else {
        116.0 * y.cbrt() - 16.0
    }
}

/// Converts L* to relative luminance Y, `[0, 100]`.
///
/// L* is perceptually linear; Y is linear in light energy.
pub fn y_from_lstar(lstar: f64) -> f64 {
    if lstar > 8.0 {
        ((lstar + 16.0) / 116.0).powi(3) * 100.0
    } else {
        lstar / KAPPA * 100.0
    }
}

/// Packs linear RGB, `[0, 100]` per channel, into an 8-bit color.
///
/// Channels outside the cube are clamped, which is where out-of-gamut
/// colors lose their intended appearance.
#[inline]
pub fn argb_from_linrgb(linrgb: Vec3) -> Argb {
    Argb::from_rgb(
        delinearized(linrgb.x),
        delinearized(linrgb.y),
        delinearized(linrgb.z),
    )
}

/// Packs an XYZ triplet into an 8-bit color, clamping out-of-gamut channels.
#[inline]
pub fn argb_from_xyz(xyz: Vec3) -> Argb {
    argb_from_linrgb(XYZ_TO_SRGB * xyz)
}

/// Packs an XYZ triplet reconstructed from a CAM16 appearance.
///
/// XYZ is clamped to `[0, D65 white]` per component before
/// [`XYZ_TO_SRGB_VIEWED`] is applied, so an out-of-gamut appearance clips in
/// XYZ rather than in linear RGB.
pub fn argb_from_viewed_xyz(xyz: Vec3) -> Argb {
    let clamped = Vec3::new(
        xyz.x.clamp(0.0, WHITE_POINT_D65.x),
        xyz.y.clamp(0.0, WHITE_POINT_D65.y),
        xyz.z.clamp(0.0, WHITE_POINT_D65.z),
    );
    argb_from_linrgb(XYZ_TO_SRGB_VIEWED * clamped)
}

/// The gray whose L* matches `lstar`.
///
/// This is the single grayscale conversion in Monet: the solver's
/// zero-chroma shortcut returns exactly this color.
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let fy = (lstar + 16.0) / 116.0;
    let cube = fy * fy * fy;
    let y = if lstar > 8.0 { cube } else { lstar / KAPPA };
    // a* = b* = 0, so fx = fz = fy
    let xz = if cube > EPSILON { cube } else { lstar / KAPPA };
    argb_from_xyz(Vec3::new(xz, y, xz).mul_elem(WHITE_POINT_D65))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_matrices_are_inverses() {
        let samples = [
            Vec3::new(100.0, 0.0, 0.0),
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(12.5, 48.0, 90.0),
        ];
        for v in samples {
            let srgb = XYZ_TO_SRGB * (SRGB_TO_XYZ * v);
            let cam = CAM16RGB_TO_XYZ * (XYZ_TO_CAM16RGB * v);
            for i in 0..3 {
                assert_abs_diff_eq!(srgb[i], v[i], epsilon = 1e-4);
                assert_abs_diff_eq!(cam[i], v[i], epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_white_maps_to_d65() {
        let xyz = xyz_from_argb(Argb::WHITE);
        assert_abs_diff_eq!(xyz.x, WHITE_POINT_D65.x, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.y, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(xyz.z, WHITE_POINT_D65.z, epsilon = 1e-3);
        assert_eq!(argb_from_xyz(WHITE_POINT_D65), Argb::WHITE);
    }

    #[test]
    fn test_lstar_y_roundtrip() {
        for l in [0.0, 1.0, 5.0, 8.0, 8.5, 20.0, 49.6, 50.0, 90.0, 100.0] {
            assert_abs_diff_eq!(lstar_from_y(y_from_lstar(l)), l, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_lstar_extremes() {
        assert_abs_diff_eq!(lstar_from_argb(Argb::BLACK), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lstar_from_argb(Argb::WHITE), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_argb_from_lstar_boundaries() {
        assert_eq!(argb_from_lstar(0.0), Argb::BLACK);
        assert_eq!(argb_from_lstar(100.0), Argb::WHITE);
        assert_eq!(argb_from_lstar(50.0).to_hex(), "#777777");
    }

    #[test]
    fn test_argb_from_lstar_matches_lstar() {
        for l in (1..100).map(f64::from) {
            let gray = argb_from_lstar(l);
            assert!(gray.is_gray(), "L*={l} gave {gray}");
            assert_abs_diff_eq!(lstar_from_argb(gray), l, epsilon = 0.5);
        }
    }

    #[test]
    fn test_out_of_gamut_xyz_is_clamped() {
        let c = argb_from_xyz(Vec3::new(200.0, -10.0, 0.0));
        assert_eq!(c.alpha(), 0xFF);
        assert_eq!(c.green(), 0);
    }

    #[test]
    fn test_viewed_xyz_clamps_to_white_reference() {
        assert_eq!(argb_from_viewed_xyz(WHITE_POINT_D65), Argb::WHITE);
        assert_eq!(argb_from_viewed_xyz(Vec3::new(120.0, 130.0, 140.0)), Argb::WHITE);
        assert_eq!(argb_from_viewed_xyz(Vec3::new(-5.0, -1.0, -20.0)), Argb::BLACK);
        assert_eq!(
            argb_from_viewed_xyz(Vec3::new(200.0, -10.0, 0.0)),
            argb_from_viewed_xyz(Vec3::new(WHITE_POINT_D65.x, 0.0, 0.0)),
        );
    }

    #[test]
    fn test_viewed_xyz_matches_precise_matrix_in_gamut() {
        for argb in [0xFF1B_6EF3u32, 0xFFB3_261E, 0xFF80_8080] {
            let color = Argb(argb);
            assert_eq!(argb_from_viewed_xyz(xyz_from_argb(color)), color);
        }
    }
}
