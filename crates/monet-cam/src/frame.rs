//! Viewing conditions for CAM16.
//!
//! A [`Frame`] holds everything in the CAM16 forward/inverse transforms that
//! depends only on the environment a color is seen in: the white point, how
//! bright the surroundings are, and the background. Computing these once per
//! environment keeps the per-color work small.
//!
//! The default frame, [`Frame::srgb`], models the sRGB viewing environment:
//! D65 white, an adapting luminance of 200/π · Y(L*=50) / 100 cd/m², a
//! mid-gray background (L* = 50), average surround, and no discounting of
//! the illuminant. It is built on first use and shared immutably.

use crate::convert::{XYZ_TO_CAM16RGB, WHITE_POINT_D65, y_from_lstar};
use monet_math::{Vec3, lerp};
use std::f64::consts::PI;
use std::sync::OnceLock;

/// Precomputed CAM16 viewing-condition constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    n: f64,
    aw: f64,
    nbb: f64,
    ncb: f64,
    c: f64,
    nc: f64,
    rgb_d: Vec3,
    fl: f64,
    fl_root: f64,
    z: f64,
}

impl Frame {
    /// The sRGB viewing environment, shared process-wide.
    pub fn srgb() -> &'static Frame {
        static DEFAULT: OnceLock<Frame> = OnceLock::new();
        DEFAULT.get_or_init(|| {
            Frame::make(
                WHITE_POINT_D65,
                (200.0 / PI) * y_from_lstar(50.0) / 100.0,
                50.0,
                2.0,
                false,
            )
        })
    }

    /// True when `self` is the sRGB viewing environment.
    #[inline]
    pub fn is_srgb(&self) -> bool {
        self == Self::srgb()
    }

    /// Builds viewing conditions.
    ///
    /// # Arguments
    /// * `white_point` - XYZ of the reference white, Y = 100
    /// * `adapting_luminance` - luminance of the adapting field, cd/m²
    /// * `background_lstar` - L* of the background
    /// * `surround` - 0 (dark) to 2 (average)
    /// * `discounting_illuminant` - full adaptation to the white point
    pub fn make(
        white_point: Vec3,
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let rgb_w = XYZ_TO_CAM16RGB * white_point;

        // Surround in (0, 2) scaled to CAM16's F in (0.8, 1.0)
        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = d.clamp(0.0, 1.0);
        let nc = f;

        // 100 rather than the white's Y: later steps already scale by it.
        let rgb_d = rgb_w.map(|w| d * (100.0 / w) + 1.0 - d);

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point.y;
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_a = rgb_d.mul_elem(rgb_w).map(|v| {
            let factor = (fl * v / 100.0).powf(0.42);
            400.0 * factor / (factor + 27.13)
        });
        let aw = (2.0 * rgb_a.x + rgb_a.y + 0.05 * rgb_a.z) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// Background-to-white luminance ratio.
    #[inline]
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Achromatic response of the white point.
    #[inline]
    pub fn aw(&self) -> f64 {
        self.aw
    }

    /// Brightness induction factor.
    #[inline]
    pub fn nbb(&self) -> f64 {
        self.nbb
    }

    /// Chromatic induction factor.
    #[inline]
    pub fn ncb(&self) -> f64 {
        self.ncb
    }

    /// Exponential nonlinearity of the surround.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Chromatic induction factor of the surround.
    #[inline]
    pub fn nc(&self) -> f64 {
        self.nc
    }

    /// Per-channel chromatic adaptation (discount) factors.
    #[inline]
    pub fn rgb_d(&self) -> Vec3 {
        self.rgb_d
    }

    /// Luminance-level adaptation factor F_L.
    #[inline]
    pub fn fl(&self) -> f64 {
        self.fl
    }

    /// F_L^0.25.
    #[inline]
    pub fn fl_root(&self) -> f64 {
        self.fl_root
    }

    /// Base exponential nonlinearity.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_srgb_frame_constants() {
        let f = Frame::srgb();
        assert_abs_diff_eq!(f.n(), 0.184186, epsilon = 1e-5);
        assert_abs_diff_eq!(f.aw(), 29.981, epsilon = 1e-2);
        assert_abs_diff_eq!(f.nbb(), 1.0169, epsilon = 1e-3);
        assert_eq!(f.nbb(), f.ncb());
        assert_abs_diff_eq!(f.c(), 0.69, epsilon = 1e-12);
        assert_abs_diff_eq!(f.nc(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.fl(), 0.388, epsilon = 1e-3);
        assert_abs_diff_eq!(f.fl_root(), f.fl().powf(0.25), epsilon = 1e-15);
        assert_abs_diff_eq!(f.z(), 1.909, epsilon = 1e-3);
    }

    #[test]
    fn test_srgb_frame_is_shared() {
        assert!(std::ptr::eq(Frame::srgb(), Frame::srgb()));
        assert!(Frame::srgb().is_srgb());
    }

    #[test]
    fn test_rebuilt_default_compares_equal() {
        let rebuilt = Frame::make(
            WHITE_POINT_D65,
            (200.0 / PI) * y_from_lstar(50.0) / 100.0,
            50.0,
            2.0,
            false,
        );
        assert!(rebuilt.is_srgb());
    }

    #[test]
    fn test_dark_background_differs() {
        let dark = Frame::make(WHITE_POINT_D65, 11.72, 20.0, 1.0, false);
        assert!(!dark.is_srgb());
        assert!(dark.n() < Frame::srgb().n());
        assert!(dark.c() < Frame::srgb().c());
    }

    #[test]
    fn test_discounting_illuminant_fully_adapts() {
        let f = Frame::make(WHITE_POINT_D65, 64.0, 50.0, 2.0, true);
        let rgb_w = XYZ_TO_CAM16RGB * WHITE_POINT_D65;
        let adapted = f.rgb_d().mul_elem(rgb_w);
        assert_abs_diff_eq!(adapted.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(adapted.y, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(adapted.z, 100.0, epsilon = 1e-9);
    }
}
