//! CAM16 color appearance model.
//!
//! [`Cam`] describes how a color looks: hue, chroma, lightness J, brightness
//! Q, colorfulness M, saturation S, plus CAM16-UCS coordinates (J*, a*, b*)
//! for measuring perceptual distance.
//!
//! # Transforms
//!
//! ```text
//! forward:  ARGB -> linear RGB -> XYZ -> cone RGB -> adapted RGB -> Cam
//! inverse:  Cam (h, C, J) -> adapted RGB -> cone RGB -> XYZ -> ARGB (clipped)
//! ```
//!
//! The inverse clips to the sRGB cube, so a requested appearance that lies
//! outside the gamut comes back distorted. [`solve_in_frame`] handles that by
//! searching for the closest representable color with the requested L*.
//!
//! # Example
//!
//! ```rust
//! use monet_cam::Cam;
//! use monet_core::Argb;
//!
//! let blue = Cam::from_argb(Argb::from_rgb(0x1B, 0x6E, 0xF3));
//! assert!((blue.hue() - 269.0).abs() < 1.0);
//! assert!(blue.chroma() > 60.0);
//! ```

use crate::convert::{CAM16RGB_TO_XYZ, XYZ_TO_CAM16RGB, argb_from_lstar, argb_from_viewed_xyz, lstar_from_argb, xyz_from_argb};
use crate::frame::Frame;
use crate::hct;
use monet_core::Argb;
use monet_math::{Vec3, sanitize_degrees, signum};

/// Width of the chroma interval at which the outer search stops.
pub const CHROMA_SEARCH_ENDPOINT: f64 = 0.4;

/// Width of the J interval at which the inner search stops.
pub const LIGHTNESS_SEARCH_ENDPOINT: f64 = 0.01;

/// Largest accepted difference between requested and returned L*.
pub const DL_MAX: f64 = 0.2;

/// Largest accepted CAM16-UCS distance between requested and returned color.
pub const DE_MAX: f64 = 1.0;

/// A color in CAM16 appearance coordinates.
///
/// Immutable once built; construct with [`Cam::from_argb`], [`Cam::from_xyz_in_frame`]
/// or [`Cam::from_jch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam {
    hue: f64,
    chroma: f64,
    j: f64,
    q: f64,
    m: f64,
    s: f64,
    jstar: f64,
    astar: f64,
    bstar: f64,
}

impl Cam {
    /// Appearance of a packed color in the sRGB frame.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in_frame(argb, Frame::srgb())
    }

    /// Appearance of a packed color in `frame`.
    pub fn from_argb_in_frame(argb: Argb, frame: &Frame) -> Self {
        Self::from_xyz_in_frame(xyz_from_argb(argb), frame)
    }

    /// Appearance of an XYZ color in `frame`.
    pub fn from_xyz_in_frame(xyz: Vec3, frame: &Frame) -> Self {
        // Cone responses, discounted for the illuminant
        let rgb_d = (XYZ_TO_CAM16RGB * xyz).mul_elem(frame.rgb_d());

        // Chromatic adaptation
        let rgb_a = rgb_d.map(|d| {
            let af = (frame.fl() * d.abs() / 100.0).powf(0.42);
            signum(d) * 400.0 * af / (af + 27.13)
        });
        let (ra, ga, ba) = (rgb_a.x, rgb_a.y, rgb_a.z);

        // Redness-greenness and yellowness-blueness
        let a = (11.0 * ra + -12.0 * ga + ba) / 11.0;
        let b = (ra + ga - 2.0 * ba) / 9.0;

        let u = (20.0 * ra + 20.0 * ga + 21.0 * ba) / 20.0;
        let p2 = (40.0 * ra + 20.0 * ga + ba) / 20.0;

        let atan_degrees = b.atan2(a).to_degrees();
        let hue = if atan_degrees < 0.0 {
            atan_degrees + 360.0
        } else if atan_degrees >= 360.0 {
            atan_degrees - 360.0
        } else {
            atan_degrees
        };

        let ac = p2 * frame.nbb();
        let j = 100.0 * (ac / frame.aw()).powf(frame.c() * frame.z());

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * frame.nc() * frame.ncb();
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = t.powf(0.9) * (1.64 - 0.29_f64.powf(frame.n())).powf(0.73);

        let chroma = alpha * (j / 100.0).sqrt();
        Self::assemble(hue, chroma, j, alpha, frame)
    }

    /// Builds a color from lightness J, chroma and hue, seen in the sRGB frame.
    pub fn from_jch(j: f64, chroma: f64, hue: f64) -> Self {
        Self::from_jch_in_frame(j, chroma, hue, Frame::srgb())
    }

    /// Builds a color from lightness J, chroma and hue, seen in `frame`.
    pub fn from_jch_in_frame(j: f64, chroma: f64, hue: f64, frame: &Frame) -> Self {
        let alpha = chroma / (j / 100.0).sqrt();
        Self::assemble(hue, chroma, j, alpha, frame)
    }

    /// Derives Q, M, S and the UCS coordinates shared by both constructors.
    fn assemble(hue: f64, chroma: f64, j: f64, alpha: f64, frame: &Frame) -> Self {
        let q = 4.0 / frame.c() * (j / 100.0).sqrt() * (frame.aw() + 4.0) * frame.fl_root();
        let m = chroma * frame.fl_root();
        let s = 50.0 * (alpha * frame.c() / (frame.aw() + 4.0)).sqrt();

        let hue_radians = hue.to_radians();
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Hue in degrees, `[0, 360)`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Chroma.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Lightness J, `[0, 100]`.
    #[inline]
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Brightness Q.
    #[inline]
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Colorfulness M.
    #[inline]
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Saturation S.
    #[inline]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Lightness J* in CAM16-UCS.
    #[inline]
    pub fn jstar(&self) -> f64 {
        self.jstar
    }

    /// a* in CAM16-UCS.
    #[inline]
    pub fn astar(&self) -> f64 {
        self.astar
    }

    /// b* in CAM16-UCS.
    #[inline]
    pub fn bstar(&self) -> f64 {
        self.bstar
    }

    /// Perceptual distance in CAM16-UCS.
    ///
    /// ```text
    /// ΔE = 1.41 · (ΔJ*² + Δa*² + Δb*²)^(0.63 / 2)
    /// ```
    pub fn distance(&self, other: &Cam) -> f64 {
        let dj = self.jstar - other.jstar;
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        let de_prime = (dj * dj + da * da + db * db).sqrt();
        1.41 * de_prime.powf(0.63)
    }

    /// XYZ of this appearance in `frame`, before any gamut clipping.
    pub fn xyz_in_frame(&self, frame: &Frame) -> Vec3 {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29_f64.powf(frame.n())).powf(0.73)).powf(1.0 / 0.9);
        let h_rad = self.hue.to_radians();

        let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
        let ac = frame.aw() * (self.j / 100.0).powf(1.0 / frame.c() / frame.z());
        let p1 = e_hue * (50000.0 / 13.0) * frame.nc() * frame.ncb();
        let p2 = ac / frame.nbb();

        let (h_sin, h_cos) = h_rad.sin_cos();

        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let rgb_a = Vec3::new(
            (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0,
            (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0,
            (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0,
        );

        let rgb_c = rgb_a.map(|adapted| {
            let base = (27.13 * adapted.abs() / (400.0 - adapted.abs())).max(0.0);
            signum(adapted) * (100.0 / frame.fl()) * base.powf(1.0 / 0.42)
        });

        CAM16RGB_TO_XYZ * rgb_c.div_elem(frame.rgb_d())
    }

    /// The packed color of this appearance in `frame`, clipped to sRGB.
    ///
    /// XYZ is clamped to the D65 white reference before packing; see
    /// [`argb_from_viewed_xyz`].
    pub fn viewed(&self, frame: &Frame) -> Argb {
        argb_from_viewed_xyz(self.xyz_in_frame(frame))
    }

    /// The packed color of this appearance in the sRGB frame, clipped to sRGB.
    pub fn viewed_in_srgb(&self) -> Argb {
        self.viewed(Frame::srgb())
    }
}

/// Finds the CAM16 lightness J whose clipped color has L* = `lstar`.
///
/// Bisects J over `[0, 100]` until the interval is narrower than
/// [`LIGHTNESS_SEARCH_ENDPOINT`]. A candidate is accepted when its L* is
/// within [`DL_MAX`] of the target and its hue has not slipped by more than
/// [`DE_MAX`] in UCS distance. Returns `None` when no J qualifies.
pub fn find_cam_by_j(hue: f64, chroma: f64, lstar: f64, frame: &Frame) -> Option<Cam> {
    let mut low = 0.0_f64;
    let mut high = 100.0_f64;
    let mut best_dl = 1000.0;
    let mut best_de = 1000.0;
    let mut best: Option<Cam> = None;

    while (low - high).abs() > LIGHTNESS_SEARCH_ENDPOINT {
        let mid = low + (high - low) / 2.0;

        let clipped = Cam::from_jch_in_frame(mid, chroma, hue, frame).viewed(frame);
        let clipped_lstar = lstar_from_argb(clipped);
        let dl = (lstar - clipped_lstar).abs();

        if dl < DL_MAX {
            // Chroma is allowed to drift; only hue drift disqualifies.
            let cam_clipped = Cam::from_argb_in_frame(clipped, frame);
            let intended = Cam::from_jch_in_frame(cam_clipped.j(), cam_clipped.chroma(), hue, frame);
            let de = cam_clipped.distance(&intended);
            if de <= DE_MAX {
                best_dl = dl;
                best_de = de;
                best = Some(cam_clipped);
            }
        }

        if best_dl == 0.0 && best_de == 0.0 {
            break;
        }

        if clipped_lstar < lstar {
            low = mid;
        } else {
            high = mid;
        }
    }

    best
}

/// Resolves (hue, chroma, L*) to a packed color seen in `frame`.
///
/// The returned L* matches the request; chroma may be lower when the request
/// is outside the sRGB gamut. The sRGB frame goes through the fast
/// [`hct::solve_to_argb`] path. Any other frame runs a two-level search:
/// the requested chroma is tried first, then bisected toward zero, and for each
/// chroma [`find_cam_by_j`] looks for a matching J. When nothing fits, the gray
/// with the requested L* is returned.
pub fn solve_in_frame(hue: f64, chroma: f64, lstar: f64, frame: &Frame) -> Argb {
    if frame.is_srgb() {
        return hct::solve_to_argb(hue, chroma, lstar);
    }

    if chroma < 1.0 || lstar.round() <= 0.0 || lstar.round() >= 100.0 {
        return gray_in_frame(lstar);
    }

    let hue = sanitize_degrees(hue);

    let mut high = chroma;
    let mut mid = chroma;
    let mut low = 0.0;
    let mut is_first_loop = true;
    let mut answer: Option<Cam> = None;

    while (low - high).abs() >= CHROMA_SEARCH_ENDPOINT {
        let possible = find_cam_by_j(hue, mid, lstar, frame);

        if is_first_loop {
            if let Some(cam) = possible {
                return cam.viewed(frame);
            }
            // Requested chroma unreachable: fall back to classic bisection.
            is_first_loop = false;
            mid = low + (high - low) / 2.0;
            continue;
        }

        match possible {
            Some(cam) => {
                answer = Some(cam);
                low = mid;
            }
            None => high = mid,
        }

        mid = low + (high - low) / 2.0;
    }

    match answer {
        Some(cam) => cam.viewed(frame),
        None => gray_in_frame(lstar),
    }
}

/// Gray answer of the custom-frame search: pure black below L* 1, pure white
/// above L* 99.
fn gray_in_frame(lstar: f64) -> Argb {
    if lstar < 1.0 {
        Argb::BLACK
    } else if lstar > 99.0 {
        Argb::WHITE
    } else {
        argb_from_lstar(lstar)
    }
}
