//! Tonal ramps: 14 shades of one hue/chroma, light to dark.
//!
//! Shades sit on a fixed L* grid so that colors at the same index in
//! different ramps have the same lightness, and any two shades five steps
//! apart contrast by at least 4.5:1.
//!
//! ```text
//! index   0    1   2   3   4   5   6   7    8   9  10  11  12  13
//! L*     100  99  95  90  80  70  60  49.6  40  30  20  10   0   0
//! ```
//!
//! Index 0 is always pure white. The mid anchor is 49.6 rather than 50
//! because 49.6 is the lightest L* with 4.5:1 contrast against white.

use monet_cam::cam_to_argb;
use monet_core::Argb;
use std::ops::Index;
use tracing::debug;

/// Shades per ramp.
pub const SHADE_COUNT: usize = 14;

/// L* of the mid-ramp anchor.
pub const MIDDLE_LSTAR: f64 = 49.6;

/// Chroma cap applied once a shade at L* 90 or above is reached.
pub const MAX_LIGHT_CHROMA: f64 = 40.0;

/// Target L* of shades 1..=13. Shade 0 is white.
pub const SHADE_TONES: [f64; SHADE_COUNT - 1] =
    [99.0, 95.0, 90.0, 80.0, 70.0, 60.0, MIDDLE_LSTAR, 40.0, 30.0, 20.0, 10.0, 0.0, 0.0];

/// Target L* for a ramp index, or `None` past the end.
pub fn target_lstar(index: usize) -> Option<f64> {
    match index {
        0 => Some(100.0),
        i => SHADE_TONES.get(i - 1).copied(),
    }
}

/// A 14-shade ramp, ordered by descending lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TonalRamp([Argb; SHADE_COUNT]);

impl TonalRamp {
    /// Generates the ramp for a CAM16 hue and chroma.
    ///
    /// Chroma is capped at 40 from the first shade at L* 90 or above, and
    /// the cap carries over to every darker shade. The grid starts at L* 99,
    /// so the whole ramp uses `min(chroma, 40)`.
    pub fn of(hue: f64, chroma: f64) -> Self {
        let mut shades = [Argb::WHITE; SHADE_COUNT];
        let mut chroma = chroma;
        for (shade, &lstar) in shades[1..].iter_mut().zip(SHADE_TONES.iter()) {
            if lstar >= 90.0 {
                chroma = chroma.min(MAX_LIGHT_CHROMA);
            }
            *shade = cam_to_argb(hue, chroma, lstar);
        }
        debug!(hue, chroma, "Generated tonal ramp");
        Self(shades)
    }

    /// All shades.
    #[inline]
    pub fn shades(&self) -> &[Argb; SHADE_COUNT] {
        &self.0
    }

    /// Shade at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Argb> {
        self.0.get(index).copied()
    }

    /// Iterates shades from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = Argb> + '_ {
        self.0.iter().copied()
    }

    /// Shades as `#RRGGBB` strings.
    pub fn to_hex(&self) -> Vec<String> {
        self.iter().map(Argb::to_hex).collect()
    }
}

impl Index<usize> for TonalRamp {
    type Output = Argb;

    fn index(&self, index: usize) -> &Argb {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a TonalRamp {
    type Item = &'a Argb;
    type IntoIter = std::slice::Iter<'a, Argb>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
