//! Fast HCT to sRGB solver for the default viewing frame.
//!
//! Given hue, chroma and L*, finds the sRGB color with exactly that L* whose
//! CAM16 hue matches and whose chroma is as close to the request as the
//! gamut allows. Works in linear RGB scaled to `[0, 100]`.
//!
//! Two stages:
//!
//! 1. [`find_result_by_j`] runs Newton's method on CAM16 J so the inverse
//!    transform lands on the target Y. Succeeds when the requested chroma is
//!    inside the gamut.
//! 2. Otherwise [`bisect_to_limit`] walks the boundary of the RGB cube on the
//!    constant-Y plane: it picks the cube edge segment that brackets the hue,
//!    then bisects along each axis using the sRGB critical planes.

use crate::convert::{Y_FROM_LINRGB, argb_from_lstar, y_from_lstar};
use crate::frame::Frame;
use crate::transfer::{delinearized, true_delinearized};
use monet_core::Argb;
use monet_math::{Mat3, Vec3, sanitize_degrees, sanitize_radians, signum};

/// Scaled-and-discounted CAM16 RGB to linear RGB, for the default frame.
pub const LINRGB_FROM_SCALED_DISCOUNT: Mat3 = Mat3::from_rows([
    [1373.2198709594231, -1100.4251190754821, -7.278681089101213],
    [-271.815969077903, 559.6580465940733, -32.46047482791194],
    [1.9622899599665666, -57.173814538844006, 308.7233197812385],
]);

/// Linear RGB to scaled-and-discounted CAM16 RGB, for the default frame.
pub const SCALED_DISCOUNT_FROM_LINRGB: Mat3 = Mat3::from_rows([
    [0.001200833568784504, 0.002389694492170889, 0.0002795742885861124],
    [0.0005891086651375999, 0.0029785502573438758, 0.0003270666104008398],
    [0.00010146692491640572, 0.0005364214359186694, 0.0032979401770712076],
]);

/// Linear-RGB values (0..100) halfway between adjacent 8-bit sRGB codes.
///
/// Entry `i` is the linearized midpoint between codes `i` and `i + 1`.
pub const CRITICAL_PLANES: [f64; 255] = [
    0.015176349177441876, 0.045529047532325624, 0.07588174588720938, 0.10623444424209313,
    0.13658714259697685, 0.16693984095186062, 0.19729253930674434, 0.2276452376616281,
    0.2579979360165119, 0.28835063437139563, 0.3188300904430532, 0.350925934958123,
    0.3848314933096426, 0.42057480301049466, 0.458183274052838, 0.4976837250274023,
    0.5391024159806381, 0.5824650784040898, 0.6277969426914107, 0.6751227633498623,
    0.7244668422128921, 0.775853049866786, 0.829304845476233, 0.8848452951698498,
    0.942497089126609, 1.0022825574869039, 1.0642236851973577, 1.1283421258858297,
    1.1946592148522128, 1.2631959812511864, 1.3339731595349034, 1.407011200216447,
    1.4823302800086415, 1.5599503113873272, 1.6398909516233677, 1.7221716113234105,
    1.8068114625156377, 1.8938294463134073, 1.9832442801866852, 2.075074464868551,
    2.1693382909216234, 2.2660538449872063, 2.36523901573795, 2.4669114995532007,
    2.5710888059345764, 2.6777882626779785, 2.7870270208169257, 2.898822059350997,
    3.0131901897720907, 3.1301480604002863, 3.2497121605402226, 3.3718988244681087,
    3.4967242352587946, 3.624204428461639, 3.754355295633311, 3.887192587735158,
    4.022731918402185, 4.160988767090289, 4.301978482107941, 4.445716283538092,
    4.592217266055746, 4.741496401646282, 4.893568542229298, 5.048448422192488,
    5.20615066083972, 5.3666897647573375, 5.5300801301023865, 5.696336044816294,
    5.865471690767354, 6.037501145825082, 6.212438385869475, 6.390297286737924,
    6.571091626112461, 6.7548350853498045, 6.941541251256611, 7.131223617812143,
    7.323895587840543, 7.5195704746346665, 7.7182615035334345, 7.919981813454504,
    8.124744458384042, 8.332562408825165, 8.543448553206703, 8.757415699253682,
    8.974476575321063, 9.194643831691977, 9.417930041841839, 9.644347703669503,
    9.873909240696694, 10.106627003236781, 10.342513269534024, 10.58158024687427,
    10.8238400726681, 11.069304815507364, 11.317986476196008, 11.569896988756009,
    11.825048221409341, 12.083451977536606, 12.345119996613247, 12.610063955123938,
    12.878295467455942, 13.149826086772048, 13.42466730586372, 13.702830557985108,
    13.984327217668513, 14.269168601521828, 14.55736596900856, 14.848930523210871,
    15.143873411576273, 15.44220572664832, 15.743938506781891, 16.04908273684337,
    16.35764934889634, 16.66964922287304, 16.985093187232053, 17.30399201960269,
    17.62635644741625, 17.95219714852476, 18.281524751807332, 18.614349837764564,
    18.95068293910138, 19.290534541298456, 19.633915083172692, 19.98083495742689,
    20.331304511189067, 20.685334046541502, 21.042933821039977, 21.404114048223256,
    21.76888489811322, 22.137256497705877, 22.50923893145328, 22.884842241736916,
    23.264076429332462, 23.6469514538663, 24.033477234264016, 24.42366364919083,
    24.817520537484558, 25.21505769858089, 25.61628489293138, 26.021211842414342,
    26.429848230738664, 26.842203703840827, 27.258287870275353, 27.678110301598522,
    28.10168053274597, 28.529008062403893, 28.96010235337422, 29.39497283293396,
    29.83362889318845, 30.276079891419332, 30.722335150426627, 31.172403958865512,
    31.62629557157785, 32.08401920991837, 32.54558406207592, 33.010999283389665,
    33.4802739966603, 33.953417292456834, 34.430438229418264, 34.911345834551085,
    35.39614910352207, 35.88485700094671, 36.37747846067349, 36.87402238606382,
    37.37449765026789, 37.87891309649659, 38.38727753828926, 38.89959975977785,
    39.41588851594697, 39.93615253289054, 40.460400508064545, 40.98864111053629,
    41.520882981230194, 42.05713473317016, 42.597404951718396, 43.141702194811224,
    43.6900349931913, 44.24241185063697, 44.798841244188324, 45.35933162437017,
    45.92389141541209, 46.49252901546552, 47.065252796817916, 47.64207110610409,
    48.22299226451468, 48.808024568002054, 49.3971762874833, 49.9904556690408,
    50.587870934119984, 51.189430279724725, 51.79514187861014, 52.40501387947288,
    53.0190544071392, 53.637271562750364, 54.259673423945976, 54.88626804504493,
    55.517063457223934, 56.15206766869424, 56.79128866487574, 57.43473440856916,
    58.08241284012621, 58.734331877617365, 59.39049941699807, 60.05092333227251,
    60.715611475655585, 61.38457167773311, 62.057811747619894, 62.7353394731159,
    63.417162620860914, 64.10328893648692, 64.79372614476921, 65.48848194977529,
    66.18756403501224, 66.89098006357258, 67.59873767827808, 68.31084450182222,
    69.02730813691093, 69.74813616640164, 70.47333615344107, 71.20291564160104,
    71.93688215501312, 72.67524319850172, 73.41800625771542, 74.16517879925733,
    74.9167682708136, 75.67278210128072, 76.43322770089146, 77.1981124613393,
    77.96744375590167, 78.74122893956174, 79.51947534912904, 80.30219030335869,
    81.08938110306934, 81.88105503125999, 82.67721935322541, 83.4778813166706,
    84.28304815182372, 85.09272707154808, 85.90692527145302, 86.72564993000343,
    87.54890820862819, 88.3767072518277, 89.2090541872801, 90.04595612594655,
    90.88742016217518, 91.73345337380438, 92.58406282226491, 93.43925555268066,
    94.29903859396902, 95.16341895893969, 96.03240364439274, 96.9059996312159,
    97.78421388448044, 98.6670533535366, 99.55452497210776,
];

const NEWTON_ITERATIONS: usize = 5;
const NEWTON_TOLERANCE: f64 = 0.002;
const BISECTION_ROUNDS: usize = 8;

/// Solves (hue, chroma, L*) to an sRGB color in the default frame.
///
/// Near-zero chroma, or L* at either end of the range, yields the gray with
/// that L*.
pub fn solve_to_argb(hue_degrees: f64, chroma: f64, lstar: f64) -> Argb {
    if chroma < 0.0001 || lstar < 0.0001 || lstar > 99.9999 {
        return argb_from_lstar(lstar);
    }
    let hue_radians = sanitize_degrees(hue_degrees).to_radians();
    let y = y_from_lstar(lstar);
    find_result_by_j(hue_radians, chroma, y).unwrap_or_else(|| bisect_to_limit(y, hue_radians))
}

/// Newton iteration on J toward the target Y.
///
/// Returns `None` when an iterate leaves the RGB cube (a channel below 0 or
/// above 100.01), meaning the requested chroma is out of gamut.
pub fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<Argb> {
    let frame = Frame::srgb();

    // Initial estimate of J
    let mut j = y.sqrt() * 11.0;

    let t_inner_coeff = 1.0 / (1.64 - 0.29_f64.powf(frame.n())).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * frame.nc() * frame.ncb();
    let (h_sin, h_cos) = hue_radians.sin_cos();

    for iteration in 0..NEWTON_ITERATIONS {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = frame.aw() * j_normalized.powf(1.0 / frame.c() / frame.z());
        let p2 = ac / frame.nbb();
        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let rgb_a = Vec3::new(
            (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0,
            (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0,
            (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0,
        );
        let linrgb = LINRGB_FROM_SCALED_DISCOUNT * rgb_a.map(inverse_chromatic_adaptation);

        if linrgb.min_element() < 0.0 {
            return None;
        }
        let fnj = Y_FROM_LINRGB.dot(linrgb);
        if fnj <= 0.0 {
            return None;
        }
        if iteration == NEWTON_ITERATIONS - 1 || (fnj - y).abs() < NEWTON_TOLERANCE {
            if linrgb.max_element() > 100.01 {
                return None;
            }
            return Some(argb_from_scaled(linrgb));
        }
        // f(J) grows roughly like J², so f'(J) is about 2 f(J) / J.
        j -= (fnj - y) * j / (2.0 * fnj);
    }
    None
}

/// Finds the color on the gamut boundary with luminance `y` and hue `target_hue`.
pub fn bisect_to_limit(y: f64, target_hue: f64) -> Argb {
    let (mut left, mut right) = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(left);

    for axis in 0..3 {
        if left[axis] == right[axis] {
            continue;
        }
        let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
            (critical_plane_below(true_delinearized(left[axis])), critical_plane_above(true_delinearized(right[axis])))
        } else {
            (critical_plane_above(true_delinearized(left[axis])), critical_plane_below(true_delinearized(right[axis])))
        };

        for _ in 0..BISECTION_ROUNDS {
            if (r_plane - l_plane).abs() <= 1 {
                break;
            }
            let m_plane = (l_plane + r_plane).div_euclid(2);
            let mid_plane_coordinate = usize::try_from(m_plane)
                .ok()
                .and_then(|i| CRITICAL_PLANES.get(i).copied())
                .unwrap_or(0.0);
            let mid = set_coordinate(left, mid_plane_coordinate, right, axis);
            let mid_hue = hue_of(mid);
            if in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                r_plane = m_plane;
            } else {
                left = mid;
                left_hue = mid_hue;
                l_plane = m_plane;
            }
        }
    }

    argb_from_scaled(left.lerp(right, 0.5))
}

/// Finds the two cube-boundary points on the plane of luminance `y` whose
/// hues bracket `target_hue`.
pub fn bisect_to_segment(y: f64, target_hue: f64) -> (Vec3, Vec3) {
    let mut bracket: Option<(Vec3, f64, Vec3, f64)> = None;
    let mut uncut = true;

    for n in 0..12 {
        let Some(mid) = nth_vertex(y, n) else {
            continue;
        };
        let mid_hue = hue_of(mid);
        let Some((left, left_hue, right, right_hue)) = bracket.as_mut() else {
            bracket = Some((mid, mid_hue, mid, mid_hue));
            continue;
        };
        if uncut || in_cyclic_order(*left_hue, mid_hue, *right_hue) {
            uncut = false;
            if in_cyclic_order(*left_hue, target_hue, mid_hue) {
                *right = mid;
                *right_hue = mid_hue;
            } else {
                *left = mid;
                *left_hue = mid_hue;
            }
        }
    }

    // Every luminance in [0, 100] crosses at least one cube edge.
    match bracket {
        Some((left, _, right, _)) => (left, right),
        None => (Vec3::splat(y), Vec3::splat(y)),
    }
}

/// The `n`th of the 12 points where the plane of luminance `y` meets an edge
/// of the RGB cube, or `None` when that edge is not crossed.
///
/// Edges 0-3 vary red, 4-7 green, 8-11 blue. Within each group the two fixed
/// channels take the four combinations of 0 and 100.
pub fn nth_vertex(y: f64, n: usize) -> Option<Vec3> {
    let [kr, kg, kb] = Y_FROM_LINRGB.to_array();
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };
    let in_range = |v: f64| (0.0..=100.0).contains(&v);

    if n < 4 {
        let (g, b) = (coord_a, coord_b);
        let r = (y - g * kg - b * kb) / kr;
        in_range(r).then(|| Vec3::new(r, g, b))
    } else if n < 8 {
        let (b, r) = (coord_a, coord_b);
        let g = (y - r * kr - b * kb) / kg;
        in_range(g).then(|| Vec3::new(r, g, b))
    } else if n < 12 {
        let (r, g) = (coord_a, coord_b);
        let b = (y - r * kr - g * kg) / kb;
        in_range(b).then(|| Vec3::new(r, g, b))
    } else {
        None
    }
}

/// CAM16 hue angle in radians of a linear RGB color.
pub fn hue_of(linrgb: Vec3) -> f64 {
    let scaled_discount = SCALED_DISCOUNT_FROM_LINRGB * linrgb;
    let adapted = scaled_discount.map(chromatic_adaptation);
    let a = (11.0 * adapted.x + -12.0 * adapted.y + adapted.z) / 11.0;
    let b = (adapted.x + adapted.y - 2.0 * adapted.z) / 9.0;
    b.atan2(a)
}

/// CAM16 post-adaptation nonlinear response.
pub fn chromatic_adaptation(component: f64) -> f64 {
    let af = component.abs().powf(0.42);
    signum(component) * 400.0 * af / (af + 27.13)
}

/// Inverse of [`chromatic_adaptation`].
pub fn inverse_chromatic_adaptation(adapted: f64) -> f64 {
    let adapted_abs = adapted.abs();
    let base = (27.13 * adapted_abs / (400.0 - adapted_abs)).max(0.0);
    signum(adapted) * base.powf(1.0 / 0.42)
}

/// True when, walking counter-clockwise from `a`, `b` is reached before `c`.
pub fn in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    let delta_a_b = sanitize_radians(b - a);
    let delta_a_c = sanitize_radians(c - a);
    delta_a_b < delta_a_c
}

/// Index of the critical plane just below a delinearized coordinate.
pub fn critical_plane_below(x: f64) -> i64 {
    (x - 0.5).floor() as i64
}

/// Index of the critical plane just above a delinearized coordinate.
pub fn critical_plane_above(x: f64) -> i64 {
    (x - 0.5).ceil() as i64
}

/// Position of `mid` between `source` and `target` as a fraction.
///
/// Degenerates to `target` when the endpoints coincide.
pub fn intercept(source: f64, mid: f64, target: f64) -> f64 {
    if target == source {
        return target;
    }
    (mid - source) / (target - source)
}

/// The point on the segment `source..target` whose `axis` coordinate is `coordinate`.
fn set_coordinate(source: Vec3, coordinate: f64, target: Vec3, axis: usize) -> Vec3 {
    let t = intercept(source[axis], coordinate, target[axis]);
    source.lerp(target, t)
}

/// Packs a linear RGB color on the 0..100 scale.
fn argb_from_scaled(linrgb: Vec3) -> Argb {
    Argb::from_rgb(delinearized(linrgb.x), delinearized(linrgb.y), delinearized(linrgb.z))
}
