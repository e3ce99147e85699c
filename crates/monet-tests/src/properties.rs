//! Properties every palette and solver result must satisfy.

use crate::SEEDS;
use approx::assert_abs_diff_eq;
use monet::{Argb, MaterialYouPalette, Role, SHADE_COUNT, Style, StyleRecipe, generate, generate_from_argb};
use monet_cam::convert::{WHITE_POINT_D65, argb_from_lstar, lstar_from_argb};
use monet_cam::{Cam, Frame, cam_to_argb, solve_in_frame};

fn decoded(palette: &MaterialYouPalette, role: Role) -> Vec<Argb> {
    palette.decode(role).unwrap()
}

#[test]
fn test_ramp_shape() {
    for seed in SEEDS {
        for style in Style::ALL {
            let palette = generate(seed, style);
            palette.validate().unwrap();
            for (role, ramp) in palette.roles() {
                assert_eq!(ramp.len(), SHADE_COUNT, "{seed} {style} {role}");
                assert_eq!(ramp[0], "#FFFFFF", "{seed} {style} {role}");
            }
        }
    }
}

#[test]
fn test_lightness_non_increasing() {
    for seed in SEEDS {
        for style in Style::ALL {
            let palette = generate(seed, style);
            for role in Role::ALL {
                let lstars: Vec<f64> = decoded(&palette, role).into_iter().map(lstar_from_argb).collect();
                assert!(
                    lstars.windows(2).all(|w| w[0] >= w[1]),
                    "{seed} {style} {role}: {lstars:?}"
                );
            }
        }
    }
}

#[test]
fn test_hue_wraparound() {
    for style in Style::ALL {
        let wrapped = MaterialYouPalette::from_recipe(&StyleRecipe::new(style, 370.0, 50.0));
        let plain = MaterialYouPalette::from_recipe(&StyleRecipe::new(style, 10.0, 50.0));
        assert_eq!(wrapped, plain, "{style}");
    }
}

#[test]
fn test_gray_boundary() {
    for hue in (0..360).step_by(30) {
        for tenth in 0..=1000 {
            let lstar = f64::from(tenth) / 10.0;
            assert_eq!(
                cam_to_argb(f64::from(hue), 0.0, lstar),
                argb_from_lstar(lstar),
                "hue {hue} L* {lstar}"
            );
        }
    }
}

#[test]
fn test_grays_are_neutral() {
    for tenth in 0..=1000 {
        assert!(argb_from_lstar(f64::from(tenth) / 10.0).is_gray());
    }
}

#[test]
fn test_boundary_lightness() {
    for hue in (0..360).step_by(45) {
        for chroma in [0.0, 16.0, 48.0, 130.0] {
            let hue = f64::from(hue);
            assert_eq!(cam_to_argb(hue, chroma, 0.0), Argb::BLACK);
            assert_eq!(cam_to_argb(hue, chroma, 100.0), Argb::WHITE);
            assert_eq!(cam_to_argb(hue, chroma, 0.0).to_hex(), "#000000");
        }
    }
}

#[test]
fn test_google_blue_tone_95() {
    let palette = generate("#1B6EF3", Style::TonalSpot);
    let seed = Cam::from_argb(monet::GOOGLE_BLUE);
    let accent1 = decoded(&palette, Role::Accent1);
    let accent2 = decoded(&palette, Role::Accent2);

    // Tone 95: light, desaturated blue.
    let tone_95 = accent1[2];
    assert_abs_diff_eq!(lstar_from_argb(tone_95), 95.0, epsilon = 1.0);
    assert!(tone_95.blue() > tone_95.red() && tone_95.blue() > tone_95.green());
    let cam = Cam::from_argb(tone_95);
    assert!(cam.chroma() < 36.0);
    assert_abs_diff_eq!(cam.hue(), seed.hue(), epsilon = 5.0);

    // Near white both ramps hit the gamut edge at this hue; they separate
    // once the requested chroma fits.
    assert_ne!(accent1[3], accent2[3]);
    for index in 3..12 {
        assert!(
            Cam::from_argb(accent1[index]).chroma() > Cam::from_argb(accent2[index]).chroma(),
            "index {index}"
        );
    }
}

#[test]
fn test_monochromatic_is_grayscale() {
    for seed in SEEDS {
        let palette = generate(seed, Style::Monochromatic);
        for role in Role::ALL {
            for shade in decoded(&palette, role) {
                assert_eq!(shade.red(), shade.green(), "{seed} {role} {shade}");
                assert_eq!(shade.green(), shade.blue(), "{seed} {role} {shade}");
            }
        }
    }
}

#[test]
fn test_monochromatic_ignores_seed() {
    let reference = generate("#1B6EF3", Style::Monochromatic);
    for seed in SEEDS {
        assert_eq!(generate(seed, Style::Monochromatic), reference);
    }
}

#[test]
fn test_rainbow_neutrals_are_grayscale() {
    let palette = generate("#B3261E", Style::Rainbow);
    for role in [Role::Neutral1, Role::Neutral2] {
        assert!(decoded(&palette, role).iter().all(|shade| shade.is_gray()));
    }
    assert!(!decoded(&palette, Role::Accent1).iter().all(|shade| shade.is_gray()));
}

#[test]
fn test_matched_indices_share_lightness() {
    let palette = generate("#6750A4", Style::Expressive);
    for index in 1..SHADE_COUNT {
        let lstars: Vec<f64> = Role::ALL
            .into_iter()
            .map(|role| lstar_from_argb(decoded(&palette, role)[index]))
            .collect();
        let spread = lstars.iter().copied().fold(f64::MIN, f64::max) - lstars.iter().copied().fold(f64::MAX, f64::min);
        assert!(spread < 1.5, "index {index}: {lstars:?}");
    }
}

#[test]
fn test_argb_and_hex_entry_points_agree() {
    for seed in SEEDS {
        let argb: Argb = seed.parse().unwrap();
        assert_eq!(generate_from_argb(argb, Style::Vibrant), generate(seed, Style::Vibrant));
    }
}

#[test]
fn test_solver_roundtrips_in_gamut_colors() {
    for argb in [0xFF1B_6EF3u32, 0xFFB3_261E, 0xFF67_50A4, 0xFF3A_7D44, 0xFFFF_FF00] {
        let color = Argb(argb);
        let cam = Cam::from_argb(color);
        let solved = cam_to_argb(cam.hue(), cam.chroma(), lstar_from_argb(color));
        assert_eq!(solved, color, "{color}");
    }
}

#[test]
fn test_custom_frame_search_keeps_lstar() {
    let frame = Frame::make(WHITE_POINT_D65, 11.72, 30.0, 1.0, false);
    for hue in (0..360).step_by(40) {
        for lstar in [20.0, 50.0, 80.0] {
            let color = solve_in_frame(f64::from(hue), 30.0, lstar, &frame);
            assert_abs_diff_eq!(lstar_from_argb(color), lstar, epsilon = 1.0);
        }
    }
}
