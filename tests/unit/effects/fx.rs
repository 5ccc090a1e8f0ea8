use super::*;
use crate::raster::gradient::{Gradient, GradientDir, fill_gradient};

fn gradient_surface(w: u32, h: u32) -> Surface {
    let g = Gradient {
        from: Rgb8::new(40, 90, 160),
        to: Rgb8::new(210, 160, 70),
        dir: GradientDir::Diagonal,
    };
    fill_gradient(w, h, g).unwrap()
}

#[test]
fn vignette_strength_zero_is_identity() {
    let mut s = gradient_surface(31, 17);
    let before = s.clone();
    apply_effects(&mut s, &[Effect::vignette(0.0)], 1);
    assert_eq!(s, before);
}

#[test]
fn vignette_strength_one_drives_corners_toward_black() {
    let mut s = Surface::solid(100, 100, Rgb8::new(255, 255, 255)).unwrap();
    apply_effects(
        &mut s,
        &[Effect::Vignette {
            strength: 1.0,
            shape: VignetteShape::Frame,
            soften_px: 0,
        }],
        1,
    );
    let corner = s.get(0, 0).unwrap();
    assert!(corner.r <= 5, "corner {corner:?}");
    // Center stays bright.
    let center = s.get(50, 50).unwrap();
    assert!(center.r >= 250, "center {center:?}");
}

#[test]
fn radial_vignette_is_symmetric() {
    let mut s = Surface::solid(21, 13, Rgb8::new(200, 200, 200)).unwrap();
    apply_effects(
        &mut s,
        &[Effect::Vignette {
            strength: 0.8,
            shape: VignetteShape::Radial,
            soften_px: 0,
        }],
        1,
    );
    for y in 0..13 {
        for x in 0..21 {
            let c = s.get(x, y).unwrap();
            assert_eq!(c, s.get(20 - x, y).unwrap());
            assert_eq!(c, s.get(x, 12 - y).unwrap());
        }
    }
}

#[test]
fn softened_vignette_still_darkens_edges_most() {
    let mut s = Surface::solid(64, 64, Rgb8::new(220, 220, 220)).unwrap();
    apply_effects(
        &mut s,
        &[Effect::Vignette {
            strength: 0.9,
            shape: VignetteShape::Frame,
            soften_px: 16,
        }],
        1,
    );
    let corner = s.get(0, 0).unwrap();
    let center = s.get(32, 32).unwrap();
    assert!(corner.r < center.r);
}

#[test]
fn noise_never_leaves_channel_range_and_changes_pixels() {
    // Extremes would wrap if the clamp were missing.
    for base in [Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)] {
        let mut s = Surface::solid(50, 50, base).unwrap();
        apply_effects(&mut s, &[Effect::noise(1.0, 10)], 3);
        for px in s.data().chunks_exact(3) {
            for &ch in px {
                let delta = i16::from(ch) - i16::from(base.r);
                assert!(delta.abs() <= 10, "delta {delta} out of range");
            }
        }
    }

    let base = Rgb8::new(128, 128, 128);
    let mut s = Surface::solid(50, 50, base).unwrap();
    apply_effects(&mut s, &[Effect::noise(1.0, 10)], 3);
    assert!(s.data().iter().any(|&b| b != 128));
}

#[test]
fn noise_is_deterministic_per_seed() {
    let make = |seed| {
        let mut s = gradient_surface(40, 30);
        apply_effects(&mut s, &[Effect::noise(0.5, 10)], seed);
        s
    };
    assert_eq!(make(11), make(11));
    assert_ne!(make(11), make(12));
}

#[test]
fn zero_fraction_or_amplitude_is_identity() {
    let mut s = gradient_surface(16, 16);
    let before = s.clone();
    apply_effects(&mut s, &[Effect::noise(0.0, 10)], 9);
    apply_effects(
        &mut s,
        &[Effect::Noise {
            fraction: 1.0,
            amplitude: 0,
        }],
        9,
    );
    assert_eq!(s, before);
}

#[test]
fn constructor_clamps_strength() {
    match Effect::vignette(7.0) {
        Effect::Vignette { strength, .. } => assert_eq!(strength, 1.0),
        other => panic!("unexpected {other:?}"),
    }
    match Effect::noise(-1.0, 4) {
        Effect::Noise { fraction, .. } => assert_eq!(fraction, 0.0),
        other => panic!("unexpected {other:?}"),
    }
}
