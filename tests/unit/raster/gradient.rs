use super::*;

fn px(s: &Surface, x: u32, y: u32) -> Rgb8 {
    s.get(i64::from(x), i64::from(y)).unwrap()
}

#[test]
fn vertical_row_zero_is_from_color() {
    let from = Rgb8::new(0, 0, 0);
    let to = Rgb8::new(0x1a, 0x1a, 0x1a);
    let s = fill_gradient(640, 480, Gradient::vertical(from, to)).unwrap();

    for x in [0, 1, 320, 639] {
        assert_eq!(px(&s, x, 0), from);
    }
    // Last row ratio is 479/480, truncated: 26 * 479 / 480 = 25.
    for x in [0, 320, 639] {
        assert_eq!(px(&s, x, 479), Rgb8::new(25, 25, 25));
    }
}

#[test]
fn vertical_color_depends_only_on_y() {
    let g = Gradient::vertical(Rgb8::new(10, 200, 30), Rgb8::new(200, 10, 130));
    let s = fill_gradient(33, 21, g).unwrap();
    for y in 0..21 {
        let first = px(&s, 0, y);
        for x in 1..33 {
            assert_eq!(px(&s, x, y), first, "row {y} not constant at x={x}");
        }
    }
}

#[test]
fn horizontal_color_depends_only_on_x() {
    let g = Gradient {
        from: Rgb8::BLACK,
        to: Rgb8::WHITE,
        dir: GradientDir::Horizontal,
    };
    let s = fill_gradient(17, 9, g).unwrap();
    for x in 0..17 {
        let first = px(&s, x, 0);
        for y in 1..9 {
            assert_eq!(px(&s, x, y), first);
        }
    }
    assert_eq!(px(&s, 0, 0), Rgb8::BLACK);
}

#[test]
fn diagonal_starts_at_from_and_approaches_to() {
    let from = Rgb8::new(0, 0, 0);
    let to = Rgb8::new(240, 240, 240);
    let g = Gradient::diagonal(from, to);
    let s = fill_gradient(100, 100, g).unwrap();

    assert_eq!(px(&s, 0, 0), from);
    let far = px(&s, 99, 99);
    // Ratio at the far corner is 198/200.
    assert!(to.r - far.r <= 3, "far corner {far:?} not near {to:?}");
}

#[test]
fn radial_is_symmetric_about_center() {
    let g = Gradient {
        from: Rgb8::new(250, 128, 16),
        to: Rgb8::new(5, 60, 220),
        dir: GradientDir::Radial,
    };
    for (w, h) in [(16u32, 12u32), (15u32, 11u32)] {
        let s = fill_gradient(w, h, g).unwrap();
        for y in 0..h {
            for x in 0..w {
                let c = px(&s, x, y);
                assert_eq!(c, px(&s, w - 1 - x, y));
                assert_eq!(c, px(&s, x, h - 1 - y));
                assert_eq!(c, px(&s, w - 1 - x, h - 1 - y));
            }
        }
    }
}

#[test]
fn radial_center_is_near_from_color() {
    let from = Rgb8::new(200, 200, 200);
    let to = Rgb8::BLACK;
    let g = Gradient {
        from,
        to,
        dir: GradientDir::Radial,
    };
    let s = fill_gradient(101, 101, g).unwrap();
    let center = px(&s, 50, 50);
    assert!(from.r - center.r <= 2, "center {center:?}");
}
