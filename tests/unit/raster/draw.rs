use super::*;

fn blank(w: u32, h: u32) -> Surface {
    Surface::solid(w, h, Rgb8::BLACK).unwrap()
}

fn lit(s: &Surface) -> Vec<(i64, i64)> {
    let mut out = Vec::new();
    for y in 0..s.height() as i64 {
        for x in 0..s.width() as i64 {
            if s.get(x, y) != Some(Rgb8::BLACK) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn horizontal_line_covers_its_row_band() {
    let mut s = blank(20, 10);
    let c = Rgb8::WHITE;
    draw_line(&mut s, Point::new(2.0, 5.0), Point::new(18.0, 5.0), c, 2.0);

    // Band rows around y = 5 are painted along the segment.
    assert_eq!(s.get(10, 4), Some(c));
    assert_eq!(s.get(10, 5), Some(c));
    // Far rows untouched.
    assert_eq!(s.get(10, 0), Some(Rgb8::BLACK));
    assert_eq!(s.get(10, 9), Some(Rgb8::BLACK));
    // Nothing before the start cap.
    assert_eq!(s.get(0, 5), Some(Rgb8::BLACK));
}

#[test]
fn thin_diagonal_line_is_continuous() {
    let mut s = blank(16, 16);
    draw_line(
        &mut s,
        Point::new(0.0, 0.0),
        Point::new(15.0, 15.0),
        Rgb8::WHITE,
        1.0,
    );
    // Every row the segment crosses has at least one lit pixel.
    for y in 1..15 {
        let any = (0..16).any(|x| s.get(x, y) == Some(Rgb8::WHITE));
        assert!(any, "gap at row {y}");
    }
}

#[test]
fn polygon_fill_is_even_odd_and_bounded() {
    let mut s = blank(20, 20);
    let c = Rgb8::new(1, 2, 3);
    fill_polygon(
        &mut s,
        &[
            Point::new(4.0, 4.0),
            Point::new(16.0, 4.0),
            Point::new(16.0, 16.0),
            Point::new(4.0, 16.0),
        ],
        c,
    );
    assert_eq!(s.get(10, 10), Some(c));
    assert_eq!(s.get(4, 10), Some(c));
    // Outside stays black.
    assert_eq!(s.get(2, 10), Some(Rgb8::BLACK));
    assert_eq!(s.get(10, 2), Some(Rgb8::BLACK));
    assert_eq!(s.get(17, 17), Some(Rgb8::BLACK));
}

#[test]
fn degenerate_polygon_paints_nothing() {
    let mut s = blank(8, 8);
    fill_polygon(
        &mut s,
        &[Point::new(1.0, 1.0), Point::new(6.0, 6.0)],
        Rgb8::WHITE,
    );
    assert!(lit(&s).is_empty());
}

#[test]
fn later_fills_overwrite_earlier_pixels() {
    let mut s = blank(10, 10);
    let first = Rgb8::new(200, 0, 0);
    let second = Rgb8::new(0, 0, 200);
    fill_rect(&mut s, Rect::new(1.0, 1.0, 7.0, 7.0), first);
    fill_rect(&mut s, Rect::new(4.0, 4.0, 9.0, 9.0), second);

    assert_eq!(s.get(2, 2), Some(first));
    // The overlap belongs to the later shape.
    assert_eq!(s.get(5, 5), Some(second));
    assert_eq!(s.get(8, 8), Some(second));
}

#[test]
fn stroked_ellipse_is_a_ring() {
    let mut s = blank(40, 40);
    let c = Rgb8::WHITE;
    stroke_ellipse(&mut s, Point::new(20.0, 20.0), 12.0, 12.0, c, 2.0);

    // On the radius.
    assert_eq!(s.get(32, 20), Some(c));
    assert_eq!(s.get(20, 8), Some(c));
    // Interior and center stay black.
    assert_eq!(s.get(20, 20), Some(Rgb8::BLACK));
    assert_eq!(s.get(24, 20), Some(Rgb8::BLACK));
}

#[test]
fn filled_ellipse_covers_interior() {
    let mut s = blank(30, 20);
    let c = Rgb8::new(9, 9, 9);
    fill_ellipse(&mut s, Point::new(15.0, 10.0), 10.0, 6.0, c);
    assert_eq!(s.get(15, 10), Some(c));
    assert_eq!(s.get(8, 10), Some(c));
    // Beyond the semi-minor axis.
    assert_eq!(s.get(15, 2), Some(Rgb8::BLACK));
    assert_eq!(s.get(2, 2), Some(Rgb8::BLACK));
}

#[test]
fn arc_lower_half_stays_below_center() {
    let mut s = blank(40, 40);
    stroke_arc(
        &mut s,
        Point::new(20.0, 20.0),
        12.0,
        12.0,
        0.0,
        180.0,
        Rgb8::WHITE,
        2.0,
    );
    let pixels = lit(&s);
    assert!(!pixels.is_empty());
    // Angles 0..180 sweep clockwise through 6 o'clock (y down), so every
    // painted pixel sits at or below the center row, within the pen radius.
    assert!(pixels.iter().all(|&(_, y)| y >= 18));
}

#[test]
fn round_rect_with_zero_radius_matches_rect() {
    let rect = Rect::new(2.0, 3.0, 12.0, 9.0);
    let c = Rgb8::new(77, 77, 77);

    let mut a = blank(16, 16);
    fill_rect(&mut a, rect, c);
    let mut b = blank(16, 16);
    fill_round_rect(&mut b, rect, 0.0, c);
    assert_eq!(a, b);
}

#[test]
fn round_rect_clips_corners() {
    let mut s = blank(20, 20);
    let c = Rgb8::WHITE;
    fill_round_rect(&mut s, Rect::new(0.0, 0.0, 20.0, 20.0), 8.0, c);
    // Corner pixel is outside the corner circle.
    assert_eq!(s.get(0, 0), Some(Rgb8::BLACK));
    // Edge midpoints and the center are inside.
    assert_eq!(s.get(10, 0), Some(c));
    assert_eq!(s.get(10, 10), Some(c));
}
