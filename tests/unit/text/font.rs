use super::*;
use crate::text::overlay::{TextOverlay, paint_text};

fn rightmost_lit_x(s: &Surface) -> Option<i64> {
    let mut max_x = None;
    for y in 0..s.height() as i64 {
        for x in 0..s.width() as i64 {
            if s.get(x, y) != Some(Rgb8::BLACK) {
                max_x = Some(max_x.map_or(x, |m: i64| m.max(x)));
            }
        }
    }
    max_x
}

#[test]
fn builtin_measure_grows_with_length() {
    let book = FontBook::builtin();
    assert_eq!(book.measure("", 16.0), 0.0);
    let one = book.measure("A", 16.0);
    let two = book.measure("AB", 16.0);
    assert!(one > 0.0);
    assert!(two > one);
}

#[test]
fn builtin_measure_scales_with_size() {
    let book = FontBook::builtin();
    let small = book.measure("RIDE", 8.0);
    let big = book.measure("RIDE", 32.0);
    assert_eq!(big, small * 4.0);
}

#[test]
fn right_aligned_text_lands_on_the_anchor() {
    let book = FontBook::builtin();
    let anchor_x = 110.0;

    // Different lengths, same trailing glyph, so the lit right edge is
    // comparable between renders.
    let mut edges = Vec::new();
    for text in ["$1,899", "$99", "$123,999"] {
        let mut s = Surface::solid(128, 40, Rgb8::BLACK).unwrap();
        paint_text(
            &mut s,
            &book,
            &TextOverlay::right(text, 16.0, Point::new(anchor_x, 8.0), Rgb8::WHITE),
        );
        edges.push(rightmost_lit_x(&s).expect("text painted"));
    }
    assert_eq!(edges[0], edges[1]);
    assert_eq!(edges[1], edges[2]);
    // And the edge sits at the anchor (within one glyph column of trailing
    // spacing removed by measure()).
    assert!(f64::from(edges[0] as u32) < anchor_x);
    assert!(f64::from(edges[0] as u32) >= anchor_x - 4.0);
}

#[test]
fn left_and_right_anchors_agree_on_width() {
    let book = FontBook::builtin();
    let text = "GET A BIKE";
    let width = book.measure(text, 16.0);

    let mut left = Surface::solid(256, 40, Rgb8::BLACK).unwrap();
    paint_text(
        &mut left,
        &book,
        &TextOverlay::left(text, 16.0, Point::new(10.0, 8.0), Rgb8::WHITE),
    );
    let mut right = Surface::solid(256, 40, Rgb8::BLACK).unwrap();
    paint_text(
        &mut right,
        &book,
        &TextOverlay::right(text, 16.0, Point::new(10.0 + width, 8.0), Rgb8::WHITE),
    );
    assert_eq!(left, right);
}

#[test]
fn non_ascii_falls_back_to_question_mark() {
    let book = FontBook::builtin();
    let mut a = Surface::solid(32, 16, Rgb8::BLACK).unwrap();
    let mut b = Surface::solid(32, 16, Rgb8::BLACK).unwrap();
    book.draw(&mut a, "é", 8.0, Point::new(2.0, 2.0), Rgb8::WHITE);
    book.draw(&mut b, "?", 8.0, Point::new(2.0, 2.0), Rgb8::WHITE);
    assert_eq!(a, b);
}

#[test]
fn bad_font_bytes_error_but_builtin_never_does() {
    assert!(FontBook::from_bytes(&[0u8; 16]).is_err());
    let book = FontBook::builtin();
    assert!(book.is_builtin());
    // Drawing with the fallback never panics, even off-canvas.
    let mut s = Surface::solid(16, 16, Rgb8::BLACK).unwrap();
    book.draw(&mut s, "XX", 64.0, Point::new(-10.0, -10.0), Rgb8::WHITE);
}
