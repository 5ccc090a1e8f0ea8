use super::*;

fn offsets(a: &BikeAnchors, center: Point) -> Vec<Vec2> {
    [
        a.rear_hub,
        a.front_hub,
        a.bottom_bracket,
        a.seat_cluster,
        a.head_tube_top,
        a.head_tube_bottom,
    ]
    .iter()
    .map(|p| *p - center)
    .collect()
}

#[test]
fn anchors_scale_by_exactly_k() {
    let center = Point::new(320.0, 220.0);
    let base = bike_anchors(center, 1.0);
    let scaled = bike_anchors(center, 2.0);

    for (b, s) in offsets(&base, center)
        .into_iter()
        .zip(offsets(&scaled, center))
    {
        assert_eq!(s.x, b.x * 2.0);
        assert_eq!(s.y, b.y * 2.0);
    }
}

#[test]
fn anchors_follow_the_center_point() {
    let a = bike_anchors(Point::new(0.0, 0.0), 1.0);
    let b = bike_anchors(Point::new(100.0, -40.0), 1.0);
    for (pa, pb) in offsets(&a, Point::new(0.0, 0.0))
        .into_iter()
        .zip(offsets(&b, Point::new(100.0, -40.0)))
    {
        assert_eq!(pa, pb);
    }
}

#[test]
fn shapes_are_geometrically_similar_across_scales() {
    let palette = crate::palette::Palette::classic();
    let center = Point::new(0.0, 0.0);
    let frame = crate::foundation::core::Rgb8::new(230, 57, 70);
    let base = bike_shapes(center, 1.0, frame, &palette).unwrap();
    let scaled = bike_shapes(center, 3.0, frame, &palette).unwrap();

    assert_eq!(base.len(), scaled.len());
    // Trig products round differently across scales, so compare within an
    // epsilon rather than bit-exactly.
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    for (b, s) in base.iter().zip(scaled.iter()) {
        match (b, s) {
            (
                Shape::Line {
                    from: bf,
                    to: bt,
                    width: bw,
                    ..
                },
                Shape::Line {
                    from: sf,
                    to: st,
                    width: sw,
                    ..
                },
            ) => {
                assert!(close(sf.x, bf.x * 3.0) && close(sf.y, bf.y * 3.0));
                assert!(close(st.x, bt.x * 3.0) && close(st.y, bt.y * 3.0));
                assert!(close(*sw, bw * 3.0));
            }
            (
                Shape::Ellipse {
                    center: bc,
                    rx: brx,
                    width: bw,
                    ..
                },
                Shape::Ellipse {
                    center: sc,
                    rx: srx,
                    width: sw,
                    ..
                },
            ) => {
                assert!(close(sc.x, bc.x * 3.0) && close(sc.y, bc.y * 3.0));
                assert!(close(*srx, brx * 3.0));
                assert!(close(*sw, bw * 3.0));
            }
            (b, s) => panic!("shape kinds diverged: {b:?} vs {s:?}"),
        }
    }
}

#[test]
fn diagram_has_wheels_spokes_and_tubes() {
    let palette = crate::palette::Palette::classic();
    let frame = palette.get("accent-red").unwrap();
    let shapes = bike_shapes(Point::new(100.0, 100.0), 1.0, frame, &palette).unwrap();

    let rings = shapes
        .iter()
        .filter(|s| matches!(s, Shape::Ellipse { .. }))
        .count();
    let lines = shapes
        .iter()
        .filter(|s| matches!(s, Shape::Line { .. }))
        .count();
    // 2 tire rings + 2 rim rings + crank ring.
    assert_eq!(rings, 5);
    // 24 spokes + 6 tubes + fork + handlebar + seat post + saddle.
    assert_eq!(lines, 34);

    let frame_lines = shapes
        .iter()
        .filter(|s| matches!(s, Shape::Line { color, .. } if *color == frame))
        .count();
    assert_eq!(frame_lines, 6);
}
