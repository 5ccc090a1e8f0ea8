//! Stylized side-view bicycle built from a center point and one scale
//! factor. Every offset is a constant multiplied by the scale, so the
//! whole diagram is geometrically similar across sizes.

use crate::foundation::core::{Point, Rgb8, Vec2};
use crate::foundation::error::VeloResult;
use crate::palette::Palette;
use crate::scene::shape::Shape;

/// The six frame anchor points, already scaled and centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BikeAnchors {
    pub rear_hub: Point,
    pub front_hub: Point,
    pub bottom_bracket: Point,
    pub seat_cluster: Point,
    pub head_tube_top: Point,
    pub head_tube_bottom: Point,
}

/// Resolve the anchor points for a bike centered at `center` with uniform
/// scale `s`.
pub fn bike_anchors(center: Point, s: f64) -> BikeAnchors {
    let at = |dx: f64, dy: f64| center + Vec2::new(dx * s, dy * s);
    BikeAnchors {
        rear_hub: at(-120.0, 40.0),
        front_hub: at(120.0, 40.0),
        bottom_bracket: at(-20.0, 40.0),
        seat_cluster: at(-30.0, -60.0),
        head_tube_top: at(70.0, -50.0),
        head_tube_bottom: at(75.0, -10.0),
    }
}

/// Shape list for one bike diagram: wheels (tire ring, rim ring, twelve
/// spokes), the frame tubes, fork, handlebar, seat post + saddle, and the
/// crank ring. `frame` colors the tubes; tire/rim/fork colors come from
/// the palette roles `tire`, `metal`, and `carbon`.
pub fn bike_shapes(
    center: Point,
    s: f64,
    frame: Rgb8,
    palette: &Palette,
) -> VeloResult<Vec<Shape>> {
    let tire = palette.get("tire")?;
    let metal = palette.get("metal")?;
    let carbon = palette.get("carbon")?;
    let a = bike_anchors(center, s);

    let mut shapes = Vec::new();

    for hub in [a.rear_hub, a.front_hub] {
        shapes.push(Shape::Ellipse {
            center: hub,
            rx: 45.0 * s,
            ry: 45.0 * s,
            color: tire,
            width: 6.0 * s,
        });
        shapes.push(Shape::Ellipse {
            center: hub,
            rx: 35.0 * s,
            ry: 35.0 * s,
            color: metal,
            width: 3.0 * s,
        });
        for step in 0..12 {
            let rad = f64::from(step) * 30.0_f64.to_radians();
            let dir = Vec2::new(rad.cos(), rad.sin());
            shapes.push(Shape::Line {
                from: hub + dir * (10.0 * s),
                to: hub + dir * (32.0 * s),
                color: metal,
                width: 1.0 * s,
            });
        }
    }

    let tube = |from: Point, to: Point, width: f64| Shape::Line {
        from,
        to,
        color: frame,
        width: width * s,
    };
    shapes.push(tube(a.rear_hub, a.bottom_bracket, 5.0)); // chainstay
    shapes.push(tube(a.rear_hub, a.seat_cluster, 4.0)); // seatstay
    shapes.push(tube(a.bottom_bracket, a.seat_cluster, 5.0)); // seat tube
    shapes.push(tube(a.bottom_bracket, a.head_tube_bottom, 6.0)); // down tube
    shapes.push(tube(a.seat_cluster, a.head_tube_top, 5.0)); // top tube
    shapes.push(tube(a.head_tube_top, a.head_tube_bottom, 6.0)); // head tube

    shapes.push(Shape::Line {
        from: a.front_hub,
        to: a.head_tube_bottom,
        color: carbon,
        width: 4.0 * s,
    });

    // Handlebar stub off the head tube.
    let bar = a.head_tube_top + Vec2::new(15.0 * s, -5.0 * s);
    shapes.push(Shape::Line {
        from: bar,
        to: bar + Vec2::new(20.0 * s, -10.0 * s),
        color: metal,
        width: 3.0 * s,
    });

    // Seat post and saddle.
    let seat_top = a.seat_cluster + Vec2::new(-5.0 * s, -25.0 * s);
    shapes.push(Shape::Line {
        from: a.seat_cluster,
        to: seat_top,
        color: carbon,
        width: 4.0 * s,
    });
    shapes.push(Shape::Line {
        from: seat_top + Vec2::new(-15.0 * s, 0.0),
        to: seat_top + Vec2::new(15.0 * s, 0.0),
        color: tire,
        width: 5.0 * s,
    });

    shapes.push(Shape::Ellipse {
        center: a.bottom_bracket,
        rx: 12.0 * s,
        ry: 12.0 * s,
        color: metal,
        width: 3.0 * s,
    });

    Ok(shapes)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/bike.rs"]
mod tests;
