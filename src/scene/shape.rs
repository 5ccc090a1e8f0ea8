use crate::foundation::core::{Point, Rect, Rgb8};
use crate::raster::draw;
use crate::raster::surface::Surface;

/// An immutable instruction to paint one geometric primitive.
///
/// Shapes are applied in list order and later shapes overwrite earlier
/// pixels, so the order of a shape list is part of its meaning (background
/// before structure, structure before accents).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Shape {
    /// Stroked segment with round caps.
    Line {
        from: Point,
        to: Point,
        color: Rgb8,
        width: f64,
    },
    /// Stroked elliptical ring.
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
        color: Rgb8,
        width: f64,
    },
    /// Filled ellipse.
    EllipseFill {
        center: Point,
        rx: f64,
        ry: f64,
        color: Rgb8,
    },
    /// Filled circle.
    Disc { center: Point, r: f64, color: Rgb8 },
    /// Even-odd filled polygon.
    Polygon { points: Vec<Point>, color: Rgb8 },
    /// Stroked partial ellipse; degrees, clockwise from 3 o'clock, y down.
    Arc {
        center: Point,
        rx: f64,
        ry: f64,
        start_deg: f64,
        end_deg: f64,
        color: Rgb8,
        width: f64,
    },
    /// Filled axis-aligned rectangle.
    Rect { rect: Rect, color: Rgb8 },
    /// Filled rectangle with rounded corners.
    RoundRect {
        rect: Rect,
        radius: f64,
        color: Rgb8,
    },
}

/// Paint `shapes` onto `surface` in sequence.
pub fn paint_shapes(surface: &mut Surface, shapes: &[Shape]) {
    for shape in shapes {
        match shape {
            Shape::Line {
                from,
                to,
                color,
                width,
            } => draw::draw_line(surface, *from, *to, *color, *width),
            Shape::Ellipse {
                center,
                rx,
                ry,
                color,
                width,
            } => draw::stroke_ellipse(surface, *center, *rx, *ry, *color, *width),
            Shape::EllipseFill {
                center,
                rx,
                ry,
                color,
            } => draw::fill_ellipse(surface, *center, *rx, *ry, *color),
            Shape::Disc { center, r, color } => draw::fill_disc(surface, *center, *r, *color),
            Shape::Polygon { points, color } => draw::fill_polygon(surface, points, *color),
            Shape::Arc {
                center,
                rx,
                ry,
                start_deg,
                end_deg,
                color,
                width,
            } => draw::stroke_arc(
                surface, *center, *rx, *ry, *start_deg, *end_deg, *color, *width,
            ),
            Shape::Rect { rect, color } => draw::fill_rect(surface, *rect, *color),
            Shape::RoundRect {
                rect,
                radius,
                color,
            } => draw::fill_round_rect(surface, *rect, *radius, *color),
        }
    }
}
