//! Per-pixel painters for the primitive shapes.
//!
//! All painters clip against the surface bounds (via [`Surface::put`]) and
//! test pixel centers, so adjacent primitives meet without seams.

use crate::foundation::core::{Point, Rect, Rgb8};
use crate::raster::surface::Surface;

fn span(lo: f64, hi: f64) -> std::ops::RangeInclusive<i64> {
    (lo.floor() as i64 - 1)..=(hi.ceil() as i64 + 1)
}

/// Filled circle.
pub fn fill_disc(surface: &mut Surface, center: Point, r: f64, color: Rgb8) {
    fill_ellipse(surface, center, r, r, color);
}

/// Filled axis-aligned ellipse.
pub fn fill_ellipse(surface: &mut Surface, center: Point, rx: f64, ry: f64, color: Rgb8) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    for y in span(center.y - ry, center.y + ry) {
        let ny = (y as f64 + 0.5 - center.y) / ry;
        for x in span(center.x - rx, center.x + rx) {
            let nx = (x as f64 + 0.5 - center.x) / rx;
            if nx * nx + ny * ny <= 1.0 {
                surface.put(x, y, color);
            }
        }
    }
}

/// Elliptical ring of the given stroke width, centered on the radius.
pub fn stroke_ellipse(
    surface: &mut Surface,
    center: Point,
    rx: f64,
    ry: f64,
    color: Rgb8,
    width: f64,
) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let half = (width / 2.0).max(0.5);
    let (orx, ory) = (rx + half, ry + half);
    let (irx, iry) = (rx - half, ry - half);
    for y in span(center.y - ory, center.y + ory) {
        let dy = y as f64 + 0.5 - center.y;
        for x in span(center.x - orx, center.x + orx) {
            let dx = x as f64 + 0.5 - center.x;
            let outer = (dx / orx) * (dx / orx) + (dy / ory) * (dy / ory) <= 1.0;
            if !outer {
                continue;
            }
            let inner = irx > 0.0
                && iry > 0.0
                && (dx / irx) * (dx / irx) + (dy / iry) * (dy / iry) < 1.0;
            if !inner {
                surface.put(x, y, color);
            }
        }
    }
}

/// Stroked line segment with round caps.
pub fn draw_line(surface: &mut Surface, from: Point, to: Point, color: Rgb8, width: f64) {
    let r = (width / 2.0).max(0.5);
    let (lo_x, hi_x) = (from.x.min(to.x) - r, from.x.max(to.x) + r);
    let (lo_y, hi_y) = (from.y.min(to.y) - r, from.y.max(to.y) + r);
    for y in span(lo_y, hi_y) {
        for x in span(lo_x, hi_x) {
            let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            if dist_to_segment(p, from, to) <= r {
                surface.put(x, y, color);
            }
        }
    }
}

fn dist_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.x * ab.x + ab.y * ab.y;
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Even-odd scanline polygon fill.
pub fn fill_polygon(surface: &mut Surface, points: &[Point], color: Rgb8) {
    if points.len() < 3 {
        return;
    }
    let lo_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let hi_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    let mut crossings = Vec::new();
    for y in span(lo_y, hi_y) {
        let sy = y as f64 + 0.5;
        crossings.clear();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            // Half-open edge test keeps shared vertices from double-counting.
            if (a.y <= sy && sy < b.y) || (b.y <= sy && sy < a.y) {
                crossings.push(a.x + (sy - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(|p, q| p.total_cmp(q));
        for pair in crossings.chunks_exact(2) {
            let xs = (pair[0] - 0.5).ceil() as i64;
            let xe = (pair[1] - 0.5).ceil() as i64;
            for x in xs..xe {
                surface.put(x, y, color);
            }
        }
    }
}

/// Stroked partial ellipse. Angles are degrees, measured clockwise from
/// 3 o'clock with y pointing down (the convention the scene code expects).
pub fn stroke_arc(
    surface: &mut Surface,
    center: Point,
    rx: f64,
    ry: f64,
    start_deg: f64,
    end_deg: f64,
    color: Rgb8,
    width: f64,
) {
    if rx <= 0.0 || ry <= 0.0 || end_deg <= start_deg {
        return;
    }
    let sweep = (end_deg - start_deg).to_radians();
    let steps = ((sweep * rx.max(ry) * 2.0).ceil() as usize).max(8);
    let r = (width / 2.0).max(0.5);
    for i in 0..=steps {
        let theta = start_deg.to_radians() + sweep * (i as f64 / steps as f64);
        let p = Point::new(center.x + rx * theta.cos(), center.y + ry * theta.sin());
        fill_disc(surface, p, r, color);
    }
}

/// Filled axis-aligned rectangle.
pub fn fill_rect(surface: &mut Surface, rect: Rect, color: Rgb8) {
    let rect = rect.abs();
    for y in span(rect.y0, rect.y1) {
        let sy = y as f64 + 0.5;
        if sy < rect.y0 || sy >= rect.y1 {
            continue;
        }
        for x in span(rect.x0, rect.x1) {
            let sx = x as f64 + 0.5;
            if sx >= rect.x0 && sx < rect.x1 {
                surface.put(x, y, color);
            }
        }
    }
}

/// Filled rectangle with circular corners of the given radius.
pub fn fill_round_rect(surface: &mut Surface, rect: Rect, radius: f64, color: Rgb8) {
    let rect = rect.abs();
    let radius = radius
        .max(0.0)
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0);
    for y in span(rect.y0, rect.y1) {
        let sy = y as f64 + 0.5;
        if sy < rect.y0 || sy >= rect.y1 {
            continue;
        }
        for x in span(rect.x0, rect.x1) {
            let sx = x as f64 + 0.5;
            if sx < rect.x0 || sx >= rect.x1 {
                continue;
            }
            // Nearest corner-circle center; pixels outside all four are
            // only clipped when they sit in a corner square.
            let cx = sx.clamp(rect.x0 + radius, rect.x1 - radius);
            let cy = sy.clamp(rect.y0 + radius, rect.y1 - radius);
            let (dx, dy) = (sx - cx, sy - cy);
            if dx * dx + dy * dy <= radius * radius || (dx == 0.0 || dy == 0.0) {
                surface.put(x, y, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/draw.rs"]
mod tests;
