//! Scene backdrops for the Instagram-style lifestyle tiles, keyed by a
//! style tag derived from the output file name.

use crate::foundation::core::{Point, Rect, Rgb8, Vec2};
use crate::foundation::error::VeloResult;
use crate::palette::Palette;
use crate::scene::bike::bike_shapes;
use crate::scene::shape::Shape;

/// Which backdrop shape set a tile uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneStyle {
    /// Mountain silhouette and a sun.
    Trail,
    /// Road surface with a center line.
    Road,
    /// Shop interior shelving.
    Shop,
    /// Drivetrain close-up: concentric rings and a chain of gold links.
    Detail,
    /// Horizon bands and a road vanishing into the distance.
    Lifestyle,
    /// Plain bike silhouette (the default).
    Bike,
}

impl SceneStyle {
    /// Match a style out of a file name or free-form tag.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        for (needle, style) in [
            ("trail", Self::Trail),
            ("road", Self::Road),
            ("shop", Self::Shop),
            ("detail", Self::Detail),
            ("lifestyle", Self::Lifestyle),
        ] {
            if tag.contains(needle) {
                return style;
            }
        }
        Self::Bike
    }
}

/// Build the backdrop shape list for a `width` x `height` tile.
///
/// Geometry is proportional to the canvas so the same style works on any
/// tile size.
pub fn backdrop_shapes(
    style: SceneStyle,
    width: u32,
    height: u32,
    palette: &Palette,
) -> VeloResult<Vec<Shape>> {
    let w = f64::from(width);
    let h = f64::from(height);
    let gold = palette.get("accent-gold")?;

    match style {
        SceneStyle::Trail => {
            let ridge: Vec<Point> = [
                (0.0, 0.625),
                (0.25, 0.375),
                (0.5, 0.5),
                (0.75, 0.3),
                (1.0, 0.625),
                (1.0, 1.0),
                (0.0, 1.0),
            ]
            .into_iter()
            .map(|(fx, fy)| Point::new(fx * w, fy * h))
            .collect();
            Ok(vec![
                Shape::Polygon {
                    points: ridge,
                    color: palette.get("carbon")?,
                },
                Shape::Disc {
                    center: Point::new(0.7875 * w, 0.2125 * h),
                    r: 0.0875 * w,
                    color: gold,
                },
            ])
        }
        SceneStyle::Road => Ok(vec![
            Shape::Polygon {
                points: vec![
                    Point::new(0.0, 0.75 * h),
                    Point::new(w, 0.75 * h),
                    Point::new(w, h),
                    Point::new(0.0, h),
                ],
                color: palette.get("road")?,
            },
            Shape::Line {
                from: Point::new(0.5 * w, 0.8 * h),
                to: Point::new(0.5 * w, h),
                color: gold,
                width: 4.0,
            },
        ]),
        SceneStyle::Shop => {
            let metal = palette.get("metal")?;
            Ok([0.375, 0.625, 0.875]
                .into_iter()
                .map(|fy| Shape::Line {
                    from: Point::new(0.125 * w, fy * h),
                    to: Point::new(0.875 * w, fy * h),
                    color: metal,
                    width: 3.0,
                })
                .collect())
        }
        SceneStyle::Detail => {
            let center = Point::new(w / 2.0, h / 2.0);
            let s = w.min(h) / 1024.0;
            let mut shapes = Vec::new();
            // Chainring: concentric discs stepping brighter toward the hub.
            let mut r = 200.0;
            while r > 50.0 {
                let v = (40.0 + (200.0 - r) / 3.0) as u8;
                shapes.push(Shape::Disc {
                    center,
                    r: r * s,
                    color: Rgb8::new(v, v, v.saturating_add(10)),
                });
                r -= 20.0;
            }
            for step in 0..24 {
                let rad = f64::from(step) * 15.0_f64.to_radians();
                shapes.push(Shape::Disc {
                    center: center + Vec2::new(rad.cos(), rad.sin()) * (140.0 * s),
                    r: (4.0 * s).max(1.0),
                    color: gold,
                });
            }
            shapes.push(Shape::Ellipse {
                center,
                rx: 60.0 * s,
                ry: 60.0 * s,
                color: gold,
                width: 3.0,
            });
            Ok(shapes)
        }
        SceneStyle::Lifestyle => {
            let horizon = h / 3.0;
            let mut shapes = Vec::new();
            // Sky: banded vertical gradient above the horizon.
            let bands = 12;
            for i in 0..bands {
                let t = (f64::from(i) + 0.5) / f64::from(bands);
                let color = Rgb8::new(
                    (5.0 + 20.0 * t) as u8,
                    (5.0 + 15.0 * t) as u8,
                    (10.0 + 30.0 * t) as u8,
                );
                shapes.push(Shape::Rect {
                    rect: Rect::new(
                        0.0,
                        horizon * f64::from(i) / f64::from(bands),
                        w,
                        horizon * f64::from(i + 1) / f64::from(bands),
                    ),
                    color,
                });
            }
            shapes.push(Shape::Polygon {
                points: vec![
                    Point::new(0.45 * w, horizon),
                    Point::new(0.55 * w, horizon),
                    Point::new(0.95 * w, h),
                    Point::new(0.05 * w, h),
                ],
                color: palette.get("road")?,
            });
            shapes.push(Shape::Line {
                from: Point::new(0.0, horizon),
                to: Point::new(w, horizon),
                color: gold,
                width: 3.0,
            });
            Ok(shapes)
        }
        SceneStyle::Bike => bike_shapes(
            Point::new(w / 2.0, h / 2.0),
            0.8 * (w.min(h) / 400.0),
            palette.get("accent-red")?,
            palette,
        ),
    }
}
