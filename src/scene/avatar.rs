//! Stylized person silhouette for customer avatar tiles.

use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::VeloResult;
use crate::palette::Palette;
use crate::scene::shape::Shape;

/// The two hair tones an avatar may get; the catalog picks one per avatar
/// from its seeded stream.
pub const HAIR_TONES: [Rgb8; 2] = [Rgb8::new(60, 40, 30), Rgb8::new(120, 80, 50)];

/// Shape list for one avatar: accent background disc, skin-tone head,
/// hair arc, shoulders. Offsets assume roughly a 200x200 tile and are
/// positioned off the canvas center.
pub fn avatar_shapes(
    width: u32,
    height: u32,
    accent: Rgb8,
    hair: Rgb8,
    palette: &Palette,
) -> VeloResult<Vec<Shape>> {
    let skin = palette.get("skin")?;
    let shoulders = palette.get("shoulders")?;

    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0 + 10.0;
    let head = Point::new(cx, cy - 30.0);

    Ok(vec![
        Shape::Disc {
            center: Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0),
            r: f64::from(width.min(height)) / 2.0 - 20.0,
            color: accent,
        },
        Shape::EllipseFill {
            center: head,
            rx: 35.0,
            ry: 35.0,
            color: skin,
        },
        Shape::Arc {
            center: Point::new(head.x, head.y - 12.5),
            rx: 40.0,
            ry: 32.5,
            start_deg: 180.0,
            end_deg: 360.0,
            color: hair,
            width: 15.0,
        },
        Shape::EllipseFill {
            center: Point::new(cx, cy + 50.0),
            rx: 60.0,
            ry: 30.0,
            color: shoulders,
        },
    ])
}
