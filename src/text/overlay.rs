use crate::foundation::core::{Point, Rgb8};
use crate::raster::surface::Surface;
use crate::text::font::FontBook;

/// Horizontal anchoring of a text overlay's position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// `pos.x` is the left edge of the text.
    #[default]
    Left,
    /// `pos.x` is the right edge; the string is measured and shifted left,
    /// so a price column lines up at a fixed margin regardless of length.
    Right,
}

/// One string painted over the finished composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextOverlay {
    pub text: String,
    pub size: f32,
    pub pos: Point,
    pub color: Rgb8,
    #[serde(default)]
    pub anchor: Anchor,
}

impl TextOverlay {
    pub fn left(text: impl Into<String>, size: f32, pos: Point, color: Rgb8) -> Self {
        Self {
            text: text.into(),
            size,
            pos,
            color,
            anchor: Anchor::Left,
        }
    }

    pub fn right(text: impl Into<String>, size: f32, pos: Point, color: Rgb8) -> Self {
        Self {
            text: text.into(),
            size,
            pos,
            color,
            anchor: Anchor::Right,
        }
    }
}

/// Paint one overlay, resolving its anchor against the measured width.
pub fn paint_text(surface: &mut Surface, fonts: &FontBook, overlay: &TextOverlay) {
    let x = match overlay.anchor {
        Anchor::Left => overlay.pos.x,
        Anchor::Right => overlay.pos.x - fonts.measure(&overlay.text, overlay.size),
    };
    fonts.draw(
        surface,
        &overlay.text,
        overlay.size,
        Point::new(x, overlay.pos.y),
        overlay.color,
    );
}
