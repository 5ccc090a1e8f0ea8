use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::{VeloError, VeloResult};
use crate::raster::surface::Surface;
use crate::text::builtin::{GLYPH_COLS, GLYPH_FIRST, GLYPH_ROWS, GLYPHS_5X7};

/// Common TTF locations probed by [`FontBook::load_default`].
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Glyph source for text overlays.
///
/// Prefers a real TTF rasterized through `fontdue`; when none can be
/// loaded the book falls back to the built-in 5x7 bitmap font scaled to
/// the requested size. The fallback is silent (a warning, never an error)
/// so asset generation always completes.
pub struct FontBook {
    kind: FontKind,
}

enum FontKind {
    Ttf(Box<fontdue::Font>),
    Builtin,
}

impl FontBook {
    /// Probe the system font paths, falling back to the bitmap font.
    pub fn load_default() -> Self {
        for path in SYSTEM_FONT_PATHS {
            if let Ok(bytes) = std::fs::read(path)
                && let Ok(book) = Self::from_bytes(&bytes)
            {
                tracing::debug!(path = %path, "loaded overlay font");
                return book;
            }
        }
        tracing::warn!("no system font found, using built-in bitmap font");
        Self::builtin()
    }

    /// Parse a TTF/OTF from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> VeloResult<Self> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| VeloError::font(e.to_string()))?;
        Ok(Self {
            kind: FontKind::Ttf(Box::new(font)),
        })
    }

    /// The 5x7 bitmap fallback, directly. Useful for deterministic tests.
    pub fn builtin() -> Self {
        Self {
            kind: FontKind::Builtin,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.kind, FontKind::Builtin)
    }

    /// Width in pixels of `text` rendered at `size`.
    pub fn measure(&self, text: &str, size: f32) -> f64 {
        match &self.kind {
            FontKind::Ttf(font) => {
                let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
                layout.reset(&LayoutSettings::default());
                layout.append(&[font.as_ref()], &TextStyle::new(text, size, 0));
                // Pen position after each glyph, not the bitmap right edge,
                // so the measured width matches the advance extent.
                layout
                    .glyphs()
                    .iter()
                    .map(|g| {
                        let m = font.metrics_indexed(g.key.glyph_index, size);
                        f64::from((g.x - m.xmin as f32 + m.advance_width).max(0.0))
                    })
                    .fold(0.0, f64::max)
            }
            FontKind::Builtin => {
                let cells = text.chars().count() as f64;
                if cells == 0.0 {
                    return 0.0;
                }
                let scale = builtin_scale(size);
                (cells * (GLYPH_COLS as f64 + 1.0) - 1.0) * scale
            }
        }
    }

    /// Paint `text` with its top-left corner at `origin`.
    pub fn draw(&self, surface: &mut Surface, text: &str, size: f32, origin: Point, color: Rgb8) {
        match &self.kind {
            FontKind::Ttf(font) => draw_ttf(surface, font, text, size, origin, color),
            FontKind::Builtin => draw_builtin(surface, text, size, origin, color),
        }
    }
}

fn draw_ttf(
    surface: &mut Surface,
    font: &fontdue::Font,
    text: &str,
    size: f32,
    origin: Point,
    color: Rgb8,
) {
    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings {
        x: origin.x as f32,
        y: origin.y as f32,
        ..LayoutSettings::default()
    });
    layout.append(&[font], &TextStyle::new(text, size, 0));

    for g in layout.glyphs() {
        if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
            continue;
        }
        let (metrics, coverage) = font.rasterize_config(g.key);
        let gx = g.x.round() as i64;
        let gy = g.y.round() as i64;
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let cov = coverage[row * metrics.width + col];
                if cov > 0 {
                    surface.blend(
                        gx + col as i64,
                        gy + row as i64,
                        color,
                        f32::from(cov) / 255.0,
                    );
                }
            }
        }
    }
}

fn builtin_scale(size: f32) -> f64 {
    // One glyph cell is 8 px tall at scale 1 (7 rows + 1 of leading).
    ((f64::from(size) / 8.0).round()).max(1.0)
}

fn draw_builtin(surface: &mut Surface, text: &str, size: f32, origin: Point, color: Rgb8) {
    let scale = builtin_scale(size) as i64;
    let x0 = origin.x.round() as i64;
    let y0 = origin.y.round() as i64;
    for (i, ch) in text.chars().enumerate() {
        let idx = (ch as usize)
            .checked_sub(GLYPH_FIRST as usize)
            .filter(|&v| v < GLYPHS_5X7.len())
            .unwrap_or((b'?' - GLYPH_FIRST) as usize);
        let cell_x = x0 + (i as i64) * (GLYPH_COLS as i64 + 1) * scale;
        for (col, &bits) in GLYPHS_5X7[idx].iter().enumerate() {
            for row in 0..GLYPH_ROWS {
                if bits & (1 << row) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        surface.put(
                            cell_x + (col as i64) * scale + dx,
                            y0 + (row as i64) * scale + dy,
                            color,
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
