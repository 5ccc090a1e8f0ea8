use crate::foundation::core::Rgb8;
use crate::foundation::error::{VeloError, VeloResult};

/// A mutable width x height RGB8 pixel grid, row-major, tightly packed.
///
/// A surface is created once per job, owned exclusively by the composition
/// routine, and discarded after encoding. Writes outside the grid clip
/// silently so shape painters never need their own bounds checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Create a surface filled with `color`. Dimensions must be positive.
    pub fn solid(width: u32, height: u32, color: Rgb8) -> VeloResult<Self> {
        if width == 0 || height == 0 {
            return Err(VeloError::validation("surface dimensions must be > 0"));
        }
        let px = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| VeloError::validation("surface size overflow"))?;
        let mut data = Vec::with_capacity(px * 3);
        for _ in 0..px {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 3
    }

    /// Read a pixel, `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<Rgb8> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        let i = self.index(x as u32, y as u32);
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Write a pixel; coordinates outside the grid clip silently.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, color: Rgb8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let i = self.index(x as u32, y as u32);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
    }

    /// Blend `color` over the pixel at coverage `alpha` in [0, 1].
    /// Used by the glyph painter; full coverage is a plain overwrite.
    pub(crate) fn blend(&mut self, x: i64, y: i64, color: Rgb8, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.put(x, y, color);
            return;
        }
        if let Some(bg) = self.get(x, y) {
            let mix = |b: u8, f: u8| {
                (f32::from(b) + (f32::from(f) - f32::from(b)) * alpha).round() as u8
            };
            self.put(
                x,
                y,
                Rgb8::new(
                    mix(bg.r, color.r),
                    mix(bg.g, color.g),
                    mix(bg.b, color.b),
                ),
            );
        }
    }

    /// Copy out as an [`image::RgbImage`] for encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| image::RgbImage::new(self.width, self.height))
    }
}
