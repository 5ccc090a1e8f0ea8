use crate::effects::fx::Effect;
use crate::foundation::error::{VeloError, VeloResult};
use crate::foundation::core::Rgb8;
use crate::raster::gradient::Gradient;
use crate::scene::shape::Shape;
use crate::text::overlay::TextOverlay;

/// What fills the canvas before any shape is painted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Background {
    Solid(Rgb8),
    Gradient(Gradient),
}

/// One complete unit of work: everything needed to produce one asset file.
///
/// Jobs are plain data with no shared mutable state; two jobs never write
/// the same output path, so a job list can run in any order (or in
/// parallel) with identical results.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Job {
    /// Output file name (joined onto the asset directory by the runner).
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub background: Background,
    /// Painted in order; later shapes overwrite earlier pixels.
    pub shapes: Vec<Shape>,
    /// Applied after all shapes, before text overlays.
    pub effects: Vec<Effect>,
    /// Painted last so post-effects never smear glyphs.
    pub texts: Vec<TextOverlay>,
    /// JPEG quality, 1-100.
    pub quality: u8,
    /// Seed for this job's random stream (noise grain etc).
    pub seed: u64,
}

impl Job {
    pub fn validate(&self) -> VeloResult<()> {
        if self.file_name.is_empty() {
            return Err(VeloError::validation("job file_name must be non-empty"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(VeloError::validation(format!(
                "job '{}' dimensions must be > 0",
                self.file_name
            )));
        }
        if !(1..=100).contains(&self.quality) {
            return Err(VeloError::validation(format!(
                "job '{}' quality must be in 1..=100",
                self.file_name
            )));
        }
        Ok(())
    }
}
