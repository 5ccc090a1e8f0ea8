use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;

use crate::foundation::error::{VeloError, VeloResult};
use crate::raster::surface::Surface;

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> VeloResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            VeloError::encode(format!(
                "cannot create output dir '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

/// Encode `surface` as a JPEG at `quality` (1-100), overwriting any
/// existing file at `path`. These are regenerate-on-demand placeholder
/// assets, so no partial-write recovery is attempted.
pub fn write_jpeg(surface: &Surface, path: &Path, quality: u8) -> VeloResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(VeloError::validation("jpeg quality must be in 1..=100"));
    }
    ensure_parent_dir(path)?;

    let file = File::create(path)
        .map_err(|e| VeloError::encode(format!("cannot create '{}': {e}", path.display())))?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality);
    encoder
        .write_image(
            surface.data(),
            surface.width(),
            surface.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| VeloError::encode(format!("jpeg encode '{}': {e}", path.display())))
}
