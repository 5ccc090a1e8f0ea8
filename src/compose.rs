use crate::effects::fx::apply_effects;
use crate::foundation::error::VeloResult;
use crate::job::{Background, Job};
use crate::raster::gradient::fill_gradient;
use crate::raster::surface::Surface;
use crate::scene::shape::paint_shapes;
use crate::text::font::FontBook;
use crate::text::overlay::paint_text;

/// Composite one job into pixels: background fill, shapes in order,
/// post-effects, then text overlays.
///
/// Pure apart from the job's own seeded random stream; composing the same
/// job twice yields byte-identical surfaces.
#[tracing::instrument(skip_all, fields(file = %job.file_name))]
pub fn compose(job: &Job, fonts: &FontBook) -> VeloResult<Surface> {
    job.validate()?;

    let mut surface = match job.background {
        Background::Solid(color) => Surface::solid(job.width, job.height, color)?,
        Background::Gradient(gradient) => fill_gradient(job.width, job.height, gradient)?,
    };

    paint_shapes(&mut surface, &job.shapes);

    apply_effects(&mut surface, &job.effects, job.seed);

    for text in &job.texts {
        paint_text(&mut surface, fonts, text);
    }

    Ok(surface)
}
