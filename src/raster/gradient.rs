use crate::foundation::core::Rgb8;
use crate::foundation::error::VeloResult;
use crate::raster::surface::Surface;

/// Direction of the two-color interpolation across the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDir {
    /// Ratio = y / height.
    Vertical,
    /// Ratio = x / width.
    Horizontal,
    /// Ratio = (x + y) / (width + height).
    Diagonal,
    /// Ratio = distance from center / corner distance, at pixel centers.
    Radial,
}

/// Two-color gradient background description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Gradient {
    pub from: Rgb8,
    pub to: Rgb8,
    pub dir: GradientDir,
}

impl Gradient {
    pub fn vertical(from: Rgb8, to: Rgb8) -> Self {
        Self {
            from,
            to,
            dir: GradientDir::Vertical,
        }
    }

    pub fn diagonal(from: Rgb8, to: Rgb8) -> Self {
        Self {
            from,
            to,
            dir: GradientDir::Diagonal,
        }
    }
}

/// Fill a fresh surface with `gradient`. Each channel is interpolated
/// independently and truncated to an integer, so row 0 of a vertical
/// gradient is exactly `from`.
pub fn fill_gradient(width: u32, height: u32, gradient: Gradient) -> VeloResult<Surface> {
    let mut surface = Surface::solid(width, height, gradient.from)?;
    let w = f64::from(width);
    let h = f64::from(height);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let corner = (cx * cx + cy * cy).sqrt();

    for y in 0..height {
        match gradient.dir {
            GradientDir::Vertical => {
                // One interpolation per row; every pixel in the row matches.
                let color = gradient.from.lerp(gradient.to, f64::from(y) / h);
                for x in 0..width {
                    surface.put(i64::from(x), i64::from(y), color);
                }
            }
            GradientDir::Horizontal => {
                for x in 0..width {
                    let color = gradient.from.lerp(gradient.to, f64::from(x) / w);
                    surface.put(i64::from(x), i64::from(y), color);
                }
            }
            GradientDir::Diagonal => {
                for x in 0..width {
                    let ratio = (f64::from(x) + f64::from(y)) / (w + h);
                    surface.put(
                        i64::from(x),
                        i64::from(y),
                        gradient.from.lerp(gradient.to, ratio),
                    );
                }
            }
            GradientDir::Radial => {
                // Sample at pixel centers so mirrored pixels get mirrored
                // distances for both odd and even dimensions.
                let dy = f64::from(y) + 0.5 - cy;
                for x in 0..width {
                    let dx = f64::from(x) + 0.5 - cx;
                    let ratio = (dx * dx + dy * dy).sqrt() / corner;
                    surface.put(
                        i64::from(x),
                        i64::from(y),
                        gradient.from.lerp(gradient.to, ratio),
                    );
                }
            }
        }
    }
    Ok(surface)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/gradient.rs"]
mod tests;
