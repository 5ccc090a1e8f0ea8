use crate::foundation::core::Rgb8;
use crate::foundation::math::SplitMix64;
use crate::raster::surface::Surface;

/// A post-processing pass over the whole surface.
///
/// Effects run after all shapes are painted and before text overlays, in
/// list order. Each is a pure function of (surface, parameters, rng).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Effect {
    /// Film-grain: a `fraction` of pixels get one signed delta in
    /// `[-amplitude, amplitude]` added to all three channels, clamped.
    Noise { fraction: f32, amplitude: u8 },
    /// Darken toward the edges. `strength` is clamped to [0, 1]; 0 is the
    /// identity, 1 drives the corners to black. `soften_px` box-blurs the
    /// mask for a smoother falloff.
    Vignette {
        strength: f32,
        shape: VignetteShape,
        soften_px: u32,
    },
}

/// Distance metric for the vignette mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VignetteShape {
    /// max(|dx|/cx, |dy|/cy), a rectangular frame falloff.
    Frame,
    /// Euclidean center distance over corner distance.
    Radial,
}

impl Effect {
    pub fn noise(fraction: f32, amplitude: u8) -> Self {
        Self::Noise {
            fraction: fraction.clamp(0.0, 1.0),
            amplitude,
        }
    }

    pub fn vignette(strength: f32) -> Self {
        Self::Vignette {
            strength: strength.clamp(0.0, 1.0),
            shape: VignetteShape::Frame,
            soften_px: 0,
        }
    }
}

/// Apply `effects` in order. All randomness (the noise grain) is drawn
/// from a stream seeded with `seed`, so a given (surface, effects, seed)
/// triple always produces the same pixels.
pub fn apply_effects(surface: &mut Surface, effects: &[Effect], seed: u64) {
    let mut rng = SplitMix64::new(seed);
    for effect in effects {
        match *effect {
            Effect::Noise {
                fraction,
                amplitude,
            } => apply_noise(surface, fraction, amplitude, &mut rng),
            Effect::Vignette {
                strength,
                shape,
                soften_px,
            } => apply_vignette(surface, strength, shape, soften_px),
        }
    }
}

fn apply_noise(surface: &mut Surface, fraction: f32, amplitude: u8, rng: &mut SplitMix64) {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction == 0.0 || amplitude == 0 {
        return;
    }
    let amp = i32::from(amplitude);
    let data = surface.data_mut();
    for px in data.chunks_exact_mut(3) {
        if rng.next_f32() >= fraction {
            continue;
        }
        let delta = rng.range_i32(-amp, amp);
        for ch in px.iter_mut() {
            *ch = (i32::from(*ch) + delta).clamp(0, 255) as u8;
        }
    }
}

fn apply_vignette(surface: &mut Surface, strength: f32, shape: VignetteShape, soften_px: u32) {
    let strength = strength.clamp(0.0, 1.0);
    if strength == 0.0 {
        return;
    }
    let (w, h) = (surface.width(), surface.height());
    let (cx, cy) = (f64::from(w) / 2.0, f64::from(h) / 2.0);
    let corner = (cx * cx + cy * cy).sqrt();

    let mut mask = vec![0.0f32; (w as usize) * (h as usize)];
    for y in 0..h {
        let dy = f64::from(y) + 0.5 - cy;
        for x in 0..w {
            let dx = f64::from(x) + 0.5 - cx;
            let dist = match shape {
                VignetteShape::Frame => (dx.abs() / cx).max(dy.abs() / cy),
                VignetteShape::Radial => (dx * dx + dy * dy).sqrt() / corner,
            };
            let v = 1.0 - (dist as f32) * strength;
            mask[(y as usize) * (w as usize) + (x as usize)] = v.clamp(0.0, 1.0);
        }
    }

    if soften_px > 0 {
        box_blur_mask(&mut mask, w as usize, h as usize, soften_px as usize);
    }

    let data = surface.data_mut();
    for (px, &m) in data.chunks_exact_mut(3).zip(mask.iter()) {
        let c = Rgb8::new(px[0], px[1], px[2]).darken(m);
        px[0] = c.r;
        px[1] = c.g;
        px[2] = c.b;
    }
}

/// Separable moving-average blur over the mask, edges clamped. Two passes
/// (horizontal then vertical) in O(w*h) independent of the radius.
fn box_blur_mask(mask: &mut [f32], w: usize, h: usize, radius: usize) {
    let mut tmp = vec![0.0f32; mask.len()];

    let window = (2 * radius + 1) as f64;

    for y in 0..h {
        let row = &mask[y * w..(y + 1) * w];
        // Seed the window at x = 0: indices -radius..=radius, edge-clamped.
        let mut acc = f64::from(row[0]) * radius as f64;
        for i in 0..=radius {
            acc += f64::from(row[i.min(w - 1)]);
        }
        for x in 0..w {
            tmp[y * w + x] = (acc / window) as f32;
            let enter = row[(x + radius + 1).min(w - 1)];
            let leave = row[x.saturating_sub(radius)];
            acc += f64::from(enter) - f64::from(leave);
        }
    }

    for x in 0..w {
        let col = |i: usize| f64::from(tmp[i * w + x]);
        let mut acc = col(0) * radius as f64;
        for i in 0..=radius {
            acc += col(i.min(h - 1));
        }
        for y in 0..h {
            mask[y * w + x] = (acc / window) as f32;
            let enter = col((y + radius + 1).min(h - 1));
            let leave = col(y.saturating_sub(radius));
            acc += enter - leave;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fx.rs"]
mod tests;
