//! Velograph procedurally draws placeholder marketing imagery for a
//! bike-shop website: product cards, customer avatars, Instagram-style
//! tiles, a hero poster, and social banners.
//!
//! # Pipeline overview
//!
//! 1. **Catalog**: a [`Palette`] and a seed produce a list of [`Job`]s,
//!    each a pure description of one asset (canvas size, gradient, ordered
//!    shape list, post-effects, text overlays).
//! 2. **Compose**: [`compose`] turns a job into a [`Surface`]: gradient
//!    fill, shapes painted in order, effects, then text.
//! 3. **Encode**: [`run_jobs`] writes each surface as a JPEG under the
//!    asset directory.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all grain, sparkle, and hair-color
//!   randomness comes from seeded SplitMix64 streams, so a (seed, job)
//!   pair always renders identical pixels.
//! - **Jobs are independent**: no shared mutable state, disjoint output
//!   paths, safe to render in parallel.
#![forbid(unsafe_code)]

mod catalog;
mod compose;
mod effects;
mod encode;
mod foundation;
mod job;
mod palette;
mod pipeline;
mod raster;
mod scene;
mod text;

pub use catalog::{
    Category, all_jobs, avatar_jobs, bike_jobs, extra_jobs, hero_jobs, insta_jobs,
};
pub use compose::compose;
pub use effects::fx::{Effect, VignetteShape, apply_effects};
pub use encode::jpeg::{ensure_parent_dir, write_jpeg};
pub use foundation::core::{Point, Rect, Rgb8, Vec2};
pub use foundation::error::{VeloError, VeloResult};
pub use job::{Background, Job};
pub use palette::Palette;
pub use pipeline::{RunOptions, RunStats, run_jobs};
pub use raster::draw::{
    draw_line, fill_disc, fill_ellipse, fill_polygon, fill_rect, fill_round_rect, stroke_arc,
    stroke_ellipse,
};
pub use raster::gradient::{Gradient, GradientDir, fill_gradient};
pub use raster::surface::Surface;
pub use scene::avatar::{HAIR_TONES, avatar_shapes};
pub use scene::backdrop::{SceneStyle, backdrop_shapes};
pub use scene::bike::{BikeAnchors, bike_anchors, bike_shapes};
pub use scene::shape::{Shape, paint_shapes};
pub use text::font::FontBook;
pub use text::overlay::{Anchor, TextOverlay, paint_text};
