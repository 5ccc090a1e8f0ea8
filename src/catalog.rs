//! Built-in job sets for the bike-shop asset pack: product cards,
//! avatars, Instagram tiles, the hero poster, and social banners.
//!
//! Every job is plain data derived from a palette and a global seed;
//! nothing here touches the filesystem.

use crate::effects::fx::{Effect, VignetteShape};
use crate::foundation::core::{Point, Rect, Rgb8, Vec2};
use crate::foundation::error::VeloResult;
use crate::foundation::math::{SplitMix64, hash_str};
use crate::job::{Background, Job};
use crate::palette::Palette;
use crate::raster::gradient::Gradient;
use crate::scene::avatar::{HAIR_TONES, avatar_shapes};
use crate::scene::backdrop::{SceneStyle, backdrop_shapes};
use crate::scene::bike::bike_shapes;
use crate::scene::shape::Shape;
use crate::text::overlay::TextOverlay;

/// Job groups, one per asset family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Bikes,
    Avatars,
    Insta,
    Hero,
    Extra,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Bikes,
        Category::Avatars,
        Category::Insta,
        Category::Hero,
        Category::Extra,
    ];

    /// Build this category's job list.
    pub fn jobs(self, palette: &Palette, seed: u64) -> VeloResult<Vec<Job>> {
        match self {
            Category::Bikes => bike_jobs(palette, seed),
            Category::Avatars => avatar_jobs(palette, seed),
            Category::Insta => insta_jobs(palette, seed),
            Category::Hero => hero_jobs(palette, seed),
            Category::Extra => extra_jobs(palette, seed),
        }
    }
}

/// Every job in the catalog, in a stable order.
pub fn all_jobs(palette: &Palette, seed: u64) -> VeloResult<Vec<Job>> {
    let mut jobs = Vec::new();
    for category in Category::ALL {
        jobs.extend(category.jobs(palette, seed)?);
    }
    Ok(jobs)
}

fn job_seed(seed: u64, file_name: &str) -> u64 {
    seed ^ hash_str(file_name)
}

/// Resolve `spec` as a literal `#rrggbb` or as a palette role.
fn resolve_color(palette: &Palette, spec: &str) -> VeloResult<Rgb8> {
    if spec.starts_with('#') {
        Rgb8::from_hex(spec)
    } else {
        palette.get(spec)
    }
}

const BIKE_CARDS: [(&str, &str, &str, &str, &str, &str); 4] = [
    (
        "bike-1.jpg",
        "Jamis Renegade S4",
        "Gravel | 54cm | Shimano GRX",
        "$1,899",
        "accent-red",
        "#1a1a1e",
    ),
    (
        "bike-2.jpg",
        "Bianchi Oltre XR3",
        "Road | 56cm | Ultegra",
        "$2,950",
        "accent-blue",
        "#1a1a2e",
    ),
    (
        "bike-3.jpg",
        "Specialized Turbo Vado",
        "Electric | M | 70mi Range",
        "$2,499",
        "accent-gold",
        "#1e1a0a",
    ),
    (
        "bike-4.jpg",
        "3T Exploro Racemax",
        "Gravel | 58cm | SRAM Rival",
        "$3,200",
        "#e76f51",
        "#1a0f0a",
    ),
];

/// 640x480 product cards: gradient, bike diagram, badge, name/spec lines,
/// right-aligned price.
pub fn bike_jobs(palette: &Palette, seed: u64) -> VeloResult<Vec<Job>> {
    let (width, height) = (640u32, 480u32);
    let white = palette.get("text-white")?;
    let gray = palette.get("text-gray")?;
    let badge_bg = palette.get("accent-red")?;
    let bg_dark = palette.get("bg-dark")?;

    let mut jobs = Vec::new();
    for (file, name, specs, price, frame_spec, grad_to) in BIKE_CARDS {
        let frame = resolve_color(palette, frame_spec)?;
        let mut shapes = bike_shapes(Point::new(320.0, 220.0), 1.2, frame, palette)?;
        shapes.push(Shape::RoundRect {
            rect: Rect::new(30.0, 30.0, 230.0, 58.0),
            radius: 4.0,
            color: badge_bg,
        });

        jobs.push(Job {
            file_name: file.to_owned(),
            width,
            height,
            background: Background::Gradient(Gradient::vertical(
                bg_dark,
                Rgb8::from_hex(grad_to)?,
            )),
            shapes,
            effects: vec![
                Effect::Noise {
                    fraction: 0.003,
                    amplitude: 10,
                },
                Effect::Vignette {
                    strength: 0.3,
                    shape: VignetteShape::Frame,
                    soften_px: width / 4,
                },
            ],
            texts: vec![
                TextOverlay::left("CERTIFIED PRE-OWNED", 16.0, Point::new(40.0, 33.0), white),
                TextOverlay::left(name, 36.0, Point::new(30.0, 320.0), white),
                TextOverlay::left(specs, 20.0, Point::new(30.0, 370.0), gray),
                TextOverlay::right(price, 42.0, Point::new(610.0, 360.0), badge_bg),
            ],
            quality: 95,
            seed: job_seed(seed, file),
        });
    }
    Ok(jobs)
}

/// 200x200 customer avatars with a per-avatar accent disc.
pub fn avatar_jobs(palette: &Palette, seed: u64) -> VeloResult<Vec<Job>> {
    let (width, height) = (200u32, 200u32);
    let accents = ["accent-blue", "accent-gold", "accent-red"];

    let mut jobs = Vec::new();
    for (i, accent) in accents.iter().enumerate() {
        let file = format!("avatar-{}.jpg", i + 1);
        let stream_seed = job_seed(seed, &file);
        let mut rng = SplitMix64::new(stream_seed);
        let hair = HAIR_TONES[(rng.next_u64() & 1) as usize];

        jobs.push(Job {
            file_name: file,
            width,
            height,
            background: Background::Solid(palette.get("bg-card")?),
            shapes: avatar_shapes(width, height, palette.get(accent)?, hair, palette)?,
            effects: vec![Effect::Vignette {
                strength: 0.4,
                shape: VignetteShape::Frame,
                soften_px: width / 4,
            }],
            texts: Vec::new(),
            quality: 95,
            seed: stream_seed,
        });
    }
    Ok(jobs)
}

const INSTA_TILES: [(&str, SceneStyle, &str, &str); 6] = [
    ("insta-1.jpg", SceneStyle::Trail, "#1a1a2e", "#0a0a0f"),
    ("insta-2.jpg", SceneStyle::Road, "#0f172a", "#1e293b"),
    ("insta-3.jpg", SceneStyle::Shop, "#1a1a1e", "#0a0a0f"),
    ("insta-4.jpg", SceneStyle::Detail, "#1e1a0a", "#0a0a0f"),
    ("insta-5.jpg", SceneStyle::Lifestyle, "#0f0f15", "#1a1a2e"),
    ("insta-6.jpg", SceneStyle::Bike, "#1a0f0a", "#0a0a0f"),
];

/// 400x400 lifestyle tiles with style-keyed backdrops and a soft vignette.
pub fn insta_jobs(palette: &Palette, seed: u64) -> VeloResult<Vec<Job>> {
    let (width, height) = (400u32, 400u32);

    let mut jobs = Vec::new();
    for (file, style, from, to) in INSTA_TILES {
        jobs.push(Job {
            file_name: file.to_owned(),
            width,
            height,
            background: Background::Gradient(Gradient::vertical(
                Rgb8::from_hex(from)?,
                Rgb8::from_hex(to)?,
            )),
            shapes: backdrop_shapes(style, width, height, palette)?,
            effects: vec![Effect::Vignette {
                strength: 0.4,
                shape: VignetteShape::Frame,
                soften_px: width / 4,
            }],
            texts: Vec::new(),
            quality: 90,
            seed: job_seed(seed, file),
        });
    }
    Ok(jobs)
}

/// The 1920x1080 hero poster: dramatic gradient, sparkle highlights, one
/// large bike, heavy vignette and grain.
pub fn hero_jobs(palette: &Palette, seed: u64) -> VeloResult<Vec<Job>> {
    let (width, height) = (1920u32, 1080u32);
    let file = "hero-poster.jpg";
    let stream_seed = job_seed(seed, file);
    let mut rng = SplitMix64::new(stream_seed);

    let mut shapes = Vec::new();
    // Sparkle highlights across the upper half.
    for _ in 0..100 {
        let x = rng.range_i32(0, width as i32 - 1);
        let y = rng.range_i32(0, height as i32 / 2);
        let r = rng.range_i32(1, 3);
        shapes.push(Shape::Disc {
            center: Point::new(f64::from(x), f64::from(y)),
            r: f64::from(r),
            color: Rgb8::new(230, 230, 235),
        });
    }
    shapes.extend(bike_shapes(
        Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0 + 100.0),
        2.5,
        palette.get("accent-red")?,
        palette,
    )?);

    Ok(vec![Job {
        file_name: file.to_owned(),
        width,
        height,
        background: Background::Gradient(Gradient::diagonal(
            Rgb8::from_hex("#050508")?,
            Rgb8::from_hex("#1a1a2e")?,
        )),
        shapes,
        effects: vec![
            Effect::Vignette {
                strength: 0.5,
                shape: VignetteShape::Frame,
                soften_px: width / 4,
            },
            Effect::Noise {
                fraction: 0.01,
                amplitude: 10,
            },
        ],
        texts: Vec::new(),
        quality: 95,
        seed: stream_seed,
    }])
}

/// Remaining one-off assets: the video thumbnail and the Open Graph banner.
pub fn extra_jobs(palette: &Palette, seed: u64) -> VeloResult<Vec<Job>> {
    let mut jobs = Vec::new();

    // Video thumbnail: three silhouettes and a play button.
    {
        let (width, height) = (640u32, 360u32);
        let file = "video-placeholder.jpg";
        let mut shapes = Vec::new();
        let placements = [
            (150.0, 200.0, "accent-red"),
            (320.0, 180.0, "accent-blue"),
            (490.0, 200.0, "accent-gold"),
        ];
        for (x, y, role) in placements {
            shapes.extend(bike_shapes(
                Point::new(x, y),
                0.8,
                palette.get(role)?,
                palette,
            )?);
        }
        let center = Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0);
        let tri = (0..3)
            .map(|k| {
                let theta = f64::from(k) * 120.0_f64.to_radians();
                center + Vec2::new(theta.cos(), theta.sin()) * 40.0
            })
            .collect();
        shapes.push(Shape::Polygon {
            points: tri,
            color: palette.get("accent-red")?,
        });

        jobs.push(Job {
            file_name: file.to_owned(),
            width,
            height,
            background: Background::Gradient(Gradient::vertical(
                palette.get("bg-dark")?,
                Rgb8::from_hex("#1a1a2e")?,
            )),
            shapes,
            effects: Vec::new(),
            texts: Vec::new(),
            quality: 95,
            seed: job_seed(seed, file),
        });
    }

    // Open Graph banner: bike left, gold separator and corner marks.
    {
        let (width, height) = (1200u32, 630u32);
        let file = "og-image.jpg";
        let gold = palette.get("accent-gold")?;
        let mut shapes = bike_shapes(Point::new(300.0, 400.0), 1.2, gold, palette)?;
        shapes.push(Shape::Line {
            from: Point::new(600.0, 100.0),
            to: Point::new(600.0, 530.0),
            color: gold,
            width: 2.0,
        });
        shapes.push(Shape::Rect {
            rect: Rect::new(1100.0, 0.0, 1200.0, 10.0),
            color: gold,
        });
        shapes.push(Shape::Rect {
            rect: Rect::new(1150.0, 620.0, 1200.0, 630.0),
            color: gold,
        });

        jobs.push(Job {
            file_name: file.to_owned(),
            width,
            height,
            background: Background::Gradient(Gradient::vertical(
                Rgb8::from_hex("#050505")?,
                Rgb8::from_hex("#141419")?,
            )),
            shapes,
            effects: vec![Effect::Vignette {
                strength: 0.3,
                shape: VignetteShape::Frame,
                soften_px: width / 4,
            }],
            texts: Vec::new(),
            quality: 95,
            seed: job_seed(seed, file),
        });
    }

    Ok(jobs)
}
