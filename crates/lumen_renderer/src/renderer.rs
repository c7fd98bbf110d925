//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Gamma correction
//! - Anti-aliasing via multi-sampling

use std::io;
use std::time::Instant;

use crate::color::samples_to_rgb;
use crate::output::PixelSink;
use crate::progress::Progress;
use crate::{Camera, Hittable};
use lumen_math::random::gen_f64;
use lumen_math::{Color, Interval, Ray};
use rand::RngCore;
use thiserror::Error;

/// Scattered rays start searching this far along to avoid self-intersection.
pub const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error writing image: {0}")]
    Io(#[from] io::Error),
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub image_width: u32,
    /// Width over height; derives the image height
    pub aspect_ratio: f64,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
}

impl RenderConfig {
    /// Image height derived from width and aspect ratio, at least 1.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f64 / self.aspect_ratio) as u32).max(1)
    }

    /// The camera matching this configuration's aspect ratio.
    pub fn camera(&self) -> Camera {
        Camera::with_aspect_ratio(self.aspect_ratio)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
        }
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and accumulating attenuation.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    // Bounce budget exhausted: no more light is gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(SHADOW_ACNE_EPSILON, f64::INFINITY)) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth - 1, rng),
        None => Color::ZERO,
    }
}

/// Compute sky gradient background: white at the bottom, blue at the top.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Sum `samples_per_pixel` jittered samples for pixel (i, j).
///
/// `j` counts scanlines from the bottom of the image.
fn sample_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let u_span = (config.image_width.max(2) - 1) as f64;
    let v_span = (config.image_height().max(2) - 1) as f64;

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let u = (i as f64 + gen_f64(rng)) / u_span;
        let v = (j as f64 + gen_f64(rng)) / v_span;
        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }
    pixel_color
}

/// Render a single pixel with multi-sampling, returning the averaged linear color.
///
/// `j` counts scanlines from the bottom of the image.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let sum = sample_pixel(camera, world, i, j, config, rng);
    sum / config.samples_per_pixel.max(1) as f64
}

/// Render the entire scene, top scanline first, into `sink`.
///
/// Reports one progress line per scanline and a final completion notice.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
    sink: &mut dyn PixelSink,
    progress: &mut dyn Progress,
) -> Result<(), RenderError> {
    let width = config.image_width;
    let height = config.image_height();
    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );

    let start = Instant::now();
    sink.begin(width, height)?;

    for j in (0..height).rev() {
        progress.report(&format!("Scanlines remaining: {}", j + 1));
        for i in 0..width {
            let sum = sample_pixel(camera, world, i, j, config, rng);
            sink.write_pixel(samples_to_rgb(sum, config.samples_per_pixel))?;
        }
    }

    sink.finish()?;
    progress.report("Done.");
    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{ImageBuffer, PpmWriter};
    use crate::progress::NoProgress;
    use crate::{HitRecord, HittableList, Lambertian, Material, Metal, ScatterResult, Sphere};
    use lumen_math::{Point3, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn ground_only() -> HittableList {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Point3::new(0.0, -100.5, -1.0),
            100.0,
            Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))),
        )));
        world
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            image_width: 16,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 4,
            max_depth: 5,
        }
    }

    #[test]
    fn test_sky_gradient_endpoints() {
        let up = sky_gradient(&Ray::new(Point3::ZERO, Vec3::new(0.0, 1.0, 0.0)));
        assert!((up - Color::new(0.5, 0.7, 1.0)).length() < 1e-12);

        let down = sky_gradient(&Ray::new(Point3::ZERO, Vec3::new(0.0, -1.0, 0.0)));
        assert!((down - Color::ONE).length() < 1e-12);

        // Direction length does not matter
        let long_up = sky_gradient(&Ray::new(Point3::ZERO, Vec3::new(0.0, 5.0, 0.0)));
        assert!((long_up - up).length() < 1e-12);
    }

    #[test]
    fn test_miss_returns_sky() {
        let world = HittableList::new();
        let mut rng = StdRng::seed_from_u64(42);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let color = ray_color(&ray, &world, 10, &mut rng);
        assert!((color - Color::new(0.5, 0.7, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_zero_depth_is_black() {
        let world = ground_only();
        let mut rng = StdRng::seed_from_u64(42);

        for direction in [Vec3::Y, Vec3::NEG_Y, Vec3::NEG_Z, Vec3::new(0.3, -0.2, -1.0)] {
            let ray = Ray::new(Point3::ZERO, direction);
            assert_eq!(ray_color(&ray, &world, 0, &mut rng), Color::ZERO);
            assert_eq!(ray_color(&ray, &HittableList::new(), 0, &mut rng), Color::ZERO);
        }
    }

    struct Absorber;

    impl Material for Absorber {
        fn scatter(&self, _ray_in: &Ray, _rec: &HitRecord<'_>, _rng: &mut dyn RngCore) -> Option<ScatterResult> {
            None
        }
    }

    #[test]
    fn test_absorbed_ray_is_black() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0, Arc::new(Absorber))));
        let mut rng = StdRng::seed_from_u64(42);

        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);
        assert_eq!(ray_color(&ray, &world, 10, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_mirror_bounce_sees_sky() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Point3::new(0.0, 0.0, -3.0),
            1.0,
            Arc::new(Metal::new(Color::new(0.5, 0.5, 0.5), 0.0)),
        )));
        let mut rng = StdRng::seed_from_u64(42);

        // Head-on hit reflects straight back toward +Z and escapes
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);
        let expected = 0.5 * sky_gradient(&Ray::new(Point3::ZERO, Vec3::Z));
        assert!((ray_color(&ray, &world, 2, &mut rng) - expected).length() < 1e-12);

        // The same hit on the last bounce gathers nothing
        assert_eq!(ray_color(&ray, &world, 1, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_diffuse_hit_attenuates() {
        let world = ground_only();
        let mut rng = StdRng::seed_from_u64(42);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, -1.0, -1.0));

        // Depth 2: one bounce then the sky (or black if it hits the ground again)
        let color = ray_color(&ray, &world, 2, &mut rng);
        assert!(color.max_element() <= 1.0);
        assert!(color.z == 0.0, "albedo blue channel is zero");
    }

    #[test]
    fn test_ground_pixel_darker_than_sky() {
        let config = RenderConfig {
            image_width: 16,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 1,
            max_depth: 1,
        };
        let camera = config.camera();
        let i = config.image_width / 2;
        // The center row looks along the horizon and grazes the ground's top,
        // so sample a row below it in the center column
        let j = config.image_height() / 4;

        let mut rng = StdRng::seed_from_u64(7);
        let ground = render_pixel(&camera, &ground_only(), i, j, &config, &mut rng);

        let mut rng = StdRng::seed_from_u64(7);
        let sky = render_pixel(&camera, &HittableList::new(), i, j, &config, &mut rng);

        assert!(sky.min_element() > 0.0);
        assert!(ground.x < sky.x && ground.y < sky.y && ground.z < sky.z);
    }

    #[test]
    fn test_render_ppm_layout() {
        let config = small_config();
        let world = ground_only();
        let mut rng = StdRng::seed_from_u64(42);
        let mut ppm = PpmWriter::new(Vec::new());
        let mut progress: Vec<String> = Vec::new();

        render(&config.camera(), &world, &config, &mut rng, &mut ppm, &mut progress).unwrap();

        let text = String::from_utf8(ppm.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(&lines[..3], &["P3", "16 9", "255"]);
        assert_eq!(lines.len(), 3 + 16 * 9);
        for line in &lines[3..] {
            let channels: Vec<u32> = line.split(' ').map(|c| c.parse().unwrap()).collect();
            assert_eq!(channels.len(), 3);
            assert!(channels.iter().all(|&c| c <= 255));
        }

        assert_eq!(progress.len(), 9 + 1);
        assert_eq!(progress[0], "Scanlines remaining: 9");
        assert_eq!(progress[8], "Scanlines remaining: 1");
        assert_eq!(progress[9], "Done.");
    }

    #[test]
    fn test_render_top_row_is_sky_bottom_row_is_ground() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(42);
        let mut buffer = ImageBuffer::new();

        render(&config.camera(), &ground_only(), &config, &mut rng, &mut buffer, &mut NoProgress).unwrap();

        let top = buffer.get(8, 0).unwrap();
        let bottom = buffer.get(8, 8).unwrap();
        // Sky is blue-ish; the yellow ground reflects no blue
        assert!(top[2] > 200);
        assert!(bottom[2] < top[2]);
    }

    #[test]
    fn test_render_is_deterministic_with_seed() {
        let config = small_config();
        let world = ground_only();

        let render_bytes = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ppm = PpmWriter::new(Vec::new());
            render(&config.camera(), &world, &config, &mut rng, &mut ppm, &mut NoProgress).unwrap();
            ppm.into_inner()
        };

        assert_eq!(render_bytes(1234), render_bytes(1234));
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.image_width, 400);
        assert_eq!(config.image_height(), 225);
        assert_eq!(config.samples_per_pixel, 100);
        assert_eq!(config.max_depth, 50);
    }

    #[test]
    fn test_single_pixel_image() {
        let config = RenderConfig {
            image_width: 1,
            aspect_ratio: 1.0,
            samples_per_pixel: 2,
            max_depth: 2,
        };
        let mut rng = StdRng::seed_from_u64(5);
        let mut buffer = ImageBuffer::new();

        render(&config.camera(), &HittableList::new(), &config, &mut rng, &mut buffer, &mut NoProgress).unwrap();

        assert_eq!(buffer.pixels.len(), 1);
    }
}
