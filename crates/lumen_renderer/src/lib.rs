//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres with diffuse and metal materials.
//! Rendering is single-threaded; every random draw comes from a
//! caller-supplied generator so renders can be reproduced from a seed.

mod camera;
pub mod color;
mod hittable;
mod material;
pub mod output;
pub mod progress;
mod renderer;
pub mod scene;
mod sphere;

pub use camera::{Camera, DEFAULT_ASPECT_RATIO, DEFAULT_FOCAL_LENGTH, DEFAULT_VIEWPORT_HEIGHT};
pub use color::{color_string, color_string_samples, color_to_rgb, linear_to_gamma, samples_to_rgb};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Lambertian, Material, Metal, ScatterResult};
pub use output::{ImageBuffer, OutputError, PixelSink, PpmWriter};
pub use progress::{LogProgress, NoProgress, Progress};
pub use renderer::{
    ray_color, render, render_pixel, sky_gradient, RenderConfig, RenderError, SHADOW_ACNE_EPSILON,
};
pub use scene::{MaterialDesc, SceneDesc, SceneError, SphereDesc};
pub use sphere::Sphere;

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
