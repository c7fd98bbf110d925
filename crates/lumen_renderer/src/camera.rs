//! Camera for ray generation.

use lumen_math::{Point3, Ray, Vec3};

/// Default viewport height in world units.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 2.0;

/// Default distance from the eye to the viewport.
pub const DEFAULT_FOCAL_LENGTH: f64 = 1.0;

/// Default 16:9 aspect ratio.
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Fixed pinhole camera at the world origin looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera with the given viewport shape.
    ///
    /// The viewport width is `aspect_ratio * viewport_height`.
    pub fn new(aspect_ratio: f64, viewport_height: f64, focal_length: f64) -> Self {
        let viewport_width = aspect_ratio * viewport_height;

        let origin = Point3::ZERO;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Camera with the default viewport for the given aspect ratio.
    pub fn with_aspect_ratio(aspect_ratio: f64) -> Self {
        Self::new(aspect_ratio, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_FOCAL_LENGTH)
    }

    /// Ray through normalized image-plane coordinates.
    ///
    /// `u` runs left to right and `v` bottom to top, both nominally in [0, 1].
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::with_aspect_ratio(DEFAULT_ASPECT_RATIO)
    }
}
