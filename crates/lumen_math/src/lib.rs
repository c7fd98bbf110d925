// Re-export glam for convenience
pub use glam::DVec3;

// Lumen math types
mod interval;
pub mod random;
mod ray;
mod vec3;

pub use interval::Interval;
pub use ray::Ray;
pub use vec3::Vec3Ext;

/// A direction or displacement in world space.
pub type Vec3 = DVec3;

/// A position in world space.
pub type Point3 = DVec3;

/// Linear RGB color. Components may exceed 1.0 before tone mapping.
pub type Color = DVec3;
