//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use lumen_math::{Interval, Point3, Ray, Vec3};

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Point3,
    /// Surface normal at intersection (unit length, always points against the ray)
    pub normal: Vec3,
    /// Material of the object that was hit
    pub material: &'a dyn Material,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record, orienting the normal against the ray.
    ///
    /// `outward_normal` must be unit length and point out of the surface.
    pub fn with_face_normal(
        ray: &Ray,
        t: f64,
        outward_normal: Vec3,
        material: &'a dyn Material,
    ) -> Self {
        // If the ray and normal point in the same direction, we're inside
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p: ray.at(t),
            normal,
            material,
            t,
            front_face,
        }
    }
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("p", &self.p)
            .field("normal", &self.normal)
            .field("t", &self.t)
            .field("front_face", &self.front_face)
            .finish_non_exhaustive()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object with `t` strictly inside `ray_t`.
    ///
    /// Returns the nearest such intersection, or `None` on a miss.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

/// A list of hittable objects, searched linearly.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl std::fmt::Debug for HittableList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HittableList")
            .field("len", &self.objects.len())
            .finish_non_exhaustive()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest: Option<HitRecord<'a>> = None;

        for object in &self.objects {
            // Later objects only count if they beat the closest hit so far
            let interval = closest.map_or(ray_t, |rec| ray_t.with_max(rec.t));
            if let Some(rec) = object.hit(ray, interval) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};
    use lumen_math::Color;
    use std::sync::Arc;

    fn gray() -> Arc<dyn Material> {
        Arc::new(Lambertian::new(Color::splat(0.5)))
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);

        assert!(world.is_empty());
        assert!(world.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_closest_hit_wins() {
        let material = gray();
        let mut world = HittableList::new();
        // Far sphere added first so the scan has to replace it
        world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, material.clone())));
        world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -2.0), 1.5, material)));
        assert_eq!(world.len(), 2);

        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);
        let rec = world
            .hit(&ray, Interval::new(0.001, f64::INFINITY))
            .expect("ray should hit");

        assert!((rec.t - 0.5).abs() < 1e-9);
        assert!((rec.p - Point3::new(0.0, 0.0, -0.5)).length() < 1e-9);
    }

    #[test]
    fn test_closest_hit_independent_of_order() {
        let material = gray();
        let near = || Box::new(Sphere::new(Point3::new(0.0, 0.0, -2.0), 1.5, material.clone()));
        let far = || Box::new(Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, material.clone()));

        let mut a = HittableList::new();
        a.add(near());
        a.add(far());
        let mut b = HittableList::new();
        b.add(far());
        b.add(near());

        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);
        let range = Interval::new(0.001, f64::INFINITY);
        assert_eq!(a.hit(&ray, range).map(|r| r.t), b.hit(&ray, range).map(|r| r.t));
    }

    #[test]
    fn test_hit_outside_range_ignored() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0, gray())));

        let ray = Ray::new(Point3::ZERO, Vec3::NEG_Z);
        assert!(world.hit(&ray, Interval::new(0.001, 3.0)).is_none());
    }

    #[test]
    fn test_debug_reports_len() {
        let mut world = HittableList::default();
        world.add(Box::new(Sphere::new(Point3::ZERO, 1.0, gray())));
        assert!(format!("{world:?}").contains("len: 1"));
    }
}
