//! Random sampling helpers.
//!
//! Every function draws from an explicit generator so renders can be made
//! reproducible by seeding it.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Uniform `f64` in `[0, 1)`.
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform `f64` in `[min, max)`.
#[inline]
pub fn gen_f64_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// Vector with each component uniform in `[0, 1)`.
pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng))
}

/// Vector with each component uniform in `[min, max]`.
pub fn random_vec3_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        gen_f64_range(rng, min, max),
        gen_f64_range(rng, min, max),
        gen_f64_range(rng, min, max),
    )
}

/// Uniform point inside the unit ball, by rejection sampling.
///
/// About 52% of candidates from the enclosing cube are accepted.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        if p.length_squared() <= 1.0 {
            return p;
        }
    }
}

/// Random direction of unit length.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    random_in_unit_sphere(rng).normalize()
}

/// Point in the unit ball on the same side as `normal`.
pub fn random_in_hemisphere(rng: &mut dyn RngCore, normal: Vec3) -> Vec3 {
    let in_unit_sphere = random_in_unit_sphere(rng);
    if in_unit_sphere.dot(normal) > 0.0 {
        in_unit_sphere
    } else {
        -in_unit_sphere
    }
}
