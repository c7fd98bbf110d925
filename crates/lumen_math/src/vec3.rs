//! Vector operations the path tracer needs beyond what glam provides.

use crate::Vec3;

/// Components with an absolute value below this count as zero.
const NEAR_ZERO: f64 = 1e-8;

/// Extension methods for [`Vec3`].
pub trait Vec3Ext {
    /// True if every component is within `1e-8` of zero.
    fn is_near_zero(&self) -> bool;

    /// Mirror this vector about a unit-length normal.
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn is_near_zero(&self) -> bool {
        self.abs().max_element() < NEAR_ZERO
    }

    #[inline]
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - 2.0 * self.dot(normal) * normal
    }
}
