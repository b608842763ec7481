//! Hit record and the Hittable trait for ray-object intersection.

use glint_math::{Ray, Vec3};

/// Result of intersecting one ray with one primitive.
///
/// A miss is an ordinary value: `t` is `+inf` so it loses every nearest-hit
/// comparison, and `normal` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray to the closest valid intersection
    pub t: f32,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
}

impl Hit {
    /// The no-hit sentinel.
    pub const MISS: Hit = Hit {
        t: f32::INFINITY,
        normal: Vec3::ZERO,
    };

    pub fn new(t: f32, normal: Vec3) -> Self {
        Self { t, normal }
    }

    pub fn is_miss(&self) -> bool {
        !self.t.is_finite()
    }

    /// The hit with the smaller `t`, preferring `self` on ties.
    pub fn nearer(self, other: Hit) -> Hit {
        if other.t < self.t {
            other
        } else {
            self
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Intersect the ray with this object.
    ///
    /// Returns the closest intersection at `t >= 0`, or [`Hit::MISS`].
    fn intersect(&self, ray: &Ray) -> Hit;
}

/// Orient `normal` against the ray direction.
pub(crate) fn face_toward(normal: Vec3, ray: &Ray) -> Vec3 {
    if normal.dot(ray.direction) > 0.0 {
        -normal
    } else {
        normal
    }
}
