//! Infinite plane primitive.

use crate::hit::{Hit, Hittable};
use glint_math::{Ray, Vec3};

/// Denominators below this count as a ray parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// The plane `normal · p = offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f32,
}

impl Plane {
    /// Create a plane from any non-zero normal.
    ///
    /// The normal is normalized and the offset rescaled by the same factor,
    /// so the set of points on the plane does not change.
    pub fn new(normal: Vec3, offset: f32) -> Self {
        let length = normal.length();
        if length > 0.0 {
            Self {
                normal: normal / length,
                offset: offset / length,
            }
        } else {
            Self { normal, offset }
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Hit {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return Hit::MISS;
        }

        let t = (self.offset - self.normal.dot(ray.origin)) / denom;
        if !t.is_finite() || t < 0.0 {
            return Hit::MISS;
        }

        Hit::new(t, self.normal)
    }
}
