//! Sphere primitive for ray tracing.

use crate::hit::{Hit, Hittable};
use glint_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    /// An origin inside the sphere reports `t = 0`.
    fn intersect(&self, ray: &Ray) -> Hit {
        let m = ray.origin - self.center;
        let b = m.dot(ray.direction);
        let c = m.length_squared() - self.radius * self.radius;

        // Origin outside and pointing away
        if c > 0.0 && b > 0.0 {
            return Hit::MISS;
        }

        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return Hit::MISS;
        }

        let t = (-b - discriminant.sqrt()).max(0.0);
        let normal = (ray.at(t) - self.center)
            .try_normalize()
            .unwrap_or(-ray.direction);

        Hit::new(t, normal)
    }
}
