//! Axis-aligned box primitive.

use crate::hit::{Hit, Hittable};
use glint_math::{Aabb, Ray, Vec3};

/// A solid axis-aligned box.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    bounds: Aabb,
}

impl Cuboid {
    /// Create a box from two opposite corners.
    pub fn new(lower: Vec3, upper: Vec3) -> Self {
        Self {
            bounds: Aabb::from_points(lower, upper),
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }
}

impl Hittable for Cuboid {
    /// The face normal comes from the slab that bounded the hit. A ray
    /// starting inside reports the face it leaves through.
    fn intersect(&self, ray: &Ray) -> Hit {
        self.bounds
            .slab(ray)
            .and_then(|slab| slab.visible_face())
            .map_or(Hit::MISS, |(t, face)| Hit::new(t, face.normal()))
    }
}
