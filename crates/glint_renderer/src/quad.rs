//! Planar quadrilateral primitive.

use crate::hit::{face_toward, Hit, Hittable};
use crate::triangle::intersect_triangle;
use glint_math::{Ray, Vec3};

/// A convex planar quad with corners `a, b, c, d` in order.
///
/// Tested as the two triangles `(a, b, c)` and `(a, c, d)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    a: Vec3,
    b: Vec3,
    c: Vec3,
    d: Vec3,
    normal: Vec3,
}

impl Quad {
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        let normal = (b - a).cross(d - a).normalize_or_zero();
        Self { a, b, c, d, normal }
    }

    pub fn corners(&self) -> [Vec3; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Quad {
    fn intersect(&self, ray: &Ray) -> Hit {
        let normal = face_toward(self.normal, ray);
        let to_hit = |t: Option<f32>| t.map_or(Hit::MISS, |t| Hit::new(t, normal));

        let first = to_hit(intersect_triangle(self.a, self.b, self.c, ray));
        let second = to_hit(intersect_triangle(self.a, self.c, self.d, ray));
        first.nearer(second)
    }
}
