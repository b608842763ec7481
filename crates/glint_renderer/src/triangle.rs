//! Triangle primitive for ray tracing.
//!
//! Uses the scalar triple product test: the ray meets the triangle when it
//! passes on the same side of all three edges. The test is two-sided.

use crate::hit::{face_toward, Hit, Hittable};
use glint_math::{Ray, Vec3};

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    a: Vec3,
    b: Vec3,
    c: Vec3,
    /// Pre-computed face normal (unit length, zero when degenerate)
    normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        Self { a, b, c, normal }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    /// Face normal following the `a, b, c` winding.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Hit {
        match intersect_triangle(self.a, self.b, self.c, ray) {
            Some(t) => Hit::new(t, face_toward(self.normal, ray)),
            None => Hit::MISS,
        }
    }
}

/// Distance to the triangle `a, b, c` along the ray, if it is hit.
///
/// Shared by quads and meshes so all triangles are tested identically.
pub(crate) fn intersect_triangle(a: Vec3, b: Vec3, c: Vec3, ray: &Ray) -> Option<f32> {
    let d = ray.direction;
    let pa = a - ray.origin;
    let pb = b - ray.origin;
    let pc = c - ray.origin;

    let u = d.dot(pc.cross(pb));
    let v = d.dot(pa.cross(pc));
    let w = d.dot(pb.cross(pa));

    let same_sign = (u >= 0.0 && v >= 0.0 && w >= 0.0) || (u <= 0.0 && v <= 0.0 && w <= 0.0);
    if !same_sign {
        return None;
    }

    let sum = u + v + w;
    if sum == 0.0 {
        return None;
    }

    let (u, v, w) = (u / sum, v / sum, w / sum);
    let to_point = u * pa + v * pb + w * pc;

    // The test works on the whole line; drop hits behind the origin.
    if to_point.dot(d) < 0.0 {
        return None;
    }

    Some(to_point.length())
}
