use crate::{Interval, Ray, Vec3};

/// Direction components smaller than this are treated as parallel to a slab.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Axis-aligned box as one closed interval per axis.
///
/// Never padded: a box built from two corners is exactly the solid between
/// them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

/// One of the six faces of an [`Aabb`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Face {
    /// 0=X, 1=Y, 2=Z
    pub axis: usize,
    /// True for the face at the interval max.
    pub positive: bool,
}

impl Face {
    /// Outward unit normal of the face.
    pub fn normal(&self) -> Vec3 {
        let sign = if self.positive { 1.0 } else { -1.0 };
        let mut n = Vec3::ZERO;
        n[self.axis] = sign;
        n
    }
}

/// Result of a slab test: the forward parameter span inside the box.
///
/// `entry` is `None` when the ray starts inside the box (`t_min` is then 0).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SlabHit {
    pub t_min: f32,
    pub t_max: f32,
    pub entry: Option<Face>,
    pub exit: Option<Face>,
}

impl SlabHit {
    /// The face the ray is considered to hit first.
    ///
    /// The entry face for outside origins, otherwise the exit face.
    pub fn visible_face(&self) -> Option<(f32, Face)> {
        match (self.entry, self.exit) {
            (Some(face), _) => Some((self.t_min, face)),
            (None, Some(face)) => Some((self.t_max, face)),
            (None, None) => None,
        }
    }
}

impl Aabb {
    /// Create an AABB from two corner points in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let x = Interval::new(a.x.min(b.x), a.x.max(b.x));
        let y = Interval::new(a.y.min(b.y), a.y.max(b.y));
        let z = Interval::new(a.z.min(b.z), a.z.max(b.z));
        Self { x, y, z }
    }

    /// Interval along axis `n` (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x.min, self.y.min, self.z.min)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// True if `p` lies inside or on the box.
    pub fn contains(&self, p: Vec3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }

    /// Slab test over the forward part of the ray, `[0, +inf)`.
    ///
    /// Tracks which face bounds the span on each side. An axis the ray runs
    /// parallel to rejects unless the origin lies within that slab.
    pub fn slab(&self, r: &Ray) -> Option<SlabHit> {
        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;
        let mut entry = None;
        let mut exit = None;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let origin = r.origin[axis];
            let dir = r.direction[axis];

            if dir.abs() < PARALLEL_EPSILON {
                if !slab.contains(origin) {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t_near = (slab.min - origin) * inv;
            let mut t_far = (slab.max - origin) * inv;
            let mut near_face = Face { axis, positive: false };
            let mut far_face = Face { axis, positive: true };
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
                std::mem::swap(&mut near_face, &mut far_face);
            }

            if t_near > t_min {
                t_min = t_near;
                entry = Some(near_face);
            }
            if t_far < t_max {
                t_max = t_far;
                exit = Some(far_face);
            }
            if t_min > t_max {
                return None;
            }
        }

        Some(SlabHit {
            t_min,
            t_max,
            entry,
            exit,
        })
    }
}
