//! Finite capped cylinder primitive.
//!
//! Segment-against-cylinder test in the axis frame (Ericson, Real-Time
//! Collision Detection 5.3.7) adapted to a half-infinite ray.

use crate::hit::{Hit, Hittable};
use glint_math::{Interval, Ray, Vec3};

/// A solid cylinder between the endpoint centers `a` and `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    a: Vec3,
    b: Vec3,
    radius: f32,
}

impl Cylinder {
    pub fn new(a: Vec3, b: Vec3, radius: f32) -> Self {
        Self {
            a,
            b,
            radius: radius.max(0.0),
        }
    }

    pub fn endpoints(&self) -> (Vec3, Vec3) {
        (self.a, self.b)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Outward normal of the tube at `p`.
    fn body_normal(&self, p: Vec3, ray: &Ray) -> Vec3 {
        let d = self.b - self.a;
        let on_axis = self.a + d * ((p - self.a).dot(d) / d.dot(d));
        (p - on_axis).try_normalize().unwrap_or(-ray.direction)
    }
}

impl Hittable for Cylinder {
    fn intersect(&self, ray: &Ray) -> Hit {
        let d = self.b - self.a;
        let m = ray.origin - self.a;
        let n = ray.direction;

        let md = m.dot(d);
        let nd = n.dot(d);
        let dd = d.dot(d);
        let nn = n.dot(n);

        if dd == 0.0 || nn == 0.0 {
            return Hit::MISS;
        }

        // Outside an endcap plane and heading away from it
        if (md < 0.0 && nd <= 0.0) || (md > dd && nd >= 0.0) {
            return Hit::MISS;
        }

        let axis = d / dd.sqrt();
        let span = Interval::new(0.0, dd);
        let mn = m.dot(n);
        let k = m.dot(m) - self.radius * self.radius;
        let a_q = dd * nn - nd * nd;
        let c = dd * k - md * md;

        if a_q.abs() < 1e-6 * dd * nn {
            // Parallel to the axis: only the caps can be hit
            if c > 0.0 {
                return Hit::MISS;
            }
            return if md < 0.0 {
                Hit::new(-md / nd, -axis)
            } else if md > dd {
                Hit::new((dd - md) / nd, axis)
            } else {
                Hit::new(0.0, -n)
            };
        }

        let b_q = dd * mn - nd * md;
        let discriminant = b_q * b_q - a_q * c;
        if discriminant < 0.0 {
            return Hit::MISS;
        }

        let root = discriminant.sqrt();
        if (-b_q + root) / a_q < 0.0 {
            return Hit::MISS;
        }
        let t = ((-b_q - root) / a_q).max(0.0);

        let s = md + t * nd;
        if s < span.min {
            // Beyond the `a` cap: accept the cap plane if inside the disc
            if nd <= 0.0 {
                return Hit::MISS;
            }
            let t = -md / nd;
            if k + t * (2.0 * mn + t * nn) <= 0.0 {
                return Hit::new(t, -axis);
            }
            return Hit::MISS;
        }
        if s > span.max {
            if nd >= 0.0 {
                return Hit::MISS;
            }
            let t = (dd - md) / nd;
            if k + dd - 2.0 * md + t * (2.0 * (mn - nd) + t * nn) <= 0.0 {
                return Hit::new(t, axis);
            }
            return Hit::MISS;
        }

        Hit::new(t, self.body_normal(ray.at(t), ray))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit radius, axis along Y from -1 to 1.
    fn column() -> Cylinder {
        Cylinder::new(Vec3::NEG_Y, Vec3::Y, 1.0)
    }

    #[test]
    fn test_body_hit() {
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);

        let hit = column().intersect(&ray);
        assert!((hit.t - 4.0).abs() < 0.001);
        assert!((hit.normal - Vec3::X).length() < 0.001);
    }

    #[test]
    fn test_body_hit_off_center() {
        let ray = Ray::new(Vec3::new(5.0, 0.5, 0.0), Vec3::NEG_X);

        let hit = column().intersect(&ray);
        assert!((hit.t - 4.0).abs() < 0.001);
        // Normal is radial, no axial component
        assert!(hit.normal.y.abs() < 0.001);
    }

    #[test]
    fn test_top_cap_parallel() {
        let ray = Ray::new(Vec3::new(0.5, 5.0, 0.0), Vec3::NEG_Y);

        let hit = column().intersect(&ray);
        assert!((hit.t - 4.0).abs() < 0.001);
        assert!((hit.normal - Vec3::Y).length() < 0.001);
    }

    #[test]
    fn test_bottom_cap_parallel() {
        let ray = Ray::new(Vec3::new(0.0, -4.0, 0.0), Vec3::Y);

        let hit = column().intersect(&ray);
        assert!((hit.t - 3.0).abs() < 0.001);
        assert!((hit.normal - Vec3::NEG_Y).length() < 0.001);
    }

    #[test]
    fn test_cap_hit_oblique() {
        let ray = Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.2, -1.0, 0.0));

        let hit = column().intersect(&ray);
        assert!(!hit.is_miss());
        assert!((hit.normal - Vec3::Y).length() < 0.001);
        assert!((ray.at(hit.t).y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_parallel_outside_radius_misses() {
        let ray = Ray::new(Vec3::new(2.0, 5.0, 0.0), Vec3::NEG_Y);
        assert!(column().intersect(&ray).is_miss());
    }

    #[test]
    fn test_passes_above_misses() {
        let ray = Ray::new(Vec3::new(5.0, 1.5, 0.0), Vec3::NEG_X);
        assert!(column().intersect(&ray).is_miss());
    }

    #[test]
    fn test_pointing_away_misses() {
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        assert!(column().intersect(&ray).is_miss());

        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(column().intersect(&ray).is_miss());
    }

    #[test]
    fn test_interior_origin() {
        let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::Z);

        let hit = column().intersect(&ray);
        assert_eq!(hit.t, 0.0);
        assert!((hit.normal.length() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_direction_misses() {
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO);
        assert!(column().intersect(&ray).is_miss());
    }

    #[test]
    fn test_degenerate_axis_misses() {
        let cylinder = Cylinder::new(Vec3::ZERO, Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);
        assert!(cylinder.intersect(&ray).is_miss());
    }
}
