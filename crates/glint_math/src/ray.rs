use crate::Vec3;

/// A ray in 3D space with an origin and a unit direction.
///
/// The direction is normalized on construction so the parameter `t` of any
/// intersection is a distance from the origin, comparable between shapes.
/// A zero direction stays zero; scenes report no hit for such a ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Create a ray starting slightly along `direction` from `origin`.
    ///
    /// Used for secondary rays so they do not immediately hit the surface
    /// they leave from.
    pub fn offset(origin: Vec3, direction: Vec3, bias: f32) -> Self {
        let direction = direction.normalize_or_zero();
        Self {
            origin: origin + direction * bias,
            direction,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Mirror the ray direction about `normal`.
    pub fn reflected_direction(&self, normal: Vec3) -> Vec3 {
        self.direction - 2.0 * self.direction.dot(normal) * normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation_normalizes() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(origin, Vec3::new(0.0, 3.0, 0.0));

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, Vec3::Y);
    }

    #[test]
    fn test_zero_direction_stays_zero() {
        let ray = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(ray.direction, Vec3::ZERO);
        assert_eq!(ray.at(10.0), Vec3::ONE);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_offset() {
        let ray = Ray::offset(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), 0.1);

        assert!((ray.origin - Vec3::new(0.0, 0.0, 0.1)).length() < 1e-6);
        assert_eq!(ray.direction, Vec3::Z);
    }

    #[test]
    fn test_reflected_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, -1.0, 0.0));
        let reflected = ray.reflected_direction(Vec3::Y);

        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((reflected - expected).length() < 1e-6);
        assert!((reflected.length() - 1.0).abs() < 1e-6);
    }
}
