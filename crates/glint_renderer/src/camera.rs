//! Camera for ray generation.
//!
//! The image plane passes through `center`. One pixel spans `|up|` world
//! units along each image axis, so `up` sets both orientation and zoom.

use glint_math::{Ray, Vec3};

/// A pinhole camera looking from `eye` through an image plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    eye: Vec3,
    center: Vec3,
    /// One pixel step to the right
    x_dir: Vec3,
    /// One pixel step up
    y_dir: Vec3,
}

impl Camera {
    /// Camera at `eye` looking at `center` with `up` giving the vertical
    /// direction and pixel size.
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let pixel_size = up.length();
        let look = center - eye;
        let x_dir = look.cross(up).normalize_or_zero();
        let y_dir = x_dir.cross(look).normalize_or_zero();

        Self {
            eye,
            center,
            x_dir: x_dir * pixel_size,
            y_dir: y_dir * pixel_size,
        }
    }

    /// Camera whose pixel grid lies on the `z = 0` plane with pixel `(x, y)`
    /// at world `(x, height - y)`, seen from `eye`.
    pub fn fixed(eye: Vec3, width: u32, height: u32) -> Self {
        Self {
            eye,
            center: Vec3::new(width as f32 / 2.0, height as f32 / 2.0, 0.0),
            x_dir: Vec3::X,
            y_dir: Vec3::Y,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// World position of the image-plane point at pixel coordinates
    /// `(px, py)`, measured from the top-left corner of a `width x height`
    /// image.
    pub fn pixel_point(&self, width: u32, height: u32, px: f32, py: f32) -> Vec3 {
        let (w, h) = (width as f32, height as f32);
        let start = self.center - self.x_dir * (w / 2.0) - self.y_dir * (h / 2.0);
        start + self.x_dir * px + self.y_dir * (h - py)
    }

    /// Primary ray through pixel coordinates `(px, py)`.
    pub fn get_ray(&self, width: u32, height: u32, px: f32, py: f32) -> Ray {
        let target = self.pixel_point(width, height, px, py);
        Ray::new(self.eye, target - self.eye)
    }
}
