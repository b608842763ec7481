//! Surface materials, point lights and the local illumination terms.

use std::f32::consts::PI;
use std::fmt;
use std::sync::Arc;

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Anything a material can read a surface color from.
pub trait ColorLookup: Send + Sync {
    /// Color at texture coordinates `(u, v)` in `[0, 1)`.
    fn color_at(&self, u: f32, v: f32) -> Color;
}

impl ColorLookup for glint_core::Texture {
    fn color_at(&self, u: f32, v: f32) -> Color {
        glint_core::Texture::color_at(self, u, v)
    }
}

/// Phong material: ambient, diffuse and specular coefficients, a shininess
/// exponent and either a flat color or a texture.
#[derive(Clone)]
pub struct Material {
    pub color: Color,
    pub texture: Option<Arc<dyn ColorLookup>>,
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
    /// Shininess exponent
    pub n: f32,
}

impl Material {
    /// Create a flat-colored material.
    pub fn new(color: Color, ka: f32, kd: f32, ks: f32, n: f32) -> Self {
        Self {
            color,
            texture: None,
            ka,
            kd,
            ks,
            n,
        }
    }

    /// Use a texture instead of the flat color.
    pub fn with_texture(mut self, texture: Arc<dyn ColorLookup>) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Surface color at a point with unit normal `normal`.
    ///
    /// Textures are mapped spherically around the normal, rotated by `angle`
    /// radians about the Y axis.
    pub fn surface_color(&self, normal: Vec3, angle: f32) -> Color {
        match &self.texture {
            Some(texture) => {
                let (u, v) = sphere_uv(normal, angle);
                texture.color_at(u, v)
            }
            None => self.color,
        }
    }

    /// Diffuse and specular factors for one light, both non-negative.
    ///
    /// `to_light` and `to_eye` are unit vectors from the surface point.
    pub fn phong_terms(&self, normal: Vec3, to_light: Vec3, to_eye: Vec3) -> (f32, f32) {
        let l_dot_n = to_light.dot(normal);
        let reflected = (2.0 * l_dot_n * normal - to_light).normalize_or_zero();

        let diffuse = (self.kd * l_dot_n).max(0.0);
        let specular = (self.ks * reflected.dot(to_eye).max(0.0).powf(self.n)).max(0.0);

        (diffuse, specular)
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Material")
            .field("color", &self.color)
            .field("textured", &self.texture.is_some())
            .field("ka", &self.ka)
            .field("kd", &self.kd)
            .field("ks", &self.ks)
            .field("n", &self.n)
            .finish()
    }
}

/// Spherical texture coordinates from a unit normal, wrapped into `[0, 1)`.
pub fn sphere_uv(normal: Vec3, angle: f32) -> (f32, f32) {
    let u = 1.0 - (0.5 + (normal.z.atan2(normal.x) + angle) / (2.0 * PI));
    let v = 0.5 - normal.y.clamp(-1.0, 1.0).asin() / PI;
    (wrap(u), wrap(v))
}

fn wrap(x: f32) -> f32 {
    let w = x.rem_euclid(1.0);
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

/// Cool/warm tone parameters for Gooch shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoochParams {
    /// Blue of the cool tone
    pub b: f32,
    /// Yellow of the warm tone
    pub y: f32,
    /// Share of the diffuse color in the cool tone
    pub alpha: f32,
    /// Share of the diffuse color in the warm tone
    pub beta: f32,
}

impl Default for GoochParams {
    fn default() -> Self {
        Self {
            b: 0.55,
            y: 0.3,
            alpha: 0.25,
            beta: 0.5,
        }
    }
}

impl GoochParams {
    /// Cool-to-warm blend for one light.
    ///
    /// `kd_term` is the light color times the material color times `kd`.
    pub fn blend(&self, kd_term: Color, n_dot_l: f32) -> Color {
        let cool = Color::new(0.0, 0.0, self.b) + self.alpha * kd_term;
        let warm = Color::new(self.y, self.y, 0.0) + self.beta * kd_term;
        cool * (1.0 - n_dot_l) / 2.0 + warm * (1.0 + n_dot_l) / 2.0
    }
}
