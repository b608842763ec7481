//! Scene container and the recursive trace pipeline.
//!
//! Nearest-hit resolution is a linear scan over the object list. Shading is
//! Phong (or Gooch) per light with optional hard shadow tests; mirror
//! reflections recurse up to the configured depth and are combined as
//! values, nothing in the scene changes while rendering.

use std::time::Instant;

use crate::camera::Camera;
use crate::hit::{Hit, Hittable};
use crate::material::{Color, Light};
use crate::renderer::{clamp_color, sample_offsets, ImageBuffer, RenderConfig, RenderMode};
use crate::shape::Object;
use glint_math::{Interval, Ray, Vec3};

/// Factor applied to a light's contribution when it is blocked.
pub const SHADOW_FACTOR: f32 = 0.2;

/// Normals facing the viewer less than this are drawn as Gooch outlines.
const SILHOUETTE_THRESHOLD: f32 = 0.2;

/// Objects, lights and a fixed eye point.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Light>,
    eye: Vec3,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Set the eye used by [`Scene::render_fixed`].
    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// The closest object along the ray. Ties go to the earlier object.
    pub fn closest_hit(&self, ray: &Ray) -> Option<(&Object, Hit)> {
        if ray.direction == Vec3::ZERO {
            return None;
        }

        let mut closest: Option<(&Object, Hit)> = None;
        for object in &self.objects {
            let hit = object.shape.intersect(ray);
            if hit.is_miss() {
                continue;
            }
            if closest.map_or(true, |(_, best)| hit.t < best.t) {
                closest = Some((object, hit));
            }
        }
        closest
    }

    /// True when any object lies on the ray from `point` toward the light,
    /// including objects past the light.
    fn occluded(&self, point: Vec3, light: &Light, bias: f32) -> bool {
        let to_light = light.position - point;
        if to_light.length() <= bias {
            return false;
        }

        let shadow_ray = Ray::offset(point, to_light, bias);
        self.objects
            .iter()
            .any(|object| !object.shape.intersect(&shadow_ray).is_miss())
    }

    /// Color seen along `ray`, `depth` reflections deep.
    pub fn trace(&self, ray: &Ray, config: &RenderConfig, depth: u32) -> Color {
        let Some((object, hit)) = self.closest_hit(ray) else {
            return config.background;
        };

        match config.mode {
            RenderMode::Depth => {
                let range = config.depth_range;
                Color::splat(Interval::UNIT.clamp(1.0 - range.fraction(hit.t)))
            }
            RenderMode::Normal => (hit.normal + Vec3::ONE) / 2.0,
            RenderMode::Phong | RenderMode::Gooch => {
                let direct = self.shade(ray, object, &hit, config);

                if config.reflections && depth < config.max_depth {
                    let point = ray.at(hit.t);
                    let reflected =
                        Ray::offset(point, ray.reflected_direction(hit.normal), config.bias);
                    direct + object.material.ks * self.trace(&reflected, config, depth + 1)
                } else {
                    direct
                }
            }
        }
    }

    /// Direct illumination at a hit.
    fn shade(&self, ray: &Ray, object: &Object, hit: &Hit, config: &RenderConfig) -> Color {
        let material = &object.material;
        let point = ray.at(hit.t);
        let normal = hit.normal;
        let to_eye = -ray.direction;
        let gooch = config.mode == RenderMode::Gooch;

        if gooch && normal.dot(to_eye) < SILHOUETTE_THRESHOLD {
            return Color::ZERO;
        }

        let surface = material.surface_color(normal, object.angle);
        let mut intensity = Color::ZERO;

        for light in &self.lights {
            let to_light = (light.position - point).normalize_or_zero();
            let (diffuse, specular) = material.phong_terms(normal, to_light, to_eye);

            let mut contribution = if gooch {
                let kd_term = light.color * material.color * material.kd;
                config.gooch.blend(kd_term, normal.dot(to_light)) + Color::splat(specular)
            } else {
                light.color * (material.ka + diffuse + specular)
            };

            if config.shadows && self.occluded(point, light, config.bias) {
                contribution *= SHADOW_FACTOR;
            }

            intensity += contribution;
        }

        match (gooch, &material.texture) {
            (true, None) => intensity,
            _ => surface * intensity,
        }
    }

    /// Average of the clamped samples inside pixel `(x, y)`.
    pub fn render_pixel(
        &self,
        camera: &Camera,
        (width, height): (u32, u32),
        x: u32,
        y: u32,
        config: &RenderConfig,
    ) -> Color {
        let offsets = sample_offsets(config.antialias);
        let mut total = Color::ZERO;

        for &oy in &offsets {
            for &ox in &offsets {
                let ray = camera.get_ray(width, height, x as f32 + ox, y as f32 + oy);
                total += clamp_color(self.trace(&ray, config, 0));
            }
        }

        total / (offsets.len() * offsets.len()) as f32
    }

    /// Render every pixel of `image` through `camera`.
    pub fn render(&self, image: &mut ImageBuffer, camera: &Camera, config: &RenderConfig) {
        let (width, height) = (image.width, image.height);
        let start = Instant::now();

        log::info!(
            "Rendering {}x{}: {} objects, {} lights, {:?}, {}x AA",
            width,
            height,
            self.objects.len(),
            self.lights.len(),
            config.mode,
            config.antialias.max(1)
        );

        for y in 0..height {
            for x in 0..width {
                let color = self.render_pixel(camera, (width, height), x, y, config);
                image.set(x, y, color);
            }
        }

        log::info!("Render finished in {:.2?}", start.elapsed());
    }

    /// Render from the scene eye through the pixel grid on `z = 0`.
    pub fn render_fixed(&self, image: &mut ImageBuffer, config: &RenderConfig) {
        let camera = Camera::fixed(self.eye, image.width, image.height);
        self.render(image, &camera, config);
    }
}
