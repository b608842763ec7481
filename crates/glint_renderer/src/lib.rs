//! Glint Renderer - Whitted-style CPU ray tracing.
//!
//! Rays are intersected against a flat list of primitives; the nearest hit
//! is shaded with Phong or Gooch lighting, optional shadow rays and bounded
//! mirror reflections. Depth and normal buffers are available as debug
//! render modes.

mod builder;
mod camera;
mod cuboid;
mod cylinder;
mod hit;
mod material;
mod mesh;
mod plane;
mod quad;
mod renderer;
mod scene;
mod shape;
mod sphere;
mod triangle;

pub use builder::{build, config_from, RenderSetup};
pub use camera::Camera;
pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use hit::{Hit, Hittable};
pub use material::{sphere_uv, Color, ColorLookup, GoochParams, Light, Material};
pub use mesh::TriangleMesh;
pub use plane::Plane;
pub use quad::Quad;
pub use renderer::{
    clamp_color, color_to_rgb, sample_offsets, ImageBuffer, RenderConfig, RenderMode,
};
pub use scene::{Scene, SHADOW_FACTOR};
pub use shape::{Object, Shape};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Aabb, Interval, Ray, Vec3};
