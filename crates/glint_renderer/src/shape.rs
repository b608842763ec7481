//! The closed set of primitives and the scene object that pairs one with a
//! material.

use std::sync::Arc;

use crate::hit::{Hit, Hittable};
use crate::material::Material;
use crate::{Cuboid, Cylinder, Plane, Quad, Sphere, Triangle, TriangleMesh};
use glint_math::Ray;

/// Any primitive the renderer can intersect.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Cuboid(Cuboid),
    Triangle(Triangle),
    Quad(Quad),
    Cylinder(Cylinder),
    Mesh(TriangleMesh),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::Cuboid(_) => "box",
            Shape::Triangle(_) => "triangle",
            Shape::Quad(_) => "quad",
            Shape::Cylinder(_) => "cylinder",
            Shape::Mesh(_) => "mesh",
        }
    }
}

impl Hittable for Shape {
    fn intersect(&self, ray: &Ray) -> Hit {
        match self {
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Plane(p) => p.intersect(ray),
            Shape::Cuboid(c) => c.intersect(ray),
            Shape::Triangle(t) => t.intersect(ray),
            Shape::Quad(q) => q.intersect(ray),
            Shape::Cylinder(c) => c.intersect(ray),
            Shape::Mesh(m) => m.intersect(ray),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(value: $ty) -> Self {
                    Shape::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    Sphere(Sphere),
    Plane(Plane),
    Cuboid(Cuboid),
    Triangle(Triangle),
    Quad(Quad),
    Cylinder(Cylinder),
    Mesh(TriangleMesh),
);

/// A primitive placed in the scene with its material.
#[derive(Debug, Clone)]
pub struct Object {
    pub shape: Shape,
    pub material: Arc<Material>,
    /// Texture rotation about Y in radians
    pub angle: f32,
}

impl Object {
    pub fn new(shape: impl Into<Shape>, material: Arc<Material>) -> Self {
        Self {
            shape: shape.into(),
            material,
            angle: 0.0,
        }
    }

    /// Set the texture rotation in radians.
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }
}
