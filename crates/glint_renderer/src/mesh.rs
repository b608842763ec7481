//! Triangle mesh primitive.

use std::sync::Arc;

use crate::hit::{face_toward, Hit, Hittable};
use crate::triangle::intersect_triangle;
use glint_core::FinalizedMesh;
use glint_math::Ray;

/// A finalized mesh placed in the scene.
///
/// Every triangle is tested; the closest one wins and reports its
/// precomputed shading normal.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    mesh: Arc<FinalizedMesh>,
}

impl TriangleMesh {
    pub fn new(mesh: impl Into<Arc<FinalizedMesh>>) -> Self {
        Self { mesh: mesh.into() }
    }

    pub fn mesh(&self) -> &FinalizedMesh {
        &self.mesh
    }
}

impl Hittable for TriangleMesh {
    fn intersect(&self, ray: &Ray) -> Hit {
        let mut closest: Option<(f32, usize)> = None;

        for i in 0..self.mesh.triangle_count() {
            let [a, b, c] = self.mesh.triangle(i);
            if let Some(t) = intersect_triangle(a, b, c, ray) {
                if closest.map_or(true, |(best, _)| t < best) {
                    closest = Some((t, i));
                }
            }
        }

        match closest {
            Some((t, i)) => Hit::new(t, face_toward(self.mesh.face_normals()[i], ray)),
            None => Hit::MISS,
        }
    }
}
