//! Indexed triangle meshes.
//!
//! A mesh goes through an explicit lifecycle: it is loaded (from an OFF file
//! or built from arrays), transformed while it is an editable [`Mesh`], and
//! then consumed by [`Mesh::finalize`] which computes the shading normals and
//! returns an immutable [`FinalizedMesh`]. Transforms are only available
//! before finalization, so normals can never go stale.

use std::path::Path;

use glint_math::{Aabb, Vec3};
use thiserror::Error;

/// Errors that can occur while reading a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected OFF header, found {0:?}")]
    BadHeader(String),

    #[error("Unexpected end of file while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("Invalid number {0:?}")]
    BadNumber(String),

    #[error("Face {face} has {count} vertices, only triangles are supported")]
    NonTriangleFace { face: usize, count: usize },

    #[error("Face {face} references vertex {index}, mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}

pub type MeshResult<T> = Result<T, MeshError>;

/// An editable triangle mesh: vertex positions and index triplets.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangles as triplets of indices into `positions`
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Create a mesh from positions and faces, checking every index.
    pub fn new(positions: Vec<Vec3>, faces: Vec<[u32; 3]>) -> MeshResult<Self> {
        for (face, tri) in faces.iter().enumerate() {
            for &index in tri {
                if index as usize >= positions.len() {
                    return Err(MeshError::IndexOutOfRange {
                        face,
                        index,
                        vertex_count: positions.len(),
                    });
                }
            }
        }
        Ok(Self { positions, faces })
    }

    /// Read an OFF file from disk.
    pub fn load_off(path: impl AsRef<Path>) -> MeshResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mesh = Self::parse_off(&text)?;

        log::debug!(
            "Read mesh {}: {} vertices, {} triangles",
            path.display(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(mesh)
    }

    /// Parse OFF text.
    ///
    /// Layout: `OFF`, then `vertex_count face_count edge_count`, one `x y z`
    /// per vertex and one `3 i j k` per face. Anything after `#` on a line
    /// is ignored.
    pub fn parse_off(text: &str) -> MeshResult<Self> {
        let mut tokens = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace);

        let header = tokens.next().ok_or(MeshError::UnexpectedEof("header"))?;
        if header != "OFF" {
            return Err(MeshError::BadHeader(header.to_string()));
        }

        let vertex_count: usize = next_number(&mut tokens, "counts")?;
        let face_count: usize = next_number(&mut tokens, "counts")?;
        let _edge_count: usize = next_number(&mut tokens, "counts")?;

        let mut positions = Vec::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            let x = next_number(&mut tokens, "vertices")?;
            let y = next_number(&mut tokens, "vertices")?;
            let z = next_number(&mut tokens, "vertices")?;
            positions.push(Vec3::new(x, y, z));
        }

        let mut faces = Vec::with_capacity(face_count);
        for face in 0..face_count {
            let count: usize = next_number(&mut tokens, "faces")?;
            if count != 3 {
                return Err(MeshError::NonTriangleFace { face, count });
            }
            let i = next_number(&mut tokens, "faces")?;
            let j = next_number(&mut tokens, "faces")?;
            let k = next_number(&mut tokens, "faces")?;
            faces.push([i, j, k]);
        }

        Self::new(positions, faces)
    }

    /// Scale every vertex about the origin, then translate.
    pub fn scale_translate(&mut self, size: f32, position: Vec3) {
        for p in &mut self.positions {
            *p = *p * size + position;
        }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Compute normals and freeze the mesh.
    ///
    /// Vertex normals are the sum of adjacent face normals weighted by the
    /// corner angle at that vertex. Each face's shading normal is the
    /// normalized average of its three vertex normals, falling back to the
    /// geometric face normal when that average vanishes.
    pub fn finalize(self) -> FinalizedMesh {
        let mut vertex_normals = vec![Vec3::ZERO; self.positions.len()];
        let mut geometric = Vec::with_capacity(self.faces.len());
        let mut degenerate = 0usize;

        for tri in &self.faces {
            let p = tri.map(|i| self.positions[i as usize]);
            let n = (p[1] - p[0]).cross(p[2] - p[0]);
            let Some(n) = n.try_normalize() else {
                degenerate += 1;
                geometric.push(Vec3::ZERO);
                continue;
            };
            geometric.push(n);

            for corner in 0..3 {
                let here = p[corner];
                let e1 = p[(corner + 1) % 3] - here;
                let e2 = p[(corner + 2) % 3] - here;
                vertex_normals[tri[corner] as usize] += n * e1.angle_between(e2);
            }
        }

        if degenerate > 0 {
            log::warn!("Mesh has {} degenerate triangles", degenerate);
        }

        for n in &mut vertex_normals {
            *n = n.normalize_or_zero();
        }

        let face_normals = self
            .faces
            .iter()
            .zip(&geometric)
            .map(|(tri, &fallback)| {
                let sum: Vec3 = tri.iter().map(|&i| vertex_normals[i as usize]).sum();
                sum.try_normalize().unwrap_or(fallback)
            })
            .collect();

        let bounds = compute_bounds(&self.positions);

        FinalizedMesh {
            positions: self.positions,
            faces: self.faces,
            vertex_normals,
            face_normals,
            bounds,
        }
    }
}

/// A mesh whose normals have been computed. Read-only.
#[derive(Clone, Debug)]
pub struct FinalizedMesh {
    positions: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
    vertex_normals: Vec<Vec3>,
    face_normals: Vec<Vec3>,
    bounds: Aabb,
}

impl FinalizedMesh {
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    pub fn vertex_normals(&self) -> &[Vec3] {
        &self.vertex_normals
    }

    /// Per-face shading normals, parallel to `faces()`.
    pub fn face_normals(&self) -> &[Vec3] {
        &self.face_normals
    }

    /// Axis-aligned bounding box
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Corner positions of face `i`.
    pub fn triangle(&self, i: usize) -> [Vec3; 3] {
        self.faces[i].map(|v| self.positions[v as usize])
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }
}

fn next_number<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    section: &'static str,
) -> MeshResult<T> {
    let token = tokens.next().ok_or(MeshError::UnexpectedEof(section))?;
    token
        .parse()
        .map_err(|_| MeshError::BadNumber(token.to_string()))
}

/// Compute axis-aligned bounding box from positions.
fn compute_bounds(positions: &[Vec3]) -> Aabb {
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);

    for pos in positions {
        min = min.min(*pos);
        max = max.max(*pos);
    }

    Aabb::from_points(min, max)
}
