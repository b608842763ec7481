//! Glint Core - scene descriptions and assets for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene descriptions**: serde types for JSON scene files plus validation
//! - **Meshes**: OFF loading, transforms and normal computation
//! - **Textures**: image decoding, bilinear lookup and a shared cache
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let desc = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     desc.objects.len(),
//!     desc.lights.len());
//! ```

pub mod description;
pub mod loader;
pub mod mesh;
pub mod texture;

// Re-export commonly used types
pub use description::{RenderModeName, SceneDescription, ShapeDescription};
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use mesh::{FinalizedMesh, Mesh, MeshError};
pub use texture::{Texture, TextureCache, TextureError};
