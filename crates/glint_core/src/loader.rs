//! Scene file loading.
//!
//! Scene files are JSON documents deserialized into a
//! [`SceneDescription`](crate::description::SceneDescription) and validated.

use std::path::Path;

use thiserror::Error;

use crate::description::SceneDescription;
use crate::mesh::MeshError;
use crate::texture::TextureError;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),

    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),
}

/// Result type for loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene file.
///
/// Relative asset paths in the scene resolve against the file's directory.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let desc = load_scene("scenes/spheres.json")?;
/// println!("Loaded {} objects", desc.objects.len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;

    let mut desc = load_scene_from_str(&text)?;
    desc.base_dir = path.parent().map(Path::to_path_buf);

    log::info!(
        "Loaded scene {}: {} objects, {} lights",
        path.display(),
        desc.objects.len(),
        desc.lights.len()
    );

    Ok(desc)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneDescription> {
    let desc: SceneDescription = serde_json::from_str(json)?;
    desc.validate()?;
    Ok(desc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str() {
        let desc = load_scene_from_str(r#"{"Eye": [200, 200, 1000]}"#).unwrap();
        assert!(desc.base_dir.is_none());
        assert!(desc.lights.is_empty());
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let err = load_scene_from_str("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn test_load_rejects_unknown_shape() {
        let json = r#"{"Eye": [0, 0, 1], "Objects": [{
            "type": "torus", "material": {"color": [1, 1, 1], "ka": 0, "kd": 1, "ks": 0, "n": 1}
        }]}"#;
        assert!(matches!(load_scene_from_str(json), Err(SceneError::Json(_))));
    }

    #[test]
    fn test_load_runs_validation() {
        let err = load_scene_from_str(r#"{"Eye": [0, 0, 1], "AA": 0}"#).unwrap_err();
        assert!(matches!(err, SceneError::Invalid(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_scene("no/such/scene.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
