//! Scene description types.
//!
//! These mirror the on-disk JSON scene format one to one. They carry plain
//! arrays rather than renderer types so the file format stays independent of
//! the renderer; `glint_renderer::builder` turns a description into a
//! renderable scene.

use std::path::{Path, PathBuf};

use glint_math::Vec3;
use serde::Deserialize;

use crate::loader::{SceneError, SceneResult};

/// Image size used when a scene has a bare `Eye` instead of a `Camera`.
pub const DEFAULT_IMAGE_SIZE: [u32; 2] = [400, 400];

/// Render mode as named in scene files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderModeName {
    #[default]
    Phong,
    Zbuffer,
    Normal,
    Gooch,
}

/// Top-level scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDescription {
    #[serde(rename = "RenderMode", default)]
    pub render_mode: RenderModeName,

    #[serde(rename = "GoochParameters", default)]
    pub gooch: Option<GoochDescription>,

    /// Antialiasing factor; each pixel gets `aa * aa` samples
    #[serde(rename = "AA", default = "default_aa")]
    pub aa: u32,

    #[serde(rename = "Shadows", default)]
    pub shadows: bool,

    #[serde(rename = "Reflections", default)]
    pub reflections: bool,

    #[serde(rename = "MaxRecursionDepth", default = "default_max_depth")]
    pub max_depth: u32,

    #[serde(rename = "Camera", default)]
    pub camera: Option<CameraDescription>,

    /// Fixed eye for scenes without a camera block
    #[serde(rename = "Eye", default)]
    pub eye: Option<[f32; 3]>,

    #[serde(rename = "Objects", default)]
    pub objects: Vec<ObjectDescription>,

    #[serde(rename = "Lights", default)]
    pub lights: Vec<LightDescription>,

    /// Directory that relative asset paths resolve against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_aa() -> u32 {
    1
}

fn default_max_depth() -> u32 {
    2
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GoochDescription {
    pub b: f32,
    pub y: f32,
    pub alpha: f32,
    pub beta: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraDescription {
    pub eye: [f32; 3],
    pub center: [f32; 3],
    pub up: [f32; 3],
    #[serde(rename = "viewSize")]
    pub view_size: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightDescription {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaterialDescription {
    #[serde(default)]
    pub color: Option<[f32; 3]>,
    #[serde(default)]
    pub texture: Option<String>,
    pub ka: f32,
    pub kd: f32,
    pub ks: f32,
    pub n: f32,
}

/// One scene object: a shape, its material and an optional texture angle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,

    pub material: MaterialDescription,

    /// Texture rotation in degrees
    #[serde(default)]
    pub angle: Option<f32>,
}

impl ObjectDescription {
    /// Texture rotation in radians, 0 when absent.
    pub fn angle_radians(&self) -> f32 {
        self.angle.map_or(0.0, f32::to_radians)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDescription {
    Sphere {
        position: [f32; 3],
        radius: f32,
    },
    Plane {
        n: [f32; 3],
        d: f32,
    },
    Box {
        lower: [f32; 3],
        upper: [f32; 3],
    },
    Triangle {
        a: [f32; 3],
        b: [f32; 3],
        c: [f32; 3],
    },
    Quad {
        a: [f32; 3],
        b: [f32; 3],
        c: [f32; 3],
        d: [f32; 3],
    },
    Cylinder {
        a: [f32; 3],
        b: [f32; 3],
        radius: f32,
    },
    Mesh {
        path: String,
        #[serde(default)]
        position: [f32; 3],
        #[serde(default = "default_mesh_size")]
        size: f32,
    },
}

fn default_mesh_size() -> f32 {
    1.0
}

impl ShapeDescription {
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeDescription::Sphere { .. } => "sphere",
            ShapeDescription::Plane { .. } => "plane",
            ShapeDescription::Box { .. } => "box",
            ShapeDescription::Triangle { .. } => "triangle",
            ShapeDescription::Quad { .. } => "quad",
            ShapeDescription::Cylinder { .. } => "cylinder",
            ShapeDescription::Mesh { .. } => "mesh",
        }
    }
}

impl SceneDescription {
    /// Resolve an asset path against the scene file's directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        match &self.base_dir {
            Some(base) if p.is_relative() => base.join(p),
            _ => p.to_path_buf(),
        }
    }

    /// Eye position: the camera eye, else the bare `Eye`.
    pub fn eye_position(&self) -> Option<Vec3> {
        self.camera
            .as_ref()
            .map(|c| Vec3::from(c.eye))
            .or(self.eye.map(Vec3::from))
    }

    /// Output image size in pixels.
    pub fn image_size(&self) -> [u32; 2] {
        self.camera
            .as_ref()
            .map_or(DEFAULT_IMAGE_SIZE, |c| c.view_size)
    }

    /// Reject descriptions the renderer cannot draw meaningfully.
    pub fn validate(&self) -> SceneResult<()> {
        if self.aa == 0 {
            return Err(invalid("AA must be at least 1"));
        }

        if self.render_mode == RenderModeName::Gooch && self.gooch.is_none() {
            return Err(invalid("gooch render mode requires GoochParameters"));
        }

        match &self.camera {
            Some(camera) => validate_camera(camera)?,
            None if self.eye.is_none() => {
                return Err(invalid("scene needs either a Camera or an Eye"));
            }
            None => {}
        }

        for (i, object) in self.objects.iter().enumerate() {
            validate_shape(&object.shape)
                .map_err(|msg| invalid(format!("object {i} ({}): {msg}", object.shape.kind())))?;
            validate_material(&object.material)
                .map_err(|msg| invalid(format!("object {i} material: {msg}")))?;
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> SceneError {
    SceneError::Invalid(msg.into())
}

fn validate_camera(camera: &CameraDescription) -> SceneResult<()> {
    let look = Vec3::from(camera.center) - Vec3::from(camera.eye);
    let up = Vec3::from(camera.up);

    if look.length_squared() == 0.0 {
        return Err(invalid("camera eye and center coincide"));
    }
    if up.length_squared() == 0.0 {
        return Err(invalid("camera up vector is zero"));
    }
    if look.cross(up).length_squared() == 0.0 {
        return Err(invalid("camera up vector is parallel to the view direction"));
    }
    if camera.view_size[0] == 0 || camera.view_size[1] == 0 {
        return Err(invalid("camera viewSize must be non-zero"));
    }
    Ok(())
}

fn validate_shape(shape: &ShapeDescription) -> Result<(), String> {
    match shape {
        ShapeDescription::Sphere { radius, .. } if *radius <= 0.0 => {
            Err(format!("radius {radius} must be positive"))
        }
        ShapeDescription::Plane { n, .. } if Vec3::from(*n).length_squared() == 0.0 => {
            Err("normal is zero".to_string())
        }
        ShapeDescription::Box { lower, upper } => {
            let (lower, upper) = (Vec3::from(*lower), Vec3::from(*upper));
            if lower.cmpgt(upper).any() {
                Err(format!("lower corner {lower} exceeds upper corner {upper}"))
            } else {
                Ok(())
            }
        }
        ShapeDescription::Triangle { a, b, c } => {
            let (a, b, c) = (Vec3::from(*a), Vec3::from(*b), Vec3::from(*c));
            if (b - a).cross(c - a).length_squared() == 0.0 {
                Err("vertices are collinear".to_string())
            } else {
                Ok(())
            }
        }
        ShapeDescription::Quad { a, b, c, d } => {
            let (a, b, c, d) = (
                Vec3::from(*a),
                Vec3::from(*b),
                Vec3::from(*c),
                Vec3::from(*d),
            );
            if (b - a).cross(d - a).length_squared() == 0.0
                || (c - b).cross(d - c).length_squared() == 0.0
            {
                Err("corners are degenerate".to_string())
            } else {
                Ok(())
            }
        }
        ShapeDescription::Cylinder { radius, .. } if *radius <= 0.0 => {
            Err(format!("radius {radius} must be positive"))
        }
        ShapeDescription::Cylinder { a, b, .. } if a == b => {
            Err("axis has zero length".to_string())
        }
        ShapeDescription::Mesh { size, .. } if *size == 0.0 => {
            Err("size must be non-zero".to_string())
        }
        _ => Ok(()),
    }
}

fn validate_material(material: &MaterialDescription) -> Result<(), String> {
    if material.color.is_none() && material.texture.is_none() {
        return Err("needs a color or a texture".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "RenderMode": "phong",
        "AA": 2,
        "Shadows": true,
        "Camera": {
            "eye": [200, 200, 1000],
            "center": [200, 200, 0],
            "up": [0, 1, 0],
            "viewSize": [400, 300]
        },
        "Lights": [{"position": [-200, 600, 1500], "color": [1, 1, 1]}],
        "Objects": [
            {
                "type": "sphere",
                "position": [90, 320, 100],
                "radius": 50,
                "angle": 90,
                "material": {"color": [0, 0, 1], "ka": 0.2, "kd": 0.7, "ks": 0.5, "n": 64}
            },
            {
                "type": "mesh",
                "path": "bunny.off",
                "position": [0, 0, 0],
                "size": 200,
                "material": {"texture": "bunny.png", "ka": 0.2, "kd": 0.8, "ks": 0, "n": 1}
            }
        ]
    }"#;

    fn parse(json: &str) -> SceneDescription {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_scene() {
        let desc = parse(SCENE);
        assert_eq!(desc.render_mode, RenderModeName::Phong);
        assert_eq!(desc.aa, 2);
        assert!(desc.shadows);
        assert!(!desc.reflections);
        assert_eq!(desc.max_depth, 2);
        assert_eq!(desc.image_size(), [400, 300]);
        assert_eq!(desc.eye_position(), Some(Vec3::new(200.0, 200.0, 1000.0)));
        assert_eq!(desc.objects.len(), 2);
        assert_eq!(desc.lights.len(), 1);

        let sphere = &desc.objects[0];
        assert_eq!(sphere.shape.kind(), "sphere");
        assert!((sphere.angle_radians() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(desc.objects[1].material.texture.as_deref(), Some("bunny.png"));
        assert!(desc.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let desc = parse(r#"{"Eye": [200, 200, 1000]}"#);
        assert_eq!(desc.aa, 1);
        assert_eq!(desc.render_mode, RenderModeName::Phong);
        assert_eq!(desc.image_size(), DEFAULT_IMAGE_SIZE);
        assert!(desc.objects.is_empty());
        assert!(desc.validate().is_ok());
    }

    #[test]
    fn test_render_mode_names() {
        let desc = parse(r#"{"Eye": [0, 0, 1], "RenderMode": "zbuffer"}"#);
        assert_eq!(desc.render_mode, RenderModeName::Zbuffer);
        let desc = parse(r#"{"Eye": [0, 0, 1], "RenderMode": "gooch"}"#);
        assert_eq!(desc.render_mode, RenderModeName::Gooch);
        assert!(serde_json::from_str::<SceneDescription>(r#"{"RenderMode": "toon"}"#).is_err());
    }

    #[test]
    fn test_resolve_relative_paths() {
        let mut desc = parse(SCENE);
        desc.base_dir = Some(PathBuf::from("/scenes"));
        assert_eq!(desc.resolve("bunny.off"), PathBuf::from("/scenes/bunny.off"));
        assert_eq!(desc.resolve("/abs/tex.png"), PathBuf::from("/abs/tex.png"));
    }

    #[test]
    fn test_validate_rejects_missing_camera() {
        let desc = parse("{}");
        assert!(matches!(desc.validate(), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_aa() {
        let desc = parse(r#"{"Eye": [0, 0, 1], "AA": 0}"#);
        assert!(desc.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_gooch_without_parameters() {
        let desc = parse(r#"{"Eye": [0, 0, 1], "RenderMode": "gooch"}"#);
        assert!(desc.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        let material = r#""material": {"color": [1, 1, 1], "ka": 0, "kd": 1, "ks": 0, "n": 1}"#;
        let bad = [
            r#""type": "sphere", "position": [0, 0, 0], "radius": 0"#,
            r#""type": "plane", "n": [0, 0, 0], "d": 1"#,
            r#""type": "box", "lower": [1, 0, 0], "upper": [0, 1, 1]"#,
            r#""type": "triangle", "a": [0, 0, 0], "b": [1, 0, 0], "c": [2, 0, 0]"#,
            r#""type": "cylinder", "a": [0, 0, 0], "b": [0, 0, 0], "radius": 1"#,
        ];
        for shape in bad {
            let json = format!(r#"{{"Eye": [0, 0, 1], "Objects": [{{{shape}, {material}}}]}}"#);
            let desc = parse(&json);
            assert!(desc.validate().is_err(), "accepted {shape}");
        }
    }

    #[test]
    fn test_validate_rejects_material_without_color() {
        let json = r#"{"Eye": [0, 0, 1], "Objects": [{
            "type": "sphere", "position": [0, 0, 0], "radius": 1,
            "material": {"ka": 0, "kd": 1, "ks": 0, "n": 1}
        }]}"#;
        assert!(parse(json).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_parallel_up() {
        let json = r#"{"Camera": {
            "eye": [0, 0, 10], "center": [0, 0, 0], "up": [0, 0, 1], "viewSize": [10, 10]
        }}"#;
        assert!(parse(json).validate().is_err());
    }
}
