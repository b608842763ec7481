//! Turn a loaded scene description into a renderable scene.

use std::collections::HashMap;
use std::sync::Arc;

use glint_core::description::{
    CameraDescription, GoochDescription, MaterialDescription, ObjectDescription,
};
use glint_core::{
    Mesh, RenderModeName, SceneDescription, SceneError, SceneResult, ShapeDescription, TextureCache,
};
use glint_math::Vec3;

use crate::{
    Camera, Color, ColorLookup, Cuboid, Cylinder, GoochParams, ImageBuffer, Light, Material,
    Object, Plane, Quad, RenderConfig, RenderMode, Scene, Shape, Sphere, Triangle, TriangleMesh,
};

/// Everything needed to render one scene description.
#[derive(Debug, Clone)]
pub struct RenderSetup {
    pub scene: Scene,
    pub camera: Camera,
    pub config: RenderConfig,
    pub width: u32,
    pub height: u32,
}

impl RenderSetup {
    /// Render into a freshly allocated image.
    pub fn render(&self) -> ImageBuffer {
        let mut image = ImageBuffer::new(self.width, self.height);
        self.scene.render(&mut image, &self.camera, &self.config);
        image
    }
}

/// Build the scene, camera and render settings for a description.
///
/// Meshes and textures are read from disk here; relative paths resolve
/// against the description's base directory.
pub fn build(desc: &SceneDescription) -> SceneResult<RenderSetup> {
    let [width, height] = desc.image_size();
    let eye = desc
        .eye_position()
        .ok_or_else(|| SceneError::Invalid("scene needs either a Camera or an Eye".into()))?;

    let camera = match &desc.camera {
        Some(camera) => camera_from(camera),
        None => Camera::fixed(eye, width, height),
    };

    let mut builder = SceneBuilder::new(desc);
    let mut scene = Scene::new();
    scene.set_eye(eye);

    for object in &desc.objects {
        scene.add_object(builder.object(object)?);
    }
    for light in &desc.lights {
        scene.add_light(Light::new(light.position.into(), light.color.into()));
    }

    log::debug!(
        "Built scene: {} objects, {} lights, {} textures",
        scene.objects().len(),
        scene.lights().len(),
        builder.textures.len()
    );

    Ok(RenderSetup {
        scene,
        camera,
        config: config_from(desc),
        width,
        height,
    })
}

/// Render settings for a description.
///
/// Depth and normal buffers are single-sample and never reflect.
pub fn config_from(desc: &SceneDescription) -> RenderConfig {
    let mode = match desc.render_mode {
        RenderModeName::Phong => RenderMode::Phong,
        RenderModeName::Zbuffer => RenderMode::Depth,
        RenderModeName::Normal => RenderMode::Normal,
        RenderModeName::Gooch => RenderMode::Gooch,
    };

    let mut config = RenderConfig::default()
        .with_mode(mode)
        .with_shadows(desc.shadows)
        .with_reflections(desc.reflections)
        .with_antialias(desc.aa)
        .with_max_depth(desc.max_depth);

    if let Some(gooch) = desc.gooch {
        config = config.with_gooch(gooch_from(gooch));
    }

    if matches!(mode, RenderMode::Depth | RenderMode::Normal) {
        config.reflections = false;
        config.antialias = 1;
    }

    config
}

fn camera_from(camera: &CameraDescription) -> Camera {
    Camera::new(camera.eye.into(), camera.center.into(), camera.up.into())
}

fn gooch_from(gooch: GoochDescription) -> GoochParams {
    GoochParams {
        b: gooch.b,
        y: gooch.y,
        alpha: gooch.alpha,
        beta: gooch.beta,
    }
}

/// Loads shared assets while objects are built.
struct SceneBuilder<'a> {
    desc: &'a SceneDescription,
    textures: TextureCache,
    meshes: HashMap<(String, [u32; 4]), TriangleMesh>,
}

impl<'a> SceneBuilder<'a> {
    fn new(desc: &'a SceneDescription) -> Self {
        let textures = match &desc.base_dir {
            Some(base) => TextureCache::with_base_dir(base),
            None => TextureCache::new(),
        };
        Self {
            desc,
            textures,
            meshes: HashMap::new(),
        }
    }

    fn object(&mut self, object: &ObjectDescription) -> SceneResult<Object> {
        let material = Arc::new(self.material(&object.material)?);
        let shape: Shape = match &object.shape {
            ShapeDescription::Sphere { position, radius } => {
                Sphere::new((*position).into(), *radius).into()
            }
            ShapeDescription::Plane { n, d } => Plane::new((*n).into(), *d).into(),
            ShapeDescription::Box { lower, upper } => {
                Cuboid::new((*lower).into(), (*upper).into()).into()
            }
            ShapeDescription::Triangle { a, b, c } => {
                Triangle::new((*a).into(), (*b).into(), (*c).into()).into()
            }
            ShapeDescription::Quad { a, b, c, d } => {
                Quad::new((*a).into(), (*b).into(), (*c).into(), (*d).into()).into()
            }
            ShapeDescription::Cylinder { a, b, radius } => {
                Cylinder::new((*a).into(), (*b).into(), *radius).into()
            }
            ShapeDescription::Mesh {
                path,
                position,
                size,
            } => self.mesh(path, (*position).into(), *size)?.into(),
        };

        Ok(Object::new(shape, material).with_angle(object.angle_radians()))
    }

    fn material(&mut self, material: &MaterialDescription) -> SceneResult<Material> {
        let color: Color = material.color.map_or(Color::ONE, Vec3::from);
        let mut result = Material::new(color, material.ka, material.kd, material.ks, material.n);

        if let Some(path) = &material.texture {
            let texture: Arc<dyn ColorLookup> = self.textures.load(path)?;
            result = result.with_texture(texture);
        }

        Ok(result)
    }

    /// Load, place and finalize a mesh. The same file placed identically is
    /// loaded once.
    fn mesh(&mut self, path: &str, position: Vec3, size: f32) -> SceneResult<TriangleMesh> {
        let key = (
            path.to_string(),
            [
                position.x.to_bits(),
                position.y.to_bits(),
                position.z.to_bits(),
                size.to_bits(),
            ],
        );
        if let Some(mesh) = self.meshes.get(&key) {
            return Ok(mesh.clone());
        }

        let mut mesh = Mesh::load_off(self.desc.resolve(path))?;
        mesh.scale_translate(size, position);
        let mesh = mesh.finalize();
        let bounds = mesh.bounds();
        log::debug!(
            "Placed mesh {}: {} triangles within {} .. {}",
            path,
            mesh.triangle_count(),
            bounds.min(),
            bounds.max()
        );
        let mesh = TriangleMesh::new(mesh);

        self.meshes.insert(key, mesh.clone());
        Ok(mesh)
    }
}
