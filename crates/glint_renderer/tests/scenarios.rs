//! End-to-end scenes: description in, pixels out.

use std::sync::Arc;

use glint_core::{load_scene, load_scene_from_str};
use glint_renderer::{
    build, Camera, Color, Cuboid, Hittable, ImageBuffer, Light, Material, Object, Plane, Ray,
    RenderConfig, Scene, Sphere, Vec3, SHADOW_FACTOR,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ambient_only(color: Color) -> Arc<Material> {
    Arc::new(Material::new(color, 1.0, 0.0, 0.0, 1.0))
}

#[test]
fn unit_sphere_and_box_reference_hits() {
    let sphere = Sphere::new(Vec3::ZERO, 1.0);
    let hit = sphere.intersect(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z));
    assert!((hit.t - 4.0).abs() < 1e-4);
    assert!((hit.normal - Vec3::Z).length() < 1e-4);

    let cuboid = Cuboid::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let hit = cuboid.intersect(&Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X));
    assert!((hit.t - 4.0).abs() < 1e-4);
    assert!((hit.normal - Vec3::X).length() < 1e-4);
}

#[test]
fn overlapping_primitives_resolve_to_nearest() {
    let mut scene = Scene::new();
    scene.add_object(Object::new(
        Cuboid::new(Vec3::new(-2.0, -2.0, -3.0), Vec3::new(2.0, 2.0, -1.0)),
        ambient_only(Color::Y),
    ));
    // Sphere pokes out of the front face of the box
    scene.add_object(Object::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5), ambient_only(Color::X)));

    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
    let (object, hit) = scene.closest_hit(&ray).unwrap();
    assert_eq!(object.material.color, Color::X);
    assert!((hit.t - 10.5).abs() < 1e-4);

    // Off to the side only the box is there
    let ray = Ray::new(Vec3::new(1.5, 0.0, 10.0), Vec3::NEG_Z);
    let (object, hit) = scene.closest_hit(&ray).unwrap();
    assert_eq!(object.material.color, Color::Y);
    assert!((hit.t - 11.0).abs() < 1e-4);
}

#[test]
fn antialiasing_does_not_change_flat_plane() {
    init_logging();
    let mut scene = Scene::new();
    scene.add_object(Object::new(
        Plane::new(Vec3::Z, 0.0),
        Arc::new(Material::new(Color::new(0.2, 0.6, 0.4), 0.5, 0.0, 0.0, 1.0)),
    ));
    scene.add_light(Light::new(Vec3::new(0.0, 0.0, 50.0), Color::ONE));

    let camera = Camera::new(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO, Vec3::new(0.0, 0.1, 0.0));
    let mut single = ImageBuffer::new(8, 8);
    let mut four = ImageBuffer::new(8, 8);
    scene.render(&mut single, &camera, &RenderConfig::default());
    scene.render(&mut four, &camera, &RenderConfig::default().with_antialias(4));

    for (a, b) in single.pixels.iter().zip(&four.pixels) {
        assert!((*a - *b).length() < 1e-5);
    }
    assert!((single.average() - Color::new(0.1, 0.3, 0.2)).length() < 1e-4);
}

#[test]
fn fully_occluded_light_is_dampened() {
    let json = r#"{
        "Eye": [0, 0, 10],
        "Shadows": true,
        "Lights": [{"position": [0, 10, 0], "color": [1, 1, 1]}],
        "Objects": [
            {"type": "plane", "n": [0, 1, 0], "d": 0,
             "material": {"color": [1, 1, 1], "ka": 0, "kd": 1, "ks": 0, "n": 1}},
            {"type": "box", "lower": [-1, 4, -1], "upper": [1, 5, 1],
             "material": {"color": [1, 1, 1], "ka": 0, "kd": 1, "ks": 0, "n": 1}}
        ]
    }"#;
    let desc = load_scene_from_str(json).unwrap();
    let setup = build(&desc).unwrap();

    let ray = Ray::new(Vec3::new(0.0, 2.0, 2.0), Vec3::new(0.0, -1.0, -1.0));
    let shadowed = setup.scene.trace(&ray, &setup.config, 0);
    let lit = setup.scene.trace(&ray, &setup.config.clone().with_shadows(false), 0);

    assert!((lit - Color::ONE).length() < 1e-4);
    assert!((shadowed - Color::splat(SHADOW_FACTOR)).length() < 1e-4);
}

#[test]
fn mirror_box_recursion_stays_finite() {
    init_logging();
    let json = r#"{
        "Camera": {"eye": [0, 0, 0], "center": [0, 0, -1], "up": [0, 0.01, 0], "viewSize": [6, 6]},
        "Reflections": true,
        "MaxRecursionDepth": 3,
        "Lights": [{"position": [0, 0, 0], "color": [1, 1, 1]}],
        "Objects": [
            {"type": "plane", "n": [0, 0, 1], "d": -2,
             "material": {"color": [1, 1, 1], "ka": 0.1, "kd": 0.5, "ks": 1, "n": 8}},
            {"type": "plane", "n": [0, 0, -1], "d": -2,
             "material": {"color": [1, 1, 1], "ka": 0.1, "kd": 0.5, "ks": 1, "n": 8}}
        ]
    }"#;
    let desc = load_scene_from_str(json).unwrap();
    let setup = build(&desc).unwrap();
    assert_eq!(setup.config.max_depth, 3);

    let image = setup.render();
    for color in &image.pixels {
        assert!(color.is_finite());
        assert!(color.min_element() >= 0.0 && color.max_element() <= 1.0);
    }
}

#[test]
fn fixed_eye_scene_renders_sphere_in_the_middle() {
    let json = r#"{
        "Eye": [50, 50, 500],
        "Lights": [{"position": [50, 50, 500], "color": [1, 1, 1]}],
        "Objects": [
            {"type": "sphere", "position": [50, 50, 0], "radius": 20,
             "material": {"color": [0, 0, 1], "ka": 0.1, "kd": 0.9, "ks": 0, "n": 1}}
        ]
    }"#;
    let desc = load_scene_from_str(json).unwrap();
    let setup = build(&desc).unwrap();

    let mut image = ImageBuffer::new(100, 100);
    setup.scene.render_fixed(&mut image, &setup.config);

    let center = image.get(50, 50);
    assert!(center.z > 0.9);
    assert_eq!(image.get(2, 2), Color::ZERO);
}

#[test]
fn scene_file_with_mesh_and_relative_paths() {
    init_logging();
    let dir = std::env::temp_dir().join(format!("glint-scenario-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    // Unit square facing +Z as two triangles
    std::fs::write(
        dir.join("square.off"),
        "OFF\n4 2 0\n-1 -1 0\n1 -1 0\n1 1 0\n-1 1 0\n3 0 1 2\n3 0 2 3\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("scene.json"),
        r#"{
            "Camera": {"eye": [0, 0, 10], "center": [0, 0, 0], "up": [0, 0.5, 0], "viewSize": [8, 8]},
            "Lights": [{"position": [0, 0, 10], "color": [1, 1, 1]}],
            "Objects": [
                {"type": "mesh", "path": "square.off", "position": [0, 0, -1], "size": 3,
                 "material": {"color": [1, 1, 0], "ka": 0, "kd": 1, "ks": 0, "n": 1}}
            ]
        }"#,
    )
    .unwrap();

    let desc = load_scene(dir.join("scene.json")).unwrap();
    let setup = build(&desc).unwrap();
    let image = setup.render();

    // The scaled square covers the whole 4x4 world-unit view
    for color in &image.pixels {
        assert!(color.x > 0.9 && color.y > 0.9 && color.z == 0.0);
    }

    std::fs::remove_dir_all(&dir).ok();
}
