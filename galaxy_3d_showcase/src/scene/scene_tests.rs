use std::sync::Arc;
use glam::{Vec3, Vec4};
use crate::error::Error;
use crate::renderer::{Geometry, GeometryDesc, HeadlessRenderer, Renderer, TextureDesc};
use crate::scene::*;

fn plane(renderer: &mut HeadlessRenderer) -> Arc<dyn Geometry> {
    renderer
        .create_geometry(&GeometryDesc::Plane { width: 1.0, height: 1.0 })
        .unwrap()
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn test_new_scene_is_empty() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
    assert!(scene.roots().is_empty());
    assert!(matches!(scene.background(), Background::None));
    assert!(scene.environment().is_none());
}

#[test]
fn test_add_and_find() {
    let mut scene = Scene::new();
    let sun = scene.add(Node::group("sun"));
    let earth = scene.add_child(sun, Node::group("earth")).unwrap();

    assert_eq!(scene.len(), 2);
    assert_eq!(scene.roots(), &[sun]);
    assert_eq!(scene.find("earth"), Some(earth));
    assert_eq!(scene.node(earth).unwrap().parent(), Some(sun));
    assert_eq!(scene.node(sun).unwrap().children(), &[earth]);
    assert!(scene.find("mars").is_none());
}

#[test]
fn test_add_child_to_missing_parent_fails() {
    let mut scene = Scene::new();
    let parent = scene.add(Node::group("parent"));
    scene.remove(parent);

    let result = scene.add_child(parent, Node::group("orphan"));
    assert!(matches!(result, Err(Error::InvalidResource(_))));
    assert!(scene.is_empty());
}

#[test]
fn test_remove_is_recursive() {
    let mut scene = Scene::new();
    let root = scene.add(Node::group("root"));
    let child = scene.add_child(root, Node::group("child")).unwrap();
    scene.add_child(child, Node::group("grandchild")).unwrap();
    let other = scene.add(Node::group("other"));

    assert_eq!(scene.remove(root), 3);
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.roots(), &[other]);
    assert!(!scene.contains(child));
    assert_eq!(scene.remove(root), 0);
}

#[test]
fn test_remove_detaches_from_parent() {
    let mut scene = Scene::new();
    let root = scene.add(Node::group("root"));
    let child = scene.add_child(root, Node::group("child")).unwrap();

    scene.remove(child);
    assert!(scene.node(root).unwrap().children().is_empty());
}

#[test]
fn test_clear_resets_everything() {
    let mut renderer = HeadlessRenderer::new();
    let mut scene = Scene::new();
    scene.add(Node::group("a"));
    scene.transform_mut().rotate_y(1.0);
    scene.set_background(Background::Color(Color::from_hex(0x020202)));
    let env = renderer.create_texture(&TextureDesc::from_path("env.hdr")).unwrap();
    scene.set_environment(Some(env));

    scene.clear();

    assert!(scene.is_empty());
    assert_eq!(*scene.transform(), Transform::IDENTITY);
    assert!(matches!(scene.background(), Background::None));
    assert!(scene.environment().is_none());
    assert_eq!(renderer.live_textures(), 0);
}

// ============================================================================
// Transforms and visibility
// ============================================================================

#[test]
fn test_world_matrix_composes_parents_and_scene() {
    let mut scene = Scene::new();
    let parent = scene.add(Node::group("parent").with_position(Vec3::new(1.0, 0.0, 0.0)));
    let child = scene
        .add_child(parent, Node::group("child").with_position(Vec3::new(0.0, 2.0, 0.0)))
        .unwrap();

    let world = scene.world_matrix(child).unwrap();
    let origin = world * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((origin.truncate() - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-5);

    scene.transform_mut().rotate_z(std::f32::consts::FRAC_PI_2);
    let rotated = scene.world_matrix(child).unwrap() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((rotated.truncate() - Vec3::new(-2.0, 1.0, 0.0)).length() < 1e-5);
}

#[test]
fn test_visible_mesh_count_honors_ancestors() {
    let mut renderer = HeadlessRenderer::new();
    let geometry = plane(&mut renderer);
    let mut scene = Scene::new();

    let group = scene.add(Node::group("group"));
    scene
        .add_child(group, Node::mesh("a", geometry.clone(), Material::basic(Color::WHITE)))
        .unwrap();
    scene.add(Node::mesh("b", geometry.clone(), Material::basic(Color::WHITE)));
    scene.add(Node::mesh("hidden", geometry, Material::shadow(0.5)).with_visible(false));
    scene.add(Node::point_light("light", PointLight::new(Color::WHITE, 10.0, 0.0, 0.0)));

    assert_eq!(scene.visible_mesh_count(), 2);

    scene.node_mut(group).unwrap().visible = false;
    assert_eq!(scene.visible_mesh_count(), 1);
}

// ============================================================================
// Nodes and materials
// ============================================================================

#[test]
fn test_node_content_accessors() {
    let mut renderer = HeadlessRenderer::new();
    let mut mesh = Node::mesh("sphere", plane(&mut renderer), Material::physical(Color::WHITE, 0.2, 0.4));
    assert_eq!(mesh.material().unwrap().pbr_factors(), Some((0.2, 0.4)));
    mesh.material_mut().unwrap().color = Color::from_hex(0xff0000);
    assert!(mesh.directional_light_mut().is_none());

    let mut light = Node::directional_light(
        "sun",
        DirectionalLight::new(Color::from_hex(0xd7d3fd), 0.0).with_target(Vec3::new(8.0, -8.0, -12.0)),
    );
    light.directional_light_mut().unwrap().intensity = 1.0;
    assert!(light.material().is_none());
    assert!(light.point_light_mut().is_none());
}

#[test]
fn test_node_builders() {
    let node = Node::group("g")
        .with_position(Vec3::new(1.0, 1.0, 0.0))
        .with_scale(0.01)
        .with_shadows(true, true)
        .with_visible(false);
    assert_eq!(node.transform.position, Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(node.transform.scale, Vec3::splat(0.01));
    assert!(node.cast_shadow && node.receive_shadow);
    assert!(!node.visible);
}

#[test]
fn test_color_hex_conversions() {
    let color = Color::from_hex(0x9b7653);
    assert_eq!(color.to_hex(), 0x9b7653);
    assert_eq!(Color::from_css("#0020FF"), Some(Color::from_hex(0x0020ff)));
    assert_eq!(Color::from_css("0020FF"), None);
    assert_eq!(Color::from_css("#12345"), None);
    assert_eq!(Color::from(0xffffff), Color::WHITE);
}

#[test]
fn test_animation_mixer_loops() {
    let mut mixer = AnimationMixer::new();
    mixer.update(1.0);
    assert_eq!(mixer.time(), 0.0);

    mixer.play(AnimationClip::new("Take 001", 2.0));
    mixer.update(1.5);
    assert!((mixer.time() - 1.5).abs() < 1e-6);
    mixer.update(1.0);
    assert!((mixer.time() - 0.5).abs() < 1e-6);
    mixer.update(-1.0);
    assert!((mixer.time() - 1.5).abs() < 1e-6);
    assert_eq!(mixer.clip().unwrap().name, "Take 001");
}
