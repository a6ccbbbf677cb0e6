/// Unit tests for HeadlessRenderer and its resource types.

use crate::camera::Camera;
use crate::error::Error;
use crate::renderer::headless_renderer::*;
use crate::renderer::{
    DrawMode, GeometryDesc, PassTarget, RenderTargetDesc, Renderer, TargetUsage, TextureDesc,
    TextureFormat, WrapMode,
};
use crate::scene::{Color, Material, Node, Scene};

fn scene_with_meshes(renderer: &mut HeadlessRenderer, count: usize) -> Scene {
    let mut scene = Scene::new();
    let geometry = renderer
        .create_geometry(&GeometryDesc::Plane { width: 1.0, height: 1.0 })
        .unwrap();
    for i in 0..count {
        scene.add(Node::mesh(&format!("mesh_{}", i), geometry.clone(), Material::basic(Color::WHITE)));
    }
    scene
}

// ============================================================================
// Resource creation
// ============================================================================

#[test]
fn test_headless_defaults() {
    let renderer = HeadlessRenderer::new();
    assert_eq!(renderer.surface_size(), (800, 600));
    assert!(!renderer.shadow_maps_enabled());
    assert!(renderer.commands().is_empty());
    assert_eq!(renderer.stats(), Default::default());
}

#[test]
fn test_create_render_target_records_allocation() {
    let mut renderer = HeadlessRenderer::new();
    let target = renderer
        .create_render_target(&RenderTargetDesc::color("ping", 640, 480))
        .unwrap();

    assert_eq!(target.width(), 640);
    assert_eq!(target.height(), 480);
    assert_eq!(target.label(), "ping");
    assert_eq!(target.format(), TextureFormat::R16G16B16A16_SFLOAT);
    assert!(target.usage().contains(TargetUsage::SAMPLED));
    assert_eq!(renderer.render_target_allocations(), 1);
    assert_eq!(renderer.live_render_targets(), 1);
    assert_eq!(renderer.commands()[0], format!("create_render_target #{} 'ping' 640x480", target.id()));
}

#[test]
fn test_create_render_target_zero_size_fails() {
    let mut renderer = HeadlessRenderer::new();
    let result = renderer.create_render_target(&RenderTargetDesc::color("bad", 0, 480));
    assert!(matches!(result, Err(Error::InvalidResource(_))));
    assert_eq!(renderer.render_target_allocations(), 0);
}

#[test]
fn test_resource_ids_are_unique() {
    let mut renderer = HeadlessRenderer::new();
    let a = renderer.create_render_target(&RenderTargetDesc::color("a", 4, 4)).unwrap();
    let b = renderer.create_texture(&TextureDesc::from_path("b.png")).unwrap();
    let c = renderer.create_geometry(&GeometryDesc::Circle { radius: 1.0, segments: 8 }).unwrap();
    assert_ne!(a.id(), b.id());
    assert_ne!(b.id(), c.id());
    assert_ne!(a.id(), c.id());
}

#[test]
fn test_dropped_resources_are_no_longer_live() {
    let mut renderer = HeadlessRenderer::new();
    let target = renderer.create_render_target(&RenderTargetDesc::depth("depth", 8, 8)).unwrap();
    let texture = renderer
        .create_texture(&TextureDesc::from_path("albedo.png").with_wrap(WrapMode::Repeat, WrapMode::Repeat))
        .unwrap();
    assert_eq!(texture.wrap(), (WrapMode::Repeat, WrapMode::Repeat));
    assert_eq!(renderer.stats().live_resources(), 2);

    drop(target);
    assert_eq!(renderer.live_render_targets(), 0);
    assert_eq!(renderer.live_textures(), 1);

    drop(texture);
    assert_eq!(renderer.stats().live_resources(), 0);
    assert_eq!(renderer.render_target_allocations(), 1);
}

#[test]
fn test_memory_budget_exhaustion() {
    // 16x16 RGBA16F = 2048 bytes
    let mut renderer = HeadlessRenderer::new().with_memory_budget(3000);
    let first = renderer.create_render_target(&RenderTargetDesc::color("a", 16, 16)).unwrap();
    assert_eq!(renderer.stats().gpu_memory_used, 2048);

    let second = renderer.create_render_target(&RenderTargetDesc::color("b", 16, 16));
    assert!(matches!(second, Err(Error::OutOfMemory)));

    drop(first);
    assert!(renderer.create_render_target(&RenderTargetDesc::color("c", 16, 16)).is_ok());
}

// ============================================================================
// Draw recording
// ============================================================================

#[test]
fn test_draw_scene_counts_visible_meshes() {
    let mut renderer = HeadlessRenderer::new();
    let scene = scene_with_meshes(&mut renderer, 3);
    let camera = Camera::default();
    renderer.clear_commands();

    renderer.draw_scene(&scene, &camera, DrawMode::Color, PassTarget::Screen).unwrap();

    let stats = renderer.stats();
    assert_eq!(stats.scene_draws, 1);
    assert_eq!(stats.draw_calls, 3);
    assert_eq!(renderer.commands(), &["draw_scene color -> screen".to_string()]);
}

#[test]
fn test_draw_effect_records_inputs_and_output() {
    let mut renderer = HeadlessRenderer::new();
    let input = renderer.create_render_target(&RenderTargetDesc::color("in", 4, 4)).unwrap();
    let output = renderer.create_render_target(&RenderTargetDesc::color("out", 4, 4)).unwrap();
    renderer.clear_commands();

    renderer
        .draw_effect("copy", &[input.as_ref()], &[0u8; 16], PassTarget::Offscreen(output.as_ref()))
        .unwrap();

    assert_eq!(renderer.stats().effect_draws, 1);
    assert_eq!(
        renderer.commands()[0],
        format!("draw_effect copy [#{}] 16B -> #{} 'out'", input.id(), output.id())
    );
    assert_eq!(renderer.commands_matching("draw_effect").len(), 1);
    assert!(renderer.commands_matching("draw_scene").is_empty());
}

#[test]
fn test_resize_and_shadow_toggle() {
    let mut renderer = HeadlessRenderer::new();
    renderer.resize(1920, 1080);
    renderer.set_shadow_maps_enabled(true);

    assert_eq!(renderer.surface_size(), (1920, 1080));
    assert!(renderer.shadow_maps_enabled());
    assert_eq!(renderer.commands_matching("resize_surface"), vec!["resize_surface 1920x1080"]);
}
