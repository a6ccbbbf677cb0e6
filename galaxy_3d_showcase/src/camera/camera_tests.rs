use glam::{Mat4, Vec3, Vec4};
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_default() {
    let camera = Camera::default();
    assert_eq!(camera.fov_y(), 50.0);
    assert_eq!(camera.aspect(), 1.0);
    assert_eq!(camera.near(), 0.1);
    assert_eq!(camera.far(), 2000.0);
    assert_eq!(camera.target(), Vec3::ZERO);
    assert_eq!(camera.up(), Vec3::Y);
}

#[test]
fn test_camera_new() {
    let camera = Camera::new(75.0, 16.0 / 9.0, 1.0, 100.0);
    assert_eq!(camera.fov_y(), 75.0);
    assert_eq!(camera.aspect(), 16.0 / 9.0);
    assert_eq!(camera.near(), 1.0);
    assert_eq!(camera.far(), 100.0);
}

// ============================================================================
// Viewport / aspect
// ============================================================================

#[test]
fn test_set_viewport_updates_aspect() {
    let mut camera = Camera::default();
    camera.set_viewport(800, 600);
    assert!((camera.aspect() - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn test_set_viewport_zero_height_keeps_aspect() {
    let mut camera = Camera::default();
    camera.set_viewport(1600, 900);
    let before = camera.aspect();
    camera.set_viewport(1600, 0);
    assert_eq!(camera.aspect(), before);
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_view_matrix_matches_look_at() {
    let mut camera = Camera::default();
    camera.set_position(Vec3::new(0.0, 2.0, 5.0));
    camera.look_at(Vec3::new(0.0, 1.0, 0.0));

    let expected = Mat4::look_at_rh(Vec3::new(0.0, 2.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
    assert_eq!(camera.view_matrix(), expected);
}

#[test]
fn test_view_projection_matrix() {
    let mut camera = Camera::new(45.0, 16.0 / 9.0, 0.1, 100.0);
    camera.set_position(Vec3::new(0.0, 0.0, 5.0));

    let vp = camera.view_projection_matrix();
    assert_eq!(vp, camera.projection_matrix() * camera.view_matrix());

    // The target projects to the center of clip space
    let clip = vp * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-5);
    assert!((clip.y / clip.w).abs() < 1e-5);
}

#[test]
fn test_projection_uses_degrees() {
    let camera = Camera::new(90.0, 1.0, 0.1, 100.0);
    let proj = camera.projection_matrix();
    // cot(45deg) = 1
    assert!((proj.y_axis.y - 1.0).abs() < 1e-5);
}
