use glam::Vec3;
use crate::camera::Camera;
use super::*;

fn camera_at(position: Vec3) -> Camera {
    let mut camera = Camera::default();
    camera.set_position(position);
    camera.look_at(Vec3::ZERO);
    camera
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_from_camera_recovers_spherical_pose() {
    let camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
    let controls = OrbitControls::from_camera(&camera);

    assert!((controls.radius() - 10.0).abs() < 1e-5);
    assert!(controls.theta().abs() < 1e-5);
    assert!((controls.phi() - PI / 2.0).abs() < 1e-5);
    assert_eq!(controls.center(), Vec3::ZERO);
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_update_without_input_leaves_camera_unchanged() {
    let mut camera = camera_at(Vec3::new(1.0, 2.0, 3.0));
    let before = camera.clone();
    let mut controls = OrbitControls::from_camera(&camera);

    controls.update(&mut camera, 0.0);
    controls.update(&mut camera, 0.016);

    assert_eq!(camera, before);
}

#[test]
fn test_zoom_in_reduces_distance() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
    let mut controls = OrbitControls::from_camera(&camera);

    controls.zoom(1.0);
    controls.update(&mut camera, 0.016);

    assert!((controls.radius() - 9.5).abs() < 1e-4);
    assert!((camera.position().length() - 9.5).abs() < 1e-4);
    assert_eq!(camera.target(), Vec3::ZERO);
}

#[test]
fn test_zoom_respects_distance_limits() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
    let mut controls = OrbitControls::from_camera(&camera);
    controls.max_distance = 12.0;

    controls.zoom(-100.0);
    controls.update(&mut camera, 0.016);

    assert_eq!(controls.radius(), 12.0);
}

#[test]
fn test_rotation_without_damping_applies_immediately() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
    let mut controls = OrbitControls::from_camera(&camera);
    controls.enable_damping = false;

    // A drag of a quarter of the viewport height turns by PI/2
    controls.rotate(-150.0, 0.0, 600.0);
    controls.update(&mut camera, 0.016);

    assert!((controls.theta() - PI / 2.0).abs() < 1e-4);
    assert!((camera.position() - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-3);
    assert!(controls.is_settled());
}

#[test]
fn test_damped_rotation_converges() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
    let mut controls = OrbitControls::from_camera(&camera);

    controls.rotate(-150.0, 0.0, 600.0);
    controls.update(&mut camera, 1.0 / 60.0);
    let first = controls.theta();
    assert!(first > 0.0 && first < PI / 2.0);

    for _ in 0..2000 {
        controls.update(&mut camera, 1.0 / 60.0);
    }
    assert!((controls.theta() - PI / 2.0).abs() < 1e-3);
}

#[test]
fn test_phi_is_clamped_away_from_poles() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
    let mut controls = OrbitControls::from_camera(&camera);
    controls.enable_damping = false;

    controls.rotate(0.0, 10_000.0, 600.0);
    controls.update(&mut camera, 0.016);

    assert!(controls.phi() > 0.0);
    assert!(controls.phi() < PI);
    assert!(camera.position().is_finite());
}

#[test]
fn test_pan_moves_center_and_target() {
    let mut camera = camera_at(Vec3::new(0.0, 0.0, 10.0));
    let mut controls = OrbitControls::from_camera(&camera);

    controls.pan(0.0, 100.0, 600.0, 50.0);
    controls.update(&mut camera, 0.016);

    assert!(controls.center().y > 0.0);
    assert_eq!(camera.target(), controls.center());
}
