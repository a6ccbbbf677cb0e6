/// Orbit controls - rotate and zoom a camera around a target point.
///
/// Input is accumulated between frames (`rotate`, `zoom`, `pan`) and
/// applied on `update`, with optional exponential damping so the camera
/// keeps gliding for a few frames after the pointer stops.

use std::f32::consts::PI;
use glam::{Vec2, Vec3};
use crate::camera::Camera;

const PHI_EPS: f32 = 0.0001;
const SETTLED: f32 = 1e-6;

pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    center: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,

    rotate_delta: Vec2,
    pan_delta: Vec3,
    zoom_scale: f32,
}

impl OrbitControls {
    /// Orbit around `center` at distance `radius`, looking along -Z
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 0.01,
            max_distance: 1000.0,

            center,
            radius,
            theta: 0.0,
            phi: PI / 2.0,

            rotate_delta: Vec2::ZERO,
            pan_delta: Vec3::ZERO,
            zoom_scale: 1.0,
        }
    }

    /// Orbit around the camera's current target from its current position
    pub fn from_camera(camera: &Camera) -> Self {
        let offset = camera.position() - camera.target();
        let radius = offset.length().max(PHI_EPS);
        let mut controls = Self::new(camera.target(), radius);
        controls.theta = offset.x.atan2(offset.z);
        controls.phi = (offset.y / radius).clamp(-1.0, 1.0).acos().clamp(PHI_EPS, PI - PHI_EPS);
        controls
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Azimuth around the Y axis, in radians
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Polar angle from the Y axis, in radians
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Queue a rotation from a pointer drag in pixels
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let rotate_per_pixel = 2.0 * PI / viewport_height.max(1.0);
        self.rotate_delta.x -= dx * rotate_per_pixel * self.rotate_speed;
        self.rotate_delta.y -= dy * rotate_per_pixel * self.rotate_speed;
    }

    /// Queue a zoom step; positive scroll moves closer
    pub fn zoom(&mut self, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let scale = (1.0 - self.zoom_speed).powf(scroll.abs());
        if scroll > 0.0 {
            self.zoom_scale *= scale;
        } else {
            self.zoom_scale /= scale;
        }
    }

    /// Queue a pan of the orbit center from a pointer drag in pixels
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32, fov_y_degrees: f32) {
        let half_fov = fov_y_degrees.to_radians() / 2.0;
        let world_height = 2.0 * self.radius * half_fov.tan();
        let pixels_to_world = world_height / viewport_height.max(1.0);

        let forward = -self.offset_direction();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();

        self.pan_delta += (right * -dx + up * dy) * pixels_to_world * self.pan_speed;
    }

    /// Whether queued input remains to be applied
    pub fn is_settled(&self) -> bool {
        self.rotate_delta.length_squared() < SETTLED * SETTLED
            && self.pan_delta.length_squared() < SETTLED * SETTLED
            && (self.zoom_scale - 1.0).abs() < SETTLED
    }

    /// Apply queued input and write the resulting pose to the camera
    ///
    /// With no queued input the camera is left untouched.
    pub fn update(&mut self, camera: &mut Camera, dt: f32) {
        if self.is_settled() {
            self.rotate_delta = Vec2::ZERO;
            self.pan_delta = Vec3::ZERO;
            self.zoom_scale = 1.0;
            return;
        }

        if self.enable_damping {
            let retention = (1.0 - self.damping_factor).powf(dt.max(0.0) * 60.0);
            let applied = self.rotate_delta * (1.0 - retention);
            self.theta += applied.x;
            self.phi += applied.y;
            self.rotate_delta *= retention;
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }
        self.phi = self.phi.clamp(PHI_EPS, PI - PHI_EPS);

        self.radius = (self.radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);
        self.zoom_scale = 1.0;

        self.center += self.pan_delta;
        self.pan_delta = Vec3::ZERO;

        camera.set_position(self.center + self.offset_direction() * self.radius);
        camera.look_at(self.center);
    }

    fn offset_direction(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }
}

#[cfg(test)]
#[path = "orbit_controls_tests.rs"]
mod tests;
