/// Camera - perspective camera looking at a target point.
///
/// Stores the high-level parameters (field of view, clip planes,
/// position, target) and derives the view and projection matrices on
/// demand. The aspect ratio follows the viewport and is updated by the
/// example driver on every accepted resize.

use glam::{Mat4, Vec3};

/// Perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    position: Vec3,
    target: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a perspective camera
    ///
    /// # Arguments
    ///
    /// * `fov_y` - Vertical field of view in degrees
    /// * `aspect` - Width / height
    /// * `near` - Near clip plane distance
    /// * `far` - Far clip plane distance
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    // ===== GETTERS =====

    /// Vertical field of view in degrees.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clip plane distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip plane distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Eye position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Point the camera looks at.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Up direction.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    // ===== SETTERS =====

    /// Set the aspect ratio from a viewport size.
    ///
    /// A zero height leaves the aspect unchanged.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.fov_y = fov_y;
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Aim the camera at a world-space point.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    // ===== MATRICES =====

    /// View matrix (right-handed, looking from position to target).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Projection matrix (right-handed perspective, depth 0..1).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    /// 50 degree field of view, square aspect, clip planes 0.1..2000
    fn default() -> Self {
        Self::new(50.0, 1.0, 0.1, 2000.0)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
