/// Light sources.

use glam::Vec3;
use crate::scene::Color;

/// Infinitely distant light shining from the node position toward `target`
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub target: Vec3,
}

impl DirectionalLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity, target: Vec3::ZERO }
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }
}

/// Omnidirectional light
///
/// `distance` 0 means unlimited range; `decay` 0 disables falloff.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub distance: f32,
    pub decay: f32,
}

impl PointLight {
    pub fn new(color: Color, intensity: f32, distance: f32, decay: f32) -> Self {
        Self { color, intensity, distance, decay }
    }
}
