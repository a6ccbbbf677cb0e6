/// Surface materials understood by the renderer backends.

use std::sync::Arc;
use crate::renderer::Texture;
use crate::scene::Color;

/// Shading model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    /// Unlit, flat color
    Basic,
    /// Diffuse-only lighting
    Lambert,
    /// Metallic-roughness PBR
    Physical { metalness: f32, roughness: f32 },
    /// Unlit lines
    LineBasic,
    /// Transparent surface that only shows received shadows
    Shadow { opacity: f32 },
}

/// Optional texture maps (PBR inputs)
#[derive(Debug, Clone, Default)]
pub struct MaterialMaps {
    pub albedo: Option<Arc<dyn Texture>>,
    pub normal: Option<Arc<dyn Texture>>,
    pub metallic: Option<Arc<dyn Texture>>,
    pub roughness: Option<Arc<dyn Texture>>,
}

#[derive(Debug, Clone)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Color,
    pub maps: MaterialMaps,
}

impl Material {
    pub fn basic(color: Color) -> Self {
        Self::with_kind(MaterialKind::Basic, color)
    }

    pub fn lambert(color: Color) -> Self {
        Self::with_kind(MaterialKind::Lambert, color)
    }

    pub fn physical(color: Color, metalness: f32, roughness: f32) -> Self {
        Self::with_kind(MaterialKind::Physical { metalness, roughness }, color)
    }

    pub fn line_basic(color: Color) -> Self {
        Self::with_kind(MaterialKind::LineBasic, color)
    }

    pub fn shadow(opacity: f32) -> Self {
        Self::with_kind(MaterialKind::Shadow { opacity }, Color::BLACK)
    }

    pub fn with_maps(mut self, maps: MaterialMaps) -> Self {
        self.maps = maps;
        self
    }

    /// Metalness and roughness, if this is a physical material
    pub fn pbr_factors(&self) -> Option<(f32, f32)> {
        match self.kind {
            MaterialKind::Physical { metalness, roughness } => Some((metalness, roughness)),
            _ => None,
        }
    }

    fn with_kind(kind: MaterialKind, color: Color) -> Self {
        Self { kind, color, maps: MaterialMaps::default() }
    }
}
