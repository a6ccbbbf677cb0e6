/// Renderer trait - the rendering backend consumed by the showcase

use std::sync::Arc;
use crate::camera::Camera;
use crate::error::Result;
use crate::renderer::{
    Geometry, GeometryDesc, PassTarget, RenderTarget, RenderTargetDesc, Texture, TextureDesc,
};
use crate::scene::Scene;

/// What a scene draw writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Shaded color
    Color,
    /// Linear view depth only (used by depth-of-field)
    Depth,
}

/// Renderer statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RendererStats {
    /// Number of scene draws issued
    pub scene_draws: u64,
    /// Number of mesh draw calls issued by scene draws
    pub draw_calls: u64,
    /// Number of fullscreen effect draws issued
    pub effect_draws: u64,
    /// Render targets created since the renderer was created
    pub render_target_allocations: u64,
    /// Render targets currently alive
    pub live_render_targets: usize,
    /// Textures currently alive
    pub live_textures: usize,
    /// Geometries currently alive
    pub live_geometries: usize,
    /// Render target memory currently alive (bytes)
    pub gpu_memory_used: u64,
}

impl RendererStats {
    /// Total number of GPU resources currently alive
    pub fn live_resources(&self) -> usize {
        self.live_render_targets + self.live_textures + self.live_geometries
    }
}

/// Main renderer trait
///
/// The retained-mode backend the showcase draws through. Rasterization,
/// shader compilation and effect implementations belong to the backend;
/// the showcase only decides what gets drawn, in which order, into which
/// target. Implemented by GPU backends and by `HeadlessRenderer`.
pub trait Renderer: Send {
    /// Create an offscreen render target
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Arc<dyn RenderTarget>>;

    /// Create a sampled texture
    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create geometry
    fn create_geometry(&mut self, desc: &GeometryDesc) -> Result<Arc<dyn Geometry>>;

    /// Draw every visible mesh of the scene as seen by the camera
    fn draw_scene(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        mode: DrawMode,
        target: PassTarget<'_>,
    ) -> Result<()>;

    /// Run a named fullscreen effect
    ///
    /// # Arguments
    ///
    /// * `effect` - Effect name resolved by the backend ("copy", "bokeh", ...)
    /// * `inputs` - Targets sampled by the effect, in binding order
    /// * `uniforms` - Raw uniform block bytes
    /// * `target` - Output
    fn draw_effect(
        &mut self,
        effect: &str,
        inputs: &[&dyn RenderTarget],
        uniforms: &[u8],
        target: PassTarget<'_>,
    ) -> Result<()>;

    /// Enable or disable shadow map rendering
    fn set_shadow_maps_enabled(&mut self, enabled: bool);

    /// Whether shadow map rendering is enabled
    fn shadow_maps_enabled(&self) -> bool;

    /// Notify the renderer that the display framebuffer has been resized
    fn resize(&mut self, width: u32, height: u32);

    /// Current display framebuffer size
    fn surface_size(&self) -> (u32, u32);

    /// Get statistics about the renderer
    fn stats(&self) -> RendererStats;
}
