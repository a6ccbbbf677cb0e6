/// Headless renderer backend (no GPU required)
///
/// Accepts every request a GPU backend would, but only records it.
/// Used by the demo binary when no GPU backend is plugged in, and by the
/// test suites to verify draw ordering, allocation counts and resource
/// lifetimes.

use std::sync::{Arc, Weak};
use crate::camera::Camera;
use crate::engine_bail;
use crate::error::Result;
use crate::renderer::{
    DrawMode, Geometry, GeometryDesc, PassTarget, RenderTarget, RenderTargetDesc, Renderer,
    RendererStats, TargetUsage, Texture, TextureDesc, TextureFormat, WrapMode,
};
use crate::scene::Scene;

// ============================================================================
// Headless resources
// ============================================================================

#[derive(Debug)]
pub struct HeadlessRenderTarget {
    id: u64,
    desc: RenderTargetDesc,
}

impl RenderTarget for HeadlessRenderTarget {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.desc.label
    }

    fn width(&self) -> u32 {
        self.desc.width
    }

    fn height(&self) -> u32 {
        self.desc.height
    }

    fn format(&self) -> TextureFormat {
        self.desc.format
    }

    fn usage(&self) -> TargetUsage {
        self.desc.usage
    }
}

#[derive(Debug)]
pub struct HeadlessTexture {
    id: u64,
    desc: TextureDesc,
}

impl Texture for HeadlessTexture {
    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.desc.label
    }

    fn is_cube(&self) -> bool {
        self.desc.is_cube()
    }

    fn wrap(&self) -> (WrapMode, WrapMode) {
        (self.desc.wrap_s, self.desc.wrap_t)
    }
}

#[derive(Debug)]
pub struct HeadlessGeometry {
    id: u64,
    desc: GeometryDesc,
}

impl Geometry for HeadlessGeometry {
    fn id(&self) -> u64 {
        self.id
    }

    fn desc(&self) -> &GeometryDesc {
        &self.desc
    }
}

// ============================================================================
// Headless renderer
// ============================================================================

/// Renderer that records commands instead of talking to a GPU
#[derive(Debug)]
pub struct HeadlessRenderer {
    next_id: u64,
    surface: (u32, u32),
    shadow_maps: bool,
    memory_budget: Option<u64>,
    commands: Vec<String>,
    stats: RendererStats,
    render_targets: Vec<Weak<HeadlessRenderTarget>>,
    textures: Vec<Weak<HeadlessTexture>>,
    geometries: Vec<Weak<HeadlessGeometry>>,
}

impl HeadlessRenderer {
    /// Create a headless renderer with an 800x600 surface
    pub fn new() -> Self {
        Self {
            next_id: 1,
            surface: (800, 600),
            shadow_maps: false,
            memory_budget: None,
            commands: Vec::new(),
            stats: RendererStats::default(),
            render_targets: Vec::new(),
            textures: Vec::new(),
            geometries: Vec::new(),
        }
    }

    /// Fail render target creation with `OutOfMemory` past this many bytes
    pub fn with_memory_budget(mut self, bytes: u64) -> Self {
        self.memory_budget = Some(bytes);
        self
    }

    /// Every command recorded since creation (or the last clear)
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Commands starting with the given prefix
    pub fn commands_matching(&self, prefix: &str) -> Vec<&str> {
        self.commands
            .iter()
            .filter(|c| c.starts_with(prefix))
            .map(|c| c.as_str())
            .collect()
    }

    /// Forget recorded commands (statistics are kept)
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Render targets created since the renderer was created
    pub fn render_target_allocations(&self) -> u64 {
        self.stats.render_target_allocations
    }

    /// Render targets currently alive
    pub fn live_render_targets(&self) -> usize {
        self.render_targets.iter().filter(|w| w.strong_count() > 0).count()
    }

    /// Textures currently alive
    pub fn live_textures(&self) -> usize {
        self.textures.iter().filter(|w| w.strong_count() > 0).count()
    }

    /// Geometries currently alive
    pub fn live_geometries(&self) -> usize {
        self.geometries.iter().filter(|w| w.strong_count() > 0).count()
    }

    fn live_target_memory(&self) -> u64 {
        self.render_targets
            .iter()
            .filter_map(|w| w.upgrade())
            .map(|t| t.desc.byte_size())
            .sum()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn prune(&mut self) {
        self.render_targets.retain(|w| w.strong_count() > 0);
        self.textures.retain(|w| w.strong_count() > 0);
        self.geometries.retain(|w| w.strong_count() > 0);
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn create_render_target(&mut self, desc: &RenderTargetDesc) -> Result<Arc<dyn RenderTarget>> {
        if desc.width == 0 || desc.height == 0 {
            engine_bail!("galaxy3d::HeadlessRenderer", InvalidResource,
                "Render target '{}' has zero size {}x{}", desc.label, desc.width, desc.height);
        }

        self.prune();
        if let Some(budget) = self.memory_budget {
            if self.live_target_memory() + desc.byte_size() > budget {
                crate::engine_error!("galaxy3d::HeadlessRenderer",
                    "Render target '{}' exceeds memory budget of {} bytes", desc.label, budget);
                return Err(crate::error::Error::OutOfMemory);
            }
        }

        let id = self.allocate_id();
        let target = Arc::new(HeadlessRenderTarget { id, desc: desc.clone() });
        self.render_targets.push(Arc::downgrade(&target));
        self.stats.render_target_allocations += 1;
        self.commands.push(format!(
            "create_render_target #{} '{}' {}x{}",
            id, desc.label, desc.width, desc.height
        ));
        Ok(target)
    }

    fn create_texture(&mut self, desc: &TextureDesc) -> Result<Arc<dyn Texture>> {
        self.prune();
        let id = self.allocate_id();
        let texture = Arc::new(HeadlessTexture { id, desc: desc.clone() });
        self.textures.push(Arc::downgrade(&texture));
        self.commands.push(format!("create_texture #{} '{}'", id, desc.label));
        Ok(texture)
    }

    fn create_geometry(&mut self, desc: &GeometryDesc) -> Result<Arc<dyn Geometry>> {
        self.prune();
        let id = self.allocate_id();
        let geometry = Arc::new(HeadlessGeometry { id, desc: desc.clone() });
        self.geometries.push(Arc::downgrade(&geometry));
        self.commands.push(format!("create_geometry #{} {}", id, desc.kind_name()));
        Ok(geometry)
    }

    fn draw_scene(
        &mut self,
        scene: &Scene,
        _camera: &Camera,
        mode: DrawMode,
        target: PassTarget<'_>,
    ) -> Result<()> {
        let mode_name = match mode {
            DrawMode::Color => "color",
            DrawMode::Depth => "depth",
        };
        let meshes = scene.visible_mesh_count() as u64;
        self.stats.scene_draws += 1;
        self.stats.draw_calls += meshes;
        self.commands.push(format!("draw_scene {} -> {:?}", mode_name, target));
        Ok(())
    }

    fn draw_effect(
        &mut self,
        effect: &str,
        inputs: &[&dyn RenderTarget],
        uniforms: &[u8],
        target: PassTarget<'_>,
    ) -> Result<()> {
        let input_ids: Vec<String> = inputs.iter().map(|t| format!("#{}", t.id())).collect();
        self.stats.effect_draws += 1;
        self.commands.push(format!(
            "draw_effect {} [{}] {}B -> {:?}",
            effect,
            input_ids.join(", "),
            uniforms.len(),
            target
        ));
        Ok(())
    }

    fn set_shadow_maps_enabled(&mut self, enabled: bool) {
        self.shadow_maps = enabled;
    }

    fn shadow_maps_enabled(&self) -> bool {
        self.shadow_maps
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.surface = (width, height);
        self.commands.push(format!("resize_surface {}x{}", width, height));
    }

    fn surface_size(&self) -> (u32, u32) {
        self.surface
    }

    fn stats(&self) -> RendererStats {
        RendererStats {
            live_render_targets: self.live_render_targets(),
            live_textures: self.live_textures(),
            live_geometries: self.live_geometries(),
            gpu_memory_used: self.live_target_memory(),
            ..self.stats
        }
    }
}

#[cfg(test)]
#[path = "headless_renderer_tests.rs"]
mod tests;
