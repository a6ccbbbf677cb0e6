/// Borrowed views handed to example hooks.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::assets::{AssetLoader, AssetRequest, LoadHandle, LoadTicket};
use crate::camera::Camera;
use crate::error::Result;
use crate::parameter::{ControlSurface, FolderBuilder, ParameterSet};
use crate::post_process::{PassChain, PassId, RenderPass};
use crate::renderer::{Geometry, GeometryDesc, Renderer, Texture, TextureDesc};
use crate::scene::Scene;

/// Host-owned state borrowed by the driver for the duration of one call
pub struct Host<'a> {
    pub scene: &'a mut Scene,
    pub camera: &'a mut Camera,
    pub renderer: &'a mut dyn Renderer,
    pub loader: &'a mut dyn AssetLoader,
    pub controls: &'a mut ControlSurface,
}

/// GPU resources created on behalf of an example
#[derive(Debug, Default)]
pub struct ResourceSet {
    textures: Vec<Arc<dyn Texture>>,
    geometries: Vec<Arc<dyn Geometry>>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_texture(&mut self, texture: Arc<dyn Texture>) {
        self.textures.push(texture);
    }

    pub fn track_geometry(&mut self, geometry: Arc<dyn Geometry>) {
        self.geometries.push(geometry);
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty() && self.geometries.is_empty()
    }

    /// Drop the tracked handles
    pub fn clear(&mut self) {
        self.textures.clear();
        self.geometries.clear();
    }
}

/// Context for `Example::initialize` and `Example::on_loaded`
pub struct InitContext<'a> {
    pub scene: &'a mut Scene,
    pub camera: &'a mut Camera,
    pub(crate) renderer: &'a mut dyn Renderer,
    pub(crate) loader: &'a mut dyn AssetLoader,
    pub(crate) controls: &'a mut ControlSurface,
    pub(crate) params: &'a mut ParameterSet,
    pub(crate) chain: &'a mut PassChain,
    pub(crate) resources: &'a mut ResourceSet,
    pub(crate) pending: &'a mut FxHashMap<u64, LoadHandle>,
    pub(crate) next_ticket: &'a mut u64,
    pub(crate) owner: u64,
    pub(crate) viewport: (u32, u32),
}

/// Context for `Example::on_loaded`
///
/// Loaded assets usually create resources, add scene content or start
/// follow-up loads, so the same capabilities as initialization apply.
pub type LoadContext<'a> = InitContext<'a>;

impl InitContext<'_> {
    /// Create a texture owned by the example
    pub fn create_texture(&mut self, desc: &TextureDesc) -> Result<Arc<dyn Texture>> {
        let texture = self.renderer.create_texture(desc)?;
        self.resources.track_texture(texture.clone());
        Ok(texture)
    }

    /// Create geometry owned by the example
    pub fn create_geometry(&mut self, desc: &GeometryDesc) -> Result<Arc<dyn Geometry>> {
        let geometry = self.renderer.create_geometry(desc)?;
        self.resources.track_geometry(geometry.clone());
        Ok(geometry)
    }

    /// Append a post-processing pass
    pub fn add_pass(&mut self, pass: Box<dyn RenderPass>) -> Result<PassId> {
        self.chain.add_pass(pass)
    }

    /// Start a folder of live controls
    pub fn folder(&mut self, title: &str) -> FolderBuilder<'_> {
        self.controls.folder(self.params, title)
    }

    /// Start an asynchronous load
    ///
    /// The completion is delivered through `Example::on_loaded` (or
    /// `on_load_failed`) on a later frame, and only while the example is
    /// still initialized.
    pub fn load(&mut self, request: AssetRequest) -> LoadHandle {
        let ticket = LoadTicket { id: *self.next_ticket, owner: self.owner };
        *self.next_ticket += 1;

        let handle = LoadHandle {
            ticket,
            kind: request.kind,
            label: request.label().to_string(),
        };
        self.pending.insert(ticket.id, handle.clone());
        self.loader.request(ticket, request);
        handle
    }

    /// Current viewport size in pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn set_shadow_maps_enabled(&mut self, enabled: bool) {
        self.renderer.set_shadow_maps_enabled(enabled);
    }

    pub fn shadow_maps_enabled(&self) -> bool {
        self.renderer.shadow_maps_enabled()
    }
}

/// Context for `Example::update`
pub struct FrameContext<'a> {
    pub scene: &'a mut Scene,
    pub camera: &'a mut Camera,
    pub(crate) chain: &'a mut PassChain,
    /// Seconds accumulated over every update since initialize
    pub elapsed: f64,
}

impl FrameContext<'_> {
    /// Typed access to one of the example's passes
    pub fn pass_mut<T: RenderPass + 'static>(&mut self, id: PassId) -> Option<&mut T> {
        self.chain.pass_mut::<T>(id)
    }
}

/// Context for `Example::destroy`
pub struct DestroyContext<'a> {
    pub scene: &'a mut Scene,
    pub renderer: &'a mut dyn Renderer,
}
