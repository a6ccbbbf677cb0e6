/// ExampleDriver - the lifecycle state machine around one `Example`.
///
/// The driver owns everything the example allocates (pass chain,
/// parameter bindings, tracked GPU resources, pending loads) and borrows
/// the host's scene, camera, renderer, loader and control surface for the
/// duration of each call. Every entry point checks the lifecycle state
/// first; a call in the wrong state changes nothing.

use std::sync::atomic::{AtomicU64, Ordering};
use rustc_hash::FxHashMap;
use crate::assets::{AssetCompletion, LoadHandle};
use crate::engine_bail;
use crate::error::Result;
use crate::example::{
    DestroyContext, Example, FrameContext, Host, InitContext, LifecycleState, ResourceSet,
};
use crate::parameter::ParameterSet;
use crate::post_process::{PassChain, ScenePass};
use crate::{engine_debug, engine_info, engine_warn};

static NEXT_DRIVER_ID: AtomicU64 = AtomicU64::new(1);

pub struct ExampleDriver {
    id: u64,
    example: Box<dyn Example>,
    state: LifecycleState,
    chain: PassChain,
    params: ParameterSet,
    resources: ResourceSet,
    pending: FxHashMap<u64, LoadHandle>,
    next_ticket: u64,
    viewport: (u32, u32),
    owns_controls: bool,
    hook_entered: bool,
    elapsed: f64,
}

impl ExampleDriver {
    /// Wrap an example; nothing is allocated until `initialize`
    pub fn new(example: Box<dyn Example>, width: u32, height: u32) -> Self {
        Self {
            id: NEXT_DRIVER_ID.fetch_add(1, Ordering::Relaxed),
            example,
            state: LifecycleState::Created,
            chain: PassChain::new(width, height),
            params: ParameterSet::new(),
            resources: ResourceSet::new(),
            pending: FxHashMap::default(),
            next_ticket: 1,
            viewport: (width.max(1), height.max(1)),
            owns_controls: false,
            hook_entered: false,
            elapsed: 0.0,
        }
    }

    // ===== LIFECYCLE =====

    /// Created -> Initialized
    ///
    /// Claims the control surface, sizes the camera and a fresh pass chain
    /// to the viewport and runs the example's `initialize`. A chain left
    /// empty gets a single scene pass. On failure everything allocated so
    /// far is released (running the example's `destroy` hook if its
    /// `initialize` was entered) and the driver ends up Destroyed.
    pub fn initialize(&mut self, host: &mut Host<'_>) -> Result<()> {
        if self.state != LifecycleState::Created {
            engine_bail!("galaxy3d::ExampleDriver", LifecycleViolation,
                "initialize() on '{}' in state {:?}", self.example.name(), self.state);
        }

        let result = self.run_initialize(host);
        match result {
            Ok(()) => {
                self.state = LifecycleState::Initialized;
                engine_info!("galaxy3d::ExampleDriver",
                    "Initialized '{}' ({} passes, {} bindings, {} loads pending)",
                    self.example.name(), self.chain.len(), self.params.len(), self.pending.len());
                Ok(())
            }
            Err(e) => {
                engine_warn!("galaxy3d::ExampleDriver",
                    "Initialization of '{}' failed, tearing down: {}", self.example.name(), e);
                self.teardown(host);
                self.state = LifecycleState::Destroyed;
                Err(e)
            }
        }
    }

    fn run_initialize(&mut self, host: &mut Host<'_>) -> Result<()> {
        host.controls.claim(&self.owner_name())?;
        self.owns_controls = true;

        let (width, height) = self.viewport;
        host.camera.set_viewport(width, height);
        self.chain = PassChain::new(width, height);
        self.elapsed = 0.0;

        let mut ctx = InitContext {
            scene: &mut *host.scene,
            camera: &mut *host.camera,
            renderer: &mut *host.renderer,
            loader: &mut *host.loader,
            controls: &mut *host.controls,
            params: &mut self.params,
            chain: &mut self.chain,
            resources: &mut self.resources,
            pending: &mut self.pending,
            next_ticket: &mut self.next_ticket,
            owner: self.id,
            viewport: self.viewport,
        };
        self.hook_entered = true;
        self.example.initialize(&mut ctx)?;

        if self.chain.is_empty() {
            self.chain.add_pass(Box::new(ScenePass::new()))?;
        }
        Ok(())
    }

    /// Advance the example by `delta` seconds
    pub fn update(&mut self, host: &mut Host<'_>, delta: f32) -> Result<()> {
        self.require_initialized("update")?;
        if !delta.is_finite() || delta < 0.0 {
            engine_bail!("galaxy3d::ExampleDriver", InvalidArgument,
                "update() delta must be finite and >= 0, got {}", delta);
        }

        self.elapsed += delta as f64;
        let mut ctx = FrameContext {
            scene: &mut *host.scene,
            camera: &mut *host.camera,
            chain: &mut self.chain,
            elapsed: self.elapsed,
        };
        self.example.update(&mut ctx, delta)
    }

    /// Draw one frame through the pass chain
    pub fn render(&mut self, host: &mut Host<'_>) -> Result<()> {
        self.require_initialized("render")?;
        self.chain.execute(&mut *host.renderer, host.scene, host.camera)
    }

    /// Propagate a viewport change
    ///
    /// Before initialize the size is only recorded. Zero dimensions are
    /// ignored with a warning and the previous size is kept.
    pub fn resize(&mut self, host: &mut Host<'_>, width: u32, height: u32) -> Result<()> {
        if self.state == LifecycleState::Destroyed {
            engine_bail!("galaxy3d::ExampleDriver", LifecycleViolation,
                "resize() on '{}' after destroy", self.example.name());
        }
        if width == 0 || height == 0 {
            engine_warn!("galaxy3d::ExampleDriver",
                "Ignoring resize to {}x{}, keeping {}x{}", width, height, self.viewport.0, self.viewport.1);
            return Ok(());
        }
        if (width, height) == self.viewport {
            return Ok(());
        }

        self.viewport = (width, height);
        if self.state == LifecycleState::Created {
            return Ok(());
        }

        host.camera.set_viewport(width, height);
        host.renderer.resize(width, height);
        self.chain.resize(&mut *host.renderer, width, height)?;
        self.example.resize(host.camera, width, height);
        Ok(())
    }

    /// Route a load completion to the example
    ///
    /// Applies only while initialized, for this driver's own tickets that
    /// are still pending. Returns whether the completion was applied.
    /// Failures (from the loader or from `on_loaded`) are logged and
    /// reported to `on_load_failed`, never propagated.
    pub fn deliver(&mut self, host: &mut Host<'_>, completion: AssetCompletion) -> bool {
        if self.state != LifecycleState::Initialized || completion.ticket.owner != self.id {
            engine_debug!("galaxy3d::ExampleDriver",
                "Dropping completion for '{}' (ticket {} of driver {}, driver {} is {:?})",
                completion.request.label(), completion.ticket.id, completion.ticket.owner,
                self.id, self.state);
            return false;
        }
        let Some(handle) = self.pending.remove(&completion.ticket.id) else {
            engine_debug!("galaxy3d::ExampleDriver",
                "Dropping completion for '{}': ticket {} is not pending",
                completion.request.label(), completion.ticket.id);
            return false;
        };

        let outcome = match completion.result {
            Ok(asset) => {
                let mut ctx = InitContext {
                    scene: &mut *host.scene,
                    camera: &mut *host.camera,
                    renderer: &mut *host.renderer,
                    loader: &mut *host.loader,
                    controls: &mut *host.controls,
                    params: &mut self.params,
                    chain: &mut self.chain,
                    resources: &mut self.resources,
                    pending: &mut self.pending,
                    next_ticket: &mut self.next_ticket,
                    owner: self.id,
                    viewport: self.viewport,
                };
                self.example.on_loaded(&mut ctx, &handle, asset)
            }
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            engine_warn!("galaxy3d::ExampleDriver",
                "Load of '{}' for '{}' failed: {}", handle.label, self.example.name(), e);
            self.example.on_load_failed(&handle, &e);
        }
        true
    }

    /// Release everything and move to Destroyed
    ///
    /// Idempotent: calling it again (or after a failed initialize) does
    /// nothing.
    pub fn destroy(&mut self, host: &mut Host<'_>) {
        match self.state {
            LifecycleState::Destroyed => {}
            LifecycleState::Created => {
                self.teardown(host);
                self.state = LifecycleState::Destroyed;
            }
            LifecycleState::Initialized => {
                self.teardown(host);
                self.state = LifecycleState::Destroyed;
                engine_info!("galaxy3d::ExampleDriver", "Destroyed '{}'", self.example.name());
            }
        }
    }

    fn teardown(&mut self, host: &mut Host<'_>) {
        // Runs even when initialize failed part way, so the example can undo
        // renderer state it changed before the error.
        let entered = std::mem::replace(&mut self.hook_entered, false);
        if entered {
            let mut ctx = DestroyContext {
                scene: &mut *host.scene,
                renderer: &mut *host.renderer,
            };
            self.example.destroy(&mut ctx);
        }

        self.chain.release();
        self.params.clear();
        self.resources.clear();
        if !self.pending.is_empty() {
            engine_debug!("galaxy3d::ExampleDriver",
                "Forgetting {} pending loads of '{}'", self.pending.len(), self.example.name());
            self.pending.clear();
        }
        if entered || self.owns_controls {
            host.scene.clear();
        }
        if self.owns_controls {
            host.controls.release();
            self.owns_controls = false;
        }
    }

    fn require_initialized(&self, operation: &str) -> Result<()> {
        if self.state != LifecycleState::Initialized {
            return Err(crate::engine_err!("galaxy3d::ExampleDriver", LifecycleViolation,
                "{}() on '{}' in state {:?}", operation, self.example.name(), self.state));
        }
        Ok(())
    }

    fn owner_name(&self) -> String {
        format!("{}#{}", self.example.name(), self.id)
    }

    // ===== GETTERS =====

    /// Unique driver id (owner of its load tickets)
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        self.example.name()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Seconds accumulated by `update` since initialize
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn chain(&self) -> &PassChain {
        &self.chain
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn resources(&self) -> &ResourceSet {
        &self.resources
    }

    /// Loads started by the example whose completion has not been delivered
    pub fn pending_loads(&self) -> usize {
        self.pending.len()
    }

    /// Access the wrapped example (e.g. to feed its orbit controls)
    pub fn example_mut(&mut self) -> &mut dyn Example {
        self.example.as_mut()
    }
}

impl std::fmt::Debug for ExampleDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExampleDriver")
            .field("id", &self.id)
            .field("example", &self.example.name())
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .field("pending_loads", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "example_driver_tests.rs"]
mod tests;
