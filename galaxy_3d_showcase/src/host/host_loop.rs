/// HostLoop - owns the per-frame loop and switches between examples.
///
/// Each tick first routes finished asset loads to the running example,
/// then updates it and renders it. Switching examples destroys the
/// running one completely (scene cleared, resources and controls
/// released) before the next one is initialized.

use crate::assets::AssetLoader;
use crate::camera::Camera;
use crate::error::Result;
use crate::example::{Example, ExampleDriver, Host, LifecycleState};
use crate::host::{ExampleRegistry, ShowcaseConfig};
use crate::parameter::{ControlSurface, ParameterValue};
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::{engine_debug, engine_info, engine_warn};

pub struct HostLoop {
    scene: Scene,
    camera: Camera,
    renderer: Box<dyn Renderer>,
    loader: Box<dyn AssetLoader>,
    controls: ControlSurface,
    registry: ExampleRegistry,
    current: Option<ExampleDriver>,
    viewport: (u32, u32),
    frames: u64,
}

/// Split-borrow the host state and the current driver
macro_rules! with_host {
    ($self:ident, |$host:ident, $current:ident| $body:expr) => {{
        let HostLoop { scene, camera, renderer, loader, controls, current, .. } = $self;
        let mut $host = Host {
            scene,
            camera,
            renderer: renderer.as_mut(),
            loader: loader.as_mut(),
            controls,
        };
        let $current = current;
        $body
    }};
}

impl HostLoop {
    pub fn new(
        config: &ShowcaseConfig,
        mut renderer: Box<dyn Renderer>,
        loader: Box<dyn AssetLoader>,
        registry: ExampleRegistry,
    ) -> Self {
        let viewport = (config.width.max(1), config.height.max(1));
        renderer.resize(viewport.0, viewport.1);
        renderer.set_shadow_maps_enabled(config.shadow_maps);

        let mut camera = Camera::default();
        camera.set_viewport(viewport.0, viewport.1);

        Self {
            scene: Scene::new(),
            camera,
            renderer,
            loader,
            controls: ControlSurface::new(),
            registry,
            current: None,
            viewport,
            frames: 0,
        }
    }

    // ===== EXAMPLE SWITCHING =====

    /// Replace the running example with a registered one
    ///
    /// An unknown name leaves the running example untouched.
    pub fn switch_to(&mut self, name: &str) -> Result<()> {
        let example = self.registry.create(name)?;
        self.start(example)
    }

    /// Replace the running example
    ///
    /// The previous example is destroyed before the new one initializes.
    /// If initialization fails no example is running afterwards.
    pub fn start(&mut self, example: Box<dyn Example>) -> Result<()> {
        self.stop_current();

        let mut driver = ExampleDriver::new(example, self.viewport.0, self.viewport.1);
        let result = with_host!(self, |host, _current| driver.initialize(&mut host));
        match result {
            Ok(()) => {
                engine_info!("galaxy3d::HostLoop", "Running example '{}'", driver.name());
                self.current = Some(driver);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Destroy the running example, if any
    pub fn shutdown(&mut self) {
        self.stop_current();
    }

    fn stop_current(&mut self) {
        with_host!(self, |host, current| {
            if let Some(mut driver) = current.take() {
                driver.destroy(&mut host);
                engine_debug!("galaxy3d::HostLoop", "Stopped example '{}'", driver.name());
            }
        })
    }

    // ===== FRAME LOOP =====

    /// Route finished loads to the running example
    ///
    /// Returns how many completions were applied. Completions for
    /// examples that are no longer running are dropped.
    pub fn pump_assets(&mut self) -> usize {
        let completions = self.loader.poll();
        if completions.is_empty() {
            return 0;
        }
        with_host!(self, |host, current| {
            let mut applied = 0;
            for completion in completions {
                match current.as_mut() {
                    Some(driver) => {
                        if driver.deliver(&mut host, completion) {
                            applied += 1;
                        }
                    }
                    None => engine_debug!("galaxy3d::HostLoop",
                        "Dropping completion for '{}': no example running", completion.request.label()),
                }
            }
            applied
        })
    }

    /// One frame: pump loads, update, render
    pub fn tick(&mut self, delta: f32) -> Result<()> {
        self.pump_assets();
        with_host!(self, |host, current| {
            match current.as_mut() {
                Some(driver) => {
                    driver.update(&mut host, delta)?;
                    driver.render(&mut host)
                }
                None => Ok(()),
            }
        })?;
        self.frames += 1;
        Ok(())
    }

    /// Viewport resize from the window system
    ///
    /// Zero dimensions (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            engine_warn!("galaxy3d::HostLoop", "Ignoring resize to {}x{}", width, height);
            return Ok(());
        }
        self.viewport = (width, height);
        with_host!(self, |host, current| {
            match current.as_mut().filter(|driver| driver.state() != LifecycleState::Destroyed) {
                Some(driver) => driver.resize(&mut host, width, height),
                None => {
                    host.renderer.resize(width, height);
                    host.camera.set_viewport(width, height);
                    Ok(())
                }
            }
        })
    }

    // ===== INPUT =====

    /// Write a live parameter of the running example by name
    pub fn write_control(&mut self, name: &str, value: impl Into<ParameterValue>) -> Result<ParameterValue> {
        self.controls.write(name, value)
    }

    /// Pointer drag in pixels, forwarded to the example's orbit controls
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        let height = self.viewport.1 as f32;
        if let Some(controls) = self.current.as_mut().and_then(|d| d.example_mut().orbit_controls()) {
            controls.rotate(dx, dy, height);
        }
    }

    /// Scroll wheel, forwarded to the example's orbit controls
    pub fn zoom(&mut self, scroll: f32) {
        if let Some(controls) = self.current.as_mut().and_then(|d| d.example_mut().orbit_controls()) {
            controls.zoom(scroll);
        }
    }

    // ===== GETTERS =====

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    pub fn controls(&self) -> &ControlSurface {
        &self.controls
    }

    pub fn registry(&self) -> &ExampleRegistry {
        &self.registry
    }

    pub fn current(&self) -> Option<&ExampleDriver> {
        self.current.as_ref()
    }

    /// Name of the running example
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_ref().map(|driver| driver.name())
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Ticks completed since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Loads requested but not yet polled
    pub fn loads_in_flight(&self) -> usize {
        self.loader.in_flight()
    }
}

impl Drop for HostLoop {
    fn drop(&mut self) {
        self.stop_current();
    }
}

#[cfg(test)]
#[path = "host_loop_tests.rs"]
mod tests;
