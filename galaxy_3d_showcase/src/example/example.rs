/// Example trait and lifecycle state.

use crate::camera::{Camera, OrbitControls};
use crate::error::{Error, Result};
use crate::assets::{LoadHandle, LoadedAsset};
use crate::example::{DestroyContext, FrameContext, InitContext, LoadContext};

/// Lifecycle of an example driver
///
/// Transitions only move forward: Created -> Initialized -> Destroyed,
/// or Created -> Destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Initialized,
    Destroyed,
}

/// One demo
///
/// Only `name`, `initialize` and `update` are required; every other hook
/// defaults to doing nothing. Hooks are only ever called by the
/// `ExampleDriver`, in lifecycle order.
pub trait Example: Send {
    /// Registry name ("gltf", "planets", ...)
    fn name(&self) -> &str;

    /// Build scene content, passes and bindings, and start asset loads
    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<()>;

    /// Advance the simulation by `delta` seconds (finite, >= 0)
    fn update(&mut self, ctx: &mut FrameContext<'_>, delta: f32) -> Result<()>;

    /// The viewport changed size (the camera aspect is already updated)
    fn resize(&mut self, _camera: &mut Camera, _width: u32, _height: u32) {}

    /// A load started by this example finished successfully
    fn on_loaded(&mut self, _ctx: &mut LoadContext<'_>, _handle: &LoadHandle, _asset: LoadedAsset) -> Result<()> {
        Ok(())
    }

    /// A load started by this example failed
    fn on_load_failed(&mut self, _handle: &LoadHandle, _error: &Error) {}

    /// Undo global renderer state changed in `initialize`
    ///
    /// Also called when `initialize` returned an error, so it must cope
    /// with a partially built example. Scene content, passes, bindings and
    /// tracked resources are released by the driver afterwards.
    fn destroy(&mut self, _ctx: &mut DestroyContext<'_>) {}

    /// Orbit controls the host should feed pointer input to
    fn orbit_controls(&mut self) -> Option<&mut OrbitControls> {
        None
    }
}
