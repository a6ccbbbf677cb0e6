/// Render pass stage of a post-processing chain.
///
/// A pass reads either the scene or the buffer written by the pass
/// before it, and writes either an internal buffer or the screen (the
/// chain decides which). Auxiliary targets a pass needs for itself are
/// allocated in `resize` and dropped in `release`.

use std::any::Any;
use crate::camera::Camera;
use crate::error::Result;
use crate::renderer::{PassTarget, RenderTarget, Renderer};
use crate::scene::Scene;

/// What a pass reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassInput {
    /// Draws the scene itself (first pass of a chain)
    Scene,
    /// Samples the output of the previous pass
    Previous,
}

/// Everything a pass needs for one execution
pub struct PassContext<'a> {
    pub renderer: &'a mut dyn Renderer,
    pub scene: &'a Scene,
    pub camera: &'a Camera,
    /// Output of the previous pass (`None` for the first pass)
    pub input: Option<&'a dyn RenderTarget>,
    /// Where this pass writes
    pub output: PassTarget<'a>,
    /// Chain size in pixels
    pub size: (u32, u32),
}

pub trait RenderPass: Send {
    /// Debug name
    fn name(&self) -> &str;

    fn input(&self) -> PassInput;

    /// (Re)allocate the pass's own targets for a new chain size
    fn resize(&mut self, _renderer: &mut dyn Renderer, _width: u32, _height: u32) -> Result<()> {
        Ok(())
    }

    fn execute(&mut self, ctx: &mut PassContext<'_>) -> Result<()>;

    /// Drop every GPU resource the pass owns
    fn release(&mut self) {}

    /// Typed access for `PassChain::pass_mut`
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
