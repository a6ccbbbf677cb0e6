/// PassChain - ordered post-processing passes sharing two ping-pong buffers.
///
/// Pass *i* reads the buffer written by pass *i − 1* and writes the other
/// buffer; the last pass writes the screen. Buffers and per-pass targets
/// are allocated lazily on the first `execute` and reallocated only when
/// the chain size actually changes.

use std::sync::Arc;
use crate::camera::Camera;
use crate::engine_bail;
use crate::engine_debug;
use crate::engine_warn;
use crate::error::{Error, Result};
use crate::post_process::{PassContext, PassInput, RenderPass};
use crate::renderer::{PassTarget, RenderTarget, RenderTargetDesc, Renderer};
use crate::scene::Scene;

/// Index of a pass within its chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassId(usize);

impl PassId {
    pub fn index(&self) -> usize {
        self.0
    }
}

struct PassEntry {
    pass: Box<dyn RenderPass>,
    /// Size the pass's own targets were last allocated for
    sized_for: Option<(u32, u32)>,
}

pub struct PassChain {
    passes: Vec<PassEntry>,
    buffers: Option<[Arc<dyn RenderTarget>; 2]>,
    size: (u32, u32),
    buffer_allocations: u64,
    resize_rounds: u64,
}

impl PassChain {
    /// Create an empty chain sized to the viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            passes: Vec::new(),
            buffers: None,
            size: (width.max(1), height.max(1)),
            buffer_allocations: 0,
            resize_rounds: 0,
        }
    }

    /// Append a pass
    ///
    /// The first pass must read the scene, every later pass must read the
    /// previous pass's output.
    pub fn add_pass(&mut self, pass: Box<dyn RenderPass>) -> Result<PassId> {
        let expected = if self.passes.is_empty() { PassInput::Scene } else { PassInput::Previous };
        if pass.input() != expected {
            engine_bail!("galaxy3d::PassChain", Configuration,
                "Pass '{}' at position {} reads {:?}, expected {:?}",
                pass.name(), self.passes.len(), pass.input(), expected);
        }

        self.passes.push(PassEntry { pass, sized_for: None });
        Ok(PassId(self.passes.len() - 1))
    }

    /// Run every pass in insertion order
    pub fn execute(&mut self, renderer: &mut dyn Renderer, scene: &Scene, camera: &Camera) -> Result<()> {
        if self.passes.is_empty() {
            engine_bail!("galaxy3d::PassChain", Configuration,
                "Cannot execute a pass chain with no passes");
        }
        self.prepare(renderer)?;

        let buffers = self.buffers.clone();
        let size = self.size;
        let last = self.passes.len() - 1;

        for (i, entry) in self.passes.iter_mut().enumerate() {
            let input = match (&buffers, i) {
                (_, 0) => None,
                (Some(buffers), _) => Some(buffers[(i - 1) % 2].as_ref()),
                (None, _) => None,
            };
            let output = match &buffers {
                _ if i == last => PassTarget::Screen,
                Some(buffers) => PassTarget::Offscreen(buffers[i % 2].as_ref()),
                None => {
                    engine_bail!("galaxy3d::PassChain", Configuration,
                        "Pass '{}' has no buffer to write to", entry.pass.name());
                }
            };

            let mut ctx = PassContext {
                renderer: &mut *renderer,
                scene,
                camera,
                input,
                output,
                size,
            };
            entry.pass.execute(&mut ctx)?;
        }
        Ok(())
    }

    /// Resize the chain's buffers and every sized pass
    ///
    /// Unchanged dimensions are a no-op. Zero dimensions are rejected and
    /// the previous size is kept.
    pub fn resize(&mut self, renderer: &mut dyn Renderer, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            engine_warn!("galaxy3d::PassChain", "Rejected resize to {}x{}, keeping {}x{}",
                width, height, self.size.0, self.size.1);
            return Err(Error::InvalidDimensions(width, height));
        }
        if (width, height) == self.size {
            return Ok(());
        }

        engine_debug!("galaxy3d::PassChain", "Resizing chain {}x{} -> {}x{}",
            self.size.0, self.size.1, width, height);
        self.size = (width, height);
        self.resize_rounds += 1;

        if self.buffers.is_some() {
            self.buffers = None;
            self.buffers = Some(self.allocate_buffers(renderer)?);
        }
        for entry in &mut self.passes {
            if entry.sized_for.is_some() {
                entry.pass.resize(renderer, width, height)?;
                entry.sized_for = Some((width, height));
            }
        }
        Ok(())
    }

    /// Typed access to a pass
    pub fn pass_mut<T: RenderPass + 'static>(&mut self, id: PassId) -> Option<&mut T> {
        self.passes.get_mut(id.0)?.pass.as_any_mut().downcast_mut::<T>()
    }

    /// Drop every pass and buffer
    pub fn release(&mut self) {
        for entry in &mut self.passes {
            entry.pass.release();
        }
        self.passes.clear();
        self.buffers = None;
    }

    // ===== GETTERS =====

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Pass names in execution order
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|entry| entry.pass.name()).collect()
    }

    /// Whether the ping-pong buffers are currently allocated
    pub fn has_buffers(&self) -> bool {
        self.buffers.is_some()
    }

    /// Ping-pong buffers allocated since creation
    pub fn buffer_allocations(&self) -> u64 {
        self.buffer_allocations
    }

    /// Accepted resizes that changed the chain size
    pub fn resize_rounds(&self) -> u64 {
        self.resize_rounds
    }

    // ===== INTERNAL =====

    fn prepare(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        if self.passes.len() >= 2 && self.buffers.is_none() {
            self.buffers = Some(self.allocate_buffers(renderer)?);
        }
        let size = self.size;
        for entry in &mut self.passes {
            if entry.sized_for != Some(size) {
                entry.pass.resize(renderer, size.0, size.1)?;
                entry.sized_for = Some(size);
            }
        }
        Ok(())
    }

    fn allocate_buffers(&mut self, renderer: &mut dyn Renderer) -> Result<[Arc<dyn RenderTarget>; 2]> {
        let (width, height) = self.size;
        let ping = renderer.create_render_target(&RenderTargetDesc::color("pass_chain_ping", width, height))?;
        let pong = renderer.create_render_target(&RenderTargetDesc::color("pass_chain_pong", width, height))?;
        self.buffer_allocations += 2;
        Ok([ping, pong])
    }
}

#[cfg(test)]
#[path = "pass_chain_tests.rs"]
mod tests;
