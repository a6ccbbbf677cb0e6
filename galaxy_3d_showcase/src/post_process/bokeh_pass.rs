/// Bokeh pass - depth-of-field blur driven by a focus distance.
///
/// Renders the scene's depth into a target the pass owns, then runs the
/// backend's `bokeh` effect over the previous pass's color using that
/// depth. The depth target follows the chain size.

use std::any::Any;
use std::sync::Arc;
use bytemuck::{Pod, Zeroable};
use crate::engine_bail;
use crate::error::Result;
use crate::post_process::{PassContext, PassInput, RenderPass};
use crate::renderer::{DrawMode, PassTarget, RenderTarget, RenderTargetDesc, Renderer};

/// Uniform block of the `bokeh` effect (std140-compatible)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BokehUniforms {
    /// Distance to the focal plane
    pub focus: f32,
    /// Lens aperture; larger means shallower depth of field
    pub aperture: f32,
    /// Maximum blur radius
    pub maxblur: f32,
    /// Viewport width / height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub _padding: [f32; 2],
}

pub struct BokehPass {
    uniforms: BokehUniforms,
    depth: Option<Arc<dyn RenderTarget>>,
}

impl BokehPass {
    pub fn new(focus: f32, aperture: f32, maxblur: f32) -> Self {
        Self {
            uniforms: BokehUniforms {
                focus,
                aperture,
                maxblur,
                aspect: 1.0,
                near: 0.1,
                far: 2000.0,
                _padding: [0.0; 2],
            },
            depth: None,
        }
    }

    pub fn uniforms(&self) -> &BokehUniforms {
        &self.uniforms
    }

    pub fn set_focus(&mut self, focus: f32) {
        self.uniforms.focus = focus;
    }

    pub fn set_aperture(&mut self, aperture: f32) {
        self.uniforms.aperture = aperture;
    }

    pub fn set_maxblur(&mut self, maxblur: f32) {
        self.uniforms.maxblur = maxblur;
    }

    /// Auxiliary depth target, once sized
    pub fn depth_target(&self) -> Option<&Arc<dyn RenderTarget>> {
        self.depth.as_ref()
    }
}

impl RenderPass for BokehPass {
    fn name(&self) -> &str {
        "bokeh"
    }

    fn input(&self) -> PassInput {
        PassInput::Previous
    }

    fn resize(&mut self, renderer: &mut dyn Renderer, width: u32, height: u32) -> Result<()> {
        self.depth = None;
        self.depth = Some(renderer.create_render_target(&RenderTargetDesc::depth("bokeh_depth", width, height))?);
        self.uniforms.aspect = width as f32 / height as f32;
        Ok(())
    }

    fn execute(&mut self, ctx: &mut PassContext<'_>) -> Result<()> {
        let Some(input) = ctx.input else {
            engine_bail!("galaxy3d::BokehPass", Configuration,
                "Bokeh pass has no previous pass to read from");
        };
        let Some(depth) = self.depth.as_deref() else {
            engine_bail!("galaxy3d::BokehPass", Configuration,
                "Bokeh pass executed before being sized");
        };

        self.uniforms.near = ctx.camera.near();
        self.uniforms.far = ctx.camera.far();

        ctx.renderer.draw_scene(ctx.scene, ctx.camera, DrawMode::Depth, PassTarget::Offscreen(depth))?;
        ctx.renderer.draw_effect(
            "bokeh",
            &[input, depth],
            bytemuck::bytes_of(&self.uniforms),
            ctx.output,
        )
    }

    fn release(&mut self) {
        self.depth = None;
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
