/// Scene pass - draws the scene's shaded color.

use std::any::Any;
use crate::error::Result;
use crate::post_process::{PassContext, PassInput, RenderPass};
use crate::renderer::DrawMode;

#[derive(Debug, Default)]
pub struct ScenePass;

impl ScenePass {
    pub fn new() -> Self {
        Self
    }
}

impl RenderPass for ScenePass {
    fn name(&self) -> &str {
        "scene"
    }

    fn input(&self) -> PassInput {
        PassInput::Scene
    }

    fn execute(&mut self, ctx: &mut PassContext<'_>) -> Result<()> {
        ctx.renderer.draw_scene(ctx.scene, ctx.camera, DrawMode::Color, ctx.output)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
