/// Copy pass - forwards the previous pass's output unchanged.

use std::any::Any;
use crate::engine_bail;
use crate::error::Result;
use crate::post_process::{PassContext, PassInput, RenderPass};

#[derive(Debug, Default)]
pub struct CopyPass;

impl CopyPass {
    pub fn new() -> Self {
        Self
    }
}

impl RenderPass for CopyPass {
    fn name(&self) -> &str {
        "copy"
    }

    fn input(&self) -> PassInput {
        PassInput::Previous
    }

    fn execute(&mut self, ctx: &mut PassContext<'_>) -> Result<()> {
        let Some(input) = ctx.input else {
            engine_bail!("galaxy3d::CopyPass", Configuration,
                "Copy pass has no previous pass to read from");
        };
        ctx.renderer.draw_effect("copy", &[input], &[], ctx.output)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
