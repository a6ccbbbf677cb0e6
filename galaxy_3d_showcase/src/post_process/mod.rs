//! Post-processing module
//!
//! A `PassChain` runs an ordered list of `RenderPass` stages, threading
//! each stage's output into the next through a pair of ping-pong buffers
//! and sending the last stage to the screen.

mod bokeh_pass;
mod copy_pass;
mod pass_chain;
mod render_pass;
mod scene_pass;

pub use bokeh_pass::{BokehPass, BokehUniforms};
pub use copy_pass::CopyPass;
pub use pass_chain::{PassChain, PassId};
pub use render_pass::{PassContext, PassInput, RenderPass};
pub use scene_pass::ScenePass;
