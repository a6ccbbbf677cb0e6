/// Renderer module - backend trait, GPU resource traits and the headless backend

// Module declarations
pub mod renderer;
pub mod render_target;
pub mod texture;
pub mod geometry;
pub mod headless_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use render_target::*;
pub use texture::*;
pub use geometry::*;
pub use headless_renderer::HeadlessRenderer;
