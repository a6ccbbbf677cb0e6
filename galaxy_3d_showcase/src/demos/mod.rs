//! Bundled demos
//!
//! Each demo is an `Example`; the host registry builds a fresh instance
//! every time a demo is selected.

mod gltf_example;
mod planets_example;
mod texture_example;

pub use gltf_example::GltfExample;
pub use planets_example::PlanetsExample;
pub use texture_example::TextureExample;

#[cfg(test)]
#[path = "demos_tests.rs"]
mod tests;
