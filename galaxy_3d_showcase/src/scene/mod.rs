//! Scene module
//!
//! Scene graph, materials, lights and animation playback. Scenes are
//! plain data: the renderer backend reads them during scene passes.

mod animation;
mod color;
mod light;
mod material;
mod node;
mod scene;
mod transform;

pub use animation::{AnimationClip, AnimationMixer};
pub use color::Color;
pub use light::{DirectionalLight, PointLight};
pub use material::{Material, MaterialKind, MaterialMaps};
pub use node::{Node, NodeContent, NodeKey};
pub use scene::{Background, Scene};
pub use transform::Transform;
