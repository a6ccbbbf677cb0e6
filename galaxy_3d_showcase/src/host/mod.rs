//! Host module
//!
//! The host loop owns the long-lived state (scene, camera, renderer,
//! asset loader, control surface), runs one example at a time and
//! forwards frame ticks, resizes, pointer input and load completions to it.

mod config;
mod host_loop;
mod registry;

pub use config::ShowcaseConfig;
pub use host_loop::HostLoop;
pub use registry::{ExampleFactory, ExampleRegistry};
