//! Example module
//!
//! An `Example` is one demo: it fills the shared scene, declares its
//! post-processing passes and live parameters, and animates everything
//! once per frame. The `ExampleDriver` wraps an example in the fixed
//! lifecycle (created, initialized, destroyed) and guards every entry
//! point against being called in the wrong state.

mod context;
mod example;
mod example_driver;

pub use context::{DestroyContext, FrameContext, Host, InitContext, LoadContext, ResourceSet};
pub use example::{Example, LifecycleState};
pub use example_driver::ExampleDriver;
