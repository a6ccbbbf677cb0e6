//! Camera module - perspective camera and orbit controls.
//!
//! Cameras are owned by the host loop and shared with the running
//! example; orbit controls are owned by the example that wants them.

mod camera;
mod orbit_controls;

pub use camera::Camera;
pub use orbit_controls::OrbitControls;
