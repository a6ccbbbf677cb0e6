//! Parameter module - live-tunable values shared between the control
//! surface and an example's simulation logic.

mod binding;
mod control_surface;
mod parameter_set;

pub use binding::{
    BoolBinding, ColorBinding, ParameterBinding, ParameterKind, ParameterValue, ScalarBinding,
};
pub use control_surface::{ControlFolder, ControlSurface, FolderBuilder};
pub use parameter_set::ParameterSet;
