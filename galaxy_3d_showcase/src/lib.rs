/*!
# Galaxy 3D Showcase

Interactive 3D demo framework built on the Galaxy 3D renderer abstraction.

Each demo is an `Example` driven through a strict lifecycle
(created, initialized, destroyed). While initialized it owns a scene
graph, a post-processing `PassChain`, live-tunable parameter bindings
and any asset loads still in flight. The host loop feeds it frame time,
viewport resizes and load completions, and tears it down completely
before the next demo starts.

## Architecture

- **Renderer**: Backend trait (GPU backends, `HeadlessRenderer`)
- **Scene / Camera**: Scene graph, lights, materials, orbit controls
- **PassChain**: Ordered post-processing passes with ping-pong buffers
- **ParameterBinding**: Typed, range-checked live parameters
- **AssetLoader**: Asynchronous loads with lifecycle-guarded delivery
- **ExampleDriver**: Lifecycle state machine around an `Example`
- **HostLoop**: Owns the per-frame loop and switches between demos
*/

// Internal modules
mod error;
pub mod log;
pub mod renderer;
pub mod camera;
pub mod scene;
pub mod parameter;
pub mod post_process;
pub mod assets;
pub mod example;
pub mod host;
pub mod demos;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Renderer backend trait
    pub use crate::renderer::Renderer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            DefaultLogger, LogEntry, LogFacadeLogger, LogSeverity, Logger,
        };
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::camera::*;
        pub use crate::scene::*;
    }

    // Post-processing sub-module
    pub mod post {
        pub use crate::post_process::*;
    }

    // Parameter binding sub-module
    pub mod params {
        pub use crate::parameter::*;
    }

    // Asset loading sub-module
    pub mod assets {
        pub use crate::assets::*;
    }

    // Example lifecycle sub-module
    pub mod example {
        pub use crate::example::*;
    }

    // Host loop sub-module
    pub mod host {
        pub use crate::host::*;
    }

    // Built-in demos
    pub mod demos {
        pub use crate::demos::*;
    }
}

// Re-export math library at crate root
pub use glam;
