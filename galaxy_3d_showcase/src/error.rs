//! Error types for the Galaxy3D showcase
//!
//! This module defines the error types used throughout the showcase,
//! covering the example lifecycle, pass chain configuration, parameter
//! bindings, asset loading and the renderer backend.

use std::fmt;

/// Result type for Galaxy3D showcase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D showcase errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A lifecycle method was invoked outside its permitted state
    /// (e.g. update before initialize, initialize twice)
    LifecycleViolation(String),

    /// The pass chain is empty or its passes are wired incorrectly
    Configuration(String),

    /// An asset could not be fetched or decoded by the loader
    AssetLoad(String),

    /// A resize was requested with a zero width or height
    InvalidDimensions(u32, u32),

    /// A parameter binding was declared or written incorrectly
    InvalidParameter(String),

    /// An argument was out of its accepted domain (e.g. negative delta time)
    InvalidArgument(String),

    /// Backend-specific error (GPU backend, headless backend, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, render target, geometry, etc.)
    InvalidResource(String),

    /// Initialization failed (renderer, window, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LifecycleViolation(msg) => write!(f, "Lifecycle violation: {}", msg),
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Error::AssetLoad(msg) => write!(f, "Asset load failed: {}", msg),
            Error::InvalidDimensions(width, height) => {
                write!(f, "Invalid dimensions: {}x{}", width, height)
            }
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Whether this error must abort the current operation and reach the host.
    ///
    /// Asset failures are recovered locally; everything else propagates.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::AssetLoad(_))
    }
}

// ===== ERROR MACROS =====

/// Build an error, logging it at ERROR severity with file:line
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("galaxy3d::PassChain", Configuration, "no passes in chain '{}'", name);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::$variant(message)
    }};
}

/// Log an error and return it from the enclosing function
///
/// # Example
///
/// ```ignore
/// engine_bail!("galaxy3d::ExampleDriver", LifecycleViolation, "update() before initialize()");
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
