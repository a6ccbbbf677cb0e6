/// Showcase configuration.

use std::path::PathBuf;
use crate::engine_warn;
use crate::log::LogSeverity;

/// Environment variable overriding the asset root directory
pub const ASSET_ROOT_ENV: &str = "GALAXY3D_ASSET_ROOT";
/// Environment variable overriding the minimum log severity
pub const LOG_ENV: &str = "GALAXY3D_LOG";

/// Showcase configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    /// Window title
    pub title: String,
    /// Initial viewport width in pixels
    pub width: u32,
    /// Initial viewport height in pixels
    pub height: u32,
    /// Example started first
    pub initial_example: String,
    /// Directory asset paths are resolved against
    pub asset_root: PathBuf,
    /// Engine log messages below this severity are dropped
    pub min_severity: LogSeverity,
    /// Shadow maps enabled before any example changes it
    pub shadow_maps: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            title: "Galaxy3D Showcase".to_string(),
            width: 1280,
            height: 720,
            initial_example: "gltf".to_string(),
            asset_root: PathBuf::from("assets"),
            min_severity: LogSeverity::Info,
            shadow_maps: false,
        }
    }
}

impl ShowcaseConfig {
    /// Defaults, overridden by the process environment and arguments
    ///
    /// The first positional argument (after the program name) selects the
    /// initial example.
    pub fn from_env_and_args() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_args(std::env::args().skip(1));
        config
    }

    /// Apply environment overrides through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(root) = lookup(ASSET_ROOT_ENV).filter(|root| !root.is_empty()) {
            self.asset_root = PathBuf::from(root);
        }
        if let Some(level) = lookup(LOG_ENV) {
            match LogSeverity::parse(&level) {
                Some(severity) => self.min_severity = severity,
                None => engine_warn!("galaxy3d::ShowcaseConfig",
                    "Ignoring unknown {} value '{}'", LOG_ENV, level),
            }
        }
    }

    /// Apply command line overrides (program name already stripped)
    pub fn apply_args(&mut self, args: impl IntoIterator<Item = String>) {
        if let Some(example) = args.into_iter().find(|arg| !arg.starts_with('-')) {
            self.initial_example = example;
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
