use std::path::PathBuf;
use crate::log::LogSeverity;
use super::*;

#[test]
fn test_default_config() {
    let config = ShowcaseConfig::default();
    assert_eq!(config.title, "Galaxy3D Showcase");
    assert_eq!((config.width, config.height), (1280, 720));
    assert_eq!(config.initial_example, "gltf");
    assert_eq!(config.asset_root, PathBuf::from("assets"));
    assert_eq!(config.min_severity, LogSeverity::Info);
    assert!(!config.shadow_maps);
}

#[test]
fn test_env_overrides() {
    let mut config = ShowcaseConfig::default();
    config.apply_env(|key| match key {
        ASSET_ROOT_ENV => Some("/opt/galaxy3d/assets".to_string()),
        LOG_ENV => Some("debug".to_string()),
        _ => None,
    });
    assert_eq!(config.asset_root, PathBuf::from("/opt/galaxy3d/assets"));
    assert_eq!(config.min_severity, LogSeverity::Debug);
}

#[test]
fn test_invalid_env_values_are_ignored() {
    let mut config = ShowcaseConfig::default();
    config.apply_env(|key| match key {
        ASSET_ROOT_ENV => Some(String::new()),
        LOG_ENV => Some("loud".to_string()),
        _ => None,
    });
    assert_eq!(config, ShowcaseConfig::default());
}

#[test]
fn test_first_positional_argument_selects_example() {
    let mut config = ShowcaseConfig::default();
    config.apply_args(vec!["--fullscreen".to_string(), "planets".to_string(), "textures".to_string()]);
    assert_eq!(config.initial_example, "planets");

    let mut untouched = ShowcaseConfig::default();
    untouched.apply_args(Vec::new());
    assert_eq!(untouched.initial_example, "gltf");
}
