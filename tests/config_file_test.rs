//! Configuration file loading and saving

use motion_sentinel::{
    config::{Config, EXAMPLE_CONFIG},
    Error,
};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_save_and_load_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sentinel.yaml");

    let mut config = Config::default();
    config.capture.camera_index = 2;
    config.detector.cascade_path = PathBuf::from("cascades/frontal.xml");
    config.movement.tolerance_ratio = 0.08;
    config.game.halt_on_movement = true;

    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_load_example_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("example.yaml");
    std::fs::write(&path, EXAMPLE_CONFIG).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.detector.scale_factor, 1.3);
    assert_eq!(loaded.detector.min_neighbors, 5);
    assert_eq!(loaded.display.window_title, "Movement Detector");
    assert!(!loaded.game.halt_on_movement);
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let result = Config::from_file(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_invalid_field_type() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "capture:\n  camera_index: front\n").unwrap();

    let result = Config::from_file(&path);
    match result {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}
