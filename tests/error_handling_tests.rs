//! Error handling tests for initialisation and error formatting

use motion_sentinel::{
    app::MotionSentinelApp,
    config::Config,
    face_detection::CascadeFaceDetector,
    Error,
};
use tempfile::tempdir;

#[test]
fn test_missing_cascade_file() {
    let result = CascadeFaceDetector::with_defaults("no/such/face_detector.xml");
    match result {
        Err(Error::ResourceLoad(msg)) => assert!(msg.contains("face_detector.xml")),
        Err(other) => panic!("Expected ResourceLoad, got {other}"),
        Ok(_) => panic!("Expected ResourceLoad, got a detector"),
    }
}

#[test]
fn test_malformed_cascade_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    std::fs::write(&path, "<?xml version=\"1.0\"?>\n<opencv_storage></opencv_storage>\n").unwrap();

    let result = CascadeFaceDetector::with_defaults(&path);
    assert!(matches!(result, Err(Error::ResourceLoad(_))));
}

#[test]
fn test_app_fails_before_opening_camera() {
    // The cascade is loaded first, so no camera is needed to hit this error
    let mut config = Config::default();
    config.detector.cascade_path = "missing/cascade.xml".into();

    let result = MotionSentinelApp::new(config);
    assert!(matches!(result, Err(Error::ResourceLoad(_))));
}

#[test]
fn test_app_rejects_invalid_config() {
    let mut config = Config::default();
    config.movement.tolerance_ratio = -0.5;

    let result = MotionSentinelApp::new(config);
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_error_display_formatting() {
    let cases = [
        (Error::ResourceLoad("cascade".to_string()), "Resource load error: cascade"),
        (Error::Acquisition("camera 0".to_string()), "Frame acquisition error: camera 0"),
        (Error::ConfigError("ratio".to_string()), "Configuration error: ratio"),
    ];

    for (error, expected) in cases {
        assert_eq!(error.to_string(), expected);
    }
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: Error = io.into();
    assert!(matches!(error, Error::Io(_)));
    assert!(error.to_string().contains("gone"));
}
