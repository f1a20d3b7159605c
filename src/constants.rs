//! Constants used throughout the application

/// Fraction of the face size tolerated as coordinate jitter between frames
pub const DEFAULT_TOLERANCE_RATIO: f64 = 0.05;

/// Haar cascade file loaded when nothing else is configured
pub const DEFAULT_CASCADE_PATH: &str = "face_detector.xml";

/// Cascade pyramid scale step
pub const DEFAULT_SCALE_FACTOR: f64 = 1.3;

/// Neighbouring hits required to keep a cascade candidate
pub const DEFAULT_MIN_NEIGHBORS: i32 = 5;

/// Default camera index
pub const DEFAULT_CAMERA_INDEX: i32 = 0;

/// Title of the preview window
pub const WINDOW_TITLE: &str = "Movement Detector";

/// Crosshair size divisor applied to `width + height`
pub const CROSSHAIR_SIZE_DIVISOR: i32 = 8;

/// Crosshair stroke thickness in pixels
pub const CROSSHAIR_THICKNESS: i32 = 2;

/// Highlight rectangle stroke thickness in pixels
pub const HIGHLIGHT_THICKNESS: i32 = 3;

/// Crosshair colour (BGR green)
pub const CROSSHAIR_COLOR: [f64; 3] = [0.0, 255.0, 0.0];

/// Highlight colour (BGR red)
pub const HIGHLIGHT_COLOR: [f64; 3] = [0.0, 0.0, 255.0];

/// Escape key code, ends the session
pub const KEY_ESCAPE: i32 = 27;

/// Quit keys
pub const KEY_QUIT_LOWER: i32 = b'q' as i32;
pub const KEY_QUIT_UPPER: i32 = b'Q' as i32;

/// Milliseconds `wait_key` blocks per frame
pub const KEY_POLL_DELAY_MS: i32 = 1;
