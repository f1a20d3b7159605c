//! Motion sentinel library: catch a face moving between camera frames.
//!
//! Each frame goes through the same pipeline:
//! 1. Read a frame from the camera
//! 2. Detect faces with a Haar cascade
//! 3. Compare the first face's position with the previous frame, using a
//!    tolerance that grows with the face size
//! 4. Draw a crosshair on the face, plus a red box when it moved
//! 5. Show the frame and check for a quit key
//!
//! # Examples
//!
//! ## Movement classification
//!
//! ```
//! use motion_sentinel::movement_detector::{classify, Classification, Point};
//!
//! // (400 + 400 / 2) * 0.05 = 30 pixels of allowed jitter
//! let prior = Point::new(100, 100);
//! assert_eq!(classify(prior, Point::new(100, 129), 400, 400), Classification::Still);
//! assert_eq!(classify(prior, Point::new(140, 100), 400, 400), Classification::Moved);
//! ```
//!
//! ## Tracking across frames
//!
//! ```
//! use motion_sentinel::face_detection::FaceBox;
//! use motion_sentinel::face_tracker::FaceTracker;
//! use motion_sentinel::movement_detector::Classification;
//!
//! let mut tracker = FaceTracker::default();
//! let face = FaceBox::new(100, 100, 200, 200);
//! assert_eq!(tracker.observe(&face), Classification::Still); // bootstrap
//! assert_eq!(tracker.observe(&FaceBox::new(160, 100, 200, 200)), Classification::Moved);
//! ```
//!
//! ## Complete session
//!
//! ```no_run
//! use motion_sentinel::{app::MotionSentinelApp, config::Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = MotionSentinelApp::new(Config::default())?;
//! let summary = app.run()?;
//! println!("{} frames, {} moved", summary.frames_processed, summary.movements_detected);
//! # Ok(())
//! # }
//! ```

/// Face detection module for finding faces in frames
pub mod face_detection;

/// Size-relative movement classification
pub mod movement_detector;

/// Single-face tracking state across frames
pub mod face_tracker;

/// Crosshair and highlight overlays
pub mod feedback;

/// Camera input and window output
pub mod capture;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
