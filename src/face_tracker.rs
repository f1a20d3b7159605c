//! Single-face tracking across frames.
//!
//! The tracker remembers where the face was in the last frame it saw and
//! asks the [`MovementClassifier`] whether the newest detection is far
//! enough away to count as movement. Only the first face of each frame is
//! tracked; following several faces would need per-identity state.

use crate::face_detection::FaceBox;
use crate::movement_detector::{Classification, MovementClassifier, Point};
use log::debug;

/// Tracker state for one capture session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    /// No face has been observed yet
    #[default]
    Bootstrapping,
    /// At least one face has been observed
    Tracking {
        /// Position of the most recently observed face
        prior: Point,
    },
}

/// Frame-to-frame face movement tracker
#[derive(Debug, Clone, Default)]
pub struct FaceTracker {
    classifier: MovementClassifier,
    state: TrackingState,
}

impl FaceTracker {
    /// Create a tracker using the given classifier
    #[must_use]
    pub fn new(classifier: MovementClassifier) -> Self {
        Self {
            classifier,
            state: TrackingState::Bootstrapping,
        }
    }

    /// Feed one detection and classify it against the previous one.
    ///
    /// The first detection of the session always yields
    /// [`Classification::Still`]. Every call replaces the stored position
    /// with the detection's position, whatever the outcome.
    pub fn observe(&mut self, detection: &FaceBox) -> Classification {
        let current = detection.position();

        let result = match self.state {
            TrackingState::Bootstrapping => {
                debug!("bootstrap frame at ({}, {})", current.x, current.y);
                Classification::Still
            }
            TrackingState::Tracking { prior } => {
                self.classifier
                    .classify(prior, current, detection.width, detection.height)
            }
        };

        self.state = TrackingState::Tracking { prior: current };
        result
    }

    /// Observe the first detection of a frame, ignoring the rest.
    ///
    /// Returns `None` without touching any state when `detections` is empty.
    pub fn observe_first(&mut self, detections: &[FaceBox]) -> Option<(FaceBox, Classification)> {
        let first = *detections.first()?;
        Some((first, self.observe(&first)))
    }

    /// Current tracking state
    #[must_use]
    pub const fn state(&self) -> TrackingState {
        self.state
    }

    /// Position of the last observed face, if any
    #[must_use]
    pub const fn prior(&self) -> Option<Point> {
        match self.state {
            TrackingState::Bootstrapping => None,
            TrackingState::Tracking { prior } => Some(prior),
        }
    }

    /// Whether the bootstrap frame has been seen
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        matches!(self.state, TrackingState::Tracking { .. })
    }
}
