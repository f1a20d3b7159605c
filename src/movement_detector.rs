//! Movement classification between two consecutive face positions.
//!
//! The tolerance scales with the detected face size so that a face close to
//! the camera may jitter by more pixels than a distant one before it counts
//! as movement. Width carries full weight and height half weight:
//!
//! ```text
//! tolerance = (width + height / 2) * ratio
//! ```
//!
//! The asymmetry between the axes is long-standing behaviour and is kept
//! as-is.

use crate::constants::DEFAULT_TOLERANCE_RATIO;
use log::debug;

/// Integer screen coordinate, the top-left anchor of a face box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Create a new point
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Outcome of comparing a face position against the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Displacement stayed within tolerance
    Still,
    /// Displacement exceeded tolerance on at least one axis
    Moved,
}

impl Classification {
    /// Whether this outcome is [`Classification::Moved`]
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Size-relative movement classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementClassifier {
    tolerance_ratio: f64,
}

impl Default for MovementClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE_RATIO)
    }
}

impl MovementClassifier {
    /// Create a classifier with the given tolerance ratio
    #[must_use]
    pub const fn new(tolerance_ratio: f64) -> Self {
        Self { tolerance_ratio }
    }

    /// Ratio applied to the weighted face size
    #[must_use]
    pub const fn tolerance_ratio(&self) -> f64 {
        self.tolerance_ratio
    }

    /// Largest per-axis displacement still treated as noise
    #[must_use]
    pub fn tolerance(&self, width: i32, height: i32) -> f64 {
        (f64::from(width) + f64::from(height) / 2.0) * self.tolerance_ratio
    }

    /// Classify the displacement from `prior` to `current`.
    ///
    /// `width` and `height` are the dimensions of the current detection.
    /// Movement requires a strictly larger displacement than the tolerance
    /// on either axis.
    #[must_use]
    pub fn classify(&self, prior: Point, current: Point, width: i32, height: i32) -> Classification {
        let tolerance = self.tolerance(width, height);
        let dx = axis_delta(prior.x, current.x);
        let dy = axis_delta(prior.y, current.y);

        debug!("tolerance: {tolerance:.3} dx: {dx} dy: {dy}");

        if dx > tolerance || dy > tolerance {
            Classification::Moved
        } else {
            Classification::Still
        }
    }
}

/// Classify with the default 5% tolerance ratio
#[must_use]
pub fn classify(prior: Point, current: Point, width: i32, height: i32) -> Classification {
    MovementClassifier::default().classify(prior, current, width, height)
}

#[allow(clippy::cast_precision_loss)] // |i32 - i32| fits exactly in f64
fn axis_delta(a: i32, b: i32) -> f64 {
    (i64::from(b) - i64::from(a)).abs() as f64
}
