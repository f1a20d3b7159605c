//! Visual feedback drawn over the tracked face.
//!
//! A crosshair always marks the face centre. When the face moved, a
//! highlight rectangle is drawn over the whole face box as well.

use crate::constants::{CROSSHAIR_COLOR, CROSSHAIR_THICKNESS, HIGHLIGHT_COLOR, HIGHLIGHT_THICKNESS};
use crate::face_detection::FaceBox;
use crate::movement_detector::{Classification, Point};
use crate::Result;
use log::debug;
use opencv::core::{Mat, Point as CvPoint, Scalar};
use opencv::imgproc::{self, LINE_8, MARKER_CROSS};

/// One drawing primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Cross marker centred on the face
    Crosshair {
        /// Marker centre
        center: Point,
        /// Marker size in pixels
        size: i32,
    },
    /// Rectangle covering the whole face box
    Highlight {
        /// Box to outline
        rect: FaceBox,
    },
}

/// Decide which overlays represent `result` for `detection`
#[must_use]
pub fn overlays(detection: &FaceBox, result: Classification) -> Vec<Overlay> {
    let mut out = Vec::with_capacity(2);
    if result.is_moved() {
        out.push(Overlay::Highlight { rect: *detection });
    }
    out.push(Overlay::Crosshair {
        center: detection.center(),
        size: detection.marker_size(),
    });
    out
}

/// Draws classification feedback onto frames
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackRenderer;

impl FeedbackRenderer {
    /// Create a renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Draw the overlays for `result` into `frame` in place.
    ///
    /// # Errors
    ///
    /// Returns an error if an `OpenCV` drawing call fails.
    pub fn render(&self, frame: &mut Mat, detection: &FaceBox, result: Classification) -> Result<()> {
        for overlay in overlays(detection, result) {
            Self::draw(frame, &overlay)?;
        }
        Ok(())
    }

    fn draw(frame: &mut Mat, overlay: &Overlay) -> Result<()> {
        match *overlay {
            Overlay::Crosshair { center, size } => {
                debug!("crosshair at ({}, {}) size {size}", center.x, center.y);
                imgproc::draw_marker(
                    frame,
                    CvPoint::new(center.x, center.y),
                    color(CROSSHAIR_COLOR),
                    MARKER_CROSS,
                    size,
                    CROSSHAIR_THICKNESS,
                    LINE_8,
                )?;
            }
            Overlay::Highlight { rect } => {
                imgproc::rectangle(
                    frame,
                    rect.to_rect(),
                    color(HIGHLIGHT_COLOR),
                    HIGHLIGHT_THICKNESS,
                    LINE_8,
                    0,
                )?;
            }
        }
        Ok(())
    }
}

fn color([b, g, r]: [f64; 3]) -> Scalar {
    Scalar::new(b, g, r, 0.0)
}
