//! Face detection backed by an `OpenCV` Haar cascade classifier.

use crate::constants::{CROSSHAIR_SIZE_DIVISOR, DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_FACTOR};
use crate::error::Error;
use crate::movement_detector::Point;
use crate::Result;
use log::info;
use opencv::core::{Mat, Rect, Size, Vector};
use opencv::imgproc;
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use std::path::Path;

/// Axis-aligned bounding box of one detected face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FaceBox {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Box width
    pub width: i32,
    /// Box height
    pub height: i32,
}

impl FaceBox {
    /// Create a new face box
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left anchor used for movement comparison
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Centre of the box, rounded towards the top-left
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Crosshair size proportional to the face size
    #[must_use]
    pub const fn marker_size(&self) -> i32 {
        (self.width + self.height) / CROSSHAIR_SIZE_DIVISOR
    }

    /// Same box as an `OpenCV` rectangle
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl From<Rect> for FaceBox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Anything able to locate faces in a BGR frame
pub trait FaceDetector {
    /// Detect faces in a frame.
    ///
    /// May return an empty list. Ordering among several faces is
    /// unspecified.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying detector fails on this frame.
    fn detect(&mut self, frame: &Mat) -> Result<Vec<FaceBox>>;
}

/// Haar cascade face detector
pub struct CascadeFaceDetector {
    classifier: CascadeClassifier,
    scale_factor: f64,
    min_neighbors: i32,
}

impl CascadeFaceDetector {
    /// Load a cascade classifier from an XML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceLoad`] if the file is missing, cannot be
    /// parsed, or loads as an empty classifier.
    pub fn new<P: AsRef<Path>>(cascade_path: P, scale_factor: f64, min_neighbors: i32) -> Result<Self> {
        let path = cascade_path.as_ref();
        if !path.is_file() {
            return Err(Error::ResourceLoad(format!(
                "Cascade file not found: {}",
                path.display()
            )));
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| Error::ResourceLoad(format!("Cascade path is not valid UTF-8: {}", path.display())))?;

        let classifier = CascadeClassifier::new(path_str)
            .map_err(|e| Error::ResourceLoad(format!("Unable to load {}: {e}", path.display())))?;

        if classifier.empty()? {
            return Err(Error::ResourceLoad(format!(
                "Cascade file {} contains no classifier",
                path.display()
            )));
        }

        info!("Loaded face cascade from {}", path.display());

        Ok(Self {
            classifier,
            scale_factor,
            min_neighbors,
        })
    }

    /// Load a cascade with the default detection parameters
    ///
    /// # Errors
    ///
    /// See [`CascadeFaceDetector::new`].
    pub fn with_defaults<P: AsRef<Path>>(cascade_path: P) -> Result<Self> {
        Self::new(cascade_path, DEFAULT_SCALE_FACTOR, DEFAULT_MIN_NEIGHBORS)
    }
}

impl FaceDetector for CascadeFaceDetector {
    fn detect(&mut self, frame: &Mat) -> Result<Vec<FaceBox>> {
        let mut gray = Mat::default();
        if frame.channels() == 1 {
            frame.copy_to(&mut gray)?;
        } else {
            imgproc::cvt_color_def(frame, &mut gray, imgproc::COLOR_BGR2GRAY)?;
        }

        let mut faces = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            &gray,
            &mut faces,
            self.scale_factor,
            self.min_neighbors,
            0,
            Size::new(0, 0),
            Size::new(0, 0),
        )?;

        Ok(faces.iter().map(FaceBox::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_box_geometry() {
        let face = FaceBox::new(100, 50, 200, 120);
        assert_eq!(face.position(), Point::new(100, 50));
        assert_eq!(face.center(), Point::new(200, 110));
        assert_eq!(face.marker_size(), 40);
    }

    #[test]
    fn test_center_truncates_odd_sizes() {
        let face = FaceBox::new(0, 0, 15, 9);
        assert_eq!(face.center(), Point::new(7, 4));
        assert_eq!(face.marker_size(), 3);
    }

    #[test]
    fn test_rect_conversion() {
        let rect = Rect::new(3, 4, 5, 6);
        let face = FaceBox::from(rect);
        assert_eq!(face, FaceBox::new(3, 4, 5, 6));
        assert_eq!(face.to_rect(), rect);
    }

    #[test]
    fn test_missing_cascade_is_resource_error() {
        let result = CascadeFaceDetector::with_defaults("does/not/exist.xml");
        assert!(matches!(result, Err(Error::ResourceLoad(_))));
    }
}
