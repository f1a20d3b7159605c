//! Camera input and window output.
//!
//! Both adapters own their `OpenCV` resource for the length of a session and
//! release it when dropped, so every exit path from the capture loop frees
//! the camera and closes the window.

use crate::constants::{KEY_ESCAPE, KEY_POLL_DELAY_MS, KEY_QUIT_LOWER, KEY_QUIT_UPPER};
use crate::error::Error;
use crate::Result;
use log::{info, warn};
use opencv::core::Mat;
use opencv::highgui::{self, WINDOW_AUTOSIZE};
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

/// Blocking source of video frames
pub trait FrameSource {
    /// Read the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Acquisition`] if no valid frame could be read.
    fn read_frame(&mut self) -> Result<Mat>;
}

/// Frame output together with the user's quit request
pub trait FrameDisplay {
    /// Present a frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be shown.
    fn show(&mut self, frame: &Mat) -> Result<()>;

    /// Whether a quit key has been pressed since the last poll.
    ///
    /// # Errors
    ///
    /// Returns an error if input polling fails.
    fn poll_quit_requested(&mut self) -> Result<bool>;
}

/// Whether a key code returned by `wait_key` ends the session
#[must_use]
pub const fn is_quit_key(key: i32) -> bool {
    if key < 0 {
        return false;
    }
    matches!(key & 0xFF, KEY_QUIT_LOWER | KEY_QUIT_UPPER | KEY_ESCAPE)
}

/// Webcam frame source
pub struct CameraCapture {
    capture: VideoCapture,
    index: i32,
}

impl CameraCapture {
    /// Open the camera with the given index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Acquisition`] if the device cannot be opened.
    pub fn open(index: i32) -> Result<Self> {
        info!("Opening camera {index}");
        let capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(Error::Acquisition(format!("Unable to open camera {index}")));
        }
        Ok(Self { capture, index })
    }
}

impl FrameSource for CameraCapture {
    fn read_frame(&mut self) -> Result<Mat> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Err(Error::Acquisition(format!(
                "Camera {} returned no frame",
                self.index
            )));
        }
        Ok(frame)
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            warn!("Failed to release camera {}: {e}", self.index);
        } else {
            info!("Camera {} released", self.index);
        }
    }
}

/// `highgui` preview window
pub struct HighguiWindow {
    title: String,
}

impl HighguiWindow {
    /// Create the preview window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn open(title: &str) -> Result<Self> {
        highgui::named_window(title, WINDOW_AUTOSIZE)?;
        Ok(Self {
            title: title.to_string(),
        })
    }
}

impl FrameDisplay for HighguiWindow {
    fn show(&mut self, frame: &Mat) -> Result<()> {
        highgui::imshow(&self.title, frame)?;
        Ok(())
    }

    fn poll_quit_requested(&mut self) -> Result<bool> {
        Ok(is_quit_key(highgui::wait_key(KEY_POLL_DELAY_MS)?))
    }
}

impl Drop for HighguiWindow {
    fn drop(&mut self) {
        if let Err(e) = highgui::destroy_window(&self.title) {
            warn!("Failed to close window '{}': {e}", self.title);
        }
    }
}
