//! Scripted collaborators for driving the capture loop in tests

#![allow(dead_code)]

use motion_sentinel::{
    capture::{FrameDisplay, FrameSource},
    face_detection::{FaceBox, FaceDetector},
    Error, Result,
};
use opencv::{
    core::{Mat, CV_8UC3},
    prelude::*,
};
use std::collections::VecDeque;

/// Create a black BGR test frame
pub fn create_test_frame(height: i32, width: i32) -> Result<Mat> {
    Mat::zeros(height, width, CV_8UC3)?.to_mat().map_err(Into::into)
}

/// Frame source that yields a fixed number of blank frames, then fails
pub struct ScriptedSource {
    remaining: usize,
    pub reads: usize,
}

impl ScriptedSource {
    pub fn new(frames: usize) -> Self {
        Self { remaining: frames, reads: 0 }
    }
}

impl FrameSource for ScriptedSource {
    fn read_frame(&mut self) -> Result<Mat> {
        self.reads += 1;
        if self.remaining == 0 {
            return Err(Error::Acquisition("scripted source exhausted".to_string()));
        }
        self.remaining -= 1;
        create_test_frame(480, 640)
    }
}

/// Detector returning a prepared list of faces per frame
pub struct ScriptedDetector {
    frames: VecDeque<Vec<FaceBox>>,
}

impl ScriptedDetector {
    pub fn new(frames: Vec<Vec<FaceBox>>) -> Self {
        Self { frames: frames.into() }
    }
}

impl FaceDetector for ScriptedDetector {
    fn detect(&mut self, _frame: &Mat) -> Result<Vec<FaceBox>> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}

/// Display that records shown frames and requests quit after a set number
pub struct RecordingDisplay {
    quit_after: Option<usize>,
    pub shown: Vec<Mat>,
    pub polls: usize,
}

impl RecordingDisplay {
    pub fn quit_after(polls: usize) -> Self {
        Self {
            quit_after: Some(polls),
            shown: Vec::new(),
            polls: 0,
        }
    }

    pub fn never_quit() -> Self {
        Self {
            quit_after: None,
            shown: Vec::new(),
            polls: 0,
        }
    }
}

impl FrameDisplay for RecordingDisplay {
    fn show(&mut self, frame: &Mat) -> Result<()> {
        self.shown.push(frame.try_clone()?);
        Ok(())
    }

    fn poll_quit_requested(&mut self) -> Result<bool> {
        self.polls += 1;
        Ok(self.quit_after.is_some_and(|n| self.polls >= n))
    }
}
