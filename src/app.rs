//! Main application module: the capture loop and its wiring.

use crate::{
    capture::{CameraCapture, FrameDisplay, FrameSource, HighguiWindow},
    config::Config,
    error::Result,
    face_detection::{CascadeFaceDetector, FaceDetector},
    face_tracker::FaceTracker,
    feedback::FeedbackRenderer,
    movement_detector::{Classification, MovementClassifier},
};
use log::{debug, info, warn};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user pressed a quit key
    QuitRequested,
    /// Movement was detected while halting on movement was enabled
    CaughtMoving,
}

/// Counters collected over one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// How the session ended
    pub outcome: SessionOutcome,
    /// Frames read and displayed
    pub frames_processed: u64,
    /// Frames in which at least one face was found
    pub faces_observed: u64,
    /// Frames classified as moved
    pub movements_detected: u64,
}

impl SessionSummary {
    fn finish(mut self, outcome: SessionOutcome) -> Self {
        self.outcome = outcome;
        self
    }
}

/// One capture session over borrowed collaborators.
///
/// Each iteration reads a frame, detects faces, classifies the first face
/// against the previous frame, draws feedback, shows the frame and checks
/// for a quit request.
pub struct CaptureLoop<'a> {
    source: &'a mut dyn FrameSource,
    detector: &'a mut dyn FaceDetector,
    display: &'a mut dyn FrameDisplay,
    tracker: &'a mut FaceTracker,
    renderer: FeedbackRenderer,
    halt_on_movement: bool,
}

impl<'a> CaptureLoop<'a> {
    /// Create a loop over the given collaborators
    pub fn new(
        source: &'a mut dyn FrameSource,
        detector: &'a mut dyn FaceDetector,
        display: &'a mut dyn FrameDisplay,
        tracker: &'a mut FaceTracker,
    ) -> Self {
        Self {
            source,
            detector,
            display,
            tracker,
            renderer: FeedbackRenderer::new(),
            halt_on_movement: false,
        }
    }

    /// End the session the first time movement is detected
    #[must_use]
    pub fn halt_on_movement(mut self, enabled: bool) -> Self {
        self.halt_on_movement = enabled;
        self
    }

    /// Run until a quit key is pressed, or until caught moving when
    /// halting is enabled.
    ///
    /// # Errors
    ///
    /// Any collaborator error aborts the session immediately, including a
    /// failed frame read.
    pub fn run(&mut self) -> Result<SessionSummary> {
        info!("Entering capture loop");

        let mut summary = SessionSummary {
            outcome: SessionOutcome::QuitRequested,
            frames_processed: 0,
            faces_observed: 0,
            movements_detected: 0,
        };

        loop {
            let mut frame = self.source.read_frame()?;
            let faces = self.detector.detect(&frame)?;

            let mut caught = false;
            if let Some((face, result)) = self.tracker.observe_first(&faces) {
                debug!(
                    "face {}x{} at ({}, {}): {:?}",
                    face.width, face.height, face.x, face.y, result
                );
                summary.faces_observed += 1;
                if result == Classification::Moved {
                    summary.movements_detected += 1;
                    caught = self.halt_on_movement;
                }
                self.renderer.render(&mut frame, &face, result)?;
            }

            self.display.show(&frame)?;
            summary.frames_processed += 1;

            if caught {
                warn!("Movement detected, ending session");
                return Ok(summary.finish(SessionOutcome::CaughtMoving));
            }

            if self.display.poll_quit_requested()? {
                info!("Exit requested by user");
                return Ok(summary.finish(SessionOutcome::QuitRequested));
            }
        }
    }
}

/// Fully wired sentinel: cascade detector, webcam and preview window
pub struct MotionSentinelApp {
    config: Config,
    detector: CascadeFaceDetector,
    camera: CameraCapture,
    window: HighguiWindow,
    tracker: FaceTracker,
}

impl MotionSentinelApp {
    /// Load the detector, then open the camera and window.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, the cascade cannot be loaded,
    /// the camera cannot be opened or the window cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        info!("Initializing motion sentinel");
        config.validate()?;

        let detector = CascadeFaceDetector::new(
            &config.detector.cascade_path,
            config.detector.scale_factor,
            config.detector.min_neighbors,
        )?;
        let camera = CameraCapture::open(config.capture.camera_index)?;
        let window = HighguiWindow::open(&config.display.window_title)?;
        let tracker = FaceTracker::new(MovementClassifier::new(config.movement.tolerance_ratio));

        if config.game.halt_on_movement {
            info!("Halting on first detected movement");
        }

        Ok(Self {
            config,
            detector,
            camera,
            window,
            tracker,
        })
    }

    /// Run the capture session
    ///
    /// # Errors
    ///
    /// See [`CaptureLoop::run`].
    pub fn run(&mut self) -> Result<SessionSummary> {
        let summary = CaptureLoop::new(
            &mut self.camera,
            &mut self.detector,
            &mut self.window,
            &mut self.tracker,
        )
        .halt_on_movement(self.config.game.halt_on_movement)
        .run()?;

        info!(
            "Session ended after {} frames ({} with a face, {} moved)",
            summary.frames_processed, summary.faces_observed, summary.movements_detected
        );
        Ok(summary)
    }
}
