//! External collaborator traits
//!
//! The pipeline treats face detection, landmark prediction, and overlay
//! rendering as black boxes behind these traits. Real backends (dlib
//! bindings, ONNX models, a preview window) plug in from outside the
//! core; tests and the demo binary plug in synthetic ones.

use face_landmarks::{LandmarkSet, RegionView};
use fatigue_engine::FrameAssessment;
use frame_capture::VideoFrame;
use serde::{Deserialize, Serialize};

use crate::MonitorError;

/// Face region within a frame, as reported by a detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub confidence: f32,
}

/// Locates zero or more faces in a frame.
pub trait FaceDetector {
    fn detect(&mut self, frame: &VideoFrame) -> Result<Vec<FaceBox>, MonitorError>;
}

/// Predicts the 68-point landmark set for one detected face.
pub trait LandmarkPredictor {
    fn predict(
        &mut self,
        frame: &VideoFrame,
        face: &FaceBox,
    ) -> Result<LandmarkSet, MonitorError>;
}

/// Optional on-screen annotation surface.
///
/// Purely observational: receives the frame, the scored region views,
/// and the assessment, and feeds nothing back into the pipeline.
pub trait OverlaySink {
    fn render(
        &mut self,
        frame: &VideoFrame,
        left_eye: RegionView<'_>,
        right_eye: RegionView<'_>,
        mouth: RegionView<'_>,
        assessment: &FrameAssessment,
    );

    /// Close the display surface. Called exactly once during shutdown.
    fn close(&mut self);
}
