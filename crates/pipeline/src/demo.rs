//! Synthetic collaborators for the demo binary and tests
//!
//! No camera, dlib, or model files: frames are flat gray images and the
//! predictor emits landmark sets built from a scripted (EAR, MAR)
//! profile. Geometry is exact, so the pipeline's scoring and decision
//! paths run against known ratio values.

use face_landmarks::{FaceRegion, LandmarkSet, Point, LANDMARK_COUNT};
use frame_capture::{CaptureError, FrameSource, VideoFrame};

use crate::collaborators::{FaceBox, FaceDetector, LandmarkPredictor};
use crate::MonitorError;

/// Source producing a fixed number of flat gray RGB frames.
pub struct SyntheticSource {
    remaining: u32,
    width: u32,
    height: u32,
    sequence: u32,
}

impl SyntheticSource {
    pub fn new(frames: u32, width: u32, height: u32) -> Self {
        Self {
            remaining: frames,
            width,
            height,
            sequence: 0,
        }
    }
}

impl FrameSource for SyntheticSource {
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, CaptureError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        let data = vec![0x80u8; (self.width * self.height * 3) as usize];
        let frame = VideoFrame::rgb24(
            data,
            self.width,
            self.height,
            self.sequence as u64 * 33_000_000,
            self.sequence,
        )?;
        self.sequence += 1;
        Ok(Some(frame))
    }

    fn release(&mut self) {
        self.remaining = 0;
    }
}

/// Detector that reports one face covering the whole frame.
pub struct FullFrameDetector;

impl FaceDetector for FullFrameDetector {
    fn detect(&mut self, frame: &VideoFrame) -> Result<Vec<FaceBox>, MonitorError> {
        Ok(vec![FaceBox {
            x: 0.0,
            y: 0.0,
            width: frame.width as f32,
            height: frame.height as f32,
            confidence: 1.0,
        }])
    }
}

/// Predictor replaying a scripted (EAR, MAR) profile, one entry per
/// predicted face. Past the end of the script it holds the last entry.
pub struct ScriptedPredictor {
    script: Vec<(f32, f32)>,
    cursor: usize,
}

impl ScriptedPredictor {
    pub fn new(script: Vec<(f32, f32)>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl LandmarkPredictor for ScriptedPredictor {
    fn predict(
        &mut self,
        _frame: &VideoFrame,
        _face: &FaceBox,
    ) -> Result<LandmarkSet, MonitorError> {
        let idx = self.cursor.min(self.script.len().saturating_sub(1));
        self.cursor += 1;
        let (ear, mar) = self.script.get(idx).copied().unwrap_or((0.3, 0.2));
        Ok(synthetic_landmarks(ear, mar))
    }
}

/// Build a landmark set whose eye and mouth regions score exactly the
/// requested ratios.
///
/// Eyes use a hexagon with horizontal span 6 and eyelid half-gap
/// `3 * ear`; the mouth uses inner corner width 8 and lip half-gap
/// `4 * mar`. Points outside the scored regions sit on a face outline
/// placeholder.
pub fn synthetic_landmarks(ear: f32, mar: f32) -> LandmarkSet {
    let mut pts = vec![Point::default(); LANDMARK_COUNT];

    // Jaw, brows, nose: evenly spread placeholders
    for (i, p) in pts.iter_mut().enumerate().take(36) {
        *p = Point::new(i as f32 * 2.0, 100.0);
    }

    let h = 3.0 * ear;
    let eye = |origin_x: f32, origin_y: f32| {
        [
            Point::new(origin_x, origin_y),
            Point::new(origin_x + 2.0, origin_y + h),
            Point::new(origin_x + 4.0, origin_y + h),
            Point::new(origin_x + 6.0, origin_y),
            Point::new(origin_x + 4.0, origin_y - h),
            Point::new(origin_x + 2.0, origin_y - h),
        ]
    };
    let (rs, re) = FaceRegion::RightEye.span();
    let (ls, le) = FaceRegion::LeftEye.span();
    pts[rs..re].copy_from_slice(&eye(20.0, 40.0));
    pts[ls..le].copy_from_slice(&eye(40.0, 40.0));

    let g = 4.0 * mar;
    let (ms, me) = FaceRegion::Mouth.span();
    let mouth = &mut pts[ms..me];
    for (i, p) in mouth.iter_mut().enumerate().take(12) {
        *p = Point::new(28.0 + i as f32, 70.0);
    }
    mouth[12] = Point::new(28.0, 65.0);
    mouth[16] = Point::new(36.0, 65.0);
    mouth[13] = Point::new(30.0, 65.0 + g);
    mouth[19] = Point::new(30.0, 65.0 - g);
    mouth[14] = Point::new(32.0, 65.0 + g);
    mouth[18] = Point::new(32.0, 65.0 - g);
    mouth[15] = Point::new(34.0, 65.0 + g);
    mouth[17] = Point::new(34.0, 65.0 - g);

    LandmarkSet::from_points(pts).expect("layout has exactly 68 points")
}
