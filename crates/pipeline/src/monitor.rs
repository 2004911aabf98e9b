//! Frame processing loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use alert_actuator::AlertSink;
use face_landmarks::FaceRegion;
use fatigue_engine::{EngineConfig, FatigueEngine};
use fatigue_metrics::face_ratios;
use frame_capture::{FrameSource, VideoFrame};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::collaborators::{FaceDetector, LandmarkPredictor, OverlaySink};
use crate::MonitorError;

/// Cooperative stop signal, observed at the top of each loop iteration.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Why the loop terminated normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The frame source signalled orderly end of stream.
    SourceExhausted,
    /// An external stop request was observed.
    StopRequested,
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorReport {
    pub frames: u64,
    pub frames_with_face: u64,
    pub drowsy_frames: u64,
    pub yawn_frames: u64,
    pub stop_reason: StopReason,
}

impl Default for MonitorReport {
    fn default() -> Self {
        Self {
            frames: 0,
            frames_with_face: 0,
            drowsy_frames: 0,
            yawn_frames: 0,
            stop_reason: StopReason::SourceExhausted,
        }
    }
}

/// Single-threaded frame-at-a-time monitoring loop.
///
/// Owns the run lifecycle: per iteration it checks the stop handle,
/// pulls one frame, locates a face, predicts landmarks, scores them,
/// feeds the decision engine, and drives the actuator. Cleanup (source
/// release, overlay close, actuator off) runs exactly once on every
/// exit path.
pub struct Monitor<S, D, P, A> {
    source: S,
    detector: D,
    predictor: P,
    actuator: A,
    overlay: Option<Box<dyn OverlaySink + Send>>,
    engine: FatigueEngine,
    stop: StopHandle,
    report: MonitorReport,
}

impl<S, D, P, A> Monitor<S, D, P, A>
where
    S: FrameSource,
    D: FaceDetector,
    P: LandmarkPredictor,
    A: AlertSink,
{
    pub fn new(source: S, detector: D, predictor: P, actuator: A, config: EngineConfig) -> Self {
        Self {
            source,
            detector,
            predictor,
            actuator,
            overlay: None,
            engine: FatigueEngine::new(config),
            stop: StopHandle::new(),
            report: MonitorReport::default(),
        }
    }

    /// Attach an optional overlay surface.
    pub fn with_overlay(mut self, overlay: Box<dyn OverlaySink + Send>) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Use an externally created stop handle instead of the built-in one.
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    /// Handle for requesting a cooperative stop from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run to completion. Consumes the monitor; cleanup is performed
    /// before returning regardless of how the loop ended.
    pub fn run(mut self) -> Result<MonitorReport, MonitorError> {
        info!(config = ?self.engine.config(), "monitor started");
        let outcome = self.run_loop();
        self.shutdown();
        match outcome {
            Ok(reason) => {
                self.report.stop_reason = reason;
                info!(report = ?self.report, "monitor finished");
                Ok(self.report)
            }
            Err(e) => {
                warn!(error = %e, "monitor terminated on error");
                Err(e)
            }
        }
    }

    fn run_loop(&mut self) -> Result<StopReason, MonitorError> {
        loop {
            if self.stop.is_stop_requested() {
                info!("stop requested");
                return Ok(StopReason::StopRequested);
            }
            let Some(frame) = self.source.next_frame()? else {
                info!("frame source exhausted");
                return Ok(StopReason::SourceExhausted);
            };
            self.process_frame(&frame)?;
        }
    }

    fn process_frame(&mut self, frame: &VideoFrame) -> Result<(), MonitorError> {
        self.report.frames += 1;

        let faces = self.detector.detect(frame)?;
        let Some(face) = faces.into_iter().next() else {
            // Not an error: counters neither advance nor reset, and the
            // actuator keeps its previous value.
            debug!(sequence = frame.sequence, "no face detected");
            return Ok(());
        };
        self.report.frames_with_face += 1;

        let landmarks = self.predictor.predict(frame, &face)?;
        let ratios = face_ratios(&landmarks);
        let assessment = self.engine.assess(ratios);

        if assessment.drowsy {
            self.report.drowsy_frames += 1;
        }
        if assessment.yawning {
            self.report.yawn_frames += 1;
        }

        self.actuator.set_alert(assessment.alert())?;

        if let Some(overlay) = self.overlay.as_deref_mut() {
            overlay.render(
                frame,
                landmarks.region(FaceRegion::LeftEye),
                landmarks.region(FaceRegion::RightEye),
                landmarks.region(FaceRegion::Mouth),
                &assessment,
            );
        }
        Ok(())
    }

    fn shutdown(&mut self) {
        self.source.release();
        if let Some(overlay) = self.overlay.as_deref_mut() {
            overlay.close();
        }
        if let Err(e) = self.actuator.set_alert(false) {
            warn!(error = %e, "failed to reset actuator during shutdown");
        }
        info!("monitor cleanup complete");
    }
}
