//! Fatigue Monitoring Pipeline
//!
//! Wires the frame source, face/landmark collaborators, geometric
//! scoring, temporal decision engine, and alert actuator into a
//! single-threaded frame-at-a-time loop:
//!
//! frame → face detector → landmark predictor → (EAR, MAR) →
//! decision engine → (drowsy?, yawning?) → actuator + overlay

pub mod collaborators;
pub mod demo;
pub mod monitor;

pub use collaborators::{FaceBox, FaceDetector, LandmarkPredictor, OverlaySink};
pub use monitor::{Monitor, MonitorReport, StopHandle, StopReason};

use alert_actuator::ActuatorError;
use face_landmarks::LandmarkError;
use frame_capture::CaptureError;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Pipeline error types
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("Face detection failed: {0}")]
    Detection(String),

    #[error("Landmark prediction failed: {0}")]
    Prediction(String),

    #[error(transparent)]
    Landmarks(#[from] LandmarkError),

    #[error(transparent)]
    Actuator(#[from] ActuatorError),
}

/// Initialize tracing with an env-filter, INFO by default.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(Level::INFO.to_string()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    // Ignore the error if a subscriber is already installed (tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
