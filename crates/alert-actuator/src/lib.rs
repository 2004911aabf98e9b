//! Alert Actuator Abstraction
//!
//! The decision logic never touches hardware directly; it emits one
//! aggregate boolean per frame through [`AlertSink`]. A GPIO buzzer, a
//! dashboard LED, or a test double all sit behind the same trait.
//! `set_alert` is idempotent: writing the current value again is a no-op
//! at the device level and safe to do every frame.

use thiserror::Error;
use tracing::warn;

/// Actuator error types
#[derive(Error, Debug)]
pub enum ActuatorError {
    #[error("Alert device unavailable: {0}")]
    Unavailable(String),

    #[error("Alert device write failed: {0}")]
    Write(String),
}

/// Binary alert output device.
pub trait AlertSink {
    /// Drive the alert output. Idempotent; called once per processed
    /// frame with the aggregate alert flag, and once with `false` during
    /// pipeline shutdown.
    fn set_alert(&mut self, active: bool) -> Result<(), ActuatorError>;
}

/// Actuator that logs alert transitions instead of driving hardware.
///
/// Stands in for the physical buzzer during development and on hosts
/// without one.
#[derive(Debug, Default)]
pub struct LogActuator {
    active: bool,
}

impl LogActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl AlertSink for LogActuator {
    fn set_alert(&mut self, active: bool) -> Result<(), ActuatorError> {
        if active != self.active {
            if active {
                warn!("alert ON");
            } else {
                warn!("alert OFF");
            }
        }
        self.active = active;
        Ok(())
    }
}
