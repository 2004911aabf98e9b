//! Per-subject detection state

use serde::{Deserialize, Serialize};

/// Phase of the eye-closure sub-state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EyePhase {
    /// Eyes open, counter at zero.
    #[default]
    Awake,
    /// Eyes below threshold but not yet long enough to alert.
    Counting,
    /// Consecutive-frame threshold reached, alert active.
    Alerting,
}

/// Detection state for one monitored subject (tracked over time).
///
/// Owned and mutated exclusively by the engine, once per processed
/// frame. Zeroed at stream start, never persisted across restarts.
#[derive(Debug, Clone, Default)]
pub struct SubjectState {
    /// Consecutive frames with EAR below threshold.
    pub eye_counter: u32,

    /// Debounced eye-closure alert flag.
    pub eye_alert_active: bool,

    /// Instantaneous yawn alert flag.
    pub yawn_alert_active: bool,
}

impl SubjectState {
    /// Current phase of the eye sub-state machine.
    pub fn eye_phase(&self, ear_consec_frames: u32) -> EyePhase {
        if self.eye_counter >= ear_consec_frames {
            EyePhase::Alerting
        } else if self.eye_counter > 0 {
            EyePhase::Counting
        } else {
            EyePhase::Awake
        }
    }

    /// Reset state (on stream restart or subject change).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_phase_boundaries() {
        let mut state = SubjectState::default();
        assert_eq!(state.eye_phase(20), EyePhase::Awake);

        state.eye_counter = 1;
        assert_eq!(state.eye_phase(20), EyePhase::Counting);

        state.eye_counter = 19;
        assert_eq!(state.eye_phase(20), EyePhase::Counting);

        state.eye_counter = 20;
        assert_eq!(state.eye_phase(20), EyePhase::Alerting);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = SubjectState {
            eye_counter: 42,
            eye_alert_active: true,
            yawn_alert_active: true,
        };
        state.reset();
        assert_eq!(state.eye_counter, 0);
        assert!(!state.eye_alert_active);
        assert!(!state.yawn_alert_active);
    }
}
