//! Per-frame assessment results

use serde::{Deserialize, Serialize};

use crate::state::EyePhase;

/// Outcome of assessing one frame's ratio pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameAssessment {
    /// Raw eye aspect ratio, if defined for this frame.
    pub ear: Option<f32>,

    /// Raw mouth aspect ratio, if defined for this frame.
    pub mar: Option<f32>,

    /// Debounced eye-closure alert.
    pub drowsy: bool,

    /// Instantaneous yawn alert.
    pub yawning: bool,

    /// Eye sub-state phase, for telemetry and overlays.
    pub eye_phase: EyePhase,
}

impl FrameAssessment {
    /// Aggregate alert signal driven to the actuator: true when either
    /// sub-alert is active.
    pub fn alert(&self) -> bool {
        self.drowsy || self.yawning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_is_or_of_sub_alerts() {
        let base = FrameAssessment {
            ear: Some(0.3),
            mar: Some(0.2),
            drowsy: false,
            yawning: false,
            eye_phase: EyePhase::Awake,
        };
        assert!(!base.alert());
        assert!(FrameAssessment { drowsy: true, ..base }.alert());
        assert!(FrameAssessment { yawning: true, ..base }.alert());
        assert!(FrameAssessment { drowsy: true, yawning: true, ..base }.alert());
    }
}
