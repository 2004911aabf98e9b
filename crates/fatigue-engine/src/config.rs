//! Engine configuration

use serde::{Deserialize, Serialize};

/// Thresholds for the temporal decision engine.
///
/// All values are supplied at startup and constant thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// EAR below this value counts as an eyes-closed frame.
    pub ear_thresh: f32,

    /// Consecutive eyes-closed frames required before the drowsiness
    /// alert triggers.
    pub ear_consec_frames: u32,

    /// MAR above this value counts as a yawn, with no debounce.
    pub mar_thresh: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ear_thresh: 0.25,
            ear_consec_frames: 20,
            mar_thresh: 0.7,
        }
    }
}

impl EngineConfig {
    /// Create strict config (alerts trigger sooner)
    pub fn strict() -> Self {
        Self {
            ear_consec_frames: 12,
            mar_thresh: 0.6,
            ..Default::default()
        }
    }

    /// Create lenient config (alerts trigger later)
    pub fn lenient() -> Self {
        Self {
            ear_consec_frames: 30,
            mar_thresh: 0.8,
            ..Default::default()
        }
    }
}
