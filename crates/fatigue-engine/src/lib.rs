//! Fatigue Decision Engine
//!
//! Converts the noisy per-frame (EAR, MAR) ratio stream into two
//! debounced boolean alert signals:
//! - Drowsiness: EAR must stay below threshold for a configurable run of
//!   consecutive frames before the alert triggers; it clears on the same
//!   frame the eyes reopen. Asymmetric on purpose — a single blink never
//!   alerts, recovery is instant.
//! - Yawning: MAR above threshold, evaluated fresh every frame with no
//!   hysteresis.

pub mod assessment;
pub mod config;
pub mod state;

pub use assessment::FrameAssessment;
pub use config::EngineConfig;
pub use state::{EyePhase, SubjectState};

use fatigue_metrics::RatioPair;
use tracing::{debug, info, warn};

/// Temporal decision engine for one monitored subject.
pub struct FatigueEngine {
    config: EngineConfig,
    state: SubjectState,
}

impl FatigueEngine {
    /// Create an engine with the given thresholds and zeroed state.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: SubjectState::default(),
        }
    }

    /// Assess one frame's ratio pair and update the subject state.
    ///
    /// Must be called exactly once per frame in which a face was found;
    /// frames without a face skip the call so the state persists.
    pub fn assess(&mut self, ratios: RatioPair) -> FrameAssessment {
        // An undefined EAR counts as not-below-threshold: the counter
        // resets rather than advancing on degenerate geometry.
        let eyes_closed = ratios.ear.is_some_and(|ear| ear < self.config.ear_thresh);

        if eyes_closed {
            self.state.eye_counter = self.state.eye_counter.saturating_add(1);
            if self.state.eye_counter >= self.config.ear_consec_frames {
                if !self.state.eye_alert_active {
                    warn!(
                        frames = self.state.eye_counter,
                        ear = ?ratios.ear,
                        "drowsiness alert triggered"
                    );
                }
                self.state.eye_alert_active = true;
            }
        } else {
            if self.state.eye_alert_active {
                info!(ear = ?ratios.ear, "eyes reopened, drowsiness alert cleared");
            }
            self.state.eye_counter = 0;
            self.state.eye_alert_active = false;
        }

        // Yawn is instantaneous: true exactly when MAR exceeds the
        // threshold this frame. Undefined MAR counts as not-yawning.
        let yawning = ratios.mar.is_some_and(|mar| mar > self.config.mar_thresh);
        if yawning && !self.state.yawn_alert_active {
            warn!(mar = ?ratios.mar, "yawn detected");
        }
        self.state.yawn_alert_active = yawning;

        let assessment = FrameAssessment {
            ear: ratios.ear,
            mar: ratios.mar,
            drowsy: self.state.eye_alert_active,
            yawning: self.state.yawn_alert_active,
            eye_phase: self.state.eye_phase(self.config.ear_consec_frames),
        };
        debug!(?assessment, counter = self.state.eye_counter, "frame assessed");
        assessment
    }

    /// Current subject state (read-only).
    pub fn state(&self) -> &SubjectState {
        &self.state
    }

    /// Configured thresholds.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reset subject state (on stream restart or subject change).
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ratios(ear: f32, mar: f32) -> RatioPair {
        RatioPair {
            ear: Some(ear),
            mar: Some(mar),
        }
    }

    #[test]
    fn test_alert_requires_full_consecutive_run() {
        let mut engine = FatigueEngine::new(EngineConfig::default());

        // 19 closed frames: counting, never alerting
        for _ in 0..19 {
            let a = engine.assess(ratios(0.10, 0.2));
            assert!(!a.drowsy);
        }
        assert_eq!(engine.state().eye_phase(20), EyePhase::Counting);

        // One open frame resets the run
        let a = engine.assess(ratios(0.30, 0.2));
        assert!(!a.drowsy);
        assert_eq!(engine.state().eye_counter, 0);

        // A fresh 19-frame run still does not alert
        for _ in 0..19 {
            assert!(!engine.assess(ratios(0.10, 0.2)).drowsy);
        }
    }

    #[test]
    fn test_alert_triggers_on_twentieth_frame_and_holds() {
        let mut engine = FatigueEngine::new(EngineConfig::default());

        for frame in 1..=25 {
            let a = engine.assess(ratios(0.10, 0.2));
            if frame < 20 {
                assert!(!a.drowsy, "frame {frame} should not alert");
            } else {
                assert!(a.drowsy, "frame {frame} should alert");
                assert_eq!(a.eye_phase, EyePhase::Alerting);
            }
        }
    }

    #[test]
    fn test_alert_clears_same_frame_eyes_reopen() {
        let mut engine = FatigueEngine::new(EngineConfig::default());
        for _ in 0..20 {
            engine.assess(ratios(0.10, 0.2));
        }
        assert!(engine.state().eye_alert_active);

        // EAR exactly at threshold is not below it
        let a = engine.assess(ratios(0.25, 0.2));
        assert!(!a.drowsy);
        assert_eq!(a.eye_phase, EyePhase::Awake);
        assert_eq!(engine.state().eye_counter, 0);
    }

    #[test]
    fn test_yawn_is_instantaneous_both_ways() {
        let mut engine = FatigueEngine::new(EngineConfig::default());

        let a = engine.assess(ratios(0.30, 0.85));
        assert!(a.yawning);
        assert!(!a.drowsy);
        assert!(a.alert());

        // Clears the very next frame, no hysteresis
        let a = engine.assess(ratios(0.30, 0.4));
        assert!(!a.yawning);
        assert!(!a.alert());

        // MAR exactly at threshold is not a yawn
        let a = engine.assess(ratios(0.30, 0.7));
        assert!(!a.yawning);
    }

    #[test]
    fn test_undefined_ratios_reset_and_clear() {
        let mut engine = FatigueEngine::new(EngineConfig::default());
        for _ in 0..10 {
            engine.assess(ratios(0.10, 0.85));
        }
        assert_eq!(engine.state().eye_counter, 10);
        assert!(engine.state().yawn_alert_active);

        // Degenerate geometry: neither below nor above threshold
        let a = engine.assess(RatioPair { ear: None, mar: None });
        assert!(!a.drowsy);
        assert!(!a.yawning);
        assert_eq!(engine.state().eye_counter, 0);
    }

    #[test]
    fn test_counter_saturates_past_threshold() {
        let mut engine = FatigueEngine::new(EngineConfig {
            ear_consec_frames: 2,
            ..Default::default()
        });
        engine.state = SubjectState {
            eye_counter: u32::MAX,
            eye_alert_active: true,
            yawn_alert_active: false,
        };
        let a = engine.assess(ratios(0.10, 0.2));
        assert!(a.drowsy);
        assert_eq!(engine.state().eye_counter, u32::MAX);
    }

    #[test]
    fn test_reset_returns_to_awake() {
        let mut engine = FatigueEngine::new(EngineConfig::default());
        for _ in 0..25 {
            engine.assess(ratios(0.10, 0.9));
        }
        engine.reset();
        assert_eq!(engine.state().eye_counter, 0);
        assert!(!engine.state().eye_alert_active);
        assert!(!engine.state().yawn_alert_active);
    }

    proptest! {
        /// Yawn law: for any frame, yawning == (mar > thresh), no history.
        #[test]
        fn prop_yawn_ignores_history(mars in proptest::collection::vec(0.0f32..2.0, 1..60)) {
            let config = EngineConfig::default();
            let thresh = config.mar_thresh;
            let mut engine = FatigueEngine::new(config);
            for mar in mars {
                let a = engine.assess(ratios(0.30, mar));
                prop_assert_eq!(a.yawning, mar > thresh);
            }
        }

        /// Debounce law: runs shorter than the threshold never alert.
        #[test]
        fn prop_short_runs_never_alert(
            run_len in 1u32..20,
            ear in 0.0f32..0.249,
        ) {
            let mut engine = FatigueEngine::new(EngineConfig::default());
            for _ in 0..run_len {
                let a = engine.assess(ratios(ear, 0.2));
                prop_assert!(!a.drowsy);
            }
            // Recovery frame clears the run entirely
            let a = engine.assess(ratios(0.30, 0.2));
            prop_assert!(!a.drowsy);
            prop_assert_eq!(engine.state().eye_counter, 0);
        }

        /// The alert fires exactly at the configured frame count.
        #[test]
        fn prop_alert_fires_at_configured_count(consec in 1u32..50) {
            let mut engine = FatigueEngine::new(EngineConfig {
                ear_consec_frames: consec,
                ..Default::default()
            });
            for frame in 1..=consec {
                let a = engine.assess(ratios(0.10, 0.2));
                prop_assert_eq!(a.drowsy, frame >= consec);
            }
        }
    }
}
