//! Fatigue Monitor - Demo Entry Point
//!
//! Runs the monitoring loop against synthetic collaborators: a scripted
//! subject keeps their eyes open, drifts into a long closure, recovers,
//! then yawns. Ctrl-C stops the loop through the cooperative stop
//! handle; cleanup runs on every exit path.

use alert_actuator::LogActuator;
use fatigue_engine::EngineConfig;
use pipeline::demo::{FullFrameDetector, ScriptedPredictor, SyntheticSource};
use pipeline::{init_logging, Monitor};
use tracing::info;

/// Open eyes, a 25-frame closure, recovery, a yawn, then open again.
fn demo_script() -> Vec<(f32, f32)> {
    let mut script = vec![(0.32, 0.2); 30];
    script.extend(vec![(0.10, 0.2); 25]);
    script.extend(vec![(0.32, 0.2); 10]);
    script.extend(vec![(0.30, 0.85); 5]);
    script.extend(vec![(0.32, 0.2); 10]);
    script
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Fatigue Monitor v{} ===", env!("CARGO_PKG_VERSION"));

    let script = demo_script();
    let monitor = Monitor::new(
        SyntheticSource::new(script.len() as u32, 640, 480),
        FullFrameDetector,
        ScriptedPredictor::new(script),
        LogActuator::new(),
        EngineConfig::default(),
    );

    let stop = monitor.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, requesting stop");
            stop.request_stop();
        }
    });

    let report = tokio::task::spawn_blocking(move || monitor.run()).await??;
    info!(
        frames = report.frames,
        drowsy_frames = report.drowsy_frames,
        yawn_frames = report.yawn_frames,
        stop_reason = ?report.stop_reason,
        "run complete"
    );

    Ok(())
}
