//! Frame Capture Library
//!
//! Frame types and the pull-based frame source abstraction used by the
//! monitoring pipeline. Actual capture devices (cabin camera, file
//! playback) live behind the [`FrameSource`] trait; the pipeline only
//! sees decoded RGB frames.

pub mod frame;

pub use frame::VideoFrame;

use thiserror::Error;

/// Capture error types
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to open frame source: {0}")]
    Open(String),

    #[error("Invalid frame format: {0}")]
    Format(String),

    #[error("Streaming error: {0}")]
    Stream(String),

    #[error("Capture timeout")]
    Timeout,
}

/// Pull-based source of decoded video frames.
///
/// `next_frame` blocks until a frame is available. `Ok(None)` signals
/// orderly exhaustion (end of file, device closed) and is distinct from
/// `Err`, which signals a source failure. Both terminate the pipeline.
pub trait FrameSource {
    /// Acquire the next frame, or `None` when the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, CaptureError>;

    /// Release the underlying device or stream. Called exactly once by
    /// the pipeline during shutdown.
    fn release(&mut self);
}
