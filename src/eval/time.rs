use crate::foundation::core::{Fps, FrameIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Read-only frame coordinates supplied by the rendering host.
pub struct FrameCtx {
    /// Frame being rendered.
    pub frame: FrameIndex,
    /// Composition frame rate.
    pub fps: Fps,
}

impl FrameCtx {
    /// Build a context for `frame` at `fps`.
    pub fn new(frame: FrameIndex, fps: Fps) -> Self {
        Self { frame, fps }
    }

    /// Elapsed composition time in seconds (`frame / fps`).
    pub fn time_secs(self) -> f64 {
        frame_time_secs(self.frame, self.fps)
    }
}

/// Convert a frame index to elapsed seconds.
pub fn frame_time_secs(frame: FrameIndex, fps: Fps) -> f64 {
    fps.frames_to_secs(frame.0)
}
