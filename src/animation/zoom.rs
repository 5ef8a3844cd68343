use crate::{
    animation::interp::{InterpolateOpts, interpolate},
    foundation::core::{Fps, FrameIndex},
};

/// Frames over which the stock zoom ramp runs.
pub const KEN_BURNS_RAMP_FRAMES: f64 = 300.0;
/// Scale at the start of a scene.
pub const KEN_BURNS_FROM_SCALE: f64 = 1.0;
/// Scale reached once the ramp has elapsed.
pub const KEN_BURNS_TO_SCALE: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Slow zoom applied to a scene's background image.
///
/// The scale ramps from `from_scale` to `to_scale` over `ramp_frames` frames measured from the
/// scene's timestamp, and holds at the endpoints outside that window.
pub struct KenBurns {
    /// Length of the ramp in frames.
    #[serde(default = "default_ramp_frames")]
    pub ramp_frames: f64,
    /// Scale at elapsed frame 0.
    #[serde(default = "default_from_scale")]
    pub from_scale: f64,
    /// Scale at and after `ramp_frames`.
    #[serde(default = "default_to_scale")]
    pub to_scale: f64,
}

fn default_ramp_frames() -> f64 {
    KEN_BURNS_RAMP_FRAMES
}

fn default_from_scale() -> f64 {
    KEN_BURNS_FROM_SCALE
}

fn default_to_scale() -> f64 {
    KEN_BURNS_TO_SCALE
}

impl Default for KenBurns {
    fn default() -> Self {
        Self {
            ramp_frames: KEN_BURNS_RAMP_FRAMES,
            from_scale: KEN_BURNS_FROM_SCALE,
            to_scale: KEN_BURNS_TO_SCALE,
        }
    }
}

impl KenBurns {
    /// Scale factor after `elapsed_frames` frames of the active scene.
    ///
    /// Negative elapsed frames (a scene selected before its own start, see
    /// [`crate::active_scene`]) hold at `from_scale`.
    pub fn scale_at(&self, elapsed_frames: f64) -> f64 {
        interpolate(
            elapsed_frames,
            [0.0, self.ramp_frames],
            [self.from_scale, self.to_scale],
            InterpolateOpts::clamped(),
        )
    }
}

/// Frames elapsed since a scene starting at `timestamp_secs`: `frame - timestamp * fps`.
pub fn scene_elapsed_frames(frame: FrameIndex, fps: Fps, timestamp_secs: f64) -> f64 {
    frame.0 as f64 - fps.secs_to_frames(timestamp_secs)
}

/// Stock Ken Burns scale: `1.0 -> 1.1` over 300 frames, clamped.
pub fn ken_burns_scale(elapsed_frames: f64) -> f64 {
    KenBurns::default().scale_at(elapsed_frames)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/zoom.rs"]
mod tests;
