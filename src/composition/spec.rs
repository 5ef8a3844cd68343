use crate::{
    animation::zoom::KenBurns,
    composition::{props::RenderProps, style::Style},
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{NewsreelError, NewsreelResult},
};

/// Identifier of the stock news composition.
pub const NEWS_VIDEO_ID: &str = "NewsVideo";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Static metadata a rendering host reads once per composition.
///
/// The per-frame inputs live in [`RenderProps`]; everything here is fixed for the whole render.
pub struct CompositionSpec {
    /// Unique composition identifier.
    pub id: String,
    /// Total length in frames.
    pub duration_in_frames: u64,
    /// Frame rate.
    pub fps: Fps,
    /// Output dimensions.
    pub canvas: Canvas,
    /// Props used when the host supplies none.
    #[serde(default)]
    pub default_props: RenderProps,
    /// Cosmetic configuration.
    #[serde(default)]
    pub style: Style,
    /// Background zoom ramp.
    #[serde(default)]
    pub ken_burns: KenBurns,
}

impl CompositionSpec {
    /// The stock news composition: 300 frames at 30 fps, 1920x1080, empty default props.
    pub fn news_video() -> Self {
        Self {
            id: NEWS_VIDEO_ID.to_owned(),
            duration_in_frames: 300,
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            default_props: RenderProps::default(),
            style: Style::default(),
            ken_burns: KenBurns::default(),
        }
    }

    /// Check metadata the host relies on.
    pub fn validate(&self) -> NewsreelResult<()> {
        if self.id.trim().is_empty() {
            return Err(NewsreelError::validation("composition id must be non-empty"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(NewsreelError::validation(format!(
                "composition '{}': fps must have num>0 and den>0",
                self.id
            )));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(NewsreelError::validation(format!(
                "composition '{}': canvas width/height must be > 0",
                self.id
            )));
        }
        if self.duration_in_frames == 0 {
            return Err(NewsreelError::validation(format!(
                "composition '{}': duration must be > 0 frames",
                self.id
            )));
        }
        let kb = &self.ken_burns;
        if !(kb.ramp_frames.is_finite() && kb.ramp_frames > 0.0) {
            return Err(NewsreelError::validation(format!(
                "composition '{}': ken_burns.ramp_frames must be finite and > 0",
                self.id
            )));
        }
        if !(kb.from_scale > 0.0 && kb.to_scale > 0.0) {
            return Err(NewsreelError::validation(format!(
                "composition '{}': ken_burns scales must be > 0",
                self.id
            )));
        }
        Ok(())
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_in_frames)
    }

    /// Every frame of the composition.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_in_frames),
        }
    }

    /// Return a copy with a different duration, e.g. one fitted to the narration.
    pub fn with_duration_frames(mut self, frames: u64) -> Self {
        self.duration_in_frames = frames;
        self
    }

    /// Duration in frames long enough to show every subtitle and scene of `props`, never
    /// shorter than the current duration.
    pub fn fitted_duration_frames(&self, props: &RenderProps) -> u64 {
        let last_sub = props.subtitles.iter().map(|s| s.end).fold(0.0, f64::max);
        let last_scene = props.scenes.iter().map(|s| s.timestamp).fold(0.0, f64::max);
        let secs = last_sub.max(last_scene);
        let needed = self.fps.secs_to_frames(secs).ceil();
        if needed.is_finite() && needed > 0.0 {
            self.duration_in_frames.max(needed as u64)
        } else {
            self.duration_in_frames
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/spec.rs"]
mod tests;
