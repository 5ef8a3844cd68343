use crate::{
    animation::zoom::KenBurns,
    composition::{props::RenderProps, spec::CompositionSpec, style::Style},
    foundation::core::{Canvas, Fps},
    foundation::error::{NewsreelError, NewsreelResult},
    scene::model::Scene,
    subtitle::model::Subtitle,
};

/// Builder for [`CompositionSpec`]; `build` validates the metadata.
pub struct CompositionBuilder {
    id: String,
    fps: Fps,
    canvas: Canvas,
    duration_in_frames: u64,
    default_props: RenderProps,
    style: Style,
    ken_burns: KenBurns,
}

impl CompositionBuilder {
    /// Start a composition with the given id, rate, canvas and length.
    pub fn new(id: impl Into<String>, fps: Fps, canvas: Canvas, duration_in_frames: u64) -> Self {
        Self {
            id: id.into(),
            fps,
            canvas,
            duration_in_frames,
            default_props: RenderProps::default(),
            style: Style::default(),
            ken_burns: KenBurns::default(),
        }
    }

    /// Props used when the host supplies none.
    pub fn default_props(mut self, props: RenderProps) -> Self {
        self.default_props = props;
        self
    }

    /// Cosmetic configuration.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Background zoom ramp.
    pub fn ken_burns(mut self, ken_burns: KenBurns) -> Self {
        self.ken_burns = ken_burns;
        self
    }

    /// Finish and validate.
    pub fn build(self) -> NewsreelResult<CompositionSpec> {
        let spec = CompositionSpec {
            id: self.id,
            duration_in_frames: self.duration_in_frames,
            fps: self.fps,
            canvas: self.canvas,
            default_props: self.default_props,
            style: self.style,
            ken_burns: self.ken_burns,
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// Builder for [`RenderProps`] that rejects malformed entries as they are added.
#[derive(Default)]
pub struct PropsBuilder {
    subtitles: Vec<Subtitle>,
    audio_url: String,
    scenes: Vec<Scene>,
}

impl PropsBuilder {
    /// Empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a caption on `[start, end)` seconds.
    pub fn subtitle(
        mut self,
        start: f64,
        end: f64,
        text: impl Into<String>,
    ) -> NewsreelResult<Self> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(NewsreelError::validation(format!(
                "subtitle #{} must have finite start/end",
                self.subtitles.len()
            )));
        }
        if start >= end {
            return Err(NewsreelError::validation(format!(
                "subtitle #{} has start >= end ({start} >= {end})",
                self.subtitles.len()
            )));
        }
        self.subtitles.push(Subtitle::new(start, end, text));
        Ok(self)
    }

    /// Append a scene; timestamps must not decrease.
    pub fn scene(mut self, timestamp: f64, image_path: impl Into<String>) -> NewsreelResult<Self> {
        if !timestamp.is_finite() {
            return Err(NewsreelError::validation(format!(
                "scene #{} must have a finite timestamp",
                self.scenes.len()
            )));
        }
        if let Some(prev) = self.scenes.last()
            && timestamp < prev.timestamp
        {
            return Err(NewsreelError::validation(format!(
                "scene #{} starts at {timestamp}s, before the previous scene ({}s)",
                self.scenes.len(),
                prev.timestamp
            )));
        }
        self.scenes.push(Scene::new(timestamp, image_path));
        Ok(self)
    }

    /// Narration audio reference.
    pub fn audio_url(mut self, url: impl Into<String>) -> Self {
        self.audio_url = url.into();
        self
    }

    /// Finish.
    pub fn build(self) -> RenderProps {
        RenderProps::new(self.subtitles, self.audio_url, self.scenes)
    }
}
