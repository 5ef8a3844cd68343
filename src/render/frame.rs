use crate::{
    animation::zoom::{KenBurns, scene_elapsed_frames},
    composition::{
        props::RenderProps,
        spec::CompositionSpec,
        style::{Style, SubtitleStyle, WatermarkStyle},
    },
    eval::time::FrameCtx,
    foundation::core::{Affine, Canvas, FrameIndex, Point, Rgba8Premul, scale_about},
    foundation::error::{NewsreelError, NewsreelResult},
    scene::{model::Scene, select::active_scene},
    subtitle::{model::Subtitle, select::active_subtitle},
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Content resolved for one frame, before styling.
pub struct FrameState<'a> {
    /// Elapsed composition time in seconds.
    pub time_secs: f64,
    /// Caption to show, if any.
    pub subtitle: Option<&'a Subtitle>,
    /// Background scene to show, if any.
    pub scene: Option<ActiveScene<'a>>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// The active scene together with its zoom state.
pub struct ActiveScene<'a> {
    /// Selected scene.
    pub scene: &'a Scene,
    /// `frame - timestamp * fps`; negative when the first scene is used as a fallback before
    /// its own start.
    pub elapsed_frames: f64,
    /// Zoom applied to the background image.
    pub scale: f64,
}

/// Resolve which subtitle and scene are on screen at `ctx`, and how far the zoom has ramped.
pub fn resolve_frame<'a>(
    ctx: FrameCtx,
    props: &'a RenderProps,
    ken_burns: &KenBurns,
) -> FrameState<'a> {
    let time_secs = ctx.time_secs();
    let subtitle = active_subtitle(&props.subtitles, time_secs);
    let scene = active_scene(&props.scenes, time_secs).map(|scene| {
        let elapsed_frames = scene_elapsed_frames(ctx.frame, ctx.fps, scene.timestamp);
        ActiveScene {
            scene,
            elapsed_frames,
            scale: ken_burns.scale_at(elapsed_frames),
        }
    });
    FrameState {
        time_secs,
        subtitle,
        scene,
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Declarative description of one output frame, consumed by the rendering host.
///
/// Layers are listed in painter's order over a canvas cleared to `background`.
pub struct FrameDescription {
    /// Composition this frame belongs to.
    pub composition: String,
    /// Frame index.
    pub frame: FrameIndex,
    /// Elapsed time in seconds.
    pub time_secs: f64,
    /// Output dimensions.
    pub canvas: Canvas,
    /// Canvas clear colour.
    pub background: Rgba8Premul,
    /// Visual layers, bottom first.
    pub layers: Vec<Layer>,
    /// Narration track, present when the props carry an audio URL.
    pub audio: Option<AudioCue>,
}

impl FrameDescription {
    /// The background image layer, if any.
    pub fn background_image(&self) -> Option<&BackgroundImageLayer> {
        self.layers.iter().find_map(|l| match l {
            Layer::BackgroundImage(b) => Some(b),
            _ => None,
        })
    }

    /// The caption layer, if any.
    pub fn subtitle(&self) -> Option<&SubtitleLayer> {
        self.layers.iter().find_map(|l| match l {
            Layer::Subtitle(s) => Some(s),
            _ => None,
        })
    }

    /// The watermark layer, if any.
    pub fn watermark(&self) -> Option<&WatermarkLayer> {
        self.layers.iter().find_map(|l| match l {
            Layer::Watermark(w) => Some(w),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// One visual layer of a frame.
pub enum Layer {
    /// Full-canvas scene image with the Ken Burns zoom.
    BackgroundImage(BackgroundImageLayer),
    /// Caption box.
    Subtitle(SubtitleLayer),
    /// Brand mark.
    Watermark(WatermarkLayer),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Scene image covering the canvas, scaled about the canvas centre.
pub struct BackgroundImageLayer {
    /// Opaque image reference.
    pub source: String,
    /// Timestamp of the selected scene.
    pub scene_timestamp: f64,
    /// Frames since the scene started.
    pub elapsed_frames: f64,
    /// Uniform zoom factor.
    pub scale: f64,
    /// Canvas-space transform equivalent to `scale` about the canvas centre.
    pub transform: Affine,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Caption box; `anchor` is the bottom-centre of the box.
pub struct SubtitleLayer {
    /// Caption text.
    pub text: String,
    /// Bottom-centre of the box in canvas pixels.
    pub anchor: Point,
    /// Width available to the box.
    pub max_width_px: f64,
    /// Box fill.
    pub box_color: Rgba8Premul,
    /// Text fill.
    pub text_color: Rgba8Premul,
    /// Font size in pixels.
    pub font_size_px: f64,
    /// Bold weight.
    pub bold: bool,
    /// `[vertical, horizontal]` padding.
    pub padding_px: [f64; 2],
    /// Corner radius.
    pub corner_radius_px: f64,
    /// Line height multiple.
    pub line_height: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Right-aligned text mark; `anchor` is its top-right corner.
pub struct WatermarkLayer {
    /// Mark text.
    pub text: String,
    /// Top-right corner in canvas pixels.
    pub anchor: Point,
    /// Font size in pixels.
    pub font_size_px: f64,
    /// Text fill.
    pub color: Rgba8Premul,
    /// Bold weight.
    pub bold: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Audio track played from the first frame.
pub struct AudioCue {
    /// Opaque audio reference.
    pub source: String,
}

/// Describe one frame of `spec` rendered with `props`.
///
/// This is the per-frame entry point of a rendering host. It fails only when `frame` lies
/// outside the composition.
#[tracing::instrument(skip(spec, props), fields(composition = %spec.id))]
pub fn render_frame(
    spec: &CompositionSpec,
    props: &RenderProps,
    frame: FrameIndex,
) -> NewsreelResult<FrameDescription> {
    if !spec.full_range().contains(frame) {
        return Err(NewsreelError::evaluation(format!(
            "frame {} is out of bounds for composition '{}' ({} frames)",
            frame.0, spec.id, spec.duration_in_frames
        )));
    }
    Ok(describe_frame(spec, props, frame))
}

pub(crate) fn describe_frame(
    spec: &CompositionSpec,
    props: &RenderProps,
    frame: FrameIndex,
) -> FrameDescription {
    let ctx = FrameCtx::new(frame, spec.fps);
    let state = resolve_frame(ctx, props, &spec.ken_burns);
    tracing::trace!(
        frame = frame.0,
        time_secs = state.time_secs,
        subtitle = state.subtitle.map(|s| s.text.as_str()),
        scene = state.scene.map(|s| s.scene.image_path.as_str()),
        "resolved frame"
    );

    let mut layers = Vec::with_capacity(3);
    if let Some(active) = state.scene {
        layers.push(Layer::BackgroundImage(background_layer(spec.canvas, active)));
    }
    if let Some(sub) = state.subtitle {
        layers.push(Layer::Subtitle(subtitle_layer(
            spec.canvas,
            &spec.style.subtitle,
            sub,
        )));
    }
    if let Some(mark) = &spec.style.watermark {
        layers.push(Layer::Watermark(watermark_layer(spec.canvas, mark)));
    }

    FrameDescription {
        composition: spec.id.clone(),
        frame,
        time_secs: state.time_secs,
        canvas: spec.canvas,
        background: background_color(&spec.style),
        layers,
        audio: (!props.audio_url.is_empty()).then(|| AudioCue {
            source: props.audio_url.clone(),
        }),
    }
}

fn background_color(style: &Style) -> Rgba8Premul {
    style.background.to_rgba8_premul()
}

fn background_layer(canvas: Canvas, active: ActiveScene<'_>) -> BackgroundImageLayer {
    BackgroundImageLayer {
        source: active.scene.image_path.clone(),
        scene_timestamp: active.scene.timestamp,
        elapsed_frames: active.elapsed_frames,
        scale: active.scale,
        transform: scale_about(canvas.center(), active.scale),
    }
}

fn subtitle_layer(canvas: Canvas, style: &SubtitleStyle, sub: &Subtitle) -> SubtitleLayer {
    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);
    SubtitleLayer {
        text: sub.text.clone(),
        anchor: Point::new(width / 2.0, height - style.bottom_px),
        max_width_px: (width - 2.0 * style.inset_x_px).max(0.0),
        box_color: style.box_color.to_rgba8_premul(),
        text_color: style.text_color.to_rgba8_premul(),
        font_size_px: style.font_size_px,
        bold: style.bold,
        padding_px: [style.padding_y_px, style.padding_x_px],
        corner_radius_px: style.corner_radius_px,
        line_height: style.line_height,
    }
}

fn watermark_layer(canvas: Canvas, style: &WatermarkStyle) -> WatermarkLayer {
    WatermarkLayer {
        text: style.text.clone(),
        anchor: Point::new(f64::from(canvas.width) - style.right_px, style.top_px),
        font_size_px: style.font_size_px,
        color: style.color.to_rgba8_premul(),
        bold: style.bold,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
