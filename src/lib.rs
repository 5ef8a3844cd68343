//! newsreel describes a short-form news video one frame at a time.
//!
//! A rendering host owns the clock and the pixels. For every frame it asks newsreel what belongs
//! on screen: which caption, which background scene and how far that scene's slow "Ken Burns"
//! zoom has progressed, plus the brand watermark and the narration track. The answer is a
//! serializable [`FrameDescription`].
//!
//! # Pipeline overview
//!
//! 1. **Prepare** (optional): SRT file + narration audio -> [`RenderProps`] ([`prepare_props`])
//! 2. **Register**: static metadata in a [`CompositionSpec`], looked up via [`CompositionRegistry`]
//! 3. **Resolve**: `RenderProps + FrameCtx -> FrameState` ([`resolve_frame`])
//! 4. **Describe**: `FrameState + Style -> FrameDescription` ([`render_frame`], [`render_frames`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure per-frame logic**: frames are independent and may be evaluated in any order or in
//!   parallel.
//! - **No IO while rendering**: files are only touched when loading props, scenes and styles.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod eval;
mod foundation;
mod render;
mod scene;
mod subtitle;

/// High-level, standalone documentation for newsreel's concepts.
pub mod guide;

pub use animation::interp::{Extrapolate, InterpolateOpts, interpolate};
pub use animation::zoom::{
    KEN_BURNS_FROM_SCALE, KEN_BURNS_RAMP_FRAMES, KEN_BURNS_TO_SCALE, KenBurns, ken_burns_scale,
    scene_elapsed_frames,
};
pub use composition::dsl::{CompositionBuilder, PropsBuilder};
pub use composition::props::{
    PropsIssue, RenderProps, ensure_parent_dir, file_url, load_scenes, prepare_props,
};
pub use composition::registry::CompositionRegistry;
pub use composition::spec::{CompositionSpec, NEWS_VIDEO_ID};
pub use composition::style::{Style, SubtitleStyle, WatermarkStyle};
pub use eval::time::{FrameCtx, frame_time_secs};
pub use foundation::color::Color;
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rgba8Premul, Vec2, scale_about,
};
pub use foundation::error::{NewsreelError, NewsreelResult};
pub use render::frame::{
    ActiveScene, AudioCue, BackgroundImageLayer, FrameDescription, FrameState, Layer,
    SubtitleLayer, WatermarkLayer, render_frame, resolve_frame,
};
pub use render::pipeline::{RenderStats, RenderThreading, render_frames, render_frames_with};
pub use scene::model::Scene;
pub use scene::select::active_scene;
pub use subtitle::model::Subtitle;
pub use subtitle::select::active_subtitle;
pub use subtitle::srt::{load_srt, parse_srt, write_srt};
