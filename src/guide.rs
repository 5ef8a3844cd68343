//! # newsreel guide
//!
//! This module is a standalone walkthrough of newsreel's model and public API.
//!
//! If you are looking for copy/paste commands, run `newsreel --help`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`CompositionSpec`](crate::CompositionSpec): static metadata (id, duration, fps, canvas,
//!   default props, [`Style`](crate::Style), [`KenBurns`](crate::KenBurns) ramp)
//! - [`RenderProps`](crate::RenderProps): the per-job input (subtitles, audio URL, scenes)
//! - [`FrameCtx`](crate::FrameCtx): the frame index and frame rate supplied by the host
//! - [`FrameState`](crate::FrameState): what is on screen at a frame, before styling
//! - [`FrameDescription`](crate::FrameDescription): the styled, serializable answer
//!
//! ## Time
//!
//! Time is `frame / fps` seconds. [`Fps`](crate::Fps) is rational so NTSC rates such as
//! `30000/1001` stay exact until the final division.
//!
//! ## Subtitles
//!
//! A [`Subtitle`](crate::Subtitle) is active on `[start, end)`. Selection is a linear scan and
//! the first match wins, so with `[{0,2,"A"},{2,5,"B"}]` the time `2.0` shows `"B"`.
//! Captions usually arrive as SRT; [`parse_srt`](crate::parse_srt) turns them into
//! subtitles.
//!
//! ## Scenes and the zoom ramp
//!
//! A [`Scene`](crate::Scene) becomes active at its `timestamp`.
//! [`active_scene`](crate::active_scene) returns the scene with the greatest timestamp not
//! exceeding the current time. Before the first timestamp it still returns the first scene,
//! so the opening image is visible from frame 0.
//!
//! While a scene is active its image is scaled about the canvas centre by
//! [`KenBurns::scale_at`](crate::KenBurns::scale_at), evaluated at
//! `frame - timestamp * fps`. The stock ramp goes from `1.0` to `1.1` over 300 frames and holds
//! at both ends.
//!
//! ## Rendering
//!
//! ```no_run
//! use newsreel::{CompositionRegistry, FrameIndex, RenderProps, render_frame};
//!
//! # fn main() -> newsreel::NewsreelResult<()> {
//! let registry = CompositionRegistry::with_defaults();
//! let spec = registry.get("NewsVideo")?;
//! let props = RenderProps::from_path(std::path::Path::new("props.json"))?;
//! let frame = render_frame(spec, &props, FrameIndex(42))?;
//! println!("{} layers at {:.3}s", frame.layers.len(), frame.time_secs);
//! # Ok(())
//! # }
//! ```
//!
//! For whole ranges use [`render_frames`](crate::render_frames) or the streaming
//! [`render_frames_with`](crate::render_frames_with); both can fan out over a rayon pool via
//! [`RenderThreading`](crate::RenderThreading). Output order is always frame order.
//!
//! ## Preconditions
//!
//! Rendering never rejects props. [`RenderProps::validate`](crate::RenderProps::validate)
//! reports empty or overlapping caption intervals and out-of-order scenes for callers that
//! want to check.
