use rayon::prelude::*;

use crate::{
    composition::{props::RenderProps, spec::CompositionSpec},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{NewsreelError, NewsreelResult},
    render::frame::{FrameDescription, describe_frame},
};

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame evaluation.
pub struct RenderThreading {
    /// Enable parallel evaluation when `true`.
    pub parallel: bool,
    /// Chunk size in frames; each chunk is handed to the sink before the next one starts.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Aggregated counters for a range render.
pub struct RenderStats {
    /// Frames handed to the sink.
    pub frames_total: u64,
    /// Frames with a caption on screen.
    pub frames_with_subtitle: u64,
    /// Frames with a background image.
    pub frames_with_scene: u64,
}

/// Describe every frame of `range`, in order.
pub fn render_frames(
    spec: &CompositionSpec,
    props: &RenderProps,
    range: FrameRange,
    threading: &RenderThreading,
) -> NewsreelResult<Vec<FrameDescription>> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    render_frames_with(spec, props, range, threading, |frame| {
        out.push(frame);
        Ok(())
    })?;
    Ok(out)
}

/// Describe every frame of `range` and stream them, in order, into `sink`.
///
/// Frames are produced chunk by chunk so memory stays bounded by `chunk_size` even for long
/// ranges. In parallel mode each chunk is evaluated on a rayon pool.
#[tracing::instrument(skip(spec, props, threading, sink), fields(composition = %spec.id))]
pub fn render_frames_with<F>(
    spec: &CompositionSpec,
    props: &RenderProps,
    range: FrameRange,
    threading: &RenderThreading,
    mut sink: F,
) -> NewsreelResult<RenderStats>
where
    F: FnMut(FrameDescription) -> NewsreelResult<()>,
{
    if range.is_empty() {
        return Err(NewsreelError::validation("render range must be non-empty"));
    }
    spec.validate()?;
    if range.end.0 > spec.duration_in_frames {
        return Err(NewsreelError::evaluation(format!(
            "render range end {} exceeds composition duration {}",
            range.end.0, spec.duration_in_frames
        )));
    }

    let mut stats = RenderStats::default();
    let mut emit = |frame: FrameDescription, stats: &mut RenderStats| -> NewsreelResult<()> {
        stats.frames_total += 1;
        stats.frames_with_subtitle += u64::from(frame.subtitle().is_some());
        stats.frames_with_scene += u64::from(frame.background_image().is_some());
        sink(frame)
    };

    if !threading.parallel {
        for f in range.start.0..range.end.0 {
            emit(describe_frame(spec, props, FrameIndex(f)), &mut stats)?;
        }
        tracing::debug!(frames = stats.frames_total, "rendered range sequentially");
        return Ok(stats);
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let frames: Vec<FrameDescription> = pool.install(|| {
            (chunk_start..chunk_end)
                .into_par_iter()
                .map(|f| describe_frame(spec, props, FrameIndex(f)))
                .collect()
        });
        for frame in frames {
            emit(frame, &mut stats)?;
        }
        chunk_start = chunk_end;
    }

    tracing::debug!(
        frames = stats.frames_total,
        threads = pool.current_num_threads(),
        chunk_size,
        "rendered range in parallel"
    );
    Ok(stats)
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

fn build_thread_pool(threads: Option<usize>) -> NewsreelResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        if n == 0 {
            return Err(NewsreelError::validation("threads must be > 0"));
        }
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| NewsreelError::evaluation(format!("failed to build rayon pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
