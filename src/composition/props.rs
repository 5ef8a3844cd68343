use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{NewsreelError, NewsreelResult},
    scene::model::Scene,
    subtitle::{model::Subtitle, srt::load_srt},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Complete input of one render job.
///
/// Serialized with the field names the rendering host expects. `subtitles` and `audioUrl`
/// are required; `scenes` may be omitted.
pub struct RenderProps {
    /// Timed captions.
    pub subtitles: Vec<Subtitle>,
    /// Narration audio reference; empty means no audio.
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
    /// Background scenes ordered by timestamp.
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A precondition violation found by [`RenderProps::validate`].
pub enum PropsIssue {
    /// Subtitle `start >= end`; it can never be active.
    EmptySubtitleInterval {
        /// Index into `subtitles`.
        index: usize,
    },
    /// Subtitle start or end is NaN or infinite.
    NonFiniteSubtitleTime {
        /// Index into `subtitles`.
        index: usize,
    },
    /// Subtitle overlaps an earlier entry, which wins where they overlap.
    OverlappingSubtitles {
        /// Index of the later subtitle.
        index: usize,
        /// Index of the first earlier subtitle it overlaps.
        earlier: usize,
    },
    /// Scene timestamp is NaN or infinite.
    NonFiniteSceneTimestamp {
        /// Index into `scenes`.
        index: usize,
    },
    /// Scene timestamp is lower than its predecessor's.
    DecreasingSceneTimestamp {
        /// Index of the out-of-order scene.
        index: usize,
    },
}

impl std::fmt::Display for PropsIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySubtitleInterval { index } => {
                write!(f, "subtitle #{index} has start >= end")
            }
            Self::NonFiniteSubtitleTime { index } => {
                write!(f, "subtitle #{index} has a non-finite time")
            }
            Self::OverlappingSubtitles { index, earlier } => {
                write!(f, "subtitle #{index} overlaps subtitle #{earlier}")
            }
            Self::NonFiniteSceneTimestamp { index } => {
                write!(f, "scene #{index} has a non-finite timestamp")
            }
            Self::DecreasingSceneTimestamp { index } => {
                write!(f, "scene #{index} starts before scene #{}", index - 1)
            }
        }
    }
}

impl RenderProps {
    /// Build props from parts.
    pub fn new(subtitles: Vec<Subtitle>, audio_url: impl Into<String>, scenes: Vec<Scene>) -> Self {
        Self {
            subtitles,
            audio_url: audio_url.into(),
            scenes,
        }
    }

    /// Parse props from JSON text.
    pub fn from_json_str(s: &str) -> NewsreelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read props from a JSON file.
    pub fn from_path(path: &Path) -> NewsreelResult<Self> {
        let f = File::open(path).with_context(|| format!("open props '{}'", path.display()))?;
        let props: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| NewsreelError::serde(format!("parse props '{}': {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            subtitles = props.subtitles.len(),
            scenes = props.scenes.len(),
            "loaded props"
        );
        Ok(props)
    }

    /// Write props as pretty JSON, creating parent directories.
    pub fn write_to_path(&self, path: &Path) -> NewsreelResult<()> {
        ensure_parent_dir(path)?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("write props '{}'", path.display()))?;
        Ok(())
    }

    /// Check caller-side preconditions.
    ///
    /// Rendering never calls this; violations only make selection results surprising.
    pub fn validate(&self) -> Vec<PropsIssue> {
        let mut issues = Vec::new();

        for (index, s) in self.subtitles.iter().enumerate() {
            if !s.start.is_finite() || !s.end.is_finite() {
                issues.push(PropsIssue::NonFiniteSubtitleTime { index });
            } else if s.start >= s.end {
                issues.push(PropsIssue::EmptySubtitleInterval { index });
            }
        }
        // Selection does not require sorted input, so every earlier entry is a candidate.
        for (index, later) in self.subtitles.iter().enumerate().skip(1) {
            if let Some(earlier) = self.subtitles[..index]
                .iter()
                .position(|s| later.start < s.end && s.start < later.end)
            {
                issues.push(PropsIssue::OverlappingSubtitles { index, earlier });
            }
        }

        for (index, s) in self.scenes.iter().enumerate() {
            if !s.timestamp.is_finite() {
                issues.push(PropsIssue::NonFiniteSceneTimestamp { index });
            }
        }
        for (index, pair) in self.scenes.windows(2).enumerate() {
            if pair[1].timestamp < pair[0].timestamp {
                issues.push(PropsIssue::DecreasingSceneTimestamp { index: index + 1 });
            }
        }

        issues
    }
}

/// Build render props from an SRT subtitle file and a narration audio file.
///
/// Both files must exist. The audio path becomes an absolute `file://` URL.
pub fn prepare_props(
    srt_path: &Path,
    audio_path: &Path,
    scenes: Vec<Scene>,
) -> NewsreelResult<RenderProps> {
    if !srt_path.is_file() {
        return Err(NewsreelError::validation(format!(
            "subtitle file not found: {}",
            srt_path.display()
        )));
    }
    if !audio_path.is_file() {
        return Err(NewsreelError::validation(format!(
            "audio file not found: {}",
            audio_path.display()
        )));
    }

    let subtitles = load_srt(srt_path)?;
    let audio_url = file_url(audio_path)?;
    Ok(RenderProps::new(subtitles, audio_url, scenes))
}

/// Read a JSON array of scenes.
pub fn load_scenes(path: &Path) -> NewsreelResult<Vec<Scene>> {
    let f = File::open(path).with_context(|| format!("open scenes '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .map_err(|e| NewsreelError::serde(format!("parse scenes '{}': {e}", path.display())))
}

/// `file://` URL for an absolute form of `path`.
pub fn file_url(path: &Path) -> NewsreelResult<String> {
    let abs: PathBuf = std::path::absolute(path)
        .with_context(|| format!("resolve absolute path '{}'", path.display()))?;
    Ok(format!("file://{}", abs.display()))
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> NewsreelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/props.rs"]
mod tests;
