use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{NewsreelError, NewsreelResult},
    subtitle::model::Subtitle,
};

/// Parse SRT text into subtitles.
///
/// Cues are separated by blank lines. Each cue needs an index line, a
/// `HH:MM:SS,mmm --> HH:MM:SS,mmm` timing line and at least one text line; shorter cues are
/// skipped. Multi-line text is joined with single spaces. CRLF line endings are accepted.
pub fn parse_srt(content: &str) -> NewsreelResult<Vec<Subtitle>> {
    let mut out = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut block_no = 0usize;

    for line in content.lines().chain(std::iter::once("")) {
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            block.push(line);
            continue;
        }
        if block.is_empty() {
            continue;
        }

        block_no += 1;
        if block.len() >= 3 {
            let (start, end) = parse_timing_line(block[1]).map_err(|e| {
                NewsreelError::parse(format!("srt cue #{block_no} ({}): {e}", block[0].trim()))
            })?;
            out.push(Subtitle::new(start, end, block[2..].join(" ")));
        } else {
            tracing::debug!(block_no, lines = block.len(), "skipping short srt cue");
        }
        block.clear();
    }

    Ok(out)
}

/// Read and parse an SRT file.
pub fn load_srt(path: &Path) -> NewsreelResult<Vec<Subtitle>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read srt '{}'", path.display()))?;
    let subtitles = parse_srt(&content)?;
    tracing::debug!(path = %path.display(), cues = subtitles.len(), "loaded srt");
    Ok(subtitles)
}

/// Render subtitles as SRT text, numbering cues from 1.
pub fn write_srt(subtitles: &[Subtitle]) -> String {
    let mut output = String::new();

    for (i, sub) in subtitles.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_time(sub.start),
            format_srt_time(sub.end),
        ));
        output.push_str(&sub.text);
        output.push_str("\n\n");
    }

    output
}

fn parse_timing_line(line: &str) -> Result<(f64, f64), String> {
    let (start, rest) = line
        .split_once("-->")
        .ok_or_else(|| format!("timing line \"{line}\" has no '-->'"))?;
    // Anything after the end stamp (cue positioning) is ignored.
    let end = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| format!("timing line \"{line}\" has no end time"))?;
    Ok((parse_srt_time(start.trim())?, parse_srt_time(end)?))
}

/// Parse `HH:MM:SS,mmm` (or `HH:MM:SS.mmm`) to seconds.
///
/// The part after the separator is read as a decimal fraction, so `,5` is half a second.
pub(crate) fn parse_srt_time(s: &str) -> Result<f64, String> {
    let (clock, frac) = match s.split_once([',', '.']) {
        Some((clock, frac)) => (clock, Some(frac)),
        None => (s, None),
    };

    let mut fields = clock.split(':');
    let mut next = |name: &str| -> Result<u64, String> {
        let v = fields
            .next()
            .ok_or_else(|| format!("time \"{s}\" is missing {name}"))?;
        v.trim()
            .parse::<u64>()
            .map_err(|_| format!("time \"{s}\" has invalid {name} \"{v}\""))
    };
    let h = next("hours")?;
    let m = next("minutes")?;
    let sec = next("seconds")?;
    if fields.next().is_some() {
        return Err(format!("time \"{s}\" has too many fields"));
    }
    if m >= 60 || sec >= 60 {
        return Err(format!("time \"{s}\" has minutes or seconds out of range"));
    }

    let frac = match frac {
        Some(f) if !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()) => {
            format!("0.{f}")
                .parse::<f64>()
                .map_err(|_| format!("time \"{s}\" has invalid fraction"))?
        }
        Some(_) => return Err(format!("time \"{s}\" has invalid fraction")),
        None => 0.0,
    };

    let whole = h
        .checked_mul(3600)
        .and_then(|v| v.checked_add(m * 60 + sec))
        .ok_or_else(|| format!("time \"{s}\" is out of range"))?;
    Ok(whole as f64 + frac)
}

fn format_srt_time(secs: f64) -> String {
    let total_ms = (secs.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/srt.rs"]
mod tests;
