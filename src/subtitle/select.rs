use crate::subtitle::model::Subtitle;

/// First subtitle whose `[start, end)` interval contains `time_secs`.
///
/// Overlapping intervals resolve to the lowest index. The slice need not be sorted.
pub fn active_subtitle(subtitles: &[Subtitle], time_secs: f64) -> Option<&Subtitle> {
    subtitles.iter().find(|s| s.is_active_at(time_secs))
}

#[cfg(test)]
#[path = "../../tests/unit/subtitle/select.rs"]
mod tests;
