use crate::scene::model::Scene;

/// Scene active at `time_secs`.
///
/// Folds over `scenes` starting from the first one and advances to any later scene whose
/// timestamp is `<= time_secs` and strictly greater than the current pick. With
/// non-decreasing timestamps this is the scene with the greatest timestamp not exceeding
/// `time_secs`. When no scene qualifies (e.g. `time_secs` precedes every timestamp) the first
/// scene is returned. An empty slice yields `None`.
pub fn active_scene(scenes: &[Scene], time_secs: f64) -> Option<&Scene> {
    let (first, rest) = scenes.split_first()?;
    Some(rest.iter().fold(first, |acc, s| {
        if s.timestamp <= time_secs && s.timestamp > acc.timestamp {
            s
        } else {
            acc
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/select.rs"]
mod tests;
