#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One caption shown over the half-open interval `[start, end)` seconds.
pub struct Subtitle {
    /// Start time in seconds (inclusive).
    pub start: f64,
    /// End time in seconds (exclusive).
    pub end: f64,
    /// Caption text.
    pub text: String,
}

impl Subtitle {
    /// Build a subtitle.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// `true` when `time_secs` lies in `[start, end)`.
    pub fn is_active_at(&self, time_secs: f64) -> bool {
        time_secs >= self.start && time_secs < self.end
    }

    /// Interval length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.end - self.start
    }
}
