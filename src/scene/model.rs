#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A background image that becomes active at `timestamp` seconds.
pub struct Scene {
    /// Activation time in seconds.
    pub timestamp: f64,
    /// Opaque image reference resolved by the host.
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

impl Scene {
    /// Build a scene.
    pub fn new(timestamp: f64, image_path: impl Into<String>) -> Self {
        Self {
            timestamp,
            image_path: image_path.into(),
        }
    }
}
