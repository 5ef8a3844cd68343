use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    color::Color,
    error::{NewsreelError, NewsreelResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Cosmetic configuration of the news video. Every field has a default, so a style file only
/// needs the values it overrides.
pub struct Style {
    /// Canvas fill behind everything else.
    #[serde(default = "default_background")]
    pub background: Color,
    /// Caption box.
    #[serde(default)]
    pub subtitle: SubtitleStyle,
    /// Brand mark in the top-right corner; `None` disables it.
    #[serde(default = "default_watermark")]
    pub watermark: Option<WatermarkStyle>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Caption box anchored to the bottom of the canvas and centred horizontally.
pub struct SubtitleStyle {
    /// Distance from the canvas bottom to the box bottom, in pixels.
    pub bottom_px: f64,
    /// Horizontal inset of the caption area on both sides, in pixels.
    pub inset_x_px: f64,
    /// Box fill.
    pub box_color: Color,
    /// Text fill.
    pub text_color: Color,
    /// Font size in pixels.
    pub font_size_px: f64,
    /// Bold weight.
    pub bold: bool,
    /// Vertical padding inside the box.
    pub padding_y_px: f64,
    /// Horizontal padding inside the box.
    pub padding_x_px: f64,
    /// Box corner radius.
    pub corner_radius_px: f64,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
}

impl Default for SubtitleStyle {
    fn default() -> Self {
        Self {
            bottom_px: 100.0,
            inset_x_px: 80.0,
            box_color: Color::rgba(0.0, 0.0, 0.0, 0.8),
            text_color: Color::rgba(1.0, 1.0, 1.0, 1.0),
            font_size_px: 48.0,
            bold: true,
            padding_y_px: 20.0,
            padding_x_px: 40.0,
            corner_radius_px: 8.0,
            line_height: 1.4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Text mark anchored to the top-right corner.
pub struct WatermarkStyle {
    /// Mark text.
    pub text: String,
    /// Distance from the canvas top, in pixels.
    pub top_px: f64,
    /// Distance from the canvas right edge, in pixels.
    pub right_px: f64,
    /// Font size in pixels.
    pub font_size_px: f64,
    /// Text fill.
    pub color: Color,
    /// Bold weight.
    pub bold: bool,
}

impl Default for WatermarkStyle {
    fn default() -> Self {
        Self {
            text: "2511youtuber".to_owned(),
            top_px: 40.0,
            right_px: 40.0,
            font_size_px: 24.0,
            color: Color::rgba(1.0, 1.0, 1.0, 0.6),
            bold: true,
        }
    }
}

fn default_background() -> Color {
    Color::from_rgb8(0x1a, 0x1a, 0x2e, 1.0)
}

fn default_watermark() -> Option<WatermarkStyle> {
    Some(WatermarkStyle::default())
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: default_background(),
            subtitle: SubtitleStyle::default(),
            watermark: default_watermark(),
        }
    }
}

impl Style {
    /// Read a style from a JSON file; missing fields take their defaults.
    pub fn from_path(path: &Path) -> NewsreelResult<Self> {
        let f = File::open(path).with_context(|| format!("open style '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| NewsreelError::serde(format!("parse style '{}': {e}", path.display())))
    }
}
