use serde::{Deserialize, Serialize};

/// Horizontal axis description.
pub const X_DESC: &str = "container size";
/// Vertical axis description.
pub const Y_DESC: &str = "increments per second";

/// Appearance of a throughput chart.
///
/// Missing fields fall back to [`ChartStyle::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    pub x_desc: String,
    pub y_desc: String,
    pub caption_font_size: u32,
    pub desc_font_size: u32,
    pub label_font_size: u32,
    /// Radius of the circle marking each sample.
    pub marker_radius: u32,
    /// Half-width of the error bar caps.
    pub cap_size: u32,
    pub line_width: u32,
    /// Dash length of the connecting line.
    pub dash_length: u32,
    /// Gap between dashes of the connecting line.
    pub dash_spacing: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            x_desc: X_DESC.to_string(),
            y_desc: Y_DESC.to_string(),
            caption_font_size: 32,
            desc_font_size: 22,
            label_font_size: 18,
            marker_radius: 5,
            cap_size: 10,
            line_width: 2,
            dash_length: 12,
            dash_spacing: 6,
        }
    }
}
