use std::collections::HashMap;

use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

use crate::data::model::SeriesCollection;

/// Colour used for names that are not part of the map.
pub const DEFAULT_COLOR: RGBColor = RGBColor(128, 128, 128);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: series name → RGBColor
// ---------------------------------------------------------------------------

/// Maps series names to distinct colours, in the collection's order.
#[derive(Debug, Clone)]
pub struct ColorMap {
    lookup: HashMap<String, RGBColor>,
}

impl ColorMap {
    /// Assign one palette colour per series, first series first.
    pub fn new(collection: &SeriesCollection) -> Self {
        let palette = generate_palette(collection.len());
        let lookup = collection
            .names()
            .zip(palette)
            .map(|(name, c)| (name.to_string(), c))
            .collect();

        ColorMap { lookup }
    }

    /// Look up the colour for a series.
    pub fn color_for(&self, name: &str) -> RGBColor {
        self.lookup.get(name).copied().unwrap_or(DEFAULT_COLOR)
    }
}
