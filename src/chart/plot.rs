//! Throughput-vs-container-size charts.
//!
//! One series per benchmark: circle markers at the mean, vertical error bars
//! spanning one standard deviation either side, and a dashed connecting line.
//! The x axis is logarithmic. The legend is built from the series names in
//! the order they first appeared in the input.

use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use super::style::ChartStyle;
use crate::color::ColorMap;
use crate::data::model::{Sample, Series, SeriesCollection};

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save chart to file: {0}")]
    FileSave(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, PlotError>;

const FONT: &str = "sans-serif";

/// Formats large counts with base-10 suffixes for axis labels
///
/// `1500.0` becomes `1.5k`, `2.0e9` becomes `2G`.
pub fn format_count(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];

    let abs = value.abs();
    for (scale, suffix) in UNITS {
        if abs >= scale {
            return format!("{}{suffix}", one_decimal(value / scale));
        }
    }
    one_decimal(value)
}

fn one_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// Whether a sample can be placed on the chart: a positive size for the log
/// axis and finite statistics.
fn is_plottable(sample: &Sample) -> bool {
    sample.size > 0 && sample.average.is_finite() && sample.std_dev.is_finite()
}

/// Axis bounds for a collection, padded so that no marker sits on the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x: (f64, f64),
    y: (f64, f64),
}

/// Range used when there is nothing to plot.
const EMPTY_BOUNDS: Bounds = Bounds {
    x: (1.0, 10.0),
    y: (0.0, 1.0),
};

fn bounds(collection: &SeriesCollection) -> Bounds {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    let mut any = false;

    for sample in collection.iter().flat_map(Series::samples).filter(is_plottable) {
        let size = sample.size as f64;
        let spread = sample.std_dev.abs();
        x = (x.0.min(size), x.1.max(size));
        y = (
            y.0.min(sample.average - spread),
            y.1.max(sample.average + spread),
        );
        any = true;
    }

    if !any {
        return EMPTY_BOUNDS;
    }

    // Half an octave either side on the log axis.
    let x = (x.0 / 1.5, x.1 * 1.5);

    let y_low = if y.0 >= 0.0 { 0.0 } else { y.0 * 1.1 };
    let mut y_high = y.1 * 1.1;
    if y_high <= y_low {
        y_high = y_low + 1.0;
    }

    Bounds {
        x,
        y: (y_low, y_high),
    }
}

/// Draws the chart onto an existing drawing area
///
/// The area is cleared to white first. Rendering is backend-agnostic, so the
/// same code serves files and in-memory buffers. Samples at size 0 or with a
/// non-finite statistic are left out with a warning; a collection with nothing
/// left to draw still gets its frame, title and axis descriptions.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    collection: &SeriesCollection,
    title: &str,
    style: &ChartStyle,
) -> Result<()> {
    let bounds = bounds(collection);
    let colors = ColorMap::new(collection);

    root.fill(&WHITE).map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, (FONT, style.caption_font_size))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((bounds.x.0..bounds.x.1).log_scale(), bounds.y.0..bounds.y.1)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(style.x_desc.as_str())
        .y_desc(style.y_desc.as_str())
        .axis_desc_style((FONT, style.desc_font_size))
        .label_style((FONT, style.label_font_size))
        .x_label_formatter(&|x| format_count(*x))
        .y_label_formatter(&|y| format_count(*y))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let mut drawn = 0;
    for series in collection {
        let samples: Vec<Sample> = series.samples().filter(is_plottable).collect();
        let dropped = series.len() - samples.len();
        if dropped > 0 {
            log::warn!(
                "'{title}': leaving out {dropped} unplottable sample(s) of '{}'",
                series.name()
            );
        }
        if samples.is_empty() {
            continue;
        }

        let color = colors.color_for(series.name());
        let points: Vec<(f64, f64)> = samples.iter().map(|s| (s.size as f64, s.average)).collect();

        chart
            .draw_series(DashedLineSeries::new(
                points.clone(),
                style.dash_length,
                style.dash_spacing,
                color.stroke_width(style.line_width),
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series(samples.iter().map(|s| {
                let spread = s.std_dev.abs();
                ErrorBar::new_vertical(
                    s.size as f64,
                    s.average - spread,
                    s.average,
                    s.average + spread,
                    color.stroke_width(style.line_width),
                    style.cap_size * 2,
                )
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        let radius = style.marker_radius;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, radius, color.filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(series.name())
            .legend(move |(x, y)| Circle::new((x, y), radius, color.filled()));
        drawn += 1;
    }

    if drawn == 0 {
        log::warn!("'{title}': no plottable samples, drawing an empty chart");
        return Ok(());
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, style.label_font_size))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Renders the chart into an SVG document held in memory
pub fn render_svg(
    collection: &SeriesCollection,
    title: &str,
    style: &ChartStyle,
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        draw_chart(&root, collection, title, style)?;
        root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    }
    Ok(svg)
}

/// Renders the chart and writes it as an SVG file
///
/// Nothing is written unless rendering succeeds. Missing parent directories
/// are created.
pub fn save_svg(
    collection: &SeriesCollection,
    title: &str,
    style: &ChartStyle,
    output_path: &Path,
) -> Result<()> {
    let svg = render_svg(collection, title, style)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, svg)?;

    log::debug!(
        "Wrote chart '{title}' with {} series to {}",
        collection.len(),
        output_path.display()
    );
    Ok(())
}
