//! Chart rendering for aggregated benchmark series.
//!
//! [`plot`] draws throughput-vs-size charts with the [`plotters`] SVG backend,
//! [`style`] holds the knobs that control how they look.

pub mod plot;
pub mod style;

pub use plot::{render_svg, save_svg, PlotError};
pub use style::ChartStyle;
