//! Throughput charts for iterator benchmarks.
//!
//! Reads the harness' aggregate CSV output (mean / median / stddev rows per
//! benchmark), groups it into one series per benchmark and renders
//! throughput against container size as an SVG chart with error bars.

pub mod chart;
pub mod color;
pub mod data;
pub mod pipeline;
