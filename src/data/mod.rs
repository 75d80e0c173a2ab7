//! Data layer: row grouping, row parsing, aggregation and loading.
//!
//! Architecture:
//! ```text
//!   result_*.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ grouper   │  rows → [mean, median, stddev] triplets
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  parser   │  triplet → (series name, Sample)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────────┐
//!   │ SeriesCollection │  name → Series, first-seen order
//!   └─────────────────┘
//! ```
//!
//! [`loader`] drives the three stages over a CSV file.

pub mod grouper;
pub mod loader;
pub mod model;
pub mod parser;
