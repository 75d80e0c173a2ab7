use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use csv::StringRecord;
use thiserror::Error;

use super::model::Sample;

/// Column holding the plotted statistic (`bytes_per_second` in the
/// benchmark harness output).
pub const STAT_COLUMN: usize = 5;

/// Which row of a record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Mean,
    StdDev,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::Mean => write!(f, "mean"),
            RowKind::StdDev => write!(f, "stddev"),
        }
    }
}

/// A record that cannot be turned into a sample.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("{row} row has no column {column}")]
    MissingField { row: RowKind, column: usize },

    #[error("{row} row missing for benchmark '{name}'")]
    MissingRow { row: RowKind, name: String },

    #[error("invalid container size '{value}' in '{field}'")]
    InvalidSize {
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{row} row: '{value}' in column {column} is not a number")]
    InvalidNumber {
        row: RowKind,
        column: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parse one (mean, median, stddev) record.
///
/// Returns `Ok(None)` when the mean row's name field has no `/`, which is
/// how header and context lines are skipped. Every other defect is an error.
/// The median row is not used.
pub fn parse_record(
    mean: &StringRecord,
    _median: Option<&StringRecord>,
    std_dev: Option<&StringRecord>,
) -> Result<Option<(String, Sample)>, RowError> {
    let field = mean.get(0).ok_or(RowError::MissingField {
        row: RowKind::Mean,
        column: 0,
    })?;

    let mut parts = field.split('/');
    let (Some(name), Some(rest)) = (parts.next(), parts.next()) else {
        return Ok(None);
    };

    let size = parse_size(field, rest)?;
    let average = stat(mean, RowKind::Mean)?;

    let std_dev = std_dev.ok_or_else(|| RowError::MissingRow {
        row: RowKind::StdDev,
        name: name.to_string(),
    })?;
    let std_dev = stat(std_dev, RowKind::StdDev)?;

    Ok(Some((
        name.to_string(),
        Sample {
            size,
            average,
            std_dev,
        },
    )))
}

/// `128_mean` → 128
fn parse_size(field: &str, rest: &str) -> Result<u64, RowError> {
    let value = rest.split('_').next().unwrap_or(rest).trim();
    value.parse().map_err(|source| RowError::InvalidSize {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })
}

fn stat(record: &StringRecord, row: RowKind) -> Result<f64, RowError> {
    let value = record.get(STAT_COLUMN).ok_or(RowError::MissingField {
        row,
        column: STAT_COLUMN,
    })?;
    value
        .trim()
        .parse()
        .map_err(|source| RowError::InvalidNumber {
            row,
            column: STAT_COLUMN,
            value: value.to_string(),
            source,
        })
}
