use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use super::grouper::records;
use super::model::SeriesCollection;
use super::parser::parse_record;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and aggregate a benchmark result CSV.
///
/// The file is headerless; every three rows form one record
/// (mean, median, stddev). Records whose name has no `/` are skipped,
/// any other malformed record aborts the load.
pub fn load_series(path: &Path) -> Result<SeriesCollection> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let collection = read_series(file).with_context(|| format!("reading {}", path.display()))?;

    log::info!(
        "Loaded {} samples in {} series from {}",
        collection.sample_count(),
        collection.len(),
        path.display()
    );
    Ok(collection)
}

/// Aggregate benchmark records from any CSV source.
pub fn read_series<R: Read>(source: R) -> Result<SeriesCollection> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut collection = SeriesCollection::new();
    let mut skipped = 0usize;

    for (record_no, [mean, median, std_dev]) in records(reader.into_records()).enumerate() {
        let Some(mean) = row(mean, record_no)? else {
            break;
        };
        let median = row(median, record_no)?;
        let std_dev = row(std_dev, record_no)?;

        let parsed = parse_record(&mean, median.as_ref(), std_dev.as_ref()).with_context(|| {
            format!(
                "benchmark record {record_no} starting at line {}",
                line_of(&mean)
            )
        })?;

        match parsed {
            Some((name, sample)) => collection.add(&name, sample),
            None => {
                log::debug!(
                    "Skipping record {record_no} ('{}'): no series/size separator",
                    mean.get(0).unwrap_or_default()
                );
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} records without a series name");
    }
    Ok(collection)
}

fn row(row: Option<csv::Result<StringRecord>>, record_no: usize) -> Result<Option<StringRecord>> {
    row.transpose()
        .with_context(|| format!("malformed CSV in benchmark record {record_no}"))
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}
