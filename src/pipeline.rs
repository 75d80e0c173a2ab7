use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::{self, ChartStyle};
use crate::data::loader::load_series;
use crate::data::model::SeriesCollection;

// ---------------------------------------------------------------------------
// Plot jobs
// ---------------------------------------------------------------------------

/// One CSV → chart conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotJob {
    /// Benchmark result CSV.
    pub input: PathBuf,
    /// SVG file to write.
    pub output: PathBuf,
    /// Chart caption.
    pub title: String,
    /// Where to write the aggregated series as JSON, if anywhere.
    #[serde(default)]
    pub data_dump: Option<PathBuf>,
}

impl PlotJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, title: &str) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            title: title.to_string(),
            data_dump: None,
        }
    }

    /// Also write the plotted data next to the chart.
    pub fn with_data_dump(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dump = Some(path.into());
        self
    }
}

/// The list and map iteration charts, read from and written to `results_dir`.
pub fn default_jobs(results_dir: &Path) -> Vec<PlotJob> {
    [
        ("result_list.csv", "list_iteration", "iteration over a list"),
        ("result_map.csv", "map_iteration", "iteration over a map"),
    ]
    .into_iter()
    .map(|(input, stem, title)| {
        PlotJob::new(
            results_dir.join(input),
            results_dir.join(format!("{stem}.svg")),
            title,
        )
        .with_data_dump(results_dir.join("plot_data").join(format!("{stem}.json")))
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

/// Load `job.input`, render it and write `job.output`.
///
/// Returns the aggregated series the chart was drawn from.
pub fn plot_file(job: &PlotJob, style: &ChartStyle) -> Result<SeriesCollection> {
    let collection = load_series(&job.input)?;

    chart::save_svg(&collection, &job.title, style, &job.output)
        .with_context(|| format!("plotting '{}'", job.title))?;
    log::info!(
        "Plotted '{}' ({} series) to {}",
        job.title,
        collection.len(),
        job.output.display()
    );

    if let Some(dump) = &job.data_dump {
        write_data_dump(&collection, dump)?;
    }

    Ok(collection)
}

/// Run every job in order, stopping at the first failure.
pub fn run_all(jobs: &[PlotJob], style: &ChartStyle) -> Result<()> {
    for job in jobs {
        plot_file(job, style)
            .with_context(|| format!("{} → {}", job.input.display(), job.output.display()))?;
    }
    Ok(())
}

fn write_data_dump(collection: &SeriesCollection, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(collection).context("serializing plot data")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    log::debug!("Wrote plot data to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, size: u64, mean: f64, std_dev: f64) -> String {
        format!(
            "{name}/{size}_mean,10,1,1,us,{mean},,\n\
             {name}/{size}_median,10,1,1,us,{mean},,\n\
             {name}/{size}_stddev,10,1,1,us,{std_dev},,\n"
        )
    }

    fn write_results(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let csv = [
            record("Reference", 256, 4.0e9, 1.0e8),
            record("any_iterator", 256, 2.0e9, 5.0e7),
            record("Reference", 2048, 4.2e9, 1.2e8),
            record("any_iterator", 2048, 2.1e9, 6.0e7),
        ]
        .concat();
        fs::write(&path, csv).unwrap();
        path
    }

    #[test]
    fn default_jobs_use_fixed_paths() {
        let jobs = default_jobs(Path::new("benchmark_results"));

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].input, Path::new("benchmark_results/result_list.csv"));
        assert_eq!(jobs[0].output, Path::new("benchmark_results/list_iteration.svg"));
        assert_eq!(jobs[0].title, "iteration over a list");
        assert_eq!(jobs[1].input, Path::new("benchmark_results/result_map.csv"));
        assert_eq!(jobs[1].output, Path::new("benchmark_results/map_iteration.svg"));
        assert_eq!(jobs[1].title, "iteration over a map");
        assert_eq!(
            jobs[1].data_dump.as_deref(),
            Some(Path::new("benchmark_results/plot_data/map_iteration.json"))
        );
    }

    #[test]
    fn plot_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_results(dir.path(), "result_list.csv");
        let output = dir.path().join("list_iteration.svg");
        let job = PlotJob::new(&input, output, "iteration over a list")
            .with_data_dump(dir.path().join("plot_data").join("list_iteration.json"));

        let collection = plot_file(&job, &ChartStyle::default()).unwrap();

        assert_eq!(collection.len(), 2);
        for series in &collection {
            assert_eq!(series.len(), 2);
        }

        let svg = fs::read_to_string(&job.output).unwrap();
        assert!(svg.contains("iteration over a list"));

        let dump: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(job.data_dump.unwrap()).unwrap()).unwrap();
        assert_eq!(dump[0]["name"], "Reference");
        assert_eq!(dump[1]["sizes"], serde_json::json!([256, 2048]));
    }

    #[test]
    fn rerunning_gives_identical_results() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_results(dir.path(), "in.csv");
        let job = PlotJob::new(&input, dir.path().join("out.svg"), "t");
        let style = ChartStyle::default();

        let first = plot_file(&job, &style).unwrap();
        let first_svg = fs::read_to_string(&job.output).unwrap();
        let second = plot_file(&job, &style).unwrap();
        let second_svg = fs::read_to_string(&job.output).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_svg, second_svg);
    }

    #[test]
    fn bad_input_leaves_no_chart() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.csv");
        let csv = "a/8_mean,1,1,1,us,NaN?,,\n\
                   a/8_median,1,1,1,us,1,,\n\
                   a/8_stddev,1,1,1,us,1,,\n";
        fs::write(&input, csv).unwrap();
        let job = PlotJob::new(&input, dir.path().join("bad.svg"), "bad");

        assert!(plot_file(&job, &ChartStyle::default()).is_err());
        assert!(!job.output.exists());
    }

    #[test]
    fn only_skippable_rows_give_an_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("header_only.csv");
        let header = "name,iterations,real_time,cpu_time,time_unit,bytes_per_second\n";
        fs::write(&input, header).unwrap();
        let job = PlotJob::new(&input, dir.path().join("out.svg"), "empty");

        let collection = plot_file(&job, &ChartStyle::default()).unwrap();

        assert!(collection.is_empty());
        let svg = fs::read_to_string(&job.output).unwrap();
        assert!(svg.contains("empty"));
    }

    #[test]
    fn skipped_list_does_not_stop_map_chart() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("result_list.csv"),
            "summary,,,,,x\nsummary,,,,,x\nsummary,,,,,x\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("result_map.csv"),
            record("map_iter", 256, 1.5e9, 2.0e7),
        )
        .unwrap();

        run_all(&default_jobs(dir.path()), &ChartStyle::default()).unwrap();

        let list_svg = fs::read_to_string(dir.path().join("list_iteration.svg")).unwrap();
        assert!(list_svg.contains("iteration over a list"));
        let map_svg = fs::read_to_string(dir.path().join("map_iteration.svg")).unwrap();
        assert!(map_svg.contains("map_iter"));
        assert!(dir.path().join("plot_data").join("list_iteration.json").exists());
        assert!(dir.path().join("plot_data").join("map_iteration.json").exists());
    }

    #[test]
    fn run_all_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_results(dir.path(), "good.csv");
        let jobs = vec![
            PlotJob::new(dir.path().join("missing.csv"), dir.path().join("a.svg"), "a"),
            PlotJob::new(&good, dir.path().join("b.svg"), "b"),
        ];

        let err = run_all(&jobs, &ChartStyle::default()).unwrap_err();

        assert!(format!("{err:#}").contains("missing.csv"));
        assert!(!dir.path().join("b.svg").exists());
    }
}
