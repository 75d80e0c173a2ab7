use std::path::Path;
use std::process::ExitCode;

use iter_bench_plot::chart::ChartStyle;
use iter_bench_plot::pipeline::{default_jobs, run_all};

/// Directory holding the benchmark CSVs; charts are written next to them.
const RESULTS_DIR: &str = "benchmark_results";

fn main() -> ExitCode {
    env_logger::init();

    let jobs = default_jobs(Path::new(RESULTS_DIR));
    match run_all(&jobs, &ChartStyle::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Plotting failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
