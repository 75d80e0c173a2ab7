//! Writes synthetic benchmark results in the harness' aggregate CSV layout.
//!
//! Produces `benchmark_results/result_list.csv` and
//! `benchmark_results/result_map.csv`: for every benchmark and container
//! size, a `_mean`, `_median` and `_stddev` row, without a header line.

use std::fs;
use std::path::Path;

/// Container sizes: 256 up to 8Mi, multiplier 8.
const SIZES: [u64; 6] = [256, 2048, 16384, 131072, 1048576, 8388608];
const REPETITIONS: usize = 10;
const ELEMENT_BYTES: f64 = 4.0;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One benchmark: its reported name and throughput model.
struct Strategy {
    name: &'static str,
    /// Bytes per second for small, cache-resident containers.
    peak: f64,
    /// Relative noise between repetitions.
    noise: f64,
}

/// Throughput drops once the container stops fitting in cache.
fn expected_throughput(strategy: &Strategy, size: u64) -> f64 {
    let bytes = size as f64 * ELEMENT_BYTES;
    let cache_penalty = 1.0 + (bytes / 1.0e6).ln_1p() * 0.4;
    strategy.peak / cache_penalty
}

struct Stats {
    mean: f64,
    median: f64,
    std_dev: f64,
}

fn stats(values: &mut [f64]) -> Stats {
    values.sort_by(f64::total_cmp);
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let mid = values.len() / 2;
    let median = if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    };
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Stats {
        mean,
        median,
        std_dev: variance.sqrt(),
    }
}

fn write_results(path: &Path, strategies: &[Strategy], rng: &mut SimpleRng) -> usize {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to create output file");
    let mut rows = 0;

    for strategy in strategies {
        for &size in &SIZES {
            let expected = expected_throughput(strategy, size);
            let mut samples: Vec<f64> = (0..REPETITIONS)
                .map(|_| rng.gauss(expected, expected * strategy.noise).max(1.0))
                .collect();
            let stats = stats(&mut samples);
            let iterations = (1 << 24) / size;

            for (suffix, value) in [
                ("mean", stats.mean),
                ("median", stats.median),
                ("stddev", stats.std_dev),
            ] {
                // Per-iteration time in microseconds.
                let time = size as f64 * ELEMENT_BYTES / value * 1e6;
                let name = format!("{}/{size}_{suffix}", strategy.name);
                let record = [
                    name,
                    iterations.to_string(),
                    format!("{time:.3}"),
                    format!("{time:.3}"),
                    "us".to_string(),
                    format!("{value:.1}"),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                ];
                writer.write_record(&record).expect("Failed to write record");
                rows += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output file");
    rows
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let out_dir = Path::new("benchmark_results");
    fs::create_dir_all(out_dir).expect("Failed to create output directory");

    let list = [
        Strategy {
            name: "benchmark_iteration<std::list<int>::iterator, std::list<int>>",
            peak: 4.0e9,
            noise: 0.03,
        },
        Strategy {
            name: "benchmark_iteration<tyti::any_iterator<int>, std::list<int>>",
            peak: 1.6e9,
            noise: 0.05,
        },
        Strategy {
            name: "benchmark_iteration<tyti::any_iterator_virtual<int>, std::list<int>>",
            peak: 1.1e9,
            noise: 0.05,
        },
    ];
    let map = [
        Strategy {
            name: "benchmark_iteration_map<std::map<int, int>::iterator>",
            peak: 1.5e9,
            noise: 0.04,
        },
        Strategy {
            name: "benchmark_iteration_map<tyti::any_iterator<std::pair<const int, int>>>",
            peak: 9.0e8,
            noise: 0.06,
        },
        Strategy {
            name: "benchmark_iteration_map<tyti::any_iterator_virtual<std::pair<const int, int>>>",
            peak: 7.0e8,
            noise: 0.06,
        },
    ];

    for (file, strategies) in [("result_list.csv", &list), ("result_map.csv", &map)] {
        let path = out_dir.join(file);
        let rows = write_results(&path, strategies, &mut rng);
        println!(
            "Wrote {rows} rows ({} benchmarks x {} sizes) to {}",
            strategies.len(),
            SIZES.len(),
            path.display()
        );
    }
}
