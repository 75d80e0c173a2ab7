use std::collections::HashMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Sample – one parsed benchmark record
// ---------------------------------------------------------------------------

/// One benchmark measurement: throughput at a given container size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Number of elements in the benchmarked container.
    pub size: u64,
    /// Mean throughput (increments per second).
    pub average: f64,
    /// Standard deviation of the throughput across repetitions.
    pub std_dev: f64,
}

// ---------------------------------------------------------------------------
// Series – all samples of one benchmark, in file order
// ---------------------------------------------------------------------------

/// A named series stored as three parallel columns of equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    sizes: Vec<u64>,
    averages: Vec<f64>,
    std_devs: Vec<f64>,
}

impl Series {
    /// Start a series from its first sample.
    pub fn new(name: impl Into<String>, first: Sample) -> Self {
        let mut series = Self {
            name: name.into(),
            sizes: Vec::new(),
            averages: Vec::new(),
            std_devs: Vec::new(),
        };
        series.push(first);
        series
    }

    /// Append a sample to all three columns.
    pub fn push(&mut self, sample: Sample) {
        self.sizes.push(sample.size);
        self.averages.push(sample.average);
        self.std_devs.push(sample.std_dev);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    pub fn averages(&self) -> &[f64] {
        &self.averages
    }

    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always false for a series built through [`Series::new`].
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterate the samples back in file order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.sizes
            .iter()
            .zip(&self.averages)
            .zip(&self.std_devs)
            .map(|((&size, &average), &std_dev)| Sample {
                size,
                average,
                std_dev,
            })
    }
}

// ---------------------------------------------------------------------------
// SeriesCollection – the aggregated result of one CSV file
// ---------------------------------------------------------------------------

/// Series keyed by name, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SeriesCollection {
    series: Vec<Series>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl SeriesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample to the series called `name`, creating it if needed.
    pub fn add(&mut self, name: &str, sample: Sample) {
        match self.index.get(name) {
            Some(&pos) => self.series[pos].push(sample),
            None => {
                self.index.insert(name.to_string(), self.series.len());
                self.series.push(Series::new(name, sample));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.index.get(name).map(|&pos| &self.series[pos])
    }

    /// Series names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(Series::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// Number of distinct series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of samples across all series.
    pub fn sample_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

impl<'a> IntoIterator for &'a SeriesCollection {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Sample)> for SeriesCollection {
    fn from_iter<T: IntoIterator<Item = (S, Sample)>>(iter: T) -> Self {
        let mut collection = SeriesCollection::new();
        for (name, sample) in iter {
            collection.add(name.as_ref(), sample);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(size: u64, average: f64, std_dev: f64) -> Sample {
        Sample {
            size,
            average,
            std_dev,
        }
    }

    #[test]
    fn add_creates_then_appends() {
        let mut c = SeriesCollection::new();
        c.add("a", sample(1, 10.0, 1.0));
        c.add("b", sample(1, 20.0, 2.0));
        c.add("a", sample(8, 11.0, 1.5));

        assert_eq!(c.len(), 2);
        assert_eq!(c.sample_count(), 3);

        let a = c.get("a").unwrap();
        assert_eq!(a.sizes(), &[1, 8]);
        assert_eq!(a.averages(), &[10.0, 11.0]);
        assert_eq!(a.std_devs(), &[1.0, 1.5]);

        let b = c.get("b").unwrap();
        assert_eq!(b.len(), 1);
        assert!(c.get("c").is_none());
    }

    #[test]
    fn keys_keep_first_seen_order() {
        let c: SeriesCollection = [
            ("zeta", sample(1, 1.0, 0.0)),
            ("alpha", sample(1, 1.0, 0.0)),
            ("zeta", sample(2, 1.0, 0.0)),
            ("mid", sample(1, 1.0, 0.0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(c.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn samples_round_trip_in_arrival_order() {
        let input = [sample(512, 3.0, 0.3), sample(64, 1.0, 0.1), sample(4096, 2.0, 0.2)];
        let c: SeriesCollection = input.iter().map(|s| ("x", *s)).collect();

        let series = c.get("x").unwrap();
        assert_eq!(series.samples().collect::<Vec<_>>(), input.to_vec());
        assert_eq!(series.sizes().len(), series.averages().len());
        assert_eq!(series.averages().len(), series.std_devs().len());
    }

    #[test]
    fn serializes_as_list_of_series() {
        let c: SeriesCollection = [("foo", sample(128, 1.5, 0.1))].into_iter().collect();
        let json = serde_json::to_value(&c).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "name": "foo",
                "sizes": [128],
                "averages": [1.5],
                "std_devs": [0.1],
            }])
        );
    }
}
