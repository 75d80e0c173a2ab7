use std::iter::{Fuse, FusedIterator};

// ---------------------------------------------------------------------------
// Fixed-size grouping with padding
// ---------------------------------------------------------------------------

/// Number of physical CSV rows making up one benchmark record
/// (mean, median, stddev).
pub const ROWS_PER_RECORD: usize = 3;

/// Iterator adapter yielding consecutive, non-overlapping groups of `N` items.
///
/// The final group is padded with `None` when the input length is not a
/// multiple of `N`. An empty input yields no groups.
#[derive(Debug, Clone)]
pub struct Grouper<I: Iterator, const N: usize> {
    inner: Fuse<I>,
}

impl<I: Iterator, const N: usize> Grouper<I, N> {
    pub fn new(inner: I) -> Self {
        assert!(N > 0, "group size must be non-zero");
        Self {
            inner: inner.fuse(),
        }
    }
}

impl<I: Iterator, const N: usize> Iterator for Grouper<I, N> {
    type Item = [Option<I::Item>; N];

    fn next(&mut self) -> Option<Self::Item> {
        let group: [Option<I::Item>; N] = std::array::from_fn(|_| self.inner.next());
        // A group only exists if it holds at least its first element.
        group.first().is_some_and(Option::is_some).then_some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        (lo.div_ceil(N), hi.map(|h| h.div_ceil(N)))
    }
}

impl<I: Iterator, const N: usize> FusedIterator for Grouper<I, N> {}

/// Group an iterable into arrays of `N`, padding the last one with `None`.
pub fn grouped<T: IntoIterator, const N: usize>(iterable: T) -> Grouper<T::IntoIter, N> {
    Grouper::new(iterable.into_iter())
}

/// Group rows into benchmark records (mean, median, stddev).
pub fn records<T: IntoIterator>(rows: T) -> Grouper<T::IntoIter, ROWS_PER_RECORD> {
    grouped(rows)
}
