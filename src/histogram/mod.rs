//! Histogram binning.
//!
//! Bins are fixed-width over the y-range observed across every input series,
//! so all series share one set of bin labels. With `n` bins over `[min, max]`
//! the width is `floor((max - min) / n) + 1`, which always places `max` in a
//! bin with index below `n`.

mod state;

pub use state::{BinUpdate, DisplayedBins, HistogramState};

use crate::data::Series;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Errors from histogram binning.
#[derive(Debug, Error, PartialEq)]
pub enum HistogramError {
    /// No series, or only empty series.
    #[error("No data to bin")]
    NoData,

    /// Bin count was zero or not a number.
    #[error("Invalid bin count: '{input}'")]
    InvalidBinCount { input: String },

    /// A value mapped outside `[0, bin_count)`.
    #[error("Value {value} falls outside the histogram range (bin {index})")]
    OutOfRange { value: f64, index: f64 },
}

/// Bin settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinConfig {
    bin_count: NonZeroUsize,
}

impl BinConfig {
    /// Bin count used when the user has not picked one.
    pub const DEFAULT_BIN_COUNT: usize = 10;

    /// Largest bin count accepted.
    pub const MAX_BIN_COUNT: usize = 1000;

    /// Create a config. Counts outside `1..=MAX_BIN_COUNT` are rejected.
    pub fn new(bin_count: usize) -> Result<Self, HistogramError> {
        Self::checked(bin_count).ok_or_else(|| HistogramError::InvalidBinCount {
            input: bin_count.to_string(),
        })
    }

    /// Parse a bin count typed by the user.
    pub fn parse(input: &str) -> Result<Self, HistogramError> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::checked)
            .ok_or_else(|| HistogramError::InvalidBinCount {
                input: input.to_string(),
            })
    }

    fn checked(bin_count: usize) -> Option<Self> {
        if bin_count > Self::MAX_BIN_COUNT {
            return None;
        }
        NonZeroUsize::new(bin_count).map(|bin_count| Self { bin_count })
    }

    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.bin_count.get()
    }
}

impl Default for BinConfig {
    fn default() -> Self {
        Self {
            bin_count: NonZeroUsize::new(Self::DEFAULT_BIN_COUNT).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Result of binning a set of series.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Smallest y-value over all series.
    pub min: f64,
    /// Largest y-value over all series.
    pub max: f64,
    /// Span of one bin.
    pub width: f64,
    /// `"lo - hi"` label per bin, shared by every series.
    pub labels: Vec<String>,
    /// Per-series bin counts, in input order.
    pub counts: Vec<Vec<u64>>,
}

impl Histogram {
    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.labels.len()
    }

    /// Largest single bin count over all series.
    pub fn peak(&self) -> u64 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Global `(min, max)` of y over all series.
pub fn y_extent(series: &[Series]) -> Option<(f64, f64)> {
    series
        .iter()
        .filter_map(Series::y_range)
        .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
}

/// Bin width for a range split into `bin_count` bins.
pub fn bin_width(min: f64, max: f64, bin_count: usize) -> f64 {
    ((max - min) / bin_count as f64).floor() + 1.0
}

/// Labels for every bin.
pub fn bin_labels(min: f64, max: f64, width: f64, bin_count: usize) -> Vec<String> {
    (0..bin_count)
        .map(|i| {
            let lo = min + i as f64 * width;
            let hi = (lo + width - 1.0).min(max);
            format!("{} - {}", lo, hi)
        })
        .collect()
}

/// Bin every series over the shared y-range.
///
/// Input series are not modified. Counts come back in input order, one
/// vector of length `bin_count` per series, including empty series.
pub fn bin_series(series: &[Series], config: BinConfig) -> Result<Histogram, HistogramError> {
    let (min, max) = y_extent(series).ok_or(HistogramError::NoData)?;
    let bin_count = config.bin_count();
    let width = bin_width(min, max, bin_count);

    let counts = series
        .iter()
        .map(|s| {
            let mut bins = vec![0u64; bin_count];
            for point in &s.points {
                let index = ((point.y - min) / width).floor();
                if !(0.0..bin_count as f64).contains(&index) {
                    return Err(HistogramError::OutOfRange {
                        value: point.y,
                        index,
                    });
                }
                bins[index as usize] += 1;
            }
            Ok(bins)
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(min, max, width, bin_count, "binned {} series", series.len());

    Ok(Histogram {
        min,
        max,
        width,
        labels: bin_labels(min, max, width, bin_count),
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Point;

    fn series(name: &str, ys: &[f64]) -> Series {
        Series::new(
            name,
            ys.iter()
                .enumerate()
                .map(|(i, &y)| Point::new(i as f64, y))
                .collect(),
        )
    }

    #[test]
    fn bins_example_values() {
        let input = vec![series("a", &[1.0, 2.0, 5.0, 9.0, 10.0])];
        let hist = bin_series(&input, BinConfig::new(3).unwrap()).unwrap();

        assert_eq!(hist.min, 1.0);
        assert_eq!(hist.max, 10.0);
        assert_eq!(hist.width, 4.0);
        assert_eq!(hist.labels, vec!["1 - 4", "5 - 8", "9 - 10"]);
        assert_eq!(hist.counts, vec![vec![2, 1, 2]]);
    }

    #[test]
    fn range_is_global_across_series() {
        let input = vec![series("a", &[0.0, 1.0]), series("b", &[19.0])];
        let hist = bin_series(&input, BinConfig::new(2).unwrap()).unwrap();

        assert_eq!(hist.width, 10.0);
        assert_eq!(hist.counts, vec![vec![2, 0], vec![0, 1]]);
        assert_eq!(hist.labels, vec!["0 - 9", "10 - 19"]);
    }

    #[test]
    fn counts_sum_to_point_count_and_max_lands_in_range() {
        let ys: Vec<f64> = (0..97).map(|i| (i * 37 % 101) as f64 - 13.5).collect();
        let input = vec![series("a", &ys), series("b", &ys[..40])];

        for n in 1..=25 {
            let hist = bin_series(&input, BinConfig::new(n).unwrap()).unwrap();
            assert_eq!(hist.counts[0].iter().sum::<u64>(), 97);
            assert_eq!(hist.counts[1].iter().sum::<u64>(), 40);
            assert!(hist.width * n as f64 >= hist.max - hist.min + 1.0);
            let top = ((hist.max - hist.min) / hist.width).floor() as usize;
            assert!(top < n);
        }
    }

    #[test]
    fn max_value_goes_to_last_bin_on_exact_division() {
        let input = vec![series("a", &[0.0, 9.0])];
        let hist = bin_series(&input, BinConfig::new(9).unwrap()).unwrap();
        assert_eq!(hist.width, 2.0);
        assert_eq!(hist.counts[0][4], 1);

        let hist = bin_series(&input, BinConfig::new(10).unwrap()).unwrap();
        assert_eq!(hist.width, 1.0);
        assert_eq!(hist.counts[0][9], 1);
    }

    #[test]
    fn constant_series_uses_unit_width() {
        let input = vec![series("a", &[5.0, 5.0, 5.0])];
        let hist = bin_series(&input, BinConfig::new(3).unwrap()).unwrap();
        assert_eq!(hist.width, 1.0);
        assert_eq!(hist.counts[0], vec![3, 0, 0]);
        assert_eq!(hist.labels[0], "5 - 5");
    }

    #[test]
    fn recomputing_is_idempotent() {
        let input = vec![series("a", &[0.5, 3.25, 7.0]), series("b", &[-2.0])];
        let config = BinConfig::new(4).unwrap();
        assert_eq!(
            bin_series(&input, config).unwrap(),
            bin_series(&input, config).unwrap()
        );
    }

    #[test]
    fn no_data_is_reported() {
        assert_eq!(bin_series(&[], BinConfig::default()), Err(HistogramError::NoData));
        let empty = vec![Series::new("e", Vec::new())];
        assert_eq!(bin_series(&empty, BinConfig::default()), Err(HistogramError::NoData));
    }

    #[test]
    fn empty_series_alongside_data_gets_zero_counts() {
        let input = vec![Series::new("e", Vec::new()), series("a", &[1.0, 2.0])];
        let hist = bin_series(&input, BinConfig::new(2).unwrap()).unwrap();
        assert_eq!(hist.counts[0], vec![0, 0]);
    }

    #[test]
    fn zero_and_garbage_bin_counts_are_rejected() {
        assert!(BinConfig::new(0).is_err());
        assert!(BinConfig::parse("0").is_err());
        assert!(BinConfig::parse("-3").is_err());
        assert!(BinConfig::parse("ten").is_err());
        assert_eq!(BinConfig::parse(" 7 ").unwrap().bin_count(), 7);
        assert_eq!(BinConfig::default().bin_count(), 10);
    }

    #[test]
    fn oversized_bin_counts_are_rejected() {
        let max = BinConfig::MAX_BIN_COUNT;
        assert_eq!(BinConfig::new(max).unwrap().bin_count(), max);
        assert!(BinConfig::new(max + 1).is_err());
        assert!(matches!(
            BinConfig::parse("100000000000000"),
            Err(HistogramError::InvalidBinCount { .. })
        ));
        assert!(BinConfig::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn precision_loss_is_reported_not_clamped() {
        let input = vec![series("a", &[0.0, 1e17])];
        let result = bin_series(&input, BinConfig::new(3).unwrap());
        if let Ok(hist) = &result {
            assert_eq!(hist.counts[0].iter().sum::<u64>(), 2);
        } else {
            assert!(matches!(result, Err(HistogramError::OutOfRange { .. })));
        }
    }
}
