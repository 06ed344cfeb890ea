//! Histogram view state.

use super::{bin_series, BinConfig, Histogram, HistogramError};
use crate::data::{Series, SeriesId};

/// Bin counts currently displayed for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedBins {
    /// Source series id.
    pub id: SeriesId,
    /// Display name.
    pub name: String,
    /// Count per bin.
    pub counts: Vec<u64>,
}

/// Outcome of applying a freshly computed histogram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinUpdate {
    /// Series whose counts were replaced in place.
    pub updated: usize,
    /// Series shown for the first time.
    pub added: usize,
}

/// Histogram of a fixed snapshot of series.
#[derive(Debug, Clone)]
pub struct HistogramState {
    source: Vec<(SeriesId, Series)>,
    config: BinConfig,
    histogram: Histogram,
    displayed: Vec<DisplayedBins>,
}

impl HistogramState {
    /// Bin a snapshot of series.
    pub fn new(source: Vec<(SeriesId, Series)>, config: BinConfig) -> Result<Self, HistogramError> {
        let histogram = compute(&source, config)?;
        let mut state = Self {
            source,
            config,
            histogram,
            displayed: Vec::new(),
        };
        state.apply();
        Ok(state)
    }

    /// Change the bin count from user input.
    ///
    /// Invalid input leaves the current histogram untouched.
    pub fn set_bin_count(&mut self, input: &str) -> Result<BinUpdate, HistogramError> {
        let config = BinConfig::parse(input)?;
        self.set_config(config)
    }

    /// Recompute with a new configuration.
    pub fn set_config(&mut self, config: BinConfig) -> Result<BinUpdate, HistogramError> {
        self.histogram = compute(&self.source, config)?;
        self.config = config;
        Ok(self.apply())
    }

    /// Replace the source series and recompute.
    ///
    /// Displayed series that are no longer in the source are dropped.
    pub fn set_source(&mut self, source: Vec<(SeriesId, Series)>) -> Result<BinUpdate, HistogramError> {
        self.histogram = compute(&source, self.config)?;
        self.displayed
            .retain(|d| source.iter().any(|(id, _)| *id == d.id));
        self.source = source;
        Ok(self.apply())
    }

    /// Current bin settings.
    pub fn config(&self) -> BinConfig {
        self.config
    }

    /// Latest computed histogram.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Shared bin labels.
    pub fn labels(&self) -> &[String] {
        &self.histogram.labels
    }

    /// Displayed per-series counts.
    pub fn displayed(&self) -> &[DisplayedBins] {
        &self.displayed
    }

    /// Update displayed series by id, adding any not yet shown.
    fn apply(&mut self) -> BinUpdate {
        let mut update = BinUpdate::default();

        for ((id, series), counts) in self.source.iter().zip(&self.histogram.counts) {
            match self.displayed.iter_mut().find(|d| d.id == *id) {
                Some(shown) => {
                    shown.counts.clone_from(counts);
                    update.updated += 1;
                },
                None => {
                    self.displayed.push(DisplayedBins {
                        id: *id,
                        name: series.name.clone(),
                        counts: counts.clone(),
                    });
                    update.added += 1;
                },
            }
        }

        tracing::debug!(
            updated = update.updated,
            added = update.added,
            bins = self.config.bin_count(),
            "histogram applied"
        );
        update
    }
}

fn compute(source: &[(SeriesId, Series)], config: BinConfig) -> Result<Histogram, HistogramError> {
    let series: Vec<Series> = source.iter().map(|(_, s)| s.clone()).collect();
    bin_series(&series, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Point;

    fn snapshot() -> Vec<(SeriesId, Series)> {
        vec![
            (
                SeriesId(1),
                Series::new("a", vec![Point::new(0.0, 1.0), Point::new(1.0, 10.0)]),
            ),
            (SeriesId(4), Series::new("b", vec![Point::new(0.0, 5.0)])),
        ]
    }

    #[test]
    fn initial_state_adds_every_series() {
        let state = HistogramState::new(snapshot(), BinConfig::default()).unwrap();
        assert_eq!(state.displayed().len(), 2);
        assert_eq!(state.labels().len(), 10);
        assert_eq!(state.displayed()[1].id, SeriesId(4));
    }

    #[test]
    fn changing_bin_count_updates_in_place() {
        let mut state = HistogramState::new(snapshot(), BinConfig::default()).unwrap();
        let update = state.set_bin_count("3").unwrap();

        assert_eq!(update, BinUpdate { updated: 2, added: 0 });
        assert_eq!(state.labels(), ["1 - 4", "5 - 8", "9 - 10"]);
        assert_eq!(state.displayed()[0].counts, vec![1, 0, 1]);
        assert_eq!(state.displayed()[1].counts, vec![0, 1, 0]);
    }

    #[test]
    fn invalid_bin_count_keeps_previous_result() {
        let mut state = HistogramState::new(snapshot(), BinConfig::new(3).unwrap()).unwrap();
        let before = state.histogram().clone();

        assert!(state.set_bin_count("0").is_err());
        assert!(state.set_bin_count("many").is_err());
        assert_eq!(state.histogram(), &before);
        assert_eq!(state.config().bin_count(), 3);
    }

    #[test]
    fn new_source_series_are_added_and_stale_ones_dropped() {
        let mut state = HistogramState::new(snapshot(), BinConfig::new(2).unwrap()).unwrap();
        let mut source = snapshot();
        source.remove(0);
        source.push((SeriesId(9), Series::new("c", vec![Point::new(0.0, 2.0)])));

        let update = state.set_source(source).unwrap();
        assert_eq!(update, BinUpdate { updated: 1, added: 1 });
        let ids: Vec<_> = state.displayed().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![SeriesId(4), SeriesId(9)]);
    }

    #[test]
    fn empty_snapshot_is_rejected() {
        assert_eq!(
            HistogramState::new(Vec::new(), BinConfig::default()).unwrap_err(),
            HistogramError::NoData
        );
    }
}
