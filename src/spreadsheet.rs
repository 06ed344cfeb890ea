//! Spreadsheet panel: the `(x, y)` rows of one series.

use crate::chart::{ChartState, ChartSeries};
use crate::data::{Point, SeriesId};

/// Title shown when no series is attached.
pub const NO_SERIES_TITLE: &str = "No series selected";

/// Spreadsheet state.
#[derive(Debug, Default)]
pub struct SpreadsheetState {
    series: Option<SeriesId>,
    /// First visible row.
    pub scroll: usize,
    /// Row highlighted by the last successful search.
    pub highlight: Option<usize>,
    /// Whether the last x search failed.
    pub search_error: bool,
}

impl SpreadsheetState {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Series shown, if any.
    pub fn series(&self) -> Option<SeriesId> {
        self.series
    }

    /// Show a series.
    pub fn show(&mut self, id: SeriesId) {
        if self.series != Some(id) {
            self.scroll = 0;
            self.highlight = None;
        }
        self.series = Some(id);
        self.search_error = false;
    }

    /// Detach the series if it was removed.
    pub fn on_removed(&mut self, removed: &[SeriesId]) {
        if self.series.is_some_and(|id| removed.contains(&id)) {
            *self = Self::default();
        }
    }

    /// Sheet title: the series name, or a placeholder.
    pub fn title(&self, chart: &ChartState) -> String {
        self.current(chart)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| NO_SERIES_TITLE.to_string())
    }

    /// Column headers from the axis titles.
    pub fn headers(&self, chart: &ChartState) -> (String, String) {
        let header = |text: &str, fallback: &str| {
            if text.is_empty() {
                fallback.to_string()
            } else {
                text.to_string()
            }
        };
        (
            header(&chart.x_axis.title.text, "x"),
            header(&chart.y_axis.title.text, "y"),
        )
    }

    fn current<'a>(&self, chart: &'a ChartState) -> Option<&'a ChartSeries> {
        self.series.and_then(|id| chart.series.get(id))
    }

    /// Rows of the attached series.
    pub fn rows<'a>(&self, chart: &'a ChartState) -> &'a [Point] {
        self.current(chart).map(|s| s.points.as_slice()).unwrap_or(&[])
    }

    /// Number of rows.
    pub fn row_count(&self, chart: &ChartState) -> usize {
        self.current(chart).map(|s| s.points.len()).unwrap_or(0)
    }

    /// Find the first row whose x equals the typed value and scroll to it.
    ///
    /// Returns the row index. A miss or unparsable input sets the error flag.
    pub fn search_x(&mut self, chart: &ChartState, input: &str) -> Option<usize> {
        let row = input.trim().parse::<f64>().ok().and_then(|x| {
            self.current(chart)
                .and_then(|s| s.points.iter().position(|p| p.x == x))
        });

        match row {
            Some(r) => {
                self.scroll = r;
                self.highlight = Some(r);
                self.search_error = false;
            },
            None => {
                self.highlight = None;
                self.search_error = true;
            },
        }
        row
    }

    /// Scroll up.
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    /// Scroll down.
    pub fn scroll_down(&mut self, amount: usize, chart: &ChartState) {
        let max_row = self.row_count(chart).saturating_sub(1);
        self.scroll = (self.scroll + amount).min(max_row);
    }

    /// Sheet contents as TSV with a header row.
    pub fn to_tsv(&self, chart: &ChartState) -> Option<String> {
        let series = self.current(chart)?;
        let (x, y) = self.headers(chart);
        let mut out = String::with_capacity(series.points.len() * 16);
        out.push_str(&format!("{}\t{}\n", x, y));
        for p in &series.points {
            out.push_str(&format!("{}\t{}\n", p.x, p.y));
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> (ChartState, SeriesId) {
        let mut chart = ChartState::new();
        let id = chart
            .series
            .add(
                "a",
                vec![Point::new(0.0, 5.0), Point::new(0.5, 6.0), Point::new(1.0, 7.0)],
            )
            .unwrap();
        (chart, id)
    }

    #[test]
    fn search_finds_exact_x() {
        let (chart, id) = chart();
        let mut sheet = SpreadsheetState::new();
        sheet.show(id);

        assert_eq!(sheet.search_x(&chart, "0.5"), Some(1));
        assert_eq!(sheet.scroll, 1);
        assert!(!sheet.search_error);

        assert_eq!(sheet.search_x(&chart, "0.25"), None);
        assert!(sheet.search_error);
        assert_eq!(sheet.search_x(&chart, "abc"), None);
        assert!(sheet.search_error);
    }

    #[test]
    fn search_without_series_is_an_error() {
        let (chart, _) = chart();
        let mut sheet = SpreadsheetState::new();
        assert_eq!(sheet.search_x(&chart, "0"), None);
        assert!(sheet.search_error);
    }

    #[test]
    fn title_follows_rename_and_resets_on_remove() {
        let (mut chart, id) = chart();
        let mut sheet = SpreadsheetState::new();
        assert_eq!(sheet.title(&chart), NO_SERIES_TITLE);

        sheet.show(id);
        chart.series.rename(id, "b").unwrap();
        assert_eq!(sheet.title(&chart), "b");

        chart.series.remove(&[id]);
        sheet.on_removed(&[id]);
        assert_eq!(sheet.series(), None);
        assert_eq!(sheet.title(&chart), NO_SERIES_TITLE);
    }

    #[test]
    fn tsv_uses_axis_titles() {
        let (mut chart, id) = chart();
        chart.x_axis.title.text = "t".to_string();
        let mut sheet = SpreadsheetState::new();
        sheet.show(id);
        let tsv = sheet.to_tsv(&chart).unwrap();
        assert!(tsv.starts_with("t\ty\n0\t5\n0.5\t6\n"));
    }
}
