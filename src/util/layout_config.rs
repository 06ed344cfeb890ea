//! Layout configuration constants for the main screen.

/// Split of the screen between chart, sidebar and sheet.
#[derive(Debug, Clone)]
pub struct PanelLayoutConfig {
    /// Width of the series sidebar as a percentage of the screen.
    pub sidebar_percent: u16,
    /// Height of the spreadsheet as a percentage of the content area.
    pub sheet_percent: u16,
    /// Width of the alert popup as a percentage of the screen.
    pub alert_percent: u16,
}

impl Default for PanelLayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_percent: 28,
            sheet_percent: 35,
            alert_percent: 60,
        }
    }
}

/// Bar sizing for the histogram view.
#[derive(Debug, Clone)]
pub struct HistogramLayoutConfig {
    /// Minimum width of one bar.
    pub min_bar_width: u16,
    /// Maximum width of one bar.
    pub max_bar_width: u16,
    /// Gap between bars of the same bin.
    pub bar_gap: u16,
    /// Gap between bins.
    pub group_gap: u16,
}

impl Default for HistogramLayoutConfig {
    fn default() -> Self {
        Self {
            min_bar_width: 1,
            max_bar_width: 9,
            bar_gap: 0,
            group_gap: 2,
        }
    }
}

impl HistogramLayoutConfig {
    /// Bar width that fits `bins` groups of `bars` bars into `width` columns.
    pub fn bar_width(&self, width: u16, bins: usize, bars: usize) -> u16 {
        let bins = bins.max(1);
        let bars = bars.max(1);
        let group_gaps = bins.saturating_mul(usize::from(self.group_gap));
        let bar_gaps = bins
            .saturating_mul(bars - 1)
            .saturating_mul(usize::from(self.bar_gap));
        let gaps = group_gaps.saturating_add(bar_gaps);
        let per_bar = usize::from(width).saturating_sub(gaps) / bins.saturating_mul(bars);
        let clamped = per_bar.clamp(
            usize::from(self.min_bar_width),
            usize::from(self.max_bar_width),
        );
        u16::try_from(clamped).unwrap_or(self.max_bar_width)
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Panel split.
    pub panels: PanelLayoutConfig,
    /// Histogram bars.
    pub histogram: HistogramLayoutConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_is_clamped() {
        let config = HistogramLayoutConfig::default();
        // 10 bins, one series, 100 columns: (100 - 20) / 10 = 8
        assert_eq!(config.bar_width(100, 10, 1), 8);
        assert_eq!(config.bar_width(1000, 2, 1), config.max_bar_width);
        assert_eq!(config.bar_width(10, 50, 4), config.min_bar_width);
    }

    #[test]
    fn bar_width_survives_huge_group_counts() {
        let config = HistogramLayoutConfig::default();
        assert_eq!(config.bar_width(120, 40_000, 1), config.min_bar_width);
        assert_eq!(config.bar_width(120, 1000, 70), config.min_bar_width);
        assert_eq!(config.bar_width(u16::MAX, usize::MAX, usize::MAX), config.min_bar_width);
    }
}
