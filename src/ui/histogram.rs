//! Histogram view: one bar group per bin, one bar per series.

use super::ThemeColors;
use crate::chart::{ChartState, Rgb};
use crate::histogram::HistogramState;
use crate::util::LayoutConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Draw the histogram over the chart area.
pub(super) fn draw_histogram(
    f: &mut Frame<'_>,
    state: &HistogramState,
    chart: &ChartState,
    area: Rect,
    layout: &LayoutConfig,
    colors: &ThemeColors,
) {
    let hist = state.histogram();
    let block = Block::default()
        .title(format!(
            " Histogram: {} bins of width {} ",
            hist.bin_count(),
            hist.width
        ))
        .title_style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    // Series keep their chart color; removed ones fall back to the palette
    let series_colors: Vec<Rgb> = state
        .displayed()
        .iter()
        .enumerate()
        .map(|(i, d)| {
            chart
                .series
                .get(d.id)
                .map(|s| s.color)
                .unwrap_or_else(|| Rgb::palette(i))
        })
        .collect();

    let legend: Vec<Span<'_>> = state
        .displayed()
        .iter()
        .zip(&series_colors)
        .flat_map(|(d, c)| {
            [
                Span::styled("■ ", Style::default().fg(c.to_color())),
                Span::styled(format!("{}  ", d.name), Style::default().fg(colors.text)),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(legend)), chunks[0]);

    let bar_width = layout.histogram.bar_width(
        chunks[1].width,
        hist.bin_count(),
        state.displayed().len(),
    );

    let mut bar_chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(layout.histogram.bar_gap)
        .group_gap(layout.histogram.group_gap)
        .value_style(Style::default().fg(colors.cursor_fg))
        .label_style(Style::default().fg(colors.label));

    for (bin, label) in state.labels().iter().enumerate() {
        let bars: Vec<Bar<'_>> = state
            .displayed()
            .iter()
            .zip(&series_colors)
            .map(|(d, c)| {
                let count = d.counts.get(bin).copied().unwrap_or(0);
                Bar::default()
                    .value(count)
                    .style(Style::default().fg(c.to_color()))
            })
            .collect();
        bar_chart = bar_chart.data(
            BarGroup::default()
                .label(Line::from(label.as_str()))
                .bars(&bars),
        );
    }

    f.render_widget(bar_chart, chunks[1]);
}
