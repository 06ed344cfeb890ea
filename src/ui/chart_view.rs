//! Line/scatter chart of the visible series.

use super::{format_axis_label, ThemeColors};
use crate::chart::{ChartState, GraphKind, Label};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
    Frame,
};

/// Draw the chart.
pub(super) fn draw_chart(f: &mut Frame<'_>, chart: &ChartState, area: Rect, colors: &ThemeColors) {
    let bg = chart.background.map(|c| c.to_color()).unwrap_or(colors.bg);
    let block = Block::default()
        .title(format!(" {} ", chart.title.text))
        .title_alignment(Alignment::Center)
        .title_style(label_style(&chart.title, colors.heading).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(bg));

    if chart.series.iter().all(|s| !s.visible) {
        let para = Paragraph::new("No series to plot. Press 'a' to add a data file.")
            .style(Style::default().fg(colors.muted))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let ((x_min, x_max), (y_min, y_max)) = chart.effective_bounds();

    // Datasets borrow their points, so collect them first
    let visible: Vec<_> = chart
        .series
        .iter()
        .filter(|s| s.visible)
        .map(|s| (s, s.xy()))
        .collect();

    let graph_type = match chart.flags.kind {
        GraphKind::Line => GraphType::Line,
        GraphKind::Scatter => GraphType::Scatter,
    };

    let datasets: Vec<Dataset<'_>> = visible
        .iter()
        .map(|(s, points)| {
            let marker = if chart.flags.markers_enabled() {
                s.symbol.marker()
            } else {
                Marker::Braille
            };
            Dataset::default()
                .name(s.name.clone())
                .marker(marker)
                .graph_type(graph_type)
                .style(Style::default().fg(s.color.to_color()))
                .data(points)
        })
        .collect();

    let x_labels: Vec<String> = chart
        .x_axis
        .ticks(x_min, x_max)
        .into_iter()
        .map(format_axis_label)
        .collect();
    let y_labels: Vec<String> = chart
        .y_axis
        .ticks(y_min, y_max)
        .into_iter()
        .map(format_axis_label)
        .collect();

    let x_axis = Axis::default()
        .title(chart.x_axis.title.text.clone())
        .style(label_style(&chart.x_axis.title, colors.label))
        .bounds([x_min, x_max])
        .labels(x_labels);

    let y_axis = Axis::default()
        .title(chart.y_axis.title.text.clone())
        .style(label_style(&chart.y_axis.title, colors.label))
        .bounds([y_min, y_max])
        .labels(y_labels);

    let legend = chart.legend_visible.then_some(LegendPosition::TopRight);

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend);

    f.render_widget(widget, area);
}

fn label_style(label: &Label, fallback: Color) -> Style {
    Style::default().fg(label.color.map(|c| c.to_color()).unwrap_or(fallback))
}
