//! Series list and plot settings panel.

use super::{truncate, ThemeColors};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the sidebar.
pub(super) fn draw_sidebar(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(7)])
        .split(area);

    draw_series_list(f, app, chunks[0], colors);
    draw_settings(f, app, chunks[1], colors);
}

fn draw_series_list(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let viewport = area.height.saturating_sub(2) as usize;
    app.sidebar.clamp(&app.chart.series);
    app.sidebar.adjust_scroll(viewport);

    let name_width = (area.width as usize).saturating_sub(8);
    let cursor = app.sidebar.cursor;

    let items: Vec<ListItem<'_>> = app
        .chart
        .series
        .iter()
        .enumerate()
        .skip(app.sidebar.scroll)
        .take(viewport)
        .map(|(idx, s)| {
            let check = if app.sidebar.is_selected(s.id) { "[x] " } else { "[ ] " };
            let name_style = if idx == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else if s.visible {
                Style::default().fg(colors.text)
            } else {
                Style::default().fg(colors.muted).add_modifier(Modifier::ITALIC)
            };

            ListItem::new(Line::from(vec![
                Span::styled(check, Style::default().fg(colors.text)),
                Span::styled("● ", Style::default().fg(s.color.to_color())),
                Span::styled(truncate(&s.name, name_width), name_style),
            ]))
        })
        .collect();

    let title = format!(" Series ({}) ", app.chart.series.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(list, area);
}

fn draw_settings(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let key = Style::default().fg(colors.label);
    let value = Style::default().fg(colors.value);
    let row = |k: &'static str, v: String| Line::from(vec![Span::styled(k, key), Span::styled(v, value)]);

    let background = app
        .chart
        .background
        .map(|c| c.to_string())
        .unwrap_or_else(|| "theme".to_string());

    let lines = vec![
        row("Graph:  ", app.chart.flags.kind.name().to_string()),
        row("Marker: ", app.chart.flags.marker.name().to_string()),
        row("Legend: ", if app.chart.legend_visible { "on" } else { "off" }.to_string()),
        row("Bins:   ", app.bin_config.bin_count().to_string()),
        row("Bg:     ", background),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}
