//! Spreadsheet panel rendering.

use super::{format_value, ThemeColors};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Draw the x/y table of the sheet's series.
pub(super) fn draw_sheet(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let sheet = &app.sheet;
    let (x_header, y_header) = sheet.headers(&app.chart);
    let visible_rows = (area.height as usize).saturating_sub(3);

    let rows: Vec<Row<'_>> = sheet
        .rows(&app.chart)
        .iter()
        .enumerate()
        .skip(sheet.scroll)
        .take(visible_rows)
        .map(|(idx, p)| {
            let style = if sheet.highlight == Some(idx) {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.value)
            };
            Row::new(vec![
                Cell::from(format!("{:>6}", idx + 1)).style(Style::default().fg(colors.muted)),
                Cell::from(format_value(p.x)),
                Cell::from(format_value(p.y)),
            ])
            .style(style)
        })
        .collect();

    let header_style = Style::default().fg(colors.heading).add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from(format!("{:>6}", "#")),
        Cell::from(format!("{:>10}", x_header)),
        Cell::from(format!("{:>10}", y_header)),
    ])
    .style(header_style);

    let mut title = format!(" {} ", sheet.title(&app.chart));
    if sheet.search_error {
        title.push_str("(x not found) ");
    }
    let title_color = if sheet.search_error { colors.warning } else { colors.heading };

    let table = Table::new(
        rows,
        [Constraint::Length(7), Constraint::Min(11), Constraint::Min(11)],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(title_color))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(table, area);
}
