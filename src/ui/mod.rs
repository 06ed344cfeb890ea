//! User interface rendering.

mod alert;
mod chart_view;
mod formatters;
mod histogram;
mod keymap_bar;
mod sidebar;
mod spreadsheet;
mod status_bar;
mod theme;

use crate::app::App;
use crate::util::LayoutConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub use formatters::{format_axis_label, format_value, truncate};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let layout = LayoutConfig::default();

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let main = if app.show_sidebar {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(layout.panels.sidebar_percent),
                Constraint::Percentage(100 - layout.panels.sidebar_percent),
            ])
            .split(chunks[0]);
        sidebar::draw_sidebar(f, app, content[0], &colors);
        content[1]
    } else {
        chunks[0]
    };

    let (plot_area, sheet_area) = split_sheet(app, main, &layout);

    match app.histogram {
        Some(ref state) => {
            histogram::draw_histogram(f, state, &app.chart, plot_area, &layout, &colors)
        },
        None => chart_view::draw_chart(f, &app.chart, plot_area, &colors),
    }

    if let Some(area) = sheet_area {
        spreadsheet::draw_sheet(f, app, area, &colors);
    }

    status_bar::draw_status(f, chunks[1], &app.status, &app.prompt, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app, &colors);

    if let Some(ref msg) = app.alert {
        alert::draw_alert(f, msg, &layout, &colors);
    }
}

fn split_sheet(app: &App, area: Rect, layout: &LayoutConfig) -> (Rect, Option<Rect>) {
    if !app.show_sheet {
        return (area, None);
    }
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(100 - layout.panels.sheet_percent),
            Constraint::Percentage(layout.panels.sheet_percent),
        ])
        .split(area);
    (parts[0], Some(parts[1]))
}

/// Helper function to create a centered rect.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
