//! Blocking error popup.

use super::{centered_rect, ThemeColors};
use crate::util::LayoutConfig;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the alert popup over everything else.
pub(super) fn draw_alert(f: &mut Frame<'_>, msg: &str, layout: &LayoutConfig, colors: &ThemeColors) {
    let mut lines: Vec<Line<'_>> = msg
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().fg(colors.muted),
    )));

    let needed = (lines.len() as u16).saturating_add(2).saturating_mul(100);
    let percent_y = (needed / f.area().height.max(1)).clamp(20, 80);
    let area = centered_rect(layout.panels.alert_percent, percent_y, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Error ")
                .title_style(Style::default().fg(colors.error).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.error))
                .style(Style::default().bg(colors.bg_raised)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
