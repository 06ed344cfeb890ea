//! Status bar UI component.

use crate::prompt::PromptState;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar, or the prompt while one is open.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    prompt: &PromptState,
    colors: &ThemeColors,
) {
    let text = match prompt.kind() {
        Some(kind) => format!("{}: {}_", kind.prompt(), prompt.buffer()),
        None => status.to_string(),
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
