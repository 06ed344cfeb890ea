//! Keymap help bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let keymap_text = if app.alert.is_some() {
        "any key:dismiss"
    } else if app.prompt.is_active() {
        "Enter:apply | Esc:cancel | Type to edit"
    } else if app.histogram.is_some() {
        "n:bins | u:refresh | q/Esc:close"
    } else {
        "q:quit | jk:nav | space:select | a/x:add/remove | r:rename | c/m:color/symbol | H:histogram | A:mean | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
