//! Shared formatting utilities for UI components.

use unicode_width::UnicodeWidthChar;

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Format a spreadsheet cell, right-aligned to ten columns.
pub fn format_value(val: f64) -> String {
    if val == 0.0 {
        format!("{:>10}", 0)
    } else if val.abs() < 0.001 || val.abs() >= 10000.0 {
        format!("{:>10.3e}", val)
    } else {
        format!("{:>10.4}", val)
    }
}

/// Truncate to a display width, appending `…` when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            out.pop();
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}
