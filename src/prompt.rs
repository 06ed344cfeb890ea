//! Single-line input prompt used by every text field.

use crate::chart::LabelTarget;

/// What the prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Label text, color and tick interval.
    Label(LabelTarget),
    /// Four range values.
    Extremes,
    /// Histogram bin count.
    BinCount,
    /// New name for the selected series.
    Rename,
    /// Path of series files to add.
    AddSeries,
    /// Path of a file replacing the selected series' data.
    ReplaceData,
    /// Color for the selected series.
    SeriesColor,
    /// Marker symbol for the selected series.
    SeriesSymbol,
    /// Chart background color.
    Background,
    /// X value to find in the spreadsheet.
    SheetSearch,
}

impl PromptKind {
    /// Prompt shown before the buffer.
    pub fn prompt(self) -> &'static str {
        match self {
            PromptKind::Label(LabelTarget::Title) => "Title (text|color)",
            PromptKind::Label(LabelTarget::XAxis) => "X label (text|color|tick)",
            PromptKind::Label(LabelTarget::YAxis) => "Y label (text|color|tick)",
            PromptKind::Extremes => "Range (xmin xmax ymin ymax)",
            PromptKind::BinCount => "Bin count",
            PromptKind::Rename => "Series name",
            PromptKind::AddSeries => "Add series (paths)",
            PromptKind::ReplaceData => "Replace data from file",
            PromptKind::SeriesColor => "Series color (#rrggbb)",
            PromptKind::SeriesSymbol => "Symbol (circle|square|diamond|triangle|triangle-down)",
            PromptKind::Background => "Background (#rrggbb, empty for theme)",
            PromptKind::SheetSearch => "Find x",
        }
    }
}

/// Prompt state.
#[derive(Debug, Default)]
pub struct PromptState {
    kind: Option<PromptKind>,
    buffer: String,
}

impl PromptState {
    /// Create an inactive prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the prompt is active.
    pub fn is_active(&self) -> bool {
        self.kind.is_some()
    }

    /// Active prompt kind.
    pub fn kind(&self) -> Option<PromptKind> {
        self.kind
    }

    /// Open the prompt with pre-filled text.
    pub fn start(&mut self, kind: PromptKind, initial: impl Into<String>) {
        self.kind = Some(kind);
        self.buffer = initial.into();
    }

    /// Add a character to the buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Close the prompt and hand back what was typed.
    pub fn submit(&mut self) -> Option<(PromptKind, String)> {
        let kind = self.kind.take()?;
        Some((kind, std::mem::take(&mut self.buffer)))
    }

    /// Cancel the prompt.
    pub fn cancel(&mut self) {
        self.kind = None;
        self.buffer.clear();
    }

    /// Get the buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_returns_buffer_and_closes() {
        let mut prompt = PromptState::new();
        prompt.start(PromptKind::BinCount, "1");
        prompt.input('2');
        prompt.input('x');
        prompt.backspace();

        assert_eq!(prompt.submit(), Some((PromptKind::BinCount, "12".to_string())));
        assert!(!prompt.is_active());
        assert_eq!(prompt.submit(), None);
    }

    #[test]
    fn cancel_discards_input() {
        let mut prompt = PromptState::new();
        prompt.start(PromptKind::Rename, "abc");
        prompt.cancel();
        assert!(!prompt.is_active());
        assert_eq!(prompt.buffer(), "");
    }
}
