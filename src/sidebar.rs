//! Series sidebar: cursor and multi-selection over the chart's series.

use crate::chart::SeriesRegistry;
use crate::data::SeriesId;
use crate::error::{Result, RxplotError};
use std::collections::BTreeSet;

/// Sidebar state.
#[derive(Debug, Default)]
pub struct SidebarState {
    /// Cursor position in registry order.
    pub cursor: usize,
    /// Scroll offset.
    pub scroll: usize,
    selected: BTreeSet<SeriesId>,
}

impl SidebarState {
    /// Create a new sidebar state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Keep the cursor inside the list after removals.
    pub fn clamp(&mut self, registry: &SeriesRegistry) {
        self.cursor = self.cursor.min(registry.len().saturating_sub(1));
        self.selected.retain(|id| registry.get(*id).is_some());
    }

    /// Series under the cursor.
    pub fn cursor_id(&self, registry: &SeriesRegistry) -> Option<SeriesId> {
        registry.iter().nth(self.cursor).map(|s| s.id)
    }

    /// Move the cursor onto a series.
    pub fn focus(&mut self, registry: &SeriesRegistry, id: SeriesId) {
        if let Some(pos) = registry.position(id) {
            self.cursor = pos;
        }
    }

    /// Toggle selection of the series under the cursor.
    pub fn toggle_current(&mut self, registry: &SeriesRegistry) {
        if let Some(id) = self.cursor_id(registry) {
            self.toggle(id);
        }
    }

    /// Toggle selection of one series.
    pub fn toggle(&mut self, id: SeriesId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select exactly one series.
    pub fn select_only(&mut self, id: SeriesId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether a series is selected.
    pub fn is_selected(&self, id: SeriesId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in id order.
    pub fn selected(&self) -> Vec<SeriesId> {
        self.selected.iter().copied().collect()
    }

    /// Selected ids, or every id when nothing is selected.
    pub fn selected_or_all(&self, registry: &SeriesRegistry) -> Vec<SeriesId> {
        if self.selected.is_empty() {
            registry.ids()
        } else {
            self.selected()
        }
    }

    /// The single selected series, for operations that act on exactly one.
    pub fn single(&self) -> Result<SeriesId> {
        let mut iter = self.selected.iter();
        match (iter.next(), iter.next()) {
            (Some(&id), None) => Ok(id),
            (None, _) => Err(RxplotError::NoSelection),
            (Some(_), Some(_)) => Err(RxplotError::MultipleSelected),
        }
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }

        if self.cursor >= self.scroll + viewport_height {
            self.scroll = self.cursor.saturating_sub(viewport_height - 1);
        }
    }
}
