//! Utility types shared by the UI.

mod layout_config;

pub use layout_config::{HistogramLayoutConfig, LayoutConfig, PanelLayoutConfig};
