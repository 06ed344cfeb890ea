//! Error types for rxplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

use crate::data::SeriesId;
use crate::histogram::HistogramError;

/// Result type alias for rxplot operations.
pub type Result<T> = std::result::Result<T, RxplotError>;

/// Errors that can occur in rxplot.
///
/// Every variant renders as the message shown to the user in the alert popup.
#[derive(Debug, Error)]
pub enum RxplotError {
    /// Failed to open a series or spec file.
    #[error("{} not found", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Plot specification could not be decoded.
    #[error("error getting file information: {0}")]
    PlotSpec(#[from] serde_json::Error),

    /// A series with the requested name is already on the chart.
    #[error("Series with this name already exists.")]
    DuplicateName { name: String },

    /// A single-series operation was invoked with several series selected.
    #[error("Multiple series selected!")]
    MultipleSelected,

    /// An operation needed a selected series but none was.
    #[error("No series selected")]
    NoSelection,

    /// Series id no longer present in the registry.
    #[error("Series not found: {id}")]
    SeriesNotFound { id: SeriesId },

    /// User input that could not be interpreted.
    #[error("Invalid {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },

    /// Histogram binning failed.
    #[error(transparent)]
    Histogram(#[from] HistogramError),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RxplotError {
    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a DuplicateName error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }
}
