//! Series file reader.

use super::{parse_content, Series};
use crate::error::{Result, RxplotError};
use std::path::Path;

/// Series data reader.
#[derive(Debug)]
pub struct SeriesReader;

impl SeriesReader {
    /// Read a series file, naming the series after the file name.
    pub fn read_file(path: &Path) -> Result<Series> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Self::read_named(path, name)
    }

    /// Read a series file under an explicit name.
    pub fn read_named(path: &Path, name: impl Into<String>) -> Result<Series> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RxplotError::file_open(path, e))?;

        let series = Series::new(name, parse_content(&content));
        tracing::debug!(
            path = %path.display(),
            points = series.len(),
            "series file read"
        );
        Ok(series)
    }
}
