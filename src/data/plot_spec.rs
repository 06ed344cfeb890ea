//! Plot specification: axis labels plus the list of series files to plot.
//!
//! A spec arrives either as JSON or as the launcher's token list, e.g.
//! `xlabel=Time ylabel=Count plot title=A f=a.dat plot title=B f=b.dat`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, RxplotError};

/// One series entry of a plot specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotEntry {
    /// Path to the series file, relative to the data directory.
    #[serde(default)]
    pub fname: String,
    /// Display title of the series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PlotEntry {
    /// Title to display, falling back to the file name.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(t) if !t.is_empty() => t.clone(),
            _ => Path::new(&self.fname)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| self.fname.clone()),
        }
    }

    /// Resolve the file path against a data directory.
    pub fn resolve(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.fname)
    }
}

/// Axis labels and ordered series entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotSpec {
    /// X axis title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xlabel: Option<String>,
    /// Y axis title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ylabel: Option<String>,
    /// Series entries in plotting order.
    #[serde(rename = "plotList", default)]
    pub plot_list: Vec<PlotEntry>,
}

impl PlotSpec {
    /// Build a spec from launcher tokens.
    ///
    /// `title=` and `f=` apply to the most recent `plot` token and are
    /// dropped when no `plot` has been seen yet.
    pub fn from_args<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = Self::default();

        for token in tokens {
            let token = token.as_ref();
            if let Some(v) = token.strip_prefix("xlabel=") {
                spec.xlabel = Some(v.to_string());
            } else if let Some(v) = token.strip_prefix("ylabel=") {
                spec.ylabel = Some(v.to_string());
            } else if token == "plot" {
                spec.plot_list.push(PlotEntry::default());
            } else if let Some(v) = token.strip_prefix("title=") {
                match spec.plot_list.last_mut() {
                    Some(entry) => entry.title = Some(v.to_string()),
                    None => tracing::warn!(token, "title before any plot entry"),
                }
            } else if let Some(v) = token.strip_prefix("f=") {
                match spec.plot_list.last_mut() {
                    Some(entry) => entry.fname = v.to_string(),
                    None => tracing::warn!(token, "file before any plot entry"),
                }
            } else {
                tracing::debug!(token, "ignoring unknown spec token");
            }
        }

        spec
    }

    /// Decode a JSON spec.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and decode a JSON spec file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| RxplotError::file_open(path, e))?;
        Self::from_json(&text)
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Merge another spec into this one. Labels from `other` win when set.
    pub fn merge(&mut self, other: PlotSpec) {
        if other.xlabel.is_some() {
            self.xlabel = other.xlabel;
        }
        if other.ylabel.is_some() {
            self.ylabel = other.ylabel;
        }
        self.plot_list.extend(other.plot_list);
    }

    /// Whether the spec names no series.
    pub fn is_empty(&self) -> bool {
        self.plot_list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_launcher_tokens() {
        let spec = PlotSpec::from_args([
            "xlabel=Time (s)",
            "ylabel=Count",
            "plot",
            "title=A",
            "f=react_data/a.World.dat",
            "plot",
            "f=b.dat",
        ]);

        assert_eq!(spec.xlabel.as_deref(), Some("Time (s)"));
        assert_eq!(spec.ylabel.as_deref(), Some("Count"));
        assert_eq!(spec.plot_list.len(), 2);
        assert_eq!(spec.plot_list[0].display_title(), "A");
        assert_eq!(spec.plot_list[1].display_title(), "b.dat");
    }

    #[test]
    fn entry_tokens_before_plot_are_dropped() {
        let spec = PlotSpec::from_args(["title=orphan", "f=x.dat", "bogus"]);
        assert!(spec.is_empty());
    }

    #[test]
    fn json_uses_plot_list_field() {
        let spec = PlotSpec::from_json(
            r#"{"xlabel":"t","ylabel":"n","plotList":[{"fname":"a.dat","title":"A"}]}"#,
        )
        .unwrap();
        assert_eq!(spec.plot_list[0].fname, "a.dat");

        let json = spec.to_json().unwrap();
        assert!(json.contains("\"plotList\""));
        assert_eq!(PlotSpec::from_json(&json).unwrap(), spec);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(PlotSpec::from_json("{not json").is_err());
    }

    #[test]
    fn merge_appends_entries_and_overrides_labels() {
        let mut base = PlotSpec::from_args(["xlabel=a", "plot", "f=1.dat"]);
        base.merge(PlotSpec::from_args(["xlabel=b", "plot", "f=2.dat"]));
        assert_eq!(base.xlabel.as_deref(), Some("b"));
        assert_eq!(base.plot_list.len(), 2);
    }
}
