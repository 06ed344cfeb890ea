//! Raw series representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable series identifier, independent of the editable display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesId(pub u64);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single `(x, y)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Abscissa.
    pub x: f64,
    /// Ordinate. The histogram bins on this value.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named, ordered collection of points as read from a data file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// Series name.
    pub name: String,
    /// Points in file order.
    pub points: Vec<Point>,
}

impl Series {
    /// Create a new series.
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Minimum and maximum y-value, or `None` for an empty series.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.y, p.y)),
            Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
        })
    }
}
