//! Series registry.
//!
//! Series are keyed by a stable [`SeriesId`]. Display names are unique but
//! editable, so nothing outside this module should look series up by name
//! except to detect collisions.

use super::color::{Rgb, Symbol};
use crate::data::{Point, Series, SeriesId};
use crate::error::{Result, RxplotError};

/// A series as plotted on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Stable identifier.
    pub id: SeriesId,
    /// Display name, unique within the registry.
    pub name: String,
    /// Points in file order.
    pub points: Vec<Point>,
    /// Line and marker color.
    pub color: Rgb,
    /// Marker symbol.
    pub symbol: Symbol,
    /// Whether the series is drawn.
    pub visible: bool,
}

impl ChartSeries {
    /// Copy out as a plain series.
    pub fn to_series(&self) -> Series {
        Series::new(self.name.clone(), self.points.clone())
    }

    /// Points as `(x, y)` tuples for plotting.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }
}

/// Ordered collection of chart series.
#[derive(Debug, Default)]
pub struct SeriesRegistry {
    series: Vec<ChartSeries>,
    next_id: u64,
    colors_used: usize,
}

impl SeriesRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series. Fails if the name is already taken.
    pub fn add(&mut self, name: impl Into<String>, points: Vec<Point>) -> Result<SeriesId> {
        let name = name.into();
        if self.find_by_name(&name).is_some() {
            return Err(RxplotError::duplicate_name(name));
        }

        let id = SeriesId(self.next_id);
        self.next_id += 1;
        let color = Rgb::palette(self.colors_used);
        self.colors_used += 1;

        tracing::info!(%id, name = %name, points = points.len(), "series added");
        self.series.push(ChartSeries {
            id,
            name,
            points,
            color,
            symbol: Symbol::default(),
            visible: true,
        });
        Ok(id)
    }

    /// Look up a series by id.
    pub fn get(&self, id: SeriesId) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: SeriesId) -> Result<&mut ChartSeries> {
        self.series
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RxplotError::SeriesNotFound { id })
    }

    /// Look up a series by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ChartSeries> {
        self.series.iter()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> Vec<SeriesId> {
        self.series.iter().map(|s| s.id).collect()
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Position of a series in insertion order.
    pub fn position(&self, id: SeriesId) -> Option<usize> {
        self.series.iter().position(|s| s.id == id)
    }

    fn ensure_name_free(&self, id: SeriesId, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(RxplotError::invalid_input("series name", name));
        }
        match self.find_by_name(name) {
            Some(other) if other.id != id => Err(RxplotError::duplicate_name(name)),
            _ => Ok(()),
        }
    }

    /// Rename a series. Renaming to its current name is a no-op.
    pub fn rename(&mut self, id: SeriesId, new_name: &str) -> Result<()> {
        self.ensure_name_free(id, new_name)?;
        let series = self.get_mut(id)?;
        tracing::info!(%id, from = %series.name, to = new_name, "series renamed");
        series.name = new_name.to_string();
        Ok(())
    }

    /// Replace a series' points and name, as when loading a new file into it.
    pub fn replace_data(&mut self, id: SeriesId, name: &str, points: Vec<Point>) -> Result<()> {
        self.ensure_name_free(id, name)?;
        let series = self.get_mut(id)?;
        series.name = name.to_string();
        series.points = points;
        tracing::info!(%id, name, points = series.points.len(), "series data replaced");
        Ok(())
    }

    /// Remove series, returning the removed entries.
    pub fn remove(&mut self, ids: &[SeriesId]) -> Vec<ChartSeries> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.series)
            .into_iter()
            .partition(|s| ids.contains(&s.id));
        self.series = kept;
        for s in &removed {
            tracing::info!(id = %s.id, name = %s.name, "series removed");
        }
        removed
    }

    /// Show or hide series. Returns how many were found.
    pub fn set_visible(&mut self, ids: &[SeriesId], visible: bool) -> usize {
        self.for_each_selected(ids, |s| s.visible = visible)
    }

    /// Set series color. Returns how many were found.
    pub fn set_color(&mut self, ids: &[SeriesId], color: Rgb) -> usize {
        self.for_each_selected(ids, |s| s.color = color)
    }

    /// Set marker symbol. Returns how many were found.
    pub fn set_symbol(&mut self, ids: &[SeriesId], symbol: Symbol) -> usize {
        self.for_each_selected(ids, |s| s.symbol = symbol)
    }

    fn for_each_selected(&mut self, ids: &[SeriesId], mut f: impl FnMut(&mut ChartSeries)) -> usize {
        let mut touched = 0;
        for series in self.series.iter_mut().filter(|s| ids.contains(&s.id)) {
            f(series);
            touched += 1;
        }
        touched
    }

    /// Add the point-wise mean of the given series as a new series.
    ///
    /// X values come from the first series. Each y is the mean over the
    /// series that have a point at that index.
    pub fn add_mean(&mut self, ids: &[SeriesId]) -> Result<SeriesId> {
        let selected: Vec<&ChartSeries> = ids.iter().filter_map(|&id| self.get(id)).collect();
        let first = selected.first().ok_or(RxplotError::NoSelection)?;

        let points = first
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let ys: Vec<f64> = selected
                    .iter()
                    .filter_map(|s| s.points.get(i).map(|q| q.y))
                    .collect();
                Point::new(p.x, ys.iter().sum::<f64>() / ys.len() as f64)
            })
            .collect();

        let mut n = self.series.len();
        let mut name = format!("Average {}", n);
        while self.find_by_name(&name).is_some() {
            n += 1;
            name = format!("Average {}", n);
        }

        self.add(name, points)
    }

    /// Snapshot series for histogram binning.
    pub fn snapshot(&self, ids: &[SeriesId]) -> Vec<(SeriesId, Series)> {
        self.series
            .iter()
            .filter(|s| ids.contains(&s.id))
            .map(|s| (s.id, s.to_series()))
            .collect()
    }

    /// Data bounds `((x_min, x_max), (y_min, y_max))` over visible series.
    pub fn visible_bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        self.series
            .iter()
            .filter(|s| s.visible)
            .flat_map(|s| s.points.iter())
            .fold(None, |acc, p| match acc {
                None => Some(((p.x, p.x), (p.y, p.y))),
                Some(((x0, x1), (y0, y1))) => {
                    Some(((x0.min(p.x), x1.max(p.x)), (y0.min(p.y), y1.max(p.y))))
                },
            })
    }
}
