//! Chart state: titles, axes, display flags and the plotted series.
//!
//! Everything the renderer needs lives here as plain data. Event handlers
//! mutate it through the methods below, which validate user input first
//! and leave the state untouched on error.

mod color;
mod registry;

pub use color::{Rgb, Symbol, SERIES_PALETTE};
pub use registry::{ChartSeries, SeriesRegistry};

use crate::data::PlotSpec;
use crate::error::{Result, RxplotError};

/// Title shown before the user edits it.
pub const DEFAULT_TITLE: &str = "Reaction Data";

/// A text label with a color.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// Text color; `None` uses the theme color.
    pub color: Option<Rgb>,
}

impl Label {
    /// Create a label with the theme color.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }
}

/// Axis title, range and tick spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Axis title.
    pub title: Label,
    /// User-fixed `(min, max)`; `None` follows the data.
    pub extremes: Option<(f64, f64)>,
    /// Distance between labelled ticks; `None` picks automatically.
    pub tick_interval: Option<f64>,
}

impl Axis {
    fn new(title: &str) -> Self {
        Self {
            title: Label::new(title),
            extremes: None,
            tick_interval: None,
        }
    }

    /// Tick positions over `[min, max]`.
    ///
    /// With no interval set, three ticks are placed at the ends and middle.
    pub fn ticks(&self, min: f64, max: f64) -> Vec<f64> {
        match self.tick_interval {
            Some(step) if step > 0.0 && (max - min) / step <= 50.0 => {
                let first = (min / step).ceil() * step;
                let mut ticks = Vec::new();
                let mut t = first;
                while t <= max + step * 1e-9 {
                    ticks.push(t);
                    t += step;
                }
                ticks
            },
            _ => vec![min, (min + max) / 2.0, max],
        }
    }
}

/// Which label an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTarget {
    /// Chart title.
    Title,
    /// X axis title.
    XAxis,
    /// Y axis title.
    YAxis,
}

impl LabelTarget {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            LabelTarget::Title => "title",
            LabelTarget::XAxis => "x label",
            LabelTarget::YAxis => "y label",
        }
    }
}

/// Raw field values from the label editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelEdit {
    /// New text.
    pub text: String,
    /// Color as typed; empty keeps the theme color.
    pub color: String,
    /// Tick interval as typed; axes only, empty means automatic.
    pub tick_interval: String,
}

impl LabelEdit {
    /// Parse `text|color|tick` editor input.
    pub fn parse(input: &str) -> Self {
        let mut parts = input.splitn(3, '|');
        Self {
            text: parts.next().unwrap_or_default().trim().to_string(),
            color: parts.next().unwrap_or_default().trim().to_string(),
            tick_interval: parts.next().unwrap_or_default().trim().to_string(),
        }
    }
}

/// Line or scatter drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphKind {
    /// Points joined by lines.
    #[default]
    Line,
    /// Unjoined points.
    Scatter,
}

impl GraphKind {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            GraphKind::Line => "line",
            GraphKind::Scatter => "scatter",
        }
    }
}

/// Marker display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerMode {
    /// Markers for scatter plots only.
    #[default]
    Auto,
    /// Always draw markers.
    On,
    /// Never draw markers.
    Off,
}

impl MarkerMode {
    /// Get the next mode in cycle.
    pub fn next(self) -> Self {
        match self {
            MarkerMode::Auto => MarkerMode::On,
            MarkerMode::On => MarkerMode::Off,
            MarkerMode::Off => MarkerMode::Auto,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            MarkerMode::Auto => "auto",
            MarkerMode::On => "on",
            MarkerMode::Off => "off",
        }
    }
}

/// Flags applied to every series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlotFlags {
    /// Line or scatter.
    pub kind: GraphKind,
    /// Marker mode.
    pub marker: MarkerMode,
}

impl PlotFlags {
    /// Whether point markers are drawn.
    pub fn markers_enabled(&self) -> bool {
        match self.marker {
            MarkerMode::On => true,
            MarkerMode::Off => false,
            MarkerMode::Auto => self.kind == GraphKind::Scatter,
        }
    }
}

/// Complete chart state.
#[derive(Debug)]
pub struct ChartState {
    /// Chart title.
    pub title: Label,
    /// Horizontal axis.
    pub x_axis: Axis,
    /// Vertical axis.
    pub y_axis: Axis,
    /// Plot background; `None` uses the theme background.
    pub background: Option<Rgb>,
    /// Legend visibility.
    pub legend_visible: bool,
    /// Line/scatter and marker flags.
    pub flags: PlotFlags,
    /// Plotted series.
    pub series: SeriesRegistry,
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartState {
    /// Create an empty chart.
    pub fn new() -> Self {
        Self {
            title: Label::new(DEFAULT_TITLE),
            x_axis: Axis::new(""),
            y_axis: Axis::new(""),
            background: None,
            legend_visible: true,
            flags: PlotFlags::default(),
            series: SeriesRegistry::new(),
        }
    }

    /// Set axis titles from a plot spec.
    pub fn apply_spec_labels(&mut self, spec: &PlotSpec) {
        if let Some(ref x) = spec.xlabel {
            self.x_axis.title.text = x.clone();
        }
        if let Some(ref y) = spec.ylabel {
            self.y_axis.title.text = y.clone();
        }
    }

    /// Get a label.
    pub fn label(&self, target: LabelTarget) -> &Label {
        match target {
            LabelTarget::Title => &self.title,
            LabelTarget::XAxis => &self.x_axis.title,
            LabelTarget::YAxis => &self.y_axis.title,
        }
    }

    /// Current editor text for a label, in `text|color|tick` form.
    pub fn label_edit_text(&self, target: LabelTarget) -> String {
        let label = self.label(target);
        let color = label.color.map(|c| c.to_string()).unwrap_or_default();
        let tick = match target {
            LabelTarget::Title => None,
            LabelTarget::XAxis => self.x_axis.tick_interval,
            LabelTarget::YAxis => self.y_axis.tick_interval,
        };
        match tick {
            Some(t) => format!("{}|{}|{}", label.text, color, t),
            None => format!("{}|{}", label.text, color),
        }
    }

    /// Apply a label edit. Invalid color or tick input changes nothing.
    pub fn apply_label(&mut self, target: LabelTarget, edit: &LabelEdit) -> Result<()> {
        let color = if edit.color.is_empty() {
            None
        } else {
            Some(edit.color.parse::<Rgb>()?)
        };

        let tick = if edit.tick_interval.is_empty() {
            None
        } else {
            match edit.tick_interval.parse::<f64>() {
                Ok(t) if t.is_finite() && t > 0.0 => Some(t),
                _ => {
                    return Err(RxplotError::invalid_input(
                        "tick interval",
                        edit.tick_interval.clone(),
                    ))
                },
            }
        };

        let label = Label {
            text: edit.text.clone(),
            color,
        };
        match target {
            LabelTarget::Title => self.title = label,
            LabelTarget::XAxis => {
                self.x_axis.title = label;
                self.x_axis.tick_interval = tick;
            },
            LabelTarget::YAxis => {
                self.y_axis.title = label;
                self.y_axis.tick_interval = tick;
            },
        }
        tracing::debug!(target = target.name(), text = %edit.text, "label applied");
        Ok(())
    }

    /// Fix the plotted range from the four range fields.
    pub fn set_extremes(&mut self, x_min: &str, x_max: &str, y_min: &str, y_max: &str) -> Result<()> {
        let x = parse_range("x range", x_min, x_max)?;
        let y = parse_range("y range", y_min, y_max)?;
        self.x_axis.extremes = Some(x);
        self.y_axis.extremes = Some(y);
        tracing::debug!(?x, ?y, "extremes set");
        Ok(())
    }

    /// Drop user-fixed ranges and follow the data again.
    pub fn reset_zoom(&mut self) {
        self.x_axis.extremes = None;
        self.y_axis.extremes = None;
    }

    /// Ranges to draw: user extremes, else visible data bounds, else `[0, 1]`.
    ///
    /// Degenerate data ranges are widened so each axis has a non-zero span.
    pub fn effective_bounds(&self) -> ((f64, f64), (f64, f64)) {
        let data = self.series.visible_bounds();
        let pick = |fixed: Option<(f64, f64)>, auto: Option<(f64, f64)>| {
            fixed.or(auto).map(widen).unwrap_or((0.0, 1.0))
        };
        (
            pick(self.x_axis.extremes, data.map(|d| d.0)),
            pick(self.y_axis.extremes, data.map(|d| d.1)),
        )
    }

    /// Set the plot background.
    pub fn set_background(&mut self, input: &str) -> Result<()> {
        self.background = if input.trim().is_empty() {
            None
        } else {
            Some(input.parse::<Rgb>()?)
        };
        Ok(())
    }

    /// Toggle legend visibility.
    pub fn toggle_legend(&mut self) {
        self.legend_visible = !self.legend_visible;
    }

    /// Switch every series between line and scatter.
    pub fn toggle_line_scatter(&mut self) {
        self.flags.kind = match self.flags.kind {
            GraphKind::Line => GraphKind::Scatter,
            GraphKind::Scatter => GraphKind::Line,
        };
    }

    /// Cycle the marker mode of every series.
    pub fn cycle_marker(&mut self) {
        self.flags.marker = self.flags.marker.next();
    }
}

fn parse_range(field: &'static str, lo: &str, hi: &str) -> Result<(f64, f64)> {
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RxplotError::invalid_input(field, s))
    };
    let (lo_v, hi_v) = (parse(lo)?, parse(hi)?);
    if lo_v >= hi_v {
        return Err(RxplotError::invalid_input(field, format!("{} .. {}", lo, hi)));
    }
    Ok((lo_v, hi_v))
}

fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Point;

    #[test]
    fn applies_axis_label_with_color_and_ticks() {
        let mut chart = ChartState::new();
        chart
            .apply_label(LabelTarget::XAxis, &LabelEdit::parse("Time (s)|#ff0000|0.5"))
            .unwrap();

        assert_eq!(chart.x_axis.title.text, "Time (s)");
        assert_eq!(chart.x_axis.title.color, Some(Rgb(255, 0, 0)));
        assert_eq!(chart.x_axis.tick_interval, Some(0.5));
        assert_eq!(chart.label_edit_text(LabelTarget::XAxis), "Time (s)|#ff0000|0.5");
    }

    #[test]
    fn invalid_label_edit_changes_nothing() {
        let mut chart = ChartState::new();
        assert!(chart
            .apply_label(LabelTarget::Title, &LabelEdit::parse("New|notacolor"))
            .is_err());
        assert!(chart
            .apply_label(LabelTarget::YAxis, &LabelEdit::parse("Y||-1"))
            .is_err());
        assert_eq!(chart.title.text, DEFAULT_TITLE);
        assert_eq!(chart.y_axis.title.text, "");
    }

    #[test]
    fn title_ignores_tick_interval() {
        let mut chart = ChartState::new();
        chart
            .apply_label(LabelTarget::Title, &LabelEdit::parse("T||2"))
            .unwrap();
        assert_eq!(chart.label_edit_text(LabelTarget::Title), "T|");
    }

    #[test]
    fn extremes_override_data_bounds_until_reset() {
        let mut chart = ChartState::new();
        assert_eq!(chart.effective_bounds(), ((0.0, 1.0), (0.0, 1.0)));

        chart
            .series
            .add("a", vec![Point::new(1.0, 2.0), Point::new(3.0, 2.0)])
            .unwrap();
        assert_eq!(chart.effective_bounds(), ((1.0, 3.0), (1.5, 2.5)));

        chart.set_extremes("0", "10", "-1", "1").unwrap();
        assert_eq!(chart.effective_bounds(), ((0.0, 10.0), (-1.0, 1.0)));

        assert!(chart.set_extremes("5", "5", "0", "1").is_err());
        assert!(chart.set_extremes("a", "5", "0", "1").is_err());
        assert_eq!(chart.x_axis.extremes, Some((0.0, 10.0)));

        chart.reset_zoom();
        assert_eq!(chart.effective_bounds().0, (1.0, 3.0));
    }

    #[test]
    fn flags_toggle_for_all_series() {
        let mut chart = ChartState::new();
        assert!(!chart.flags.markers_enabled());
        chart.toggle_line_scatter();
        assert_eq!(chart.flags.kind, GraphKind::Scatter);
        assert!(chart.flags.markers_enabled());
        chart.cycle_marker();
        chart.cycle_marker();
        assert_eq!(chart.flags.marker, MarkerMode::Off);
        assert!(!chart.flags.markers_enabled());
    }

    #[test]
    fn fixed_tick_interval_generates_aligned_ticks() {
        let mut axis = Axis::new("x");
        axis.tick_interval = Some(2.0);
        assert_eq!(axis.ticks(1.0, 7.0), vec![2.0, 4.0, 6.0]);
        axis.tick_interval = None;
        assert_eq!(axis.ticks(0.0, 4.0), vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn spec_labels_set_axis_titles() {
        let mut chart = ChartState::new();
        chart.apply_spec_labels(&PlotSpec::from_args(["xlabel=t", "ylabel=n"]));
        assert_eq!(chart.x_axis.title.text, "t");
        assert_eq!(chart.y_axis.title.text, "n");
    }

    #[test]
    fn background_accepts_blank_to_reset() {
        let mut chart = ChartState::new();
        chart.set_background("#000").unwrap();
        assert_eq!(chart.background, Some(Rgb(0, 0, 0)));
        chart.set_background("").unwrap();
        assert_eq!(chart.background, None);
        assert!(chart.set_background("zz").is_err());
    }
}
