//! Application state and logic.

use std::path::{Path, PathBuf};

use crate::chart::{ChartState, LabelEdit, LabelTarget, Rgb, Symbol};
use crate::clipboard;
use crate::data::{PlotSpec, SeriesId, SeriesReader};
use crate::error::{Result, RxplotError};
use crate::histogram::{BinConfig, HistogramState};
use crate::prompt::{PromptKind, PromptState};
use crate::sidebar::SidebarState;
use crate::spreadsheet::SpreadsheetState;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Directory that plot spec entries are resolved against.
    pub data_dir: PathBuf,
    /// Chart being displayed.
    pub chart: ChartState,
    /// Series sidebar.
    pub sidebar: SidebarState,
    /// Spreadsheet panel.
    pub sheet: SpreadsheetState,
    /// Open histogram view.
    pub histogram: Option<HistogramState>,
    /// Bin settings for the next histogram.
    pub bin_config: BinConfig,
    /// Text prompt.
    pub prompt: PromptState,
    /// Status message.
    pub status: String,
    /// Blocking error message; any key dismisses it.
    pub alert: Option<String>,
    /// Current theme.
    pub theme: Theme,
    /// Show the series/settings panel.
    pub show_sidebar: bool,
    /// Show the spreadsheet panel.
    pub show_sheet: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(data_dir: PathBuf, bin_config: BinConfig) -> Self {
        Self {
            data_dir,
            chart: ChartState::new(),
            sidebar: SidebarState::new(),
            sheet: SpreadsheetState::new(),
            histogram: None,
            bin_config,
            prompt: PromptState::new(),
            status: "Ready".to_string(),
            alert: None,
            theme: Theme::default(),
            show_sidebar: true,
            show_sheet: true,
        }
    }

    /// Record an error for the alert popup.
    pub fn alert(&mut self, err: RxplotError) {
        tracing::error!("{}", err);
        let msg = err.to_string();
        self.alert = Some(match self.alert.take() {
            Some(prev) => format!("{}\n{}", prev, msg),
            None => msg,
        });
    }

    /// Dismiss the alert popup.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn report(&mut self, result: Result<String>) {
        match result {
            Ok(status) => self.status = status,
            Err(e) => self.alert(e),
        }
    }

    /// Load every series named by a plot spec.
    ///
    /// Entries load independently; a failed entry raises an alert and the
    /// rest still load. Returns the number of series added.
    pub fn load_spec(&mut self, spec: &PlotSpec) -> usize {
        self.chart.apply_spec_labels(spec);

        let mut loaded = 0;
        for entry in &spec.plot_list {
            let path = entry.resolve(&self.data_dir);
            let added = SeriesReader::read_named(&path, entry.display_title())
                .and_then(|s| self.chart.series.add(s.name, s.points));
            match added {
                Ok(_) => loaded += 1,
                Err(e) => self.alert(e),
            }
        }

        tracing::info!(loaded, requested = spec.plot_list.len(), "plot spec loaded");
        self.chart.reset_zoom();
        self.status = format!("{} series loaded", loaded);
        loaded
    }

    /// Add a series from a file, selecting it.
    pub fn add_series_file(&mut self, path: &Path) -> Result<SeriesId> {
        let series = SeriesReader::read_file(path)?;
        let id = self.chart.series.add(series.name, series.points)?;
        self.sidebar.toggle(id);
        Ok(id)
    }

    /// Add series from whitespace-separated paths typed at the prompt.
    pub fn add_series_input(&mut self, input: &str) {
        self.sidebar.clear();
        let mut added = 0;
        for path in input.split_whitespace() {
            match self.add_series_file(Path::new(path)) {
                Ok(_) => added += 1,
                Err(e) => self.alert(e),
            }
        }
        if let Some(&last) = self.sidebar.selected().last() {
            self.sidebar.focus(&self.chart.series, last);
        }
        self.status = format!("{} series added", added);
    }

    /// Series targeted by multi-series operations: the selection, else the cursor.
    pub fn targets(&self) -> Vec<SeriesId> {
        let selected = self.sidebar.selected();
        if selected.is_empty() {
            self.sidebar.cursor_id(&self.chart.series).into_iter().collect()
        } else {
            selected
        }
    }

    /// The one series a single-series operation acts on.
    pub fn single_target(&self) -> Result<SeriesId> {
        match self.sidebar.single() {
            Err(RxplotError::NoSelection) => self
                .sidebar
                .cursor_id(&self.chart.series)
                .ok_or(RxplotError::NoSelection),
            other => other,
        }
    }

    /// Rename the selected series.
    pub fn rename_selected(&mut self, new_name: &str) -> Result<String> {
        let id = self.single_target()?;
        self.chart.series.rename(id, new_name.trim())?;
        Ok(format!("Renamed to {}", new_name.trim()))
    }

    /// Replace the selected series' data with a file, renaming it after the file.
    pub fn replace_selected_data(&mut self, path: &Path) -> Result<String> {
        let series = SeriesReader::read_file(path)?;
        if self.chart.series.find_by_name(&series.name).is_some() {
            return Err(RxplotError::duplicate_name(series.name));
        }
        let id = self.single_target()?;
        self.chart.series.replace_data(id, &series.name, series.points)?;
        self.sheet.show(id);
        Ok(format!("Loaded {} into series", series.name))
    }

    /// Remove the targeted series.
    pub fn remove_selected(&mut self) -> Result<String> {
        let ids = self.targets();
        if ids.is_empty() {
            return Err(RxplotError::NoSelection);
        }
        let removed = self.chart.series.remove(&ids);
        self.sheet.on_removed(&ids);
        self.sidebar.clamp(&self.chart.series);
        Ok(format!("Removed {} series", removed.len()))
    }

    /// Show or hide the targeted series.
    pub fn set_selected_visible(&mut self, visible: bool) -> Result<String> {
        let ids = self.targets();
        let n = self.chart.series.set_visible(&ids, visible);
        if n == 0 {
            return Err(RxplotError::NoSelection);
        }
        Ok(format!("{} {} series", if visible { "Showing" } else { "Hid" }, n))
    }

    /// Color the targeted series.
    pub fn set_selected_color(&mut self, input: &str) -> Result<String> {
        let color: Rgb = input.parse()?;
        let n = self.chart.series.set_color(&self.targets(), color);
        Ok(format!("Colored {} series {}", n, color))
    }

    /// Set the marker symbol of the targeted series.
    pub fn set_selected_symbol(&mut self, input: &str) -> Result<String> {
        let symbol: Symbol = input.parse()?;
        let n = self.chart.series.set_symbol(&self.targets(), symbol);
        Ok(format!("Symbol {} on {} series", symbol.name(), n))
    }

    /// Add the mean of the targeted series and select it.
    pub fn plot_mean(&mut self) -> Result<String> {
        let id = self.chart.series.add_mean(&self.targets())?;
        self.sidebar.select_only(id);
        self.sidebar.focus(&self.chart.series, id);
        let name = self
            .chart
            .series
            .get(id)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        Ok(format!("Added {}", name))
    }

    /// Open a histogram of the selected series, or of all series.
    pub fn open_histogram(&mut self) -> Result<String> {
        let ids = self.sidebar.selected_or_all(&self.chart.series);
        let state = HistogramState::new(self.chart.series.snapshot(&ids), self.bin_config)?;
        let msg = format!(
            "Histogram of {} series, {} bins",
            state.displayed().len(),
            state.config().bin_count()
        );
        self.histogram = Some(state);
        Ok(msg)
    }

    /// Rebin the open histogram from the current selection.
    pub fn refresh_histogram(&mut self) -> Result<String> {
        let ids = self.sidebar.selected_or_all(&self.chart.series);
        let snapshot = self.chart.series.snapshot(&ids);
        match self.histogram.as_mut() {
            Some(state) => {
                let update = state.set_source(snapshot)?;
                Ok(format!("Histogram: {} updated, {} added", update.updated, update.added))
            },
            None => self.open_histogram(),
        }
    }

    /// Close the histogram view.
    pub fn close_histogram(&mut self) {
        self.histogram = None;
    }

    /// Change the bin count, rebinning the open histogram.
    pub fn set_bin_count(&mut self, input: &str) -> Result<String> {
        match self.histogram.as_mut() {
            Some(state) => {
                state.set_bin_count(input)?;
                self.bin_config = state.config();
            },
            None => self.bin_config = BinConfig::parse(input)?,
        }
        Ok(format!("Bins: {}", self.bin_config.bin_count()))
    }

    /// Apply a label editor submission.
    pub fn apply_label(&mut self, target: LabelTarget, input: &str) -> Result<String> {
        self.chart.apply_label(target, &LabelEdit::parse(input))?;
        Ok(format!("Updated {}", target.name()))
    }

    /// Apply a range submission of four values.
    pub fn set_extremes(&mut self, input: &str) -> Result<String> {
        let fields: Vec<&str> = input.split_whitespace().collect();
        let [x_min, x_max, y_min, y_max] = fields[..] else {
            return Err(RxplotError::invalid_input("range", input));
        };
        self.chart.set_extremes(x_min, x_max, y_min, y_max)?;
        Ok("Range set".to_string())
    }

    /// Show the series under the cursor in the spreadsheet.
    pub fn show_in_sheet(&mut self) {
        match self.sidebar.cursor_id(&self.chart.series) {
            Some(id) => {
                self.sheet.show(id);
                self.show_sheet = true;
                self.status = format!("Sheet: {}", self.sheet.title(&self.chart));
            },
            None => self.status = "No series loaded".to_string(),
        }
    }

    /// Search the spreadsheet for an x value.
    pub fn sheet_search(&mut self, input: &str) {
        self.status = match self.sheet.search_x(&self.chart, input) {
            Some(row) => format!("Found x={} at row {}", input.trim(), row + 1),
            None => format!("x={} not found", input.trim()),
        };
    }

    /// Copy the spreadsheet to the clipboard.
    pub fn copy_sheet(&mut self) -> Result<String> {
        let text = self
            .sheet
            .to_tsv(&self.chart)
            .ok_or(RxplotError::NoSelection)?;
        clipboard::copy_to_clipboard(&text)?;
        Ok("Sheet copied!".to_string())
    }

    /// Open the prompt, pre-filled from current state.
    pub fn start_prompt(&mut self, kind: PromptKind) {
        let initial = match kind {
            PromptKind::Label(target) => self.chart.label_edit_text(target),
            PromptKind::BinCount => self.bin_config.bin_count().to_string(),
            PromptKind::Rename => self
                .single_target()
                .ok()
                .and_then(|id| self.chart.series.get(id))
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            PromptKind::Extremes => {
                let ((x0, x1), (y0, y1)) = self.chart.effective_bounds();
                format!("{} {} {} {}", x0, x1, y0, y1)
            },
            PromptKind::AddSeries | PromptKind::ReplaceData => {
                let mut dir = self.data_dir.display().to_string();
                if !dir.ends_with(std::path::MAIN_SEPARATOR) {
                    dir.push(std::path::MAIN_SEPARATOR);
                }
                dir
            },
            PromptKind::SeriesColor => self
                .targets()
                .first()
                .and_then(|&id| self.chart.series.get(id))
                .map(|s| s.color.to_string())
                .unwrap_or_default(),
            PromptKind::SeriesSymbol => self
                .targets()
                .first()
                .and_then(|&id| self.chart.series.get(id))
                .map(|s| s.symbol.name().to_string())
                .unwrap_or_default(),
            PromptKind::Background => self
                .chart
                .background
                .map(|c| c.to_string())
                .unwrap_or_default(),
            PromptKind::SheetSearch => String::new(),
        };
        self.prompt.start(kind, initial);
    }

    /// Run the action for a submitted prompt.
    pub fn submit_prompt(&mut self) {
        let Some((kind, input)) = self.prompt.submit() else {
            return;
        };

        match kind {
            PromptKind::Label(target) => {
                let r = self.apply_label(target, &input);
                self.report(r);
            },
            PromptKind::Extremes => {
                let r = self.set_extremes(&input);
                self.report(r);
            },
            PromptKind::BinCount => {
                let r = self.set_bin_count(&input);
                self.report(r);
            },
            PromptKind::Rename => {
                let r = self.rename_selected(&input);
                self.report(r);
            },
            PromptKind::AddSeries => self.add_series_input(&input),
            PromptKind::ReplaceData => {
                let r = self.replace_selected_data(Path::new(input.trim()));
                self.report(r);
            },
            PromptKind::SeriesColor => {
                let r = self.set_selected_color(&input);
                self.report(r);
            },
            PromptKind::SeriesSymbol => {
                let r = self.set_selected_symbol(&input);
                self.report(r);
            },
            PromptKind::Background => {
                let r = self
                    .chart
                    .set_background(&input)
                    .map(|_| "Background updated".to_string());
                self.report(r);
            },
            PromptKind::SheetSearch => self.sheet_search(&input),
        }
    }

    /// Run an action that reports through the status bar or the alert popup.
    pub fn run(&mut self, action: impl FnOnce(&mut Self) -> Result<String>) {
        let r = action(self);
        self.report(r);
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Toggle the series/settings panel.
    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }

    /// Toggle the spreadsheet panel.
    pub fn toggle_sheet(&mut self) {
        self.show_sheet = !self.show_sheet;
    }

    /// Close any open overlays.
    pub fn close_overlay(&mut self) {
        self.prompt.cancel();
        if self.histogram.is_some() {
            self.close_histogram();
        } else {
            self.sidebar.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn data_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.dat"), "0 1\n1 2\n2 5\n3 9\n4 10\n").unwrap();
        fs::write(dir.path().join("b.dat"), "0 3\n1 4\n").unwrap();
        fs::write(dir.path().join("bad.dat"), "0 3\n1 x\n").unwrap();
        dir
    }

    fn app(dir: &tempfile::TempDir) -> App {
        App::new(dir.path().to_path_buf(), BinConfig::default())
    }

    #[test]
    fn spec_loads_best_effort() {
        let dir = data_dir();
        let mut app = app(&dir);
        let spec = PlotSpec::from_args([
            "xlabel=t",
            "plot",
            "title=A",
            "f=a.dat",
            "plot",
            "f=missing.dat",
            "plot",
            "f=b.dat",
        ]);

        assert_eq!(app.load_spec(&spec), 2);
        assert_eq!(app.chart.x_axis.title.text, "t");
        assert!(app.chart.series.find_by_name("A").is_some());
        assert!(app.chart.series.find_by_name("b.dat").is_some());
        assert!(app.alert.as_deref().unwrap_or("").contains("missing.dat not found"));
    }

    #[test]
    fn malformed_file_loads_as_empty_series() {
        let dir = data_dir();
        let mut app = app(&dir);
        let id = app.add_series_file(&dir.path().join("bad.dat")).unwrap();
        assert!(app.chart.series.get(id).unwrap().points.is_empty());
    }

    #[test]
    fn duplicate_file_add_alerts() {
        let dir = data_dir();
        let mut app = app(&dir);
        let path = dir.path().join("a.dat");
        app.add_series_input(&path.display().to_string());
        app.add_series_input(&path.display().to_string());

        assert_eq!(app.chart.series.len(), 1);
        assert_eq!(app.alert.as_deref(), Some("Series with this name already exists."));
    }

    #[test]
    fn single_series_ops_reject_multiple_selection() {
        let dir = data_dir();
        let mut app = app(&dir);
        app.add_series_file(&dir.path().join("a.dat")).unwrap();
        app.add_series_file(&dir.path().join("b.dat")).unwrap();

        assert!(matches!(app.rename_selected("x"), Err(RxplotError::MultipleSelected)));
        app.sidebar.clear();
        app.sidebar.cursor = 1;
        app.rename_selected("renamed").unwrap();
        assert!(app.chart.series.find_by_name("renamed").is_some());
    }

    #[test]
    fn histogram_follows_bin_count_changes() {
        let dir = data_dir();
        let mut app = app(&dir);
        app.add_series_file(&dir.path().join("a.dat")).unwrap();
        app.open_histogram().unwrap();
        assert_eq!(app.histogram.as_ref().unwrap().labels().len(), 10);

        app.set_bin_count("3").unwrap();
        let hist = app.histogram.as_ref().unwrap();
        assert_eq!(hist.labels(), ["1 - 4", "5 - 8", "9 - 10"]);
        assert_eq!(hist.displayed()[0].counts, vec![2, 1, 2]);

        assert!(app.set_bin_count("0").is_err());
        assert_eq!(app.bin_config.bin_count(), 3);
    }

    #[test]
    fn histogram_without_series_is_an_error() {
        let dir = data_dir();
        let mut app = app(&dir);
        assert!(app.open_histogram().is_err());
        assert!(app.histogram.is_none());
    }

    #[test]
    fn replace_data_renames_and_shows_in_sheet() {
        let dir = data_dir();
        let mut app = app(&dir);
        let id = app.add_series_file(&dir.path().join("a.dat")).unwrap();
        app.replace_selected_data(&dir.path().join("b.dat")).unwrap();

        let s = app.chart.series.get(id).unwrap();
        assert_eq!(s.name, "b.dat");
        assert_eq!(s.points.len(), 2);
        assert_eq!(app.sheet.series(), Some(id));
        assert!(app.replace_selected_data(&dir.path().join("b.dat")).is_err());
    }

    #[test]
    fn removing_shown_series_resets_sheet() {
        let dir = data_dir();
        let mut app = app(&dir);
        let id = app.add_series_file(&dir.path().join("a.dat")).unwrap();
        app.show_in_sheet();
        assert_eq!(app.sheet.series(), Some(id));

        app.remove_selected().unwrap();
        assert!(app.chart.series.is_empty());
        assert_eq!(app.sheet.series(), None);
    }

    #[test]
    fn prompt_submission_dispatches() {
        let dir = data_dir();
        let mut app = app(&dir);
        app.start_prompt(PromptKind::Label(LabelTarget::Title));
        assert_eq!(app.prompt.buffer(), "Reaction Data|");
        app.prompt.input('!');
        app.submit_prompt();
        assert_eq!(app.alert.as_deref(), Some("Invalid color: '!'"));
        assert_eq!(app.chart.title.text, "Reaction Data");
        app.dismiss_alert();

        app.prompt.start(PromptKind::Label(LabelTarget::Title), "Kinetics|#0f0");
        app.submit_prompt();
        assert_eq!(app.chart.title.text, "Kinetics");
        assert!(app.alert.is_none());

        app.prompt.start(PromptKind::Extremes, "0 1 2");
        app.submit_prompt();
        assert!(app.alert.is_some());
        app.dismiss_alert();

        app.prompt.start(PromptKind::Extremes, "0 1 2 3");
        app.submit_prompt();
        assert_eq!(app.chart.y_axis.extremes, Some((2.0, 3.0)));
    }

    #[test]
    fn mean_of_selection_is_added_and_selected() {
        let dir = data_dir();
        let mut app = app(&dir);
        app.add_series_file(&dir.path().join("a.dat")).unwrap();
        app.add_series_file(&dir.path().join("b.dat")).unwrap();
        app.plot_mean().unwrap();

        let mean = app.chart.series.find_by_name("Average 2").unwrap();
        assert_eq!(mean.points[0].y, 2.0);
        assert_eq!(app.sidebar.selected(), vec![mean.id]);
    }
}
