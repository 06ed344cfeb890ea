//! Rxplot - A terminal plotter for two-column numeric data files.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rxplot::app::{App, Theme};
use rxplot::chart::LabelTarget;
use rxplot::data::PlotSpec;
use rxplot::histogram::{bin_series, BinConfig};
use rxplot::prompt::PromptKind;
use rxplot::ui;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "rxplot")]
#[command(about = "A terminal plotter and histogram binner for x/y data files", long_about = None)]
struct Args {
    /// Directory that plot entries are resolved against
    data_dir: Option<PathBuf>,

    /// Plot tokens: xlabel=.. ylabel=.. plot title=.. f=..
    tokens: Vec<String>,

    /// JSON plot specification to load
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Extra series files to add
    #[arg(short, long = "file")]
    files: Vec<PathBuf>,

    /// Initial histogram bin count
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=BinConfig::MAX_BIN_COUNT as u64))]
    bins: u64,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the histogram of all loaded series as TSV and exit
    #[arg(long)]
    print_histogram: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::GruvboxDark,
            ThemeArg::Light => Theme::GruvboxLight,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Rxplot");
    }

    // Validate data directory if provided
    let data_dir = args.data_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    if !data_dir.is_dir() {
        eprintln!("Error: Path not found: {}", data_dir.display());
        std::process::exit(1);
    }

    let mut spec = match &args.spec {
        Some(path) => PlotSpec::load(path)?,
        None => PlotSpec::default(),
    };
    spec.merge(PlotSpec::from_args(&args.tokens));
    tracing::debug!(spec = %spec.to_json()?, "plot spec");

    let bin_config = BinConfig::new(args.bins as usize)?;
    let mut app = App::new(data_dir, bin_config);
    app.theme = args.theme.into();
    app.load_spec(&spec);
    for path in &args.files {
        if let Err(e) = app.add_series_file(path) {
            app.alert(e);
        }
    }

    if args.print_histogram {
        return print_histogram(&mut app);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Rxplot exited");

    Ok(())
}

/// Bin every loaded series and write `label<TAB>count...` rows to stdout.
fn print_histogram(app: &mut App) -> Result<()> {
    if let Some(alert) = app.alert.take() {
        for line in alert.lines() {
            eprintln!("Warning: {}", line);
        }
    }

    let series: Vec<_> = app.chart.series.iter().map(|s| s.to_series()).collect();
    let hist = bin_series(&series, app.bin_config)?;

    let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
    println!("bin\t{}", names.join("\t"));
    for (bin, label) in hist.labels.iter().enumerate() {
        let counts: Vec<String> = hist
            .counts
            .iter()
            .map(|c| c.get(bin).copied().unwrap_or(0).to_string())
            .collect();
        println!("{}\t{}", label, counts.join("\t"));
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(());
        }

        // Alert mode - any key dismisses
        if app.alert.is_some() {
            app.dismiss_alert();
            continue;
        }

        // Prompt mode - handle separately
        if app.prompt.is_active() {
            match key.code {
                KeyCode::Enter => app.submit_prompt(),
                KeyCode::Esc => app.prompt.cancel(),
                KeyCode::Backspace => app.prompt.backspace(),
                KeyCode::Char(c) => app.prompt.input(c),
                _ => {},
            }
            continue;
        }

        // Histogram mode
        if app.histogram.is_some() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('H') => {
                    app.close_histogram();
                    app.status = "Histogram closed".to_string();
                },
                KeyCode::Char('n') => app.start_prompt(PromptKind::BinCount),
                KeyCode::Char('u') => app.run(|a| a.refresh_histogram()),
                KeyCode::Char('T') => app.cycle_theme(),
                // Selection can still change while the histogram is up
                KeyCode::Up | KeyCode::Char('k') => app.sidebar.cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => {
                    app.sidebar.cursor_down(app.chart.series.len())
                },
                KeyCode::Char(' ') => app.sidebar.toggle_current(&app.chart.series),
                _ => {},
            }
            continue;
        }

        // Normal mode
        match key.code {
            KeyCode::Char('q') => return Ok(()),

            // Navigation and selection
            KeyCode::Up | KeyCode::Char('k') => app.sidebar.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => app.sidebar.cursor_down(app.chart.series.len()),
            KeyCode::Char(' ') => app.sidebar.toggle_current(&app.chart.series),
            KeyCode::Esc => app.close_overlay(),

            // Series operations
            KeyCode::Char('a') => app.start_prompt(PromptKind::AddSeries),
            KeyCode::Char('x') => app.run(|a| a.remove_selected()),
            KeyCode::Char('r') => start_single_prompt(&mut app, PromptKind::Rename),
            KeyCode::Char('f') => start_single_prompt(&mut app, PromptKind::ReplaceData),
            KeyCode::Char('s') => app.run(|a| a.set_selected_visible(true)),
            KeyCode::Char('h') => app.run(|a| a.set_selected_visible(false)),
            KeyCode::Char('c') => app.start_prompt(PromptKind::SeriesColor),
            KeyCode::Char('m') => app.start_prompt(PromptKind::SeriesSymbol),
            KeyCode::Char('A') => app.run(|a| a.plot_mean()),

            // Chart settings
            KeyCode::Char('l') => {
                app.chart.toggle_line_scatter();
                app.status = format!("Graph: {}", app.chart.flags.kind.name());
            },
            KeyCode::Char('M') => {
                app.chart.cycle_marker();
                app.status = format!("Markers: {}", app.chart.flags.marker.name());
            },
            KeyCode::Char('L') => {
                app.chart.toggle_legend();
                app.status = if app.chart.legend_visible {
                    "Legend shown".to_string()
                } else {
                    "Legend hidden".to_string()
                };
            },
            KeyCode::Char('t') => app.start_prompt(PromptKind::Label(LabelTarget::Title)),
            KeyCode::Char('X') => app.start_prompt(PromptKind::Label(LabelTarget::XAxis)),
            KeyCode::Char('Y') => app.start_prompt(PromptKind::Label(LabelTarget::YAxis)),
            KeyCode::Char('e') => app.start_prompt(PromptKind::Extremes),
            KeyCode::Char('z') => {
                app.chart.reset_zoom();
                app.status = "Zoom reset".to_string();
            },
            KeyCode::Char('b') => app.start_prompt(PromptKind::Background),
            KeyCode::Char('n') => app.start_prompt(PromptKind::BinCount),
            KeyCode::Char('H') => app.run(|a| a.open_histogram()),

            // Spreadsheet
            KeyCode::Enter => app.show_in_sheet(),
            KeyCode::Char('/') => app.start_prompt(PromptKind::SheetSearch),
            KeyCode::Char('J') | KeyCode::PageDown => app.sheet.scroll_down(1, &app.chart),
            KeyCode::Char('K') | KeyCode::PageUp => app.sheet.scroll_up(1),
            KeyCode::Char('y') => app.run(|a| a.copy_sheet()),

            // Panels
            KeyCode::Char('T') => app.cycle_theme(),
            KeyCode::Char('o') => app.toggle_sidebar(),
            KeyCode::Char('p') => app.toggle_sheet(),
            KeyCode::Char('?') => {
                app.status = "Help: a=add x=remove r=rename f=replace s/h=show/hide c=color m=symbol l=line/scatter M=markers L=legend t/X/Y=labels e=range z=reset b=bg A=mean H=histogram n=bins Enter=sheet /=find y=copy".to_string();
            },

            _ => {},
        }
    }
}

/// Open a prompt that needs exactly one target series.
fn start_single_prompt(app: &mut App, kind: PromptKind) {
    match app.single_target() {
        Ok(_) => app.start_prompt(kind),
        Err(e) => app.alert(e),
    }
}
