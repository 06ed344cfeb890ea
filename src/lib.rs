//! Rxplot - A terminal plotter for two-column numeric data files.
//!
//! Rxplot loads `x y` series files, plots them as lines or scatter points,
//! and bins their y-values into grouped histograms.
//!
//! # Features
//!
//! - Whitespace-separated series files, one point per line
//! - JSON or command-line plot specifications
//! - Per-series color, symbol and visibility
//! - Equal-width histograms over the global y-range
//! - Spreadsheet view with x search and clipboard copy
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use rxplot::data::SeriesReader;
//! use rxplot::histogram::{bin_series, BinConfig};
//! use std::path::Path;
//!
//! let series = SeriesReader::read_file(Path::new("run1.dat"))?;
//! let hist = bin_series(&[series], BinConfig::new(5)?)?;
//! for (label, counts) in hist.labels.iter().zip(&hist.counts) {
//!     println!("{}\t{:?}", label, counts);
//! }
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod histogram;
pub mod prompt;
pub mod sidebar;
pub mod spreadsheet;
pub mod ui;
pub mod util;

pub use error::{Result, RxplotError};
