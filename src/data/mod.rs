//! Data reading and representation.
//!
//! This module handles reading series files and plot specifications into
//! plain point lists.

mod parser;
mod plot_spec;
mod reader;
mod series;

pub use parser::parse_content;
pub use plot_spec::{PlotEntry, PlotSpec};
pub use reader::SeriesReader;
pub use series::{Point, Series, SeriesId};
