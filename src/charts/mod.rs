//! Charts module - map grid and chart construction

mod plotter;
mod us_grid;

pub use plotter::{ChartPlotter, MapResponse};
pub use us_grid::tile_for;
