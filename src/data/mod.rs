//! Data module - dataset loading and table types

mod loader;
mod table;

pub use loader::{DataLoader, LoadError};
pub use table::{format_count, PopulationRecord, PopulationTable};
