//! Dataset Loader Module
//! Reads the headerless (state, year, population) CSV from a path or URL
//! into a validated PopulationTable using Polars.

use crate::data::table::{PopulationRecord, PopulationTable};
use polars::prelude::*;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("failed to fetch `{url}`: {source}")]
    Fetch { url: String, source: reqwest::Error },
    #[error("failed to stage downloaded data: {0}")]
    Stage(#[from] std::io::Error),
    #[error("expected 3 columns (state, year, population), found {0}")]
    ColumnCount(usize),
    #[error("row {row}: missing {field}")]
    EmptyField { row: usize, field: &'static str },
    #[error("row {row}: invalid {field} `{text}`")]
    InvalidField {
        row: usize,
        field: &'static str,
        text: String,
    },
}

/// Loads the population dataset. Any malformed or unreachable source is
/// fatal; there is no partial table.
pub struct DataLoader;

impl DataLoader {
    /// Load the population table from a filesystem path or an http(s) URL.
    pub fn load(source: &str) -> Result<PopulationTable, LoadError> {
        let started = Instant::now();

        let df = if source.starts_with("http://") || source.starts_with("https://") {
            // Keep the temp file alive until the frame is collected.
            let staged = Self::fetch_to_temp(source)?;
            Self::read_frame(staged.path())?
        } else {
            Self::read_frame(Path::new(source))?
        };

        let table = Self::table_from_frame(&df)?;
        info!(
            source,
            rows = table.len(),
            elapsed = ?started.elapsed(),
            "population data loaded"
        );
        Ok(table)
    }

    /// Download a URL source into a temp file Polars can scan.
    fn fetch_to_temp(url: &str) -> Result<tempfile::NamedTempFile, LoadError> {
        let fetch_err = |source| LoadError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(fetch_err)?;
        let bytes = response.bytes().map_err(fetch_err)?;

        let mut staged = tempfile::NamedTempFile::new()?;
        staged.write_all(&bytes)?;
        Ok(staged)
    }

    /// Parse the headerless CSV into a raw DataFrame.
    fn read_frame(path: &Path) -> Result<DataFrame, LoadError> {
        let df = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;
        Ok(df)
    }

    /// Convert the raw frame into typed records, validating shape and fields.
    fn table_from_frame(df: &DataFrame) -> Result<PopulationTable, LoadError> {
        let columns = df.get_columns();
        if columns.len() != 3 {
            return Err(LoadError::ColumnCount(columns.len()));
        }

        // Columns are positional; cast everything to strings and parse per
        // row so a bad cell reports its row and content.
        let states = columns[0].cast(&DataType::String)?;
        let states = states.str()?;
        let years = columns[1].cast(&DataType::String)?;
        let years = years.str()?;
        let populations = columns[2].cast(&DataType::String)?;
        let populations = populations.str()?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let state = states
                .get(i)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(LoadError::EmptyField {
                    row: i + 1,
                    field: "state",
                })?;
            let year: u32 = Self::parse_field(years.get(i), i, "year")?;
            if year == 0 {
                return Err(LoadError::InvalidField {
                    row: i + 1,
                    field: "year",
                    text: year.to_string(),
                });
            }
            let population: u64 = Self::parse_field(populations.get(i), i, "population")?;

            records.push(PopulationRecord {
                state: state.to_string(),
                year,
                population,
            });
        }

        Ok(PopulationTable::new(records))
    }

    fn parse_field<T: std::str::FromStr>(
        text: Option<&str>,
        row: usize,
        field: &'static str,
    ) -> Result<T, LoadError> {
        let text = text
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(LoadError::EmptyField { row: row + 1, field })?;
        text.parse().map_err(|_| LoadError::InvalidField {
            row: row + 1,
            field,
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn load(file: &tempfile::NamedTempFile) -> Result<PopulationTable, LoadError> {
        DataLoader::load(file.path().to_str().unwrap())
    }

    #[test]
    fn test_load_basic() {
        let file = write_csv("AL,1990,4040587\nCA,1990,29760021\nCA,2020,39500000\n");
        let table = load(&file).unwrap();

        assert_eq!(table.len(), 3);
        let first = &table.records()[0];
        assert_eq!(first.state, "AL");
        assert_eq!(first.year, 1990);
        assert_eq!(first.population, 4_040_587);
    }

    #[test]
    fn test_load_preserves_source_order() {
        let file = write_csv("NY,2020,20201249\nAL,1990,4040587\nNY,1990,17990455\n");
        let table = load(&file).unwrap();

        let states: Vec<&str> = table.records().iter().map(|r| r.state.as_str()).collect();
        assert_eq!(states, vec!["NY", "AL", "NY"]);
    }

    #[test]
    fn test_load_trims_padded_fields() {
        let file = write_csv("AL, 1990, 4040587\n CA ,2020,39500000\n");
        let table = load(&file).unwrap();

        assert_eq!(table.records()[0].year, 1990);
        assert_eq!(table.records()[1].state, "CA");
    }

    #[test]
    fn test_load_twice_is_deterministic() {
        let file = write_csv("AL,1990,4040587\nCA,2020,39500000\n");
        let first = load(&file).unwrap();
        let second = load(&file).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_rejects_non_numeric_population() {
        let file = write_csv("AL,1990,4040587\nCA,2020,many\n");
        assert!(matches!(
            load(&file),
            Err(LoadError::InvalidField {
                row: 2,
                field: "population",
                ..
            })
        ));
    }

    #[test]
    fn test_load_rejects_negative_population() {
        let file = write_csv("AL,1990,-5\n");
        assert!(matches!(
            load(&file),
            Err(LoadError::InvalidField {
                field: "population",
                ..
            })
        ));
    }

    #[test]
    fn test_load_rejects_fractional_year() {
        let file = write_csv("AL,1990.5,100\n");
        assert!(matches!(
            load(&file),
            Err(LoadError::InvalidField { field: "year", .. })
        ));
    }

    #[test]
    fn test_load_rejects_zero_year() {
        let file = write_csv("AL,0,100\n");
        assert!(matches!(
            load(&file),
            Err(LoadError::InvalidField { field: "year", .. })
        ));
    }

    #[test]
    fn test_load_rejects_wrong_column_count() {
        let two = write_csv("AL,1990\nCA,2020\n");
        assert!(matches!(load(&two), Err(LoadError::ColumnCount(2))));

        let four = write_csv("AL,1990,100,extra\nCA,2020,200,extra\n");
        assert!(matches!(load(&four), Err(LoadError::ColumnCount(4))));
    }

    #[test]
    fn test_load_rejects_empty_state() {
        let file = write_csv(",1990,100\n");
        assert!(matches!(
            load(&file),
            Err(LoadError::EmptyField { field: "state", .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = DataLoader::load("/no/such/population.csv");
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }
}
