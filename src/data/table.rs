//! Population Table Module
//! In-memory representation of the (state, year, population) dataset.

/// One row of the dataset: a state's population count for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationRecord {
    /// Two-letter state code, e.g. "CA".
    pub state: String,
    /// Calendar year of the measurement. Always positive.
    pub year: u32,
    /// Population count. Never negative.
    pub population: u64,
}

/// The full dataset, in source row order.
///
/// Built once at startup and never mutated afterwards; every query is a
/// fresh scan over the rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationTable {
    records: Vec<PopulationRecord>,
}

impl PopulationTable {
    pub fn new(records: Vec<PopulationRecord>) -> Self {
        Self { records }
    }

    /// All rows in source order.
    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years, newest first (the order the year selector shows them).
    pub fn years(&self) -> Vec<u32> {
        let mut years: Vec<u32> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }

    /// Most recent year in the dataset, if any.
    pub fn latest_year(&self) -> Option<u32> {
        self.records.iter().map(|r| r.year).max()
    }

    /// Distinct state codes, sorted.
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self.records.iter().map(|r| r.state.clone()).collect();
        states.sort_unstable();
        states.dedup();
        states
    }
}

/// Format a count with thousand separators ("39500000" -> "39,500,000").
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    digits
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                format!("{},", c)
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> PopulationTable {
        PopulationTable::new(vec![
            PopulationRecord {
                state: "CA".to_string(),
                year: 2020,
                population: 39_500_000,
            },
            PopulationRecord {
                state: "AL".to_string(),
                year: 1990,
                population: 4_040_587,
            },
            PopulationRecord {
                state: "CA".to_string(),
                year: 1990,
                population: 29_760_021,
            },
            PopulationRecord {
                state: "AL".to_string(),
                year: 2020,
                population: 5_024_279,
            },
        ])
    }

    #[test]
    fn test_years_newest_first_unique() {
        assert_eq!(sample_table().years(), vec![2020, 1990]);
    }

    #[test]
    fn test_latest_year() {
        assert_eq!(sample_table().latest_year(), Some(2020));
        assert_eq!(PopulationTable::default().latest_year(), None);
    }

    #[test]
    fn test_states_sorted_unique() {
        assert_eq!(sample_table().states(), vec!["AL", "CA"]);
    }

    #[test]
    fn test_records_preserve_order() {
        let table = sample_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.records()[0].state, "CA");
        assert_eq!(table.records()[1].state, "AL");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(4_040_587), "4,040,587");
        assert_eq!(format_count(39_500_000), "39,500,000");
    }
}
