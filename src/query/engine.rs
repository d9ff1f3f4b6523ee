//! Query Engine Module
//! Pure, read-only filters over the loaded PopulationTable.

use crate::data::PopulationTable;

/// Stateless filters over the population table. Each call scans the rows
/// and allocates a fresh result; nothing is cached or indexed.
pub struct QueryEngine;

impl QueryEngine {
    /// All (state, population) pairs for one year, in source order.
    /// Empty when the year is absent from the dataset.
    pub fn by_year(table: &PopulationTable, year: u32) -> Vec<(String, u64)> {
        table
            .records()
            .iter()
            .filter(|r| r.year == year)
            .map(|r| (r.state.clone(), r.population))
            .collect()
    }

    /// All (year, population) pairs for one state, oldest year first.
    /// Empty when the state is absent from the dataset.
    pub fn by_state(table: &PopulationTable, state: &str) -> Vec<(u32, u64)> {
        let mut history: Vec<(u32, u64)> = table
            .records()
            .iter()
            .filter(|r| r.state == state)
            .map(|r| (r.year, r.population))
            .collect();
        history.sort_by_key(|&(year, _)| year);
        history
    }

    /// The population recorded for one (state, year), if any. First match
    /// wins should the source carry a duplicate pair.
    pub fn lookup(table: &PopulationTable, state: &str, year: u32) -> Option<u64> {
        table
            .records()
            .iter()
            .find(|r| r.state == state && r.year == year)
            .map(|r| r.population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PopulationRecord;

    fn record(state: &str, year: u32, population: u64) -> PopulationRecord {
        PopulationRecord {
            state: state.to_string(),
            year,
            population,
        }
    }

    /// Years deliberately out of order per state to exercise re-sorting.
    fn sample_table() -> PopulationTable {
        PopulationTable::new(vec![
            record("CA", 2020, 39_500_000),
            record("AL", 1990, 4_040_587),
            record("CA", 1990, 29_760_021),
            record("NY", 2020, 20_201_249),
            record("CA", 2010, 37_253_956),
            record("AL", 2020, 5_024_279),
        ])
    }

    #[test]
    fn test_by_year_returns_exactly_matching_pairs() {
        let table = sample_table();
        let pairs = QueryEngine::by_year(&table, 2020);

        assert_eq!(
            pairs,
            vec![
                ("CA".to_string(), 39_500_000),
                ("NY".to_string(), 20_201_249),
                ("AL".to_string(), 5_024_279),
            ]
        );
    }

    #[test]
    fn test_by_year_absent_is_empty() {
        assert!(QueryEngine::by_year(&sample_table(), 1850).is_empty());
    }

    #[test]
    fn test_by_state_sorted_by_ascending_year() {
        let table = sample_table();
        let history = QueryEngine::by_state(&table, "CA");

        assert_eq!(
            history,
            vec![
                (1990, 29_760_021),
                (2010, 37_253_956),
                (2020, 39_500_000),
            ]
        );
    }

    #[test]
    fn test_by_state_absent_is_empty() {
        assert!(QueryEngine::by_state(&sample_table(), "ZZ").is_empty());
    }

    #[test]
    fn test_lookup_present() {
        assert_eq!(
            QueryEngine::lookup(&sample_table(), "AL", 1990),
            Some(4_040_587)
        );
    }

    #[test]
    fn test_lookup_absent() {
        let table = sample_table();
        assert_eq!(QueryEngine::lookup(&table, "AL", 1800), None);
        assert_eq!(QueryEngine::lookup(&table, "ZZ", 1990), None);
    }
}
