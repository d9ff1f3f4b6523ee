//! US Tile Grid Module
//! Fixed tile-cartogram layout for the choropleth: one cell per state
//! (plus DC) on the conventional 12x8 newsroom grid. Row 0 is the top of
//! the map.

/// One map tile: a state's code, display name, and grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTile {
    pub code: &'static str,
    pub name: &'static str,
    pub col: u8,
    pub row: u8,
}

pub const GRID_COLS: u8 = 12;
pub const GRID_ROWS: u8 = 8;

const fn tile(code: &'static str, name: &'static str, col: u8, row: u8) -> StateTile {
    StateTile {
        code,
        name,
        col,
        row,
    }
}

/// The 51 tiles in reading order (top row first).
pub const US_TILE_GRID: &[StateTile] = &[
    tile("AK", "Alaska", 0, 0),
    tile("ME", "Maine", 11, 0),
    tile("VT", "Vermont", 10, 1),
    tile("NH", "New Hampshire", 11, 1),
    tile("WA", "Washington", 1, 2),
    tile("ID", "Idaho", 2, 2),
    tile("MT", "Montana", 3, 2),
    tile("ND", "North Dakota", 4, 2),
    tile("MN", "Minnesota", 5, 2),
    tile("IL", "Illinois", 6, 2),
    tile("WI", "Wisconsin", 7, 2),
    tile("MI", "Michigan", 8, 2),
    tile("NY", "New York", 9, 2),
    tile("RI", "Rhode Island", 10, 2),
    tile("MA", "Massachusetts", 11, 2),
    tile("OR", "Oregon", 1, 3),
    tile("NV", "Nevada", 2, 3),
    tile("WY", "Wyoming", 3, 3),
    tile("SD", "South Dakota", 4, 3),
    tile("IA", "Iowa", 5, 3),
    tile("IN", "Indiana", 6, 3),
    tile("OH", "Ohio", 7, 3),
    tile("PA", "Pennsylvania", 8, 3),
    tile("NJ", "New Jersey", 9, 3),
    tile("CT", "Connecticut", 10, 3),
    tile("CA", "California", 1, 4),
    tile("UT", "Utah", 2, 4),
    tile("CO", "Colorado", 3, 4),
    tile("NE", "Nebraska", 4, 4),
    tile("MO", "Missouri", 5, 4),
    tile("KY", "Kentucky", 6, 4),
    tile("WV", "West Virginia", 7, 4),
    tile("VA", "Virginia", 8, 4),
    tile("MD", "Maryland", 9, 4),
    tile("DE", "Delaware", 10, 4),
    tile("AZ", "Arizona", 2, 5),
    tile("NM", "New Mexico", 3, 5),
    tile("KS", "Kansas", 4, 5),
    tile("AR", "Arkansas", 5, 5),
    tile("TN", "Tennessee", 6, 5),
    tile("NC", "North Carolina", 7, 5),
    tile("SC", "South Carolina", 8, 5),
    tile("DC", "District of Columbia", 9, 5),
    tile("OK", "Oklahoma", 4, 6),
    tile("LA", "Louisiana", 5, 6),
    tile("MS", "Mississippi", 6, 6),
    tile("AL", "Alabama", 7, 6),
    tile("GA", "Georgia", 8, 6),
    tile("HI", "Hawaii", 0, 7),
    tile("TX", "Texas", 4, 7),
    tile("FL", "Florida", 9, 7),
];

/// Tile for a state code, if the code is on the map.
pub fn tile_for(code: &str) -> Option<&'static StateTile> {
    US_TILE_GRID.iter().find(|t| t.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_grid_has_fifty_states_plus_dc() {
        assert_eq!(US_TILE_GRID.len(), 51);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<&str> = US_TILE_GRID.iter().map(|t| t.code).collect();
        assert_eq!(codes.len(), US_TILE_GRID.len());
    }

    #[test]
    fn test_cells_are_unique() {
        let cells: HashSet<(u8, u8)> = US_TILE_GRID.iter().map(|t| (t.col, t.row)).collect();
        assert_eq!(cells.len(), US_TILE_GRID.len());
    }

    #[test]
    fn test_cells_are_within_bounds() {
        for t in US_TILE_GRID {
            assert!(t.col < GRID_COLS, "{} col out of bounds", t.code);
            assert!(t.row < GRID_ROWS, "{} row out of bounds", t.code);
        }
    }

    #[test]
    fn test_tile_lookup() {
        let ca = tile_for("CA").unwrap();
        assert_eq!(ca.name, "California");
        assert!(tile_for("ZZ").is_none());
    }

    #[test]
    fn test_map_corners() {
        // Alaska upper-left, Maine upper-right, Hawaii lower-left.
        assert_eq!(tile_for("AK").unwrap().row, 0);
        assert_eq!(tile_for("AK").unwrap().col, 0);
        assert_eq!(tile_for("ME").unwrap().col, GRID_COLS - 1);
        assert_eq!(tile_for("HI").unwrap().row, GRID_ROWS - 1);
    }
}
