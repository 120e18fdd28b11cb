//! Fixture tier metadata.
//!
//! The three tiers are sized to exercise different import paths: small is
//! a warm-up, medium adds formula parsing pressure, large stresses bulk
//! cell throughput across multiple sheets.

/// Small tier: one "Data" sheet, 100 rows x 50 cols, no formulas.
pub const SMALL_ROWS: usize = 100;
pub const SMALL_COLS: usize = 50;

/// Medium tier: "Sales" sheet with a header row plus 25,000 data rows of
/// 8 columns, and a 6-cell "Summary" sheet of cross-sheet formulas.
pub const MEDIUM_DATA_ROWS: usize = 25_000;
pub const SALES_COLS: usize = 8;
pub const SUMMARY_CELLS: usize = 6;

/// Large tier: 4 "Data_N" sheets, each a header row plus 5,000 data rows
/// of 50 columns. 4 x 5,001 x 50 = 1,000,200 cells, the headers pushing
/// it slightly past the advertised million. The rectangle is kept as-is
/// so benchmark numbers stay comparable across versions.
pub const LARGE_SHEETS: usize = 4;
pub const LARGE_DATA_ROWS: usize = 5_000;
pub const LARGE_COLS: usize = 50;

/// The three fixture sizes, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Small,
    Medium,
    Large,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Small, Tier::Medium, Tier::Large];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Small => "small",
            Tier::Medium => "medium",
            Tier::Large => "large",
        }
    }

    /// Output file name within the fixtures directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Tier::Small => "small.xlsx",
            Tier::Medium => "medium.xlsx",
            Tier::Large => "large.xlsx",
        }
    }

    /// Short size description used in progress output.
    pub fn describe(&self) -> &'static str {
        match self {
            Tier::Small => "~5k cells",
            Tier::Medium => "~200k cells with formulas",
            Tier::Large => "~1M cells",
        }
    }

    /// Exact number of populated cells the tier's workbook contains,
    /// counting headers and formula cells.
    pub fn expected_cell_count(&self) -> usize {
        match self {
            Tier::Small => SMALL_ROWS * SMALL_COLS,
            Tier::Medium => (MEDIUM_DATA_ROWS + 1) * SALES_COLS + SUMMARY_CELLS,
            Tier::Large => LARGE_SHEETS * (LARGE_DATA_ROWS + 1) * LARGE_COLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_cell_counts() {
        assert_eq!(Tier::Small.expected_cell_count(), 5_000);
        assert_eq!(Tier::Medium.expected_cell_count(), 200_014);
        assert_eq!(Tier::Large.expected_cell_count(), 1_000_200);
    }

    #[test]
    fn test_generation_order() {
        let names: Vec<&str> = Tier::ALL.iter().map(|t| t.file_name()).collect();
        assert_eq!(names, ["small.xlsx", "medium.xlsx", "large.xlsx"]);
    }
}
