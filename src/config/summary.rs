//! Fixed-cell layout of the summary sheet

use serde::Deserialize;

/// Zero-based cell position, rows counted over non-empty lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where the two summary figures live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SummaryLayout {
    #[serde(default = "default_member_count_cell")]
    pub member_count: CellRef,
    #[serde(default = "default_floor_price_cell")]
    pub floor_price: CellRef,
}

fn default_member_count_cell() -> CellRef {
    CellRef::new(2, 1)
}

fn default_floor_price_cell() -> CellRef {
    CellRef::new(3, 1)
}

impl SummaryLayout {
    /// Number of non-empty lines required before any figure is read
    pub fn required_rows(&self) -> usize {
        self.member_count.row.max(self.floor_price.row) + 1
    }
}

impl Default for SummaryLayout {
    fn default() -> Self {
        Self {
            member_count: default_member_count_cell(),
            floor_price: default_floor_price_cell(),
        }
    }
}
