//! Fixed-cell extraction of the summary figures

use crate::config::{CellRef, SummaryLayout};
use crate::csv::{non_empty_lines, split_fields};
use crate::error::{RankError, Result};

/// Holder count and floor price, kept as raw cell text.
/// `None` means "leave whatever is displayed now", not "show a placeholder".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryFigures {
    pub member_count: Option<String>,
    pub floor_price: Option<String>,
}

impl SummaryFigures {
    pub fn is_empty(&self) -> bool {
        self.member_count.is_none() && self.floor_price.is_none()
    }
}

fn read_cell(lines: &[&str], cell: CellRef) -> Option<String> {
    let line = lines.get(cell.row)?;
    split_fields(line)
        .get(cell.col)
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
}

/// Extract both figures, failing with `InsufficientData` when the sheet has
/// fewer non-empty lines than the layout needs. Each figure is read on its
/// own, so one missing cell never blanks the other.
pub fn try_extract_summary(text: &str, layout: &SummaryLayout) -> Result<SummaryFigures> {
    let lines = non_empty_lines(text);
    let expected = layout.required_rows();
    if lines.len() < expected {
        return Err(RankError::InsufficientData {
            expected,
            found: lines.len(),
        });
    }

    Ok(SummaryFigures {
        member_count: read_cell(&lines, layout.member_count),
        floor_price: read_cell(&lines, layout.floor_price),
    })
}

/// Like `try_extract_summary`, but a short sheet yields both figures absent
pub fn extract_summary(text: &str, layout: &SummaryLayout) -> SummaryFigures {
    try_extract_summary(text, layout).unwrap_or_else(|err| {
        tracing::debug!("summary figures unavailable: {}", err);
        SummaryFigures::default()
    })
}
