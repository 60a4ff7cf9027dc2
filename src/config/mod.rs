//! Configuration module for the ranking board
//!
//! Everything here is immutable once loaded. Classification only ever borrows
//! a `BoardConfig`, so the same config can serve any number of calls.

mod columns;
mod source;
mod summary;
mod tier;

pub use columns::*;
pub use source::*;
pub use summary::*;
pub use tier::*;

use crate::error::{RankError, Result};
use serde::Deserialize;

/// Complete board configuration. Every section falls back to its default,
/// so `{}` is a valid document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub tiers: TierTable,
    #[serde(default)]
    pub columns: ColumnAliases,
    #[serde(default)]
    pub summary: SummaryLayout,
    #[serde(default)]
    pub sources: SourceConfig,
}

impl BoardConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig =
            serde_json::from_str(json).map_err(|e| RankError::Deserialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parts serde cannot: alias lists must be usable
    pub fn validate(&self) -> Result<()> {
        if self.columns.name.iter().all(|a| a.trim().is_empty()) {
            return Err(RankError::Configuration(
                "no usable name column alias configured".to_string(),
            ));
        }
        if self.columns.score.iter().all(|a| a.trim().is_empty()) {
            return Err(RankError::Configuration(
                "no usable score column alias configured".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Python dict deserialization
// ============================================================================

#[cfg(feature = "python")]
mod python {
    use super::*;
    use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods, PyList, PyListMethods};
    use pyo3::{Bound, PyAny, PyResult};

    /// Helper to get attribute from either dict or object
    fn get_attr<'py>(obj: &Bound<'py, PyAny>, name: &str) -> PyResult<Bound<'py, PyAny>> {
        if let Ok(dict) = obj.downcast::<PyDict>() {
            dict.get_item(name)?
                .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
        } else {
            obj.getattr(name)
        }
    }

    /// Helper to get optional attribute from either dict or object
    fn get_attr_opt<'py>(obj: &Bound<'py, PyAny>, name: &str) -> Option<Bound<'py, PyAny>> {
        let value = if let Ok(dict) = obj.downcast::<PyDict>() {
            dict.get_item(name).ok().flatten()
        } else {
            obj.getattr(name).ok()
        };
        value.filter(|v| !v.is_none())
    }

    /// Look up the first of several accepted field names
    fn get_attr_any<'py>(obj: &Bound<'py, PyAny>, names: &[&str]) -> Option<Bound<'py, PyAny>> {
        names.iter().find_map(|name| get_attr_opt(obj, name))
    }

    /// Deserialize a board config from a Python dict.
    /// Expected format: {"tiers": [...], "columns": {...}, "summary": {...}, "sources": {...}}
    pub fn deserialize_board_config(config: &Bound<'_, PyDict>) -> PyResult<BoardConfig> {
        let mut board = BoardConfig::default();
        let config = config.as_any();

        if let Some(tiers_obj) = get_attr_opt(config, "tiers") {
            let list: Bound<'_, PyList> = tiers_obj.extract()?;
            let mut tiers = Vec::with_capacity(list.len());
            for item in list.iter() {
                tiers.push(extract_tier(&item)?);
            }
            board.tiers = TierTable::new(tiers)?;
        }

        if let Some(columns_obj) = get_attr_opt(config, "columns") {
            if let Some(name) = get_attr_opt(&columns_obj, "name") {
                board.columns.name = name.extract()?;
            }
            if let Some(score) = get_attr_opt(&columns_obj, "score") {
                board.columns.score = score.extract()?;
            }
        }

        if let Some(summary_obj) = get_attr_opt(config, "summary") {
            if let Some(cell) = get_attr_opt(&summary_obj, "member_count") {
                board.summary.member_count = extract_cell(&cell)?;
            }
            if let Some(cell) = get_attr_opt(&summary_obj, "floor_price") {
                board.summary.floor_price = extract_cell(&cell)?;
            }
        }

        if let Some(sources_obj) = get_attr_opt(config, "sources") {
            if let Some(url) = get_attr_opt(&sources_obj, "ranking_url") {
                board.sources.ranking_url = url.extract()?;
            }
            if let Some(url) = get_attr_opt(&sources_obj, "summary_url") {
                board.sources.summary_url = url.extract()?;
            }
        }

        board.validate()?;
        Ok(board)
    }

    fn extract_tier(obj: &Bound<'_, PyAny>) -> PyResult<TierDefinition> {
        let name: String = get_attr(obj, "name")?.extract()?;
        let min_score: u32 = get_attr_any(obj, &["min_score", "min", "minScore"])
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err("min_score"))?
            .extract()?;
        // Missing or None means open-ended
        let max_score = match get_attr_any(obj, &["max_score", "max", "maxScore"]) {
            None => MaxScore::Unbounded,
            Some(value) => {
                if let Ok(max) = value.extract::<u32>() {
                    MaxScore::Bounded(max)
                } else {
                    let word: String = value.extract()?;
                    if word.eq_ignore_ascii_case("unbounded") {
                        MaxScore::Unbounded
                    } else {
                        return Err(RankError::Deserialization(format!(
                            "invalid max_score for tier {:?}: {:?}",
                            name, word
                        ))
                        .into());
                    }
                }
            }
        };
        let description: String = get_attr_any(obj, &["description", "desc"])
            .and_then(|v| v.extract().ok())
            .unwrap_or_default();
        let image_ref: String = get_attr_any(obj, &["image_ref", "img", "imageRef"])
            .and_then(|v| v.extract().ok())
            .unwrap_or_default();

        Ok(TierDefinition {
            name,
            min_score,
            max_score,
            description,
            image_ref,
        })
    }

    // Accepts {"row": r, "col": c} or a (row, col) pair
    fn extract_cell(obj: &Bound<'_, PyAny>) -> PyResult<CellRef> {
        if let Ok((row, col)) = obj.extract::<(usize, usize)>() {
            return Ok(CellRef::new(row, col));
        }
        let row: usize = get_attr(obj, "row")?.extract()?;
        let col: usize = get_attr(obj, "col")?.extract()?;
        Ok(CellRef::new(row, col))
    }
}

#[cfg(feature = "python")]
pub use python::deserialize_board_config;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = BoardConfig::from_json("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.tiers.len(), 6);
        assert_eq!(config.summary.required_rows(), 4);
    }

    #[test]
    fn test_partial_document() {
        let json = r#"{
            "tiers": [
                {"name": "A", "min_score": 50, "max_score": "unbounded"},
                {"name": "B", "min_score": 10, "max_score": 49}
            ],
            "columns": {"name": ["Player"]},
            "summary": {"floor_price": {"row": 5, "col": 2}}
        }"#;
        let config = BoardConfig::from_json(json).unwrap();

        assert_eq!(config.tiers.len(), 2);
        assert_eq!(config.columns.name, vec!["Player".to_string()]);
        // Untouched alias list keeps its default
        assert_eq!(config.columns.score, ColumnAliases::default().score);
        assert_eq!(config.summary.member_count, CellRef::new(2, 1));
        assert_eq!(config.summary.floor_price, CellRef::new(5, 2));
        assert_eq!(config.summary.required_rows(), 6);
        assert_eq!(config.sources, SourceConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let result = BoardConfig::from_json("{not json");
        assert!(matches!(result, Err(RankError::Deserialization(_))));
    }

    #[test]
    fn test_invalid_tier_table_rejected() {
        let json = r#"{"tiers": [{"name": "A", "min_score": 10, "max_score": 5}]}"#;
        assert!(matches!(
            BoardConfig::from_json(json),
            Err(RankError::Deserialization(_))
        ));
    }

    #[test]
    fn test_blank_aliases_rejected() {
        let json = r#"{"columns": {"score": ["", "  "]}}"#;
        assert!(matches!(
            BoardConfig::from_json(json),
            Err(RankError::Configuration(_))
        ));
    }
}
