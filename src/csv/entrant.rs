//! Ranking sheet rows -> entrants

use crate::config::ColumnAliases;
use crate::csv::fields::{non_empty_lines, parse_leading_int, split_fields};
use crate::error::{RankError, Result};
use ahash::AHashMap;

const BOM: char = '\u{feff}';

/// One parsed (name, score) pair from the ranking sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrant {
    pub display_name: String,
    pub score: u32,
}

impl Entrant {
    pub fn new(display_name: impl Into<String>, score: u32) -> Self {
        Self {
            display_name: display_name.into(),
            score,
        }
    }
}

/// Resolved positions of the two target columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub name: usize,
    pub score: usize,
}

impl ColumnIndices {
    fn min_fields(&self) -> usize {
        self.name.max(self.score) + 1
    }
}

/// Locate the name and score columns in a header line.
/// For each column the first configured alias present in the header wins.
pub fn resolve_columns(header: &str, aliases: &ColumnAliases) -> Result<ColumnIndices> {
    let mut positions: AHashMap<&str, usize> = AHashMap::new();
    for (i, cell) in split_fields(header).into_iter().enumerate() {
        let cell = cell.trim_start_matches(BOM).trim();
        positions.entry(cell).or_insert(i);
    }

    let find = |column: &str, candidates: &[String]| -> Result<usize> {
        candidates
            .iter()
            .map(|alias| alias.trim())
            .filter(|alias| !alias.is_empty())
            .find_map(|alias| positions.get(alias).copied())
            .ok_or_else(|| {
                RankError::Configuration(format!(
                    "{} column not found: none of {:?} in header {:?}",
                    column,
                    candidates,
                    header.trim()
                ))
            })
    };

    Ok(ColumnIndices {
        name: find("name", &aliases.name)?,
        score: find("score", &aliases.score)?,
    })
}

/// Parse one data row. `line_no` is the row's index among non-empty lines.
fn parse_row(line: &str, line_no: usize, columns: ColumnIndices) -> Result<Entrant> {
    let fields = split_fields(line);
    if fields.len() < columns.min_fields() {
        return Err(RankError::MalformedRow {
            line: line_no,
            reason: format!(
                "expected at least {} fields, found {}",
                columns.min_fields(),
                fields.len()
            ),
        });
    }

    let name = fields[columns.name];
    if name.is_empty() {
        return Err(RankError::MalformedRow {
            line: line_no,
            reason: "empty name".to_string(),
        });
    }

    let raw_score = fields[columns.score];
    let score = parse_leading_int(raw_score).ok_or_else(|| RankError::MalformedRow {
        line: line_no,
        reason: format!("unparseable score {:?}", raw_score),
    })?;

    Ok(Entrant::new(name, score))
}

/// Parse ranking sheet text into entrants, in input order.
///
/// Fails only when the header lacks one of the target columns (or there is
/// no header at all). Malformed data rows are skipped and parsing carries on.
/// Repeated names are kept as separate entrants.
pub fn parse_entrants(text: &str, aliases: &ColumnAliases) -> Result<Vec<Entrant>> {
    let lines = non_empty_lines(text);
    let (header, rows) = lines
        .split_first()
        .ok_or_else(|| RankError::Configuration("ranking sheet has no header row".to_string()))?;

    let columns = resolve_columns(header, aliases)?;

    let mut entrants = Vec::with_capacity(rows.len());
    for (offset, line) in rows.iter().enumerate() {
        match parse_row(line, offset + 1, columns) {
            Ok(entrant) => entrants.push(entrant),
            Err(err) => tracing::debug!("skipping row: {}", err),
        }
    }

    Ok(entrants)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entrants: &[Entrant]) -> Vec<&str> {
        entrants.iter().map(|e| e.display_name.as_str()).collect()
    }

    #[test]
    fn test_both_alias_spellings_resolve() {
        let aliases = ColumnAliases::default();
        let first = parse_entrants("名前,保有個数\nalice,12\n", &aliases).unwrap();
        let second = parse_entrants("氏名,保有点数\nalice,12\n", &aliases).unwrap();

        assert_eq!(first, vec![Entrant::new("alice", 12)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_columns_resolved_by_header_not_position() {
        let aliases = ColumnAliases::default();
        let text = "順位,保有点数,メモ,氏名\n1,30,x,bob\n2,5,y,carol";
        let entrants = parse_entrants(text, &aliases).unwrap();

        assert_eq!(
            entrants,
            vec![Entrant::new("bob", 30), Entrant::new("carol", 5)]
        );
    }

    #[test]
    fn test_first_alias_wins_when_both_present() {
        let aliases = ColumnAliases::default();
        let text = "名前,氏名,保有個数\nnick,formal,3";
        let entrants = parse_entrants(text, &aliases).unwrap();

        assert_eq!(entrants, vec![Entrant::new("formal", 3)]);
    }

    #[test]
    fn test_bom_on_header_ignored() {
        let aliases = ColumnAliases::default();
        let text = "\u{feff}氏名,保有点数\nalice,1";
        assert_eq!(parse_entrants(text, &aliases).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_column_is_configuration_error() {
        let aliases = ColumnAliases::default();
        let result = parse_entrants("name,count\nalice,1", &aliases);
        assert!(matches!(result, Err(RankError::Configuration(_))));

        let result = parse_entrants("氏名,other\nalice,1", &aliases);
        assert!(matches!(result, Err(RankError::Configuration(_))));
    }

    #[test]
    fn test_empty_text_is_configuration_error() {
        let aliases = ColumnAliases::default();
        assert!(matches!(
            parse_entrants("\n  \n", &aliases),
            Err(RankError::Configuration(_))
        ));
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let aliases = ColumnAliases::default();
        assert!(parse_entrants("氏名,保有点数\n", &aliases).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_rows_skipped_in_order() {
        let aliases = ColumnAliases::default();
        let text = "氏名,保有点数\n\
                    a,10\n\
                    b,lots\n\
                    c,20\n\
                    ,30\n\
                    d\n\
                    \n\
                    e,7pts\n";
        let entrants = parse_entrants(text, &aliases).unwrap();

        assert_eq!(names(&entrants), vec!["a", "c", "e"]);
        assert_eq!(entrants[2].score, 7);
    }

    #[test]
    fn test_duplicates_preserved() {
        let aliases = ColumnAliases::default();
        let text = "氏名,保有点数\nalice,5\nalice,5\nalice,9";
        let entrants = parse_entrants(text, &aliases).unwrap();

        assert_eq!(entrants.len(), 3);
        assert!(entrants.iter().all(|e| e.display_name == "alice"));
    }

    #[test]
    fn test_extra_fields_and_crlf() {
        let aliases = ColumnAliases::default();
        let text = "氏名,保有点数,備考\r\nalice,5,x,y,z\r\nbob , 6 \r\n";
        let entrants = parse_entrants(text, &aliases).unwrap();

        assert_eq!(
            entrants,
            vec![Entrant::new("alice", 5), Entrant::new("bob", 6)]
        );
    }

    #[test]
    fn test_parse_row_reports_reason() {
        let columns = ColumnIndices { name: 0, score: 1 };
        match parse_row("alice,abc", 4, columns) {
            Err(RankError::MalformedRow { line, reason }) => {
                assert_eq!(line, 4);
                assert!(reason.contains("abc"));
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }
}
