//! Header alias configuration for the ranking sheet

use serde::Deserialize;

/// Accepted header spellings for the name and score columns.
/// Aliases are tried in order; the first one present in the header wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnAliases {
    #[serde(default = "default_name_aliases")]
    pub name: Vec<String>,
    #[serde(default = "default_score_aliases")]
    pub score: Vec<String>,
}

fn default_name_aliases() -> Vec<String> {
    vec!["氏名".to_string(), "名前".to_string()]
}

fn default_score_aliases() -> Vec<String> {
    vec!["保有点数".to_string(), "保有個数".to_string()]
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            name: default_name_aliases(),
            score: default_score_aliases(),
        }
    }
}
