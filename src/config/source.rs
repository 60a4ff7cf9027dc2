//! Published sheet addresses

use serde::Deserialize;

/// Ranking sheet (gid=0)
pub const DEFAULT_RANKING_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTw7lXTJViUKW_BaGSR0KMku33fn7zpnusbQhVKa4o6Hb2Ahk_l2StGfAiFS_TbKpUg9ftOXAminMSN/pub?gid=0&single=true&output=csv";

/// Holder count / floor price sheet (gid=589878966)
pub const DEFAULT_SUMMARY_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTw7lXTJViUKW_BaGSR0KMku33fn7zpnusbQhVKa4o6Hb2Ahk_l2StGfAiFS_TbKpUg9ftOXAminMSN/pub?gid=589878966&single=true&output=csv";

/// CSV export addresses for both pipelines
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_ranking_url")]
    pub ranking_url: String,
    #[serde(default = "default_summary_url")]
    pub summary_url: String,
}

fn default_ranking_url() -> String {
    DEFAULT_RANKING_CSV_URL.to_string()
}

fn default_summary_url() -> String {
    DEFAULT_SUMMARY_CSV_URL.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            ranking_url: default_ranking_url(),
            summary_url: default_summary_url(),
        }
    }
}
