//! Ranking and summary pipelines
//!
//! The two pipelines never share state. Each one contains its own failures:
//! a fetch error leaves that half of the update empty and the other half
//! untouched.

use crate::config::BoardConfig;
use crate::csv::parse_entrants;
use crate::loader::CsvSource;
use crate::rank::{classify, RankingBoard};
use crate::summary::{extract_summary, SummaryFigures};

/// What a load produced. `None` means "skip this render step".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardUpdate {
    pub ranking: Option<RankingBoard>,
    pub summary: Option<SummaryFigures>,
}

/// Parse and classify ranking sheet text.
///
/// A header without the expected columns is logged and treated as a sheet
/// with no entrants, so every tier renders empty.
pub fn rank_csv(text: &str, config: &BoardConfig) -> RankingBoard {
    let entrants = parse_entrants(text, &config.columns).unwrap_or_else(|err| {
        tracing::warn!("ranking sheet unusable: {}", err);
        Vec::new()
    });
    classify(&config.tiers, entrants)
}

/// Fetch and rank the ranking sheet; `None` when the fetch failed
pub async fn load_ranking<S: CsvSource>(source: &S, config: &BoardConfig) -> Option<RankingBoard> {
    match source.fetch(&config.sources.ranking_url).await {
        Ok(text) => Some(rank_csv(&text, config)),
        Err(err) => {
            tracing::warn!("ranking pipeline skipped: {}", err);
            None
        }
    }
}

/// Fetch and read the summary sheet; `None` when the fetch failed
pub async fn load_summary<S: CsvSource>(
    source: &S,
    config: &BoardConfig,
) -> Option<SummaryFigures> {
    match source.fetch(&config.sources.summary_url).await {
        Ok(text) => Some(extract_summary(&text, &config.summary)),
        Err(err) => {
            tracing::warn!("summary pipeline skipped: {}", err);
            None
        }
    }
}

/// Run both pipelines concurrently
pub async fn load_board<S: CsvSource>(source: &S, config: &BoardConfig) -> BoardUpdate {
    let (ranking, summary) = tokio::join!(
        load_ranking(source, config),
        load_summary(source, config),
    );
    BoardUpdate { ranking, summary }
}
