//! Ranking board: one bucket per declared tier

use crate::config::TierDefinition;
use crate::csv::Entrant;
use ahash::AHashMap;

/// The entrants assigned to one tier, best score first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierBucket {
    pub definition: TierDefinition,
    pub members: Vec<Entrant>,
}

impl TierBucket {
    pub fn new(definition: TierDefinition) -> Self {
        Self {
            definition,
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn range_label(&self) -> String {
        self.definition.range_label()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Order members by score descending. The sort is stable, so equal
    /// scores keep their input order.
    pub(crate) fn sort_members(&mut self) {
        self.members.sort_by(|a, b| b.score.cmp(&a.score));
    }
}

/// Classified result: buckets in declaration order plus a name index
#[derive(Debug, Clone)]
pub struct RankingBoard {
    buckets: Vec<TierBucket>,
    index: AHashMap<String, usize>,
}

impl RankingBoard {
    pub(crate) fn from_buckets(buckets: Vec<TierBucket>) -> Self {
        let index = buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (b.definition.name.clone(), i))
            .collect();
        Self { buckets, index }
    }

    /// Buckets in declaration order
    pub fn buckets(&self) -> &[TierBucket] {
        &self.buckets
    }

    pub fn bucket(&self, name: &str) -> Option<&TierBucket> {
        self.index.get(name).map(|&i| &self.buckets[i])
    }

    pub fn tier_names(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(TierBucket::name)
    }

    pub fn total_members(&self) -> usize {
        self.buckets.iter().map(|b| b.members.len()).sum()
    }

    /// True when no entrant landed in any tier
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(TierBucket::is_empty)
    }

    pub fn into_buckets(self) -> Vec<TierBucket> {
        self.buckets
    }
}

impl PartialEq for RankingBoard {
    fn eq(&self, other: &Self) -> bool {
        // index is derived from buckets
        self.buckets == other.buckets
    }
}

impl Eq for RankingBoard {}
