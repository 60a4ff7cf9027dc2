//! First-match tier classification

use crate::config::TierTable;
use crate::csv::Entrant;
use crate::rank::board::{RankingBoard, TierBucket};

/// Assign each entrant to the first declared tier whose range contains its
/// score, then sort every bucket by score descending (stable).
///
/// Entrants that fall into a gap between tiers are dropped. The tier table is
/// only borrowed, so classifying the same input twice yields equal boards.
pub fn classify(tiers: &TierTable, entrants: Vec<Entrant>) -> RankingBoard {
    let mut buckets: Vec<TierBucket> = tiers.iter().cloned().map(TierBucket::new).collect();

    for entrant in entrants {
        match tiers.find_index(entrant.score) {
            Some(i) => buckets[i].members.push(entrant),
            None => tracing::trace!(
                "{} ({}) matches no tier, dropped",
                entrant.display_name,
                entrant.score
            ),
        }
    }

    for bucket in &mut buckets {
        bucket.sort_members();
    }

    RankingBoard::from_buckets(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MaxScore, TierDefinition};

    fn two_tiers() -> TierTable {
        TierTable::new(vec![
            TierDefinition::new("A", 50, MaxScore::Unbounded, "top", "a.jpg"),
            TierDefinition::new("B", 10, MaxScore::Bounded(49), "mid", "b.jpg"),
        ])
        .unwrap()
    }

    #[test]
    fn test_boundaries_and_gap() {
        let board = classify(
            &two_tiers(),
            vec![
                Entrant::new("x", 50),
                Entrant::new("y", 10),
                Entrant::new("z", 9),
            ],
        );

        assert_eq!(board.bucket("A").unwrap().members, vec![Entrant::new("x", 50)]);
        assert_eq!(board.bucket("B").unwrap().members, vec![Entrant::new("y", 10)]);
        assert_eq!(board.total_members(), 2);
        assert!(board
            .buckets()
            .iter()
            .all(|b| b.members.iter().all(|m| m.display_name != "z")));
    }

    #[test]
    fn test_declaration_order_kept() {
        let board = classify(&TierTable::default(), vec![]);
        let names: Vec<&str> = board.tier_names().collect();

        assert_eq!(names, vec!["長老", "名主", "領主", "しょう屋", "村長", "その他"]);
        assert!(board.is_empty());
        assert!(board.bucket("村長").unwrap().is_empty());
        assert!(board.bucket("unknown").is_none());
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let board = classify(
            &two_tiers(),
            vec![
                Entrant::new("first", 20),
                Entrant::new("high", 45),
                Entrant::new("second", 20),
                Entrant::new("low", 11),
                Entrant::new("third", 20),
            ],
        );

        let order: Vec<&str> = board
            .bucket("B")
            .unwrap()
            .members
            .iter()
            .map(|m| m.display_name.as_str())
            .collect();
        assert_eq!(order, vec!["high", "first", "second", "third", "low"]);
    }

    #[test]
    fn test_overlapping_ranges_first_match_wins() {
        let tiers = TierTable::new(vec![
            TierDefinition::new("narrow", 10, MaxScore::Bounded(20), "", ""),
            TierDefinition::new("wide", 0, MaxScore::Unbounded, "", ""),
        ])
        .unwrap();
        let board = classify(
            &tiers,
            vec![Entrant::new("in", 15), Entrant::new("out", 30)],
        );

        assert_eq!(board.bucket("narrow").unwrap().members.len(), 1);
        assert_eq!(board.bucket("wide").unwrap().members[0].display_name, "out");
    }

    #[test]
    fn test_duplicates_kept_as_separate_members() {
        let board = classify(
            &two_tiers(),
            vec![Entrant::new("dup", 12), Entrant::new("dup", 12)],
        );
        assert_eq!(board.bucket("B").unwrap().members.len(), 2);
    }

    #[test]
    fn test_repeat_classification_is_idempotent() {
        let tiers = TierTable::default();
        let entrants = vec![
            Entrant::new("a", 55),
            Entrant::new("b", 3),
            Entrant::new("c", 33),
            Entrant::new("d", 0),
        ];

        let first = classify(&tiers, entrants.clone());
        let second = classify(&tiers, entrants);

        assert_eq!(first, second);
        assert_eq!(tiers, TierTable::default());
    }

    #[test]
    fn test_empty_tier_table() {
        let tiers = TierTable::new(vec![]).unwrap();
        let board = classify(&tiers, vec![Entrant::new("a", 1)]);

        assert!(board.buckets().is_empty());
        assert_eq!(board.total_members(), 0);
    }
}
