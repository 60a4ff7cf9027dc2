//! Tier table configuration structures

use crate::error::{RankError, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Upper bound of a tier's score range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxScore {
    Bounded(u32),
    #[default]
    Unbounded,
}

/// Accepted JSON shapes for `max_score`: a number, `null`, or `"unbounded"`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMaxScore {
    Bounded(u32),
    Keyword(String),
}

fn deserialize_max_score<'de, D>(deserializer: D) -> std::result::Result<MaxScore, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawMaxScore>::deserialize(deserializer)? {
        None => Ok(MaxScore::Unbounded),
        Some(RawMaxScore::Bounded(max)) => Ok(MaxScore::Bounded(max)),
        Some(RawMaxScore::Keyword(word)) if word.eq_ignore_ascii_case("unbounded") => {
            Ok(MaxScore::Unbounded)
        }
        Some(RawMaxScore::Keyword(word)) => Err(serde::de::Error::custom(format!(
            "invalid max_score: {:?} (expected a number, null or \"unbounded\")",
            word
        ))),
    }
}

/// A named score range with its display metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TierDefinition {
    pub name: String,
    #[serde(alias = "min", alias = "minScore")]
    pub min_score: u32,
    #[serde(
        default,
        alias = "max",
        alias = "maxScore",
        deserialize_with = "deserialize_max_score"
    )]
    pub max_score: MaxScore,
    #[serde(default, alias = "desc")]
    pub description: String,
    #[serde(default, alias = "img", alias = "imageRef")]
    pub image_ref: String,
}

impl TierDefinition {
    pub fn new(
        name: impl Into<String>,
        min_score: u32,
        max_score: MaxScore,
        description: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            min_score,
            max_score,
            description: description.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Whether `score` falls inside this tier's range (inclusive on both ends)
    #[inline]
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min_score
            && match self.max_score {
                MaxScore::Unbounded => true,
                MaxScore::Bounded(max) => score <= max,
            }
    }

    /// Display text for the range, e.g. "50点以上" or "40〜49点"
    pub fn range_label(&self) -> String {
        match self.max_score {
            MaxScore::Unbounded => format!("{}点以上", self.min_score),
            MaxScore::Bounded(max) => format!("{}〜{}点", self.min_score, max),
        }
    }
}

/// Ordered, immutable tier table. Declaration order is evaluation order
/// and rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<TierDefinition>")]
pub struct TierTable {
    tiers: Vec<TierDefinition>,
}

impl TierTable {
    /// Build a table, rejecting duplicate names and inverted ranges.
    /// Overlapping ranges are accepted; the first declared tier wins.
    pub fn new(tiers: Vec<TierDefinition>) -> Result<Self> {
        for (i, tier) in tiers.iter().enumerate() {
            if tier.name.trim().is_empty() {
                return Err(RankError::Configuration(format!(
                    "tier at position {} has an empty name",
                    i
                )));
            }
            if let MaxScore::Bounded(max) = tier.max_score {
                if max < tier.min_score {
                    return Err(RankError::Configuration(format!(
                        "tier {:?} has max_score {} below min_score {}",
                        tier.name, max, tier.min_score
                    )));
                }
            }
            if tiers[..i].iter().any(|t| t.name == tier.name) {
                return Err(RankError::Configuration(format!(
                    "duplicate tier name {:?}",
                    tier.name
                )));
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[TierDefinition] {
        &self.tiers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TierDefinition> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&TierDefinition> {
        self.tiers.iter().find(|t| t.name == name)
    }

    /// Index of the first tier (in declaration order) whose range contains `score`
    pub fn find_index(&self, score: u32) -> Option<usize> {
        self.tiers.iter().position(|t| t.contains(score))
    }
}

impl TryFrom<Vec<TierDefinition>> for TierTable {
    type Error = RankError;

    fn try_from(tiers: Vec<TierDefinition>) -> Result<Self> {
        TierTable::new(tiers)
    }
}

impl<'a> IntoIterator for &'a TierTable {
    type Item = &'a TierDefinition;
    type IntoIter = std::slice::Iter<'a, TierDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiers.iter()
    }
}

impl fmt::Display for MaxScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxScore::Bounded(max) => write!(f, "{}", max),
            MaxScore::Unbounded => f.write_str("unbounded"),
        }
    }
}

impl Default for TierTable {
    /// The six village ranks
    fn default() -> Self {
        Self {
            tiers: vec![
                TierDefinition::new(
                    "長老",
                    50,
                    MaxScore::Unbounded,
                    "最も偉い階級で、とにかく頭を下げなければならない。",
                    "階級-06.jpg",
                ),
                TierDefinition::new(
                    "名主",
                    40,
                    MaxScore::Bounded(49),
                    "かなりの位の高さで、いつもフカフカの椅子に座ることができる権利を保有",
                    "階級-08.jpg",
                ),
                TierDefinition::new(
                    "領主",
                    30,
                    MaxScore::Bounded(39),
                    "とても高貴な位であり、キャビアや高級和牛などをいつも食べている",
                    "階級-07.jpg",
                ),
                TierDefinition::new(
                    "しょう屋",
                    20,
                    MaxScore::Bounded(29),
                    "かなりいいものを食べられるくらいの位で豊かな感じ",
                    "階級-09.jpg",
                ),
                TierDefinition::new(
                    "村長",
                    10,
                    MaxScore::Bounded(19),
                    "村人から挨拶をされるくらい、ちょっとだけ偉い",
                    "階級-10.jpg",
                ),
                TierDefinition::new(
                    "その他",
                    1,
                    MaxScore::Bounded(9),
                    "これからのカバードビレッジの成長を支える最重要人物たち",
                    "kaikyu_placeholder.jpg",
                ),
            ],
        }
    }
}
