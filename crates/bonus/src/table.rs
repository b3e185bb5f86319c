//! Rank bonus percentages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_BONUS_PERCENT, DEFAULT_RANK_BONUSES, Rank};

/// A single rank bonus, used for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankBonus {
    pub rank: Rank,
    pub percent: u32,
}

/// Immutable mapping from rank to bonus percentage.
///
/// Several tables can coexist, e.g. one per competition or season. Ranks
/// missing from the table fall back to `default_percent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusTable {
    percentages: BTreeMap<Rank, u32>,
    default_percent: u32,
}

impl BonusTable {
    /// Build a table from `(rank, percent)` entries. Later duplicates win.
    pub fn new(entries: impl IntoIterator<Item = RankBonus>, default_percent: u32) -> Self {
        Self {
            percentages: entries
                .into_iter()
                .map(|entry| (entry.rank, entry.percent))
                .collect(),
            default_percent,
        }
    }

    /// Percentage for a rank, or the default if the rank has none.
    pub fn percentage(&self, rank: Rank) -> u32 {
        self.percentages
            .get(&rank)
            .copied()
            .unwrap_or(self.default_percent)
    }

    /// Percentage applied when no rank is reached.
    pub fn default_percent(&self) -> u32 {
        self.default_percent
    }

    /// Iterate entries in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = RankBonus> + '_ {
        self.percentages
            .iter()
            .map(|(rank, percent)| RankBonus {
                rank: *rank,
                percent: *percent,
            })
    }
}

impl Default for BonusTable {
    fn default() -> Self {
        let entries = DEFAULT_RANK_BONUSES
            .iter()
            .filter_map(|(rank, percent)| {
                Rank::new(*rank).map(|rank| RankBonus {
                    rank,
                    percent: *percent,
                })
            });
        Self::new(entries, DEFAULT_BONUS_PERCENT)
    }
}
