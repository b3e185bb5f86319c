//! Leaderboard ranks and qualifying time thresholds.

use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BonusError;

/// Leaderboard placement. Rank 1 is the best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rank(NonZeroU32);

impl Rank {
    /// The best rank.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Returns `None` for rank 0.
    pub const fn new(rank: u32) -> Option<Self> {
        match NonZeroU32::new(rank) {
            Some(rank) => Some(Self(rank)),
            None => None,
        }
    }

    /// Get the rank number.
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Rank {
    type Error = BonusError;

    fn try_from(rank: u32) -> Result<Self, Self::Error> {
        Self::new(rank).ok_or(BonusError::InvalidRank(rank))
    }
}

impl From<Rank> for u32 {
    fn from(rank: Rank) -> Self {
        rank.get()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single leaderboard entry, used for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankThreshold {
    /// Leaderboard placement.
    pub rank: Rank,
    /// Maximum elapsed time that still earns this rank.
    pub threshold: f64,
}

/// Ordered mapping from rank to qualifying time.
///
/// Finishing at or under a rank's threshold earns that rank. Ranks are
/// evaluated in ascending order, so the best rank the time qualifies for wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RankThreshold>", into = "Vec<RankThreshold>")]
pub struct RankThresholds {
    thresholds: BTreeMap<Rank, f64>,
}

impl RankThresholds {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a raw `rank = threshold` pair.
    pub fn with_rank(mut self, rank: u32, threshold: f64) -> Result<Self, BonusError> {
        self.insert(Rank::try_from(rank)?, threshold)?;
        Ok(self)
    }

    /// Insert a threshold, returning the one it replaced.
    pub fn insert(&mut self, rank: Rank, threshold: f64) -> Result<Option<f64>, BonusError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(BonusError::InvalidThreshold {
                rank: rank.get(),
                threshold,
            });
        }
        Ok(self.thresholds.insert(rank, threshold))
    }

    /// Insert a threshold for a rank that is not listed yet.
    fn insert_new(&mut self, rank: Rank, threshold: f64) -> Result<(), BonusError> {
        if self.thresholds.contains_key(&rank) {
            return Err(BonusError::DuplicateRank(rank.get()));
        }
        self.insert(rank, threshold).map(|_| ())
    }

    /// Get the threshold for a rank.
    pub fn get(&self, rank: Rank) -> Option<f64> {
        self.thresholds.get(&rank).copied()
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Iterate entries in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, f64)> + '_ {
        self.thresholds.iter().map(|(rank, threshold)| (*rank, *threshold))
    }

    /// The best rank whose threshold is at or above `elapsed`.
    pub fn qualifying_rank(&self, elapsed: f64) -> Option<Rank> {
        self.iter()
            .find(|(_, threshold)| elapsed <= *threshold)
            .map(|(rank, _)| rank)
    }
}

impl TryFrom<Vec<RankThreshold>> for RankThresholds {
    type Error = BonusError;

    fn try_from(entries: Vec<RankThreshold>) -> Result<Self, Self::Error> {
        let mut thresholds = Self::new();
        for entry in entries {
            thresholds.insert_new(entry.rank, entry.threshold)?;
        }
        Ok(thresholds)
    }
}

impl From<RankThresholds> for Vec<RankThreshold> {
    fn from(thresholds: RankThresholds) -> Self {
        thresholds
            .iter()
            .map(|(rank, threshold)| RankThreshold { rank, threshold })
            .collect()
    }
}

/// Parses `"1=50,2=100,3=150"`. Whitespace around entries is ignored and
/// each rank may appear once.
impl FromStr for RankThresholds {
    type Err = BonusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut thresholds = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (rank, threshold) = entry
                .split_once('=')
                .ok_or_else(|| BonusError::Parse(entry.to_string()))?;
            let rank: u32 = rank
                .trim()
                .parse()
                .map_err(|_| BonusError::Parse(entry.to_string()))?;
            let threshold: f64 = threshold
                .trim()
                .parse()
                .map_err(|_| BonusError::Parse(entry.to_string()))?;
            thresholds.insert_new(Rank::try_from(rank)?, threshold)?;
        }
        Ok(thresholds)
    }
}
