//! Rank bonus calculation.
//!
//! An elapsed time is placed on a leaderboard, the resulting rank is looked up
//! in a [`BonusTable`] and the percentage is applied to a credit amount:
//!
//! ```text
//! bonus = floor(amount * percent / 100)
//! ```

use tracing::trace;

use crate::{BonusTable, Rank, RankThresholds};

/// Trait for computing rank bonuses.
#[auto_impl::auto_impl(&, Box, Arc)]
pub trait BonusPolicy: Send + Sync {
    /// Bonus percentage earned by `elapsed` on the given leaderboard.
    fn bonus_percentage(&self, thresholds: &RankThresholds, elapsed: f64) -> u32;

    /// Bonus credits earned on top of `amount`.
    fn apply_bonus(&self, thresholds: &RankThresholds, elapsed: f64, amount: i64) -> i64 {
        percent_of(amount, self.bonus_percentage(thresholds, elapsed))
    }
}

/// `floor(amount * percent / 100)`, saturating at the `i64` bounds.
pub fn percent_of(amount: i64, percent: u32) -> i64 {
    let scaled = i128::from(amount) * i128::from(percent);
    scaled
        .div_euclid(100)
        .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Table-driven bonus calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BonusCalculator {
    table: BonusTable,
}

impl BonusCalculator {
    /// Create a calculator over the given table.
    pub fn new(table: BonusTable) -> Self {
        Self { table }
    }

    /// Get the bonus table.
    pub fn table(&self) -> &BonusTable {
        &self.table
    }

    /// The best rank `elapsed` qualifies for.
    pub fn qualifying_rank(&self, thresholds: &RankThresholds, elapsed: f64) -> Option<Rank> {
        thresholds.qualifying_rank(elapsed)
    }

    /// Percentage for the best qualifying rank, or the table default.
    pub fn rank_bonus_percentage(&self, thresholds: &RankThresholds, elapsed: f64) -> u32 {
        match self.qualifying_rank(thresholds, elapsed) {
            Some(rank) => {
                let percent = self.table.percentage(rank);
                trace!(%rank, elapsed, percent, "Time qualifies for rank");
                percent
            }
            None => self.table.default_percent(),
        }
    }

    /// Bonus credits for `amount`.
    pub fn apply_bonus(&self, thresholds: &RankThresholds, elapsed: f64, amount: i64) -> i64 {
        percent_of(amount, self.rank_bonus_percentage(thresholds, elapsed))
    }
}

impl BonusPolicy for BonusCalculator {
    fn bonus_percentage(&self, thresholds: &RankThresholds, elapsed: f64) -> u32 {
        self.rank_bonus_percentage(thresholds, elapsed)
    }
}

/// No-op policy for rewards without leaderboard bonuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoBonus;

impl BonusPolicy for NoBonus {
    fn bonus_percentage(&self, _thresholds: &RankThresholds, _elapsed: f64) -> u32 {
        0
    }
}
