//! Leaderboard rank bonuses and the time-to-credit reward formula.
//!
//! All amounts are in **credits**, an abstract integer point unit. Elapsed
//! times and rank thresholds share one unit (seconds by convention).
//!
//! # Formula
//!
//! ```text
//! multiplier = max(1, floor(base_multiplier / elapsed))
//! earned     = base_credits * multiplier
//! bonus      = floor(earned * rank_percent / 100)
//! reward     = earned + bonus
//! ```
//!
//! # Components
//!
//! - [`RankThresholds`] - Caller-supplied leaderboard: rank to qualifying time
//! - [`BonusTable`] - Immutable rank to bonus percentage configuration
//! - [`BonusCalculator`] - Maps an elapsed time to a bonus through a table
//! - [`RewardFormula`] - Converts elapsed time into an awarded amount

mod calculator;
mod constants;
mod error;
mod formula;
mod rank;
mod table;

pub use calculator::{BonusCalculator, BonusPolicy, NoBonus, percent_of};
pub use constants::*;
pub use error::{BonusError, RewardError};
pub use formula::{Reward, RewardFormula, earned_credits, time_multiplier};
pub use rank::{Rank, RankThreshold, RankThresholds};
pub use table::{BonusTable, RankBonus};
