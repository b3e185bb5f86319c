//! Credit balance ledger.
//!
//! Holds a single integer balance and converts leaderboard runs into deposits.
//! All values are in **credits**.
//!
//! # Components
//!
//! - [`Ledger`] - Balance owner with deposit/withdraw/adjust/award
//! - [`SharedLedger`] - Mutex-guarded handle for concurrent callers
//! - [`LedgerObserver`] - Hook receiving a [`LedgerEvent`] per operation
//! - [`TracingObserver`] - Observer that logs events with `tracing`
//! - [`RewardConfig`] - Reward formula parameters loaded from configuration
//! - [`RewardArgs`] - CLI overrides for [`RewardConfig`]
//!
//! The balance never goes negative: withdrawals beyond the available credits
//! fail with [`LedgerError::InsufficientFunds`].

pub mod args;
mod config;
mod error;
mod event;
mod ledger;
mod metrics;
mod observer;
mod shared;

pub use args::RewardArgs;
pub use config::RewardConfig;
pub use error::{LedgerError, LedgerOperation};
pub use event::LedgerEvent;
pub use ledger::Ledger;
pub use observer::{FnObserver, LedgerObserver, TracingObserver, observer_fn};
pub use shared::SharedLedger;

pub use crate::metrics::LedgerMetrics;

pub use lapcredits_bonus::{
    BonusCalculator, BonusPolicy, BonusTable, NoBonus, Rank, RankThresholds, Reward,
    RewardFormula,
};
