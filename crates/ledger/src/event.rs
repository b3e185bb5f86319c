//! Ledger events delivered to observers.

use lapcredits_bonus::Reward;

use crate::{LedgerError, LedgerOperation};

/// One event per ledger operation.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    /// Credits were deposited.
    Deposited { amount: i64, balance: i64 },

    /// Credits were withdrawn.
    Withdrawn { amount: i64, balance: i64 },

    /// A run was rewarded. Follows the matching `Deposited` event.
    Awarded {
        elapsed: f64,
        reward: Reward,
        balance: i64,
    },

    /// An operation failed validation; the balance is unchanged.
    Rejected {
        operation: LedgerOperation,
        error: LedgerError,
    },
}

impl LedgerEvent {
    /// Balance after the event, if it changed it.
    pub fn balance(&self) -> Option<i64> {
        match self {
            Self::Deposited { balance, .. }
            | Self::Withdrawn { balance, .. }
            | Self::Awarded { balance, .. } => Some(*balance),
            Self::Rejected { .. } => None,
        }
    }
}
