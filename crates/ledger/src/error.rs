//! Ledger error types.

use lapcredits_bonus::RewardError;

/// Ledger operation that produced an event or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LedgerOperation {
    Deposit,
    Withdraw,
    Award,
}

/// Errors that can occur during ledger operations.
///
/// Validation always precedes mutation, so the balance is unchanged whenever
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    /// Amount was negative.
    #[error("amount must be non-negative, got {amount}")]
    InvalidAmount { amount: i64 },

    /// Withdrawal exceeds the current balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: i64 },

    /// Elapsed time was zero, negative or not a number.
    #[error("elapsed time must be positive, got {elapsed}")]
    InvalidDuration { elapsed: f64 },

    /// Balance would exceed `i64::MAX`.
    #[error("deposit of {amount} overflows balance {balance}")]
    Overflow { balance: i64, amount: i64 },
}

impl From<RewardError> for LedgerError {
    fn from(err: RewardError) -> Self {
        match err {
            RewardError::InvalidDuration { elapsed } => Self::InvalidDuration { elapsed },
            RewardError::NegativeBase { base } => Self::InvalidAmount { amount: base },
        }
    }
}
