//! Single-balance credit ledger.

use std::fmt;

use lapcredits_bonus::{BonusCalculator, BonusPolicy, RankThresholds, RewardFormula};

use crate::{
    LedgerError, LedgerEvent, LedgerMetrics, LedgerObserver, LedgerOperation, TracingObserver,
};

/// Credit ledger owning one balance.
///
/// Mutation requires `&mut self`; wrap in [`SharedLedger`](crate::SharedLedger)
/// for access from several threads.
///
/// # Balance Semantics
///
/// - Deposits and withdrawals take non-negative amounts
/// - The balance never drops below zero
/// - Failed operations leave the balance unchanged
pub struct Ledger<P = BonusCalculator> {
    balance: i64,
    formula: RewardFormula<P>,
    observers: Vec<Box<dyn LedgerObserver>>,
    metrics: LedgerMetrics,
}

impl Ledger {
    /// Create an empty ledger with the default reward formula.
    pub fn new() -> Self {
        Self::with_formula(RewardFormula::default())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: BonusPolicy> Ledger<P> {
    /// Create an empty ledger with the given reward formula.
    ///
    /// A [`TracingObserver`] is registered by default.
    pub fn with_formula(formula: RewardFormula<P>) -> Self {
        Self {
            balance: 0,
            formula,
            observers: vec![Box::new(TracingObserver)],
            metrics: LedgerMetrics::default(),
        }
    }

    /// Start from a non-negative opening balance.
    pub fn with_opening_balance(mut self, balance: i64) -> Result<Self, LedgerError> {
        if balance < 0 {
            return Err(LedgerError::InvalidAmount { amount: balance });
        }
        self.balance = balance;
        self.metrics.balance.set(balance as f64);
        Ok(self)
    }

    /// Register an additional observer.
    pub fn with_observer(mut self, observer: impl LedgerObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Drop all observers, including the default tracing observer.
    pub fn without_observers(mut self) -> Self {
        self.observers.clear();
        self
    }

    /// Get a reference to the reward formula.
    pub fn formula(&self) -> &RewardFormula<P> {
        &self.formula
    }

    /// Get the current balance.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Deposit credits, returning the new balance.
    pub fn deposit(&mut self, amount: i64) -> Result<i64, LedgerError> {
        match self.credit(amount) {
            Ok(balance) => Ok(self.deposited(amount, balance)),
            Err(err) => Err(self.reject(LedgerOperation::Deposit, err)),
        }
    }

    /// Withdraw credits, returning the new balance.
    ///
    /// Fails with [`LedgerError::InsufficientFunds`] if `amount` exceeds the
    /// balance.
    pub fn withdraw(&mut self, amount: i64) -> Result<i64, LedgerError> {
        match self.debit(amount) {
            Ok(balance) => {
                self.metrics.record_withdrawal(balance);
                self.emit(&LedgerEvent::Withdrawn { amount, balance });
                Ok(balance)
            }
            Err(err) => Err(self.reject(LedgerOperation::Withdraw, err)),
        }
    }

    /// Deposit (`delta >= 0`) or withdraw (`delta < 0`).
    pub fn adjust(&mut self, delta: i64) -> Result<i64, LedgerError> {
        if delta >= 0 {
            return self.deposit(delta);
        }
        match delta.checked_neg() {
            Some(amount) => self.withdraw(amount),
            // |i64::MIN| exceeds any balance
            None => {
                let err = LedgerError::InsufficientFunds {
                    requested: delta.unsigned_abs(),
                    available: self.balance,
                };
                Err(self.reject(LedgerOperation::Withdraw, err))
            }
        }
    }

    /// Reward a run with the formula's default base credits.
    ///
    /// Returns the amount deposited.
    pub fn award(
        &mut self,
        elapsed: f64,
        thresholds: Option<&RankThresholds>,
    ) -> Result<i64, LedgerError> {
        self.award_with_base(elapsed, self.formula.base_credits(), thresholds)
    }

    /// Reward a run with explicit base credits.
    ///
    /// Returns the amount deposited.
    pub fn award_with_base(
        &mut self,
        elapsed: f64,
        base_credits: i64,
        thresholds: Option<&RankThresholds>,
    ) -> Result<i64, LedgerError> {
        let reward = match self.formula.reward(elapsed, base_credits, thresholds) {
            Ok(reward) => reward,
            Err(err) => return Err(self.reject(LedgerOperation::Award, err.into())),
        };

        let balance = match self.credit(reward.amount) {
            Ok(balance) => self.deposited(reward.amount, balance),
            Err(err) => return Err(self.reject(LedgerOperation::Award, err)),
        };
        self.metrics.record_award(reward.amount);
        self.emit(&LedgerEvent::Awarded {
            elapsed,
            reward,
            balance,
        });
        Ok(reward.amount)
    }

    fn credit(&mut self, amount: i64) -> Result<i64, LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount { amount });
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow {
                balance: self.balance,
                amount,
            })?;
        self.balance = balance;
        Ok(balance)
    }

    fn deposited(&self, amount: i64, balance: i64) -> i64 {
        self.metrics.record_deposit(balance);
        self.emit(&LedgerEvent::Deposited { amount, balance });
        balance
    }

    fn debit(&mut self, amount: i64) -> Result<i64, LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount { amount });
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount.unsigned_abs(),
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    fn reject(&self, operation: LedgerOperation, error: LedgerError) -> LedgerError {
        self.metrics.record_rejection();
        self.emit(&LedgerEvent::Rejected {
            operation,
            error: error.clone(),
        });
        error
    }

    fn emit(&self, event: &LedgerEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Ledger<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("balance", &self.balance)
            .field("formula", &self.formula)
            .field("observers", &self.observers.len())
            .finish()
    }
}
