//! Thread-safe ledger handle.

use std::sync::Arc;

use lapcredits_bonus::{BonusCalculator, BonusPolicy, RankThresholds};
use parking_lot::Mutex;

use crate::{Ledger, LedgerError};

/// Handle to a mutex-guarded [`Ledger`]. Cheap to clone.
///
/// Each operation holds the lock for its whole duration.
pub struct SharedLedger<P = BonusCalculator> {
    inner: Arc<Mutex<Ledger<P>>>,
}

impl<P> Clone for SharedLedger<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> From<Ledger<P>> for SharedLedger<P> {
    fn from(ledger: Ledger<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }
}

impl<P: BonusPolicy> SharedLedger<P> {
    pub fn new(ledger: Ledger<P>) -> Self {
        Self::from(ledger)
    }

    pub fn balance(&self) -> i64 {
        self.inner.lock().balance()
    }

    pub fn deposit(&self, amount: i64) -> Result<i64, LedgerError> {
        self.inner.lock().deposit(amount)
    }

    pub fn withdraw(&self, amount: i64) -> Result<i64, LedgerError> {
        self.inner.lock().withdraw(amount)
    }

    pub fn adjust(&self, delta: i64) -> Result<i64, LedgerError> {
        self.inner.lock().adjust(delta)
    }

    pub fn award(
        &self,
        elapsed: f64,
        thresholds: Option<&RankThresholds>,
    ) -> Result<i64, LedgerError> {
        self.inner.lock().award(elapsed, thresholds)
    }

    pub fn award_with_base(
        &self,
        elapsed: f64,
        base_credits: i64,
        thresholds: Option<&RankThresholds>,
    ) -> Result<i64, LedgerError> {
        self.inner
            .lock()
            .award_with_base(elapsed, base_credits, thresholds)
    }

    /// Run several operations under one lock.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&mut Ledger<P>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
