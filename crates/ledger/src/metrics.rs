//! Ledger Metrics

use metrics::{Counter, Gauge};

/// Ledger Metrics
#[derive(Clone, Debug)]
pub struct LedgerMetrics {
    /// Number of successful deposits
    pub(crate) deposits_total: Counter,
    /// Number of successful withdrawals
    pub(crate) withdrawals_total: Counter,
    /// Number of rewarded runs
    pub(crate) awards_total: Counter,
    /// Credits handed out by awards
    pub(crate) awarded_credits_total: Counter,
    /// Number of rejected operations
    pub(crate) rejections_total: Counter,
    /// Current balance
    pub(crate) balance: Gauge,
}

impl Default for LedgerMetrics {
    fn default() -> Self {
        Self {
            deposits_total: metrics::counter!("ledger.deposits_total"),
            withdrawals_total: metrics::counter!("ledger.withdrawals_total"),
            awards_total: metrics::counter!("ledger.awards_total"),
            awarded_credits_total: metrics::counter!("ledger.awarded_credits_total"),
            rejections_total: metrics::counter!("ledger.rejections_total"),
            balance: metrics::gauge!("ledger.balance"),
        }
    }
}

impl LedgerMetrics {
    pub(crate) fn record_deposit(&self, balance: i64) {
        self.deposits_total.increment(1);
        self.balance.set(balance as f64);
    }

    pub(crate) fn record_withdrawal(&self, balance: i64) {
        self.withdrawals_total.increment(1);
        self.balance.set(balance as f64);
    }

    pub(crate) fn record_award(&self, amount: i64) {
        self.awards_total.increment(1);
        self.awarded_credits_total.increment(amount.unsigned_abs());
    }

    pub(crate) fn record_rejection(&self) {
        self.rejections_total.increment(1);
    }
}
