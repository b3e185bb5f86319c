//! Observers for ledger events.
//!
//! The ledger does not log on its own. Every operation is reported to the
//! registered observers; [`TracingObserver`] is the default one.

use tracing::{debug, info, warn};

use crate::LedgerEvent;

/// Receives an event for every ledger operation.
#[auto_impl::auto_impl(&, Box, Arc)]
pub trait LedgerObserver: Send + Sync {
    fn on_event(&self, event: &LedgerEvent);
}

/// Observer that logs events with `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LedgerObserver for TracingObserver {
    fn on_event(&self, event: &LedgerEvent) {
        match event {
            LedgerEvent::Deposited { amount, balance } => {
                debug!(%amount, %balance, "Credits deposited");
            }
            LedgerEvent::Withdrawn { amount, balance } => {
                debug!(%amount, %balance, "Credits withdrawn");
            }
            LedgerEvent::Awarded {
                elapsed,
                reward,
                balance,
            } => {
                info!(
                    %elapsed,
                    multiplier = reward.multiplier,
                    earned = reward.earned,
                    bonus = reward.bonus,
                    amount = reward.amount,
                    %balance,
                    "Credits awarded"
                );
            }
            LedgerEvent::Rejected { operation, error } => {
                warn!(%operation, %error, "Ledger operation rejected");
            }
        }
    }
}

/// Observer backed by a closure. Create with [`observer_fn`].
#[derive(Clone)]
pub struct FnObserver<F>(F);

impl<F> LedgerObserver for FnObserver<F>
where
    F: Fn(&LedgerEvent) + Send + Sync,
{
    fn on_event(&self, event: &LedgerEvent) {
        (self.0)(event)
    }
}

/// Wrap a closure as a [`LedgerObserver`].
pub fn observer_fn<F>(f: F) -> FnObserver<F>
where
    F: Fn(&LedgerEvent) + Send + Sync,
{
    FnObserver(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_fn_observer() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let observer = observer_fn(move |event: &LedgerEvent| sink.lock().push(event.clone()));

        let event = LedgerEvent::Deposited {
            amount: 5,
            balance: 5,
        };
        observer.on_event(&event);

        assert_eq!(*seen.lock(), vec![event]);
    }

    #[test]
    fn test_tracing_observer_without_subscriber() {
        // No subscriber installed: logging must be a silent no-op
        TracingObserver.on_event(&LedgerEvent::Withdrawn {
            amount: 1,
            balance: 0,
        });
    }

    #[test]
    fn test_arc_observer() {
        let observer: Arc<dyn LedgerObserver> = Arc::new(TracingObserver);
        observer.on_event(&LedgerEvent::Deposited {
            amount: 1,
            balance: 1,
        });
    }
}
