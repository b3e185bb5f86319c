use lapcredits_ledger::{Ledger, LedgerError};
use proptest::prelude::*;

const MAX_AMOUNT: i64 = 1_000_000_000_000;

fn ledger_with(balance: i64) -> Ledger {
    Ledger::new()
        .without_observers()
        .with_opening_balance(balance)
        .expect("non-negative opening balance")
}

proptest! {
    #[test]
    fn deposit_increases_balance(opening in 0..MAX_AMOUNT, amount in 0..MAX_AMOUNT) {
        let mut ledger = ledger_with(opening);

        prop_assert_eq!(ledger.deposit(amount), Ok(opening + amount));
        prop_assert_eq!(ledger.balance(), opening + amount);
    }

    #[test]
    fn withdraw_within_balance(opening in 0..MAX_AMOUNT, fraction in 0.0f64..=1.0) {
        let amount = (opening as f64 * fraction) as i64;
        let mut ledger = ledger_with(opening);

        prop_assert_eq!(ledger.withdraw(amount), Ok(opening - amount));
        prop_assert!(ledger.balance() >= 0);
    }

    #[test]
    fn withdraw_beyond_balance_fails(opening in 0..MAX_AMOUNT, excess in 1..MAX_AMOUNT) {
        let mut ledger = ledger_with(opening);
        let requested = opening + excess;

        prop_assert_eq!(
            ledger.withdraw(requested),
            Err(LedgerError::InsufficientFunds {
                requested: requested as u64,
                available: opening,
            })
        );
        prop_assert_eq!(ledger.balance(), opening);
    }

    #[test]
    fn negative_amounts_rejected(opening in 0..MAX_AMOUNT, amount in i64::MIN..0) {
        let mut ledger = ledger_with(opening);

        prop_assert_eq!(ledger.deposit(amount), Err(LedgerError::InvalidAmount { amount }));
        prop_assert_eq!(ledger.withdraw(amount), Err(LedgerError::InvalidAmount { amount }));
        prop_assert_eq!(ledger.balance(), opening);
    }

    #[test]
    fn adjust_matches_deposit_and_withdraw(opening in 0..MAX_AMOUNT, delta in -MAX_AMOUNT..MAX_AMOUNT) {
        let mut adjusted = ledger_with(opening);
        let mut direct = ledger_with(opening);

        let expected = if delta >= 0 {
            direct.deposit(delta)
        } else {
            direct.withdraw(-delta)
        };

        prop_assert_eq!(adjusted.adjust(delta), expected);
        prop_assert_eq!(adjusted.balance(), direct.balance());
    }
}
