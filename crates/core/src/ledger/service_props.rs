//! Property-based tests for the ledger and recovery engines.
//!
//! - Balance conservation on the simple path
//! - Sweep bounds and debt non-negativity
//! - Automatic un-blacklisting at zero debt
//! - Loyalty points on the gross amount
//! - History prepend ordering
//! - Sequential sweeps re-evaluating against updated debt

use proptest::prelude::*;
use rust_decimal::Decimal;

use paymoment_shared::Currency;

use super::service::LedgerService;
use super::types::{Transaction, TxDirection};
use crate::account::{Account, DebtInfo};

/// Strategy to generate positive amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|kobo| Decimal::new(kobo, 2))
}

/// Strategy to generate a currency.
fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::Ngn),
        Just(Currency::Usd),
        Just(Currency::Gbp),
    ]
}

fn credit(amount: Decimal) -> Transaction {
    Transaction::new(TxDirection::Credit, amount, "Incoming", "Transfer")
}

fn debit(amount: Decimal) -> Transaction {
    Transaction::new(TxDirection::Debit, amount, "Outgoing", "Transfer")
}

fn debtor(owed: Decimal) -> Account {
    let mut account = Account::new();
    account.debt_info = DebtInfo {
        is_blacklisted: true,
        total_owed: owed,
        owed_to_id: "victim_001".to_string(),
        owed_to_name: "Ibrahim Dangote".to_string(),
    };
    account
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A credit of A in currency C increases balances[C] by exactly A for
    /// a non-blacklisted account.
    #[test]
    fn prop_simple_credit_conserves_balance(
        amount in positive_amount(),
        currency in currency_strategy(),
        starting in positive_amount(),
    ) {
        let mut account = Account::new();
        *account.balance_entry(currency) = starting;

        LedgerService::process_transaction(&mut account, credit(amount), currency).unwrap();

        prop_assert_eq!(account.balance(currency), starting + amount);
    }

    /// A debit of A decreases balances[C] by exactly A when funds suffice.
    #[test]
    fn prop_debit_conserves_balance(
        amount in positive_amount(),
        currency in currency_strategy(),
        headroom in positive_amount(),
    ) {
        let starting = amount + headroom;
        let mut account = Account::new();
        *account.balance_entry(currency) = starting;

        LedgerService::process_transaction(&mut account, debit(amount), currency).unwrap();

        prop_assert_eq!(account.balance(currency), headroom);
    }

    /// Sweep bounds: sweep = min(A, D), post-debt = D - sweep >= 0, and the
    /// balance increase equals A - sweep.
    #[test]
    fn prop_sweep_bounds(
        amount in positive_amount(),
        owed in positive_amount(),
    ) {
        let mut account = debtor(owed);

        let outcome = LedgerService::process_transaction(
            &mut account,
            credit(amount),
            Currency::Ngn,
        ).unwrap();

        let sweep = outcome.sweep.unwrap();
        prop_assert_eq!(sweep.swept, amount.min(owed));
        prop_assert!(sweep.swept <= amount);
        prop_assert!(sweep.swept <= owed);
        prop_assert!(account.debt_info.total_owed >= Decimal::ZERO);
        prop_assert_eq!(account.debt_info.total_owed, owed - sweep.swept);
        prop_assert_eq!(account.balance(Currency::Ngn), amount - sweep.swept);
    }

    /// The blacklist is lifted in the same operation exactly when the debt
    /// reaches zero.
    #[test]
    fn prop_unblacklist_iff_debt_cleared(
        amount in positive_amount(),
        owed in positive_amount(),
    ) {
        let mut account = debtor(owed);

        LedgerService::process_transaction(&mut account, credit(amount), Currency::Ngn).unwrap();

        prop_assert_eq!(
            account.debt_info.is_blacklisted,
            account.debt_info.total_owed > Decimal::ZERO
        );
        if amount >= owed {
            prop_assert!(!account.debt_info.is_blacklisted);
        } else {
            prop_assert!(account.debt_info.is_blacklisted);
        }
    }

    /// Points accrue as floor(A / 1000) on the gross amount, independent of
    /// direction and diversion.
    #[test]
    fn prop_points_on_gross_amount(
        amount in positive_amount(),
        owed in positive_amount(),
    ) {
        let expected = LedgerService::points_for(amount);

        // Swept credit.
        let mut swept = debtor(owed);
        let outcome = LedgerService::process_transaction(
            &mut swept,
            credit(amount),
            Currency::Ngn,
        ).unwrap();
        prop_assert_eq!(outcome.points_earned, expected);
        prop_assert_eq!(swept.moment_points, expected);

        // Plain debit of the same gross amount.
        let mut plain = Account::new();
        *plain.balance_entry(Currency::Ngn) = amount;
        let outcome = LedgerService::process_transaction(
            &mut plain,
            debit(amount),
            Currency::Ngn,
        ).unwrap();
        prop_assert_eq!(outcome.points_earned, expected);
    }

    /// A swept credit prepends exactly two records (recovery first, then
    /// the original credit); a simple transaction prepends exactly one.
    #[test]
    fn prop_history_prepend_ordering(
        amount in positive_amount(),
        owed in positive_amount(),
    ) {
        let mut account = debtor(owed);
        let incoming = credit(amount);
        let incoming_id = incoming.id;

        let before = account.transactions.len();
        LedgerService::process_transaction(&mut account, incoming, Currency::Ngn).unwrap();

        prop_assert_eq!(account.transactions.len(), before + 2);
        prop_assert_eq!(account.transactions[0].direction, TxDirection::Debit);
        prop_assert_eq!(account.transactions[1].id, incoming_id);

        // Debt is now partially or fully cleared; a foreign credit always
        // takes the simple path.
        let before = account.transactions.len();
        LedgerService::process_transaction(&mut account, credit(amount), Currency::Usd).unwrap();
        prop_assert_eq!(account.transactions.len(), before + 1);
    }

    /// Two identical credits re-evaluate the trigger against the updated
    /// debt; total swept never exceeds the original debt.
    #[test]
    fn prop_sequential_sweeps_use_current_debt(
        amount in positive_amount(),
        owed in positive_amount(),
    ) {
        let mut account = debtor(owed);

        let first = LedgerService::process_transaction(
            &mut account,
            credit(amount),
            Currency::Ngn,
        ).unwrap();
        let second = LedgerService::process_transaction(
            &mut account,
            credit(amount),
            Currency::Ngn,
        ).unwrap();

        let swept_first = first.sweep.map(|s| s.swept).unwrap_or_default();
        let swept_second = second.sweep.map(|s| s.swept).unwrap_or_default();

        prop_assert!(swept_first + swept_second <= owed);
        prop_assert_eq!(
            account.balance(Currency::Ngn),
            amount + amount - swept_first - swept_second
        );
        prop_assert_eq!(
            account.debt_info.total_owed,
            owed - swept_first - swept_second
        );
    }
}
