//! Ledger engine: applies one transaction to one currency balance.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use paymoment_shared::{Currency, TransactionId};

use super::error::LedgerError;
use super::recovery::{evaluate_sweep, should_sweep};
use super::types::{Transaction, TxDirection};
use crate::account::Account;

/// One loyalty point is earned per 1,000 units of transaction amount,
/// rounded down.
const POINTS_UNIT: Decimal = Decimal::ONE_THOUSAND;

/// Title category used on synthesized recovery records.
const RECOVERY_CATEGORY: &str = "Debt Settlement";

/// Details of a debt sweep performed while applying a credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Amount diverted to debt repayment.
    pub swept: Decimal,
    /// Remainder applied to the spendable balance.
    pub credited: Decimal,
    /// Debt left after the sweep.
    pub remaining_debt: Decimal,
    /// True when the sweep extinguished the debt and lifted the blacklist.
    pub debt_cleared: bool,
    /// Id of the synthesized recovery record.
    pub recovery_tx_id: TransactionId,
}

/// Result of processing a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Loyalty points earned, computed on the gross transaction amount.
    pub points_earned: u64,
    /// Present when the credit was intercepted by the recovery engine.
    pub sweep: Option<SweepReport>,
}

/// Ledger service applying transactions to the account aggregate.
///
/// Stateless; every operation is a single synchronous state transition on
/// the owned aggregate. Persistence and notifications are concerns of the
/// caller.
pub struct LedgerService;

impl LedgerService {
    /// Applies one transaction to one currency balance, grows the history
    /// and awards loyalty points, as a single atomic state update.
    ///
    /// Debits require sufficient funds. Credits in NGN are routed through
    /// the debt recovery engine first: if the account is blacklisted with
    /// outstanding debt, part or all of the credit is diverted to repayment,
    /// a recovery record is synthesized, and the blacklist is lifted the
    /// instant the debt reaches zero.
    ///
    /// Loyalty points accrue as `floor(amount / 1000)` on the gross amount,
    /// regardless of direction or diversion.
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveAmount` for a zero or negative amount, and
    /// `InsufficientFunds` when a debit exceeds the available balance.
    pub fn process_transaction(
        account: &mut Account,
        tx: Transaction,
        currency: Currency,
    ) -> Result<ProcessOutcome, LedgerError> {
        if tx.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(tx.amount));
        }

        let points_earned = Self::points_for(tx.amount);

        let sweep = match tx.direction {
            TxDirection::Debit => {
                let available = account.balance(currency);
                if available < tx.amount {
                    return Err(LedgerError::InsufficientFunds {
                        currency,
                        available,
                        requested: tx.amount,
                    });
                }
                *account.balance_entry(currency) -= tx.amount;
                account.transactions.push_front(tx);
                None
            }
            TxDirection::Credit => Self::apply_credit(account, tx, currency),
        };

        account.moment_points += points_earned;

        Ok(ProcessOutcome {
            points_earned,
            sweep,
        })
    }

    /// Applies a credit, routing it through the recovery engine first.
    fn apply_credit(
        account: &mut Account,
        tx: Transaction,
        currency: Currency,
    ) -> Option<SweepReport> {
        if !should_sweep(currency, &account.debt_info) {
            // Simple path: full credit, one history entry.
            *account.balance_entry(currency) += tx.amount;
            account.transactions.push_front(tx);
            return None;
        }

        let decision = evaluate_sweep(tx.amount, account.debt_info.total_owed);

        *account.balance_entry(currency) += decision.credited;
        account.debt_info.total_owed = decision.remaining_debt;
        account.debt_info.is_blacklisted = decision.blacklisted_after;

        let recovery_tx = Transaction::new(
            TxDirection::Debit,
            decision.sweep_amount,
            format!("Auto-Recovery for {}", account.debt_info.owed_to_name),
            RECOVERY_CATEGORY,
        );
        let recovery_tx_id = recovery_tx.id;

        debug!(
            swept = %decision.sweep_amount,
            remaining = %decision.remaining_debt,
            "incoming credit swept for debt recovery"
        );

        // Both records are retained for audit: the recovery debit ends up
        // ahead of the gross credit in the newest-first history.
        account.transactions.push_front(tx);
        account.transactions.push_front(recovery_tx);

        Some(SweepReport {
            swept: decision.sweep_amount,
            credited: decision.credited,
            remaining_debt: decision.remaining_debt,
            debt_cleared: !decision.blacklisted_after,
            recovery_tx_id,
        })
    }

    /// Loyalty points for a gross transaction amount.
    #[must_use]
    pub fn points_for(amount: Decimal) -> u64 {
        (amount / POINTS_UNIT).floor().to_u64().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::DebtInfo;
    use crate::ledger::types::TxStatus;
    use rust_decimal_macros::dec;

    fn account_with_ngn(balance: Decimal) -> Account {
        let mut account = Account::new();
        *account.balance_entry(Currency::Ngn) = balance;
        account
    }

    fn debtor(balance: Decimal, owed: Decimal) -> Account {
        let mut account = account_with_ngn(balance);
        account.debt_info = DebtInfo {
            is_blacklisted: true,
            total_owed: owed,
            owed_to_id: "victim_001".to_string(),
            owed_to_name: "Ibrahim Dangote".to_string(),
        };
        account
    }

    fn credit(amount: Decimal) -> Transaction {
        Transaction::new(TxDirection::Credit, amount, "Transfer from Fola", "Transfer")
    }

    fn debit(amount: Decimal) -> Transaction {
        Transaction::new(TxDirection::Debit, amount, "Ikeja Electric", "Utility")
    }

    #[test]
    fn test_debit_decreases_balance_and_appends_once() {
        let mut account = account_with_ngn(dec!(1000));

        let outcome =
            LedgerService::process_transaction(&mut account, debit(dec!(200)), Currency::Ngn)
                .unwrap();

        assert_eq!(account.balance(Currency::Ngn), dec!(800));
        assert_eq!(account.transactions.len(), 1);
        assert_eq!(outcome.points_earned, 0); // floor(200 / 1000)
        assert!(outcome.sweep.is_none());
        assert_eq!(account.moment_points, 0);
    }

    #[test]
    fn test_simple_credit_applies_in_full() {
        let mut account = account_with_ngn(Decimal::ZERO);

        let outcome =
            LedgerService::process_transaction(&mut account, credit(dec!(50000)), Currency::Ngn)
                .unwrap();

        assert_eq!(account.balance(Currency::Ngn), dec!(50000));
        assert_eq!(account.transactions.len(), 1);
        assert_eq!(outcome.points_earned, 50);
        assert_eq!(account.moment_points, 50);
    }

    #[test]
    fn test_credit_to_unopened_currency_opens_entry() {
        let mut account = Account::default();

        LedgerService::process_transaction(&mut account, credit(dec!(45.50)), Currency::Usd)
            .unwrap();

        assert_eq!(account.balance(Currency::Usd), dec!(45.50));
    }

    #[test]
    fn test_debit_with_insufficient_funds_is_rejected() {
        let mut account = account_with_ngn(dec!(100));

        let err =
            LedgerService::process_transaction(&mut account, debit(dec!(200)), Currency::Ngn)
                .unwrap_err();

        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        // Nothing moved: no balance change, no history entry, no points.
        assert_eq!(account.balance(Currency::Ngn), dec!(100));
        assert!(account.transactions.is_empty());
        assert_eq!(account.moment_points, 0);
    }

    #[test]
    fn test_non_positive_amount_is_rejected() {
        let mut account = account_with_ngn(dec!(1000));

        let err =
            LedgerService::process_transaction(&mut account, credit(Decimal::ZERO), Currency::Ngn)
                .unwrap_err();
        assert!(matches!(err, LedgerError::NonPositiveAmount(_)));

        let err =
            LedgerService::process_transaction(&mut account, debit(dec!(-5)), Currency::Ngn)
                .unwrap_err();
        assert!(matches!(err, LedgerError::NonPositiveAmount(_)));
    }

    #[test]
    fn test_partial_sweep_diverts_whole_credit() {
        let mut account = debtor(Decimal::ZERO, dec!(5000));

        let outcome =
            LedgerService::process_transaction(&mut account, credit(dec!(3000)), Currency::Ngn)
                .unwrap();

        let sweep = outcome.sweep.unwrap();
        assert_eq!(sweep.swept, dec!(3000));
        assert_eq!(sweep.credited, Decimal::ZERO);
        assert_eq!(sweep.remaining_debt, dec!(2000));
        assert!(!sweep.debt_cleared);

        assert_eq!(account.balance(Currency::Ngn), Decimal::ZERO);
        assert_eq!(account.debt_info.total_owed, dec!(2000));
        assert!(account.debt_info.is_blacklisted);
        assert_eq!(account.transactions.len(), 2);
        assert_eq!(outcome.points_earned, 3); // gross amount, not net
    }

    #[test]
    fn test_final_sweep_credits_remainder_and_lifts_blacklist() {
        let mut account = debtor(Decimal::ZERO, dec!(5000));

        LedgerService::process_transaction(&mut account, credit(dec!(3000)), Currency::Ngn)
            .unwrap();
        let outcome =
            LedgerService::process_transaction(&mut account, credit(dec!(2500)), Currency::Ngn)
                .unwrap();

        let sweep = outcome.sweep.unwrap();
        assert_eq!(sweep.swept, dec!(2000)); // min(2500, remaining 2000)
        assert_eq!(sweep.credited, dec!(500));
        assert!(sweep.debt_cleared);

        assert_eq!(account.balance(Currency::Ngn), dec!(500));
        assert_eq!(account.debt_info.total_owed, Decimal::ZERO);
        assert!(!account.debt_info.is_blacklisted);
        assert_eq!(account.transactions.len(), 4);
    }

    #[test]
    fn test_swept_credit_prepends_recovery_record_first() {
        let mut account = debtor(Decimal::ZERO, dec!(5000));
        let incoming = credit(dec!(3000));
        let incoming_id = incoming.id;

        LedgerService::process_transaction(&mut account, incoming, Currency::Ngn).unwrap();

        let first = &account.transactions[0];
        let second = &account.transactions[1];

        assert_eq!(first.direction, TxDirection::Debit);
        assert_eq!(first.category, "Debt Settlement");
        assert_eq!(first.title, "Auto-Recovery for Ibrahim Dangote");
        assert_eq!(first.status, TxStatus::Completed);
        assert_eq!(first.amount, dec!(3000));

        assert_eq!(second.id, incoming_id);
        assert_eq!(second.direction, TxDirection::Credit);
    }

    #[test]
    fn test_foreign_credit_is_never_swept() {
        let mut account = debtor(Decimal::ZERO, dec!(5000));

        let outcome =
            LedgerService::process_transaction(&mut account, credit(dec!(3000)), Currency::Usd)
                .unwrap();

        assert!(outcome.sweep.is_none());
        assert_eq!(account.balance(Currency::Usd), dec!(3000));
        assert_eq!(account.debt_info.total_owed, dec!(5000));
        assert!(account.debt_info.is_blacklisted);
    }

    #[test]
    fn test_credit_after_debt_cleared_takes_simple_path() {
        let mut account = debtor(Decimal::ZERO, dec!(1000));

        LedgerService::process_transaction(&mut account, credit(dec!(1000)), Currency::Ngn)
            .unwrap();
        assert!(!account.debt_info.is_blacklisted);

        let outcome =
            LedgerService::process_transaction(&mut account, credit(dec!(700)), Currency::Ngn)
                .unwrap();

        assert!(outcome.sweep.is_none());
        assert_eq!(account.balance(Currency::Ngn), dec!(700));
    }

    #[rstest::rstest]
    #[case(dec!(999.99), 0)]
    #[case(dec!(1000), 1)]
    #[case(dec!(1999), 1)]
    #[case(dec!(50000), 50)]
    fn test_points_floor(#[case] amount: Decimal, #[case] expected: u64) {
        assert_eq!(LedgerService::points_for(amount), expected);
    }
}
