//! Auto-sweep decision logic for debt recovery.
//!
//! When a credit arrives in NGN for an account currently blacklisted with
//! outstanding debt, part or all of it is diverted to repay the debt before
//! the balance is touched. The decision is a pure computation over the
//! incoming amount and the current debt; the ledger service applies it.

use rust_decimal::Decimal;

use paymoment_shared::Currency;

use crate::account::DebtInfo;

/// Outcome of evaluating an incoming credit against outstanding debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepDecision {
    /// Amount diverted to debt repayment. Never exceeds the incoming
    /// credit or the remaining debt.
    pub sweep_amount: Decimal,
    /// Remainder applied to the spendable balance.
    pub credited: Decimal,
    /// Debt left after the sweep. Never negative.
    pub remaining_debt: Decimal,
    /// Whether the account stays blacklisted. False exactly when the debt
    /// reaches zero - no separate approval step.
    pub blacklisted_after: bool,
}

/// Returns true if an incoming credit in `currency` must be routed through
/// the sweep.
///
/// All three conditions must hold: local currency, blacklisted, debt
/// outstanding. Each credit is evaluated independently against the current
/// debt state.
#[must_use]
pub fn should_sweep(currency: Currency, debt: &DebtInfo) -> bool {
    currency.is_local() && debt.is_outstanding()
}

/// Splits an incoming credit between debt repayment and the spendable
/// balance.
#[must_use]
pub fn evaluate_sweep(credit_amount: Decimal, total_owed: Decimal) -> SweepDecision {
    let sweep_amount = credit_amount.min(total_owed);
    let remaining_debt = total_owed - sweep_amount;
    SweepDecision {
        sweep_amount,
        credited: credit_amount - sweep_amount,
        remaining_debt,
        blacklisted_after: remaining_debt > Decimal::ZERO,
    }
}
