//! FX service: swaps, domiciliary funding and withdrawal.

use rust_decimal::Decimal;
use tracing::debug;

use paymoment_shared::Currency;

use super::conversion::convert_amount;
use super::error::FxError;
use super::rates::{funding_rate, swap_rate};
use crate::account::Account;

/// Receipt for a manual swap between two wallets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapReceipt {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Amount sold, in `from`.
    pub amount: Decimal,
    /// Applied quote (units of `to` per unit of `from`).
    pub rate: Decimal,
    /// Amount bought, in `to`, after rounding.
    pub converted: Decimal,
}

/// Receipt for funding a domiciliary wallet from NGN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingReceipt {
    /// The funded foreign currency.
    pub currency: Currency,
    /// Foreign amount received.
    pub amount: Decimal,
    /// NGN per unit rate applied.
    pub rate: Decimal,
    /// NGN debited.
    pub ngn_cost: Decimal,
}

/// Receipt for withdrawing a domiciliary balance back to NGN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalReceipt {
    /// The foreign currency withdrawn from.
    pub currency: Currency,
    /// Foreign amount sold.
    pub amount: Decimal,
    /// NGN per unit rate applied.
    pub rate: Decimal,
    /// NGN credited.
    pub ngn_credited: Decimal,
}

/// Stateless currency exchange over the account's balance map.
pub struct FxService;

impl FxService {
    /// Swaps `amount` of `from` into `to` at the static quote.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive amount, a same-currency pair,
    /// or insufficient funds in the source wallet.
    pub fn swap(
        account: &mut Account,
        from: Currency,
        to: Currency,
        amount: Decimal,
    ) -> Result<SwapReceipt, FxError> {
        if amount <= Decimal::ZERO {
            return Err(FxError::NonPositiveAmount(amount));
        }
        if from == to {
            return Err(FxError::SameCurrency);
        }
        let rate = swap_rate(from, to).ok_or(FxError::UnsupportedPair { from, to })?;

        Self::check_funds(account, from, amount)?;

        let converted = convert_amount(amount, rate);
        *account.balance_entry(from) -= amount;
        *account.balance_entry(to) += converted;

        debug!(%from, %to, %amount, %converted, "swap executed");

        Ok(SwapReceipt {
            from,
            to,
            amount,
            rate,
            converted,
        })
    }

    /// Buys `amount` of a foreign currency with NGN at the funding rate.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive amount, an unquoted currency,
    /// or when the NGN balance cannot cover the cost.
    pub fn fund_wallet(
        account: &mut Account,
        foreign: Currency,
        amount: Decimal,
    ) -> Result<FundingReceipt, FxError> {
        if amount <= Decimal::ZERO {
            return Err(FxError::NonPositiveAmount(amount));
        }
        let rate = funding_rate(foreign).ok_or(FxError::UnsupportedPair {
            from: Currency::Ngn,
            to: foreign,
        })?;

        let ngn_cost = convert_amount(amount, rate);
        Self::check_funds(account, Currency::Ngn, ngn_cost)?;

        *account.balance_entry(Currency::Ngn) -= ngn_cost;
        *account.balance_entry(foreign) += amount;

        debug!(%foreign, %amount, %ngn_cost, "domiciliary wallet funded");

        Ok(FundingReceipt {
            currency: foreign,
            amount,
            rate,
            ngn_cost,
        })
    }

    /// Sells `amount` of a foreign balance back into NGN at the funding
    /// rate.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive amount, an unquoted currency,
    /// or insufficient funds in the foreign wallet.
    pub fn withdraw_to_local(
        account: &mut Account,
        foreign: Currency,
        amount: Decimal,
    ) -> Result<WithdrawalReceipt, FxError> {
        if amount <= Decimal::ZERO {
            return Err(FxError::NonPositiveAmount(amount));
        }
        let rate = funding_rate(foreign).ok_or(FxError::UnsupportedPair {
            from: foreign,
            to: Currency::Ngn,
        })?;

        Self::check_funds(account, foreign, amount)?;

        let ngn_credited = convert_amount(amount, rate);
        *account.balance_entry(foreign) -= amount;
        *account.balance_entry(Currency::Ngn) += ngn_credited;

        debug!(%foreign, %amount, %ngn_credited, "withdrawn to local wallet");

        Ok(WithdrawalReceipt {
            currency: foreign,
            amount,
            rate,
            ngn_credited,
        })
    }

    fn check_funds(account: &Account, currency: Currency, requested: Decimal) -> Result<(), FxError> {
        let available = account.balance(currency);
        if available < requested {
            return Err(FxError::InsufficientFunds {
                currency,
                available,
                requested,
            });
        }
        Ok(())
    }
}
