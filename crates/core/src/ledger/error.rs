//! Ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;

use paymoment_shared::Currency;

/// Errors that can occur when applying a transaction to a balance.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transaction amount must be positive.
    #[error("Transaction amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Debit exceeds the available balance.
    ///
    /// Callers are still expected to pre-check funds before invoking the
    /// engine; this guard closes the negative-balance hazard if they don't.
    #[error("Insufficient {currency} balance: available {available}, requested {requested}")]
    InsufficientFunds {
        /// The balance that would have gone negative.
        currency: Currency,
        /// Funds available before the debit.
        available: Decimal,
        /// The requested debit amount.
        requested: Decimal,
    },
}

impl LedgerError {
    /// Returns the error code for machine-readable reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::NonPositiveAmount(dec!(0)).error_code(),
            "NON_POSITIVE_AMOUNT"
        );
        assert_eq!(
            LedgerError::InsufficientFunds {
                currency: Currency::Ngn,
                available: dec!(100),
                requested: dec!(200),
            }
            .error_code(),
            "INSUFFICIENT_FUNDS"
        );
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::InsufficientFunds {
            currency: Currency::Ngn,
            available: dec!(100),
            requested: dec!(200),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient NGN balance: available 100, requested 200"
        );
    }
}
