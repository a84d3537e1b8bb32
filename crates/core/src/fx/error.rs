//! FX error types.

use rust_decimal::Decimal;
use thiserror::Error;

use paymoment_shared::Currency;

/// Errors that can occur during a currency exchange.
#[derive(Debug, Error)]
pub enum FxError {
    /// Exchange amount must be positive.
    #[error("Exchange amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Source and target currencies must be different.
    #[error("Source and target currencies must be different")]
    SameCurrency,

    /// No rate is quoted for the requested pair or operation.
    #[error("No rate quoted for {from} to {to}")]
    UnsupportedPair {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// The source balance cannot cover the exchange.
    #[error("Insufficient {currency} balance: available {available}, requested {requested}")]
    InsufficientFunds {
        /// The balance that would have gone negative.
        currency: Currency,
        /// Funds available.
        available: Decimal,
        /// Amount required.
        requested: Decimal,
    },
}

impl FxError {
    /// Returns the error code for machine-readable reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::SameCurrency => "SAME_CURRENCY",
            Self::UnsupportedPair { .. } => "UNSUPPORTED_PAIR",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
        }
    }
}
