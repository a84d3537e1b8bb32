//! Currency codes for wallet balances.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts in the system are `rust_decimal::Decimal`, keyed by these
//! codes in the per-currency balance map.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the wallet.
///
/// A balance entry exists per currency once the matching account has been
/// opened; the code doubles as the balance-map key in the persisted
/// aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Nigerian Naira - the local settlement currency.
    Ngn,
    /// US Dollar (domiciliary).
    Usd,
    /// British Pound (domiciliary).
    Gbp,
}

impl Currency {
    /// Returns the display symbol used in user-facing notifications.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Ngn => "\u{20a6}",
            Self::Usd => "$",
            Self::Gbp => "\u{a3}",
        }
    }

    /// Returns true if this is the local settlement currency.
    ///
    /// Debt recovery only ever sweeps local-currency credits.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Ngn)
    }

    /// All supported currencies.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Ngn, Self::Usd, Self::Gbp]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ngn => write!(f, "NGN"),
            Self::Usd => write!(f, "USD"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NGN" => Ok(Self::Ngn),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
