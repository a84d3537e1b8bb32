//! Currency conversion arithmetic.
//!
//! CRITICAL: rounding strategy for multi-currency:
//! - Always round to the currency's 2 decimal places
//! - Use banker's rounding (round half to even)

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places carried by all wallet balances.
pub const BALANCE_DP: u32 = 2;

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) to minimize cumulative
/// errors.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Decimal {
    (amount * rate).round_dp_with_strategy(BALANCE_DP, RoundingStrategy::MidpointNearestEven)
}
