//! Static demo rate table.
//!
//! Swap quotes are asymmetric around NGN (the buy and sell legs use
//! different NGN rates, which is where the demo "spread" comes from);
//! USD/GBP quotes are derived through the NGN legs. Domiciliary funding
//! and withdrawal share a single flat NGN-per-unit rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use paymoment_shared::Currency;

/// NGN received when selling one USD.
const USD_TO_NGN: Decimal = dec!(1655.40);
/// NGN received when selling one GBP.
const GBP_TO_NGN: Decimal = dec!(2120.20);
/// NGN paid to buy one USD.
const NGN_PER_USD: Decimal = dec!(1680.00);
/// NGN paid to buy one GBP.
const NGN_PER_GBP: Decimal = dec!(2150.00);

/// Quote for a manual swap: units of `to` per unit of `from`.
///
/// Returns `None` for a same-currency pair.
#[must_use]
pub fn swap_rate(from: Currency, to: Currency) -> Option<Decimal> {
    use Currency::{Gbp, Ngn, Usd};
    match (from, to) {
        (Usd, Ngn) => Some(USD_TO_NGN),
        (Gbp, Ngn) => Some(GBP_TO_NGN),
        (Ngn, Usd) => Some(Decimal::ONE / NGN_PER_USD),
        (Ngn, Gbp) => Some(Decimal::ONE / NGN_PER_GBP),
        // Cross rates through the NGN legs.
        (Usd, Gbp) => Some(USD_TO_NGN / GBP_TO_NGN),
        (Gbp, Usd) => Some(GBP_TO_NGN / USD_TO_NGN),
        (Ngn, Ngn) | (Usd, Usd) | (Gbp, Gbp) => None,
    }
}

/// NGN per unit rate for funding a domiciliary wallet from NGN, and for
/// withdrawing it back. Only quoted for foreign currencies.
#[must_use]
pub fn funding_rate(foreign: Currency) -> Option<Decimal> {
    match foreign {
        Currency::Usd => Some(NGN_PER_USD),
        Currency::Gbp => Some(NGN_PER_GBP),
        Currency::Ngn => None,
    }
}
