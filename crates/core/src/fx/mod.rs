//! Static-rate currency exchange.
//!
//! Manual swaps, domiciliary wallet funding and withdrawal back to NGN.
//! These are direct balance mutations at fixed demo rates: they do not
//! produce history entries or loyalty points and never interact with the
//! recovery engine.

pub mod conversion;
pub mod error;
pub mod rates;
pub mod service;

pub use conversion::convert_amount;
pub use error::FxError;
pub use rates::{funding_rate, swap_rate};
pub use service::{FundingReceipt, FxService, SwapReceipt, WithdrawalReceipt};
