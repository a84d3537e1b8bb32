//! Common domain types.

pub mod currency;
pub mod id;

pub use currency::Currency;
pub use id::{BeneficiaryId, InvestmentId, TransactionId};
