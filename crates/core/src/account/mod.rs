//! The single-user account aggregate and its peripheral types.

pub mod types;

pub use types::{
    Account, Beneficiary, BeneficiaryKind, DebtInfo, Investment, InvestmentKind,
    VerificationStatus,
};
