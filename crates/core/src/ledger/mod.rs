//! Ledger and debt-recovery engine.
//!
//! This module implements the core wallet logic:
//! - Transaction records and their status lifecycle
//! - The ledger engine applying one transaction to one currency balance
//! - The auto-sweep recovery engine intercepting NGN credits for debtors
//! - Loyalty point accrual
//! - Error types for ledger operations

pub mod error;
pub mod recovery;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use recovery::{evaluate_sweep, should_sweep, SweepDecision};
pub use service::{LedgerService, ProcessOutcome, SweepReport};
pub use types::{Transaction, TxDirection, TxStatus};
