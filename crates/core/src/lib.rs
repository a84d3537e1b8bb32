//! Core wallet logic for the PayMoment demo product.
//!
//! This crate contains pure state-transition logic over the single-user
//! account aggregate:
//! - Account aggregate and its domain types
//! - Ledger engine (credits, debits, loyalty points)
//! - Debt recovery engine (auto-sweep of NGN credits for blacklisted debtors)
//! - Wrong-transfer resolution operations
//! - Static-rate currency exchange
//! - Application state store owning the aggregate
//!
//! Every mutation is a synchronous read-old/compute-new transition; there is
//! no I/O, no locking, and no async in this crate.

pub mod account;
pub mod fx;
pub mod ledger;
pub mod resolution;
pub mod store;
