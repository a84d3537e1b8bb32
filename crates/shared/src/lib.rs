//! Shared types and configuration for the PayMoment wallet core.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes with decimal-precision amounts
//! - Typed IDs for type-safe entity references
//! - Application configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::{Currency, TransactionId};
