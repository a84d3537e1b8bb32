//! Local persistence for the PayMoment account aggregate.
//!
//! Stands in for the original browser localStorage: the whole aggregate is
//! serialized as JSON under a single storage key, with a second key holding
//! the session login flag. Writes are last-write-wins with no transactional
//! guarantee - acceptable under the single-device, single-session
//! assumption.

pub mod config;
pub mod error;
pub mod service;

pub use config::StoreConfig;
pub use error::StoreError;
pub use service::SessionStore;
