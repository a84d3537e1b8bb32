//! Application state store.
//!
//! The store is the single owner of the account aggregate: every screen or
//! collaborator mutates state through its transition methods instead of an
//! ambient global. Persistence of the aggregate after each transition is a
//! concern of the caller (see the `paymoment-store` crate).

pub mod notify;
pub mod service;

pub use notify::{NoticeKind, Notifier, TracingNotifier};
pub use service::AppStore;
