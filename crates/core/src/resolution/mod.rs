//! Wrong-transfer resolution operations.
//!
//! Two deliberately independent operations: filing a claim against one of
//! the account's own completed debits, and imposing a debt obligation on
//! the account that owes money. In a real system the second would be
//! triggered by the counterparty's claim resolving; here the cross-account
//! link stays external and unmodeled.

pub mod error;
pub mod service;

pub use error::ResolutionError;
pub use service::ResolutionService;
