//! Resolution error types.

use rust_decimal::Decimal;
use thiserror::Error;

use paymoment_shared::TransactionId;

use crate::ledger::TxStatus;

/// Errors that can occur during wrong-transfer resolution.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// No transaction with the given id exists in the history.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    /// Only debits can be reported as wrongful transfers.
    #[error("Transaction {0} is not a debit and cannot be reported")]
    NotADebit(TransactionId),

    /// The transaction is already under recovery.
    #[error("Transaction {0} is already under recovery")]
    AlreadyUnderRecovery(TransactionId),

    /// The transaction is not in a reportable status.
    #[error("Transaction {id} has status {status:?} and cannot be reported")]
    NotReportable {
        /// The transaction in question.
        id: TransactionId,
        /// Its current status.
        status: TxStatus,
    },

    /// Imposed debt must be positive.
    #[error("Imposed debt must be positive, got {0}")]
    NonPositiveDebt(Decimal),
}

impl ResolutionError {
    /// Returns the error code for machine-readable reporting.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::NotADebit(_) => "NOT_A_DEBIT",
            Self::AlreadyUnderRecovery(_) => "ALREADY_UNDER_RECOVERY",
            Self::NotReportable { .. } => "NOT_REPORTABLE",
            Self::NonPositiveDebt(_) => "NON_POSITIVE_DEBT",
        }
    }
}
