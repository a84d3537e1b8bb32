//! Transaction record types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paymoment_shared::TransactionId;

/// Direction of a transaction relative to the affected balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxDirection {
    /// Incoming funds.
    Credit,
    /// Outgoing funds.
    Debit,
}

/// Transaction status.
///
/// Engine-generated records start `Completed`. The only post-creation
/// transition is `Completed -> RecoveryActive`, triggered by filing a
/// wrong-transfer claim against a debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    /// Settled.
    Completed,
    /// Awaiting settlement.
    Pending,
    /// Did not settle.
    Failed,
    /// Settled, then reversed.
    Reversed,
    /// Under wrong-transfer recovery.
    RecoveryActive,
}

impl TxStatus {
    /// Returns true if a wrong-transfer claim may be filed against a record
    /// in this status.
    #[must_use]
    pub fn is_reportable(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// A single transaction record.
///
/// Immutable once created, except for `status` (see [`TxStatus`]).
///
/// The amount is denominated in the currency supplied out-of-band when the
/// record is applied to a balance; the record itself does not carry a
/// currency. The same `amount` field is reused across NGN/USD/GBP entries
/// and its unit is established only by context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, generated at creation.
    pub id: TransactionId,
    /// Direction relative to the affected balance.
    #[serde(rename = "type")]
    pub direction: TxDirection,
    /// Positive amount in the currency supplied at application time.
    pub amount: Decimal,
    /// Human-readable title, e.g. "Ikeja Electric".
    pub title: String,
    /// Display category, e.g. "Utility".
    pub category: String,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Current status.
    pub status: TxStatus,
    /// Set when this debit has been reported as a wrongful transfer.
    #[serde(default)]
    pub is_wrong_transfer: bool,
    /// Optional narration supplied by the sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Transaction {
    /// Creates a new completed transaction with a fresh id.
    #[must_use]
    pub fn new(
        direction: TxDirection,
        amount: Decimal,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            direction,
            amount,
            title: title.into(),
            category: category.into(),
            timestamp: Utc::now(),
            status: TxStatus::Completed,
            is_wrong_transfer: false,
            remark: None,
        }
    }

    /// Attaches a narration to the record.
    #[must_use]
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }
}
