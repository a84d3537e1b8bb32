//! Resolution service: claim filing and debt imposition.

use rust_decimal::Decimal;
use tracing::info;

use paymoment_shared::TransactionId;

use super::error::ResolutionError;
use crate::account::{Account, DebtInfo};
use crate::ledger::{TxDirection, TxStatus};

/// Stateless service for wrong-transfer resolution.
pub struct ResolutionService;

impl ResolutionService {
    /// Files a wrong-transfer claim against one of the account's own
    /// completed debits.
    ///
    /// Transitions that record's status to `RecoveryActive` and marks it as
    /// a wrongful transfer - the only allowed post-creation mutation of a
    /// transaction record. No balance or debt changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction does not exist, is not a debit,
    /// or is not in a reportable status.
    pub fn file_claim(account: &mut Account, tx_id: TransactionId) -> Result<(), ResolutionError> {
        let tx = account
            .find_transaction_mut(tx_id)
            .ok_or(ResolutionError::TransactionNotFound(tx_id))?;

        if tx.direction != TxDirection::Debit {
            return Err(ResolutionError::NotADebit(tx_id));
        }
        match tx.status {
            TxStatus::RecoveryActive => return Err(ResolutionError::AlreadyUnderRecovery(tx_id)),
            status if !status.is_reportable() => {
                return Err(ResolutionError::NotReportable { id: tx_id, status });
            }
            _ => {}
        }

        tx.status = TxStatus::RecoveryActive;
        tx.is_wrong_transfer = true;

        info!(%tx_id, "wrong-transfer claim filed");
        Ok(())
    }

    /// Imposes a debt obligation on this account.
    ///
    /// Blacklists the account and records the amount owed; subsequent
    /// incoming NGN credits are intercepted by the recovery engine until
    /// the debt clears. In a real system this would be driven by the
    /// counterparty's claim resolving against this account.
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveDebt` for a zero or negative amount.
    pub fn impose_debt(
        account: &mut Account,
        amount: Decimal,
        owed_to_id: impl Into<String>,
        owed_to_name: impl Into<String>,
    ) -> Result<(), ResolutionError> {
        if amount <= Decimal::ZERO {
            return Err(ResolutionError::NonPositiveDebt(amount));
        }

        account.debt_info = DebtInfo {
            is_blacklisted: true,
            total_owed: amount,
            owed_to_id: owed_to_id.into(),
            owed_to_name: owed_to_name.into(),
        };

        info!(owed = %amount, "debt imposed, account restricted");
        Ok(())
    }
}
