//! The application state store and its transition methods.

use rust_decimal::Decimal;

use paymoment_shared::config::OnboardingConfig;
use paymoment_shared::types::{BeneficiaryId, InvestmentId, TransactionId};
use paymoment_shared::Currency;

use super::notify::{NoticeKind, Notifier};
use crate::account::{Account, Beneficiary, BeneficiaryKind, Investment, InvestmentKind};
use crate::fx::{FundingReceipt, FxError, FxService, SwapReceipt, WithdrawalReceipt};
use crate::ledger::{LedgerError, LedgerService, ProcessOutcome, Transaction, TxDirection};
use crate::resolution::{ResolutionError, ResolutionService};

/// Owns the account aggregate and applies all state transitions.
///
/// Single-threaded by construction: each method is a synchronous
/// read-old/compute-new transition, so no two operations can interleave
/// mid-mutation.
pub struct AppStore<N: Notifier> {
    account: Account,
    notifier: N,
}

impl<N: Notifier> AppStore<N> {
    /// Wraps an existing aggregate (loaded from storage).
    #[must_use]
    pub fn new(account: Account, notifier: N) -> Self {
        Self { account, notifier }
    }

    /// Read access to the aggregate.
    #[must_use]
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Consumes the store, returning the aggregate for persistence.
    #[must_use]
    pub fn into_account(self) -> Account {
        self.account
    }

    /// Registers a fresh account: identity fields, starting loyalty points
    /// and the NGN welcome bonus.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        pay_id: impl Into<String>,
        phone_number: impl Into<String>,
        onboarding: &OnboardingConfig,
    ) {
        let phone_number = phone_number.into();
        let account_number = phone_number
            .chars()
            .rev()
            .take(10)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();

        let mut account = Account::new();
        account.name = name.into();
        account.pay_id = pay_id.into();
        account.phone_number = phone_number;
        account.account_number = account_number;
        account.moment_points = onboarding.starting_points;

        // Seeded directly rather than through the engine so the starting
        // points figure stays exactly as configured.
        let bonus = Decimal::from(onboarding.welcome_bonus);
        *account.balance_entry(Currency::Ngn) = bonus;
        account.transactions.push_front(Transaction::new(
            TxDirection::Credit,
            bonus,
            "Welcome Bonus",
            "Reward",
        ));

        self.account = account;
        self.notifier
            .notify(NoticeKind::Success, "Welcome to PayMoment!");
    }

    /// Applies a transaction to the given currency balance.
    ///
    /// Reports a sweep to the user when the recovery engine intercepted
    /// the credit.
    ///
    /// # Errors
    ///
    /// Propagates [`LedgerError`] from the engine.
    pub fn process_transaction(
        &mut self,
        tx: Transaction,
        currency: Currency,
    ) -> Result<ProcessOutcome, LedgerError> {
        let outcome = LedgerService::process_transaction(&mut self.account, tx, currency)?;

        if let Some(sweep) = &outcome.sweep {
            self.notifier.notify(
                NoticeKind::Info,
                &format!(
                    "{}{} swept to clear your debt.",
                    Currency::Ngn.symbol(),
                    sweep.swept
                ),
            );
            if sweep.debt_cleared {
                self.notifier.notify(
                    NoticeKind::Success,
                    "Debt fully repaid. Your account restriction has been lifted.",
                );
            }
        }

        Ok(outcome)
    }

    /// Files a wrong-transfer claim against one of the account's debits.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolutionError`].
    pub fn file_claim(&mut self, tx_id: TransactionId) -> Result<(), ResolutionError> {
        ResolutionService::file_claim(&mut self.account, tx_id)?;
        self.notifier.notify(
            NoticeKind::Info,
            "Case submitted! Recovery agents are monitoring the recipient's wallet.",
        );
        Ok(())
    }

    /// Imposes a debt obligation on this account.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolutionError`].
    pub fn impose_debt(
        &mut self,
        amount: Decimal,
        owed_to_id: impl Into<String>,
        owed_to_name: impl Into<String>,
    ) -> Result<(), ResolutionError> {
        ResolutionService::impose_debt(&mut self.account, amount, owed_to_id, owed_to_name)?;
        self.notifier.notify(
            NoticeKind::Error,
            &format!(
                "System Alert: You received a wrong transfer of {}{}. Your account is restricted until repaid.",
                Currency::Ngn.symbol(),
                amount
            ),
        );
        Ok(())
    }

    /// Swaps between two wallets at the static quote.
    ///
    /// # Errors
    ///
    /// Propagates [`FxError`].
    pub fn swap(
        &mut self,
        from: Currency,
        to: Currency,
        amount: Decimal,
    ) -> Result<SwapReceipt, FxError> {
        FxService::swap(&mut self.account, from, to, amount)
    }

    /// Funds a domiciliary wallet from NGN.
    ///
    /// # Errors
    ///
    /// Propagates [`FxError`].
    pub fn fund_wallet(
        &mut self,
        foreign: Currency,
        amount: Decimal,
    ) -> Result<FundingReceipt, FxError> {
        FxService::fund_wallet(&mut self.account, foreign, amount)
    }

    /// Withdraws a domiciliary balance back to NGN.
    ///
    /// # Errors
    ///
    /// Propagates [`FxError`].
    pub fn withdraw_to_local(
        &mut self,
        foreign: Currency,
        amount: Decimal,
    ) -> Result<WithdrawalReceipt, FxError> {
        FxService::withdraw_to_local(&mut self.account, foreign, amount)
    }

    /// Saves a beneficiary for later transfers.
    pub fn add_beneficiary(&mut self, name: impl Into<String>, kind: BeneficiaryKind) -> BeneficiaryId {
        let beneficiary = Beneficiary {
            id: BeneficiaryId::new(),
            name: name.into(),
            kind,
        };
        let id = beneficiary.id;
        self.account.beneficiaries.push(beneficiary);
        id
    }

    /// Buys an investment out of the NGN balance.
    ///
    /// The purchase is a regular ledger debit (history entry, loyalty
    /// points), followed by recording the holding.
    ///
    /// # Errors
    ///
    /// Propagates [`LedgerError`]; nothing is recorded when the debit
    /// fails.
    pub fn buy_investment(
        &mut self,
        asset_name: impl Into<String>,
        kind: InvestmentKind,
        amount: Decimal,
    ) -> Result<InvestmentId, LedgerError> {
        let asset_name = asset_name.into();
        let tx = Transaction::new(
            TxDirection::Debit,
            amount,
            asset_name.clone(),
            "Investments",
        );
        LedgerService::process_transaction(&mut self.account, tx, Currency::Ngn)?;

        let holding = Investment {
            id: InvestmentId::new(),
            asset_name,
            amount_invested: amount,
            current_value: amount,
            kind,
        };
        let id = holding.id;
        self.account.investments.push(holding);
        Ok(id)
    }

    /// Full account wipe back to the fresh aggregate.
    pub fn reset(&mut self) {
        self.account = Account::new();
        self.notifier
            .notify(NoticeKind::Info, "All local data has been cleared.");
    }
}
