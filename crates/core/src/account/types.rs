//! Account aggregate types.
//!
//! The `Account` is the aggregate root: a single instance is created per
//! session (from storage or fresh registration) and mutated in place for the
//! lifetime of the application. Balance entries are created lazily when a
//! currency account is opened - absence means "no account", zero means
//! "open, empty".

use std::collections::{BTreeMap, VecDeque};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paymoment_shared::types::{BeneficiaryId, InvestmentId, TransactionId};
use paymoment_shared::Currency;

use crate::ledger::Transaction;

/// Debt obligation tracked against this account after a wrong-transfer
/// claim has resolved against it.
///
/// Invariant maintained by the recovery engine: `is_blacklisted` is true
/// iff `total_owed > 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtInfo {
    /// Whether incoming local-currency credits are intercepted.
    pub is_blacklisted: bool,
    /// Outstanding amount owed, in NGN. Never negative.
    pub total_owed: Decimal,
    /// PayMoment ID of the counterparty the debt is owed to.
    pub owed_to_id: String,
    /// Display name of the counterparty, used on recovery records.
    pub owed_to_name: String,
}

impl DebtInfo {
    /// Returns true if there is debt left to sweep.
    #[must_use]
    pub fn is_outstanding(&self) -> bool {
        self.is_blacklisted && self.total_owed > Decimal::ZERO
    }
}

/// KYC verification flags and captured values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStatus {
    /// Bank Verification Number confirmed.
    pub bvn: bool,
    /// The captured BVN, if provided.
    pub bvn_value: Option<String>,
    /// National Identification Number confirmed.
    pub nin: bool,
    /// The captured NIN, if provided.
    pub nin_value: Option<String>,
    /// Residential address confirmed.
    pub address: bool,
    /// Facial match against ID document confirmed.
    pub facial_match: bool,
}

/// Saved transfer beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Unique identifier.
    pub id: BeneficiaryId,
    /// Display name.
    pub name: String,
    /// Local bank account or international recipient.
    pub kind: BeneficiaryKind,
}

/// Beneficiary routing details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BeneficiaryKind {
    /// Local NGN bank account.
    Local {
        /// Bank name.
        bank: String,
        /// 10-digit account number.
        account_number: String,
    },
    /// International recipient.
    Global {
        /// Destination country.
        country: String,
        /// IBAN or equivalent.
        iban: String,
        /// Settlement currency.
        currency: Currency,
    },
}

/// Asset class of an investment holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentKind {
    /// Listed equity.
    Stock,
    /// Cryptocurrency.
    Crypto,
    /// Exchange-traded fund.
    Etf,
}

/// An investment holding purchased out of the NGN balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    /// Unique identifier.
    pub id: InvestmentId,
    /// Asset display name.
    pub asset_name: String,
    /// Amount originally invested, in NGN.
    pub amount_invested: Decimal,
    /// Current mark, in NGN.
    pub current_value: Decimal,
    /// Asset class.
    pub kind: InvestmentKind,
}

/// The account aggregate.
///
/// Peripheral identity fields carry no core invariants; the invariant-bearing
/// state is `balances`, `transactions`, `moment_points` and `debt_info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account holder's display name.
    pub name: String,
    /// Registered phone number.
    pub phone_number: String,
    /// The user's PayMoment handle.
    pub pay_id: String,
    /// Local bank-style account number (last 10 digits of the phone).
    pub account_number: String,
    /// Account tier (1-3), gates transfer limits in the UI layer.
    pub tier: u8,
    /// KYC verification state.
    pub verification: VerificationStatus,
    /// Per-currency balances. Entries are created lazily.
    pub balances: BTreeMap<Currency, Decimal>,
    /// Transaction history, newest first. Append-only at the front.
    pub transactions: VecDeque<Transaction>,
    /// Saved beneficiaries.
    pub beneficiaries: Vec<Beneficiary>,
    /// Investment holdings.
    pub investments: Vec<Investment>,
    /// Loyalty counter, monotonically non-decreasing under transaction flow.
    pub moment_points: u64,
    /// Wrong-transfer debt tracking. Zeroed when nothing is outstanding.
    pub debt_info: DebtInfo,
}

impl Account {
    /// Creates a fresh, unregistered account with open, empty balances for
    /// all supported currencies.
    #[must_use]
    pub fn new() -> Self {
        let balances = Currency::all()
            .into_iter()
            .map(|c| (c, Decimal::ZERO))
            .collect();
        Self {
            tier: 1,
            balances,
            ..Self::default()
        }
    }

    /// Returns the balance for a currency, or zero if no account is open.
    #[must_use]
    pub fn balance(&self, currency: Currency) -> Decimal {
        self.balances.get(&currency).copied().unwrap_or_default()
    }

    /// Returns a mutable balance entry, opening the currency account lazily.
    pub fn balance_entry(&mut self, currency: Currency) -> &mut Decimal {
        self.balances.entry(currency).or_default()
    }

    /// Looks up a transaction by id.
    #[must_use]
    pub fn find_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Looks up a transaction by id, mutably.
    pub fn find_transaction_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|t| t.id == id)
    }
}
