//! PayMoment wallet core walkthrough.
//!
//! Provisions a demo account and drives the ledger, recovery, resolution
//! and FX engines through representative flows, persisting the aggregate
//! after each transition.
//!
//! Usage: cargo run --bin demo

use anyhow::Context;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paymoment_core::account::InvestmentKind;
use paymoment_core::ledger::{Transaction, TxDirection};
use paymoment_core::store::{AppStore, TracingNotifier};
use paymoment_shared::{AppConfig, Currency};
use paymoment_store::{SessionStore, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paymoment=debug,demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let session = SessionStore::from_config(StoreConfig::from(&config.storage))?;

    // Start from a clean slate so the walkthrough is deterministic.
    session.wipe().await?;

    let mut store = AppStore::new(Default::default(), TracingNotifier);
    store.register("Tobi Adebayor", "tobi_pay", "08012345678", &config.onboarding);
    session.save_account(store.account()).await?;
    session.set_logged_in(true).await?;
    info!(
        balance = %store.account().balance(Currency::Ngn),
        points = store.account().moment_points,
        "account registered"
    );

    // A bill payment and an incoming transfer on the simple path.
    store.process_transaction(
        Transaction::new(TxDirection::Debit, dec!(5000), "Ikeja Electric", "Utility"),
        Currency::Ngn,
    )?;
    store.process_transaction(
        Transaction::new(TxDirection::Credit, dec!(150000), "Transfer from Fola", "Transfer"),
        Currency::Ngn,
    )?;
    session.save_account(store.account()).await?;

    // A transfer sent to the wrong account, then reported.
    let wrong_transfer =
        Transaction::new(TxDirection::Debit, dec!(25000), "Transfer to Ade", "Transfer")
            .with_remark("rent contribution");
    let wrong_transfer_id = wrong_transfer.id;
    store.process_transaction(wrong_transfer, Currency::Ngn)?;
    store.file_claim(wrong_transfer_id)?;
    session.save_account(store.account()).await?;

    // The counterpart flow, self-applied for illustration: a claim has
    // resolved against this account, restricting it until repaid.
    store.impose_debt(dec!(50000), "victim_001", "Ibrahim Dangote")?;
    session.save_account(store.account()).await?;

    // Incoming credits are now intercepted by the auto-sweep.
    let outcome = store.process_transaction(
        Transaction::new(TxDirection::Credit, dec!(30000), "Bet9ja Payout", "Gaming"),
        Currency::Ngn,
    )?;
    info!(sweep = ?outcome.sweep, "first credit under restriction");
    session.save_account(store.account()).await?;

    let outcome = store.process_transaction(
        Transaction::new(TxDirection::Credit, dec!(25000), "Salary Advance", "Transfer"),
        Currency::Ngn,
    )?;
    info!(sweep = ?outcome.sweep, "second credit clears the debt");
    session.save_account(store.account()).await?;

    // Currency exchange flows.
    let receipt = store.swap(Currency::Ngn, Currency::Usd, dec!(10000))?;
    info!(converted = %receipt.converted, "swapped NGN to USD");
    let receipt = store.fund_wallet(Currency::Usd, dec!(20))?;
    info!(ngn_cost = %receipt.ngn_cost, "funded USD wallet");
    let receipt = store.withdraw_to_local(Currency::Usd, dec!(5))?;
    info!(ngn_credited = %receipt.ngn_credited, "withdrew USD back to NGN");
    session.save_account(store.account()).await?;

    // An investment purchase rides the regular ledger debit path.
    store.buy_investment("MTN Nigeria", InvestmentKind::Stock, dec!(2000))?;
    session.save_account(store.account()).await?;

    let account = store.account();
    info!(
        ngn = %account.balance(Currency::Ngn),
        usd = %account.balance(Currency::Usd),
        points = account.moment_points,
        transactions = account.transactions.len(),
        blacklisted = account.debt_info.is_blacklisted,
        "walkthrough complete"
    );

    Ok(())
}
