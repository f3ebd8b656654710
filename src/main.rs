use chrono::NaiveDate;
use dotenv::dotenv;
use rust_decimal_macros::dec;

pub mod api;
pub mod errors;
pub mod functions;
pub mod structs;
pub mod utils;

#[cfg(test)]
mod tests;

use api::refresh_market_data;
use functions::{aggregate_holdings, project_gains, reconcile};
use structs::{
    CacheManager, Persistable, SnapshotManager, Transaction, TransactionKind, TransactionManager,
    INVESTMENT_CATEGORY,
};

fn main() {
    dotenv().ok();

    let mut transactions_manager = TransactionManager::new(None).unwrap();
    if transactions_manager.get().is_empty() {
        seed_demo_ledger(&mut transactions_manager);
    }
    transactions_manager.sort();

    let holdings = aggregate_holdings(transactions_manager.get());
    if holdings.is_empty() {
        println!("No investment transactions in the ledger, nothing to update.");
        return;
    }

    let mut cache = CacheManager::new(None).unwrap();
    let mut snapshot_manager = SnapshotManager::new(None).unwrap();

    // The explicit "Update": fetch everything, then swap the snapshot wholesale
    let market = refresh_market_data(&holdings, &mut cache);
    snapshot_manager.replace(reconcile(&holdings, &market));

    let snapshot = snapshot_manager.get().unwrap();
    let report = project_gains(&holdings, snapshot);

    println!("{:<28} {:>14} {:>8} {:>8} {:>8} {:>14}", "Instrument", "Amount", "Base%", "FX%", "Total%", "Gain/Loss");
    for row in &report.instruments {
        println!(
            "{:<28} {:>14} {:>8} {:>8} {:>8} {:>14}",
            row.instrument,
            row.amount,
            row.base_change.round_dp(2),
            row.fx_change.round_dp(2),
            row.combined_change.round_dp(2),
            row.gain_loss.round_dp(0),
        );
    }
    println!(
        "\nTotal invested: {} | Gain/loss: {} ({}%)",
        report.total_invested,
        report.total_gain_loss.round_dp(0),
        report.total_gain_loss_percent.round_dp(2),
    );
    if snapshot.usd_idr_rate > dec!(0) {
        println!("USD/IDR: {}", snapshot.usd_idr_rate);
    }
    for note in &market.notes {
        println!("note: {note}");
    }
}

/* A couple of entries so a fresh checkout has something to price; the real app feeds the
ledger from its transaction forms and the cloud store */
fn seed_demo_ledger(manager: &mut TransactionManager) {
    let entries = vec![
        (
            1_000_000,
            "Instrumen: Emas",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ),
        (
            2_000_000,
            "Saham US - USDIDR: 15000",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        ),
        (
            500_000,
            "Instrumen: Deposito BCA",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ),
    ];
    for (amount, description, date) in entries {
        manager.push(Transaction::new(
            TransactionKind::Expense,
            amount,
            INVESTMENT_CATEGORY,
            description,
            date,
        ));
    }
}
