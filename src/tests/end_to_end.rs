use chrono::NaiveDate;
use hashbrown::HashMap;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::api::{resolve_rate_with_cache, MarketData, QuoteRow, USD_IDR_CACHE_KEY};
use crate::errors::ApiError;
use crate::functions::{aggregate_holdings, project_gains, reconcile};
use crate::structs::{Benchmark, KeyValueStore, Transaction, TransactionKind};

/* Full pipeline over a fixed ledger and hand-built market data: two purchases (gold and
US equities with an embedded purchase rate), gold up 8% since purchase, US equities up 3%,
USD/IDR moved from 15000 to 15750.
*/

struct MemoryStore(HashMap<String, String>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), value);
    }
}

fn ledger() -> Vec<Transaction> {
    vec![
        Transaction::new(
            TransactionKind::Expense,
            1_000_000,
            "Investasi",
            "Instrumen: Emas",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ),
        Transaction::new(
            TransactionKind::Expense,
            2_000_000,
            "Investasi",
            "Saham US - USDIDR: 15000",
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        ),
    ]
}

fn series(points: &[(&str, Decimal)]) -> Vec<QuoteRow> {
    points
        .iter()
        .map(|&(date, close)| QuoteRow {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open: close,
            close,
        })
        .collect()
}

fn market_data(usd_idr_rate: Decimal) -> MarketData {
    let mut history = HashMap::new();
    history.insert(
        Benchmark::Gold,
        series(&[("2024-01-01", dec!(100)), ("2024-06-01", dec!(108))]),
    );
    history.insert(
        Benchmark::UsEquity,
        series(&[("2024-02-01", dec!(200)), ("2024-06-01", dec!(206))]),
    );
    MarketData {
        daily_change: HashMap::new(),
        history,
        usd_idr_rate,
        notes: Vec::new(),
    }
}

#[test]
fn gains_from_ledger_to_portfolio_totals() {
    let holdings = aggregate_holdings(&ledger());
    assert_eq!(holdings.len(), 2);

    let data = market_data(dec!(15750));
    let snapshot = reconcile(&holdings, &data);

    assert_eq!(snapshot.base_change["Emas"], dec!(8));
    assert_eq!(snapshot.base_change["Saham US"], dec!(3));
    assert_eq!(snapshot.fx_change["Saham US"], dec!(5));
    assert_eq!(snapshot.combined_change["Saham US"], dec!(8.15));

    let report = project_gains(&holdings, &snapshot);

    let emas = report
        .instruments
        .iter()
        .find(|r| r.instrument == "Emas")
        .unwrap();
    assert_eq!(emas.gain_loss, dec!(80000));

    let saham = report
        .instruments
        .iter()
        .find(|r| r.instrument == "Saham US")
        .unwrap();
    assert_eq!(saham.gain_loss, dec!(163000));

    assert_eq!(report.total_invested, 3_000_000);
    assert_eq!(report.total_gain_loss, dec!(243000));
    assert_eq!(report.total_gain_loss_percent, dec!(8.1));
}

#[test]
fn fx_outage_degrades_to_the_cached_rate() {
    let holdings = aggregate_holdings(&ledger());

    // A previous refresh stored 15750; this one cannot reach the FX endpoint
    let mut store = MemoryStore(HashMap::new());
    store.set(USD_IDR_CACHE_KEY, "15750".to_string());
    let (rate, note) = resolve_rate_with_cache(
        Err(ApiError::AllProxiesFailed {
            target: "fx".to_string(),
        }),
        &mut store,
    );
    assert_eq!(rate, dec!(15750));
    assert!(note.is_some());

    let snapshot = reconcile(&holdings, &market_data(rate));
    assert_eq!(snapshot.combined_change["Saham US"], dec!(8.15));
}

#[test]
fn fx_outage_without_cache_drops_the_adjustment() {
    let holdings = aggregate_holdings(&ledger());

    let mut store = MemoryStore(HashMap::new());
    let (rate, _) = resolve_rate_with_cache(
        Err(ApiError::AllProxiesFailed {
            target: "fx".to_string(),
        }),
        &mut store,
    );
    assert_eq!(rate, dec!(0));

    let snapshot = reconcile(&holdings, &market_data(rate));
    assert_eq!(snapshot.fx_change["Saham US"], dec!(0));
    assert_eq!(snapshot.combined_change["Saham US"], dec!(3));
}
