use futures::future::join_all;
use hashbrown::HashMap;
use reqwest::Client;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::functions::single_day_change;
use crate::structs::{classify, Benchmark, InstrumentHolding, KeyValueStore};

use super::{fetch_quote_history, fetch_usd_idr, proxy_chain, QuoteRow};

/* Everything one refresh cycle pulled from the outside world. daily_change always carries
all four benchmarks (0 for a failed feed); history only the series that were both needed
and successfully fetched. notes collects the human-readable degradation messages for the
status line.
*/
#[derive(Debug)]
pub struct MarketData {
    pub daily_change: HashMap<Benchmark, Decimal>,
    pub history: HashMap<Benchmark, Vec<QuoteRow>>,
    pub usd_idr_rate: Decimal,
    pub notes: Vec<String>,
}

impl MarketData {
    pub fn daily(&self, benchmark: Benchmark) -> Decimal {
        return self.daily_change.get(&benchmark).copied().unwrap_or(dec!(0));
    }
}

/* The benchmarks whose full series we need: one per held instrument class that is priced
against history. The four single-day changes are fetched unconditionally regardless,
scaled proxies (reksa dana, obligasi) resolve through them.
*/
pub fn history_benchmarks(holdings: &[InstrumentHolding]) -> Vec<Benchmark> {
    let mut needed = Vec::new();
    for holding in holdings {
        let class = classify(&holding.instrument);
        if class.uses_history() {
            if let Some(benchmark) = class.benchmark() {
                if !needed.contains(&benchmark) {
                    needed.push(benchmark);
                }
            }
        }
    }
    return needed;
}

/* Issue every fetch of a refresh cycle concurrently and let them settle individually:
a failed feed contributes a 0 change (or an absent series) and a note, it never cancels
its siblings and never fails the cycle.
*/
pub async fn fetch_market_data(
    client: &Client,
    proxies: &[String],
    holdings: &[InstrumentHolding],
    store: &mut dyn KeyValueStore,
) -> MarketData {
    let needed = history_benchmarks(holdings);

    let daily_futures = join_all(Benchmark::ALL.iter().map(|&benchmark| async move {
        (
            benchmark,
            fetch_quote_history(client, proxies, benchmark).await,
        )
    }));
    let history_futures = join_all(needed.iter().map(|&benchmark| async move {
        (
            benchmark,
            fetch_quote_history(client, proxies, benchmark).await,
        )
    }));
    let fx_future = fetch_usd_idr(client, proxies, store);

    let (daily_results, history_results, (usd_idr_rate, fx_note)) =
        tokio::join!(daily_futures, history_futures, fx_future);

    let mut notes = Vec::new();

    let mut daily_change = HashMap::new();
    for (benchmark, result) in daily_results {
        match result {
            Ok(rows) => {
                daily_change.insert(benchmark, single_day_change(&rows));
            }
            Err(e) => {
                log::warn!("{} daily quote failed: {}", benchmark.label(), e);
                notes.push(format!("{} unavailable", benchmark.label()));
                daily_change.insert(benchmark, dec!(0));
            }
        }
    }

    let mut history = HashMap::new();
    for (benchmark, result) in history_results {
        match result {
            Ok(rows) => {
                history.insert(benchmark, rows);
            }
            Err(e) => {
                log::warn!("{} history failed: {}", benchmark.label(), e);
                notes.push(format!(
                    "{} history unavailable, using daily change",
                    benchmark.label()
                ));
            }
        }
    }

    if let Some(note) = fx_note {
        notes.push(note);
    }

    return MarketData {
        daily_change,
        history,
        usd_idr_rate,
        notes,
    };
}

/* Entry point for the synchronous app shell */
#[tokio::main]
pub async fn refresh_market_data(
    holdings: &[InstrumentHolding],
    store: &mut dyn KeyValueStore,
) -> MarketData {
    let client = Client::new();
    let proxies = proxy_chain();
    return fetch_market_data(&client, &proxies, holdings, store).await;
}
