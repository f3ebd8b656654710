use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;

use crate::errors::ApiError;
use crate::structs::Benchmark;

use super::fetch_via_proxies;

const QUOTE_ENDPOINT: &str = "https://stooq.com/q/d/l/";

/* Fixed 0-based column offsets of the daily-quote CSV as the app has always consumed it.
Rows that do not carry an ISO date in the date column or numbers in the price columns are
skipped, which also takes care of header lines.
*/
const DATE_FIELD: usize = 0;
const OPEN_FIELD: usize = 2;
const CLOSE_FIELD: usize = 4;

/* One parsed OHLC row; we only ever need the date, the open and the close */
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct QuoteRow {
    pub date: NaiveDate,
    pub open: Decimal,
    pub close: Decimal,
}

pub fn quote_history_url(symbol: &str) -> String {
    return format!("{QUOTE_ENDPOINT}?s={symbol}&i=d");
}

/* Ascending-by-date series, upstream order preserved */
pub fn parse_quote_rows(body: &str) -> Vec<QuoteRow> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records().flatten() {
        let date = record
            .get(DATE_FIELD)
            .and_then(|f| NaiveDate::parse_from_str(f.trim(), "%Y-%m-%d").ok());
        let open = record
            .get(OPEN_FIELD)
            .and_then(|f| f.trim().parse::<Decimal>().ok());
        let close = record
            .get(CLOSE_FIELD)
            .and_then(|f| f.trim().parse::<Decimal>().ok());
        if let (Some(date), Some(open), Some(close)) = (date, open, close) {
            rows.push(QuoteRow { date, open, close });
        }
    }
    return rows;
}

/* A feed with fewer than two usable rows is treated the same as an unreachable one */
pub async fn fetch_quote_history(
    client: &Client,
    proxies: &[String],
    benchmark: Benchmark,
) -> Result<Vec<QuoteRow>, ApiError> {
    let target = quote_history_url(benchmark.symbol());
    let body = fetch_via_proxies(client, proxies, &target).await?;
    let rows = parse_quote_rows(&body);
    if rows.len() < 2 {
        return Err(ApiError::MalformedFeed {
            symbol: benchmark.symbol().to_string(),
            reason: format!("{} valid rows", rows.len()),
        });
    }
    return Ok(rows);
}
