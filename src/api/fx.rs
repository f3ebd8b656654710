use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::ApiError;
use crate::structs::KeyValueStore;
use crate::utils::parse_json_lenient;

use super::fetch_via_proxies;

const FX_ENDPOINT: &str = "https://api.exchangerate.host/convert?from=USD&to=IDR";

pub const USD_IDR_CACHE_KEY: &str = "usd_idr_rate";

/* USD/IDR spot rate. This is the only feed that may serve a stale value: on fetch failure
we fall back to the last rate we managed to store, and to 0 when there is none. The
benchmark price feeds never do this, a failed benchmark just contributes a 0% change.

Returns the rate plus an optional degradation note for the status line.
*/
pub async fn fetch_usd_idr(
    client: &Client,
    proxies: &[String],
    store: &mut dyn KeyValueStore,
) -> (Decimal, Option<String>) {
    let fetched = fetch_spot_rate(client, proxies).await;
    return resolve_rate_with_cache(fetched, store);
}

/* Cache on success, cached-or-zero on failure. Split out of the fetch so the fallback
behaviour is testable with an in-memory store. */
pub fn resolve_rate_with_cache(
    fetched: Result<Decimal, ApiError>,
    store: &mut dyn KeyValueStore,
) -> (Decimal, Option<String>) {
    match fetched {
        Ok(rate) if rate > dec!(0) => {
            store.set(USD_IDR_CACHE_KEY, rate.to_string());
            return (rate, None);
        }
        Ok(_) => log::warn!("USD/IDR feed returned a non-positive rate"),
        Err(e) => log::warn!("USD/IDR fetch failed: {}", e),
    }

    let cached = store
        .get(USD_IDR_CACHE_KEY)
        .and_then(|v| v.parse::<Decimal>().ok());
    match cached {
        Some(rate) => {
            return (
                rate,
                Some("USD/IDR unavailable, using last stored rate".to_string()),
            );
        }
        None => {
            return (
                dec!(0),
                Some("USD/IDR unavailable, FX adjustment skipped".to_string()),
            );
        }
    }
}

async fn fetch_spot_rate(client: &Client, proxies: &[String]) -> Result<Decimal, ApiError> {
    let body = fetch_via_proxies(client, proxies, FX_ENDPOINT).await?;
    let value = parse_json_lenient(&body)?;
    let rate = value
        .get("result")
        .and_then(|v| v.as_f64())
        .and_then(Decimal::from_f64);
    return rate.ok_or(ApiError::DeserializationError(
        "conversion response carries no numeric result".to_string(),
    ));
}
