use std::env;

use reqwest::Client;

use crate::errors::ApiError;

/* The market endpoints do not allow direct cross-origin access, so every request goes
through a forwarding endpoint. Endpoints are tried strictly in order and the first
successful HTTP response wins; the target URL is percent-encoded and appended to the
endpoint prefix.
*/
const DEFAULT_PROXIES: &[&str] = &[
    "https://api.allorigins.win/raw?url=",
    "https://corsproxy.io/?url=",
    "https://api.codetabs.com/v1/proxy?quest=",
];

const PROXIES_ENV: &str = "INVESTASI_PROXIES";

/* Comma-separated override via INVESTASI_PROXIES, defaults otherwise */
pub fn proxy_chain() -> Vec<String> {
    if let Ok(raw) = env::var(PROXIES_ENV) {
        let chain: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !chain.is_empty() {
            return chain;
        }
    }
    return DEFAULT_PROXIES.iter().map(|s| s.to_string()).collect();
}

pub fn proxied_url(endpoint: &str, target: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
    return format!("{endpoint}{encoded}");
}

pub async fn fetch_via_proxies(
    client: &Client,
    proxies: &[String],
    target: &str,
) -> Result<String, ApiError> {
    for endpoint in proxies {
        let url = proxied_url(endpoint, target);
        match client.get(&url).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(body) => return Ok(body),
                Err(e) => log::debug!("proxy {} dropped the body: {}", endpoint, e),
            },
            Ok(response) => {
                log::debug!("proxy {} answered {}", endpoint, response.status())
            }
            Err(e) => log::debug!("proxy {} unreachable: {}", endpoint, e),
        }
    }
    return Err(ApiError::AllProxiesFailed {
        target: target.to_string(),
    });
}
