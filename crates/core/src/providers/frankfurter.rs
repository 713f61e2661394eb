use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::CoreError;
use super::traits::RateProvider;

const BASE_URL: &str = "https://api.frankfurter.app";

/// Frankfurter API provider for fiat currency exchange rates.
///
/// - **Free**: No API key, no rate limits, open-source.
/// - **Source**: European Central Bank (ECB) data.
/// - **Coverage**: ~30+ currencies (EUR, USD, GBP, JPY, etc.)
/// - **Endpoints**: `/latest`, `/latest?from=`, `/latest?amount=&from=&to=`
///
/// Each call is a single request with no retry; the client carries a
/// 30-second timeout. When `amount` is passed in the query, Frankfurter
/// returns the already-multiplied amount under the target code.
pub struct FrankfurterProvider {
    client: Client,
    base_url: String,
}

impl FrankfurterProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the provider at a different host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }

    async fn fetch_rates(&self, url: &str) -> Result<HashMap<String, f64>, CoreError> {
        log::debug!("GET {url}");
        let resp: RatesResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| {
                // A body-read failure is still a transport problem; only
                // decode failures mean the response shape was wrong.
                if e.is_decode() {
                    CoreError::ResponseFormat(format!("missing or malformed 'rates' field: {e}"))
                } else {
                    CoreError::from(e)
                }
            })?;
        Ok(resp.rates)
    }
}

impl Default for FrankfurterProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── Frankfurter API response types ──────────────────────────────────

#[derive(Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    fn name(&self) -> &str {
        "Frankfurter"
    }

    async fn latest_rates(&self, base: Option<&str>) -> Result<HashMap<String, f64>, CoreError> {
        let url = match base {
            Some(code) => format!("{}/latest?from={}", self.base_url, code.to_uppercase()),
            None => format!("{}/latest", self.base_url),
        };
        self.fetch_rates(&url).await
    }

    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, CoreError> {
        let from = from.to_uppercase();
        let to = to.to_uppercase();

        // Same currency → no network call needed
        if from == to {
            return Ok(amount);
        }

        let url = format!(
            "{}/latest?amount={amount}&from={from}&to={to}",
            self.base_url
        );

        let rates = self.fetch_rates(&url).await?;
        rates.get(&to).copied().ok_or_else(|| {
            CoreError::ResponseFormat(format!("no '{to}' entry in conversion response"))
        })
    }
}
