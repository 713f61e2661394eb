use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::CoreError;

/// Trait abstraction over the live exchange rate API.
///
/// The production implementation talks to Frankfurter; tests substitute
/// mock implementations so no conversion logic depends on the network.
/// If the API stops working or changes, only the one implementation is
/// replaced — the rest of the codebase is untouched.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Full rate table relative to `base`, or relative to the service's
    /// default base currency when `base` is `None`.
    async fn latest_rates(&self, base: Option<&str>) -> Result<HashMap<String, f64>, CoreError>;

    /// Convert `amount` of currency `from` into currency `to` at the
    /// current rate. Returns the converted amount.
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, CoreError>;
}
