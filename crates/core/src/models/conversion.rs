use serde::{Deserialize, Serialize};

/// Result of a live currency conversion, as returned by the rate API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Source currency code (e.g., "USD")
    pub from: String,

    /// Target currency code (e.g., "EUR")
    pub to: String,

    /// Amount in the source currency, as entered by the user
    pub amount: f64,

    /// Converted amount in the target currency
    pub converted: f64,
}

/// One row of the "all currencies" rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyListing {
    /// 3-letter currency code
    pub code: String,

    /// Human-readable name; falls back to the code for unknown currencies
    pub description: String,

    /// Current rate relative to the listing's base currency
    pub rate: f64,
}
