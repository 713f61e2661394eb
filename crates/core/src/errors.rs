use thiserror::Error;

/// Unified error type for the entire exchange-analyzer-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Report loading ──────────────────────────────────────────────
    #[error("No exchange rate report available: {0}")]
    DataUnavailable(String),

    #[error("Malformed record in report: {0}")]
    MalformedRecord(String),

    // ── Series analysis ─────────────────────────────────────────────
    #[error("Unknown currency column: {0}")]
    UnknownColumn(String),

    #[error("Series is empty: {0}")]
    EmptySeries(String),

    // ── Rate API ────────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response from rate API: {0}")]
    ResponseFormat(String),

    // ── User input ──────────────────────────────────────────────────
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::DataUnavailable(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::DataUnavailable(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::ResponseFormat(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // request details don't leak into surfaced messages.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
