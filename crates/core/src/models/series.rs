use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a yearly exchange rate report: a calendar day plus one rate
/// per currency column, relative to the report's base currency (USD).
///
/// `rates` is positionally aligned with [`RateSeries::currencies`]. `None`
/// marks an empty or non-numeric cell in the source file; values are never
/// interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub date: NaiveDate,
    pub rates: Vec<Option<f64>>,
}

/// A full year of daily exchange rates, loaded from one report CSV.
///
/// Immutable once built: selecting a different year constructs a new series
/// rather than mutating this one in place, so readers always see a
/// consistent, fully loaded year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSeries {
    /// Reporting year the source file covers.
    pub year: i32,

    /// Currency column codes, in source file order (e.g., "EUR", "GBP").
    pub currencies: Vec<String>,

    /// Daily records, sorted ascending by date.
    pub records: Vec<RateRecord>,
}

impl RateSeries {
    /// Index of a currency column, case-insensitive.
    #[must_use]
    pub fn column(&self, code: &str) -> Option<usize> {
        self.currencies
            .iter()
            .position(|c| c.eq_ignore_ascii_case(code))
    }

    /// Cached rate for a currency on an exact date, if present.
    /// Uses binary search over the date-sorted records.
    #[must_use]
    pub fn rate_on(&self, code: &str, date: NaiveDate) -> Option<f64> {
        let col = self.column(code)?;
        let idx = self
            .records
            .binary_search_by_key(&date, |r| r.date)
            .ok()?;
        self.records[idx].rates.get(col).copied().flatten()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
