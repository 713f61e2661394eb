use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::period::Period;

/// One resampled bucket: the bucket's right-edge date plus the mean rate
/// per currency column over the bucket's source records.
///
/// A column is `None` when every source cell in the bucket was missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

/// A rate series resampled to calendar buckets.
///
/// Points ascend by bucket date. Buckets with no source records are
/// omitted entirely rather than zero-filled. Recomputed on every plot
/// request; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedSeries {
    pub period: Period,
    /// Currency column codes, carried over from the source series.
    pub currencies: Vec<String>,
    pub points: Vec<AggregatedPoint>,
}

impl AggregatedSeries {
    /// Index of a currency column, case-insensitive.
    #[must_use]
    pub fn column(&self, code: &str) -> Option<usize> {
        self.currencies
            .iter()
            .position(|c| c.eq_ignore_ascii_case(code))
    }

    /// Mean value of a currency at an exact bucket date, if present.
    #[must_use]
    pub fn value_at(&self, code: &str, date: NaiveDate) -> Option<f64> {
        let col = self.column(code)?;
        self.points
            .iter()
            .find(|p| p.date == date)
            .and_then(|p| p.values.get(col).copied().flatten())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Peak and trough of one currency within an aggregated series.
///
/// Ties resolve to the first occurrence in ascending date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremaResult {
    pub currency: String,
    pub peak_date: NaiveDate,
    pub peak_value: f64,
    pub trough_date: NaiveDate,
    pub trough_value: f64,
}
