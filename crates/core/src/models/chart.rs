use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::ExtremaResult;
use super::period::Period;

/// A single point on the rate trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Right edge of the resampled bucket
    pub date: NaiveDate,

    /// Mean rate of the selected currency within the bucket
    pub rate: f64,
}

/// Complete payload for one plot request.
///
/// The core computes all the numbers — the frontend only renders:
/// the line from `points`, and the peak/trough annotation labels
/// from `extrema`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    /// Currency being plotted against the base currency
    pub currency: String,

    /// Resampling granularity the series was aggregated at
    pub period: Period,

    /// One point per non-empty bucket, ascending by date
    pub points: Vec<ChartPoint>,

    /// Peak/trough dates and values for the plotted currency
    pub extrema: ExtremaResult,
}
