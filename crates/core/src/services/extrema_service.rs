use crate::errors::CoreError;
use crate::models::aggregate::{AggregatedSeries, ExtremaResult};

/// Locates the peak and trough of one currency within an aggregated series.
pub struct ExtremaService;

impl ExtremaService {
    pub fn new() -> Self {
        Self
    }

    /// Find the dates of the maximum and minimum averaged value for
    /// `currency_code` in a single scan.
    ///
    /// Strict comparisons give the first occurrence in ascending date
    /// order when several buckets tie. Fails with `UnknownColumn` when the
    /// code is not a column of the series, and `EmptySeries` when there
    /// are no buckets (or the column holds no values at all).
    pub fn find(
        &self,
        aggregated: &AggregatedSeries,
        currency_code: &str,
    ) -> Result<ExtremaResult, CoreError> {
        let col = aggregated
            .column(currency_code)
            .ok_or_else(|| CoreError::UnknownColumn(currency_code.to_string()))?;

        if aggregated.is_empty() {
            return Err(CoreError::EmptySeries(format!(
                "no buckets to scan for {currency_code}"
            )));
        }

        let mut peak = None;
        let mut trough = None;

        for point in &aggregated.points {
            let Some(value) = point.values.get(col).copied().flatten() else {
                continue;
            };
            match peak {
                Some((_, best)) if value <= best => {}
                _ => peak = Some((point.date, value)),
            }
            match trough {
                Some((_, best)) if value >= best => {}
                _ => trough = Some((point.date, value)),
            }
        }

        match (peak, trough) {
            (Some((peak_date, peak_value)), Some((trough_date, trough_value))) => {
                Ok(ExtremaResult {
                    currency: aggregated.currencies[col].clone(),
                    peak_date,
                    peak_value,
                    trough_date,
                    trough_value,
                })
            }
            _ => Err(CoreError::EmptySeries(format!(
                "column {currency_code} has no values"
            ))),
        }
    }
}

impl Default for ExtremaService {
    fn default() -> Self {
        Self::new()
    }
}
