use chrono::NaiveDate;

use crate::models::aggregate::{AggregatedPoint, AggregatedSeries};
use crate::models::period::Period;
use crate::models::series::RateSeries;

/// Resamples a daily rate series to coarser calendar buckets by averaging.
///
/// Each record is assigned to the bucket whose right edge is
/// `period.bucket_end(record.date)`; within a bucket every currency column
/// is averaged independently over the values that are present. Missing
/// cells are skipped by the mean, never treated as zero, and buckets with
/// no source records at all are omitted from the output.
pub struct ResampleService;

impl ResampleService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate `series` at the given period.
    ///
    /// Output points ascend by bucket date: the source records are sorted,
    /// and every bucket-end function is monotone in its input.
    #[must_use]
    pub fn resample(&self, series: &RateSeries, period: Period) -> AggregatedSeries {
        let columns = series.currencies.len();
        let mut points: Vec<AggregatedPoint> = Vec::new();
        let mut sums: Vec<f64> = vec![0.0; columns];
        let mut counts: Vec<u32> = vec![0; columns];
        let mut current_end = None;

        fn flush(
            end: NaiveDate,
            sums: &mut [f64],
            counts: &mut [u32],
            points: &mut Vec<AggregatedPoint>,
        ) {
            let values = sums
                .iter()
                .zip(counts.iter())
                .map(|(&sum, &n)| if n > 0 { Some(sum / f64::from(n)) } else { None })
                .collect();
            points.push(AggregatedPoint { date: end, values });
            sums.fill(0.0);
            counts.fill(0);
        }

        for record in &series.records {
            let end = period.bucket_end(record.date);
            match current_end {
                Some(open) if open == end => {}
                Some(open) => {
                    flush(open, &mut sums, &mut counts, &mut points);
                    current_end = Some(end);
                }
                None => current_end = Some(end),
            }

            for (col, rate) in record.rates.iter().enumerate().take(columns) {
                if let Some(value) = rate {
                    sums[col] += value;
                    counts[col] += 1;
                }
            }
        }

        if let Some(open) = current_end {
            flush(open, &mut sums, &mut counts, &mut points);
        }

        AggregatedSeries {
            period,
            currencies: series.currencies.clone(),
            points,
        }
    }
}

impl Default for ResampleService {
    fn default() -> Self {
        Self::new()
    }
}
