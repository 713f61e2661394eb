// ═══════════════════════════════════════════════════════════════════
// ResampleService Tests — calendar buckets, means, missing values
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use exchange_analyzer_core::models::period::Period;
use exchange_analyzer_core::models::series::{RateRecord, RateSeries};
use exchange_analyzer_core::services::resample_service::ResampleService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Build a single-currency series from (date, rate) pairs.
fn eur_series(rows: &[(NaiveDate, Option<f64>)]) -> RateSeries {
    RateSeries {
        year: 2022,
        currencies: vec!["EUR".to_string()],
        records: rows
            .iter()
            .map(|&(date, rate)| RateRecord {
                date,
                rates: vec![rate],
            })
            .collect(),
    }
}

#[test]
fn weekly_buckets_end_on_monday() {
    // 2022-01-03 is a Monday; Tue..Mon of the following week share one bucket
    let series = eur_series(&[
        (d(2022, 1, 3), Some(0.90)),  // Monday → its own bucket
        (d(2022, 1, 4), Some(0.92)),  // Tuesday
        (d(2022, 1, 7), Some(0.94)),  // Friday
        (d(2022, 1, 10), Some(0.96)), // next Monday, same bucket as Tue/Fri
    ]);

    let agg = ResampleService::new().resample(&series, Period::Weekly);

    assert_eq!(agg.len(), 2);
    assert_eq!(agg.points[0].date, d(2022, 1, 3));
    assert_eq!(agg.points[0].values, vec![Some(0.90)]);
    assert_eq!(agg.points[1].date, d(2022, 1, 10));
    assert_eq!(agg.points[1].values, vec![Some((0.92 + 0.94 + 0.96) / 3.0)]);
}

#[test]
fn single_record_weekly_buckets_equal_their_input() {
    // Three consecutive Mondays → three buckets, each the mean of one value
    let series = eur_series(&[
        (d(2022, 1, 3), Some(0.90)),
        (d(2022, 1, 10), Some(0.95)),
        (d(2022, 1, 17), Some(0.88)),
    ]);

    let agg = ResampleService::new().resample(&series, Period::Weekly);

    assert_eq!(agg.len(), 3);
    assert_eq!(agg.points[0].values, vec![Some(0.90)]);
    assert_eq!(agg.points[1].values, vec![Some(0.95)]);
    assert_eq!(agg.points[2].values, vec![Some(0.88)]);
}

#[test]
fn monthly_bucket_value_is_arithmetic_mean() {
    let rates = [0.90, 0.91, 0.89, 0.93, 0.92];
    let rows: Vec<(NaiveDate, Option<f64>)> = rates
        .iter()
        .enumerate()
        .map(|(i, &r)| (d(2022, 2, 10 + i as u32), Some(r)))
        .collect();

    let agg = ResampleService::new().resample(&eur_series(&rows), Period::Monthly);

    assert_eq!(agg.len(), 1);
    assert_eq!(agg.points[0].date, d(2022, 2, 28));
    let mean = rates.iter().sum::<f64>() / rates.len() as f64;
    assert!((agg.points[0].values[0].unwrap() - mean).abs() < 1e-12);
}

#[test]
fn quarterly_and_annual_edges() {
    let series = eur_series(&[
        (d(2022, 1, 15), Some(0.90)),
        (d(2022, 5, 15), Some(0.94)),
        (d(2022, 11, 15), Some(0.98)),
    ]);
    let svc = ResampleService::new();

    let quarterly = svc.resample(&series, Period::Quarterly);
    let q_dates: Vec<NaiveDate> = quarterly.points.iter().map(|p| p.date).collect();
    assert_eq!(q_dates, vec![d(2022, 3, 31), d(2022, 6, 30), d(2022, 12, 31)]);

    let annual = svc.resample(&series, Period::Annual);
    assert_eq!(annual.len(), 1);
    assert_eq!(annual.points[0].date, d(2022, 12, 31));
    assert!((annual.points[0].values[0].unwrap() - 0.94).abs() < 1e-12);
}

#[test]
fn empty_buckets_are_omitted() {
    // January and March only — no February bucket appears
    let series = eur_series(&[
        (d(2022, 1, 5), Some(0.90)),
        (d(2022, 3, 5), Some(0.92)),
    ]);

    let agg = ResampleService::new().resample(&series, Period::Monthly);
    let dates: Vec<NaiveDate> = agg.points.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![d(2022, 1, 31), d(2022, 3, 31)]);
}

#[test]
fn bucket_dates_are_non_decreasing_for_every_period() {
    let rows: Vec<(NaiveDate, Option<f64>)> = (0..364)
        .filter_map(|offset| {
            let date = d(2022, 1, 1) + chrono::Days::new(offset);
            // Thin the series out to mimic trading days
            (offset % 7 != 0).then_some((date, Some(0.9 + (offset as f64) * 1e-4)))
        })
        .collect();
    let series = eur_series(&rows);
    let svc = ResampleService::new();

    for period in [
        Period::Weekly,
        Period::Monthly,
        Period::Quarterly,
        Period::Annual,
    ] {
        let agg = svc.resample(&series, period);
        assert!(!agg.is_empty());
        assert!(
            agg.points.windows(2).all(|w| w[0].date <= w[1].date),
            "bucket dates must be non-decreasing for {period}"
        );
    }
}

#[test]
fn missing_values_are_skipped_not_zero_filled() {
    let series = RateSeries {
        year: 2022,
        currencies: vec!["EUR".to_string(), "GBP".to_string()],
        records: vec![
            RateRecord {
                date: d(2022, 4, 4),
                rates: vec![Some(0.90), None],
            },
            RateRecord {
                date: d(2022, 4, 5),
                rates: vec![Some(0.94), None],
            },
        ],
    };

    let agg = ResampleService::new().resample(&series, Period::Monthly);

    assert_eq!(agg.len(), 1);
    // EUR averages only its present values; GBP stays missing
    assert!((agg.points[0].values[0].unwrap() - 0.92).abs() < 1e-12);
    assert_eq!(agg.points[0].values[1], None);
}

#[test]
fn empty_series_resamples_to_no_buckets() {
    let agg = ResampleService::new().resample(&eur_series(&[]), Period::Weekly);
    assert!(agg.is_empty());
}
