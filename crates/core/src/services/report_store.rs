use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::errors::CoreError;
use crate::models::series::{RateRecord, RateSeries};

/// Date format used by the report files, e.g. `05-Jan-22`.
const DATE_FORMAT: &str = "%d-%b-%y";

/// File name prefix of the yearly report CSVs.
const REPORT_PREFIX: &str = "Exchange_Rate_Report_";

/// Loads yearly exchange rate report CSVs into in-memory series.
///
/// Reports live in a single directory, one file per year named
/// `Exchange_Rate_Report_<year>.csv`. The first column is the date in
/// `DD-Mon-YY` format; every remaining column is a currency code with
/// numeric rates against the base currency (USD). Cells that are empty
/// or non-numeric load as missing values; nothing is interpolated.
pub struct ReportStore {
    reports_dir: PathBuf,
}

impl ReportStore {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    /// Path of the report file for a year.
    #[must_use]
    pub fn report_path(&self, year: i32) -> PathBuf {
        self.reports_dir.join(format!("{REPORT_PREFIX}{year}.csv"))
    }

    /// Years that have a report file on disk, sorted ascending.
    /// An unreadable directory yields an empty list rather than an error,
    /// so the year dropdown can still render.
    #[must_use]
    pub fn available_years(&self) -> Vec<i32> {
        let Ok(entries) = std::fs::read_dir(&self.reports_dir) else {
            return Vec::new();
        };

        let mut years: Vec<i32> = entries
            .filter_map(|entry| {
                let name = entry.ok()?.file_name();
                let name = name.to_str()?;
                let stem = name
                    .strip_prefix(REPORT_PREFIX)?
                    .strip_suffix(".csv")?;
                stem.parse().ok()
            })
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Load the report for `year` into a new [`RateSeries`].
    ///
    /// Fails with `DataUnavailable` when no report exists for the year or
    /// the file cannot be read, and `MalformedRecord` when any row's date
    /// does not parse.
    pub fn load(&self, year: i32) -> Result<RateSeries, CoreError> {
        let path = self.report_path(year);
        let file = File::open(&path).map_err(|e| {
            CoreError::DataUnavailable(format!(
                "no report for year {year} at {}: {e}",
                path.display()
            ))
        })?;

        let series = Self::parse(file, year, &path)?;
        log::debug!(
            "loaded {} records, {} currencies for year {year}",
            series.records.len(),
            series.currencies.len()
        );
        Ok(series)
    }

    fn parse(file: File, year: i32, path: &Path) -> Result<RateSeries, CoreError> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

        let headers = reader.headers().map_err(|e| {
            CoreError::DataUnavailable(format!("unreadable header in {}: {e}", path.display()))
        })?;
        // First column is the date; the rest are currency codes.
        let currencies: Vec<String> = headers
            .iter()
            .skip(1)
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for (row_idx, row) in reader.records().enumerate() {
            let row = row?;
            let Some(date_cell) = row.get(0) else {
                continue; // blank line
            };

            let date = NaiveDate::parse_from_str(date_cell.trim(), DATE_FORMAT).map_err(|e| {
                CoreError::MalformedRecord(format!(
                    "row {}: cannot parse date '{}' as DD-Mon-YY: {e}",
                    row_idx + 2,
                    date_cell
                ))
            })?;

            // Empty, non-numeric, and non-finite cells (NaN/inf tokens)
            // become missing values, so they are skipped by bucket means
            // instead of poisoning them.
            let rates: Vec<Option<f64>> = (0..currencies.len())
                .map(|col| {
                    row.get(col + 1)
                        .map(str::trim)
                        .filter(|cell| !cell.is_empty())
                        .and_then(|cell| cell.parse::<f64>().ok())
                        .filter(|value| value.is_finite())
                })
                .collect();

            records.push(RateRecord { date, rates });
        }

        records.sort_by_key(|r| r.date);

        Ok(RateSeries {
            year,
            currencies,
            records,
        })
    }
}
