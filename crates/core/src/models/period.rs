use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Resampling granularity for a rate series.
///
/// Buckets are aligned to calendar boundaries, not fixed-count windows:
/// a record belongs to the bucket whose right edge is the first boundary
/// on or after its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Week ending on Monday: a Monday record maps to its own date.
    Weekly,
    /// Last calendar day of the month.
    Monthly,
    /// Last calendar day of the quarter.
    Quarterly,
    /// December 31 of the record's year.
    Annual,
}

impl Period {
    /// Parse a duration label from the UI. Unrecognized labels fall back
    /// to `Monthly`, matching the plot dropdown's default behavior.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            l if l.eq_ignore_ascii_case("weekly") => Period::Weekly,
            l if l.eq_ignore_ascii_case("quarterly") => Period::Quarterly,
            l if l.eq_ignore_ascii_case("annual") => Period::Annual,
            _ => Period::Monthly,
        }
    }

    /// Right edge of the bucket containing `date`.
    #[must_use]
    pub fn bucket_end(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Weekly => next_monday_on_or_after(date),
            Period::Monthly => month_end(date.year(), date.month()),
            Period::Quarterly => {
                let quarter_last_month = ((date.month() - 1) / 3) * 3 + 3;
                month_end(date.year(), quarter_last_month)
            }
            Period::Annual => month_end(date.year(), 12),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Weekly => write!(f, "Weekly"),
            Period::Monthly => write!(f, "Monthly"),
            Period::Quarterly => write!(f, "Quarterly"),
            Period::Annual => write!(f, "Annual"),
        }
    }
}

/// First Monday on or after `date` (`date` itself when it is a Monday).
fn next_monday_on_or_after(date: NaiveDate) -> NaiveDate {
    let days_ahead = (7 - date.weekday().num_days_from_monday() as u64) % 7;
    // Adding at most 6 days never overflows NaiveDate's range in practice,
    // but stay total rather than panic.
    date.checked_add_days(Days::new(days_ahead)).unwrap_or(date)
}

/// Last calendar day of the given month.
fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // Both constructions are valid for any month in 1..=12.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap_or(NaiveDate::MIN))
}

impl Default for Period {
    fn default() -> Self {
        Period::Monthly
    }
}
