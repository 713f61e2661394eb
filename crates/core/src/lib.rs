pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::collections::HashMap;
use std::path::PathBuf;

use models::{
    chart::{ChartData, ChartPoint},
    conversion::{ConversionResult, CurrencyListing},
    currency::currency_description,
    period::Period,
    series::RateSeries,
};
use providers::frankfurter::FrankfurterProvider;
use providers::traits::RateProvider;
use services::{
    conversion_service::ConversionService, extrema_service::ExtremaService,
    report_store::ReportStore, resample_service::ResampleService,
};

use errors::CoreError;

/// Main entry point for the Exchange Rate Analyzer core library.
///
/// Owns the currently loaded yearly series and all services that operate
/// on it. Each public method corresponds to one user action in the
/// frontend; every failure comes back as a `CoreError` whose `Display`
/// text is suitable for surfacing directly, so no single failed action
/// takes the application down.
#[must_use]
pub struct ExchangeAnalyzer {
    store: ReportStore,
    provider: Box<dyn RateProvider>,
    resample_service: ResampleService,
    extrema_service: ExtremaService,
    conversion_service: ConversionService,
    /// Series for the currently selected year. Replaced wholesale on year
    /// change; never mutated in place.
    series: Option<RateSeries>,
}

impl std::fmt::Debug for ExchangeAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeAnalyzer")
            .field("provider", &self.provider.name())
            .field("year", &self.series.as_ref().map(|s| s.year))
            .field("records", &self.series.as_ref().map(RateSeries::len))
            .finish()
    }
}

impl ExchangeAnalyzer {
    /// Create an analyzer reading reports from `reports_dir`, with the
    /// default Frankfurter provider for live rates.
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self::with_provider(reports_dir, Box::new(FrankfurterProvider::new()))
    }

    /// Create an analyzer with a custom rate provider (used by tests).
    pub fn with_provider(reports_dir: impl Into<PathBuf>, provider: Box<dyn RateProvider>) -> Self {
        Self {
            store: ReportStore::new(reports_dir),
            provider,
            resample_service: ResampleService::new(),
            extrema_service: ExtremaService::new(),
            conversion_service: ConversionService::new(),
            series: None,
        }
    }

    // ── Year Selection ──────────────────────────────────────────────

    /// Years with a report file on disk, sorted ascending.
    #[must_use]
    pub fn available_years(&self) -> Vec<i32> {
        self.store.available_years()
    }

    /// Load the report for `year` and make it the current series.
    /// The previous series is dropped only after the new one loads, so a
    /// failed selection leaves the old year intact.
    pub fn select_year(&mut self, year: i32) -> Result<(), CoreError> {
        let series = self.store.load(year)?;
        self.series = Some(series);
        Ok(())
    }

    /// The currently loaded series, if any year has been selected.
    #[must_use]
    pub fn series(&self) -> Option<&RateSeries> {
        self.series.as_ref()
    }

    /// The currently selected year, if any.
    #[must_use]
    pub fn current_year(&self) -> Option<i32> {
        self.series.as_ref().map(|s| s.year)
    }

    /// Currency codes of the loaded series, in report column order.
    /// Populates the currency dropdowns.
    #[must_use]
    pub fn currencies(&self) -> Vec<String> {
        self.series
            .as_ref()
            .map(|s| s.currencies.clone())
            .unwrap_or_default()
    }

    // ── Charting ────────────────────────────────────────────────────

    /// Build the plot payload for one currency at the granularity named
    /// by `duration_label` (unknown labels behave like "Monthly").
    ///
    /// Resamples the loaded series, locates peak and trough, and emits
    /// one point per non-empty bucket of the selected currency.
    pub fn chart(&self, currency_code: &str, duration_label: &str) -> Result<ChartData, CoreError> {
        let series = self.series.as_ref().ok_or_else(|| {
            CoreError::DataUnavailable("no year selected — load a report first".to_string())
        })?;

        let period = Period::from_label(duration_label);
        let aggregated = self.resample_service.resample(series, period);
        let extrema = self.extrema_service.find(&aggregated, currency_code)?;

        let col = aggregated
            .column(currency_code)
            .ok_or_else(|| CoreError::UnknownColumn(currency_code.to_string()))?;
        let points = aggregated
            .points
            .iter()
            .filter_map(|p| {
                p.values.get(col).copied().flatten().map(|rate| ChartPoint {
                    date: p.date,
                    rate,
                })
            })
            .collect();

        Ok(ChartData {
            currency: extrema.currency.clone(),
            period,
            points,
            extrema,
        })
    }

    // ── Live Rates ──────────────────────────────────────────────────

    /// Convert an amount between the currencies named by two display
    /// labels (e.g. `"Euro (EUR)"`). The amount arrives as entry-widget
    /// text and is validated here.
    pub async fn convert(
        &self,
        amount_text: &str,
        source_label: &str,
        target_label: &str,
    ) -> Result<ConversionResult, CoreError> {
        self.conversion_service
            .convert(self.provider.as_ref(), amount_text, source_label, target_label)
            .await
    }

    /// Current rate table relative to `base` (provider default base when
    /// `None`), sorted by code for stable display.
    pub async fn latest_rates(
        &self,
        base: Option<&str>,
    ) -> Result<Vec<(String, f64)>, CoreError> {
        let rates = self.provider.latest_rates(base).await?;
        Ok(sorted_rates(rates))
    }

    /// Rate table against the provider's default base, joined with the
    /// human-readable currency descriptions.
    pub async fn all_currencies(&self) -> Result<Vec<CurrencyListing>, CoreError> {
        let rates = self.provider.latest_rates(None).await?;
        Ok(sorted_rates(rates)
            .into_iter()
            .map(|(code, rate)| CurrencyListing {
                description: currency_description(&code).to_string(),
                code,
                rate,
            })
            .collect())
    }
}

fn sorted_rates(rates: HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut rates: Vec<(String, f64)> = rates.into_iter().collect();
    rates.sort_by(|a, b| a.0.cmp(&b.0));
    rates
}
