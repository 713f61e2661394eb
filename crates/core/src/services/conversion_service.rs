use crate::errors::CoreError;
use crate::models::conversion::ConversionResult;
use crate::models::currency::extract_code;
use crate::providers::traits::RateProvider;

/// Turns raw UI inputs into a live conversion.
///
/// The amount arrives as free-form text from an entry widget and the
/// currencies as display labels like `"Euro (EUR)"`; both are validated
/// here so the provider only ever sees clean codes and numbers.
pub struct ConversionService;

impl ConversionService {
    pub fn new() -> Self {
        Self
    }

    /// Parse an amount entered by the user.
    /// Fails with `InvalidSelection` for non-numeric or negative input.
    pub fn parse_amount(&self, amount_text: &str) -> Result<f64, CoreError> {
        let amount: f64 = amount_text.trim().parse().map_err(|_| {
            CoreError::InvalidSelection(format!("'{amount_text}' is not a valid amount"))
        })?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::InvalidSelection(format!(
                "amount must be a non-negative number, got '{amount_text}'"
            )));
        }
        Ok(amount)
    }

    /// Convert `amount_text` of the currency in `source_label` into the
    /// currency in `target_label` via the provider.
    pub async fn convert(
        &self,
        provider: &dyn RateProvider,
        amount_text: &str,
        source_label: &str,
        target_label: &str,
    ) -> Result<ConversionResult, CoreError> {
        let amount = self.parse_amount(amount_text)?;
        let from = extract_code(source_label)?;
        let to = extract_code(target_label)?;

        let converted = provider.convert(amount, &from, &to).await?;

        Ok(ConversionResult {
            from,
            to,
            amount,
            converted,
        })
    }
}

impl Default for ConversionService {
    fn default() -> Self {
        Self::new()
    }
}
