//! Converts a USD amount into a fixed set of target currencies.

use crate::error::ConvertError;
use crate::rate_provider::RateProvider;
use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Currencies converted on every call, in output order.
pub const TARGET_CURRENCIES: [&str; 4] = ["GBP", "EUR", "CAD", "CNY"];

/// A single conversion request, deserialized from the host's JSON arguments.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ConversionRequest {
    #[serde(rename = "usdAmount")]
    pub usd_amount: f64,
}

/// One line item of the conversion output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub currency: String,
    /// Rate rounded to 4 decimal places for display.
    pub rate: f64,
    /// `usd_amount * rate`, rounded to 2 decimal places.
    pub converted_amount: f64,
}

/// Result of a completed conversion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub original_amount: f64,
    pub base_currency: String,
    /// Line items in [`TARGET_CURRENCIES`] order. Currencies missing from
    /// the rate table are skipped, so fewer than four entries may appear.
    pub conversions: Vec<ExchangeRate>,
    /// ISO-8601 instant captured when the conversion completed.
    pub timestamp: String,
}

/// Converts USD amounts using rates from a [`RateProvider`].
///
/// Rates are fetched fresh on every call; nothing is cached or retried.
pub struct CurrencyConverter<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> CurrencyConverter<P> {
    pub fn new(provider: P) -> Self {
        CurrencyConverter { provider }
    }

    /// Converts `request.usd_amount` into the target currencies.
    ///
    /// Every failure is reported as [`ConvertError::ConversionFailed`]
    /// carrying the original cause in its message.
    pub async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionResult, ConvertError> {
        self.convert_inner(request)
            .await
            .map_err(ConvertError::normalize)
    }

    async fn convert_inner(&self, request: ConversionRequest) -> Result<ConversionResult> {
        if request.usd_amount < 0.0 {
            return Err(ConvertError::InvalidInput.into());
        }

        let rates = self.provider.fetch_rates().await?;
        debug!("Fetched {} rates", rates.len());

        let mut conversions = Vec::with_capacity(TARGET_CURRENCIES.len());
        for currency in TARGET_CURRENCIES {
            let Some(&rate) = rates.get(currency) else {
                debug!("No rate for {currency}, skipping");
                continue;
            };
            conversions.push(ExchangeRate {
                currency: currency.to_string(),
                rate: round_to(rate, 4),
                converted_amount: round_to(request.usd_amount * rate, 2),
            });
        }

        Ok(ConversionResult {
            original_amount: request.usd_amount,
            base_currency: "USD".to_string(),
            conversions,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
