//! Tool surface exposed to the host tool-calling framework.
//!
//! The host registers a [`Tool`] by its name, description, and parameter
//! declarations, then invokes it with JSON arguments. Schema enforcement
//! and transport belong to the host; this module only conforms to the
//! calling contract.

use crate::converter::{ConversionRequest, CurrencyConverter};
use crate::error::ConvertError;
use crate::providers::exchangerate_api::ExchangeRateApiProvider;
use crate::rate_provider::RateProvider;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Argument types a tool parameter can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Number,
    String,
    Boolean,
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: ParameterType,
    pub description: &'static str,
    pub required: bool,
}

/// A named callable the host framework can register and invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters(&self) -> Vec<ParameterSpec>;
    async fn execute(&self, args: Value) -> Result<Value>;
}

/// Converts USD amounts to GBP, EUR, CAD and CNY using latest rates.
pub struct CurrencyConverterTool<P: RateProvider> {
    converter: CurrencyConverter<P>,
}

impl CurrencyConverterTool<ExchangeRateApiProvider> {
    /// Tool bound to the production rate endpoint.
    pub fn new() -> Self {
        Self::with_provider(ExchangeRateApiProvider::default())
    }
}

impl Default for CurrencyConverterTool<ExchangeRateApiProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RateProvider> CurrencyConverterTool<P> {
    /// Tool backed by a custom rate provider.
    pub fn with_provider(provider: P) -> Self {
        CurrencyConverterTool {
            converter: CurrencyConverter::new(provider),
        }
    }
}

#[async_trait]
impl<P: RateProvider> Tool for CurrencyConverterTool<P> {
    fn name(&self) -> &str {
        "RW-currency-converter"
    }

    fn description(&self) -> &str {
        "Converts USD amount to GBP, EUR, CAD, and CNY using latest exchange rates"
    }

    fn parameters(&self) -> Vec<ParameterSpec> {
        vec![ParameterSpec {
            name: "usdAmount",
            kind: ParameterType::Number,
            description: "The amount in USD to convert",
            required: true,
        }]
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        // Argument decoding failures surface in the same normalized shape
        // as conversion failures
        let request: ConversionRequest = serde_json::from_value(args)
            .map_err(|e| ConvertError::normalize(anyhow!("Invalid arguments: {e}")))?;
        let result = self.converter.convert(request).await?;
        Ok(serde_json::to_value(result)?)
    }
}
