//! Rate table retrieval seam for the currency converter.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Mapping from currency code to its USD-based exchange rate, as returned
/// by the provider for a single point in time.
pub type RateTable = HashMap<String, f64>;

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateTable>;
}
