//! ComEd hourly pricing API client
//!
//! Fetches the public 5-minute and hourly price feeds. Rows arrive as
//! `{"millisUTC": <epoch millis>, "price": "<millicents>"}`; prices are
//! converted to cents per kWh (millicents / 10).

use super::{PriceSample, PriceSource};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// ComEd hourly pricing API base URL
pub const COMED_API_URL: &str = "https://hourlypricing.comed.com/api";

/// Fixed error taxonomy for feed fetches
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("feed returned no data")]
    EmptyFeed,

    #[error("failed to decode feed data: {0}")]
    Decode(String),
}

/// Configuration for the ComEd client
#[derive(Debug, Clone)]
pub struct ComedConfig {
    /// Base URL for the pricing API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ComedConfig {
    fn default() -> Self {
        Self {
            base_url: COMED_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the ComEd hourly pricing API
pub struct ComedClient {
    config: ComedConfig,
    client: Client,
}

impl ComedClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(ComedConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ComedConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build a client from the feed section of the app config
    pub fn from_config(feed: &crate::config::FeedConfig) -> Self {
        Self::with_config(ComedConfig {
            base_url: feed.base_url.clone(),
            timeout: Duration::from_secs(feed.timeout_secs),
        })
    }

    /// Fetch one feed variant and convert its rows to samples
    async fn fetch_feed(&self, feed_type: &str) -> Result<Vec<PriceSample>, FeedError> {
        let raw = format!("{}?type={}", self.config.base_url, feed_type);
        let url = reqwest::Url::parse(&raw).map_err(|_| FeedError::InvalidUrl(raw.clone()))?;

        tracing::debug!(url = %url, "Fetching ComEd price feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FeedError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let rows: Vec<FeedRow> = response
            .json()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))?;

        rows.into_iter().map(FeedRow::into_sample).collect()
    }

    /// 5-minute price ticks, newest first
    pub async fn five_minute_feed(&self) -> Result<Vec<PriceSample>, FeedError> {
        let mut samples = self.fetch_feed("5minutefeed").await?;
        samples.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        tracing::debug!(sample_count = samples.len(), "Fetched 5-minute feed");
        Ok(samples)
    }

    /// Most recent 5-minute price reading
    pub async fn current_price(&self) -> Result<PriceSample, FeedError> {
        self.five_minute_feed()
            .await?
            .into_iter()
            .next()
            .ok_or(FeedError::EmptyFeed)
    }

    /// Hourly price readings, oldest first
    pub async fn hourly_feed(&self) -> Result<Vec<PriceSample>, FeedError> {
        let mut samples = self.fetch_feed("hourlyfeed").await?;
        samples.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        tracing::debug!(sample_count = samples.len(), "Fetched hourly feed");
        Ok(samples)
    }
}

impl Default for ComedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for ComedClient {
    async fn latest(&self) -> Result<PriceSample, FeedError> {
        self.current_price().await
    }

    async fn hourly(&self) -> Result<Vec<PriceSample>, FeedError> {
        self.hourly_feed().await
    }
}

/// Raw feed row as served by the API
#[derive(Debug, Deserialize)]
struct FeedRow {
    /// Unix epoch milliseconds
    #[serde(rename = "millisUTC")]
    millis_utc: i64,
    /// Price in millicents, string-encoded
    price: String,
}

impl FeedRow {
    fn into_sample(self) -> Result<PriceSample, FeedError> {
        let millicents = Decimal::from_str(&self.price)
            .map_err(|_| FeedError::Decode(format!("bad price value: {}", self.price)))?;
        let timestamp = Utc
            .timestamp_millis_opt(self.millis_utc)
            .single()
            .ok_or_else(|| FeedError::Decode(format!("bad timestamp: {}", self.millis_utc)))?;

        Ok(PriceSample {
            price_cents: millicents / dec!(10),
            timestamp,
        })
    }
}
