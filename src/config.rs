//! Configuration types for comed-watch
//!
//! Settings load from a TOML file with per-field defaults, so a partial or
//! missing section falls back to the shipped values. Threshold validation
//! happens here, at the load boundary, never inside alert evaluation.

use crate::classify::PriceBands;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use thiserror::Error;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub alerts: AlertConfig,
    #[serde(default)]
    pub bands: BandsConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Invalid configuration values, rejected at load time
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("low price threshold {low}¢ must be below high price threshold {high}¢")]
    ThresholdOrder { low: Decimal, high: Decimal },

    #[error("low price threshold {0}¢ must not be negative")]
    NegativeLowThreshold(Decimal),

    #[error("high price threshold {0}¢ is outside the supported range (0, 100]")]
    HighThresholdOutOfRange(Decimal),

    #[error("price bands must satisfy 0 < low_max < medium_max, got {low_max}¢ and {medium_max}¢")]
    BandOrder { low_max: Decimal, medium_max: Decimal },

    #[error("refresh interval must be at least 1 minute")]
    RefreshIntervalZero,
}

/// Price feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Base URL of the ComEd hourly pricing API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Minutes between watch-loop fetches
    #[serde(default = "default_refresh_minutes")]
    pub refresh_interval_minutes: u64,
}

fn default_base_url() -> String {
    crate::feed::COMED_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_refresh_minutes() -> u64 {
    15
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 10,
            refresh_interval_minutes: 15,
        }
    }
}

/// Alert threshold configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AlertConfig {
    /// Alert when the price reaches this value (cents/kWh)
    #[serde(default = "default_high_threshold")]
    pub high_price_threshold: Decimal,

    /// Alert when the price drops to this value or below (cents/kWh)
    #[serde(default = "default_low_threshold")]
    pub low_price_threshold: Decimal,

    /// Master switch; disables every alert kind when false
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,

    /// Alert on sub-zero prices
    #[serde(default = "default_true")]
    pub negative_price_alerts: bool,
}

fn default_high_threshold() -> Decimal {
    dec!(14.0)
}
fn default_low_threshold() -> Decimal {
    dec!(2.0)
}
fn default_true() -> bool {
    true
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            high_price_threshold: dec!(14.0),
            low_price_threshold: dec!(2.0),
            notifications_enabled: true,
            negative_price_alerts: true,
        }
    }
}

impl AlertConfig {
    /// Reject threshold pairs that would make alert ranges overlap or
    /// leave the supported price band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.low_price_threshold < Decimal::ZERO {
            return Err(ConfigError::NegativeLowThreshold(self.low_price_threshold));
        }
        if self.high_price_threshold <= Decimal::ZERO || self.high_price_threshold > dec!(100) {
            return Err(ConfigError::HighThresholdOutOfRange(
                self.high_price_threshold,
            ));
        }
        if self.low_price_threshold >= self.high_price_threshold {
            return Err(ConfigError::ThresholdOrder {
                low: self.low_price_threshold,
                high: self.high_price_threshold,
            });
        }
        Ok(())
    }
}

/// Classification band configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BandsConfig {
    /// Upper bound of the LOW band, exclusive (cents/kWh)
    #[serde(default = "default_low_max")]
    pub low_max: Decimal,

    /// Upper bound of the MEDIUM band, exclusive (cents/kWh)
    #[serde(default = "default_medium_max")]
    pub medium_max: Decimal,
}

fn default_low_max() -> Decimal {
    dec!(5.0)
}
fn default_medium_max() -> Decimal {
    dec!(14.0)
}

impl Default for BandsConfig {
    fn default() -> Self {
        Self {
            low_max: dec!(5.0),
            medium_max: dec!(14.0),
        }
    }
}

impl BandsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.low_max <= Decimal::ZERO || self.low_max >= self.medium_max {
            return Err(ConfigError::BandOrder {
                low_max: self.low_max,
                medium_max: self.medium_max,
            });
        }
        Ok(())
    }

    pub fn bands(&self) -> PriceBands {
        PriceBands {
            low_max: self.low_max,
            medium_max: self.medium_max,
        }
    }
}

/// Notification delivery configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotifyConfig {
    #[serde(default)]
    pub mode: NotifyMode,
}

/// Delivery sink selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotifyMode {
    /// Write alerts to the structured log
    #[default]
    Log,
    /// Fire a desktop notification via notify-send
    Desktop,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Port for the Prometheus scrape endpoint; disabled when absent
    #[serde(default)]
    pub metrics_port: Option<u16>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            metrics_port: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section; invalid values never reach alert evaluation
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.alerts.validate()?;
        self.bands.validate()?;
        if self.feed.refresh_interval_minutes == 0 {
            return Err(ConfigError::RefreshIntervalZero);
        }
        Ok(())
    }
}
