//! Integration tests for the watch loop
//!
//! Drives `Watcher::tick` with a stub price source and a collecting sink,
//! end to end through classification, threshold evaluation, rendering, and
//! delivery.

use async_trait::async_trait;
use chrono::Utc;
use comed_watch::classify::PriceCategory;
use comed_watch::config::Config;
use comed_watch::feed::{FeedError, PriceSample, PriceSource};
use comed_watch::notify::{AlertSink, Notification};
use comed_watch::watch::Watcher;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

/// Always returns the same price, stamped at call time
struct FixedSource {
    price_cents: Decimal,
}

#[async_trait]
impl PriceSource for FixedSource {
    async fn latest(&self) -> Result<PriceSample, FeedError> {
        Ok(PriceSample {
            price_cents: self.price_cents,
            timestamp: Utc::now(),
        })
    }

    async fn hourly(&self) -> Result<Vec<PriceSample>, FeedError> {
        Ok(vec![])
    }
}

/// Always fails, for fetch-error propagation
struct BrokenSource;

#[async_trait]
impl PriceSource for BrokenSource {
    async fn latest(&self) -> Result<PriceSample, FeedError> {
        Err(FeedError::EmptyFeed)
    }

    async fn hourly(&self) -> Result<Vec<PriceSample>, FeedError> {
        Err(FeedError::EmptyFeed)
    }
}

/// Records every delivered notification
#[derive(Clone, Default)]
struct CollectingSink {
    delivered: Arc<Mutex<Vec<Notification>>>,
}

impl CollectingSink {
    fn notifications(&self) -> Vec<Notification> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlertSink for CollectingSink {
    async fn deliver(&self, notification: &Notification) -> anyhow::Result<()> {
        self.delivered.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

fn test_config() -> Config {
    let toml = r#"
        [alerts]
        high_price_threshold = 10.0
        low_price_threshold = 2.0
    "#;
    let config: Config = toml::from_str(toml).unwrap();
    config.validate().unwrap();
    config
}

#[tokio::test]
async fn test_high_price_tick_delivers_once() {
    let sink = CollectingSink::default();
    let source = FixedSource {
        price_cents: dec!(12.0),
    };
    let mut watcher = Watcher::new(source, sink.clone(), &test_config());

    let outcome = watcher.tick().await.unwrap();
    assert_eq!(outcome.category, PriceCategory::Medium);
    assert_eq!(outcome.fired.len(), 1);

    let delivered = sink.notifications();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].title, "High Electricity Price Alert");
    assert!(delivered[0].body.contains("12.00¢"));

    // Second tick lands inside the 2h window: no new delivery
    let outcome = watcher.tick().await.unwrap();
    assert!(outcome.fired.is_empty());
    assert_eq!(sink.notifications().len(), 1);
}

#[tokio::test]
async fn test_negative_price_tick() {
    let sink = CollectingSink::default();
    let source = FixedSource {
        price_cents: dec!(-1.2),
    };
    let mut watcher = Watcher::new(source, sink.clone(), &test_config());

    let outcome = watcher.tick().await.unwrap();
    assert_eq!(outcome.category, PriceCategory::Negative);

    let delivered = sink.notifications();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].title, "Negative Price Alert");
}

#[tokio::test]
async fn test_quiet_price_delivers_nothing() {
    let sink = CollectingSink::default();
    let source = FixedSource {
        price_cents: dec!(5.5),
    };
    let mut watcher = Watcher::new(source, sink.clone(), &test_config());

    let outcome = watcher.tick().await.unwrap();
    assert_eq!(outcome.category, PriceCategory::Medium);
    assert!(outcome.fired.is_empty());
    assert!(sink.notifications().is_empty());
}

#[tokio::test]
async fn test_disabled_notifications_deliver_nothing() {
    let toml = r#"
        [alerts]
        high_price_threshold = 10.0
        low_price_threshold = 2.0
        notifications_enabled = false
    "#;
    let config: Config = toml::from_str(toml).unwrap();

    let sink = CollectingSink::default();
    let source = FixedSource {
        price_cents: dec!(50.0),
    };
    let mut watcher = Watcher::new(source, sink.clone(), &config);

    let outcome = watcher.tick().await.unwrap();
    assert!(outcome.fired.is_empty());
    assert!(sink.notifications().is_empty());
}

#[tokio::test]
async fn test_fetch_error_propagates_from_tick() {
    let sink = CollectingSink::default();
    let mut watcher = Watcher::new(BrokenSource, sink.clone(), &test_config());

    let result = watcher.tick().await;
    assert!(matches!(result, Err(FeedError::EmptyFeed)));
    assert!(sink.notifications().is_empty());
}
