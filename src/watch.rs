//! Polling watch loop
//!
//! Periodically fetches the current price, classifies it, evaluates alert
//! thresholds, and dispatches notifications. The watcher is the single
//! owner of the notifier's rate-limit state; ticks run sequentially.

use crate::alert::{Alert, AlertKind, ThresholdNotifier};
use crate::classify::{PriceBands, PriceCategory};
use crate::config::{AlertConfig, Config};
use crate::feed::{FeedError, PriceSample, PriceSource};
use crate::notify::{self, AlertSink};
use crate::telemetry;
use chrono::Utc;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// Outcome of a single watch tick
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub sample: PriceSample,
    pub category: PriceCategory,
    pub fired: Vec<AlertKind>,
}

/// Drives fetch -> classify -> evaluate -> deliver on an interval
pub struct Watcher<S, K> {
    source: S,
    sink: K,
    bands: PriceBands,
    alerts: AlertConfig,
    interval: Duration,
    notifier: ThresholdNotifier,
}

impl<S: PriceSource, K: AlertSink> Watcher<S, K> {
    /// Create a watcher from the app configuration
    pub fn new(source: S, sink: K, config: &Config) -> Self {
        Self {
            source,
            sink,
            bands: config.bands.bands(),
            alerts: config.alerts.clone(),
            interval: Duration::from_secs(config.feed.refresh_interval_minutes * 60),
            notifier: ThresholdNotifier::new(),
        }
    }

    /// Fetch one sample and evaluate alerts for it
    pub async fn tick(&mut self) -> Result<TickOutcome, FeedError> {
        let started = Instant::now();
        let sample = self.source.latest().await?;
        telemetry::record_fetch_latency(started.elapsed());

        let category = self.bands.classify(sample.price_cents);
        telemetry::set_price_gauge(&sample);
        tracing::info!(
            price_cents = %sample.price_cents,
            category = category.label(),
            "price update"
        );

        let now = Utc::now();
        let fired = self.notifier.evaluate(&sample, &self.alerts, now);

        for kind in &fired {
            let alert = Alert::new(*kind, sample.price_cents, category, now);
            telemetry::count_alert(*kind);
            tracing::info!(kind = ?kind, price_cents = %alert.price_cents, "alert fired");

            // Fire-and-forget: a failed delivery is logged and dropped
            let notification = notify::render(&alert);
            if let Err(e) = self.sink.deliver(&notification).await {
                tracing::warn!(error = %e, kind = ?kind, "notification delivery failed");
            }
        }

        Ok(TickOutcome {
            sample,
            category,
            fired,
        })
    }

    /// Run ticks forever at the configured refresh interval
    ///
    /// Fetch errors are logged and the loop continues; the next tick may
    /// succeed.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "starting watch loop"
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if let Err(e) = self.tick().await {
                tracing::error!(error = %e, "price fetch failed");
            }
        }
    }
}
