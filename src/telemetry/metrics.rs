//! Prometheus metrics

use crate::alert::AlertKind;
use crate::feed::PriceSample;
use metrics_exporter_prometheus::PrometheusBuilder;
use rust_decimal::prelude::ToPrimitive;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Start the Prometheus scrape endpoint
pub(super) fn install_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// Record the latest price reading
pub fn set_price_gauge(sample: &PriceSample) {
    if let Some(cents) = sample.price_cents.to_f64() {
        metrics::gauge!("comedwatch_price_cents").set(cents);
    }
}

/// Record feed fetch latency
pub fn record_fetch_latency(elapsed: Duration) {
    metrics::histogram!("comedwatch_feed_latency_ms").record(elapsed.as_millis() as f64);
}

/// Count a fired alert by kind
pub fn count_alert(kind: AlertKind) {
    let label = match kind {
        AlertKind::High => "high",
        AlertKind::Low => "low",
        AlertKind::Negative => "negative",
    };
    metrics::counter!("comedwatch_alerts_total", "kind" => label).increment(1);
}
