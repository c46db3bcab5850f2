//! Threshold alert evaluation
//!
//! Decides which alert kinds fire for a price sample, enforcing a minimum
//! re-notification interval per kind. Windows compare true elapsed duration,
//! not calendar hour components, so an alert at 12:59 does not re-fire at
//! 13:01.

use super::AlertKind;
use crate::config::AlertConfig;
use crate::feed::PriceSample;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Evaluates price samples against user thresholds
///
/// Tracks when each alert kind last fired. The map lives in memory only; a
/// restart clears it. The check-then-update of a kind's timestamp is not
/// atomic, so a single owner must serialize calls to `evaluate`.
pub struct ThresholdNotifier {
    last_fired: HashMap<AlertKind, DateTime<Utc>>,
}

impl ThresholdNotifier {
    /// Create a notifier with no rate-limit history
    pub fn new() -> Self {
        Self {
            last_fired: HashMap::new(),
        }
    }

    /// Evaluate one sample; returns the kinds that fire, in a fixed order
    ///
    /// Kinds are evaluated independently, so more than one may fire for the
    /// same sample. A misconfigured threshold pair (low >= high) makes the
    /// High and Low ranges overlap; both then fire rather than erroring.
    pub fn evaluate(
        &mut self,
        sample: &PriceSample,
        config: &AlertConfig,
        now: DateTime<Utc>,
    ) -> Vec<AlertKind> {
        if !config.notifications_enabled {
            return Vec::new();
        }

        let price = sample.price_cents;
        let mut fired = Vec::new();

        if price >= config.high_price_threshold && self.ready(AlertKind::High, now) {
            self.last_fired.insert(AlertKind::High, now);
            fired.push(AlertKind::High);
        }

        // The >= 0 guard keeps Low and Negative mutually exclusive
        if price >= Decimal::ZERO
            && price <= config.low_price_threshold
            && self.ready(AlertKind::Low, now)
        {
            self.last_fired.insert(AlertKind::Low, now);
            fired.push(AlertKind::Low);
        }

        if price < Decimal::ZERO
            && config.negative_price_alerts
            && self.ready(AlertKind::Negative, now)
        {
            self.last_fired.insert(AlertKind::Negative, now);
            fired.push(AlertKind::Negative);
        }

        fired
    }

    /// Whether the kind's rate-limit window has elapsed (or it never fired)
    fn ready(&self, kind: AlertKind, now: DateTime<Utc>) -> bool {
        match self.last_fired.get(&kind) {
            None => true,
            Some(last) => now - *last >= kind.rate_limit_window(),
        }
    }

    /// When the kind last fired, if ever
    pub fn last_fired(&self, kind: AlertKind) -> Option<DateTime<Utc>> {
        self.last_fired.get(&kind).copied()
    }
}

impl Default for ThresholdNotifier {
    fn default() -> Self {
        Self::new()
    }
}
