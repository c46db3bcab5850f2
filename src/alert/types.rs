//! Alert types

use crate::classify::PriceCategory;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of price alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Price at or above the high threshold
    High,
    /// Price at or below the low threshold (but not negative)
    Low,
    /// Price below zero
    Negative,
}

impl AlertKind {
    /// Minimum elapsed time before the same kind may fire again
    ///
    /// Negative prices re-alert sooner: they are more actionable and tend
    /// to be short-lived compared to threshold crossings.
    pub fn rate_limit_window(&self) -> Duration {
        match self {
            AlertKind::High | AlertKind::Low => Duration::hours(2),
            AlertKind::Negative => Duration::hours(1),
        }
    }
}

/// A fired price alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert identifier
    pub id: Uuid,
    /// Which threshold fired
    pub kind: AlertKind,
    /// Price that triggered the alert, cents/kWh
    pub price_cents: Decimal,
    /// Classification of the triggering price
    pub category: PriceCategory,
    /// When the alert fired
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    /// Create a new alert
    pub fn new(
        kind: AlertKind,
        price_cents: Decimal,
        category: PriceCategory,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            price_cents,
            category,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_windows() {
        assert_eq!(AlertKind::High.rate_limit_window(), Duration::hours(2));
        assert_eq!(AlertKind::Low.rate_limit_window(), Duration::hours(2));
        assert_eq!(AlertKind::Negative.rate_limit_window(), Duration::hours(1));
    }

    #[test]
    fn test_alert_ids_are_unique() {
        let now = Utc::now();
        let a = Alert::new(
            AlertKind::High,
            rust_decimal_macros::dec!(16.0),
            PriceCategory::High,
            now,
        );
        let b = Alert::new(
            AlertKind::High,
            rust_decimal_macros::dec!(16.0),
            PriceCategory::High,
            now,
        );
        assert_ne!(a.id, b.id);
    }
}
