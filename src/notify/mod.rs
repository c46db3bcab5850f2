//! Notification rendering and delivery
//!
//! Turns fired alerts into title/body notifications and hands them to a
//! delivery sink. Delivery is best-effort: a failed delivery is logged by
//! the caller and dropped, never retried.

mod sink;

pub use sink::{AlertSink, LogSink, NotifySendSink};

use crate::alert::{Alert, AlertKind};

/// A rendered notification ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Build the user-facing notification for a fired alert
pub fn render(alert: &Alert) -> Notification {
    let price = format!("{:.2}", alert.price_cents);
    match alert.kind {
        AlertKind::High => Notification {
            title: "High Electricity Price Alert".to_string(),
            body: format!(
                "Current price is above your threshold: {price}¢ per kWh. \
                 Consider reducing electricity usage."
            ),
        },
        AlertKind::Low => Notification {
            title: "Low Electricity Price Alert".to_string(),
            body: format!(
                "Current price is below your threshold: {price}¢ per kWh. \
                 Good time to run large appliances."
            ),
        },
        AlertKind::Negative => Notification {
            title: "Negative Price Alert".to_string(),
            body: format!(
                "Being paid to use electricity! Current price is {price}¢ per kWh."
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PriceCategory;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_high() {
        let alert = Alert::new(
            AlertKind::High,
            dec!(16.3),
            PriceCategory::High,
            Utc::now(),
        );
        let n = render(&alert);
        assert_eq!(n.title, "High Electricity Price Alert");
        assert!(n.body.contains("16.30¢ per kWh"));
        assert!(n.body.contains("reducing"));
    }

    #[test]
    fn test_render_low() {
        let alert = Alert::new(AlertKind::Low, dec!(1.8), PriceCategory::Low, Utc::now());
        let n = render(&alert);
        assert_eq!(n.title, "Low Electricity Price Alert");
        assert!(n.body.contains("1.80¢ per kWh"));
    }

    #[test]
    fn test_render_negative() {
        let alert = Alert::new(
            AlertKind::Negative,
            dec!(-1.2),
            PriceCategory::Negative,
            Utc::now(),
        );
        let n = render(&alert);
        assert_eq!(n.title, "Negative Price Alert");
        assert!(n.body.contains("-1.20¢"));
        assert!(n.body.contains("paid"));
    }
}
