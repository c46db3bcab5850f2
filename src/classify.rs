//! Price classification
//!
//! Maps a price in cents/kWh to a presentation category with an associated
//! label and usage advice. Band boundaries are closed on the lower bound and
//! open on the upper bound.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Price band a reading falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceCategory {
    /// Below zero; the grid pays consumers to draw load
    Negative,
    Low,
    Medium,
    High,
}

impl PriceCategory {
    /// Short uppercase label for display
    pub fn label(&self) -> &'static str {
        match self {
            PriceCategory::Negative => "NEGATIVE",
            PriceCategory::Low => "LOW",
            PriceCategory::Medium => "MEDIUM",
            PriceCategory::High => "HIGH",
        }
    }

    /// Usage guidance for the category
    pub fn advice(&self) -> &'static str {
        match self {
            PriceCategory::Negative => {
                "Being paid to use electricity! Great time to use appliances."
            }
            PriceCategory::Low => "Low price. Good time to run large appliances.",
            PriceCategory::Medium => "Medium price. Moderate electricity usage advised.",
            PriceCategory::High => "High price. Consider reducing electricity usage.",
        }
    }
}

/// Classification band boundaries in cents/kWh
///
/// The Negative/Low boundary is fixed at zero; the other two are
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBands {
    /// Upper bound of the LOW band, exclusive
    pub low_max: Decimal,
    /// Upper bound of the MEDIUM band, exclusive
    pub medium_max: Decimal,
}

impl Default for PriceBands {
    fn default() -> Self {
        Self {
            low_max: dec!(5.0),
            medium_max: dec!(14.0),
        }
    }
}

impl PriceBands {
    /// Classify a price in cents/kWh
    pub fn classify(&self, price_cents: Decimal) -> PriceCategory {
        if price_cents < Decimal::ZERO {
            PriceCategory::Negative
        } else if price_cents < self.low_max {
            PriceCategory::Low
        } else if price_cents < self.medium_max {
            PriceCategory::Medium
        } else {
            PriceCategory::High
        }
    }
}

/// Classify with the default band boundaries
pub fn classify(price_cents: Decimal) -> PriceCategory {
    PriceBands::default().classify(price_cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_prices() {
        assert_eq!(classify(dec!(-0.1)), PriceCategory::Negative);
        assert_eq!(classify(dec!(-3.0)), PriceCategory::Negative);
        assert_eq!(classify(dec!(-100)), PriceCategory::Negative);
    }

    #[test]
    fn test_low_band() {
        assert_eq!(classify(dec!(0)), PriceCategory::Low);
        assert_eq!(classify(dec!(2.5)), PriceCategory::Low);
        assert_eq!(classify(dec!(4.9)), PriceCategory::Low);
    }

    #[test]
    fn test_medium_band() {
        assert_eq!(classify(dec!(5.0)), PriceCategory::Medium);
        assert_eq!(classify(dec!(8.7)), PriceCategory::Medium);
        assert_eq!(classify(dec!(13.9)), PriceCategory::Medium);
    }

    #[test]
    fn test_high_band() {
        assert_eq!(classify(dec!(14.0)), PriceCategory::High);
        assert_eq!(classify(dec!(16.3)), PriceCategory::High);
        assert_eq!(classify(dec!(99.9)), PriceCategory::High);
    }

    #[test]
    fn test_boundaries_closed_below_open_above() {
        // Lower bound belongs to the band, upper bound to the next one up
        assert_eq!(classify(dec!(0)), PriceCategory::Low);
        assert_eq!(classify(dec!(5.0)), PriceCategory::Medium);
        assert_eq!(classify(dec!(14.0)), PriceCategory::High);
    }

    #[test]
    fn test_classify_is_pure() {
        let bands = PriceBands::default();
        assert_eq!(bands.classify(dec!(7.2)), bands.classify(dec!(7.2)));
    }

    #[test]
    fn test_custom_bands() {
        let bands = PriceBands {
            low_max: dec!(3.0),
            medium_max: dec!(10.0),
        };
        assert_eq!(bands.classify(dec!(4.0)), PriceCategory::Medium);
        assert_eq!(bands.classify(dec!(10.0)), PriceCategory::High);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PriceCategory::Negative.label(), "NEGATIVE");
        assert_eq!(PriceCategory::Low.label(), "LOW");
        assert_eq!(PriceCategory::Medium.label(), "MEDIUM");
        assert_eq!(PriceCategory::High.label(), "HIGH");
    }

    #[test]
    fn test_advice_mentions_usage() {
        assert!(PriceCategory::High.advice().contains("reducing"));
        assert!(PriceCategory::Low.advice().contains("Good time"));
        assert!(PriceCategory::Negative.advice().contains("paid"));
    }
}
