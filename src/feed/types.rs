//! Price feed types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One timestamped electricity price reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Price in cents per kWh
    pub price_cents: Decimal,
    /// Time the reading applies to
    pub timestamp: DateTime<Utc>,
}
