//! Price history statistics
//!
//! Day grouping and min/max/average summaries over hourly samples. Days are
//! reckoned in the utility's local timezone (America/Chicago), matching how
//! the feed publishes its trading days.

use crate::feed::PriceSample;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::America::Chicago;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Timezone the feed's trading days are reckoned in
pub const FEED_TZ: Tz = Chicago;

/// Aggregate statistics over a set of samples
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub average: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    /// Price of the most recent sample
    pub latest: Decimal,
}

impl PriceStats {
    /// Returns None for an empty slice
    pub fn from_samples(samples: &[PriceSample]) -> Option<Self> {
        let (average, min, max) = fold_prices(samples.iter().map(|s| s.price_cents))?;
        let latest = samples
            .iter()
            .max_by_key(|s| s.timestamp)
            .map(|s| s.price_cents)?;

        Some(Self {
            average,
            min,
            max,
            latest,
        })
    }
}

/// Per-day price summary
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub average: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub sample_count: usize,
}

/// Local calendar date a sample falls on
pub fn feed_date(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&FEED_TZ).date_naive()
}

/// Group samples into per-day summaries, newest day first
pub fn daily_summaries(samples: &[PriceSample]) -> Vec<DailySummary> {
    let mut by_day: BTreeMap<NaiveDate, Vec<Decimal>> = BTreeMap::new();
    for sample in samples {
        by_day
            .entry(feed_date(sample.timestamp))
            .or_default()
            .push(sample.price_cents);
    }

    by_day
        .into_iter()
        .rev()
        .filter_map(|(date, prices)| {
            let (average, min, max) = fold_prices(prices.iter().copied())?;
            Some(DailySummary {
                date,
                average,
                min,
                max,
                sample_count: prices.len(),
            })
        })
        .collect()
}

/// Samples from the trailing `days` days, oldest first
pub fn trailing_days(samples: &[PriceSample], now: DateTime<Utc>, days: u32) -> Vec<PriceSample> {
    let cutoff = now - chrono::Duration::days(i64::from(days));
    let mut recent: Vec<PriceSample> = samples
        .iter()
        .filter(|s| s.timestamp >= cutoff)
        .cloned()
        .collect();
    recent.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    recent
}

/// Samples falling on one local calendar date, oldest first
pub fn on_date(samples: &[PriceSample], date: NaiveDate) -> Vec<PriceSample> {
    let mut day: Vec<PriceSample> = samples
        .iter()
        .filter(|s| feed_date(s.timestamp) == date)
        .cloned()
        .collect();
    day.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    day
}

/// Average, min, and max of a price iterator; None when empty
fn fold_prices(prices: impl Iterator<Item = Decimal>) -> Option<(Decimal, Decimal, Decimal)> {
    let mut count = 0u32;
    let mut sum = Decimal::ZERO;
    let mut min: Option<Decimal> = None;
    let mut max: Option<Decimal> = None;

    for price in prices {
        count += 1;
        sum += price;
        min = Some(min.map_or(price, |m| m.min(price)));
        max = Some(max.map_or(price, |m| m.max(price)));
    }

    if count == 0 {
        return None;
    }
    Some((sum / Decimal::from(count), min?, max?))
}
