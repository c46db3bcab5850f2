//! History command implementation

use crate::config::Config;
use crate::feed::ComedClient;
use crate::history::{daily_summaries, feed_date, on_date, trailing_days, PriceStats, FEED_TZ};
use chrono::Utc;
use clap::Args;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of trailing days to summarize
    #[arg(short, long, default_value_t = 7)]
    pub days: u32,

    /// Show today's hourly readings instead of daily summaries
    #[arg(long)]
    pub today: bool,
}

impl HistoryArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = ComedClient::from_config(&config.feed);
        let samples = client.hourly_feed().await?;

        if self.today {
            return print_today(&samples);
        }

        let recent = trailing_days(&samples, Utc::now(), self.days);
        if recent.is_empty() {
            println!("No price data for the last {} days", self.days);
            return Ok(());
        }

        println!("Daily prices, last {} days (¢/kWh):", self.days);
        for day in daily_summaries(&recent) {
            println!(
                "  {}  avg {:>6.2}  min {:>6.2}  max {:>6.2}  ({} readings)",
                day.date, day.average, day.min, day.max, day.sample_count
            );
        }

        if let Some(stats) = PriceStats::from_samples(&recent) {
            println!(
                "Overall: avg {:.2}¢, min {:.2}¢, max {:.2}¢, latest {:.2}¢",
                stats.average, stats.min, stats.max, stats.latest
            );
        }

        Ok(())
    }
}

fn print_today(samples: &[crate::feed::PriceSample]) -> anyhow::Result<()> {
    let today = feed_date(Utc::now());
    let readings = on_date(samples, today);

    if readings.is_empty() {
        println!("No price data available for today");
        return Ok(());
    }

    println!("Hourly prices for {} (¢/kWh):", today);
    for sample in &readings {
        let local = sample.timestamp.with_timezone(&FEED_TZ);
        println!("  {}  {:>6.2}", local.format("%H:%M"), sample.price_cents);
    }

    Ok(())
}
