//! Price command implementation

use crate::config::Config;
use crate::feed::ComedClient;
use crate::history::FEED_TZ;
use clap::Args;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Print the sample as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl PriceArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = ComedClient::from_config(&config.feed);
        let sample = client.current_price().await?;
        let category = config.bands.bands().classify(sample.price_cents);

        if self.json {
            let payload = serde_json::json!({
                "price_cents": sample.price_cents,
                "timestamp": sample.timestamp,
                "category": category,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        let local = sample.timestamp.with_timezone(&FEED_TZ);
        println!(
            "Current ComEd price: {:.2}¢ per kWh ({})",
            sample.price_cents,
            category.label()
        );
        println!("As of: {}", local.format("%-I:%M %p, %b %-d"));
        println!("{}", category.advice());

        Ok(())
    }
}
