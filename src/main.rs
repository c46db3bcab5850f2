use clap::Parser;
use comed_watch::cli::{Cli, Commands};
use comed_watch::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize telemetry
    let _guard = comed_watch::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Watch(args) => {
            tracing::info!("Starting price watch");
            args.execute(&config).await?;
        }
        Commands::Price(args) => {
            args.execute(&config).await?;
        }
        Commands::History(args) => {
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Feed: {} (refresh every {} min)",
                config.feed.base_url, config.feed.refresh_interval_minutes
            );
            println!(
                "  Alerts: high >= {}¢, low <= {}¢",
                config.alerts.high_price_threshold, config.alerts.low_price_threshold
            );
            println!(
                "  Negative price alerts: {}",
                config.alerts.negative_price_alerts
            );
            println!(
                "  Notifications enabled: {}",
                config.alerts.notifications_enabled
            );
            println!(
                "  Bands: low < {}¢, medium < {}¢",
                config.bands.low_max, config.bands.medium_max
            );
        }
    }

    Ok(())
}
