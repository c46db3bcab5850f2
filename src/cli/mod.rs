//! CLI interface for comed-watch
//!
//! Provides subcommands for:
//! - `watch`: poll the feed and raise threshold alerts
//! - `price`: fetch and print the current price
//! - `history`: print daily price summaries
//! - `config`: show the effective configuration

mod history;
mod price;
mod watch;

pub use history::HistoryArgs;
pub use price::PriceArgs;
pub use watch::WatchArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "comed-watch")]
#[command(about = "ComEd hourly electricity price watcher with threshold alerts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the feed and raise threshold alerts
    Watch(WatchArgs),
    /// Fetch and print the current price
    Price(PriceArgs),
    /// Print daily price summaries
    History(HistoryArgs),
    /// Show the effective configuration
    Config,
}
