//! Watch command implementation

use crate::config::{Config, NotifyMode};
use crate::feed::{ComedClient, PriceSource};
use crate::notify::{AlertSink, LogSink, NotifySendSink};
use crate::watch::Watcher;
use clap::Args;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Evaluate a single tick and exit
    #[arg(long)]
    pub once: bool,
}

impl WatchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = ComedClient::from_config(&config.feed);

        match config.notify.mode {
            NotifyMode::Log => self.drive(Watcher::new(client, LogSink, config)).await,
            NotifyMode::Desktop => {
                self.drive(Watcher::new(client, NotifySendSink::new(), config))
                    .await
            }
        }
    }

    async fn drive<S: PriceSource, K: AlertSink>(
        &self,
        mut watcher: Watcher<S, K>,
    ) -> anyhow::Result<()> {
        if self.once {
            let outcome = watcher.tick().await?;
            tracing::info!(
                price_cents = %outcome.sample.price_cents,
                fired = outcome.fired.len(),
                "single tick complete"
            );
            Ok(())
        } else {
            watcher.run().await
        }
    }
}
