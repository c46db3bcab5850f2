//! Delivery sinks

use super::Notification;
use async_trait::async_trait;

/// Trait for notification delivery implementations
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver a single notification
    async fn deliver(&self, notification: &Notification) -> anyhow::Result<()>;
}

/// Writes notifications to the structured log
pub struct LogSink;

#[async_trait]
impl AlertSink for LogSink {
    async fn deliver(&self, notification: &Notification) -> anyhow::Result<()> {
        tracing::info!(
            title = %notification.title,
            body = %notification.body,
            "price alert"
        );
        Ok(())
    }
}

/// Fires a desktop notification via `notify-send`
///
/// Requires notify-send on PATH and a display session; spawn failures
/// surface to the caller, which logs and drops them.
pub struct NotifySendSink {
    app_name: String,
}

impl NotifySendSink {
    pub fn new() -> Self {
        Self {
            app_name: "comed-watch".to_string(),
        }
    }
}

impl Default for NotifySendSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlertSink for NotifySendSink {
    async fn deliver(&self, notification: &Notification) -> anyhow::Result<()> {
        tokio::process::Command::new("notify-send")
            .args([
                "--app-name",
                &self.app_name,
                &notification.title,
                &notification.body,
            ])
            .spawn()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_sink_accepts_notification() {
        let sink = LogSink;
        let n = Notification {
            title: "High Electricity Price Alert".to_string(),
            body: "Current price is above your threshold: 16.30¢ per kWh.".to_string(),
        };
        assert!(sink.deliver(&n).await.is_ok());
    }
}
