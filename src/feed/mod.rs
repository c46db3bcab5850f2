//! Price feed module
//!
//! Polls the public ComEd hourly pricing API

mod comed;
mod types;

pub use comed::{ComedClient, ComedConfig, FeedError, COMED_API_URL};
pub use types::PriceSample;

use async_trait::async_trait;

/// Trait for price source implementations
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Most recent price reading
    async fn latest(&self) -> Result<PriceSample, FeedError>;

    /// Hourly readings, oldest first
    async fn hourly(&self) -> Result<Vec<PriceSample>, FeedError>;
}
