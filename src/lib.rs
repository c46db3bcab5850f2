//! comed-watch: ComEd hourly electricity price watcher
//!
//! This library provides the core components for:
//! - Polling the public ComEd hourly pricing API
//! - Price classification into presentation categories
//! - Threshold alert evaluation with per-kind rate limiting
//! - Notification rendering and delivery
//! - Daily price history summaries
//! - Structured logging and Prometheus metrics

pub mod alert;
pub mod classify;
pub mod cli;
pub mod config;
pub mod feed;
pub mod history;
pub mod notify;
pub mod telemetry;
pub mod watch;
