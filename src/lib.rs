//! shopee-watch - Telegram bot that watches Shopee product stock.
//!
//! Keeps a persisted watchlist of products, polls the Shopee item API on a
//! fixed interval, and tells the admin chat whenever a product goes in or out
//! of stock.
//!
//! # Architecture
//!
//! - [`domain`] - Product keys, records, snapshots and stock transitions
//! - [`port`] - Traits for the store, catalog, notifier and clock
//! - [`adapter`] - JSON file store, Shopee HTTP client, Telegram bot
//! - [`application`] - The monitor loop and the watchlist use cases
//! - [`infrastructure`] - Environment configuration, logging and wiring
//! - [`cli`] - `run` and `check` subcommands
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use shopee_watch::infrastructure::config::Config;
//!
//! # async fn start() -> shopee_watch::error::Result<()> {
//! let config = Config::from_env()?;
//! shopee_watch::infrastructure::bootstrap::run(config).await
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
