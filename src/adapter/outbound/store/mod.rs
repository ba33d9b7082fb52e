//! Watchlist storage adapters.

pub mod json;

pub use json::JsonFileStore;
