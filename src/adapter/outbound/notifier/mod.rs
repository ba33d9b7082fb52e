//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the Telegram admin chat.

pub mod telegram;
