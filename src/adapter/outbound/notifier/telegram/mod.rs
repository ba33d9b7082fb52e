//! Telegram notification and command handling.
//!
//! Provides Telegram bot integration for stock-change notifications and the
//! `/start`, `/addproduk`, `/listproduk` commands.

mod auth;
mod command;
mod format;

pub mod control;
pub mod notifier;

pub use auth::command_response_for_message;
pub use command::{parse_command, TelegramCommand};
pub use control::{Reply, TelegramControl};
pub use format::format_event_message;
pub use notifier::{run_command_listener, TelegramConfig, TelegramNotifier};
