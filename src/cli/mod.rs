//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use clap::{Args, Parser, Subcommand};

/// shopee-watch - Telegram bot that watches Shopee product stock.
#[derive(Parser, Debug)]
#[command(name = "shopee-watch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `run` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the bot and the stock monitor (foreground)
    Run,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `shopee-watch check`
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CheckCommand {
    /// Validate environment configuration
    Config,
    /// Fetch one product from the Shopee API
    Product(ProductArgs),
}

/// Arguments for `check product`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProductArgs {
    /// Shop identifier
    pub shop_id: u64,
    /// Item identifier
    pub item_id: u64,
}

impl Cli {
    /// The command to run, with `run` as the default.
    #[must_use]
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
