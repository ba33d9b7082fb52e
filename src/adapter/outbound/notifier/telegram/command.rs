//! Telegram command parsing.

use crate::domain::ProductKey;

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramCommand {
    Start,
    /// Raw arguments; validated only after the sender is authorized.
    AddProduct {
        args: Vec<String>,
    },
    ListProducts,
}

impl TelegramCommand {
    /// Whether only the admin chat may run this command.
    #[must_use]
    pub const fn requires_admin(&self) -> bool {
        matches!(self, Self::AddProduct { .. })
    }
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
pub fn parse_command(text: &str) -> Result<TelegramCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(TelegramCommand::Start),
        "/addproduk" => Ok(TelegramCommand::AddProduct {
            args: parts.map(str::to_string).collect(),
        }),
        "/listproduk" => Ok(TelegramCommand::ListProducts),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Interpret `/addproduk` arguments as `<shop_id> <item_id>`.
///
/// Returns `None` unless there are exactly two non-negative integers.
#[must_use]
pub fn parse_product_key(args: &[String]) -> Option<ProductKey> {
    let [shop_id, item_id] = args else {
        return None;
    };
    Some(ProductKey::new(shop_id.parse().ok()?, item_id.parse().ok()?))
}

/// Usage text returned by `/start`.
#[must_use]
pub const fn command_help() -> &'static str {
    "🤖 Bot Notifikasi Shopee aktif!\n\
    Perintah:\n\
    • /addproduk <shopid> <itemid>\n\
    • /listproduk"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "Tampilkan daftar perintah"),
        ("addproduk", "Tambah produk: /addproduk <shopid> <itemid>"),
        ("listproduk", "Lihat produk yang dimonitor"),
    ]
}
