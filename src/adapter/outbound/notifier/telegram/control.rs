//! Telegram command execution against the watchlist.

use tracing::error;

use crate::application::{AddOutcome, WatchlistService};

use super::command::{command_help, parse_product_key, TelegramCommand};
use super::format::format_product_list;

pub const USAGE_ERROR: &str = "Format salah!\nContoh: /addproduk 987654321 1234567890";
pub const ALREADY_PRESENT: &str = "Produk ini sudah ada di daftar.";
pub const FETCH_FAILED: &str = "❌ Gagal ambil data produk Shopee (cek shopid/itemid).";
pub const SAVE_FAILED: &str = "❌ Gagal menyimpan daftar produk.";
pub const EMPTY_WATCHLIST: &str = "Belum ada produk yang dimonitor.";

/// Text to send back to the chat that issued a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Send with `MarkdownV2` parse mode; the text is already escaped.
    pub markdown: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
        }
    }
}

/// Runtime command executor for Telegram commands.
///
/// Authorization is checked by the caller before [`execute`](Self::execute).
#[derive(Clone)]
pub struct TelegramControl {
    watchlist: WatchlistService,
}

impl TelegramControl {
    #[must_use]
    pub fn new(watchlist: WatchlistService) -> Self {
        Self { watchlist }
    }

    /// Execute one parsed command and return the reply.
    pub async fn execute(&self, command: TelegramCommand) -> Reply {
        match command {
            TelegramCommand::Start => Reply::plain(command_help()),
            TelegramCommand::AddProduct { args } => self.add_product_reply(&args).await,
            TelegramCommand::ListProducts => self.list_products_reply(),
        }
    }

    async fn add_product_reply(&self, args: &[String]) -> Reply {
        let Some(key) = parse_product_key(args) else {
            return Reply::plain(USAGE_ERROR);
        };

        match self.watchlist.add(key).await {
            Ok(AddOutcome::Added(snapshot)) => Reply::plain(format!(
                "✅ Ditambahkan: {}\n{}",
                snapshot.name, snapshot.url
            )),
            Ok(AddOutcome::AlreadyPresent) => Reply::plain(ALREADY_PRESENT),
            Ok(AddOutcome::NotFound) => Reply::plain(FETCH_FAILED),
            Err(e) => {
                error!(
                    shop_id = key.shop_id,
                    item_id = key.item_id,
                    error = %e,
                    "Failed to save watchlist after adding product"
                );
                Reply::plain(SAVE_FAILED)
            }
        }
    }

    fn list_products_reply(&self) -> Reply {
        let products = self.watchlist.list();
        if products.is_empty() {
            return Reply::plain(EMPTY_WATCHLIST);
        }
        Reply::markdown(format_product_list(&products))
    }
}
