//! Message formatting for Telegram notifications and replies.
//!
//! Everything here targets `MarkdownV2`, so dynamic text passes through
//! [`escape_markdown`].

use crate::application::ListedProduct;
use crate::domain::StockStatus;
use crate::port::outbound::notifier::Event;

/// Format an event into a Telegram message.
#[must_use]
pub fn format_event_message(event: &Event) -> String {
    match event {
        Event::MonitorStarted => "🤖 Bot Notifikasi Shopee AKTIF \\(24 jam\\)".to_string(),
        Event::StockChanged(e) => match e.status() {
            StockStatus::InStock(stock) => format!(
                "✅ *{}* READY \\({} pcs\\)\n{}",
                escape_markdown(&e.name),
                stock,
                escape_markdown(&e.url)
            ),
            StockStatus::OutOfStock => format!(
                "❌ *{}* HABIS\n{}",
                escape_markdown(&e.name),
                escape_markdown(&e.url)
            ),
        },
    }
}

/// Render the `/listproduk` reply for a non-empty watchlist.
#[must_use]
pub fn format_product_list(products: &[ListedProduct]) -> String {
    let mut msg = String::from("📦 *Daftar Produk yang Dimonitor:*\n");
    for product in products {
        msg.push_str(&format!(
            "\\- {} \\(stok: {}\\)\n{}\n\n",
            escape_markdown(&product.name),
            escape_markdown(&product.last_known_stock.to_string()),
            escape_markdown(&product.url)
        ));
    }
    msg
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
        '\\',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
