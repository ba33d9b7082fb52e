use crate::adapter::outbound::store::JsonFileStore;
use crate::cli::output;
use crate::infrastructure::config::Config;
use crate::port::outbound::store::WatchlistStore;

/// Print a summary of an already validated configuration.
pub fn execute_config(config: &Config) {
    output::ok("Configuration is valid");

    output::section("Telegram");
    output::key_value("Bot token", config.masked_token());
    output::key_value("Admin chat", config.telegram.admin_chat_id);

    output::section("Monitor");
    output::key_value(
        "Interval",
        format!("{}s", config.monitor.interval.as_secs()),
    );
    output::key_value("Products file", config.products_file.display());
    let watched = JsonFileStore::new(&config.products_file).load().len();
    output::key_value("Watched", watched);

    output::section("Shopee");
    output::key_value("API", &config.shopee.api_url);
    output::key_value("Site", &config.shopee.site_url);
    output::key_value("Timeout", format!("{}s", config.shopee.timeout.as_secs()));

    output::section("Logging");
    output::key_value("Level", &config.logging.level);
    output::key_value("Format", &config.logging.format);
}
