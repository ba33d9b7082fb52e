//! Process configuration read from the environment.
//!
//! Built once at startup and passed down by value or reference; nothing reads
//! the environment after [`Config::from_env`] returns.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapter::outbound::notifier::telegram::TelegramConfig;
use crate::adapter::outbound::shopee::settings::{
    ShopeeConfig, DEFAULT_API_URL, DEFAULT_SITE_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::adapter::outbound::store::json::DEFAULT_PRODUCTS_FILE;
use crate::application::monitor::{MonitorConfig, DEFAULT_INTERVAL_SECS};
use crate::error::{ConfigError, Result};

use super::logging::{LogFormat, LoggingConfig};

pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_ADMIN_CHAT_ID: &str = "CHAT_ID_ADMIN";
pub const ENV_CHECK_INTERVAL: &str = "CHECK_INTERVAL";
pub const ENV_PRODUCTS_FILE: &str = "PRODUCTS_FILE";
pub const ENV_SHOPEE_API_URL: &str = "SHOPEE_API_URL";
pub const ENV_SHOPEE_SITE_URL: &str = "SHOPEE_SITE_URL";
pub const ENV_SHOPEE_TIMEOUT: &str = "SHOPEE_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub monitor: MonitorConfig,
    pub shopee: ShopeeConfig,
    pub products_file: PathBuf,
    pub logging: LoggingConfig,
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bot_token = get(ENV_BOT_TOKEN).ok_or(ConfigError::MissingField {
            field: ENV_BOT_TOKEN,
        })?;
        let admin_chat_id = parse_admin_chat_id(get(ENV_ADMIN_CHAT_ID))?;

        let interval = parse_secs(
            ENV_CHECK_INTERVAL,
            get(ENV_CHECK_INTERVAL),
            DEFAULT_INTERVAL_SECS,
        )?;
        let timeout = parse_secs(
            ENV_SHOPEE_TIMEOUT,
            get(ENV_SHOPEE_TIMEOUT),
            DEFAULT_TIMEOUT_SECS,
        )?;

        let log_format = match get(ENV_LOG_FORMAT) {
            None => LogFormat::default(),
            Some(raw) => raw.parse().map_err(|reason| ConfigError::InvalidValue {
                field: ENV_LOG_FORMAT,
                reason,
            })?,
        };

        Ok(Self {
            telegram: TelegramConfig {
                bot_token,
                admin_chat_id,
            },
            monitor: MonitorConfig { interval },
            shopee: ShopeeConfig {
                api_url: get(ENV_SHOPEE_API_URL).unwrap_or_else(|| DEFAULT_API_URL.into()),
                site_url: get(ENV_SHOPEE_SITE_URL).unwrap_or_else(|| DEFAULT_SITE_URL.into()),
                timeout,
            },
            products_file: get(ENV_PRODUCTS_FILE)
                .unwrap_or_else(|| DEFAULT_PRODUCTS_FILE.into())
                .into(),
            logging: LoggingConfig {
                level: get(ENV_LOG_LEVEL).unwrap_or_else(|| "info".into()),
                format: log_format,
            },
        })
    }

    /// Bot token with the middle hidden, for display.
    #[must_use]
    pub fn masked_token(&self) -> String {
        let token = &self.telegram.bot_token;
        let chars: Vec<char> = token.chars().collect();
        if chars.len() >= 15 {
            let head: String = chars[..10].iter().collect();
            let tail: String = chars[chars.len() - 5..].iter().collect();
            format!("{head}...{tail}")
        } else {
            let head: String = chars.iter().take(chars.len().min(4)).collect();
            format!("{head}...")
        }
    }
}

fn parse_admin_chat_id(raw: Option<String>) -> std::result::Result<i64, ConfigError> {
    let raw = raw.ok_or(ConfigError::MissingField {
        field: ENV_ADMIN_CHAT_ID,
    })?;
    let id: i64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
        field: ENV_ADMIN_CHAT_ID,
        reason: format!("`{raw}` is not an integer chat id"),
    })?;
    if id == 0 {
        return Err(ConfigError::InvalidValue {
            field: ENV_ADMIN_CHAT_ID,
            reason: "must be non-zero".into(),
        });
    }
    Ok(id)
}

fn parse_secs(
    field: &'static str,
    raw: Option<String>,
    default: u64,
) -> std::result::Result<Duration, ConfigError> {
    let secs = match raw {
        None => default,
        Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
            field,
            reason: format!("`{raw}` is not a whole number of seconds"),
        })?,
    };
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(Duration::from_secs(secs))
}
