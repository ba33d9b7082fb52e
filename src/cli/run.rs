//! Handler for the `run` command.

use tracing::info;

use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Initialize logging and run the bot until it is stopped.
pub async fn execute(config: Config) -> Result<()> {
    config.logging.init();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        products_file = %config.products_file.display(),
        "Loaded configuration"
    );

    bootstrap::run(config).await
}
