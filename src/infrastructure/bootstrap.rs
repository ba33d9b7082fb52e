//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::clock::TokioClock;
use crate::adapter::outbound::notifier::telegram::{
    run_command_listener, TelegramControl, TelegramNotifier,
};
use crate::adapter::outbound::shopee::ShopeeClient;
use crate::adapter::outbound::store::JsonFileStore;
use crate::application::{Monitor, WatchlistService};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::catalog::ProductCatalog;
use crate::port::outbound::clock::Clock;
use crate::port::outbound::notifier::Notifier;
use crate::port::outbound::store::WatchlistStore;

/// Adapters shared by the monitor and the command handlers.
pub(crate) struct Components {
    pub store: Arc<dyn WatchlistStore>,
    pub catalog: Arc<dyn ProductCatalog>,
}

/// Build the store and catalog adapters from configuration.
pub(crate) fn build_components(config: &Config) -> Components {
    let store = JsonFileStore::new(&config.products_file);
    info!(path = %store.path().display(), "Using product store");

    Components {
        store: Arc::new(store),
        catalog: Arc::new(ShopeeClient::from_config(&config.shopee)),
    }
}

/// Run the monitor loop and the command listener until the listener stops.
///
/// The listener stops on Ctrl-C; the monitor task is aborted with it.
pub async fn run(config: Config) -> Result<()> {
    let Components { store, catalog } = build_components(&config);

    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(config.telegram.clone()));
    let clock: Arc<dyn Clock> = Arc::new(TokioClock);

    let monitor = Monitor::new(
        Arc::clone(&store),
        Arc::clone(&catalog),
        notifier,
        clock,
        config.monitor,
    );
    let control = TelegramControl::new(WatchlistService::new(store, catalog));

    info!(
        interval_secs = config.monitor.interval.as_secs(),
        admin_chat_id = config.telegram.admin_chat_id,
        "shopee-watch starting"
    );

    let monitor_task = tokio::spawn(async move { monitor.run().await });

    run_command_listener(config.telegram, control).await;

    monitor_task.abort();
    if let Err(e) = monitor_task.await {
        if !e.is_cancelled() {
            warn!(error = %e, "Monitor task ended abnormally");
        }
    }

    info!("shopee-watch stopped");
    Ok(())
}
