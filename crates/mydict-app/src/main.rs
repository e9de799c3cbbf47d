use std::sync::Arc;
use std::time::Duration;

use mydict_config::Config;
use mydict_core::overrides::OverrideTable;
use mydict_core::resolver::LookupResolver;
use mydict_provider_mw::MerriamWebsterClient;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod session;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!("Configuration error: {e}");
    })?;

    let overrides = Arc::new(OverrideTable::embedded()?);
    let source = Arc::new(MerriamWebsterClient::from_config(&config.api)?);
    let resolver = Arc::new(LookupResolver::new(
        overrides,
        source,
        config.search.max_results,
    ));
    let ui_config = config.ui.clone();

    let runtime = tokio::runtime::Runtime::new()?;
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);

    let mut tasks = {
        let _guard = runtime.enter();
        controller.spawn_tasks(resolver)
    };

    // slint wants the main thread, the backend lives on the runtime
    let ui_result = ui::ui_loop(&ui_config, controller.ui_bridge());

    tracing::info!("Shutdown requested");
    runtime.block_on(async {
        // Let the unmount notification drain before cancelling
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.shutdown();

        let drained = tokio::time::timeout(Duration::from_secs(2), async {
            while let Some(result) = tasks.join_next().await {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::error!("task exited with error: {e}"),
                    Err(e) => tracing::error!("task panicked: {e}"),
                }
            }
        })
        .await;

        if drained.is_err() {
            tracing::warn!("Tasks did not stop in time, aborting");
            tasks.abort_all();
        }
    });

    ui_result
}
