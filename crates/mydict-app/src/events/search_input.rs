use std::sync::Arc;

use kanal::AsyncSender;
use mydict_core::resolver::LookupResolver;
use mydict_core::search::{InputChange, SearchPhase};
use mydict_types::AppEvent;

use crate::session::SearchSession;

pub async fn handle_search_input(
    session: &mut SearchSession,
    text: String,
    resolver: &Arc<LookupResolver>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    loopback_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let was_detail = session.search.phase() == SearchPhase::Detail;
    let was_loading = session.search.is_loading();
    let had_results = !session.search.results().is_empty();

    match session.search.input_changed(&text) {
        InputChange::Cleared { generation } => {
            tracing::debug!("Input cleared (generation {})", generation);
            session.debouncer.cancel();

            app_to_ui_tx
                .send(AppEvent::ShowResults {
                    results: vec![],
                    selected: 0,
                })
                .await?;
        }
        InputChange::Debounce { generation, query } => {
            tracing::debug!(
                "Debouncing '{}' for {:?} (generation {})",
                query,
                session.debouncer.interval(),
                generation
            );

            if was_detail {
                app_to_ui_tx.send(AppEvent::HideDetail).await?;
            }
            if had_results {
                app_to_ui_tx
                    .send(AppEvent::ShowResults {
                        results: vec![],
                        selected: 0,
                    })
                    .await?;
            }
            if was_loading {
                // the superseded request's shimmer goes away until the new one starts
                app_to_ui_tx.send(AppEvent::ShowLoading(false)).await?;
            }

            let resolver = resolver.clone();
            let tx = loopback_tx.clone();
            session.debouncer.schedule(async move {
                if tx.send(AppEvent::LookupStarted { generation }).await.is_err() {
                    return;
                }

                let results = resolver.resolve(&query).await;

                if let Err(e) = tx
                    .send(AppEvent::LookupCompleted {
                        generation,
                        query,
                        results,
                    })
                    .await
                {
                    tracing::warn!("Failed to report lookup result: {}", e);
                }
            });
        }
    }

    Ok(())
}
