use kanal::AsyncSender;
use mydict_types::{AppEvent, DictionaryEntry};

use crate::session::SearchSession;

pub async fn handle_lookup_started(
    session: &mut SearchSession,
    generation: u64,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !session.search.begin_lookup(generation) {
        tracing::debug!(
            "Lookup start for stale generation {} (current {})",
            generation,
            session.search.generation()
        );
        return Ok(());
    }

    app_to_ui_tx.send(AppEvent::ShowLoading(true)).await?;
    Ok(())
}

pub async fn handle_lookup_completed(
    session: &mut SearchSession,
    generation: u64,
    query: String,
    results: Vec<DictionaryEntry>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let count = results.len();
    if !session.search.commit(generation, results) {
        tracing::debug!(
            "Discarding stale results for '{}' (generation {}, current {} for '{}')",
            query,
            generation,
            session.search.generation(),
            session.search.term()
        );
        return Ok(());
    }

    tracing::debug!("Committed {} results for '{}'", count, query);
    app_to_ui_tx
        .send(AppEvent::ShowResults {
            results: session.search.results().to_vec(),
            selected: session.search.selected(),
        })
        .await?;

    Ok(())
}
