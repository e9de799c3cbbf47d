use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use mydict_core::resolver::LookupResolver;
use mydict_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::session::SearchSession;
use crate::state::AppState;

pub mod key_press;
pub mod lifecycle;
pub mod lookup;
pub mod search_input;
pub mod selection;

use key_press::handle_key_press;
use lifecycle::{handle_mount, handle_unmount};
use lookup::{handle_lookup_completed, handle_lookup_started};
use search_input::handle_search_input;
use selection::{handle_close_detail, handle_select_result};

/// App's main loop, the only writer of search state
pub async fn event_loop(
    state: Arc<AppState>,
    resolver: Arc<LookupResolver>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    loopback_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let debounce = {
        let config = state.config.read().await;
        config.search.debounce()
    };
    let mut session = SearchSession::new(debounce);

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Shutdown requested");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(&mut session, &resolver, &app_to_ui_tx, &loopback_tx, event).await?;
    }

    session.unmount();
    Ok(())
}

async fn handle_events(
    session: &mut SearchSession,
    resolver: &Arc<LookupResolver>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    loopback_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::UiEvent(UiEvent::Mounted) => {
            handle_mount(session);
        }
        AppEvent::UiEvent(UiEvent::Unmounted) => {
            handle_unmount(session);
        }
        AppEvent::UiEvent(UiEvent::SearchText(text)) => {
            handle_search_input(session, text, resolver, app_to_ui_tx, loopback_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::KeyPressed(press)) => {
            handle_key_press(session, press, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::SelectResult(index)) => {
            handle_select_result(session, index, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::CloseDetail) => {
            handle_close_detail(session, app_to_ui_tx).await?;
        }
        AppEvent::LookupStarted { generation } => {
            handle_lookup_started(session, generation, app_to_ui_tx).await?;
        }
        AppEvent::LookupCompleted {
            generation,
            query,
            results,
        } => {
            handle_lookup_completed(session, generation, query, results, app_to_ui_tx).await?;
        }
        AppEvent::ShowLoading(_)
        | AppEvent::ShowResults { .. }
        | AppEvent::SelectionChanged(_)
        | AppEvent::ShowDetail(_)
        | AppEvent::HideDetail
        | AppEvent::FocusSearch
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
