use kanal::AsyncSender;
use mydict_types::AppEvent;

use crate::session::SearchSession;

pub async fn handle_select_result(
    session: &mut SearchSession,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let opened = session.search.select(index).cloned();

    app_to_ui_tx
        .send(AppEvent::SelectionChanged(session.search.selected()))
        .await?;

    match opened {
        Ok(entry) => {
            app_to_ui_tx.send(AppEvent::ShowDetail(entry)).await?;
        }
        Err(reason) => {
            tracing::debug!("Result {} not opened: {}", index, reason);
        }
    }

    Ok(())
}

pub async fn handle_close_detail(
    session: &mut SearchSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Some(entry) = session.search.detail() {
        tracing::debug!("Closing detail for '{}'", entry.word);
    }
    if session.search.close_detail() {
        app_to_ui_tx.send(AppEvent::HideDetail).await?;
    }

    Ok(())
}
