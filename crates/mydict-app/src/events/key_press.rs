use kanal::AsyncSender;
use mydict_core::search::KeyOutcome;
use mydict_core::shortcuts::ShortcutAction;
use mydict_types::{AppEvent, KeyPress};

use crate::session::SearchSession;

pub async fn handle_key_press(
    session: &mut SearchSession,
    press: KeyPress,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Global shortcuts win regardless of search state
    if let Some(action) = session.shortcuts.resolve(press) {
        match action {
            ShortcutAction::FocusSearch => {
                app_to_ui_tx.send(AppEvent::FocusSearch).await?;
            }
        }
        return Ok(());
    }

    match session.search.handle_key(press) {
        KeyOutcome::SelectionMoved(index) => {
            app_to_ui_tx.send(AppEvent::SelectionChanged(index)).await?;
        }
        KeyOutcome::DetailOpened(entry) => {
            app_to_ui_tx.send(AppEvent::ShowDetail(entry)).await?;
        }
        KeyOutcome::DetailRejected(reason) => {
            tracing::debug!("Detail not opened: {}", reason);
        }
        KeyOutcome::DetailClosed => {
            app_to_ui_tx.send(AppEvent::HideDetail).await?;
        }
        KeyOutcome::Ignored => {}
    }

    Ok(())
}
