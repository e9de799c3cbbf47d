use kanal::{AsyncReceiver, AsyncSender};
use mydict_types::{AppEvent, UiEvent};
use slint::Weak;

use crate::SearchWindow;
use crate::events::handle_events;

/// Bridge between the async backend and the slint event loop
#[derive(Clone)]
pub struct UiBridge {
    to_backend: AsyncSender<AppEvent>,
    from_backend: AsyncReceiver<AppEvent>,
}

impl UiBridge {
    pub fn new(to_backend: AsyncSender<AppEvent>, from_backend: AsyncReceiver<AppEvent>) -> Self {
        Self {
            to_backend,
            from_backend,
        }
    }

    /// Queue a UI event for the backend from a slint callback
    pub fn send(&self, event: UiEvent) {
        let tx = self.to_backend.clone();
        let spawned = slint::spawn_local(async move {
            if let Err(e) = tx.send(AppEvent::UiEvent(event)).await {
                tracing::error!("[SLINT] Failed to send UI event: {}", e);
            }
        });

        if let Err(e) = spawned {
            tracing::error!("[SLINT] Failed to spawn UI send: {}", e);
        }
    }

    /// Non-blocking send usable outside the event loop; `false` if dropped
    pub fn try_send(&self, event: UiEvent) -> bool {
        self.to_backend
            .try_send(AppEvent::UiEvent(event))
            .unwrap_or(false)
    }

    /// Apply backend events to the window for as long as it exists
    pub fn forward_from_backend(&self, window_weak: Weak<SearchWindow>) -> anyhow::Result<()> {
        let rx = self.from_backend.clone();
        slint::spawn_local(async move {
            while let Ok(event) = rx.recv().await {
                if !handle_events(event, &window_weak) {
                    break;
                }
            }
            tracing::debug!("[SLINT] Backend event stream ended");
        })?;

        Ok(())
    }
}
