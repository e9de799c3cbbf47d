use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use mydict_core::resolver::LookupResolver;
use mydict_types::AppEvent;
use mydict_ui::UiBridge;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // render updates
            ui_to_app: kanal::bounded_async(64),  // UI interactions and lookup completions
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Must be called inside a tokio runtime context
    pub fn spawn_tasks(&self, resolver: Arc<LookupResolver>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop; lookups report back through the ui_to_app inbox
        tasks.spawn(event_loop(
            self.state.clone(),
            resolver,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn ui_bridge(&self) -> UiBridge {
        UiBridge::new(
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.1.clone(),
        )
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
