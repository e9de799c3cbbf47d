use std::time::Duration;

use mydict_core::search::{Debouncer, SearchState};
use mydict_core::shortcuts::{ShortcutAction, ShortcutGuard, ShortcutRegistry, focus_search_chord};

/// Everything the event loop owns while the window is up
pub struct SearchSession {
    pub search: SearchState,
    pub debouncer: Debouncer,
    pub shortcuts: ShortcutRegistry,
    mounted: Option<ShortcutGuard>,
}

impl SearchSession {
    pub fn new(debounce: Duration) -> Self {
        Self {
            search: SearchState::new(),
            debouncer: Debouncer::new(debounce),
            shortcuts: ShortcutRegistry::new(),
            mounted: None,
        }
    }

    /// View is up: bind the global shortcuts
    pub fn mount(&mut self) {
        if self.mounted.is_none() {
            self.mounted = Some(
                self.shortcuts
                    .register(focus_search_chord(), ShortcutAction::FocusSearch),
            );
        }
    }

    /// View is gone: drop the shortcuts and any pending lookup
    pub fn unmount(&mut self) {
        self.mounted = None;
        self.debouncer.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}
