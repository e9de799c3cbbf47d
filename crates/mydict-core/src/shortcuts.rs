use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use mydict_types::{Key, KeyPress};

/// Actions a global shortcut can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    FocusSearch,
}

struct Binding {
    id: u64,
    chord: KeyPress,
    action: ShortcutAction,
}

/// Window-wide keyboard shortcuts.
///
/// A binding lives exactly as long as the [`ShortcutGuard`] returned by
/// [`ShortcutRegistry::register`].
#[derive(Default)]
pub struct ShortcutRegistry {
    bindings: Arc<Mutex<Vec<Binding>>>,
    next_id: AtomicU64,
}

/// Deregisters its binding on drop
#[must_use = "the shortcut is removed as soon as the guard is dropped"]
pub struct ShortcutGuard {
    id: u64,
    bindings: Weak<Mutex<Vec<Binding>>>,
}

/// Ctrl+K
pub fn focus_search_chord() -> KeyPress {
    KeyPress::ctrl(Key::Char('k'))
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, chord: KeyPress, action: ShortcutAction) -> ShortcutGuard {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut bindings) = self.bindings.lock() {
            bindings.push(Binding {
                id,
                chord: chord.normalized(),
                action,
            });
        }
        tracing::debug!("Registered shortcut {:?} -> {:?}", chord, action);

        ShortcutGuard {
            id,
            bindings: Arc::downgrade(&self.bindings),
        }
    }

    /// Action bound to `press`, most recent registration first
    pub fn resolve(&self, press: KeyPress) -> Option<ShortcutAction> {
        let press = press.normalized();
        let bindings = self.bindings.lock().ok()?;

        bindings
            .iter()
            .rev()
            .find(|binding| binding.chord == press)
            .map(|binding| binding.action)
    }

    pub fn len(&self) -> usize {
        self.bindings.lock().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for ShortcutGuard {
    fn drop(&mut self) {
        let Some(bindings) = self.bindings.upgrade() else {
            return;
        };
        if let Ok(mut bindings) = bindings.lock() {
            bindings.retain(|binding| binding.id != self.id);
        }
    }
}
