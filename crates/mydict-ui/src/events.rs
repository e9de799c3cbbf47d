use mydict_types::AppEvent;
use slint::{ComponentHandle, Weak};

use crate::SearchWindow;
use crate::cards::{to_card, to_cards};

/// Apply one backend event; `false` once the window is gone
pub fn handle_events(event: AppEvent, window_weak: &Weak<SearchWindow>) -> bool {
    let Some(w) = window_weak.upgrade() else {
        return false;
    };

    match event {
        AppEvent::BackendReady => {
            tracing::debug!("[SLINT] Backend ready");
        }
        AppEvent::ShowLoading(loading) => {
            w.set_loading(loading);
        }
        AppEvent::ShowResults { results, selected } => {
            tracing::debug!("[SLINT] Showing {} results", results.len());
            w.set_results(to_cards(&results));
            w.set_selected_index(selected as i32);
            w.set_detail_open(false);
            w.set_loading(false);
        }
        AppEvent::SelectionChanged(index) => {
            w.set_selected_index(index as i32);
        }
        AppEvent::ShowDetail(entry) => {
            tracing::debug!("[SLINT] Detail for '{}'", entry.word);
            w.set_detail(to_card(&entry));
            w.set_detail_open(true);
        }
        AppEvent::HideDetail => {
            w.set_detail_open(false);
        }
        AppEvent::FocusSearch => {
            w.invoke_focus_search();
            w.window().request_redraw();
        }
        _ => {}
    }

    true
}
