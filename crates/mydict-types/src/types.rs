use crate::entry::DictionaryEntry;
use crate::keys::KeyPress;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),

    // Backend-internal, posted by lookup tasks back into the event loop
    LookupStarted {
        generation: u64,
    },
    LookupCompleted {
        generation: u64,
        query: String,
        results: Vec<DictionaryEntry>,
    },

    // Backend -> UI
    ShowLoading(bool),
    ShowResults {
        results: Vec<DictionaryEntry>,
        selected: usize,
    },
    SelectionChanged(usize),
    ShowDetail(DictionaryEntry),
    HideDetail,
    FocusSearch,
    BackendReady,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Window is shown and accepting input
    Mounted,
    /// Window is going away
    Unmounted,
    SearchText(String),
    KeyPressed(KeyPress),
    /// Card clicked
    SelectResult(usize),
    CloseDetail,
}
