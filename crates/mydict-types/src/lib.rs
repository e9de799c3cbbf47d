pub mod entry;
pub mod keys;
pub mod types;

pub use entry::{DictionaryEntry, FETCH_ERROR, Meaning, NO_DEFINITION};
pub use keys::{Key, KeyPress};
pub use types::{AppEvent, UiEvent};
