use mydict_types::{DictionaryEntry, Key, KeyPress};

use crate::error::SelectionError;
use crate::preprocess::{Preprocessor, QueryPreprocessor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Empty input
    Idle,
    /// Input changed, timer pending
    Debouncing,
    /// Request in flight
    Loading,
    /// Results rendered
    Settled,
    /// One entry expanded
    Detail,
}

/// What the caller has to do after the input changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChange {
    /// Input is blank, results were dropped and nothing is scheduled
    Cleared { generation: u64 },
    /// Schedule a debounced lookup for `query` tagged with `generation`
    Debounce { generation: u64, query: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Effect of a key press on the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    SelectionMoved(usize),
    DetailOpened(DictionaryEntry),
    DetailRejected(SelectionError),
    DetailClosed,
}

/// Search interaction state, owned by a single writer.
///
/// Every input change bumps `generation`; lookups carry the generation they
/// were started for and only the current one can be committed.
#[derive(Debug)]
pub struct SearchState {
    term: String,
    generation: u64,
    phase: SearchPhase,
    results: Vec<DictionaryEntry>,
    selected: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            term: String::new(),
            generation: 0,
            phase: SearchPhase::Idle,
            results: Vec::new(),
            selected: 0,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn results(&self) -> &[DictionaryEntry] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// Entry shown in the detail view, if any
    pub fn detail(&self) -> Option<&DictionaryEntry> {
        match self.phase {
            SearchPhase::Detail => self.results.get(self.selected),
            _ => None,
        }
    }

    pub fn input_changed(&mut self, text: &str) -> InputChange {
        self.term = text.to_string();
        self.generation += 1;

        let query = QueryPreprocessor.process(text);
        if query.is_empty() {
            self.phase = SearchPhase::Idle;
            self.results.clear();
            self.selected = 0;
            return InputChange::Cleared {
                generation: self.generation,
            };
        }

        // results of the previous term are never shown under the new one
        self.phase = SearchPhase::Debouncing;
        self.results.clear();
        self.selected = 0;
        InputChange::Debounce {
            generation: self.generation,
            query,
        }
    }

    /// Debounce timer fired and the request went out.
    ///
    /// Returns `false` for a superseded generation.
    pub fn begin_lookup(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != SearchPhase::Debouncing {
            return false;
        }

        self.phase = SearchPhase::Loading;
        true
    }

    /// Store results of a finished lookup.
    ///
    /// Returns `false` (and changes nothing) for a superseded generation.
    pub fn commit(&mut self, generation: u64, results: Vec<DictionaryEntry>) -> bool {
        if generation != self.generation
            || !matches!(self.phase, SearchPhase::Debouncing | SearchPhase::Loading)
        {
            return false;
        }

        self.results = results;
        self.selected = 0;
        self.phase = SearchPhase::Settled;
        true
    }

    /// Move the highlight, clamped to `[0, len - 1]`; only settled results move
    pub fn move_selection(&mut self, direction: Direction) -> usize {
        if self.phase != SearchPhase::Settled {
            return self.selected;
        }

        let last = self.results.len().saturating_sub(1);
        self.selected = match direction {
            Direction::Up => self.selected.saturating_sub(1),
            Direction::Down => (self.selected + 1).min(last),
        };
        self.selected
    }

    /// Highlight `index` and open it, as a click on a card does
    pub fn select(&mut self, index: usize) -> Result<&DictionaryEntry, SelectionError> {
        if self.phase == SearchPhase::Detail {
            self.phase = SearchPhase::Settled;
        }
        if index >= self.results.len() {
            return Err(SelectionError::NoResults);
        }

        self.selected = index;
        self.open_detail()
    }

    /// Expand the highlighted entry; placeholders stay closed
    pub fn open_detail(&mut self) -> Result<&DictionaryEntry, SelectionError> {
        if self.phase != SearchPhase::Settled && self.phase != SearchPhase::Detail {
            return Err(SelectionError::NotSettled);
        }

        let entry = self
            .results
            .get(self.selected)
            .ok_or(SelectionError::NoResults)?;

        if entry.is_placeholder() {
            return Err(SelectionError::Placeholder);
        }

        self.phase = SearchPhase::Detail;
        Ok(entry)
    }

    /// Back from the detail view; `false` if it was not open
    pub fn close_detail(&mut self) -> bool {
        if self.phase != SearchPhase::Detail {
            return false;
        }

        self.phase = SearchPhase::Settled;
        true
    }

    /// Navigation keys: arrows, Enter, Escape
    pub fn handle_key(&mut self, press: KeyPress) -> KeyOutcome {
        if press.ctrl || press.alt {
            return KeyOutcome::Ignored;
        }

        match press.key {
            Key::Up if self.phase == SearchPhase::Settled => {
                KeyOutcome::SelectionMoved(self.move_selection(Direction::Up))
            }
            Key::Down if self.phase == SearchPhase::Settled => {
                KeyOutcome::SelectionMoved(self.move_selection(Direction::Down))
            }
            Key::Enter if self.phase != SearchPhase::Detail => match self.open_detail() {
                Ok(entry) => KeyOutcome::DetailOpened(entry.clone()),
                Err(e) => KeyOutcome::DetailRejected(e),
            },
            Key::Escape if self.close_detail() => KeyOutcome::DetailClosed,
            _ => KeyOutcome::Ignored,
        }
    }
}
