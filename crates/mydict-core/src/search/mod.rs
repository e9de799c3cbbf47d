pub mod debounce;
pub mod state;

pub use debounce::Debouncer;
pub use state::{Direction, InputChange, KeyOutcome, SearchPhase, SearchState};
