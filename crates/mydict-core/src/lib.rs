pub mod error;
pub mod overrides;
pub mod preprocess;
pub mod resolver;
pub mod search;
pub mod shortcuts;
