#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate override key: {0}")]
    DuplicateKey(String),

    #[error("Empty override key for entry '{0}'")]
    EmptyKey(String),
}

/// Why the highlighted result could not be opened in the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no results to select from")]
    NoResults,

    #[error("results are not settled yet")]
    NotSettled,

    #[error("placeholder entries have no detail view")]
    Placeholder,
}
