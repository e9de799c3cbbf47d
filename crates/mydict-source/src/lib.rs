use mydict_types::DictionaryEntry;

/// Remote (or otherwise external) dictionary provider interface
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch every record the provider has for `word`.
    ///
    /// `Ok(vec![])` means the provider answered but had nothing usable
    /// (unknown word, suggestion list, record without short definitions).
    /// `Err` is reserved for transport and decoding failures.
    async fn fetch(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
