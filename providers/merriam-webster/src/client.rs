use std::time::Duration;

use async_trait::async_trait;
use mydict_config::api::ApiConfig;
use mydict_source::{DictionarySource, LookupError, SourceMetadata};
use mydict_types::DictionaryEntry;
use reqwest::Url;

use crate::response::parse_response;

#[derive(Clone)]
pub struct MerriamWebsterClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    audio_host: String,
}

impl MerriamWebsterClient {
    pub fn new(api_key: String, api_url: String, audio_host: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            audio_host,
        }
    }

    /// Client with the request timeout taken from config
    pub fn from_config(config: &ApiConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            audio_host: config.audio_host.clone(),
        })
    }

    /// `{api_url}/{word}?key={api_key}` with the word percent-encoded as one path segment
    pub fn request_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| LookupError::ApiError(format!("Invalid API URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::ApiError(format!("API URL cannot take a path: {}", self.api_url)))?
            .pop_if_empty()
            .push(word);
        url.query_pairs_mut().append_pair("key", &self.api_key);

        Ok(url)
    }
}

#[async_trait]
impl DictionarySource for MerriamWebsterClient {
    async fn fetch(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::AuthenticationError);
        }

        let url = self.request_url(word)?;
        tracing::debug!("GET {}{}", url.origin().ascii_serialization(), url.path());

        let response = self.client.get(url).send().await?;

        if response.status() == 429 {
            return Err(LookupError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(LookupError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(LookupError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_response(&body, word, &self.audio_host)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Merriam-Webster".to_string(),
        }
    }
}
