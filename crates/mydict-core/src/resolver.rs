use std::sync::Arc;

use mydict_source::DictionarySource;
use mydict_types::DictionaryEntry;

use crate::overrides::OverrideTable;
use crate::preprocess::{Preprocessor, QueryPreprocessor};

/// Resolves a search term to displayable entries.
///
/// Never fails: an unknown word becomes a "no definition" placeholder and a
/// failed request becomes a "fetch error" placeholder.
pub struct LookupResolver {
    overrides: Arc<OverrideTable>,
    source: Arc<dyn DictionarySource>,
    max_results: usize,
}

impl LookupResolver {
    pub fn new(
        overrides: Arc<OverrideTable>,
        source: Arc<dyn DictionarySource>,
        max_results: usize,
    ) -> Self {
        Self {
            overrides,
            source,
            max_results: max_results.max(1),
        }
    }

    pub async fn resolve(&self, input: &str) -> Vec<DictionaryEntry> {
        let query = QueryPreprocessor.process(input);
        if query.is_empty() {
            return vec![];
        }

        if let Some(entry) = self.overrides.get(&query) {
            tracing::debug!("'{}' resolved from custom words", query);
            return vec![entry.clone()];
        }

        match self.source.fetch(&query).await {
            Ok(entries) if entries.is_empty() => {
                tracing::debug!("No definition for '{}'", query);
                vec![DictionaryEntry::no_definition(query)]
            }
            Ok(mut entries) => {
                entries.truncate(self.max_results);
                entries
            }
            Err(e) => {
                tracing::warn!(
                    "Lookup of '{}' via {} failed: {}",
                    query,
                    self.source.metadata().name,
                    e
                );
                vec![DictionaryEntry::fetch_error(query)]
            }
        }
    }
}
