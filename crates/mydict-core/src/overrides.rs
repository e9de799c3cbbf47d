use std::collections::HashMap;

use mydict_types::DictionaryEntry;

use crate::error::OverrideError;
use crate::preprocess::override_key;

/// Fixed, locally defined entries that bypass the remote API
#[derive(Debug, Default)]
pub struct OverrideTable {
    entries: HashMap<String, DictionaryEntry>,
}

impl OverrideTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the table shipped with the binary
    pub fn embedded() -> Result<Self, OverrideError> {
        let json = include_str!("../data/custom_words.json");
        let table = Self::from_json(json)?;
        tracing::info!("Loaded {} custom words", table.len());
        Ok(table)
    }

    /// Parse a JSON object of `key -> entry`
    pub fn from_json(json: &str) -> Result<Self, OverrideError> {
        let raw: HashMap<String, DictionaryEntry> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    pub fn from_entries<I>(entries: I) -> Result<Self, OverrideError>
    where
        I: IntoIterator<Item = (String, DictionaryEntry)>,
    {
        let mut table = HashMap::new();

        for (key, entry) in entries {
            let normalized = override_key(&key);
            if normalized.is_empty() {
                return Err(OverrideError::EmptyKey(entry.word));
            }
            if table.insert(normalized.clone(), entry).is_some() {
                return Err(OverrideError::DuplicateKey(normalized));
            }
        }

        Ok(Self { entries: table })
    }

    /// Case-insensitive lookup
    pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(&override_key(word))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
