use serde::{Deserialize, Serialize};

/// Definition text of the placeholder shown when a word has no usable record
pub const NO_DEFINITION: &str = "No definition available";

/// Definition text of the placeholder shown when the lookup itself failed
pub const FETCH_ERROR: &str = "Error fetching definition";

/// A resolved word definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    /// Primary (first short) definition
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl DictionaryEntry {
    /// Entry with only a headword and a primary definition
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            pronunciation: None,
            audio_url: None,
            part_of_speech: None,
            avatar_url: None,
            meanings: vec![],
        }
    }

    pub fn no_definition(word: impl Into<String>) -> Self {
        Self::new(word, NO_DEFINITION)
    }

    pub fn fetch_error(word: impl Into<String>) -> Self {
        Self::new(word, FETCH_ERROR)
    }

    /// Placeholders stand in for a missing definition and are never opened in detail
    pub fn is_placeholder(&self) -> bool {
        self.definition == NO_DEFINITION || self.definition == FETCH_ERROR
    }
}

impl Meaning {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            examples: vec![],
        }
    }
}
