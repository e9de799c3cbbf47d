use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), folds full-width forms and ligatures
        let text: String = text.nfkc().collect();

        // Newlines and runs of whitespace become single spaces
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// What goes out to the dictionary API: the input minus surrounding whitespace
pub struct QueryPreprocessor;
impl Preprocessor for QueryPreprocessor {
    fn process(&self, text: &str) -> String {
        text.trim().to_string()
    }
}

/// Normalization shared by override keys and lookups against them
pub struct KeyPreprocessor;
impl Preprocessor for KeyPreprocessor {}

/// Case-insensitive key used for the override table
pub fn override_key(text: &str) -> String {
    KeyPreprocessor.process(text).to_lowercase()
}
