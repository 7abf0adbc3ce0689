// Function words that never carry a short-form letter
// Skipped when counting the words an alignment may cover

use std::collections::HashSet;

/// Default stop words for English article text
pub const DEFAULT_STOP_WORDS: &[&str] = &["and", "or", "a", "the", "to", "of", "for", "not", "nor"];

/// Set-backed stop word lookup
#[derive(Debug, Clone)]
pub struct StopWordChecker {
    words: HashSet<String>,
}

impl StopWordChecker {
    /// Create checker with the default English stop words
    pub fn new() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied())
    }

    /// Create checker from a custom list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact-case membership, as used when counting covered words
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Case-insensitive membership, e.g. "The" at the start of a sentence
    pub fn is_stop_word_ignore_case(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

impl Default for StopWordChecker {
    fn default() -> Self {
        Self::new()
    }
}
