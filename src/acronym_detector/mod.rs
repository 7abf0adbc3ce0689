// Acronym definition extraction: "some words defining an acronym (SWDA)"
// Tokenize, find parenthesized short forms, align them backward to preceding words

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod alignment;
pub mod normalization;
pub mod stop_words;
pub mod tokenizer;

pub use alignment::{bracket_match, Aligner, AlignmentPath};
pub use normalization::normalize_definition;
pub use stop_words::{StopWordChecker, DEFAULT_STOP_WORDS};
pub use tokenizer::{Tokenizer, Word};

/// One acronym definition found in the text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcronymMatch {
    /// The parenthesized token, e.g. "SWDA"
    pub short_form: String,
    /// The preceding phrase whose initials spell the short form
    pub long_form: String,
    /// Byte offset of the short form in the scanned text
    pub offset: usize,
}

impl AcronymMatch {
    /// Long form split into its words, e.g. ["wild", "type"] for "wild-type"
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.long_form
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|w| !w.is_empty())
    }
}

/// Tunable limits for candidate detection and alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorRules {
    /// Longest parenthesized token considered a short form, in characters
    pub max_acronym_length: usize,
    /// Letters that may go unaligned before a candidate is rejected
    pub max_missed_letters: usize,
    /// Words skipped when counting the span an alignment covers
    pub stop_words: Vec<String>,
}

impl Default for ExtractorRules {
    fn default() -> Self {
        Self {
            max_acronym_length: 10,
            max_missed_letters: 2,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Reusable extractor holding compiled patterns and rules
#[derive(Debug, Clone)]
pub struct AcronymExtractor {
    rules: ExtractorRules,
    tokenizer: Tokenizer,
    stop_words: StopWordChecker,
}

impl AcronymExtractor {
    /// Create new extractor with custom rules
    pub fn new(rules: ExtractorRules) -> Result<Self> {
        let tokenizer = Tokenizer::new(rules.max_acronym_length)?;
        let stop_words = StopWordChecker::from_words(rules.stop_words.iter().cloned());

        Ok(Self {
            rules,
            tokenizer,
            stop_words,
        })
    }

    /// Create extractor with default rules
    pub fn with_default_rules() -> Result<Self> {
        Self::new(ExtractorRules::default())
    }

    pub fn rules(&self) -> &ExtractorRules {
        &self.rules
    }

    /// All acronym definitions in left-to-right order of their short forms
    pub fn extract(&self, text: &str) -> Vec<AcronymMatch> {
        let words = self.tokenizer.tokenize(text);
        let aligner = Aligner::new(text, &words, &self.stop_words, self.rules.max_missed_letters);

        let mut matches = Vec::new();
        let mut candidates = 0;

        for (acronym_pos, word) in words.iter().enumerate() {
            if !word.acronym_like {
                continue;
            }
            candidates += 1;

            let long_form = aligner
                .align(acronym_pos)
                .and_then(|path| aligner.long_form(&path, acronym_pos));

            match long_form {
                Some(long_form) if !long_form.is_empty() => matches.push(AcronymMatch {
                    short_form: word.text.to_string(),
                    long_form: long_form.to_string(),
                    offset: word.offset,
                }),
                _ => debug!(short_form = word.text, offset = word.offset, "No alignment for candidate"),
            }
        }

        debug!(
            candidates,
            matches = matches.len(),
            "Scanned {} bytes for acronym definitions",
            text.len()
        );
        matches
    }

    /// Distinct long forms grouped by short form
    pub fn definitions(&self, text: &str) -> BTreeMap<String, BTreeSet<String>> {
        let mut definitions: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for found in self.extract(text) {
            definitions
                .entry(found.short_form)
                .or_default()
                .insert(found.long_form);
        }
        definitions
    }
}

static DEFAULT_EXTRACTOR: OnceLock<AcronymExtractor> = OnceLock::new();

/// Shared extractor with the default rules, compiled on first use
pub fn default_extractor() -> Result<&'static AcronymExtractor> {
    if let Some(extractor) = DEFAULT_EXTRACTOR.get() {
        return Ok(extractor);
    }
    let extractor = AcronymExtractor::with_default_rules()?;
    Ok(DEFAULT_EXTRACTOR.get_or_init(|| extractor))
}

/// Extract acronym definitions with the default rules
///
/// Fails only if the default patterns cannot be compiled.
pub fn extract(text: &str) -> Result<Vec<AcronymMatch>> {
    Ok(default_extractor()?.extract(text))
}
