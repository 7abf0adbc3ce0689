// Plain-text documents as passages, and per-document definition collection
// Passages are joined so a definition can never straddle two of them

use tracing::debug;

use crate::acronym_detector::AcronymExtractor;

/// Joins passages; the period ends the sentence so alignment stops at the seam
pub const PASSAGE_SEPARATOR: &str = ". ";

/// Long forms containing these characters come from table cells and are dropped
pub const DEFAULT_DELIMITERS: &[char] = &['\t'];

/// A document already stripped to plain text, split into passages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub passages: Vec<String>,
}

impl Document {
    /// Split on blank lines; line breaks inside a passage become spaces
    pub fn from_text(text: &str) -> Self {
        let mut passages = Vec::new();
        let mut current = String::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    passages.push(std::mem::take(&mut current));
                }
                continue;
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line.trim_end_matches('\r'));
        }
        if !current.is_empty() {
            passages.push(current);
        }

        Self { passages }
    }

    pub fn from_passages<I, S>(passages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            passages: passages.into_iter().map(Into::into).collect(),
        }
    }

    /// All passages as one scannable text
    pub fn full_text(&self) -> String {
        self.passages.join(PASSAGE_SEPARATOR)
    }
}

/// Every (short form, long form) pair in the document, sorted, without delimiter-bearing long forms
pub fn collect_definitions(
    extractor: &AcronymExtractor,
    document: &Document,
    delimiters: &[char],
) -> Vec<(String, String)> {
    let definitions = extractor.definitions(&document.full_text());

    let mut result = Vec::new();
    for (short_form, long_forms) in definitions {
        for long_form in long_forms {
            if long_form.contains(delimiters) {
                debug!(%short_form, %long_form, "Dropping definition containing a delimiter");
                continue;
            }
            result.push((short_form.clone(), long_form));
        }
    }
    result
}
