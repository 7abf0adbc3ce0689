// Locating short forms in text and annotating them with their long form
// Used to make later mentions of an acronym self-describing

use anyhow::Result;
use regex_automata::meta::Regex;

/// Whole-word pattern for a short form or its plural, e.g. `AE` also matches `AEs`
pub fn acronym_pattern(acronym: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"\b{}s?\b", regex_syntax::escape(acronym)))?)
}

/// Check if the given short form appears as a whole word in the text
pub fn has_acronym(text: &str, acronym: &str) -> Result<bool> {
    Ok(acronym_pattern(acronym)?.is_match(text))
}

/// Annotate the first mention of a short form as `ACR (long form)`
///
/// Text that already spells out the long form is returned unchanged.
pub fn sub_acronym(text: &str, acronym: &str, long_form: &str) -> Result<String> {
    if text.contains(long_form) {
        return Ok(text.to_string());
    }

    let Some(mention) = acronym_pattern(acronym)?.find(text) else {
        return Ok(text.to_string());
    };

    let mut annotated = String::with_capacity(text.len() + long_form.len() + 3);
    annotated.push_str(&text[..mention.end()]);
    annotated.push_str(" (");
    annotated.push_str(long_form);
    annotated.push(')');
    annotated.push_str(&text[mention.end()..]);
    Ok(annotated)
}
