// Canonical form of a long form so spelling variants compare equal
// "Breast carcinomas" and "breast cancer" both normalize to "breastcancer"

use super::stop_words::StopWordChecker;

/// Spellings used interchangeably in articles for the same expansion, including common typos
pub const SPELLING_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("carcinoma", "cancer"),
    ("carcinomas", "cancer"),
    ("florescence", "fluorescent"),
    ("florescent", "fluorescent"),
    ("stranded", "strand"),
    ("indices", "index"),
    ("polimerase", "polymerase"),
    ("remission", "response"),
    ("microarray", "micro array"),
    ("gammapathies", "gammopathies"),
    ("gammopaties", "gammopathies"),
    ("gammapathy", "gammopathy"),
    ("progress", "progression"),
    ("linda", "lindau"),
];

/// Suffix rewrites applied in order, each to the result of the previous one
const SINGULAR_SUFFIXES: &[(&str, &str)] = &[
    ("'s", ""),
    ("exes", "ex"),
    ("ses", "s"),
    ("ies", "y"),
];

const VERB_FORM_SUFFIXES: &[(&str, &str)] = &[
    ("ated", "ating"),
    ("iency", "ient"),
    ("ced", "cing"),
    ("ally", "al"),
    ("tation", "tating"),
    ("ence", "ent"),
    ("ios", "io"),
];

/// Normalize a long form with the default stop words
pub fn normalize_definition(long_form: &str) -> String {
    normalize_definition_with(long_form, &StopWordChecker::new())
}

/// Lowercase, split on `- = / ,` and whitespace, substitute spellings,
/// singularize, drop stop words, then concatenate
pub fn normalize_definition_with(long_form: &str, stop_words: &StopWordChecker) -> String {
    let lowered: String = long_form
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| match ch {
            '-' | '=' | '/' | ',' => ' ',
            _ => ch,
        })
        .collect();

    let mut result = String::with_capacity(lowered.len());
    let words = lowered
        .split_whitespace()
        .flat_map(|word| substitute_spelling(word).split_whitespace());

    for word in words {
        let singular = singularize(word);
        if !stop_words.is_stop_word(&singular) {
            result.push_str(&singular);
        }
    }
    result
}

fn substitute_spelling(word: &str) -> &str {
    SPELLING_SUBSTITUTIONS
        .iter()
        .find(|(variant, _)| *variant == word)
        .map_or(word, |&(_, canonical)| canonical)
}

/// Reduce plurals and verb forms to a shared stem
pub fn singularize(word: &str) -> String {
    let mut word = word.to_string();

    for (suffix, replacement) in SINGULAR_SUFFIXES {
        replace_suffix(&mut word, suffix, replacement);
    }

    // Plain plural "s", kept after i/o/s as in "analysis" or "class"
    let mut reversed = word.chars().rev();
    if let (Some('s'), Some(before)) = (reversed.next(), reversed.next()) {
        if !matches!(before, 'i' | 'o' | 's') {
            word.pop();
        }
    }

    for (suffix, replacement) in VERB_FORM_SUFFIXES {
        replace_suffix(&mut word, suffix, replacement);
    }

    word
}

fn replace_suffix(word: &mut String, suffix: &str, replacement: &str) {
    if let Some(stem) = word.strip_suffix(suffix) {
        let stem_len = stem.len();
        word.truncate(stem_len);
        word.push_str(replacement);
    }
}
