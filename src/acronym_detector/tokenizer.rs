// Splits article text into word and separator tokens for acronym alignment
// Separators are kept as tokens so byte offsets and sentence numbers stay exact

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

/// Separators between words: whitespace runs or single punctuation characters
pub const WORD_SEPARATOR_PATTERN: &str = r"\s+|[,;.(){}:\-]";

/// Shape of a plausible short form, e.g. "DNA", "AEs", "iCCA", "qRT-PCR", "CD4"
pub const ACRONYM_SHAPE_PATTERN: &str =
    r"^[a-z]?[a-z]?[A-Z][a-zA-Z0-9]*[-/]?[a-zA-Z0-9]*[A-Z0-9][a-z]?s?$";

/// One token of the scanned text, borrowed from the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    /// Byte offset of the token in the source text
    pub offset: usize,
    /// Parenthesized token shaped like a short form
    pub acronym_like: bool,
    /// Not a separator and not a hyphen suffix
    pub word_like: bool,
    /// Number of `.` tokens seen before this token
    pub sentence: usize,
}

impl<'a> Word<'a> {
    /// Byte offset just past the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// First character of the token, if any
    pub fn initial(&self) -> Option<char> {
        self.text.chars().next()
    }
}

/// Regex-driven tokenizer producing [`Word`] sequences
#[derive(Debug, Clone)]
pub struct Tokenizer {
    separators: Regex,
    acronym_shape: Regex,
    max_acronym_length: usize,
}

impl Tokenizer {
    pub fn new(max_acronym_length: usize) -> Result<Self> {
        let separators = Regex::new(WORD_SEPARATOR_PATTERN)?;
        let acronym_shape = Regex::new(ACRONYM_SHAPE_PATTERN)?;

        debug!(max_acronym_length, "Compiled acronym tokenizer patterns");

        Ok(Self {
            separators,
            acronym_shape,
            max_acronym_length,
        })
    }

    /// Does the token look like it could be a short form
    pub fn looks_like_acronym(&self, word: &str) -> bool {
        word.chars().count() <= self.max_acronym_length && self.acronym_shape.is_match(word)
    }

    /// Tokenize text and rejoin hyphenated short forms such as `(qRT-PCR)`
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Word<'a>> {
        let words = self.split_words(text);
        self.merge_complex_acronyms(text, words)
    }

    /// Split text into alternating text and separator tokens
    ///
    /// The text between two adjacent separators is kept as an empty token, so
    /// token positions line up one-to-one with the separator structure.
    fn split_words<'a>(&self, text: &'a str) -> Vec<Word<'a>> {
        let mut pieces: Vec<(&'a str, usize, bool)> = Vec::new();
        let mut last = 0;

        for sep in self.separators.find_iter(text) {
            pieces.push((&text[last..sep.start()], last, false));
            pieces.push((&text[sep.range()], sep.start(), true));
            last = sep.end();
        }
        pieces.push((&text[last..], last, false));

        let mut words = Vec::with_capacity(pieces.len());
        let mut sentence = 0;

        for (pos, &(piece, offset, is_separator)) in pieces.iter().enumerate() {
            let enclosed = pos > 0
                && pos + 1 < pieces.len()
                && pieces[pos - 1].0 == "("
                && pieces[pos + 1].0 == ")";
            let is_suffix = pos > 0 && pieces[pos - 1].0 == "-";

            words.push(Word {
                text: piece,
                offset,
                acronym_like: enclosed && self.looks_like_acronym(piece),
                word_like: !is_separator && !is_suffix,
                sentence,
            });

            if piece == "." {
                sentence += 1;
            }
        }

        words
    }

    /// Rejoin `( X - Y )` windows whose joined text looks like a short form
    fn merge_complex_acronyms<'a>(&self, text: &'a str, words: Vec<Word<'a>>) -> Vec<Word<'a>> {
        let mut merged = Vec::with_capacity(words.len());
        let mut index = 0;

        while index < words.len() {
            if let [open, first, hyphen, second, close, ..] = &words[index..] {
                if open.text == "(" && close.text == ")" && hyphen.text == "-" {
                    // Adjacent tokens are contiguous in the source
                    let joined = &text[first.offset..second.end()];

                    if self.looks_like_acronym(joined) {
                        merged.push(open.clone());
                        merged.push(Word {
                            text: joined,
                            offset: first.offset,
                            acronym_like: true,
                            word_like: true,
                            sentence: first.sentence,
                        });
                        merged.push(close.clone());
                        index += 5;
                        continue;
                    }
                }
            }

            merged.push(words[index].clone());
            index += 1;
        }

        merged
    }
}
