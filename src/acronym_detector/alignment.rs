// Backward alignment of short-form letters to the initials of preceding words
// Enumerates every increasing assignment, filters implausible ones, then picks one

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::iter;

use super::stop_words::StopWordChecker;
use super::tokenizer::Word;

/// Token index aligned to each short-form letter, `None` when the letter is missed
pub type AlignmentPath = Vec<Option<usize>>;

/// Aligns candidates within one tokenized text
pub struct Aligner<'w, 'a> {
    source: &'a str,
    words: &'w [Word<'a>],
    stop_words: &'w StopWordChecker,
    max_missed_letters: usize,
    /// `word_counts[i]` is the number of word-like tokens in `words[..i]`
    word_counts: Vec<usize>,
}

impl<'w, 'a> Aligner<'w, 'a> {
    pub fn new(
        source: &'a str,
        words: &'w [Word<'a>],
        stop_words: &'w StopWordChecker,
        max_missed_letters: usize,
    ) -> Self {
        let word_counts = iter::once(0)
            .chain(words.iter().scan(0, |count, word| {
                *count += usize::from(word.word_like);
                Some(*count)
            }))
            .collect();

        Self {
            source,
            words,
            stop_words,
            max_missed_letters,
            word_counts,
        }
    }

    /// Word-like tokens in `words[first..=last]`
    fn covered_words(&self, first: usize, last: usize) -> usize {
        self.word_counts[last + 1] - self.word_counts[first]
    }

    /// Align the short form at `acronym_pos`, returning a path with every letter placed
    pub fn align(&self, acronym_pos: usize) -> Option<AlignmentPath> {
        let letters: Vec<char> = self.words[acronym_pos].text.chars().collect();
        let positions = self.letter_positions(acronym_pos, &letters);

        let (first, rest) = positions.split_first()?;

        // Paths are built one starting word at a time, so only that word's paths are held
        let candidates = first
            .iter()
            .copied()
            .filter(|&start| self.words[start].word_like)
            .flat_map(|start| self.enumerate_paths(start, rest))
            .filter(|path| self.is_plausible(path));

        let mut best = select_best(candidates)?;
        self.interpolate_missing(&mut best, &letters);

        if missed_letters(&best) == 0 {
            Some(best)
        } else {
            None
        }
    }

    /// Long form for an aligned path: from the first aligned word up to the `(` token
    pub fn long_form(&self, path: &AlignmentPath, acronym_pos: usize) -> Option<&'a str> {
        let first = (*path.first()?)?;
        let open = self.words.get(acronym_pos.checked_sub(1)?)?;
        Some(self.source[self.words[first].offset..open.offset].trim())
    }

    /// Candidate token positions for every letter, scanning backward from the `(` token
    ///
    /// The scan stops at the sentence boundary, or once more non-stop words are
    /// covered than the short form could account for.
    fn letter_positions(&self, acronym_pos: usize, letters: &[char]) -> Vec<BTreeSet<usize>> {
        let mut positions = vec![BTreeSet::new(); letters.len()];
        let Some(start) = acronym_pos.checked_sub(2) else {
            return positions;
        };

        let sentence = self.words[acronym_pos].sentence;
        let limit = letters.len() + self.max_missed_letters;
        let mut covered = 0;

        for pos in (0..=start).rev() {
            let word = &self.words[pos];
            if word.sentence != sentence {
                break;
            }
            if word.word_like && !self.stop_words.is_stop_word(word.text) {
                covered += 1;
            }
            if covered > limit {
                break;
            }

            if let Some(initial) = word.initial() {
                for (index, &letter) in letters.iter().enumerate() {
                    if same_letter(initial, letter) {
                        positions[index].insert(pos);
                    }
                }
            }
        }

        positions
    }

    /// Every strictly increasing assignment of positions (or misses) to the
    /// letters after the first, for a path starting at `start`
    ///
    /// Paths are pruned as they are built once they exceed the miss budget or
    /// cover more words than a plausible path with that many misses may. Both
    /// only grow as a path extends.
    fn enumerate_paths(&self, start: usize, rest: &[BTreeSet<usize>]) -> Vec<AlignmentPath> {
        let max_covered = rest.len() + 1 + self.max_missed_letters;
        let mut paths: Vec<AlignmentPath> = vec![vec![Some(start)]];

        for choices in rest {
            let mut extended = Vec::with_capacity(paths.len());
            for path in &paths {
                let last = last_aligned(path).unwrap_or(start);
                let missed = missed_letters(path);

                // Missing first, so equal-score ties prefer later letters left to interpolation
                if missed < self.max_missed_letters
                    && self.covered_words(start, last) + missed + 1 <= max_covered
                {
                    let mut next = path.clone();
                    next.push(None);
                    extended.push(next);
                }

                for &choice in choices.range(last + 1..) {
                    if self.covered_words(start, choice) + missed > max_covered {
                        break;
                    }
                    let mut next = path.clone();
                    next.push(Some(choice));
                    extended.push(next);
                }
            }
            paths = extended;
        }

        paths
    }

    /// Reject paths with too many misses, unbalanced brackets, or too many covered words
    fn is_plausible(&self, path: &AlignmentPath) -> bool {
        let missed = missed_letters(path);
        if missed > self.max_missed_letters {
            return false;
        }
        let (Some(first), Some(last)) = (first_aligned(path), last_aligned(path)) else {
            return false;
        };

        let span = &self.source[self.words[first].offset..self.words[last].end()];
        if !bracket_match(span) {
            return false;
        }

        self.covered_words(first, last) <= path.len() - missed + self.max_missed_letters
    }

    /// Fill missed letters from the interior of the word aligned to the previous letter
    ///
    /// "Deoxyribonucleic acid (DNA)" places `N` inside "Deoxyribonucleic".
    fn interpolate_missing(&self, path: &mut AlignmentPath, letters: &[char]) {
        let original = path.clone();

        for index in 1..path.len() {
            if original[index].is_some() {
                continue;
            }
            let Some(prev) = path[index - 1] else {
                break;
            };

            let prev_text = self.words[prev].text;
            if self.stop_words.is_stop_word_ignore_case(prev_text) {
                continue;
            }

            let mut tail = prev_text.chars();
            tail.next();
            let letter: String = letters[index].to_lowercase().collect();
            if tail.as_str().contains(letter.as_str()) {
                path[index] = Some(prev);
            }
        }
    }
}

/// Most letters aligned, then nearest to the parenthesis, then the shortest span
fn select_best<I>(paths: I) -> Option<AlignmentPath>
where
    I: IntoIterator<Item = AlignmentPath>,
{
    paths.into_iter().min_by_key(|path| {
        let first = first_aligned(path).unwrap_or(0);
        let last = last_aligned(path).unwrap_or(0);
        (missed_letters(path), Reverse(last), last - first)
    })
}

fn missed_letters(path: &AlignmentPath) -> usize {
    path.iter().filter(|pos| pos.is_none()).count()
}

fn first_aligned(path: &AlignmentPath) -> Option<usize> {
    path.iter().flatten().min().copied()
}

fn last_aligned(path: &AlignmentPath) -> Option<usize> {
    path.iter().flatten().max().copied()
}

fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

/// Check that every bracket in the text is closed in order
pub fn bracket_match(text: &str) -> bool {
    let mut stack = Vec::new();
    for ch in text.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let open = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(open) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}
