//! The ordered list of words hidden in a puzzle

use super::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for WordListError {}

/// Ordered, read-only sequence of target words
///
/// Duplicates are kept in order but count once towards completion.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl WordList {
    /// Create a word list
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        let lookup = words.iter().map(|w| w.text().to_string()).collect();
        Ok(Self { words, lookup })
    }

    /// Words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of entries, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty list cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words the player has to find
    #[inline]
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.lookup.len()
    }

    /// Exact, case-sensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.lookup.contains(text)
    }

    /// Length of the longest word
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words.iter().map(Word::len).max().unwrap_or(0)
    }

    /// Iterate over the words
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| Word::new(w).unwrap()).collect()).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(WordList::new(vec![]), Err(WordListError::Empty)));
    }

    #[test]
    fn keeps_order() {
        let words = list(&["rust", "cargo", "crate"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["RUST", "CARGO", "CRATE"]);
    }

    #[test]
    fn duplicates_count_once() {
        let words = list(&["rust", "RUST", "cargo"]);
        assert_eq!(words.len(), 3);
        assert_eq!(words.distinct_len(), 2);
    }

    #[test]
    fn contains_is_exact() {
        let words = list(&["cargo"]);
        assert!(words.contains("CARGO"));
        assert!(!words.contains("cargo"));
        assert!(!words.contains("CARG"));
    }

    #[test]
    fn longest_word_length() {
        assert_eq!(list(&["a", "lifetime", "enum"]).longest(), 8);
    }
}
