//! Word list loading utilities
//!
//! Reads plain-text word files (one word per line) or uses the embedded list.

use super::DEFAULT_WORDS;
use crate::core::{Word, WordList, WordListError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the puzzle words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Default,
    /// A plain-text file, one word per line
    File(PathBuf),
}

impl WordSource {
    /// Interpret a CLI value: `default` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "default" => Self::Default,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load and normalize the words
    ///
    /// # Errors
    /// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Empty`
    /// if no usable word remains.
    pub fn load(&self) -> Result<WordList, LoadError> {
        let words = match self {
            Self::Default => words_from_slice(DEFAULT_WORDS),
            Self::File(path) => load_from_file(path)?,
        };
        tracing::info!(source = %self, words = words.len(), "loaded word list");
        Ok(WordList::new(words)?)
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "built-in list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Error type for word list loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => write!(f, "{}", WordListError::Empty),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<WordListError> for LoadError {
    fn from(e: WordListError) -> Self {
        match e {
            WordListError::Empty => Self::Empty,
        }
    }
}

/// Load words from a file
///
/// Blank lines are skipped; lines that are not plain words are skipped with a
/// warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_search::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(number, line)| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                tracing::warn!(line = number + 1, entry = line.trim(), "skipping word: {e}");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_search::wordlists::loader::words_from_slice;
/// use word_search::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
