//! Puzzle word representation
//!
//! A Word is a normalized (trimmed, uppercase) run of ASCII letters.

use std::fmt;

/// A word hidden in the puzzle grid
///
/// Always non-empty and made of the letters A-Z.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are upper-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters
    ///
    /// # Examples
    /// ```
    /// use word_search::core::Word;
    ///
    /// let word = Word::new("  crate ").unwrap();
    /// assert_eq!(word.text(), "CRATE");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before upper-casing: `ß` and ligatures expand to ASCII letters
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters (and therefore grid cells) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CARGO").unwrap();
        assert_eq!(word.text(), "CARGO");
        assert_eq!(word.letters(), b"CARGO");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("cargo").unwrap().text(), "CARGO");
        assert_eq!(Word::new("\tCaRgO \n").unwrap().text(), "CARGO");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("  \t"), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4rgo"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("don't"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_non_ascii() {
        assert_eq!(Word::new("über"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_rejects_letters_that_uppercase_to_ascii() {
        assert_eq!(Word::new("straße"), Err(WordError::NonAscii));
        assert_eq!(Word::new("\u{fb00}"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_single_letter() {
        let word = Word::new("a").unwrap();
        assert_eq!(word.len(), 1);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_display() {
        let word = Word::new("trait").unwrap();
        assert_eq!(format!("{word}"), "TRAIT");
    }

    #[test]
    fn word_equality() {
        assert_eq!(Word::new("enum").unwrap(), Word::new("ENUM").unwrap());
        assert_ne!(Word::new("enum").unwrap(), Word::new("struct").unwrap());
    }
}
