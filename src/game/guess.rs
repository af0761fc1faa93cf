//! Player guesses
//!
//! A guess is four zero-based integers: `start_row start_col end_row end_col`.

use crate::core::Position;
use std::fmt;
use std::str::FromStr;

/// A pair of endpoints claiming a straight-line word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub start: Position,
    pub end: Position,
}

/// Error type for guesses the session cannot evaluate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not exactly four non-negative integers
    Malformed(String),
    /// An endpoint lies outside the grid
    OutOfBounds { pos: Position, size: usize },
    /// Endpoints are not on a row, column or 45° diagonal
    NotStraightLine { start: Position, end: Position },
    /// The puzzle is already solved
    Finished,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => write!(
                f,
                "Expected four numbers (start_row start_col end_row end_col), got '{input}'"
            ),
            Self::OutOfBounds { pos, size } => {
                write!(f, "Coordinate {pos} is outside the {size}x{size} grid")
            }
            Self::NotStraightLine { start, end } => {
                write!(f, "{start} to {end} is not a straight line")
            }
            Self::Finished => write!(f, "The puzzle is already solved"),
        }
    }
}

impl std::error::Error for GuessError {}

impl Guess {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Parse a guess from player input
    ///
    /// # Errors
    /// Returns `GuessError::Malformed` unless the input is exactly four
    /// whitespace-separated non-negative integers.
    ///
    /// # Examples
    /// ```
    /// use word_search::core::Position;
    /// use word_search::game::Guess;
    ///
    /// let guess = Guess::parse(" 0 0  0 2 ").unwrap();
    /// assert_eq!(guess.start, Position::new(0, 0));
    /// assert_eq!(guess.end, Position::new(0, 2));
    ///
    /// assert!(Guess::parse("0 0 0").is_err());
    /// assert!(Guess::parse("a b c d").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let malformed = || GuessError::Malformed(input.trim().to_string());

        let numbers = input
            .split_whitespace()
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        match numbers.as_slice() {
            &[start_row, start_col, end_row, end_col] => Ok(Self::new(
                Position::new(start_row, start_col),
                Position::new(end_row, end_col),
            )),
            _ => Err(malformed()),
        }
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_numbers() {
        let guess: Guess = "3 4 5 6".parse().unwrap();
        assert_eq!(guess, Guess::new(Position::new(3, 4), Position::new(5, 6)));
    }

    #[test]
    fn rejects_wrong_count() {
        assert!(matches!(Guess::parse(""), Err(GuessError::Malformed(_))));
        assert!(matches!(Guess::parse("1 2 3"), Err(GuessError::Malformed(_))));
        assert!(matches!(Guess::parse("1 2 3 4 5"), Err(GuessError::Malformed(_))));
    }

    #[test]
    fn rejects_non_integers() {
        assert!(matches!(Guess::parse("1 2 x 4"), Err(GuessError::Malformed(_))));
        assert!(matches!(Guess::parse("1.0 2 3 4"), Err(GuessError::Malformed(_))));
        assert!(matches!(Guess::parse("-1 2 3 4"), Err(GuessError::Malformed(_))));
    }

    #[test]
    fn malformed_keeps_trimmed_input() {
        assert_eq!(
            Guess::parse("  cat \n"),
            Err(GuessError::Malformed("cat".to_string()))
        );
    }

    #[test]
    fn display_shows_both_endpoints() {
        let guess = Guess::new(Position::new(0, 0), Position::new(2, 2));
        assert_eq!(guess.to_string(), "(0, 0) -> (2, 2)");
    }
}
