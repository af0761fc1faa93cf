//! Puzzle generation
//!
//! Places every word at a random position and direction, then fills the
//! remaining cells with random letters.

use super::placement::{Placement, can_place, commit};
use crate::core::{Direction, Grid, Position, Word, WordList};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Default number of random samples tried per word
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Error type for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The word has more letters than the grid has cells per line
    WordTooLong { word: String, len: usize, size: usize },
    /// No sampled position fitted within the attempt budget
    Unplaceable { word: String, attempts: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordTooLong { word, len, size } => write!(
                f,
                "word cannot be placed: {word} has {len} letters but the grid is {size}x{size}"
            ),
            Self::Unplaceable { word, attempts } => write!(
                f,
                "word cannot be placed: {word} did not fit after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for GenerationError {}

/// A finished puzzle: the filled grid plus where each word went
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

impl Puzzle {
    /// First placement recorded for `word`
    #[must_use]
    pub fn placement_of(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word.text() == word)
    }

    /// Total random samples drawn across all placements
    #[must_use]
    pub fn total_attempts(&self) -> usize {
        self.placements.iter().map(|p| p.attempts).sum()
    }
}

/// Random grid generator
///
/// Generic over the random source so tests and replays can inject a seeded one.
pub struct GridGenerator<R: Rng> {
    rng: R,
    max_attempts: usize,
}

impl GridGenerator<StdRng> {
    /// Create a generator with a reproducible random sequence
    #[must_use]
    pub fn seeded(seed: u64, max_attempts: usize) -> Self {
        Self::new(StdRng::seed_from_u64(seed), max_attempts)
    }
}

impl<R: Rng> GridGenerator<R> {
    /// Create a generator
    ///
    /// `max_attempts` is clamped to at least one sample per word.
    pub fn new(rng: R, max_attempts: usize) -> Self {
        Self {
            rng,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Build a grid where every cell is a uniformly random letter
    pub fn initialize(&mut self, size: usize) -> Grid {
        let mut grid = Grid::new(size);
        for pos in grid.positions() {
            let letter = self.random_letter();
            grid.set(pos, letter);
        }
        grid
    }

    /// Fill every still-empty cell with a random letter
    pub fn fill_remaining(&mut self, grid: &mut Grid) {
        for pos in grid.positions() {
            if grid.letter(pos).is_none() {
                let letter = self.random_letter();
                grid.set(pos, letter);
            }
        }
    }

    /// Place one word by sampling directions and start cells
    ///
    /// # Errors
    /// Returns `GenerationError::WordTooLong` without sampling if the word cannot
    /// fit on any line, or `GenerationError::Unplaceable` once the attempt budget
    /// is spent.
    pub fn place_word(&mut self, word: &Word, grid: &mut Grid) -> Result<Placement, GenerationError> {
        let size = grid.size();
        if word.len() > size {
            return Err(GenerationError::WordTooLong {
                word: word.text().to_string(),
                len: word.len(),
                size,
            });
        }

        for attempt in 1..=self.max_attempts {
            let direction = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
            let start = Position::new(self.rng.random_range(0..size), self.rng.random_range(0..size));

            if can_place(grid, word, start, direction) {
                let placement = Placement {
                    word: word.clone(),
                    start,
                    direction,
                    attempts: attempt,
                };
                commit(grid, &placement);
                tracing::debug!(
                    word = word.text(),
                    row = start.row,
                    col = start.col,
                    %direction,
                    attempts = attempt,
                    "placed word"
                );
                return Ok(placement);
            }
        }

        tracing::warn!(word = word.text(), attempts = self.max_attempts, "word did not fit");
        Err(GenerationError::Unplaceable {
            word: word.text().to_string(),
            attempts: self.max_attempts,
        })
    }

    /// Place every word, in list order
    ///
    /// The grid is only written once every word has been placed; on failure it
    /// is left as it was.
    ///
    /// # Errors
    /// Stops at the first word that cannot be placed.
    pub fn place_all(
        &mut self,
        words: &WordList,
        grid: &mut Grid,
    ) -> Result<Vec<Placement>, GenerationError> {
        let mut working = grid.clone();
        let placements = words
            .iter()
            .map(|word| self.place_word(word, &mut working))
            .collect::<Result<Vec<_>, _>>()?;
        *grid = working;
        Ok(placements)
    }

    /// Generate a complete puzzle of the given size
    ///
    /// # Errors
    /// Returns `GenerationError` if any word cannot be placed.
    ///
    /// # Examples
    /// ```
    /// use word_search::core::{Word, WordList};
    /// use word_search::generator::GridGenerator;
    ///
    /// let words = WordList::new(vec![Word::new("rust").unwrap()]).unwrap();
    /// let puzzle = GridGenerator::seeded(7, 1000).generate(&words, 6).unwrap();
    ///
    /// assert!(puzzle.grid.is_full());
    /// assert_eq!(puzzle.placements.len(), 1);
    /// ```
    pub fn generate(&mut self, words: &WordList, size: usize) -> Result<Puzzle, GenerationError> {
        let mut grid = Grid::new(size);
        let placements = self.place_all(words, &mut grid)?;
        self.fill_remaining(&mut grid);

        tracing::debug!(
            size,
            words = placements.len(),
            attempts = placements.iter().map(|p| p.attempts).sum::<usize>(),
            "generated puzzle"
        );

        Ok(Puzzle { grid, placements })
    }

    fn random_letter(&mut self) -> u8 {
        self.rng.random_range(b'A'..=b'Z')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| Word::new(w).unwrap()).collect()).unwrap()
    }

    /// Every straight-line reading of `len` letters in the grid
    fn all_readings(grid: &Grid, len: usize) -> Vec<String> {
        grid.positions()
            .flat_map(|pos| Direction::ALL.into_iter().filter_map(move |dir| grid.read(pos, dir, len)))
            .collect()
    }

    #[test]
    fn initialize_fills_every_cell_with_a_letter() {
        let grid = GridGenerator::seeded(1, 10).initialize(8);
        assert!(grid.is_full());
        assert!(
            grid.positions()
                .filter_map(|pos| grid.letter(pos))
                .all(|c| c.is_ascii_uppercase())
        );
    }

    #[test]
    fn fill_remaining_keeps_existing_letters() {
        let mut grid = Grid::from_rows(&["Q..", "...", "..."]).unwrap();
        GridGenerator::seeded(3, 10).fill_remaining(&mut grid);
        assert!(grid.is_full());
        assert_eq!(grid.letter(Position::new(0, 0)), Some(b'Q'));
    }

    #[test]
    fn placements_read_back_exactly() {
        let words = list(&["rust", "cargo", "crate", "trait", "borrow", "enum"]);
        let puzzle = GridGenerator::seeded(42, DEFAULT_MAX_ATTEMPTS)
            .generate(&words, 10)
            .unwrap();

        assert_eq!(puzzle.placements.len(), words.len());
        for placement in &puzzle.placements {
            let read = puzzle
                .grid
                .read(placement.start, placement.direction, placement.word.len());
            assert_eq!(read.as_deref(), Some(placement.word.text()));
            assert!(placement.cells().iter().all(|&pos| puzzle.grid.contains(pos)));
        }
    }

    #[test]
    fn every_word_has_a_straight_line_reading() {
        let words = list(&["lifetime", "closure", "macro", "struct"]);
        for seed in 0..20 {
            let puzzle = GridGenerator::seeded(seed, DEFAULT_MAX_ATTEMPTS)
                .generate(&words, 10)
                .unwrap();
            for word in &words {
                assert!(
                    all_readings(&puzzle.grid, word.len()).iter().any(|r| r == word.text()),
                    "seed {seed}: {word} missing"
                );
            }
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let words = list(&["rust", "cargo"]);
        let a = GridGenerator::seeded(9, 100).generate(&words, 6).unwrap();
        let b = GridGenerator::seeded(9, 100).generate(&words, 6).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.placements, b.placements);
    }

    #[test]
    fn word_longer_than_grid_fails_immediately() {
        let words = list(&["toolong"]);
        let err = GridGenerator::seeded(0, 1_000_000)
            .generate(&words, 3)
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::WordTooLong {
                word: "TOOLONG".to_string(),
                len: 7,
                size: 3
            }
        );
        assert!(err.to_string().contains("word cannot be placed"));
    }

    #[test]
    fn crowded_grid_fails_after_attempt_budget() {
        let mut grid = Grid::from_rows(&["XX", "XX"]).unwrap();
        let err = GridGenerator::seeded(5, 50)
            .place_word(&Word::new("ab").unwrap(), &mut grid)
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::Unplaceable {
                word: "AB".to_string(),
                attempts: 50
            }
        );
    }

    #[test]
    fn failed_place_all_leaves_grid_untouched() {
        let mut grid = Grid::new(3);
        let err = GridGenerator::seeded(9, 100)
            .place_all(&list(&["cat", "toolong"]), &mut grid)
            .unwrap_err();
        assert!(matches!(err, GenerationError::WordTooLong { .. }));
        assert_eq!(grid, Grid::new(3));
    }

    #[test]
    fn words_cross_on_shared_letters_only() {
        // Two words filling a 2x2 grid must share cells
        let mut grid = Grid::new(2);
        let mut generator = GridGenerator::seeded(11, 10_000);
        generator.place_word(&Word::new("ab").unwrap(), &mut grid).unwrap();
        let placement = generator.place_word(&Word::new("ab").unwrap(), &mut grid).unwrap();
        assert_eq!(
            grid.read(placement.start, placement.direction, 2).as_deref(),
            Some("AB")
        );
    }

    #[test]
    fn zero_attempt_budget_still_samples_once() {
        let words = list(&["a"]);
        let puzzle = GridGenerator::seeded(0, 0).generate(&words, 1).unwrap();
        assert_eq!(puzzle.grid.letter(Position::new(0, 0)), Some(b'A'));
        assert_eq!(puzzle.total_attempts(), 1);
    }

    #[test]
    fn placement_of_finds_recorded_word() {
        let words = list(&["enum", "trait"]);
        let puzzle = GridGenerator::seeded(2, 1000).generate(&words, 8).unwrap();
        assert_eq!(puzzle.placement_of("TRAIT").map(|p| p.word.len()), Some(5));
        assert!(puzzle.placement_of("STRUCT").is_none());
    }
}
