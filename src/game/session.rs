//! Game session state machine
//!
//! `Setup -> Playing -> Complete`. A session owns the puzzle, the word list and
//! the set of words found so far.

use super::checker::check_selection;
use super::config::GameConfig;
use super::guess::{Guess, GuessError};
use crate::core::{Grid, Position, Word, WordList};
use crate::generator::{GenerationError, GridGenerator, Puzzle};
use rustc_hash::FxHashSet;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Setup,
    Playing,
    Complete,
}

/// Result of evaluating a well-formed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The line spells a listed word; `first_time` is false for a repeat claim
    Found { word: String, first_time: bool },
    /// The line spells something that is not on the list
    NotFound { text: String },
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// A single-player word search game
#[derive(Debug)]
pub struct GameSession {
    puzzle: Puzzle,
    words: WordList,
    found: FxHashSet<String>,
    found_cells: FxHashSet<Position>,
    state: SessionState,
    seed: Option<u64>,
    guesses: usize,
}

impl GameSession {
    /// Generate a puzzle and start playing
    ///
    /// # Errors
    /// Returns `GenerationError` if a word cannot be placed; no session is started.
    pub fn new(words: WordList, config: &GameConfig) -> Result<Self, GenerationError> {
        let seed = config.resolve_seed();
        tracing::info!(seed, size = config.grid_size, words = words.len(), "generating puzzle");

        let mut generator = GridGenerator::seeded(seed, config.max_attempts);
        let puzzle = generator.generate(&words, config.grid_size)?;

        let mut session = Self::setup(puzzle, words, Some(seed));
        session.transition(SessionState::Playing);
        Ok(session)
    }

    /// Start playing on an existing puzzle
    ///
    /// Useful for replaying a known grid; the words must already be in it.
    #[must_use]
    pub fn from_puzzle(puzzle: Puzzle, words: WordList) -> Self {
        let mut session = Self::setup(puzzle, words, None);
        session.transition(SessionState::Playing);
        session
    }

    /// Start playing on a hand-built grid with no recorded placements
    #[must_use]
    pub fn from_grid(grid: Grid, words: WordList) -> Self {
        Self::from_puzzle(
            Puzzle {
                grid,
                placements: Vec::new(),
            },
            words,
        )
    }

    fn setup(puzzle: Puzzle, words: WordList, seed: Option<u64>) -> Self {
        Self {
            puzzle,
            words,
            found: FxHashSet::default(),
            found_cells: FxHashSet::default(),
            state: SessionState::Setup,
            seed,
            guesses: 0,
        }
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(from = ?self.state, to = ?next, "session state change");
        self.state = next;
    }

    /// Evaluate a guess and record the word if it matches
    ///
    /// Matching is against the whole word list, so claiming an already found
    /// word succeeds again without counting twice.
    ///
    /// # Errors
    /// Returns `GuessError` for out-of-bounds or non-straight selections, or once
    /// the session is complete. The session state is unchanged on error.
    pub fn guess(&mut self, guess: &Guess) -> Result<GuessOutcome, GuessError> {
        if self.state != SessionState::Playing {
            return Err(GuessError::Finished);
        }

        let (line, word) = check_selection(&self.puzzle.grid, &self.words, guess)?;
        self.guesses += 1;

        let Some(word) = word else {
            return Ok(GuessOutcome::NotFound { text: line.text });
        };

        let first_time = self.found.insert(word.clone());
        self.found_cells.extend(line.cells);
        tracing::debug!(%word, first_time, found = self.found.len(), "word claimed");

        if self.found.len() == self.words.distinct_len() {
            self.transition(SessionState::Complete);
        }

        Ok(GuessOutcome::Found { word, first_time })
    }

    /// Parse player input and evaluate it
    ///
    /// # Errors
    /// Returns `GuessError::Malformed` for unparsable input, otherwise as `guess`.
    pub fn submit(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let guess = Guess::parse(input)?;
        self.guess(&guess)
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    /// Seed the puzzle was generated from, if it was generated here
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of evaluated guesses, found or not
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Cells covered by claimed words
    #[must_use]
    pub const fn found_cells(&self) -> &FxHashSet<Position> {
        &self.found_cells
    }

    /// Distinct words not yet found, in list order
    #[must_use]
    pub fn remaining_words(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.words
            .iter()
            .map(Word::text)
            .filter(|w| !self.found.contains(*w) && seen.insert(*w))
            .collect()
    }
}
