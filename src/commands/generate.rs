//! Puzzle generation command
//!
//! Builds a single puzzle for printing, optionally with its answer key.

use crate::core::WordList;
use crate::game::GameConfig;
use crate::generator::{GenerationError, GridGenerator, Puzzle};

/// Result of generating a puzzle
pub struct GenerateResult {
    pub puzzle: Puzzle,
    pub words: WordList,
    pub seed: u64,
}

/// Generate a puzzle from the configured seed (or a fresh one)
///
/// # Errors
///
/// Returns an error if a word cannot be placed in the grid.
pub fn generate_puzzle(
    words: WordList,
    config: &GameConfig,
) -> Result<GenerateResult, GenerationError> {
    let seed = config.resolve_seed();
    let puzzle = GridGenerator::seeded(seed, config.max_attempts).generate(&words, config.grid_size)?;

    Ok(GenerateResult {
        puzzle,
        words,
        seed,
    })
}
