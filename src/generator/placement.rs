//! Placement validation
//!
//! A placement binds a word to a start cell and a direction. `can_place` is the
//! pure check the generator runs before writing anything into the grid.

use crate::core::{Direction, Grid, Position, Word};

/// A word committed to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: Word,
    pub start: Position,
    pub direction: Direction,
    /// Number of random samples drawn before this placement fit
    pub attempts: usize,
}

impl Placement {
    /// Cells occupied by the word, first letter first
    #[must_use]
    pub fn cells(&self) -> Vec<Position> {
        let (d_row, d_col) = self.direction.delta();
        (0..self.word.len())
            .map(|i| {
                let i = i as isize;
                Position::new(
                    self.start.row.wrapping_add_signed(d_row * i),
                    self.start.col.wrapping_add_signed(d_col * i),
                )
            })
            .collect()
    }

    /// Cell holding the last letter
    #[must_use]
    pub fn end(&self) -> Position {
        self.cells().last().copied().unwrap_or(self.start)
    }
}

/// Check whether `word` fits at `start` running in `direction`
///
/// Every target cell must be inside the grid and either empty or already
/// holding the letter the word needs there. Crossing words share cells this way.
///
/// # Examples
/// ```
/// use word_search::core::{Direction, Grid, Position, Word};
/// use word_search::generator::can_place;
///
/// let grid = Grid::from_rows(&["...", ".A.", "..."]).unwrap();
/// let cat = Word::new("CAT").unwrap();
///
/// // Crosses the existing A
/// assert!(can_place(&grid, &cat, Position::new(1, 0), Direction::Right));
/// // C would overwrite the A
/// assert!(!can_place(&grid, &cat, Position::new(1, 1), Direction::Right));
/// // Runs off the right edge
/// assert!(!can_place(&grid, &cat, Position::new(0, 1), Direction::Right));
/// ```
#[must_use]
pub fn can_place(grid: &Grid, word: &Word, start: Position, direction: Direction) -> bool {
    word.letters().iter().enumerate().all(|(i, &letter)| {
        grid.step(start, direction, i)
            .is_some_and(|pos| grid.letter(pos).is_none_or(|existing| existing == letter))
    })
}

/// Write the word's letters along its placement
///
/// Callers must have checked the placement with `can_place`.
pub(crate) fn commit(grid: &mut Grid, placement: &Placement) {
    for (pos, &letter) in placement.cells().into_iter().zip(placement.word.letters()) {
        grid.set(pos, letter);
    }
}
