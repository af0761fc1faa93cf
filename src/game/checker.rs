//! Selection checking
//!
//! Reads the straight line between two endpoints and matches it against the
//! word list. Rows and columns are read in ascending order whichever endpoint
//! comes first; diagonals are read from start to end.

use super::guess::{Guess, GuessError};
use crate::core::{Direction, EMPTY_CELL, Grid, Position, WordList};

/// Cells covered by a selection and the letters they spell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub cells: Vec<Position>,
    pub text: String,
}

/// Read the letters between the guess endpoints
///
/// # Errors
/// Returns `GuessError::OutOfBounds` if an endpoint lies outside the grid, or
/// `GuessError::NotStraightLine` for a diagonal that is not at 45°.
pub fn read_selection(grid: &Grid, guess: &Guess) -> Result<Line, GuessError> {
    let Guess { start, end } = *guess;

    for pos in [start, end] {
        if !grid.contains(pos) {
            return Err(GuessError::OutOfBounds {
                pos,
                size: grid.size(),
            });
        }
    }

    let cells: Vec<Position> = if start.row == end.row {
        let (from, to) = (start.col.min(end.col), start.col.max(end.col));
        (from..=to).map(|col| Position::new(start.row, col)).collect()
    } else if start.col == end.col {
        let (from, to) = (start.row.min(end.row), start.row.max(end.row));
        (from..=to).map(|row| Position::new(row, start.col)).collect()
    } else {
        let steps = start.row.abs_diff(end.row);
        if steps != start.col.abs_diff(end.col) {
            return Err(GuessError::NotStraightLine { start, end });
        }
        let direction = Direction::from_delta(
            signum(start.row, end.row),
            signum(start.col, end.col),
        )
        .ok_or(GuessError::NotStraightLine { start, end })?;

        (0..=steps)
            .map(|i| grid.step(start, direction, i))
            .collect::<Option<Vec<_>>>()
            .ok_or(GuessError::NotStraightLine { start, end })?
    };

    // Generated grids are always full; a hand-built grid may not be
    let text = cells
        .iter()
        .map(|&pos| grid.letter(pos).map_or(EMPTY_CELL, char::from))
        .collect();

    Ok(Line { cells, text })
}

/// Check a selection against the word list
///
/// Returns the line read and the matched word, if any. The reversed reading of
/// the same cells is also accepted so words running left, up or back along a
/// diagonal can be claimed from either end.
///
/// # Errors
/// Propagates the errors of `read_selection`.
///
/// # Examples
/// ```
/// use word_search::core::{Grid, Position, Word, WordList};
/// use word_search::game::{Guess, check_selection};
///
/// let grid = Grid::from_rows(&["CAT", "XXX", "XXX"]).unwrap();
/// let words = WordList::new(vec![Word::new("cat").unwrap()]).unwrap();
///
/// let guess = Guess::new(Position::new(0, 2), Position::new(0, 0));
/// let (_, word) = check_selection(&grid, &words, &guess).unwrap();
/// assert_eq!(word.as_deref(), Some("CAT"));
/// ```
pub fn check_selection(
    grid: &Grid,
    words: &WordList,
    guess: &Guess,
) -> Result<(Line, Option<String>), GuessError> {
    let line = read_selection(grid, guess)?;
    let word = match_line(words, &line);
    Ok((line, word))
}

/// The listed word a line spells, read forwards or backwards
#[must_use]
pub fn match_line(words: &WordList, line: &Line) -> Option<String> {
    if words.contains(&line.text) {
        return Some(line.text.clone());
    }

    let reversed: String = line.text.chars().rev().collect();
    words.contains(&reversed).then_some(reversed)
}

fn signum(from: usize, to: usize) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}
