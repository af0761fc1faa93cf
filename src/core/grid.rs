//! Square letter grid
//!
//! Cells hold an uppercase ASCII letter, or nothing until the generator fills them.

use super::Direction;
use std::fmt;

/// Rendering of an empty cell
pub const EMPTY_CELL: char = '.';

/// Zero-based grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error type for grids built from text rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    NotSquare { row: usize, len: usize, size: usize },
    InvalidCell { row: usize, col: usize, found: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { row, len, size } => {
                write!(f, "Row {row} has {len} cells, expected {size}")
            }
            Self::InvalidCell { row, col, found } => {
                write!(f, "Invalid cell '{found}' at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A fixed-size square matrix of letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl Grid {
    /// Create a grid with every cell empty
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from text rows
    ///
    /// Each row holds one character per cell: a letter (case-insensitive) or
    /// `.` for an empty cell. Whitespace inside a row is ignored.
    ///
    /// # Errors
    /// Returns `GridError` if a row length differs from the row count or a
    /// cell is neither a letter nor `.`.
    ///
    /// # Examples
    /// ```
    /// use word_search::core::{Grid, Position};
    ///
    /// let grid = Grid::from_rows(&["C A T", "X X X", "X X X"]).unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.letter(Position::new(0, 2)), Some(b'T'));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut grid = Self::new(size);

        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();

            if chars.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: chars.len(),
                    size,
                });
            }

            for (col, ch) in chars.into_iter().enumerate() {
                match ch {
                    EMPTY_CELL => {}
                    c if c.is_ascii_alphabetic() => {
                        grid.set(Position::new(row, col), c.to_ascii_uppercase() as u8);
                    }
                    found => return Err(GridError::InvalidCell { row, col, found }),
                }
            }
        }

        Ok(grid)
    }

    /// Side length of the grid
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Check whether a position lies inside the grid
    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Letter at `pos`, or `None` if the cell is empty or out of bounds
    #[inline]
    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<u8> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    /// Write a letter into a cell
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn set(&mut self, pos: Position, letter: u8) {
        assert!(self.contains(pos), "position {pos} outside grid");
        let index = self.index(pos);
        self.cells[index] = Some(letter);
    }

    /// Position reached after `steps` moves in `direction`, if still inside the grid
    #[must_use]
    pub fn step(&self, start: Position, direction: Direction, steps: usize) -> Option<Position> {
        let (d_row, d_col) = direction.delta();
        let row = start.row.checked_add_signed(d_row * steps as isize)?;
        let col = start.col.checked_add_signed(d_col * steps as isize)?;
        let pos = Position::new(row, col);
        self.contains(pos).then_some(pos)
    }

    /// Read `len` letters starting at `start` along `direction`
    ///
    /// Returns `None` if the line leaves the grid or crosses an empty cell.
    #[must_use]
    pub fn read(&self, start: Position, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| {
                self.step(start, direction, i)
                    .and_then(|pos| self.letter(pos))
                    .map(char::from)
            })
            .collect()
    }

    /// Iterate over every position, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Check whether every cell holds a letter
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Rows as strings, empty cells shown as `.`
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(EMPTY_CELL, char::from))
                    .collect()
            })
            .collect()
    }

    #[inline]
    const fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let spaced: Vec<String> = row.chars().map(String::from).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert!(grid.positions().all(|pos| grid.letter(pos).is_none()));
        assert!(!grid.is_full());
    }

    #[test]
    fn from_rows_parses_letters_and_empty_cells() {
        let grid = Grid::from_rows(&["ab.", "...", "..z"]).unwrap();
        assert_eq!(grid.letter(Position::new(0, 0)), Some(b'A'));
        assert_eq!(grid.letter(Position::new(0, 1)), Some(b'B'));
        assert_eq!(grid.letter(Position::new(0, 2)), None);
        assert_eq!(grid.letter(Position::new(2, 2)), Some(b'Z'));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        assert_eq!(
            Grid::from_rows(&["ABC", "AB", "ABC"]),
            Err(GridError::NotSquare {
                row: 1,
                len: 2,
                size: 3
            })
        );
    }

    #[test]
    fn from_rows_rejects_digits() {
        assert!(matches!(
            Grid::from_rows(&["A1", "BC"]),
            Err(GridError::InvalidCell { row: 0, col: 1, found: '1' })
        ));
    }

    #[test]
    fn letter_out_of_bounds_is_none() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.letter(Position::new(2, 0)), None);
        assert_eq!(grid.letter(Position::new(0, 2)), None);
    }

    #[test]
    fn step_stays_in_bounds() {
        let grid = Grid::new(3);
        let origin = Position::new(0, 0);
        assert_eq!(grid.step(origin, Direction::DownRight, 2), Some(Position::new(2, 2)));
        assert_eq!(grid.step(origin, Direction::DownRight, 3), None);
        assert_eq!(grid.step(origin, Direction::Up, 1), None);
        assert_eq!(grid.step(origin, Direction::Left, 0), Some(origin));
    }

    #[test]
    fn read_follows_direction() {
        let grid = Grid::from_rows(&["CAT", "XOX", "XXW"]).unwrap();
        let corner = Position::new(2, 2);
        assert_eq!(grid.read(Position::new(0, 0), Direction::Right, 3).as_deref(), Some("CAT"));
        assert_eq!(grid.read(Position::new(0, 2), Direction::Left, 3).as_deref(), Some("TAC"));
        assert_eq!(grid.read(Position::new(0, 0), Direction::DownRight, 3).as_deref(), Some("COW"));
        assert_eq!(grid.read(corner, Direction::UpLeft, 3).as_deref(), Some("WOC"));
        assert_eq!(grid.read(Position::new(0, 1), Direction::Right, 3), None);
    }

    #[test]
    fn read_stops_at_empty_cells() {
        let grid = Grid::from_rows(&["A.", ".."]).unwrap();
        assert_eq!(grid.read(Position::new(0, 0), Direction::Right, 2), None);
    }

    #[test]
    fn display_separates_cells_with_spaces() {
        let grid = Grid::from_rows(&["CAT", "X.X", "XXX"]).unwrap();
        assert_eq!(grid.to_string(), "C A T\nX . X\nX X X\n");
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn set_out_of_bounds_panics() {
        let mut grid = Grid::new(2);
        grid.set(Position::new(2, 0), b'A');
    }
}
