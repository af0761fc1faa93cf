//! The eight straight-line directions a word can run in

use std::fmt;

/// A unit step (Δrow, Δcol) over {-1, 0, 1}, excluding (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    UpLeft,
    DownLeft,
    UpRight,
}

impl Direction {
    /// All directions, in sampling order
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
        Self::DownRight,
        Self::UpLeft,
        Self::DownLeft,
        Self::UpRight,
    ];

    /// Row and column step for one letter
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::DownRight => (1, 1),
            Self::UpLeft => (-1, -1),
            Self::DownLeft => (1, -1),
            Self::UpRight => (-1, 1),
        }
    }

    /// Look up the direction with the given step
    ///
    /// Returns `None` for (0, 0) or any component outside -1..=1.
    #[must_use]
    pub fn from_delta(d_row: isize, d_col: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.delta() == (d_row, d_col))
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        let (d_row, d_col) = self.delta();
        d_row != 0 && d_col != 0
    }

    /// Short human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Down => "down",
            Self::Up => "up",
            Self::DownRight => "down-right",
            Self::UpLeft => "up-left",
            Self::DownLeft => "down-left",
            Self::UpRight => "up-right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
