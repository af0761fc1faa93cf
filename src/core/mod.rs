//! Core domain types for word search
//!
//! Words, the letter grid and line directions. Everything here is pure and
//! free of randomness or I/O.

mod direction;
mod grid;
mod word;
mod word_list;

pub use direction::Direction;
pub use grid::{EMPTY_CELL, Grid, GridError, Position};
pub use word::{Word, WordError};
pub use word_list::{WordList, WordListError};
