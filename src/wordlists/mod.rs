//! Word lists for puzzles
//!
//! Provides an embedded default word list and loading from plain-text files.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::{LoadError, WordSource};
