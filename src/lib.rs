//! Word Search
//!
//! A word search puzzle generator and single-player terminal game.
//!
//! # Quick Start
//!
//! ```rust
//! use word_search::core::{Word, WordList};
//! use word_search::game::{GameConfig, GameSession, Guess};
//!
//! let words = WordList::new(vec![Word::new("rust").unwrap()]).unwrap();
//! let mut session = GameSession::new(words, &GameConfig::with_seed(1)).unwrap();
//!
//! // Claim the word from its recorded placement
//! let placement = session.puzzle().placements[0].clone();
//! let outcome = session.guess(&Guess::new(placement.start, placement.end())).unwrap();
//! assert!(outcome.is_found());
//! assert!(session.is_complete());
//! ```

// Core domain types
pub mod core;

// Puzzle generation
pub mod generator;

// Sessions, guesses and selection checking
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
