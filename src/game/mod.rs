//! Game play
//!
//! Guess parsing, selection checking and the session state machine.

mod checker;
mod config;
mod guess;
mod session;

pub use checker::{Line, check_selection, match_line, read_selection};
pub use config::{ConfigError, DEFAULT_GRID_SIZE, GameConfig, MAX_GRID_SIZE};
pub use guess::{Guess, GuessError};
pub use session::{GameSession, GuessOutcome, SessionState};
