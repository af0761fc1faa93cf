//! Puzzle generation
//!
//! Random word placement with bounded retries.

mod engine;
mod placement;

pub use engine::{DEFAULT_MAX_ATTEMPTS, GenerationError, GridGenerator, Puzzle};
pub use placement::{Placement, can_place};
