//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod play;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GenerateResult, generate_puzzle};
pub use play::{PlayOutcome, run_play};
