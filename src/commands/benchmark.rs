//! Benchmark command
//!
//! Generates many seeded puzzles in parallel and reports how placement went.

use crate::core::{Direction, WordList};
use crate::game::GameConfig;
use crate::generator::{GenerationError, GridGenerator};
use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Failures keyed by the word that could not be placed
    pub failures: FxHashMap<String, usize>,
    /// Mean random samples per successful puzzle
    pub average_attempts: f64,
    /// Most samples any single word needed
    pub max_word_attempts: usize,
    pub direction_counts: FxHashMap<Direction, usize>,
    pub first_seed: u64,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate `count` puzzles with consecutive seeds
///
/// Seeds start at the configured seed (or a fresh one). `progress`, if given,
/// is advanced once per puzzle from the worker threads.
pub fn run_benchmark(
    words: &WordList,
    config: &GameConfig,
    count: usize,
    progress: Option<&ProgressBar>,
) -> BenchmarkResult {
    let first_seed = config.resolve_seed();
    let start = Instant::now();

    let results: Vec<_> = (0..count as u64)
        .into_par_iter()
        .map(|offset| {
            let result = GridGenerator::seeded(first_seed.wrapping_add(offset), config.max_attempts)
                .generate(words, config.grid_size);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            result
        })
        .collect();

    let duration = start.elapsed();

    let mut succeeded = 0;
    let mut total_attempts = 0;
    let mut max_word_attempts = 0;
    let mut failures: FxHashMap<String, usize> = FxHashMap::default();
    let mut direction_counts: FxHashMap<Direction, usize> = FxHashMap::default();

    for result in results {
        match result {
            Ok(puzzle) => {
                succeeded += 1;
                total_attempts += puzzle.total_attempts();
                for placement in &puzzle.placements {
                    max_word_attempts = max_word_attempts.max(placement.attempts);
                    *direction_counts.entry(placement.direction).or_insert(0) += 1;
                }
            }
            Err(GenerationError::WordTooLong { word, .. } | GenerationError::Unplaceable { word, .. }) => {
                *failures.entry(word).or_insert(0) += 1;
            }
        }
    }

    BenchmarkResult {
        total_puzzles: count,
        succeeded,
        failed: count - succeeded,
        failures,
        average_attempts: if succeeded == 0 {
            0.0
        } else {
            total_attempts as f64 / succeeded as f64
        },
        max_word_attempts,
        direction_counts,
        first_seed,
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
