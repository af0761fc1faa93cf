//! Display functions for command results

use super::formatters::{create_progress_bar, format_grid};
use crate::commands::{BenchmarkResult, GenerateResult, PlayOutcome};
use crate::core::{Direction, Position, Word};
use crate::generator::Placement;
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Print a generated puzzle, with the answer key if `reveal` is set
pub fn print_generate_result(result: &GenerateResult, reveal: bool) {
    let size = result.puzzle.grid.size();
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}x{} (seed {})",
        "WORD SEARCH".bright_cyan().bold(),
        size,
        size,
        result.seed.to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    let highlighted: FxHashSet<Position> = if reveal {
        result
            .puzzle
            .placements
            .iter()
            .flat_map(Placement::cells)
            .collect()
    } else {
        FxHashSet::default()
    };

    println!("\n{}", format_grid(&result.puzzle.grid, &highlighted));

    let words: Vec<&str> = result.words.iter().map(Word::text).collect();
    println!("Words: {}", words.join(", "));

    if reveal {
        println!("\n🔑 {}", "Answer key:".bright_cyan().bold());
        for placement in &result.puzzle.placements {
            println!(
                "   {} {} → {}  {}",
                format!("{:<12}", placement.word.text()).bright_white().bold(),
                placement.start,
                placement.end(),
                placement.direction.to_string().bright_black()
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.total_puzzles);
    println!("   First seed:       {}", result.first_seed);
    println!(
        "   Succeeded:        {}",
        result.succeeded.to_string().green().bold()
    );
    println!(
        "   Failed:           {}",
        if result.failed == 0 {
            result.failed.to_string().green()
        } else {
            result.failed.to_string().red().bold()
        }
    );
    println!(
        "   Avg attempts:     {}",
        format!("{:.1}", result.average_attempts).bright_yellow().bold()
    );
    println!("   Worst word:       {} attempts", result.max_word_attempts);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    let placed: usize = result.direction_counts.values().sum();
    if placed > 0 {
        println!("\n🧭 {}", "Directions:".bright_cyan().bold());
        for direction in Direction::ALL {
            let count = result.direction_counts.get(&direction).copied().unwrap_or(0);
            let pct = (count as f64 / placed as f64) * 100.0;
            let bar = create_progress_bar(pct, 25.0, 20);
            println!("   {:<11} {} {count:5} ({pct:5.1}%)", direction.name(), bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Unplaceable words:".bright_red().bold());
        let mut failures: Vec<_> = result.failures.iter().collect();
        failures.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (word, count) in failures {
            println!("   {word:<12} {count}");
        }
    }
}

/// Print how an interactive game ended
pub fn print_play_outcome(outcome: PlayOutcome) {
    match outcome {
        PlayOutcome::Won { guesses } => {
            println!("{}", format!("Solved in {guesses} guesses.").green());
        }
        PlayOutcome::Abandoned { found, total } => {
            println!("{}", format!("Stopped with {found}/{total} words found.").yellow());
        }
    }
}
