//! Interactive play mode
//!
//! Text-based game loop: show the grid, read four coordinates, report the result.

use crate::game::{GameSession, GuessOutcome};
use crate::output::formatters::{format_grid, format_guess_error, format_outcome, found_progress};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Every word was found
    Won { guesses: usize },
    /// Input ended before the puzzle was solved
    Abandoned { found: usize, total: usize },
}

/// Run the interactive game loop until the puzzle is solved or input ends
///
/// Invalid input is reported and the prompt repeats; it never ends the game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> io::Result<PlayOutcome> {
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    writeln!(out, "{}", "       🔍  W O R D   S E A R C H  🔍".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    if let Some(seed) = session.seed() {
        writeln!(out, "Puzzle seed: {seed}")?;
    }
    writeln!(
        out,
        "Find every word. Enter: start_row start_col end_row end_col\n"
    )?;

    let total = session.words().distinct_len();

    while !session.is_complete() {
        write!(out, "{}", format_grid(session.grid(), session.found_cells()))?;
        writeln!(out, "\n{}", found_progress(session.found_count(), total, 20))?;
        writeln!(out, "Words left: {}", session.remaining_words().join(", "))?;
        write!(out, "\nYour guess: ")?;
        out.flush()?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out, "\n\n👋 Input closed. Thanks for playing!")?;
            return Ok(PlayOutcome::Abandoned {
                found: session.found_count(),
                total,
            });
        }

        // Stray bytes become replacement characters and fail to parse as a guess
        let line = String::from_utf8_lossy(&buf);
        let message = match session.submit(&line) {
            Ok(outcome @ GuessOutcome::Found { .. }) => format_outcome(&outcome).green().to_string(),
            Ok(outcome) => format_outcome(&outcome).red().to_string(),
            Err(e) => format_guess_error(&e).yellow().to_string(),
        };
        writeln!(out, "\n{message}\n")?;
    }

    write!(out, "{}", format_grid(session.grid(), session.found_cells()))?;
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "  🎉 Congratulations! You found all the hidden words! 🎉"
            .bright_green()
            .bold()
    )?;
    writeln!(
        out,
        "  {} words in {} guesses",
        total.to_string().bright_cyan().bold(),
        session.guesses().to_string().bright_cyan().bold()
    )?;
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;

    Ok(PlayOutcome::Won {
        guesses: session.guesses(),
    })
}
