//! Formatting utilities for terminal output

use crate::core::{Grid, Position};
use crate::game::{GuessError, GuessOutcome};
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Render the grid with row and column indices
///
/// Cells in `highlighted` are drawn in bold green.
#[must_use]
pub fn format_grid(grid: &Grid, highlighted: &FxHashSet<Position>) -> String {
    let width = grid.size().saturating_sub(1).to_string().len();
    let mut out = String::new();

    let header: Vec<String> = (0..grid.size()).map(|col| format!("{col:>width$}")).collect();
    out.push_str(&format!("{:>width$} {}\n", "", header.join(" ").bright_black()));

    for (row, letters) in grid.rows().iter().enumerate() {
        let cells: Vec<String> = letters
            .chars()
            .enumerate()
            .map(|(col, ch)| {
                let cell = format!("{ch:>width$}");
                if highlighted.contains(&Position::new(row, col)) {
                    cell.bright_green().bold().to_string()
                } else {
                    cell
                }
            })
            .collect();
        out.push_str(&format!(
            "{} {}\n",
            format!("{row:>width$}").bright_black(),
            cells.join(" ")
        ));
    }

    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress line such as `[██░░] 2/4 words`
#[must_use]
pub fn found_progress(found: usize, total: usize, width: usize) -> String {
    let bar = create_progress_bar(found as f64, total as f64, width);
    format!("[{bar}] {found}/{total} words")
}

/// Status message for an evaluated guess
#[must_use]
pub fn format_outcome(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Found {
            word,
            first_time: true,
        } => format!("✅ Word found: {}", word.bright_yellow().bold()),
        GuessOutcome::Found {
            word,
            first_time: false,
        } => format!("✓ {word} was already found"),
        GuessOutcome::NotFound { text } => {
            format!("❌ Invalid word or coordinates ({text} is not on the list)")
        }
    }
}

/// Status message for a rejected guess
#[must_use]
pub fn format_guess_error(error: &GuessError) -> String {
    format!("⚠️  Invalid input: {error}. Please try again.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn grid_has_index_header_and_rows() {
        plain();
        let grid = Grid::from_rows(&["CAT", "XOX", "XXW"]).unwrap();
        let text = format_grid(&grid, &FxHashSet::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["  0 1 2", "0 C A T", "1 X O X", "2 X X W"]);
    }

    #[test]
    fn wide_grid_pads_indices() {
        plain();
        let grid = Grid::new(11);
        let text = format_grid(&grid, &FxHashSet::default());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].ends_with(" 9 10"));
        assert!(lines[1].starts_with(" 0  ."));
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn found_progress_counts() {
        assert_eq!(found_progress(1, 4, 4), "[█░░░] 1/4 words");
    }

    #[test]
    fn outcome_messages_mention_word() {
        plain();
        let found = GuessOutcome::Found {
            word: "CAT".to_string(),
            first_time: true,
        };
        assert!(format_outcome(&found).contains("CAT"));

        let missed = GuessOutcome::NotFound {
            text: "XYZ".to_string(),
        };
        assert!(format_outcome(&missed).contains("XYZ"));
    }

    #[test]
    fn guess_error_message_is_marked_invalid() {
        let msg = format_guess_error(&GuessError::Finished);
        assert!(msg.contains("Invalid input"));
    }
}
