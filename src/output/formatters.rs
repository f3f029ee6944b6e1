//! Formatting utilities for terminal output

use crate::core::Answer;

/// Render an answer as one mark per position: `B` bull, `C` cow, `·` miss
///
/// Marks are grouped, not positional, the same way the game reports them.
#[must_use]
pub fn answer_marks(answer: Answer, length: usize) -> String {
    let misses = length.saturating_sub(answer.total());
    format!(
        "{}{}{}",
        "B".repeat(answer.bulls),
        "C".repeat(answer.cows),
        "·".repeat(misses)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_marks_mixed() {
        assert_eq!(answer_marks(Answer::new(1, 2), 4), "BCC·");
    }

    #[test]
    fn answer_marks_win() {
        assert_eq!(answer_marks(Answer::new(4, 0), 4), "BBBB");
    }

    #[test]
    fn answer_marks_nothing() {
        assert_eq!(answer_marks(Answer::new(0, 0), 3), "···");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
