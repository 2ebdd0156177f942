//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::game::Row;
use colored::{ColoredString, Colorize};

/// Format a row's revealed feedback as emoji string
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.cells().iter().map(|c| c.feedback().to_emoji()).collect()
}

/// Render one cell as " X " with a feedback background
#[must_use]
pub fn colored_cell(letter: Option<char>, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or('_'));
    match feedback {
        Feedback::Unset => text.bold(),
        Feedback::Absent => text.white().on_bright_black().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Correct => text.black().on_green().bold(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Key, Session};
    use crate::core::Word;
    use crate::wordlists::FirstWord;
    use colored::Color;
    use std::time::Duration;

    #[test]
    fn row_to_emoji_unrevealed() {
        assert_eq!(row_to_emoji(&Row::default()), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn row_to_emoji_revealed() {
        let config = GameConfig::new().with_reveal_delay(Duration::ZERO);
        let mut session =
            Session::new(config, vec![Word::new("apple").unwrap()], FirstWord).unwrap();
        for c in "paste".chars() {
            session.handle_key(Key::Letter(c));
        }
        session.handle_key(Key::Enter);
        session.finish_reveal(|_| {});

        assert_eq!(row_to_emoji(&session.board().rows()[0]), "🟨🟨⬛⬛🟩");
    }

    #[test]
    fn colored_cell_shows_placeholder() {
        let empty = colored_cell(None, Feedback::Unset);
        assert_eq!(&*empty, " _ ");
        assert_eq!(empty.bgcolor, None);

        let correct = colored_cell(Some('A'), Feedback::Correct);
        assert_eq!(&*correct, " A ");
        assert_eq!(correct.bgcolor, Some(Color::Green));
    }

    #[test]
    fn colored_cell_background_follows_feedback() {
        assert_eq!(
            colored_cell(Some('P'), Feedback::Present).bgcolor,
            Some(Color::Yellow)
        );
        assert_eq!(
            colored_cell(Some('S'), Feedback::Absent).bgcolor,
            Some(Color::BrightBlack)
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
