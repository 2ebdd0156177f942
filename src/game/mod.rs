//! Game session: board, turn controller, reveal and status
//!
//! A [`Session`] owns all mutable state of one game. Front ends feed it
//! [`Key`] events and drive the reveal, either tick by tick or to completion.

pub mod board;
pub mod reveal;
pub mod session;
pub mod stats;

pub use board::{Board, Cell, Row};
pub use reveal::RevealSequencer;
pub use session::{KeyOutcome, RevealProgress, Session, SessionError, TurnPhase};
pub use stats::Statistics;

use std::fmt;
use std::time::Duration;

/// Number of guesses per game
pub const DEFAULT_TRIES: usize = 6;

/// Delay between revealed cells
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(300);

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub tries: usize,
    pub reveal_delay: Duration,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tries: DEFAULT_TRIES,
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }

    #[must_use]
    pub const fn with_reveal_delay(mut self, reveal_delay: Duration) -> Self {
        self.reveal_delay = reveal_delay;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Game status; Won and Lost are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Playing => "Playing",
            Self::Won => "Won",
            Self::Lost => "Lost",
        };
        f.write_str(text)
    }
}

/// Logical key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Single alphabetic character, any case
    Letter(char),
    Backspace,
    Enter,
    /// Anything the game does not recognize
    Other,
}

impl Key {
    /// Classify a typed character
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Self::Letter(c)
        } else {
            Self::Other
        }
    }

    /// Classify a key name such as "a", "Enter" or "Backspace"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Key;
    ///
    /// assert_eq!(Key::from_name("q"), Key::Letter('q'));
    /// assert_eq!(Key::from_name("Enter"), Key::Enter);
    /// assert_eq!(Key::from_name("Shift"), Key::Other);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "Backspace" => Self::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_constants() {
        let config = GameConfig::default();
        assert_eq!(config.tries, 6);
        assert_eq!(config.reveal_delay, Duration::from_millis(300));
    }

    #[test]
    fn config_override_delay() {
        let config = GameConfig::new().with_reveal_delay(Duration::ZERO);
        assert_eq!(config.reveal_delay, Duration::ZERO);
        assert_eq!(config.tries, DEFAULT_TRIES);
    }

    #[test]
    fn status_display_and_terminality() {
        assert_eq!(Status::Playing.to_string(), "Playing");
        assert_eq!(Status::Won.to_string(), "Won");
        assert_eq!(Status::Lost.to_string(), "Lost");
        assert!(!Status::Playing.is_over());
        assert!(Status::Won.is_over());
        assert!(Status::Lost.is_over());
    }

    #[test]
    fn key_classification() {
        assert_eq!(Key::from_char('z'), Key::Letter('z'));
        assert_eq!(Key::from_char('7'), Key::Other);
        assert_eq!(Key::from_char('é'), Key::Other);
        assert_eq!(Key::from_name("Backspace"), Key::Backspace);
        assert_eq!(Key::from_name("Escape"), Key::Other);
        assert_eq!(Key::from_name(""), Key::Other);
        assert_eq!(Key::from_name("ab"), Key::Other);
    }
}
