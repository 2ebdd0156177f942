//! Session state and turn controller

use super::{Board, GameConfig, Key, RevealSequencer, Status};
use crate::core::{Word, evaluate};
use crate::wordlists::TargetPicker;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Error type for sessions that cannot be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyWordList,
    NoAttempts,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty, no target to pick"),
            Self::NoAttempts => write!(f, "A game needs at least one attempt"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Turn controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    /// Accepting letters for the active row
    #[default]
    Idle,
    /// Row submitted, reveal in progress
    Submitting,
    /// Reveal finished, resolving the next state
    AdvanceOrEnd,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Typed,
    Erased,
    /// Row submitted, reveal started
    Submitted,
}

/// Result of one reveal tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealProgress {
    /// No reveal running
    Idle,
    /// One more cell revealed, more to come
    Revealed { column: usize },
    /// Last cell revealed; status resolved
    Complete(Status),
}

/// One game session
pub struct Session<P: TargetPicker> {
    config: GameConfig,
    words: Vec<Word>,
    picker: P,
    target: Word,
    board: Board,
    status: Status,
    phase: TurnPhase,
    reveal: Option<RevealSequencer>,
}

impl<P: TargetPicker> Session<P> {
    /// Start a session with a target picked from `words`
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the word list is empty or `config.tries` is 0.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{GameConfig, Session, Status};
    /// use wordle_game::wordlists::{FirstWord, WORDS, loader::words_from_slice};
    ///
    /// let session = Session::new(GameConfig::new(), words_from_slice(WORDS), FirstWord).unwrap();
    /// assert_eq!(session.status(), Status::Playing);
    /// assert_eq!(session.target().to_string(), "APPLE");
    /// ```
    pub fn new(config: GameConfig, words: Vec<Word>, picker: P) -> Result<Self, SessionError> {
        if config.tries == 0 {
            return Err(SessionError::NoAttempts);
        }
        let target = picker.pick(&words).ok_or(SessionError::EmptyWordList)?;

        debug!(tries = config.tries, words = words.len(), "Session created");

        Ok(Self {
            config,
            words,
            picker,
            target,
            board: Board::new(config.tries),
            status: Status::Playing,
            phase: TurnPhase::Idle,
            reveal: None,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// True while a reveal is running; all keys are ignored
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.reveal.is_some()
    }

    /// Delay before the next reveal tick, if a reveal is running
    #[must_use]
    pub fn reveal_delay(&self) -> Option<Duration> {
        self.reveal.as_ref().map(RevealSequencer::delay)
    }

    /// Number of submitted guesses so far
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        let active = self.board.active_row_index();
        if self.status.is_over() || self.is_busy() {
            active + 1
        } else {
            active
        }
    }

    /// Feed one key press to the turn controller
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.status.is_over() || self.is_busy() {
            return KeyOutcome::Ignored;
        }

        let row_full = self.board.active_row().is_full();
        match key {
            Key::Letter(c) if !row_full && c.is_ascii_alphabetic() => {
                if self.board.push_letter(c) {
                    KeyOutcome::Typed
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Backspace => {
                if self.board.pop_letter() {
                    KeyOutcome::Erased
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter if row_full => self.submit(),
            _ => KeyOutcome::Ignored,
        }
    }

    fn submit(&mut self) -> KeyOutcome {
        let Some(guess) = self.board.active_row().word() else {
            return KeyOutcome::Ignored;
        };

        let evaluation = evaluate(&guess, &self.target);
        info!(
            row = self.board.active_row_index(),
            guess = %guess,
            feedback = %evaluation.to_emoji(),
            "Guess submitted"
        );

        self.reveal = Some(RevealSequencer::new(evaluation, self.config.reveal_delay));
        self.phase = TurnPhase::Submitting;
        KeyOutcome::Submitted
    }

    /// Reveal the next cell of the submitted row
    pub fn tick_reveal(&mut self) -> RevealProgress {
        let Some(reveal) = self.reveal.as_mut() else {
            return RevealProgress::Idle;
        };

        let Some(column) = reveal.step(self.board.active_row_mut()) else {
            return RevealProgress::Idle;
        };
        debug!(column, "Cell revealed");

        if !reveal.is_done() {
            return RevealProgress::Revealed { column };
        }

        let full_match = reveal.full_match();
        self.reveal = None;
        self.phase = TurnPhase::AdvanceOrEnd;
        RevealProgress::Complete(self.resolve_turn(full_match))
    }

    /// Run the remaining reveal ticks, pausing before each one
    ///
    /// Returns the resolved status, or the current one if nothing was revealing.
    pub fn finish_reveal(&mut self, mut pause: impl FnMut(Duration)) -> Status {
        while let Some(delay) = self.reveal_delay() {
            pause(delay);
            if let RevealProgress::Complete(status) = self.tick_reveal() {
                return status;
            }
        }
        self.status
    }

    fn resolve_turn(&mut self, full_match: bool) -> Status {
        let row = self.board.active_row_index();

        if full_match {
            self.status = Status::Won;
        } else if self.board.is_last_row() {
            self.status = Status::Lost;
        } else {
            self.board.advance();
        }
        self.phase = TurnPhase::Idle;

        if self.status.is_over() {
            info!(status = %self.status, target = %self.target, guesses = row + 1, "Game over");
        } else {
            debug!(next_row = self.board.active_row_index(), "Advanced to next row");
        }
        self.status
    }

    /// Start over with an empty board
    ///
    /// The target is picked again, so a fixed picker keeps the same word.
    pub fn reset(&mut self) {
        if let Some(target) = self.picker.pick(&self.words) {
            self.target = target;
        }
        self.board = Board::new(self.config.tries);
        self.status = Status::Playing;
        self.phase = TurnPhase::Idle;
        self.reveal = None;

        info!("Session reset");
    }
}
