//! Timed, left-to-right reveal of feedback colors
//!
//! The sequencer owns the pending colors of one submitted row and applies
//! exactly one per tick. The driver decides how ticks are spaced: the TUI
//! schedules them on its event loop, line mode and tests run them in a loop
//! with an injected pause.

use super::board::Row;
use crate::core::{Evaluation, Feedback, WORD_LENGTH};
use std::time::Duration;

/// Reveal in progress for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSequencer {
    colors: [Feedback; WORD_LENGTH],
    full_match: bool,
    next: usize,
    delay: Duration,
}

impl RevealSequencer {
    #[must_use]
    pub const fn new(evaluation: Evaluation, delay: Duration) -> Self {
        Self {
            colors: evaluation.colors,
            full_match: evaluation.full_match,
            next: 0,
            delay,
        }
    }

    /// Delay before each cell is revealed
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Column the next tick will reveal
    #[must_use]
    pub const fn next_column(&self) -> usize {
        self.next
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.next >= WORD_LENGTH
    }

    #[must_use]
    pub const fn full_match(&self) -> bool {
        self.full_match
    }

    /// Apply the next color to `row`
    ///
    /// Returns the revealed column, or None once every cell is done.
    pub fn step(&mut self, row: &mut Row) -> Option<usize> {
        if self.is_done() {
            return None;
        }

        let column = self.next;
        row.reveal(column, self.colors[column]);
        self.next += 1;
        Some(column)
    }
}
