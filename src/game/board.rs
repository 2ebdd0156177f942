//! Board state: rows of letter cells
//!
//! Only the active row accepts letters. Rows above it are submitted and
//! revealed, rows below it are empty.

use crate::core::{Feedback, WORD_LENGTH, Word};

/// One letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    value: Option<char>,
    feedback: Feedback,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<char> {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// One guess attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
}

impl Row {
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Number of leading filled cells
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().take_while(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled() == WORD_LENGTH
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    /// True once every cell has its feedback applied
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.cells.iter().all(|c| c.feedback.is_revealed())
    }

    /// The guessed word, if the row is full
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        if !self.is_full() {
            return None;
        }
        Word::new(&self.text()).ok()
    }

    /// Typed letters so far, e.g. "PAS"
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().map_while(|c| c.value).collect()
    }

    fn push(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        match self.cells.iter_mut().find(|c| c.is_empty()) {
            Some(cell) => {
                cell.value = Some(letter.to_ascii_uppercase());
                true
            }
            None => false,
        }
    }

    fn pop(&mut self) -> bool {
        match self.cells.iter_mut().rev().find(|c| !c.is_empty()) {
            Some(cell) => {
                cell.value = None;
                true
            }
            None => false,
        }
    }

    /// Apply feedback to one cell; revealed cells are never overwritten
    pub(crate) fn reveal(&mut self, column: usize, feedback: Feedback) -> bool {
        match self.cells.get_mut(column) {
            Some(cell) if !cell.feedback.is_revealed() => {
                cell.feedback = feedback;
                true
            }
            _ => false,
        }
    }
}

/// Grid of `tries` rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
    active: usize,
}

impl Board {
    /// Create an empty board
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Board;
    ///
    /// let board = Board::new(6);
    /// assert_eq!(board.rows().len(), 6);
    /// assert_eq!(board.active_row_index(), 0);
    /// ```
    #[must_use]
    pub fn new(tries: usize) -> Self {
        Self {
            rows: vec![Row::default(); tries],
            active: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn active_row_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_row(&self) -> &Row {
        &self.rows[self.active]
    }

    pub(crate) fn active_row_mut(&mut self) -> &mut Row {
        &mut self.rows[self.active]
    }

    #[must_use]
    pub fn is_last_row(&self) -> bool {
        self.active + 1 >= self.rows.len()
    }

    /// Write a letter into the first empty cell of the active row
    ///
    /// Returns false (no change) when the row is already full or `letter` is
    /// not an ASCII letter.
    pub fn push_letter(&mut self, letter: char) -> bool {
        self.active_row_mut().push(letter)
    }

    /// Clear the last filled cell of the active row
    ///
    /// Returns false (no change) when the row is empty.
    pub fn pop_letter(&mut self) -> bool {
        self.active_row_mut().pop()
    }

    /// Move to the next row; no-op on the last row
    pub(crate) fn advance(&mut self) -> bool {
        if self.is_last_row() {
            return false;
        }
        self.active += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, text: &str) {
        for c in text.chars() {
            board.push_letter(c);
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6);
        assert_eq!(board.rows().len(), 6);
        for row in board.rows() {
            assert!(row.is_empty());
            for cell in row.cells() {
                assert_eq!(cell.value(), None);
                assert_eq!(cell.feedback(), Feedback::Unset);
            }
        }
    }

    #[test]
    fn push_uppercases_and_fills_left_to_right() {
        let mut board = Board::new(6);
        assert!(board.push_letter('p'));
        assert!(board.push_letter('A'));

        let row = board.active_row();
        assert_eq!(row.cells()[0].value(), Some('P'));
        assert_eq!(row.cells()[1].value(), Some('A'));
        assert_eq!(row.filled(), 2);
        assert_eq!(row.text(), "PA");
    }

    #[test]
    fn push_on_full_row_is_rejected() {
        let mut board = Board::new(6);
        fill(&mut board, "paste");
        let before = board.clone();

        assert!(!board.push_letter('x'));
        assert_eq!(board, before);
    }

    #[test]
    fn push_rejects_non_letters() {
        let mut board = Board::new(6);
        for c in ['1', '#', ' ', 'é', 'ß'] {
            assert!(!board.push_letter(c), "{c:?} should be rejected");
        }
        assert_eq!(board, Board::new(6));

        fill(&mut board, "pa");
        assert!(!board.push_letter('-'));
        assert_eq!(board.active_row().text(), "PA");
    }

    #[test]
    fn pop_clears_last_filled_cell() {
        let mut board = Board::new(6);
        fill(&mut board, "pas");

        assert!(board.pop_letter());
        assert_eq!(board.active_row().text(), "PA");
    }

    #[test]
    fn pop_on_empty_row_is_noop() {
        let mut board = Board::new(6);
        let before = board.clone();

        assert!(!board.pop_letter());
        assert_eq!(board, before);
    }

    #[test]
    fn full_row_yields_word() {
        let mut board = Board::new(6);
        fill(&mut board, "past");
        assert!(board.active_row().word().is_none());

        board.push_letter('e');
        assert_eq!(board.active_row().word().unwrap().to_string(), "PASTE");
    }

    #[test]
    fn reveal_is_write_once() {
        let mut board = Board::new(6);
        fill(&mut board, "paste");
        let row = board.active_row_mut();

        assert!(row.reveal(0, Feedback::Present));
        assert!(!row.reveal(0, Feedback::Correct));
        assert_eq!(row.cells()[0].feedback(), Feedback::Present);
        assert!(!row.reveal(WORD_LENGTH, Feedback::Absent));
    }

    #[test]
    fn advance_stops_at_last_row() {
        let mut board = Board::new(2);
        assert!(!board.is_last_row());
        assert!(board.advance());
        assert!(board.is_last_row());
        assert!(!board.advance());
        assert_eq!(board.active_row_index(), 1);
    }
}
