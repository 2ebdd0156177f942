//! Word list and target selection
//!
//! The target word is drawn from a fixed in-memory list compiled into the binary.

pub mod loader;

use crate::core::Word;

/// Candidate target words
pub const WORDS: &[&str] = &[
    "APPLE", "BEAST", "FAINT", "FEAST", "FRUIT", "GAMES", "PAINT", "PASTE", "TOWER", "REACT",
];

/// Number of words in `WORDS`
pub const WORDS_COUNT: usize = 10;

/// Chooses the target word for a session
pub trait TargetPicker {
    /// Pick a target from `words`, or None if the list is empty
    fn pick(&self, words: &[Word]) -> Option<Word>;
}

/// Always the first entry of the list
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstWord;

impl TargetPicker for FirstWord {
    fn pick(&self, words: &[Word]) -> Option<Word> {
        words.first().copied()
    }
}

/// Uniformly random entry, re-drawn on every pick
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWord;

impl TargetPicker for RandomWord {
    fn pick(&self, words: &[Word]) -> Option<Word> {
        use rand::prelude::IndexedRandom;

        words.choose(&mut rand::rng()).copied()
    }
}

/// Target picker selected at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerType {
    #[default]
    First,
    Random,
}

impl TargetPicker for PickerType {
    fn pick(&self, words: &[Word]) -> Option<Word> {
        match self {
            Self::First => FirstWord.pick(words),
            Self::Random => RandomWord.pick(words),
        }
    }
}
