//! Core domain types

pub mod feedback;
pub mod word;

pub use feedback::{Evaluation, Feedback, evaluate};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;
