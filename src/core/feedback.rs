//! Per-letter guess feedback
//!
//! Each letter of a submitted guess is rated against the target:
//! - Correct = right letter, right position
//! - Present = letter occurs somewhere in the target
//! - Absent = letter not in the target
//!
//! Duplicate letters are not consumed: every guess letter found anywhere in the
//! target is rated Present, even if the target holds fewer copies.

use super::{WORD_LENGTH, Word};

/// Feedback color for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    /// Not yet revealed
    #[default]
    Unset,
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Emoji square for this feedback
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unset => '⬜',
        }
    }

    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Result of evaluating one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub colors: [Feedback; WORD_LENGTH],
    /// True only when the guess equals the target letter-for-letter
    pub full_match: bool,
}

impl Evaluation {
    /// Convert the colors to an emoji string like "🟨🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.colors.iter().map(|c| c.to_emoji()).collect()
    }
}

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. Exact match: all correct
/// 2. Otherwise per position: correct if letters match, present if the target
///    contains the letter anywhere, absent otherwise
///
/// # Examples
/// ```
/// use wordle_game::core::{Feedback, Word, evaluate};
///
/// let guess = Word::new("paste").unwrap();
/// let target = Word::new("apple").unwrap();
/// let eval = evaluate(&guess, &target);
///
/// assert!(!eval.full_match);
/// assert_eq!(eval.colors[4], Feedback::Correct);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Evaluation {
    if guess == target {
        return Evaluation {
            colors: [Feedback::Correct; WORD_LENGTH],
            full_match: true,
        };
    }

    let mut colors = [Feedback::Absent; WORD_LENGTH];
    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        colors[i] = if g == t {
            Feedback::Correct
        } else if target.has_letter(g) {
            Feedback::Present
        } else {
            Feedback::Absent
        };
    }

    Evaluation {
        colors,
        full_match: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Correct, Present};

    fn eval(guess: &str, target: &str) -> Evaluation {
        evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn exact_match_is_all_correct() {
        let result = eval("react", "react");
        assert!(result.full_match);
        assert_eq!(result.colors, [Correct; 5]);
    }

    #[test]
    fn exact_match_for_every_word() {
        for word in ["apple", "beast", "faint", "tower", "zzzzz"] {
            let result = eval(word, word);
            assert!(result.full_match, "{word} should fully match itself");
        }
    }

    #[test]
    fn no_shared_letters_is_all_absent() {
        let result = eval("bound", "react");
        assert!(!result.full_match);
        assert_eq!(result.colors, [Absent; 5]);
    }

    #[test]
    fn misplaced_letter_is_present() {
        // T is in REACT at position 4, guessed at position 0
        let result = eval("tbbbb", "react");
        assert_eq!(result.colors[0], Present);
    }

    #[test]
    fn paste_against_apple() {
        let result = eval("paste", "apple");
        assert_eq!(result.colors, [Present, Present, Absent, Absent, Correct]);
        assert!(!result.full_match);
    }

    #[test]
    fn duplicate_letters_are_not_consumed() {
        // APPLE has a single A, yet every guessed A off-position is present
        let result = eval("aaaxa", "apple");
        assert_eq!(result.colors, [Correct, Present, Present, Absent, Present]);
    }

    #[test]
    fn partial_match_is_not_full_match() {
        // Only identical words reach full_match
        let result = eval("feast", "beast");
        assert_eq!(result.colors, [Absent, Correct, Correct, Correct, Correct]);
        assert!(!result.full_match);
    }

    #[test]
    fn emoji_rendering() {
        let result = eval("paste", "apple");
        assert_eq!(result.to_emoji(), "🟨🟨⬛⬛🟩");
        assert_eq!(Feedback::Unset.to_emoji(), '⬜');
    }

    #[test]
    fn unset_is_not_revealed() {
        assert!(!Feedback::Unset.is_revealed());
        assert!(Feedback::Absent.is_revealed());
        assert_eq!(Feedback::default(), Feedback::Unset);
    }
}
