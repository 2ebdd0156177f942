//! Wordle Game
//!
//! A terminal Wordle: guess the hidden 5-letter word in 6 tries, with feedback
//! revealed one letter at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{GameConfig, Key, Session, Status};
//! use wordle_game::wordlists::{FirstWord, WORDS, loader::words_from_slice};
//! use std::time::Duration;
//!
//! let config = GameConfig::new().with_reveal_delay(Duration::ZERO);
//! let mut session = Session::new(config, words_from_slice(WORDS), FirstWord).unwrap();
//!
//! for c in "apple".chars() {
//!     session.handle_key(Key::Letter(c));
//! }
//! session.handle_key(Key::Enter);
//!
//! assert_eq!(session.finish_reveal(|_| {}), Status::Won);
//! ```

// Core domain types
pub mod core;

// Game session and turn controller
pub mod game;

// Word list and target selection
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
