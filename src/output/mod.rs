//! Terminal output formatting
//!
//! Display utilities for line mode.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_statistics};
