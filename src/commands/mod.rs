//! Command implementations

pub mod simple;

pub use simple::{LineInput, parse_line, run_simple};
