//! Terminal output formatting
//!
//! Display utilities for the plain (non-TUI) game mode.

pub mod display;

pub use display::{feedback_row, keyboard_rows, print_outcome, print_stats};
