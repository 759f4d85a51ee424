//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear semantics.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{Word, WordError};
