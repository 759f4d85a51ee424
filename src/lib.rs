//! Terminal Wordle
//!
//! A terminal rendition of the daily word-guessing game: six tries to find
//! a secret five-letter word, with per-letter feedback, keyboard hints, a
//! shareable result grid, and persistent statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::game::{GameSession, GameStatus};
//! use wordle_tui::wordbank::WordBank;
//!
//! let bank = WordBank::embedded();
//! let mut session = GameSession::start(&bank, Some(42)).unwrap();
//!
//! let guess = session.submit_guess("crane").unwrap();
//! println!("{}", guess.feedback());
//! assert!(session.status() == GameStatus::InProgress || session.status() == GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists and secret selection
pub mod wordbank;

// Shareable result grid
pub mod share;

// Daily puzzle calendar
pub mod daily;

// Statistics persistence
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
