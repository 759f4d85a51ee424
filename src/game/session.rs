//! Game session state machine
//!
//! A session owns one secret word and the ordered guesses made against it.
//! It starts `InProgress`, becomes `Won` the moment a guess matches the
//! secret, and becomes `Lost` when the last allowed guess misses. Terminal
//! sessions reject further guesses but stay readable.

use super::hints::KeyboardHints;
use crate::core::{Feedback, Word};
use crate::wordbank::{EmptyPoolError, WordBank};
use std::fmt;

/// Maximum number of guesses per session
pub const MAX_ATTEMPTS: usize = 6;

/// Session lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A submitted guess together with its per-letter feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Errors from driving a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess is not a dictionary word; the session is unchanged
    InvalidWord(String),
    /// The session already ended; no more guesses are accepted
    SessionClosed,
    /// The session has not ended yet; results cannot be rendered
    SessionNotFinished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(word) => write!(f, "'{word}' is not in the word list"),
            Self::SessionClosed => write!(f, "The game is over, no more guesses allowed"),
            Self::SessionNotFinished => write!(f, "The game is still in progress"),
        }
    }
}

impl std::error::Error for GameError {}

/// One game of Wordle against a fixed secret
///
/// The word bank is injected at creation and only consulted for guess
/// validation; sessions never mutate it.
pub struct GameSession<'a> {
    bank: &'a WordBank,
    secret: Word,
    history: Vec<Guess>,
    hints: KeyboardHints,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Create a session with an explicit secret
    ///
    /// Useful for tests and for replaying a recorded game; normal play goes
    /// through [`GameSession::start`] or [`GameSession::daily`].
    #[must_use]
    pub fn new(bank: &'a WordBank, secret: Word) -> Self {
        Self {
            bank,
            secret,
            history: Vec::new(),
            hints: KeyboardHints::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a session with a randomly picked secret
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the bank's answer pool is empty.
    pub fn start(bank: &'a WordBank, seed: Option<u64>) -> Result<Self, EmptyPoolError> {
        let secret = bank.pick_secret(seed)?;
        log::debug!("new session, secret picked from pool of {}", bank.answer_count());
        Ok(Self::new(bank, secret))
    }

    /// Start a session for a daily puzzle number
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the bank's answer pool is empty.
    pub fn daily(bank: &'a WordBank, puzzle: u32) -> Result<Self, EmptyPoolError> {
        let secret = bank.daily_secret(puzzle)?;
        log::debug!("new daily session for puzzle {puzzle}");
        Ok(Self::new(bank, secret))
    }

    /// Submit one guess
    ///
    /// On success the scored guess is appended to the history, folded into
    /// the keyboard hints, and the status transition applied, all as one
    /// step. On error nothing changes.
    ///
    /// # Errors
    ///
    /// - `GameError::SessionClosed` if the session already ended
    /// - `GameError::InvalidWord` if the input fails dictionary validation
    pub fn submit_guess(&mut self, input: &str) -> Result<&Guess, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::SessionClosed);
        }

        if !self.bank.is_valid_guess(input) {
            return Err(GameError::InvalidWord(input.trim().to_lowercase()));
        }

        // Validation above guarantees this parses
        let word = Word::new(input.trim())
            .map_err(|_| GameError::InvalidWord(input.trim().to_lowercase()))?;

        let feedback = Feedback::score(&word, &self.secret);
        log::debug!("guess {} scored {feedback}", word.text());

        self.hints.absorb(&word, &feedback);
        self.history.push(Guess { word, feedback });

        if feedback.is_win() {
            self.status = GameStatus::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        Ok(self.history.last().expect("guess just pushed"))
    }

    /// Current lifecycle status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the session reached a terminal status
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Guesses still available
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// Guesses made so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    /// Best-known status per letter across the session
    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// The secret word
    ///
    /// Only for loss display and tests; don't show it mid-game.
    #[must_use]
    pub fn reveal_secret(&self) -> &Word {
        &self.secret
    }
}
