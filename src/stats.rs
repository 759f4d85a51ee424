//! Player statistics persistence
//!
//! Tracks games played, the win distribution by guess count, and streaks,
//! plus the last finished game so a daily puzzle is not replayable after a
//! relaunch. Stored as JSON in the platform data directory; a missing or
//! unreadable file just starts a fresh record.

use crate::game::{GameError, GameSession, GameStatus, MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A finished game, as recorded for the next launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedGame {
    /// Daily puzzle number, `None` for random games
    pub puzzle: Option<u32>,
    /// Guess words in play order
    pub guesses: Vec<String>,
    pub won: bool,
}

/// Lifetime player statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub played: u32,
    /// Wins indexed by guesses used (index 0 = won in one)
    pub wins: [u32; MAX_ATTEMPTS],
    pub current_streak: u32,
    pub max_streak: u32,
    pub last_game: Option<FinishedGame>,
}

impl GameStats {
    /// Fold a finished session into the record
    ///
    /// A win extends the streak, a loss resets it; the session's guesses
    /// are kept as the last game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::SessionNotFinished` if the session is still in
    /// progress; the record is unchanged.
    pub fn record(
        &mut self,
        session: &GameSession,
        puzzle: Option<u32>,
    ) -> Result<(), GameError> {
        let won = match session.status() {
            GameStatus::InProgress => return Err(GameError::SessionNotFinished),
            GameStatus::Won => true,
            GameStatus::Lost => false,
        };

        self.played += 1;
        if won {
            self.wins[session.history().len() - 1] += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }

        self.last_game = Some(FinishedGame {
            puzzle,
            guesses: session
                .history()
                .iter()
                .map(|g| g.word().text().to_string())
                .collect(),
            won,
        });

        Ok(())
    }

    /// Total games won
    #[must_use]
    pub fn games_won(&self) -> u32 {
        self.wins.iter().sum()
    }

    /// Win percentage over all recorded games, 0 when none played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.games_won()) / f64::from(self.played) * 100.0
        }
    }

    /// The recorded finished game for `puzzle`, if it is the last one played
    #[must_use]
    pub fn finished_daily(&self, puzzle: u32) -> Option<&FinishedGame> {
        self.last_game
            .as_ref()
            .filter(|game| game.puzzle == Some(puzzle))
    }

    /// Default statistics file location, `None` when the platform has no
    /// data directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("wordle-tui").join("stats.json"))
    }

    /// Load statistics from `path`
    ///
    /// A missing or corrupt file yields a fresh record; corruption is
    /// logged, not fatal.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("ignoring corrupt stats file {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save statistics to `path`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}
