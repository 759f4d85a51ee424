//! Shareable result grid
//!
//! Renders a finished session as the familiar spoiler-free block of colored
//! squares, headed by `Wordle {puzzle} {attempts}/6`.

use crate::core::{Feedback, LetterStatus};
use crate::game::{GameError, GameSession, GameStatus, MAX_ATTEMPTS};

/// Emoji square for one letter status
#[must_use]
pub const fn glyph(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::Present => '🟨',
        LetterStatus::Absent => '⬛',
    }
}

/// One emoji row for a scored guess
#[must_use]
pub fn emoji_row(feedback: &Feedback) -> String {
    feedback.iter().map(glyph).collect()
}

/// Render a finished session as shareable text
///
/// One emoji row per guess under a summary header; the attempt count is
/// replaced by `X` on a loss. The puzzle number is included for daily
/// games and omitted for random ones.
///
/// # Errors
///
/// Returns `GameError::SessionNotFinished` if the session is still in
/// progress.
pub fn render(session: &GameSession, puzzle: Option<u32>) -> Result<String, GameError> {
    let trials = match session.status() {
        GameStatus::InProgress => return Err(GameError::SessionNotFinished),
        GameStatus::Won => session.history().len().to_string(),
        GameStatus::Lost => "X".to_string(),
    };

    let header = match puzzle {
        Some(number) => format!("Wordle {number} {trials}/{MAX_ATTEMPTS}"),
        None => format!("Wordle {trials}/{MAX_ATTEMPTS}"),
    };

    let mut lines = vec![header, String::new()];
    lines.extend(session.history().iter().map(|g| emoji_row(g.feedback())));

    Ok(lines.join("\n"))
}
