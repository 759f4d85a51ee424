//! Game session state machine and keyboard hints

mod hints;
mod session;

pub use hints::KeyboardHints;
pub use session::{GameError, GameSession, GameStatus, Guess, MAX_ATTEMPTS};
