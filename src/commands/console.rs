//! Plain interactive terminal mode
//!
//! Text-based game without the TUI. The loop reads from any `BufRead`, so
//! tests can script a whole game through a `Cursor`.

use crate::daily;
use crate::game::{GameError, GameSession, MAX_ATTEMPTS};
use crate::output::display;
use crate::share;
use crate::stats::{FinishedGame, GameStats};
use crate::wordbank::WordBank;
use chrono::Local;
use std::io::BufRead;

/// Run one game in the plain terminal mode
///
/// `puzzle` selects the daily secret, otherwise `seed` (or the system RNG)
/// picks a random one. The finished game is folded into `stats`; saving is
/// the caller's job.
///
/// # Errors
///
/// Returns a message if the word bank cannot supply a secret or reading
/// input fails.
pub fn run_console<R: BufRead>(
    bank: &WordBank,
    puzzle: Option<u32>,
    seed: Option<u64>,
    stats: &mut GameStats,
    mut reader: R,
) -> Result<(), String> {
    if let Some(number) = puzzle
        && let Some(finished) = stats.finished_daily(number).cloned()
    {
        println!("You already played puzzle {number} today.");
        return replay_finished(bank, number, &finished);
    }

    let mut session = match puzzle {
        Some(number) => GameSession::daily(bank, number),
        None => GameSession::start(bank, seed),
    }
    .map_err(|e| e.to_string())?;

    match puzzle {
        Some(number) => println!("\nWordle {number} - guess the 5-letter word.\n"),
        None => println!("\nGuess the 5-letter word.\n"),
    }

    while !session.is_over() {
        let turn = MAX_ATTEMPTS - session.attempts_remaining() + 1;
        println!("Guess {turn}/{MAX_ATTEMPTS}:");

        let mut input = String::new();
        let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;
        if bytes == 0 {
            println!("Bye.");
            return Ok(());
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("Bye.");
            return Ok(());
        }

        match session.submit_guess(input) {
            Ok(guess) => {
                println!("{}", display::feedback_row(guess.word(), guess.feedback()));
                for row in display::keyboard_rows(session.hints()) {
                    println!("  {row}");
                }
                println!();
            }
            Err(GameError::InvalidWord(word)) => {
                println!("'{word}' is not in the word list, try again.");
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    let share_text = share::render(&session, puzzle).map_err(|e| e.to_string())?;
    display::print_outcome(&session, &share_text);

    stats.record(&session, puzzle).map_err(|e| e.to_string())?;
    display::print_stats(stats);

    if puzzle.is_some()
        && let Some(eta) = daily::next_puzzle_eta(Local::now().naive_local())
    {
        println!("Next puzzle in {eta}");
    }

    Ok(())
}

/// Re-print a finished daily game from the statistics record
fn replay_finished(bank: &WordBank, puzzle: u32, finished: &FinishedGame) -> Result<(), String> {
    let mut session = GameSession::daily(bank, puzzle).map_err(|e| e.to_string())?;
    for word in &finished.guesses {
        session.submit_guess(word).map_err(|e| e.to_string())?;
    }

    for guess in session.history() {
        println!("{}", display::feedback_row(guess.word(), guess.feedback()));
    }

    let share_text = share::render(&session, Some(puzzle)).map_err(|e| e.to_string())?;
    display::print_outcome(&session, &share_text);

    if let Some(eta) = daily::next_puzzle_eta(Local::now().naive_local()) {
        println!("Next puzzle in {eta}");
    }

    Ok(())
}
