//! Display functions for the plain terminal mode

use crate::core::{Feedback, LetterStatus, Word};
use crate::game::{GameSession, GameStatus, KeyboardHints};
use crate::stats::GameStats;
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

fn paint(cell: String, status: LetterStatus) -> ColoredString {
    match status {
        LetterStatus::Correct => cell.black().on_green().bold(),
        LetterStatus::Present => cell.black().on_yellow().bold(),
        LetterStatus::Absent => cell.white().on_bright_black(),
    }
}

/// One colored row for a scored guess
#[must_use]
pub fn feedback_row(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.iter())
        .map(|(&b, status)| {
            let cell = format!(" {} ", (b as char).to_ascii_uppercase());
            paint(cell, status).to_string()
        })
        .collect()
}

/// The keyboard with each letter colored by its best-known status
#[must_use]
pub fn keyboard_rows(hints: &KeyboardHints) -> [String; 3] {
    KEYBOARD_ROWS.map(|row| {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| {
                let key = letter.to_ascii_uppercase().to_string();
                match hints.status_of(letter) {
                    Some(status) => paint(key, status).to_string(),
                    None => key,
                }
            })
            .collect();
        keys.join(" ")
    })
}

/// Print the end-of-game banner and the shareable grid
pub fn print_outcome(session: &GameSession, share_text: &str) {
    println!();
    match session.status() {
        GameStatus::Won => {
            let turns = session.history().len();
            println!(
                "{}",
                format!("You won in {turns}/6!").green().bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} The word was: {}",
                "You lost!".red().bold(),
                session.reveal_secret().text().to_uppercase().bright_yellow()
            );
        }
        GameStatus::InProgress => return,
    }

    println!("\n{share_text}\n");
}

/// Print the lifetime statistics block
pub fn print_stats(stats: &GameStats) {
    println!("{}", "─".repeat(40).cyan());
    println!(
        "Played: {}   Win %: {:.1}   Streak: {} (max {})",
        stats.played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );

    let top = stats.wins.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.wins.iter().enumerate() {
        let width = (count * 20 / top) as usize;
        println!("{} {} {count}", i + 1, "█".repeat(width));
    }
    println!("{}", "─".repeat(40).cyan());
}
