//! TUI application state and logic

use crate::daily;
use crate::game::{GameError, GameSession, GameStatus};
use crate::share;
use crate::stats::GameStats;
use crate::wordbank::{EmptyPoolError, WordBank};
use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub puzzle: Option<u32>,
    pub stats: GameStats,
    pub input: String,
    pub messages: Vec<Message>,
    pub share_text: Option<String>,
    pub should_quit: bool,
    bank: &'a WordBank,
    stats_path: Option<PathBuf>,
    finished_recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and its first session
    ///
    /// A daily puzzle that was already finished today is restored from the
    /// statistics record instead of being replayable.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPoolError` if the bank cannot supply a secret.
    pub fn new(
        bank: &'a WordBank,
        puzzle: Option<u32>,
        seed: Option<u64>,
        stats: GameStats,
        stats_path: Option<PathBuf>,
    ) -> Result<Self, EmptyPoolError> {
        let session = match puzzle {
            Some(number) => GameSession::daily(bank, number)?,
            None => GameSession::start(bank, seed)?,
        };

        let mut app = Self {
            session,
            puzzle,
            stats,
            input: String::new(),
            messages: Vec::new(),
            share_text: None,
            should_quit: false,
            bank,
            stats_path,
            finished_recorded: false,
        };

        match puzzle {
            Some(number) => app.add_message(
                &format!("Wordle {number} - type a 5-letter word and press Enter."),
                MessageStyle::Info,
            ),
            None => app.add_message(
                "Guess the 5-letter word. Type and press Enter.",
                MessageStyle::Info,
            ),
        }

        app.restore_finished_daily();
        Ok(app)
    }

    /// Replay today's finished puzzle from the statistics record
    fn restore_finished_daily(&mut self) {
        let Some(number) = self.puzzle else { return };
        let Some(finished) = self.stats.finished_daily(number).cloned() else {
            return;
        };

        for word in &finished.guesses {
            if let Err(e) = self.session.submit_guess(word) {
                // Word list changed since the game was recorded
                log::warn!("could not replay recorded guess '{word}': {e}");
                break;
            }
        }

        if self.session.is_over() {
            self.finished_recorded = true;
            self.add_message(
                "You already played today's puzzle.",
                MessageStyle::Info,
            );
            self.announce_outcome();
        }
    }

    /// Whether the current board is read-only
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn push_letter(&mut self, letter: char) {
        if self.input.len() < 5 && letter.is_ascii_alphabetic() {
            self.input.push(letter.to_ascii_lowercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the typed word as a guess
    pub fn submit_input(&mut self) {
        if self.input.len() < 5 {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let word = self.input.clone();
        match self.session.submit_guess(&word) {
            Ok(_) => {
                self.input.clear();
                if self.session.is_over() {
                    self.finish_game();
                }
            }
            Err(GameError::InvalidWord(_)) => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Record the finished session and surface the outcome
    fn finish_game(&mut self) {
        if !self.finished_recorded && self.stats.record(&self.session, self.puzzle).is_ok() {
            self.finished_recorded = true;
            if let Some(path) = &self.stats_path
                && let Err(e) = self.stats.save(path)
            {
                log::warn!("could not save stats to {}: {e}", path.display());
                self.add_message("Could not save statistics", MessageStyle::Error);
            }
        }

        self.announce_outcome();
    }

    fn announce_outcome(&mut self) {
        match self.session.status() {
            GameStatus::Won => {
                let celebration = match self.session.history().len() {
                    1 => "Genius! Got it in one!",
                    2 => "Magnificent! Two guesses!",
                    3 => "Impressive! Three guesses!",
                    4 => "Splendid! Four guesses!",
                    5 => "Great! Five guesses!",
                    _ => "Phew! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::Lost => {
                let reveal = format!(
                    "Out of guesses! The word was {}",
                    self.session.reveal_secret().text().to_uppercase()
                );
                self.add_message(&reveal, MessageStyle::Error);
            }
            GameStatus::InProgress => return,
        }

        match share::render(&self.session, self.puzzle) {
            Ok(text) => self.share_text = Some(text),
            Err(e) => log::warn!("could not render share grid: {e}"),
        }

        if self.puzzle.is_some() {
            if let Some(eta) = daily::next_puzzle_eta(Local::now().naive_local()) {
                self.add_message(&format!("Next puzzle in {eta}"), MessageStyle::Info);
            }
        } else {
            self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
        }
    }

    /// Start a fresh random game
    pub fn new_game(&mut self) {
        if self.puzzle.is_some() {
            self.add_message("One daily puzzle per day - come back tomorrow!", MessageStyle::Info);
            return;
        }

        match GameSession::start(self.bank, None) {
            Ok(session) => {
                self.session = session;
                self.input.clear();
                self.messages.clear();
                self.share_text = None;
                self.finished_recorded = false;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the latest messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ if app.game_over() => match key.code {
                    KeyCode::Char('q' | 'Q') => app.should_quit = true,
                    KeyCode::Char('n' | 'N') => app.new_game(),
                    _ => {}
                },
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    app.push_letter(c);
                }
                KeyCode::Backspace => {
                    app.backspace();
                }
                KeyCode::Enter => {
                    app.submit_input();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::loader::words_from_slice;

    fn bank() -> WordBank {
        WordBank::new(
            words_from_slice(&["crane", "slate", "allow"]),
            words_from_slice(&["llama"]),
        )
    }

    fn app<'a>(bank: &'a WordBank, puzzle: Option<u32>) -> App<'a> {
        App::new(bank, puzzle, Some(1), GameStats::default(), None).unwrap()
    }

    #[test]
    fn typing_fills_the_input_up_to_five_letters() {
        let bank = bank();
        let mut app = app(&bank, None);

        for c in "cranes".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input, "crane");

        app.backspace();
        assert_eq!(app.input, "cran");
    }

    #[test]
    fn non_letters_are_ignored() {
        let bank = bank();
        let mut app = app(&bank, None);

        app.push_letter('3');
        app.push_letter('!');
        assert!(app.input.is_empty());
    }

    #[test]
    fn short_input_warns_instead_of_submitting() {
        let bank = bank();
        let mut app = app(&bank, None);

        app.push_letter('c');
        app.submit_input();
        assert!(app.session.history().is_empty());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("Not enough letters"))
        );
    }

    #[test]
    fn unknown_word_keeps_the_input_for_editing() {
        let bank = bank();
        let mut app = app(&bank, Some(0));

        for c in "zzzzz".chars() {
            app.push_letter(c);
        }
        app.submit_input();

        assert_eq!(app.input, "zzzzz");
        assert!(app.session.history().is_empty());
        assert!(app.messages.iter().any(|m| m.text.contains("Not in word list")));
    }

    #[test]
    fn winning_records_stats_and_builds_share_text() {
        let bank = bank();
        // Puzzle 0 -> secret "crane"
        let mut app = app(&bank, Some(0));

        for c in "crane".chars() {
            app.push_letter(c);
        }
        app.submit_input();

        assert!(app.game_over());
        assert_eq!(app.stats.played, 1);
        assert_eq!(app.stats.wins[0], 1);
        assert!(app.share_text.as_ref().unwrap().starts_with("Wordle 0 1/6"));
    }

    #[test]
    fn finished_daily_restores_read_only() {
        let bank = bank();
        let mut stats = GameStats::default();
        {
            let mut session = GameSession::daily(&bank, 0).unwrap();
            session.submit_guess("slate").unwrap();
            session.submit_guess("crane").unwrap();
            stats.record(&session, Some(0)).unwrap();
        }

        let app = App::new(&bank, Some(0), None, stats, None).unwrap();
        assert!(app.game_over());
        assert_eq!(app.session.history().len(), 2);
        // The restored game is not recorded twice
        assert_eq!(app.stats.played, 1);
    }

    #[test]
    fn new_game_resets_random_mode_only() {
        let bank = bank();
        let mut app = app(&bank, None);

        let first_secret = app.session.reveal_secret().clone();
        app.new_game();
        assert!(app.session.history().is_empty());
        assert!(!app.game_over());
        // Secret may repeat with a 3-word pool; the session itself is fresh
        let _ = first_secret;

        let mut daily_app = app_with_daily(&bank);
        let before = daily_app.session.history().len();
        daily_app.new_game();
        assert_eq!(daily_app.session.history().len(), before);
    }

    fn app_with_daily(bank: &WordBank) -> App<'_> {
        App::new(bank, Some(0), None, GameStats::default(), None).unwrap()
    }
}
