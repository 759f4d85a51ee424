//! TUI rendering with ratatui
//!
//! Board, keyboard, and statistics panels for the game interface.

use super::app::{App, Message, MessageStyle};
use crate::core::LetterStatus;
use crate::game::MAX_ATTEMPTS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(13),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Messages and stats
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.puzzle {
        Some(number) => format!("WORDLE - Daily Puzzle {number}"),
        None => "WORDLE".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Board: 6 rows + borders
            Constraint::Length(5), // Keyboard: 3 rows + borders
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);
    let history = app.session.history();

    for row in 0..MAX_ATTEMPTS {
        let line = if let Some(guess) = history.get(row) {
            scored_row(guess)
        } else if row == history.len() && !app.game_over() {
            input_row(&app.input)
        } else {
            empty_row()
        };
        lines.push(line);
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn scored_row(guess: &crate::game::Guess) -> Line<'static> {
    let mut spans = Vec::with_capacity(9);
    for (i, status) in guess.feedback().iter().enumerate() {
        let letter = (guess.word().char_at(i) as char).to_ascii_uppercase();
        spans.push(Span::styled(format!(" {letter} "), status_style(status)));
        if i < 4 {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

fn input_row(input: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(9);
    for i in 0..5 {
        let cell = match input.as_bytes().get(i) {
            Some(&b) => Span::styled(
                format!(" {} ", (b as char).to_ascii_uppercase()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(cell);
        if i < 4 {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

fn empty_row() -> Line<'static> {
    let mut spans = Vec::with_capacity(9);
    for i in 0..5 {
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        if i < 4 {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = app.session.hints();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, letter) in row.chars().enumerate() {
                let key = letter.to_ascii_uppercase().to_string();
                let span = match hints.status_of(letter) {
                    Some(status) => Span::styled(key, status_style(status)),
                    None => Span::styled(key, Style::default().fg(Color::White)),
                };
                spans.push(span);
                if i < row.len() - 1 {
                    spans.push(Span::raw(" "));
                }
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Messages
            Constraint::Length(10), // Share grid
            Constraint::Min(8),     // Stats
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_share(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn message_style(message: &Message) -> Style {
    match message.style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageStyle::Error => Style::default().fg(Color::Red),
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|m| Line::from(Span::styled(m.text.clone(), message_style(m))))
        .collect();

    let messages = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Messages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(messages, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let content = app
        .share_text
        .as_deref()
        .unwrap_or("Finish the game to get a shareable grid.");

    let share = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(share, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!("Played:  {}", stats.played)),
        Line::from(format!("Win %:   {:.1}", stats.win_rate())),
        Line::from(format!(
            "Streak:  {} (max {})",
            stats.current_streak, stats.max_streak
        )),
        Line::from(""),
    ];

    let top = stats.wins.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.wins.iter().enumerate() {
        let width = (count * 12 / top) as usize;
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.game_over() {
        if app.puzzle.is_some() {
            "q/Esc: quit"
        } else {
            "n: new game  |  q/Esc: quit"
        }
    } else {
        "Type a word  |  Enter: submit  |  Backspace: delete  |  Esc: quit"
    };

    let attempts = format!(
        "Attempts: {}/{MAX_ATTEMPTS}",
        app.session.history().len()
    );

    let status = Paragraph::new(format!("{attempts}    {help}"))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
