//! TUI (Terminal User Interface) front-end.
//!
//! Renders the board with Ratatui and reads guesses key by key through
//! crossterm. Letters are typed into the current row, ENTER submits, ESC quits.
//! Wrong-length input is rejected here before it reaches the game loop.

use crate::config::GameConfig;
use crate::feedback::Feedback;
use crate::game_state::{GameInterface, GuessOutcome, UserAction};
use crate::render::{invalid_guess_message, secret_reveal_message};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Debug)]
enum TileState {
    Entered,
    Scored(Feedback),
}

impl TileState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Entered => (Color::DarkGray, Color::White),
            Self::Scored(Feedback::Exact) => (Color::Green, Color::Black),
            Self::Scored(Feedback::Present) => (Color::Yellow, Color::Black),
            Self::Scored(Feedback::Absent) => (Color::Gray, Color::White),
        }
    }
}

#[derive(Debug, Clone)]
struct GuessRow {
    letters: Vec<char>,
    states: Vec<TileState>,
}

impl GuessRow {
    fn scored(guess: &str, feedback: &[Feedback]) -> Self {
        Self {
            letters: guess.chars().collect(),
            states: feedback.iter().map(|&f| TileState::Scored(f)).collect(),
        }
    }

    fn entered(input: &str, width: usize) -> Self {
        let mut letters: Vec<char> = input.chars().collect();
        letters.resize(width, ' ');
        Self {
            letters,
            states: vec![TileState::Entered; width],
        }
    }
}

/// Full-screen game interface.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    config: GameConfig,
    guesses: Vec<GuessRow>,
    current_input: String,
    last_guess: Option<String>,
    finished: bool,
    message: String,
    error_message: String,
    status: String,
}

/// Append the lowercase form of `c` while there is room for it.
/// Letters whose lowercase form is more than one character are ignored.
fn push_letter(input: &mut String, c: char, word_length: usize) -> bool {
    let mut lower = c.to_lowercase();
    let (Some(letter), None) = (lower.next(), lower.next()) else {
        return false;
    };
    if input.chars().count() >= word_length {
        return false;
    }
    input.push(letter);
    true
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            config: GameConfig::default(),
            guesses: Vec::new(),
            current_input: String::new(),
            last_guess: None,
            finished: false,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Keep the final board on screen until a key is pressed.
    pub fn wait_for_key(&mut self) {
        self.finished = true;
        self.draw_or_log();
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return,
                Ok(_) => {}
                Err(e) => {
                    debug_log!("wait_for_key() - {}", e);
                    return;
                }
            }
        }
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let rows = self.board_rows();
        let view = BoardView {
            rows: &rows,
            max_attempts: self.config.max_attempts,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
            finished: self.finished,
        };
        self.terminal.draw(|f| render(f, &view))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn board_rows(&self) -> Vec<GuessRow> {
        let mut rows = self.guesses.clone();
        if !self.finished && rows.len() < self.config.max_attempts as usize {
            rows.push(GuessRow::entered(&self.current_input, self.config.word_length));
        }
        rows
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                return Some(UserAction::Exit);
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Char(c) if c.is_alphabetic() => {
                if push_letter(&mut self.current_input, c, self.config.word_length) {
                    self.error_message.clear();
                }
                None
            }
            KeyCode::Char(c) if !c.is_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            KeyCode::Backspace => {
                self.error_message.clear();
                self.current_input.pop();
                None
            }
            KeyCode::Enter if self.current_input.chars().count() == self.config.word_length => {
                let guess = std::mem::take(&mut self.current_input);
                self.last_guess = Some(guess.clone());
                Some(UserAction::Guess(guess))
            }
            KeyCode::Enter => {
                self.error_message = invalid_guess_message(self.config.word_length);
                None
            }
            _ => None,
        }
    }
}

struct BoardView<'a> {
    rows: &'a [GuessRow],
    max_attempts: u32,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
    finished: bool,
}

fn render(f: &mut Frame, view: &BoardView) {
    let board_height = u16::try_from(view.max_attempts)
        .unwrap_or(u16::MAX)
        .saturating_mul(ROW_SPACING)
        .saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(board_height), // Board
            Constraint::Min(4),               // Messages
            Constraint::Length(3),            // Status line
            Constraint::Length(3),            // Instructions
        ])
        .split(f.area());

    let title = Paragraph::new("WORDLE")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], view.rows);
    render_messages(f, chunks[2], view.message, view.error_message);

    let status_style = if view.finished {
        SUCCESS_STYLE
    } else {
        HEADER_STYLE
    };
    let status = Paragraph::new(view.status)
        .style(status_style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[3]);

    let instructions = if view.finished {
        "Press any key to exit"
    } else {
        "Type your guess | ENTER: Submit | BACKSPACE: Delete | ESC: Quit"
    };
    let instructions = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(instructions, chunks[4]);
}

#[allow(clippy::cast_possible_truncation)]
fn render_board(f: &mut Frame, area: Rect, rows: &[GuessRow]) {
    let block = Block::default().title("Guesses").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (index, row) in rows.iter().enumerate() {
        let y = inner.y + (index as u16 * ROW_SPACING);
        if y >= inner.y + inner.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for (letter, state) in row.letters.iter().zip(&row.states) {
            let (bg_color, fg_color) = state.colors();
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        f.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: 1,
            },
        );
    }
}

fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
    let mut lines = Vec::new();
    if !message.is_empty() {
        lines.push(Line::from(Span::styled(message, MESSAGE_STYLE)));
    }
    if !error_message.is_empty() {
        lines.push(Line::from(Span::styled(error_message, ERROR_STYLE)));
    }
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

impl GameInterface for TuiInterface {
    fn display_introduction(&mut self, config: &GameConfig) {
        self.config = *config;
        self.message = format!(
            "Guess the {}-letter word in {} attempts. Green: exact position. Yellow: wrong position.",
            config.word_length, config.max_attempts
        );
        self.status = format!("{} attempts remaining", config.max_attempts);
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                return Some(UserAction::Exit);
            }
            match event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS)) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(_) => return Some(UserAction::Exit),
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = self.handle_key(key) {
                        info_log!("read_guess() - Action received: {:?}", action);
                        return Some(action);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    debug_log!("read_guess() - Input error: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_invalid_guess(&mut self, word_length: usize) {
        self.error_message = invalid_guess_message(word_length);
        self.draw_or_log();
    }

    fn display_outcome(&mut self, outcome: &GuessOutcome) {
        self.error_message.clear();
        match outcome {
            GuessOutcome::Miss {
                guess,
                feedback,
                remaining_attempts,
            } => {
                self.guesses.push(GuessRow::scored(guess, feedback));
                self.status = format!("You have {remaining_attempts} tries left.");
            }
            GuessOutcome::Won { attempts_used } => {
                if let Some(guess) = self.last_guess.take() {
                    let feedback = vec![Feedback::Exact; guess.chars().count()];
                    self.guesses.push(GuessRow::scored(&guess, &feedback));
                }
                self.message = "Congratulations ! You guessed the word correctly !".to_string();
                self.status = format!("Solved in {attempts_used} attempts");
                self.finished = true;
            }
            GuessOutcome::Invalid { word_length } => {
                self.error_message = invalid_guess_message(*word_length);
            }
            GuessOutcome::GameOver => {
                self.status = "Game over".to_string();
            }
        }
        self.draw_or_log();
    }

    fn display_secret(&mut self, secret: &str) {
        self.finished = true;
        self.message = secret_reveal_message(secret);
        self.status = "Out of attempts".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
