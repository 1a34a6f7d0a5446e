use crate::config::GameConfig;
use crate::debug_log;
use crate::game_state::{GameInterface, GuessOutcome, UserAction};
use crate::render::{
    AnsiRenderer, FeedbackRenderer, PlainRenderer, introduction, invalid_guess_message,
    outcome_message, secret_reveal_message,
};
use crate::wordbank::WordListSource;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Guess the secret five-letter word in five attempts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (defaults to the bundled list)
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<PathBuf>,

    /// Seed for choosing the secret word
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Play in the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Mark letters with brackets instead of ANSI colors
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Cli {
    pub fn word_source(&self) -> WordListSource {
        match &self.wordlist_path {
            Some(path) => WordListSource::File(path.clone()),
            None => WordListSource::Embedded,
        }
    }

    pub fn renderer(&self) -> Box<dyn FeedbackRenderer> {
        if self.no_color {
            Box::new(PlainRenderer)
        } else {
            Box::new(AnsiRenderer)
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Read one line of input. End of input and read errors both end the session.
/// A line that is not valid UTF-8 yields `None` so the caller can ask again.
pub fn read_guess<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    print!("\nEnter your guess: ");
    let _ = io::stdout().flush();

    let mut bytes = Vec::new();
    match reader.read_until(b'\n', &mut bytes) {
        Ok(0) | Err(_) => Some(UserAction::Exit),
        Ok(_) => {
            let Ok(input) = String::from_utf8(bytes) else {
                debug_log!("Discarding guess that is not valid UTF-8");
                return None;
            };
            let input = input.trim();
            if input.eq_ignore_ascii_case("exit") {
                Some(UserAction::Exit)
            } else {
                Some(UserAction::Guess(input.to_string()))
            }
        }
    }
}

/// Line-based front-end over any `BufRead`, printing to stdout.
pub struct CliInterface<R: BufRead> {
    reader: R,
    renderer: Box<dyn FeedbackRenderer>,
    word_length: usize,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self::with_renderer(reader, Box::new(AnsiRenderer))
    }

    pub fn with_renderer(reader: R, renderer: Box<dyn FeedbackRenderer>) -> Self {
        Self {
            reader,
            renderer,
            word_length: GameConfig::default().word_length,
        }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_introduction(&mut self, config: &GameConfig) {
        self.word_length = config.word_length;
        println!("{}", introduction(config, self.renderer.as_ref()));
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        let action = read_guess(&mut self.reader);
        if action.is_none() {
            println!("{}", invalid_guess_message(self.word_length));
        }
        action
    }

    fn display_invalid_guess(&mut self, word_length: usize) {
        println!("{}", invalid_guess_message(word_length));
    }

    fn display_outcome(&mut self, outcome: &GuessOutcome) {
        println!("{}", outcome_message(outcome, self.renderer.as_ref()));
    }

    fn display_secret(&mut self, secret: &str) {
        println!("{}", secret_reveal_message(secret));
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
