use crate::config::GameConfig;
use crate::error::GuessError;
use crate::feedback::{Feedback, classify, feedback_pattern};
use crate::{debug_log, info_log};

/// Derived phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// One game session: the secret word and what is left of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    secret: String,
    remaining_attempts: u32,
    won: bool,
}

/// Result of submitting a guess. Every ordinary gameplay result is a value
/// here; none of them is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong length or missing input; no attempt consumed.
    Invalid { word_length: usize },
    Won { attempts_used: u32 },
    Miss {
        guess: String,
        feedback: Vec<Feedback>,
        remaining_attempts: u32,
    },
    /// The session had already finished; nothing changed.
    GameOver,
}

impl GameState {
    /// Start a session. The secret must have exactly `config.word_length`
    /// characters; it is stored lowercased.
    pub fn new(secret: impl Into<String>, config: GameConfig) -> Result<Self, GuessError> {
        let secret = secret.into().to_lowercase();
        let actual = secret.chars().count();
        if actual != config.word_length {
            return Err(GuessError::SecretLength {
                expected: config.word_length,
                actual,
            });
        }
        Ok(Self {
            config,
            secret,
            remaining_attempts: config.max_attempts,
            won: false,
        })
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        if self.won {
            Status::Won
        } else if self.remaining_attempts == 0 {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    pub fn attempts_used(&self) -> u32 {
        self.config.max_attempts - self.remaining_attempts
    }

    /// Length is checked on the lowercased form, which is what gets scored.
    pub fn is_valid_guess(&self, guess: &str) -> bool {
        guess.to_lowercase().chars().count() == self.config.word_length
    }

    /// Evaluate one guess and return the next state alongside the outcome.
    ///
    /// The receiver is consumed so every state change is visible at the call
    /// site. Invalid guesses and guesses after the game ended return the
    /// state untouched.
    pub fn apply_guess(self, guess: Option<&str>) -> (Self, GuessOutcome) {
        let guess = match guess {
            Some(g) if self.is_valid_guess(g) => g.to_lowercase(),
            _ => {
                debug_log!("Rejected guess {:?}", guess);
                let word_length = self.config.word_length;
                return (self, GuessOutcome::Invalid { word_length });
            }
        };

        if self.status() != Status::InProgress {
            return (self, GuessOutcome::GameOver);
        }

        let mut next = self;

        if guess == next.secret {
            next.remaining_attempts -= 1;
            next.won = true;
            let attempts_used = next.attempts_used();
            info_log!("Secret guessed after {} attempts", attempts_used);
            return (next, GuessOutcome::Won { attempts_used });
        }

        // Both words have `word_length` characters here.
        let secret_chars: Vec<char> = next.secret.chars().collect();
        let guess_chars: Vec<char> = guess.chars().collect();
        let feedback = classify(&secret_chars, &guess_chars);

        next.remaining_attempts -= 1;
        info_log!(
            "Guess evaluated as {}, {} attempts remaining",
            feedback_pattern(&feedback),
            next.remaining_attempts
        );
        let remaining_attempts = next.remaining_attempts;
        (
            next,
            GuessOutcome::Miss {
                guess,
                feedback,
                remaining_attempts,
            },
        )
    }
}

/// Free-function form of [`GameState::apply_guess`].
pub fn evaluate_guess(state: GameState, guess: Option<&str>) -> (GameState, GuessOutcome) {
    state.apply_guess(guess)
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    Won,
    Lost,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
}

/// Front-end abstraction so the same loop drives the line-based CLI and the TUI.
pub trait GameInterface {
    fn display_introduction(&mut self, config: &GameConfig);
    /// `None` means the input was rejected locally and should be asked again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_invalid_guess(&mut self, word_length: usize);
    fn display_outcome(&mut self, outcome: &GuessOutcome);
    fn display_secret(&mut self, secret: &str);
    fn display_exit_message(&mut self);
}

pub fn game_loop<I: GameInterface + ?Sized>(
    mut state: GameState,
    interface: &mut I,
) -> SessionResult {
    interface.display_introduction(state.config());

    loop {
        match state.status() {
            Status::Won => return SessionResult::Won,
            Status::Lost => {
                info_log!("Out of attempts");
                interface.display_secret(state.secret());
                return SessionResult::Lost;
            }
            Status::InProgress => {}
        }

        let guess = match interface.read_guess() {
            Some(UserAction::Guess(g)) => g,
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                return SessionResult::Quit;
            }
            None => continue,
        };

        if !state.is_valid_guess(&guess) {
            interface.display_invalid_guess(state.config().word_length);
            continue;
        }

        let (next, outcome) = state.apply_guess(Some(&guess));
        state = next;
        interface.display_outcome(&outcome);
    }
}
