// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod render;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use config::GameConfig;
pub use error::{GuessError, WordSourceError};
pub use feedback::{Feedback, compute_feedback};
pub use game_state::{
    GameInterface, GameState, GuessOutcome, SessionResult, Status, UserAction, evaluate_guess,
    game_loop,
};
pub use wordbank::{
    WordListSource, filter_words, load_candidate_list, load_wordbank_from_file,
    load_wordbank_from_str, pick_secret,
};
