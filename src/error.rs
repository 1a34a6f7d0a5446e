use std::path::PathBuf;
use thiserror::Error;

/// Failures while preparing the candidate word list. All of them are fatal at
/// startup since a game cannot begin without a secret word.
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("Error while reading word list from '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list contains no usable words")]
    EmptyCandidates,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("Guess has {actual} letters but the secret word has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Secret word has {actual} letters but the game expects {expected}")]
    SecretLength { expected: usize, actual: usize },
}
