use crate::error::WordSourceError;
use crate::info_log;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/wordlist.txt");

/// Where the candidate words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    Embedded,
    File(PathBuf),
}

/// Trim every line, keep those with exactly `word_length` characters and
/// lowercase them. Order is preserved and duplicates are kept.
pub fn filter_words<I, S>(lines: I, word_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let word = line.as_ref().trim().to_lowercase();
            (word.chars().count() == word_length).then_some(word)
        })
        .collect()
}

pub fn load_wordbank_from_str(data: &str, word_length: usize) -> Vec<String> {
    filter_words(data.lines(), word_length)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    Ok(filter_words(lines, word_length))
}

/// Load the candidate list for a new game.
///
/// An unreadable file and a list with no usable words are both reported as
/// errors; the caller is expected to abort startup on either.
pub fn load_candidate_list(
    source: &WordListSource,
    word_length: usize,
) -> Result<Vec<String>, WordSourceError> {
    let words = match source {
        WordListSource::Embedded => load_wordbank_from_str(EMBEDDED_WORDLIST, word_length),
        WordListSource::File(path) => {
            load_wordbank_from_file(path, word_length).map_err(|source| WordSourceError::Read {
                path: path.clone(),
                source,
            })?
        }
    };
    info_log!("Loaded {} candidate words from {:?}", words.len(), source);

    if words.is_empty() {
        return Err(WordSourceError::EmptyCandidates);
    }
    Ok(words)
}

pub fn pick_secret<R: Rng + ?Sized>(
    candidates: &[String],
    rng: &mut R,
) -> Result<String, WordSourceError> {
    candidates
        .choose(rng)
        .cloned()
        .ok_or(WordSourceError::EmptyCandidates)
}
