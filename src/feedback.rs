//! Per-letter feedback for a guess against the secret word.
//!
//! Feedback is computed in two passes. Exact matches are found first and
//! consume their occurrence of the letter in the secret word. The remaining
//! positions are then checked for misplaced letters.
//!
//! A misplaced letter is only reported when the number of unconsumed
//! occurrences left in the secret equals the number of times the letter
//! appears in the whole guess. Guesses that repeat a letter more often than
//! the secret can still use it leave those positions `Absent`, which is
//! stricter than the usual "mark up to the remaining count" rule.

use crate::error::GuessError;
use std::collections::HashMap;

/// Classification of a single guess position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Same letter at the same position (green)
    Exact,
    /// Letter occurs elsewhere in the secret word (yellow)
    Present,
    /// No unused occurrence left in the secret word
    Absent,
}

impl Feedback {
    pub fn to_char(self) -> char {
        match self {
            Feedback::Exact => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => 'X',
        }
    }
}

fn letter_counts(letters: &[char]) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for &c in letters {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Compare `guess` with `secret` position by position.
///
/// Both words are compared as given; callers lowercase them beforehand.
/// Returns an error instead of panicking when the lengths differ.
pub fn compute_feedback(secret: &str, guess: &str) -> Result<Vec<Feedback>, GuessError> {
    let secret_chars: Vec<char> = secret.chars().collect();
    let guess_chars: Vec<char> = guess.chars().collect();

    if secret_chars.len() != guess_chars.len() {
        return Err(GuessError::LengthMismatch {
            expected: secret_chars.len(),
            actual: guess_chars.len(),
        });
    }

    Ok(classify(&secret_chars, &guess_chars))
}

/// Two-pass classification over words already known to have equal length.
pub(crate) fn classify(secret: &[char], guess: &[char]) -> Vec<Feedback> {
    let mut remaining = letter_counts(secret);
    let guess_counts = letter_counts(guess);
    let mut feedback = vec![Feedback::Absent; guess.len()];

    // First pass: exact matches
    for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            feedback[i] = Feedback::Exact;
            if let Some(count) = remaining.get_mut(g) {
                *count -= 1;
            }
        }
    }

    // Second pass: misplaced letters
    for (i, g) in guess.iter().enumerate() {
        if feedback[i] == Feedback::Exact {
            continue;
        }
        let Some(count) = remaining.get_mut(g) else {
            continue;
        };
        if *count > 0 && guess_counts.get(g) == Some(count) {
            feedback[i] = Feedback::Present;
            *count -= 1;
        }
    }

    feedback
}

/// Render a feedback sequence as a `G`/`Y`/`X` pattern string.
pub fn feedback_pattern(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.to_char()).collect()
}
