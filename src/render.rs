use crate::config::GameConfig;
use crate::feedback::Feedback;
use crate::game_state::GuessOutcome;

const RESET: &str = "\u{1b}[0m";
const GREEN: &str = "\u{1b}[42m";
const YELLOW: &str = "\u{1b}[43m";

/// Turns a classified guess into display text.
pub trait FeedbackRenderer {
    fn render(&self, guess: &str, feedback: &[Feedback]) -> String;

    /// Sample tile used in the introduction legend.
    fn legend(&self, feedback: Feedback) -> String {
        self.render("X", &[feedback])
    }
}

/// Colored background tiles for terminals that understand ANSI escapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiRenderer;

impl FeedbackRenderer for AnsiRenderer {
    fn render(&self, guess: &str, feedback: &[Feedback]) -> String {
        guess
            .chars()
            .zip(feedback)
            .map(|(c, f)| match f {
                Feedback::Exact => format!("{GREEN} {c} {RESET}"),
                Feedback::Present => format!("{YELLOW} {c} {RESET}"),
                Feedback::Absent => format!(" {c} "),
            })
            .collect()
    }
}

/// Bracketed tiles for `--no-color`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRenderer;

impl FeedbackRenderer for PlainRenderer {
    fn render(&self, guess: &str, feedback: &[Feedback]) -> String {
        guess
            .chars()
            .zip(feedback)
            .map(|(c, f)| match f {
                Feedback::Exact => format!("[{c}]"),
                Feedback::Present => format!("({c})"),
                Feedback::Absent => format!(" {c} "),
            })
            .collect()
    }
}

pub fn introduction(config: &GameConfig, renderer: &dyn FeedbackRenderer) -> String {
    format!(
        "***********************************************\n\
         Try to guess the {}-letter word.\n\
         You have {} attempts.\n\
         After each guess, you'll get feedback:\n\
         - {} : Exact position.\n\
         - {} : Letter in the word but in the wrong position.\n\
         - No color : it's not in the word\n\
         Good luck\n\
         ***********************************************\n",
        config.word_length,
        config.max_attempts,
        renderer.legend(Feedback::Exact),
        renderer.legend(Feedback::Present),
    )
}

pub fn invalid_guess_message(word_length: usize) -> String {
    format!("Please enter a {word_length}-letter word.")
}

pub fn outcome_message(outcome: &GuessOutcome, renderer: &dyn FeedbackRenderer) -> String {
    match outcome {
        GuessOutcome::Invalid { word_length } => invalid_guess_message(*word_length),
        GuessOutcome::Won { .. } => "Congratulations ! You guessed the word correctly !".to_string(),
        GuessOutcome::Miss {
            guess,
            feedback,
            remaining_attempts,
        } => format!(
            "{}\n You have {} tries left.",
            renderer.render(guess, feedback),
            remaining_attempts
        ),
        GuessOutcome::GameOver => "The game is already over.".to_string(),
    }
}

pub fn secret_reveal_message(secret: &str) -> String {
    format!("The word was: {secret}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::compute_feedback;

    fn ansi(guess: &str) -> String {
        AnsiRenderer.render(guess, &compute_feedback("house", guess).unwrap())
    }

    #[test]
    fn test_ansi_exact_match() {
        let expected = format!(
            "{GREEN} h {RESET}{GREEN} o {RESET}{GREEN} u {RESET}{GREEN} s {RESET}{GREEN} e {RESET}"
        );
        assert_eq!(ansi("house"), expected);
    }

    #[test]
    fn test_ansi_partial_match() {
        let expected = format!("{GREEN} h {RESET}{GREEN} o {RESET} y  v {GREEN} e {RESET}");
        assert_eq!(ansi("hoyve"), expected);
    }

    #[test]
    fn test_ansi_wrong_order() {
        let expected = format!(
            "{YELLOW} e {RESET}{YELLOW} s {RESET}{YELLOW} o {RESET}{YELLOW} u {RESET}{YELLOW} h {RESET}"
        );
        assert_eq!(ansi("esouh"), expected);
    }

    #[test]
    fn test_ansi_repeated_letters() {
        let expected = format!("{GREEN} h {RESET}{GREEN} o {RESET} s {GREEN} s {RESET} s ");
        assert_eq!(ansi("hosss"), expected);
        let expected = format!("{GREEN} h {RESET}{GREEN} o {RESET} s  i  s ");
        assert_eq!(ansi("hosis"), expected);
    }

    #[test]
    fn test_ansi_no_match() {
        assert_eq!(ansi("black"), " b  l  a  c  k ");
    }

    #[test]
    fn test_plain_renderer() {
        let feedback = compute_feedback("house", "hosue").unwrap();
        assert_eq!(PlainRenderer.render("hosue", &feedback), "[h][o](s)(u)[e]");
    }

    #[test]
    fn test_introduction_mentions_settings() {
        let config = GameConfig {
            word_length: 6,
            max_attempts: 3,
        };
        let intro = introduction(&config, &PlainRenderer);
        assert!(intro.contains("Try to guess the 6-letter word."));
        assert!(intro.contains("You have 3 attempts."));
        assert!(intro.contains("[X] : Exact position."));
        assert!(intro.contains("(X) : Letter in the word but in the wrong position."));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            outcome_message(&GuessOutcome::Invalid { word_length: 5 }, &AnsiRenderer),
            "Please enter a 5-letter word."
        );
        assert_eq!(
            outcome_message(&GuessOutcome::Won { attempts_used: 2 }, &AnsiRenderer),
            "Congratulations ! You guessed the word correctly !"
        );
        let miss = GuessOutcome::Miss {
            guess: "black".to_string(),
            feedback: vec![Feedback::Absent; 5],
            remaining_attempts: 4,
        };
        assert_eq!(
            outcome_message(&miss, &AnsiRenderer),
            " b  l  a  c  k \n You have 4 tries left."
        );
    }

    #[test]
    fn test_secret_reveal_message() {
        assert_eq!(secret_reveal_message("house"), "The word was: house");
    }
}
