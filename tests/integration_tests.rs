// Integration tests for the wordle-game application
// These tests verify that word loading, evaluation and the game loop work together

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{Cursor, Write};
use wordle_game::cli::CliInterface;
use wordle_game::render::PlainRenderer;
use wordle_game::*;

fn cli(input: &str) -> CliInterface<Cursor<Vec<u8>>> {
    CliInterface::new(Cursor::new(input.as_bytes().to_vec()))
}

#[test]
fn test_end_to_end_win() {
    // Load words -> pick secret -> play until the secret is guessed
    let candidates = load_wordbank_from_str("crane\nslate\nTRACE\n  place \ngrace\nbraces", 5);
    assert_eq!(candidates.len(), 5);

    let secret = pick_secret(&candidates, &mut StdRng::seed_from_u64(3)).unwrap();
    assert!(candidates.contains(&secret));

    let others: Vec<&str> = candidates
        .iter()
        .filter(|w| **w != secret)
        .map(String::as_str)
        .take(2)
        .collect();
    let input = format!("{}\n{}\n{}\n", others[0], others[1], secret);

    let state = GameState::new(secret, GameConfig::default()).unwrap();
    let result = game_loop(state, &mut cli(&input));
    assert_eq!(result, SessionResult::Won);
}

#[test]
fn test_end_to_end_loss() {
    let state = GameState::new("house", GameConfig::default()).unwrap();
    let input = "black\ncrane\nslate\ntrace\nplace\n";
    assert_eq!(game_loop(state, &mut cli(input)), SessionResult::Lost);
}

#[test]
fn test_invalid_guesses_do_not_consume_attempts() {
    // Four invalid entries plus four misses still leave room for the win.
    let state = GameState::new("house", GameConfig::default()).unwrap();
    let input = "blacke\nhou\n\nhouses\nblack\ncrane\nslate\ntrace\nhouse\n";
    assert_eq!(game_loop(state, &mut cli(input)), SessionResult::Won);
}

#[test]
fn test_undecodable_line_is_asked_again() {
    // A Latin-1 byte is not valid UTF-8; the next line still gets all attempts.
    let config = GameConfig {
        word_length: 5,
        max_attempts: 1,
    };
    let state = GameState::new("house", config).unwrap();
    let mut interface = CliInterface::new(Cursor::new(b"caf\xe9s\nhouse\n".to_vec()));
    assert_eq!(game_loop(state, &mut interface), SessionResult::Won);
}

#[test]
fn test_uppercase_guess_wins() {
    let state = GameState::new("house", GameConfig::default()).unwrap();
    assert_eq!(game_loop(state, &mut cli("HOUSE\n")), SessionResult::Won);
}

#[test]
fn test_exit_and_end_of_input() {
    let state = GameState::new("house", GameConfig::default()).unwrap();
    assert_eq!(game_loop(state.clone(), &mut cli("black\nexit\n")), SessionResult::Quit);
    assert_eq!(game_loop(state, &mut cli("black\n")), SessionResult::Quit);
}

#[test]
fn test_plain_renderer_session() {
    let state = GameState::new("house", GameConfig::default()).unwrap();
    let mut interface =
        CliInterface::with_renderer(Cursor::new("esouh\nhouse\n"), Box::new(PlainRenderer));
    assert_eq!(game_loop(state, &mut interface), SessionResult::Won);
}

#[test]
fn test_state_transitions_step_by_step() {
    let state = GameState::new("house", GameConfig::default()).unwrap();

    let (state, outcome) = evaluate_guess(state, Some("blacke"));
    assert_eq!(outcome, GuessOutcome::Invalid { word_length: 5 });
    assert_eq!(state.remaining_attempts(), 5);

    let (state, outcome) = evaluate_guess(state, Some("esouh"));
    match outcome {
        GuessOutcome::Miss {
            feedback,
            remaining_attempts,
            ..
        } => {
            assert_eq!(feedback, vec![Feedback::Present; 5]);
            assert_eq!(remaining_attempts, 4);
        }
        other => panic!("Expected a miss, got {other:?}"),
    }

    let (state, outcome) = evaluate_guess(state, Some("house"));
    assert_eq!(outcome, GuessOutcome::Won { attempts_used: 2 });
    assert_eq!(state.status(), Status::Won);
    assert!(state.is_won());
}

#[test]
fn test_feedback_properties_over_wordlist() {
    let words = load_candidate_list(&WordListSource::Embedded, 5).unwrap();
    let secrets = &words[..words.len().min(20)];
    let guesses = &words[words.len().saturating_sub(20)..];

    for secret in secrets {
        for guess in guesses {
            let feedback = compute_feedback(secret, guess).unwrap();
            assert_eq!(feedback.len(), 5);
            assert_eq!(feedback, compute_feedback(secret, guess).unwrap());
            if secret == guess {
                assert!(feedback.iter().all(|f| *f == Feedback::Exact));
            }
        }
    }
}

#[test]
fn test_custom_wordlist_file_to_game() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "apple\nGRAPE\nlemon\nwatermelon\nfig").unwrap();

    let source = WordListSource::File(file.path().to_path_buf());
    let words = load_candidate_list(&source, 5).unwrap();
    assert_eq!(words, vec!["apple", "grape", "lemon"]);

    let secret = pick_secret(&words, &mut StdRng::seed_from_u64(11)).unwrap();
    let input = format!("{secret}\n");
    let state = GameState::new(secret, GameConfig::default()).unwrap();
    assert_eq!(game_loop(state, &mut cli(&input)), SessionResult::Won);
}

#[test]
fn test_fatal_startup_conditions() {
    let dir = tempfile::tempdir().unwrap();
    let missing = WordListSource::File(dir.path().join("nope.txt"));
    assert!(matches!(
        load_candidate_list(&missing, 5),
        Err(WordSourceError::Read { .. })
    ));

    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        pick_secret(&empty, &mut StdRng::seed_from_u64(0)),
        Err(WordSourceError::EmptyCandidates)
    ));
}

#[test]
fn test_secret_must_match_configured_length() {
    let config = GameConfig {
        word_length: 4,
        max_attempts: 3,
    };
    assert_eq!(
        GameState::new("house", config).unwrap_err(),
        GuessError::SecretLength {
            expected: 4,
            actual: 5
        }
    );
}

#[test]
fn test_shorter_game_configuration() {
    let config = GameConfig {
        word_length: 4,
        max_attempts: 2,
    };
    let words = filter_words(["lamp", "lamps", "TREE", "sky"], config.word_length);
    assert_eq!(words, vec!["lamp", "tree"]);

    let state = GameState::new("lamp", config).unwrap();
    assert_eq!(game_loop(state, &mut cli("tree\nlamb\n")), SessionResult::Lost);
}
