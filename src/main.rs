use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use wordle_game::cli::{CliInterface, parse_cli};
use wordle_game::debug_log;
use wordle_game::logging::init_logging;
use wordle_game::tui::TuiInterface;
use wordle_game::{GameConfig, GameState, SessionResult, game_loop, load_candidate_list, pick_secret};

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging();

    let config = GameConfig::default();
    let candidates = match load_candidate_list(&cli.word_source(), config.word_length) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let secret = match pick_secret(&candidates, &mut rng) {
        Ok(word) => word,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    debug_log!("Secret chosen from {} candidates", candidates.len());

    let state = match GameState::new(secret, config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let result = if cli.tui {
        match TuiInterface::new() {
            Ok(mut tui) => {
                let result = game_loop(state, &mut tui);
                if result != SessionResult::Quit {
                    tui.wait_for_key();
                }
                result
            }
            Err(e) => {
                eprintln!("Failed to start terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::with_renderer(stdin.lock(), cli.renderer());
        game_loop(state, &mut interface)
    };

    match result {
        SessionResult::Won | SessionResult::Quit => ExitCode::SUCCESS,
        SessionResult::Lost => ExitCode::FAILURE,
    }
}
