//! Guess the Number entry point
//!
//! Plays in the terminal with scores kept on disk. The browser build is driven
//! by page scripts through the library's `web::WebGame` bindings.

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};

    use futures::executor::block_on;
    use guess_the_number::persistence::JsonFileStore;
    use guess_the_number::{GuessOutcome, Scoreboard, Session, Settings, Theme};

    /// Env var selecting where scores are kept
    const DATA_DIR_VAR: &str = "GUESS_DATA_DIR";
    const DEFAULT_DATA_DIR: &str = ".guess-the-number";
    /// Terminal bell, the native stand-in for sound feedback
    const BELL: &str = "\x07";

    pub fn run() -> io::Result<()> {
        let dir = std::env::var(DATA_DIR_VAR).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let settings = Settings::load();
        let mut session = block_on(Session::start(
            JsonFileStore::new(dir),
            settings,
            rand::random(),
        ));

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        print_help(session.round().digits(), session.round().max_guesses());

        loop {
            write!(stdout, "[{} left] > ", session.round().guesses_left())?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let mut words = line.split_whitespace();
            let command = words.next().unwrap_or("");
            match command {
                "quit" | "q" => break,
                "new" | "n" => {
                    session.new_round();
                    println!("New number drawn.");
                }
                "scores" | "s" => print_scoreboard(&session.scoreboard()),
                "reset" => match block_on(session.reset_scores()) {
                    Ok(()) => println!("Scores cleared."),
                    Err(e) => println!("Could not clear scores: {e}"),
                },
                "theme" => {
                    let theme = match words.next() {
                        None => session.toggle_theme(),
                        Some(name) => match Theme::parse(name) {
                            Some(theme) => {
                                let mut settings = session.settings().clone();
                                settings.theme = theme;
                                session.update_settings(settings);
                                theme
                            }
                            None => {
                                println!("Unknown theme '{name}' (light or dark)");
                                continue;
                            }
                        },
                    };
                    println!("Theme: {} (toggle: {})", theme.as_str(), theme.toggle_icon());
                }
                "sound" => {
                    let on = session.toggle_sound();
                    println!("Sound {}", if on { "on" } else { "off" });
                }
                "help" | "h" => {
                    print_help(session.round().digits(), session.round().max_guesses())
                }
                _ => play_guess(&mut session, line.trim()),
            }
        }
        Ok(())
    }

    fn play_guess(session: &mut Session<JsonFileStore>, guess: &str) {
        let report = match block_on(session.submit_guess(guess)) {
            Ok(report) => report,
            Err(e) => {
                println!("{e}");
                return;
            }
        };

        match report.outcome {
            GuessOutcome::Miss { correct } => {
                let icon = report.live_rank.icon();
                println!("{guess}: {correct} in correct position {icon}");
            }
            GuessOutcome::Won { guesses } => {
                println!("You guessed the number in {guesses} moves!");
            }
            GuessOutcome::Lost { guesses } => {
                println!("GAME OVER after {guesses} attempts.");
            }
        }

        let Some(summary) = report.summary else {
            return;
        };
        if session.settings().sound_enabled {
            print!("{BELL}");
        }
        println!("The number: {}", session.round().secret());
        if summary.won {
            println!("Rank: {}", summary.rank);
        }
        if summary.new_best {
            println!("New top-three score!");
        }
        if !summary.persisted {
            println!("(scores could not be saved)");
        }
        session.new_round();
        println!("New number drawn.");
    }

    fn print_help(digits: usize, max_guesses: u32) {
        println!("Guess the {digits}-digit number in at most {max_guesses} tries.");
        println!("Commands: new, scores, reset, theme [light|dark], sound, help, quit");
    }

    fn print_scoreboard(board: &Scoreboard) {
        let slot = |s: Option<u32>| s.map_or_else(|| "-".to_string(), |v| v.to_string());
        println!(
            "Best: {}  Better: {}  Good: {}",
            slot(board.best),
            slot(board.better),
            slot(board.good)
        );
        let stats = &board.stats;
        println!(
            "Rank: {}  Games: {}  Wins: {}  Win ratio: {:.1}%  Avg guesses: {:.1}",
            stats.overall_rank,
            stats.total_games,
            stats.completed_games,
            stats.win_ratio,
            stats.avg_guess
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Guess the Number (native) starting...");

    if let Err(e) = terminal::run() {
        log::error!("Terminal error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::init in the library, this is just to satisfy the compiler
}
