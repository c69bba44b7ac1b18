// src/main.rs
use clap::Parser;
use env_logger::Env;
use log::{error, warn};
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use capture_chess::cli::Cli;
use capture_chess::config::{Config, OpponentKind};
use capture_chess::game::{Game, GameState, MoveOutcome};
use capture_chess::notation::{parse_input, Command, Input};
use capture_chess::opponent::RandomOpponent;
use capture_chess::rules::legal_destinations;
use capture_chess::stats::GameRecord;
use capture_chess::Side;

struct Session {
    cfg: Config,
    game: Game,
    record: GameRecord,
    opponent: Option<RandomOpponent>,
}

impl Session {
    fn new(cfg: Config) -> Self {
        let opponent = match cfg.opponent {
            OpponentKind::Human => None,
            OpponentKind::Random => Some(match cfg.seed {
                Some(seed) => RandomOpponent::seeded(Side::Black, seed),
                None => RandomOpponent::from_entropy(Side::Black),
            }),
        };
        Session { cfg, game: Game::new(), record: GameRecord::new(), opponent }
    }

    fn save_stats(&self, path: &Path) {
        match self.record.save(path, self.game.board(), self.game.state()) {
            Ok(()) => println!("Game record saved to '{}'.", path.display()),
            Err(e) => error!("failed to save game record: {}", e),
        }
    }

    fn save_stats_on_exit(&self) {
        if self.cfg.save_stats {
            self.save_stats(&self.cfg.stats_file);
        }
    }

    /// Records an accepted move and announces the result if it ended the game.
    fn accept(&mut self, outcome: MoveOutcome) {
        self.record.record(outcome);
        if let GameState::Over { winner } = outcome.state {
            println!("{}", self.game.board());
            println!("{} lost: king captured", winner.opponent());
        }
    }

    /// Lets the computer answer if it is its turn. Returns false when it
    /// has no move to make.
    fn opponent_turn(&mut self) -> bool {
        let Some(opponent) = self.opponent.as_mut() else { return true };
        if self.game.turn() != Some(opponent.side()) {
            return true;
        }
        let Some(mv) = opponent.choose(self.game.board()) else {
            println!("{} has no legal move.", opponent.side());
            return false;
        };
        match self.game.play(mv) {
            Ok(outcome) => {
                println!("{} plays {}", outcome.mover, mv);
                self.accept(outcome);
                true
            }
            Err(e) => {
                // Moves come from the legality check, so this is a bug.
                error!("random opponent produced a rejected move {}: {}", mv, e);
                false
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let env = Env::default().filter_or("CAPTURE_CHESS_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let cfg = cli.apply(Config::load(cli.config.as_deref())?);
    let mut session = Session::new(cfg);

    println!("==============================");
    println!("|   Capture Chess            |");
    println!("==============================");
    print_help();

    'game_loop: while let Some(turn) = session.game.turn() {
        if session.opponent.as_ref().is_some_and(|o| o.side() == turn) {
            if !session.opponent_turn() {
                break 'game_loop;
            }
            continue 'game_loop;
        }

        if session.cfg.show_board {
            println!("{}", session.game.board());
        }
        print!("\n{} to move. Enter move (e.g. e2e4 or 'exit'): ", turn);
        io::stdout().flush()?;

        let mut input_line = String::new();
        match io::stdin().read_line(&mut input_line) {
            Ok(0) => {
                println!("\nEnd of input detected.");
                break 'game_loop;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("error reading input: {}", e);
                continue 'game_loop;
            }
        }

        if input_line.trim().is_empty() {
            continue 'game_loop;
        }

        match parse_input(&input_line) {
            Ok(Input::Move(mv)) => match session.game.play(mv) {
                Ok(outcome) => session.accept(outcome),
                Err(e) => {
                    println!("Invalid move");
                    println!("  {}", e);
                }
            },
            Ok(Input::Command(command)) => match command {
                Command::Exit => break 'game_loop,
                Command::Help => print_help(),
                Command::Board => println!("{}", session.game.board()),
                Command::Moves(from) => {
                    let targets: Vec<String> = legal_destinations(session.game.board(), from, turn)
                        .iter()
                        .map(|sq| sq.to_string())
                        .collect();
                    if targets.is_empty() {
                        println!("No legal moves from {}.", from);
                    } else {
                        println!("{}: {}", from, targets.join(" "));
                    }
                }
                Command::SaveStats(path) => {
                    let path = path.map_or_else(|| session.cfg.stats_file.clone(), PathBuf::from);
                    session.save_stats(&path);
                }
            },
            Err(e) => {
                println!("Invalid move");
                println!("  {}", e);
            }
        }
    }

    session.save_stats_on_exit();
    println!("Game over");
    Ok(())
}

/// Prints available commands.
fn print_help() {
    println!("\nAvailable Commands:");
    println!("  <move>           Coordinate move, e.g. e2e4 (origin then destination).");
    println!("  moves <square>   List legal destinations of the piece on a square.");
    println!("  board            Print the board.");
    println!("  savestats [file] Save the game record now.");
    println!("  help             Show this help message.");
    println!("  exit / quit      End the session.");
    println!("Capture the opposing king to win. There is no check, castling,");
    println!("en passant or promotion.");
    println!();
}
