use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, OpponentKind};

#[derive(Debug, Parser)]
#[command(name = "capture-chess", version, about = "Two-player chess where taking the king wins")]
pub struct Cli {
    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write the game record
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Do not write a game record on exit
    #[arg(long)]
    pub no_stats: bool,

    #[arg(long, value_enum)]
    pub opponent: Option<OpponentKind>,

    /// Seed for the random opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only print the board on request
    #[arg(long)]
    pub quiet_board: bool,
}

impl Cli {
    /// Flags given on the command line win over the config file.
    pub fn apply(&self, mut cfg: Config) -> Config {
        if let Some(stats) = &self.stats {
            cfg.stats_file = stats.clone();
        }
        if self.no_stats {
            cfg.save_stats = false;
        }
        if let Some(opponent) = self.opponent {
            cfg.opponent = opponent;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.quiet_board {
            cfg.show_board = false;
        }
        cfg
    }
}
