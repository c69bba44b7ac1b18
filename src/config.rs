use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

use crate::error::ConfigError;
use crate::stats::DEFAULT_STATS_FILENAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Both sides are entered at the prompt.
    Human,
    /// Black plays random legal moves.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub stats_file: PathBuf,
    pub save_stats: bool,
    pub opponent: OpponentKind,
    pub seed: Option<u64>,
    pub show_board: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stats_file: PathBuf::from(DEFAULT_STATS_FILENAME),
            save_stats: true,
            opponent: OpponentKind::Human,
            seed: None,
            show_board: true,
        }
    }
}

impl Config {
    /// Reads a JSON config file. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path: display, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}.json", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
        let path = Path::new("/nonexistent/capture_chess.json");
        assert_eq!(Config::load(Some(path)).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_overrides_some_fields() {
        let path = write_temp("capture_chess_cfg", r#"{ "opponent": "random", "seed": 42 }"#);
        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg.opponent, OpponentKind::Random);
        assert_eq!(cfg.seed, Some(42));
        assert!(cfg.save_stats);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let path = write_temp("capture_chess_bad_cfg", "{ opponent: ");
        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Parse { .. })));
        let _ = fs::remove_file(&path);
    }
}
