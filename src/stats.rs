//! Game record kept by the shell and written out as JSON.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::board::{Board, Piece, Side};
use crate::error::StatsError;
use crate::game::{GameState, MoveOutcome};

pub const DEFAULT_STATS_FILENAME: &str = "capture_chess_stats.json";

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum GameResult {
    KingCaptured { winner: Side, loser: Side },
    Abandoned { to_move: Side },
}

impl GameResult {
    pub fn from_state(state: GameState) -> Self {
        match state {
            GameState::Over { winner } => GameResult::KingCaptured { winner, loser: winner.opponent() },
            GameState::ToMove(to_move) => GameResult::Abandoned { to_move },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameStats {
    pub result: GameResult,
    pub half_moves: usize,
    pub white_moves: Vec<String>,
    pub black_moves: Vec<String>,
    /// Black pieces taken by White.
    pub captured_by_white: Vec<Piece>,
    /// White pieces taken by Black.
    pub captured_by_black: Vec<Piece>,
    /// Final position, rank 8 first, '.' for empty cells.
    pub final_board: Vec<String>,
}

/// Accepted moves in the order they were played.
#[derive(Debug, Default, Clone)]
pub struct GameRecord {
    moves: Vec<MoveOutcome>,
}

impl GameRecord {
    pub fn new() -> Self {
        GameRecord::default()
    }

    pub fn record(&mut self, outcome: MoveOutcome) {
        self.moves.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn stats(&self, board: &Board, state: GameState) -> GameStats {
        let played_by = |side: Side| -> Vec<String> {
            self.moves
                .iter()
                .filter(|m| m.mover == side)
                .map(|m| m.played.to_string())
                .collect()
        };
        let captured_by = |side: Side| -> Vec<Piece> {
            self.moves
                .iter()
                .filter(|m| m.mover == side)
                .filter_map(|m| m.captured)
                .collect()
        };

        GameStats {
            result: GameResult::from_state(state),
            half_moves: self.moves.len(),
            white_moves: played_by(Side::White),
            black_moves: played_by(Side::Black),
            captured_by_white: captured_by(Side::White),
            captured_by_black: captured_by(Side::Black),
            final_board: board.to_rows(),
        }
    }

    pub fn save(&self, path: &Path, board: &Board, state: GameState) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(&self.stats(board, state))?;
        fs::write(path, json).map_err(|e| StatsError::Io(path.display().to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;
    use crate::game::Game;

    #[test]
    fn collects_moves_and_captures_per_side() {
        let mut game = Game::new();
        let mut record = GameRecord::new();
        for token in ["e2e4", "d7d5", "e4d5"] {
            record.record(game.apply_move(token).unwrap());
        }

        let stats = record.stats(game.board(), game.state());
        assert_eq!(stats.half_moves, 3);
        assert_eq!(stats.white_moves, vec!["e2e4", "e4d5"]);
        assert_eq!(stats.black_moves, vec!["d7d5"]);
        assert_eq!(stats.captured_by_white, vec![Piece::new(PieceKind::Pawn, Side::Black)]);
        assert!(stats.captured_by_black.is_empty());
        assert_eq!(stats.result, GameResult::Abandoned { to_move: Side::Black });
    }

    #[test]
    fn saves_pretty_json() {
        let game = Game::new();
        let record = GameRecord::new();
        let path = std::env::temp_dir().join(format!("capture_chess_stats_{}.json", std::process::id()));
        record.save(&path, game.board(), game.state()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["result"]["type"], "Abandoned");
        assert_eq!(value["result"]["to_move"], "White");
        assert_eq!(value["final_board"][7], "RNBQKBNR");
        let _ = fs::remove_file(&path);
    }
}
