//! Turn handling: validate a move, apply it, and decide whether the game ended.
//!
//! The game ends when a side no longer has a king on the board. There is no
//! check or checkmate detection; kings are captured like any other piece.

use log::{debug, info};

use crate::board::{Board, Piece, PieceKind, Side};
use crate::error::MoveError;
use crate::notation::{parse_move, Move};
use crate::rules::check_move;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    ToMove(Side),
    Over { winner: Side },
}

/// Result of an accepted move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mover: Side,
    pub played: Move,
    pub captured: Option<Piece>,
    pub state: GameState,
}

impl MoveOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::Over { .. })
    }
}

/// True when `side` has no king left on the board.
pub fn is_eliminated(board: &Board, side: Side) -> bool {
    board.find_king(side).is_none()
}

/// Validates and plays `mv` for `turn`. On error the board is untouched.
pub fn play(board: &mut Board, mv: Move, turn: Side) -> Result<MoveOutcome, MoveError> {
    if let Err(reason) = check_move(board, mv.from, mv.to, turn) {
        debug!("rejected {} for {}: {}", mv, turn, reason);
        return Err(MoveError::Illegal { from: mv.from, to: mv.to, reason });
    }

    let captured = board.relocate(mv.from, mv.to);
    debug!("{} played {}", turn, mv);

    let opponent = turn.opponent();
    let state = if is_eliminated(board, opponent) {
        info!("{} king captured by {} on {}", opponent, turn, mv.to);
        GameState::Over { winner: turn }
    } else {
        GameState::ToMove(opponent)
    };

    Ok(MoveOutcome { mover: turn, played: mv, captured, state })
}

/// Parses `token` and plays it for `turn`.
pub fn apply_move(board: &mut Board, token: &str, turn: Side) -> Result<MoveOutcome, MoveError> {
    let mv = parse_move(token).inspect_err(|e| debug!("{}", e))?;
    play(board, mv, turn)
}

/// One game session: a board plus whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Game::from_board(Board::initial(), Side::White)
    }

    /// Starts from an arbitrary position. A side already without a king
    /// counts as having lost.
    pub fn from_board(board: Board, to_move: Side) -> Self {
        let state = if is_eliminated(&board, to_move) {
            GameState::Over { winner: to_move.opponent() }
        } else if is_eliminated(&board, to_move.opponent()) {
            GameState::Over { winner: to_move }
        } else {
            GameState::ToMove(to_move)
        };
        Game { board, state }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Side to move, or `None` once the game is over.
    pub fn turn(&self) -> Option<Side> {
        match self.state {
            GameState::ToMove(side) => Some(side),
            GameState::Over { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::Over { winner } => Some(winner),
            GameState::ToMove(_) => None,
        }
    }

    pub fn apply_move(&mut self, token: &str) -> Result<MoveOutcome, MoveError> {
        let turn = self.turn().ok_or(MoveError::GameOver)?;
        let outcome = apply_move(&mut self.board, token, turn)?;
        self.state = outcome.state;
        Ok(outcome)
    }

    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let turn = self.turn().ok_or(MoveError::GameOver)?;
        let outcome = play(&mut self.board, mv, turn)?;
        self.state = outcome.state;
        Ok(outcome)
    }

    /// Material still on the board for `side`, by kind.
    pub fn count(&self, side: Side, kind: PieceKind) -> usize {
        self.board
            .pieces()
            .filter(|(_, piece)| *piece == Piece::new(kind, side))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalReason;

    #[test]
    fn opening_push_is_accepted_and_turn_flips() {
        let mut game = Game::new();
        let outcome = game.apply_move("e2e4").unwrap();
        assert_eq!(outcome.mover, Side::White);
        assert_eq!(outcome.captured, None);
        assert_eq!(game.state(), GameState::ToMove(Side::Black));
        assert_eq!(game.board().to_rows()[4], "....P...");
        assert_eq!(game.board().to_rows()[6], "PPPP.PPP");
    }

    #[test]
    fn rejection_keeps_turn() {
        let mut game = Game::new();
        let err = game.apply_move("e7e5").unwrap_err();
        assert!(matches!(
            err,
            MoveError::Illegal { reason: IllegalReason::NotYourPiece(Side::Black), .. }
        ));
        assert_eq!(game.turn(), Some(Side::White));
        assert_eq!(game.board(), &Board::initial());
    }

    #[test]
    fn king_capture_ends_game() {
        let board = Board::from_rows(&[
            "....k...",
            "....Q...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "....K...",
        ])
        .unwrap();
        let mut game = Game::from_board(board, Side::White);
        let outcome = game.apply_move("e7e8").unwrap();
        assert!(outcome.is_game_over());
        assert_eq!(outcome.captured, Some(Piece::new(PieceKind::King, Side::Black)));
        assert_eq!(game.winner(), Some(Side::White));
        assert_eq!(game.count(Side::Black, PieceKind::King), 0);
        assert_eq!(game.apply_move("e1e2"), Err(MoveError::GameOver));
    }

    #[test]
    fn kingless_start_is_already_over() {
        let board = Board::from_rows(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "....K...",
        ])
        .unwrap();
        assert_eq!(Game::from_board(board, Side::Black).winner(), Some(Side::White));
    }
}
