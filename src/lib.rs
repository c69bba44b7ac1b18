//! Move-legality checker for a simplified chess variant played in
//! coordinate notation. A game is won by capturing the opposing king.

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod notation;
pub mod opponent;
pub mod rules;
pub mod stats;

pub use board::{Board, Cell, Piece, PieceKind, Side, Square, SquareView};
pub use error::{CoordError, IllegalReason, MalformedReason, MoveError};
pub use game::{apply_move, is_eliminated, Game, GameState, MoveOutcome};
pub use notation::{parse_move, Move};
pub use rules::is_valid_target;
