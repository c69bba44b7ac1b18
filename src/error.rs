//! Error types for coordinate translation, move validation and the shell.

use std::io;

use crate::board::{PieceKind, Side, Square};

/// A file/rank pair that does not name one of the 64 squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("square '{file}{rank}' is off the board")]
    OutOfRange { file: char, rank: char },
}

/// Why a move token could not be turned into two squares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("expected 4 characters like 'e2e4', got {0}")]
    Length(usize),
    #[error("expected <file><rank><file><rank> like 'e2e4'")]
    Shape,
    #[error(transparent)]
    Coord(#[from] CoordError),
}

/// Why a well-formed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalReason {
    #[error("no piece on the origin square")]
    EmptyOrigin,
    #[error("the piece on the origin square belongs to {0}")]
    NotYourPiece(Side),
    #[error("origin and destination are the same square")]
    NullMove,
    #[error("a {0} cannot move that way")]
    PieceRule(PieceKind),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("malformed move '{token}': {reason}")]
    Malformed { token: String, reason: MalformedReason },

    #[error("illegal move {from}{to}: {reason}")]
    Illegal {
        from: Square,
        to: Square,
        reason: IllegalReason,
    },

    #[error("the game is already over")]
    GameOver,
}

impl MoveError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, MoveError::Malformed { .. })
    }

    pub fn is_illegal(&self) -> bool {
        matches!(self, MoveError::Illegal { .. })
    }
}

/// Errors raised while building a board from a text layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error with file '{0}': {1}")]
    Io(String, #[source] io::Error),
}
