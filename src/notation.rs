//! Coordinate notation: move tokens like "e2e4" and the shell's input words.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use crate::board::Square;
use crate::error::{MalformedReason, MoveError};

lazy_static! {
    // Shape only; squares are range-checked by `Square::from_notation`.
    static ref MOVE_TOKEN: Regex = Regex::new(r"^([a-z])([0-9])([a-z])([0-9])$").unwrap();
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parses `<fromFile><fromRank><toFile><toRank>`.
pub fn parse_move(token: &str) -> Result<Move, MoveError> {
    let malformed = |reason: MalformedReason| MoveError::Malformed {
        token: token.to_string(),
        reason,
    };

    let len = token.chars().count();
    if len != 4 {
        return Err(malformed(MalformedReason::Length(len)));
    }
    let caps = MOVE_TOKEN
        .captures(token)
        .ok_or_else(|| malformed(MalformedReason::Shape))?;

    let ch = |i: usize| caps[i].chars().next().unwrap_or_default();
    let from = Square::from_notation(ch(1), ch(2)).map_err(|e| malformed(e.into()))?;
    let to = Square::from_notation(ch(3), ch(4)).map_err(|e| malformed(e.into()))?;
    Ok(Move { from, to })
}

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Move(Move),
    Command(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Board,
    Moves(Square),
    SaveStats(Option<String>),
}

/// Classifies a trimmed input line. Words the shell knows become commands,
/// everything else must be a move token.
pub fn parse_input(line: &str) -> Result<Input, MoveError> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or("");
    let argument = parts.next().unwrap_or("").trim();

    let command = match word {
        "exit" | "quit" => Some(Command::Exit),
        "help" | "?" => Some(Command::Help),
        "board" => Some(Command::Board),
        "savestats" => Some(Command::SaveStats(
            (!argument.is_empty()).then(|| argument.to_string()),
        )),
        "moves" => {
            let square = Square::parse(argument).map_err(|e| MoveError::Malformed {
                token: trimmed.to_string(),
                reason: e.into(),
            })?;
            Some(Command::Moves(square))
        }
        _ => None,
    };

    match command {
        Some(command) => Ok(Input::Command(command)),
        None => parse_move(trimmed).map(Input::Move),
    }
}
