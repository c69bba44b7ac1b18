//! Movement rules for each piece kind.
//!
//! Every rule is a pure function of the board and the two squares. Rules
//! assume the piece on `from` belongs to `side`; ownership, empty origins and
//! null moves are settled once in [`check_move`] before dispatch.

use crate::board::{Board, PieceKind, Side, Square};
use crate::error::IllegalReason;
use crate::notation::Move;

/// A piece of `side` may land on `to`: the square is empty or holds an
/// opponent piece. Off-board squares cannot be represented by `Square`.
pub fn is_valid_target(board: &Board, to: Square, side: Side) -> bool {
    match board.get(to) {
        None => true,
        Some(occupant) => occupant.side != side,
    }
}

/// Every square strictly between `from` and `to` is empty. The squares must
/// share a row, column or diagonal.
fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row() - from.row()).signum();
    let d_col = (to.col() - from.col()).signum();

    let mut current = from.offset(d_row, d_col);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(d_row, d_col);
    }
    true
}

pub fn pawn(board: &Board, from: Square, to: Square, side: Side) -> bool {
    let dir = side.forward();
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();

    // Single push
    if d_col == 0 && d_row == dir {
        return board.is_empty(to);
    }

    // Double push from the starting rank, both squares empty
    if d_col == 0 && d_row == 2 * dir && from.row() == side.pawn_row() {
        let jumped_clear = from.offset(dir, 0).is_some_and(|mid| board.is_empty(mid));
        return jumped_clear && board.is_empty(to);
    }

    // Diagonal capture of an opponent piece
    if d_col.abs() == 1 && d_row == dir {
        return !board.is_empty(to) && is_valid_target(board, to, side);
    }

    false
}

pub fn rook(board: &Board, from: Square, to: Square, side: Side) -> bool {
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }
    is_path_clear(board, from, to) && is_valid_target(board, to, side)
}

pub fn bishop(board: &Board, from: Square, to: Square, side: Side) -> bool {
    if (to.row() - from.row()).abs() != (to.col() - from.col()).abs() {
        return false;
    }
    is_path_clear(board, from, to) && is_valid_target(board, to, side)
}

/// Knights jump; nothing between origin and destination is inspected.
pub fn knight(board: &Board, from: Square, to: Square, side: Side) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    ((d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)) && is_valid_target(board, to, side)
}

pub fn king(board: &Board, from: Square, to: Square, side: Side) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    d_row <= 1 && d_col <= 1 && from != to && is_valid_target(board, to, side)
}

pub fn queen(board: &Board, from: Square, to: Square, side: Side) -> bool {
    rook(board, from, to, side) || bishop(board, from, to, side)
}

/// Full legality check for `side` moving the piece on `from` to `to`.
pub fn check_move(board: &Board, from: Square, to: Square, side: Side) -> Result<(), IllegalReason> {
    let piece = board.get(from).ok_or(IllegalReason::EmptyOrigin)?;
    if piece.side != side {
        return Err(IllegalReason::NotYourPiece(piece.side));
    }
    if from == to {
        return Err(IllegalReason::NullMove);
    }

    let legal = match piece.kind {
        PieceKind::Pawn => pawn(board, from, to, side),
        PieceKind::Knight => knight(board, from, to, side),
        PieceKind::Bishop => bishop(board, from, to, side),
        PieceKind::Rook => rook(board, from, to, side),
        PieceKind::Queen => queen(board, from, to, side),
        PieceKind::King => king(board, from, to, side),
    };

    if legal {
        Ok(())
    } else {
        Err(IllegalReason::PieceRule(piece.kind))
    }
}

pub fn is_legal(board: &Board, from: Square, to: Square, side: Side) -> bool {
    check_move(board, from, to, side).is_ok()
}

/// Squares the piece on `from` may move to on `side`'s turn.
pub fn legal_destinations(board: &Board, from: Square, side: Side) -> Vec<Square> {
    Square::all().filter(|&to| is_legal(board, from, to, side)).collect()
}

/// Every legal move available to `side`, ordered by origin then destination.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .flat_map(|(from, _)| {
            legal_destinations(board, from, side)
                .into_iter()
                .map(move |to| Move { from, to })
        })
        .collect()
}
