use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BoardError, CoordError};

pub const SIZE: usize = 8;

// Standard starting arrangement, rank 8 first.
const INITIAL_LAYOUT: [&str; SIZE] = [
    "rnbqkbnr",
    "pppppppp",
    "        ",
    "        ",
    "        ",
    "        ",
    "PPPPPPPP",
    "RNBQKBNR",
];

// --- Sides and Pieces ---

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row a pawn of this side starts on.
    pub(crate) fn pawn_row(self) -> i8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Row delta of one pawn step forward.
    pub(crate) fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lowercase letter used for this kind in text output.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }

    /// Uppercase letters are White, lowercase are Black.
    pub fn from_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() { Side::White } else { Side::Black };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, side))
    }

    pub fn symbol(self) -> char {
        match self.side {
            Side::White => self.kind.letter().to_ascii_uppercase(),
            Side::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of one board cell.
pub type Cell = Option<Piece>;

// --- Squares ---

/// One of the 64 board positions. Row 0 is rank 8, column 0 is file 'a'.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Translates external notation (file 'a'..'h', rank '1'..'8') to a square.
    pub fn from_notation(file: char, rank: char) -> Result<Square, CoordError> {
        let out_of_range = CoordError::OutOfRange { file, rank };
        if !file.is_ascii() || !rank.is_ascii() {
            return Err(out_of_range);
        }
        let col = file as i32 - 'a' as i32;
        let row = 8 - (rank as i32 - '0' as i32);
        Square::at(row, col).ok_or(out_of_range)
    }

    /// Parses a two-character square name such as "e4".
    pub fn parse(name: &str) -> Result<Square, CoordError> {
        let mut chars = name.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Square::from_notation(file, rank),
            _ => Err(CoordError::OutOfRange {
                file: name.chars().next().unwrap_or(' '),
                rank: name.chars().nth(1).unwrap_or(' '),
            }),
        }
    }

    pub(crate) fn at(row: i32, col: i32) -> Option<Square> {
        if (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&col) {
            Some(Square { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub(crate) fn row(self) -> i8 {
        self.row as i8
    }

    pub(crate) fn col(self) -> i8 {
        self.col as i8
    }

    pub(crate) fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::at((self.row as i8 + d_row) as i32, (self.col as i8 + d_col) as i32)
    }

    pub fn file(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank(self) -> char {
        (b'8' - self.row) as char
    }

    /// Light squares share the parity of a8.
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// All squares, rank 8 to rank 1, file a to file h within each rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SIZE as u8).flat_map(|row| (0..SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// What a renderer needs to know about one square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SquareView {
    Empty { light: bool },
    Piece(Piece),
}

// --- Board ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board { cells: [[None; SIZE]; SIZE] }
    }

    /// Standard chess starting position.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (row, line) in INITIAL_LAYOUT.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                board.cells[row][col] = Piece::from_char(c);
            }
        }
        board
    }

    /// Builds a board from 8 rows of 8 characters, rank 8 first. A space or
    /// '.' marks an empty cell, piece letters follow `Piece::from_char`.
    pub fn from_rows(rows: &[&str]) -> Result<Board, BoardError> {
        if rows.len() != SIZE {
            return Err(BoardError::RowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != SIZE {
                return Err(BoardError::RowLength { row, len });
            }
            for (col, c) in line.chars().enumerate() {
                board.cells[row][col] = match c {
                    ' ' | '.' => None,
                    _ => Some(Piece::from_char(c).ok_or(BoardError::UnknownPiece(c))?),
                };
            }
        }
        Ok(board)
    }

    /// Inverse of `from_rows`, using '.' for empty cells.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.map_or('.', Piece::symbol)).collect())
            .collect()
    }

    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn place(&mut self, sq: Square, piece: Piece) -> Cell {
        self.cells[sq.row as usize][sq.col as usize].replace(piece)
    }

    pub fn remove(&mut self, sq: Square) -> Cell {
        self.cells[sq.row as usize][sq.col as usize].take()
    }

    /// Moves whatever stands on `from` to `to`, returning the overwritten cell.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Cell {
        match self.remove(from) {
            Some(piece) => self.place(to, piece),
            None => None,
        }
    }

    pub fn view(&self, sq: Square) -> SquareView {
        match self.get(sq) {
            Some(piece) => SquareView::Piece(piece),
            None => SquareView::Empty { light: sq.is_light() },
        }
    }

    /// Occupied squares in board order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| *piece == Piece::new(PieceKind::King, side))
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   a b c d e f g h")?;
        for row in 0..SIZE as u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..SIZE as u8 {
                match self.view(Square { row, col }) {
                    SquareView::Piece(piece) => write!(f, "{} ", piece)?,
                    SquareView::Empty { light: true } => write!(f, ". ")?,
                    SquareView::Empty { light: false } => write!(f, "# ")?,
                }
            }
            writeln!(f, "{}", 8 - row)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::parse(name).unwrap()
    }

    #[test]
    fn notation_maps_to_internal_rows() {
        assert_eq!((sq("a8").row(), sq("a8").col()), (0, 0));
        assert_eq!((sq("h1").row(), sq("h1").col()), (7, 7));
        assert_eq!((sq("e2").row(), sq("e2").col()), (6, 4));
        assert_eq!(sq("e2").to_string(), "e2");
    }

    #[test]
    fn out_of_range_notation_is_rejected() {
        for (file, rank) in [('i', '1'), ('a', '9'), ('a', '0'), ('`', '4'), ('é', '4')] {
            assert_eq!(
                Square::from_notation(file, rank),
                Err(CoordError::OutOfRange { file, rank })
            );
        }
    }

    #[test]
    fn initial_layout_is_standard() {
        let board = Board::initial();
        let rows = board.to_rows();
        assert_eq!(rows[0], "rnbqkbnr");
        assert_eq!(rows[1], "pppppppp");
        for row in &rows[2..6] {
            assert_eq!(row, "........");
        }
        assert_eq!(rows[6], "PPPPPPPP");
        assert_eq!(rows[7], "RNBQKBNR");
        assert_eq!(board.get(sq("e1")), Some(Piece::new(PieceKind::King, Side::White)));
        assert_eq!(board.get(sq("d8")), Some(Piece::new(PieceKind::Queen, Side::Black)));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn from_rows_round_trips_and_reports_errors() {
        let board = Board::from_rows(&INITIAL_LAYOUT).unwrap();
        assert_eq!(board, Board::initial());

        assert_eq!(Board::from_rows(&["rnbqkbnr"]), Err(BoardError::RowCount(1)));
        let mut rows = INITIAL_LAYOUT;
        rows[3] = "   x    ";
        assert_eq!(Board::from_rows(&rows), Err(BoardError::UnknownPiece('x')));
        rows[3] = "   ";
        assert_eq!(Board::from_rows(&rows), Err(BoardError::RowLength { row: 3, len: 3 }));
    }

    #[test]
    fn empty_squares_expose_checker_parity() {
        let board = Board::initial();
        assert_eq!(board.view(sq("a6")), SquareView::Empty { light: true });
        assert_eq!(board.view(sq("b6")), SquareView::Empty { light: false });
        assert_eq!(
            board.view(sq("a1")),
            SquareView::Piece(Piece::new(PieceKind::Rook, Side::White))
        );
    }

    #[test]
    fn display_uses_letters_and_parity_marks() {
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   a b c d e f g h");
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[3], "6 . # . # . # . # 6");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }
}
