use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Side};
use crate::notation::Move;
use crate::rules::legal_moves;

/// Computer player that picks uniformly among its legal moves.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    side: Side,
    rng: StdRng,
}

impl RandomOpponent {
    /// Same seed, same game.
    pub fn seeded(side: Side, seed: u64) -> Self {
        RandomOpponent { side, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy(side: Side) -> Self {
        RandomOpponent { side, rng: StdRng::from_os_rng() }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// `None` when no piece of this side can move.
    pub fn choose(&mut self, board: &Board) -> Option<Move> {
        let moves = legal_moves(board, self.side);
        if moves.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..moves.len());
        Some(moves[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_legal;

    #[test]
    fn chooses_legal_moves_reproducibly() {
        let board = Board::initial();
        let mut a = RandomOpponent::seeded(Side::Black, 7);
        let mut b = RandomOpponent::seeded(Side::Black, 7);
        for _ in 0..10 {
            let mv = a.choose(&board).unwrap();
            assert!(is_legal(&board, mv.from, mv.to, Side::Black));
            assert_eq!(Some(mv), b.choose(&board));
        }
    }

    #[test]
    fn no_pieces_no_move() {
        let mut opponent = RandomOpponent::seeded(Side::Black, 1);
        assert_eq!(opponent.choose(&Board::empty()), None);
    }
}
