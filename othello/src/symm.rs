use crate::{Board, Game, Move, Square};

/// The eight images of a square board under rotation and reflection.
/// The first image is always the identity.
pub trait Symmetry<const N: usize>: Sized {
    fn symmetries(self) -> [Self; 8];
}

impl<const N: usize> Symmetry<N> for Square {
    fn symmetries(self) -> [Self; 8] {
        let n = N as u8;
        [
            self,
            self.rotate(n),
            self.rotate(n).rotate(n),
            self.rotate(n).rotate(n).rotate(n),
            self.mirror(n),
            self.mirror(n).rotate(n),
            self.mirror(n).rotate(n).rotate(n),
            self.mirror(n).rotate(n).rotate(n).rotate(n),
        ]
    }
}

impl<const N: usize> Symmetry<N> for Move {
    fn symmetries(self) -> [Self; 8] {
        match self {
            Move::Place(square) => Symmetry::<N>::symmetries(square).map(Move::Place),
            Move::Pass => [Move::Pass; 8],
        }
    }
}

impl<const N: usize> Symmetry<N> for Board<N> {
    fn symmetries(self) -> [Self; 8] {
        let mut boards = [Board::empty_board(); 8];
        for index in 0..N * N {
            let square = Square::from_index::<N>(index);
            if let Some(disc) = self.get(square) {
                for (board, sym) in boards.iter_mut().zip(Symmetry::<N>::symmetries(square)) {
                    board.set(sym, Some(disc));
                }
            }
        }
        boards
    }
}

impl<const N: usize> Symmetry<N> for Game<N> {
    fn symmetries(self) -> [Self; 8] {
        self.board.symmetries().map(Game::from)
    }
}

impl<const N: usize> Game<N> {
    /// The smallest of the eight symmetric images, with the index of the
    /// symmetry that produced it.
    pub fn canonical(self) -> (usize, Self) {
        self.symmetries()
            .into_iter()
            .enumerate()
            .min_by_key(|(_, game)| *game)
            .unwrap_or((0, self))
    }
}
