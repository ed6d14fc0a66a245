use std::cmp::Ordering;

use arrayvec::ArrayVec;

use crate::{board::Board, Color, GameResult, Move, PlayError, Square};

/// Largest number of squares on a supported board.
pub const MAX_SQUARES: usize = 64;

/// An immutable Othello position. The side to move is not part of the
/// position; every query that depends on it takes the color explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Game<const N: usize> {
    pub board: Board<N>,
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        Game { board: Board::start() }
    }
}

impl<const N: usize> From<Board<N>> for Game<N> {
    fn from(board: Board<N>) -> Self {
        Game { board }
    }
}

impl<const N: usize> Game<N> {
    /// Legal placements for `color`, in row-major order.
    /// Empty exactly when `color` has to pass.
    pub fn moves(&self, color: Color) -> ArrayVec<Square, MAX_SQUARES> {
        Board::<N>::squares(self.board.legal(color))
    }

    pub fn has_moves(&self, color: Color) -> bool {
        self.board.legal(color) != 0
    }

    /// Place a disc for `color` and flip every bracketed line.
    /// The placement must be legal; use [`Game::play`] to check it.
    #[must_use]
    pub fn place(&self, color: Color, square: Square) -> Self {
        let flips = self.board.flips(color, square);
        let mut board = self.board;
        *board.discs_mut(color) |= flips | square.bit::<N>();
        *board.discs_mut(color.next()) &= !flips;
        Game { board }
    }

    /// Checked version of [`Game::place`] that also accepts passes.
    pub fn play(&self, color: Color, my_move: Move) -> Result<Self, PlayError> {
        match my_move {
            Move::Pass if self.has_moves(color) => Err(PlayError::PassWithMoves),
            Move::Pass => Ok(*self),
            Move::Place(square) => {
                if !square.on_board::<N>() {
                    Err(PlayError::OutOfBounds(square))
                } else if self.board.get(square).is_some() {
                    Err(PlayError::AlreadyOccupied(square))
                } else if self.board.flips(color, square) == 0 {
                    Err(PlayError::NoFlips(square))
                } else {
                    Ok(self.place(color, square))
                }
            }
        }
    }

    /// Neither side can move.
    pub fn terminal(&self) -> bool {
        !self.has_moves(Color::Black) && !self.has_moves(Color::White)
    }

    /// Disc difference from Black's point of view.
    /// Only meaningful as a score once the game is over.
    pub fn value(&self) -> i32 {
        self.count(Color::Black) as i32 - self.count(Color::White) as i32
    }

    pub fn count(&self, color: Color) -> u32 {
        self.board.count(color)
    }

    pub fn empties(&self) -> u32 {
        self.board.empty().count_ones()
    }

    pub fn result(&self) -> GameResult {
        if !self.terminal() {
            return GameResult::Ongoing;
        }
        match self.value().cmp(&0) {
            Ordering::Greater => GameResult::Winner(Color::Black),
            Ordering::Less => GameResult::Winner(Color::White),
            Ordering::Equal => GameResult::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, Game, GameResult, Move, PlayError, Square};

    #[test]
    fn place_flips() {
        let game = Game::<6>::default().place(Color::Black, "c2".parse().unwrap());
        assert_eq!(game.count(Color::Black), 4);
        assert_eq!(game.count(Color::White), 1);
        assert_eq!(game.board.get("c3".parse().unwrap()), Some(Color::Black));
        assert_eq!(game.value(), 3);
    }

    #[test]
    fn place_does_not_mutate() {
        let game = Game::<6>::default();
        let _ = game.place(Color::Black, "c2".parse().unwrap());
        assert_eq!(game, Game::default());
    }

    #[test]
    fn checked_play() {
        let game = Game::<6>::default();
        let c3: Square = "c3".parse().unwrap();
        let a1: Square = "a1".parse().unwrap();
        let h8: Square = "h8".parse().unwrap();
        assert_eq!(game.play(Color::Black, Move::Place(c3)), Err(PlayError::AlreadyOccupied(c3)));
        assert_eq!(game.play(Color::Black, Move::Place(a1)), Err(PlayError::NoFlips(a1)));
        assert_eq!(game.play(Color::Black, Move::Place(h8)), Err(PlayError::OutOfBounds(h8)));
        assert_eq!(game.play(Color::Black, Move::Pass), Err(PlayError::PassWithMoves));
        assert!(game.play(Color::White, "b4".parse().unwrap()).is_ok());
    }

    #[test]
    fn start_is_ongoing() {
        let game = Game::<4>::default();
        assert!(!game.terminal());
        assert_eq!(game.result(), GameResult::Ongoing);
        assert_eq!(game.empties(), 12);
    }
}
