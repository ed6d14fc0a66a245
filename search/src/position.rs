use std::{fmt::Debug, hash::Hash};

use othello::{arrayvec::ArrayVec, Color, Game, Square, MAX_SQUARES};

use crate::Score;

/// What the searches need from a game.
///
/// A position is an immutable value; the side to move is passed alongside it.
/// `moves` must be empty exactly when `color` has to pass, and `terminal`
/// must hold exactly when neither side can move. The searches recurse
/// forever on a position where both sides are stuck but `terminal` is false.
pub trait Position: Clone + Eq + Hash {
    type Move: Copy + Debug;
    type Moves: IntoIterator<Item = Self::Move>;

    fn terminal(&self) -> bool;

    /// Final score from Black's point of view. Only called on terminal positions.
    fn value(&self) -> Score;

    fn moves(&self, color: Color) -> Self::Moves;

    #[must_use]
    fn play(&self, color: Color, my_move: Self::Move) -> Self;
}

impl<const N: usize> Position for Game<N> {
    type Move = Square;
    type Moves = ArrayVec<Square, MAX_SQUARES>;

    fn terminal(&self) -> bool {
        Game::terminal(self)
    }

    fn value(&self) -> Score {
        Game::value(self)
    }

    fn moves(&self, color: Color) -> Self::Moves {
        Game::moves(self, color)
    }

    fn play(&self, color: Color, my_move: Square) -> Self {
        self.place(color, my_move)
    }
}
