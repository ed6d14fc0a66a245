use arrayvec::ArrayVec;

use crate::{board::Board, game::MAX_SQUARES, Color, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    East,
    West,
    South,
    North,
    SouthEast,
    SouthWest,
    NorthEast,
    NorthWest,
}

const DIRECTIONS: [Direction; 8] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthEast,
    Direction::NorthWest,
];

impl<const N: usize> Board<N> {
    /// Move every disc one step in the direction, dropping the ones that
    /// would leave the board or wrap around to the opposite edge.
    fn shift(bits: u64, direction: Direction) -> u64 {
        match direction {
            Direction::East => (bits << 1) & Self::NOT_WEST,
            Direction::West => (bits >> 1) & Self::NOT_EAST,
            Direction::South => (bits << N) & Self::FULL,
            Direction::North => bits >> N,
            Direction::SouthEast => (bits << (N + 1)) & Self::NOT_WEST,
            Direction::SouthWest => (bits << (N - 1)) & Self::NOT_EAST,
            Direction::NorthEast => (bits >> (N - 1)) & Self::NOT_WEST,
            Direction::NorthWest => (bits >> (N + 1)) & Self::NOT_EAST,
        }
    }

    /// Bitboard of every empty square where `color` would flip something.
    pub(crate) fn legal(&self, color: Color) -> u64 {
        let own = self.discs(color);
        let opponent = self.discs(color.next());
        let empty = self.empty();

        let mut legal = 0;
        for direction in DIRECTIONS {
            // A bracketed run is at most N - 2 discs long.
            let mut run = Self::shift(own, direction) & opponent;
            for _ in 0..N - 3 {
                run |= Self::shift(run, direction) & opponent;
            }
            legal |= Self::shift(run, direction) & empty;
        }
        legal
    }

    /// Opponent discs flipped by `color` placing on `square`.
    pub(crate) fn flips(&self, color: Color, square: Square) -> u64 {
        let own = self.discs(color);
        let opponent = self.discs(color.next());
        let origin = square.bit::<N>();

        let mut flips = 0;
        for direction in DIRECTIONS {
            let mut line = 0;
            let mut probe = Self::shift(origin, direction);
            while probe & opponent != 0 {
                line |= probe;
                probe = Self::shift(probe, direction);
            }
            if probe & own != 0 {
                flips |= line;
            }
        }
        flips
    }

    pub(crate) fn squares(mut bits: u64) -> ArrayVec<Square, MAX_SQUARES> {
        let mut squares = ArrayVec::new();
        while bits != 0 {
            squares.push(Square::from_index::<N>(bits.trailing_zeros() as usize));
            bits &= bits - 1;
        }
        squares
    }
}
