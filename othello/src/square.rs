use std::{fmt::Display, str::FromStr};

use crate::ParseError;

const COLUMNS: &[u8] = b"abcdefgh";

/// A square on the board. Column `x` is printed as a letter, row `y` as a
/// number counted from the top starting at 1, so `a1` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    pub const fn new(x: u8, y: u8) -> Self {
        Square { x, y }
    }

    pub const fn on_board<const N: usize>(self) -> bool {
        (self.x as usize) < N && (self.y as usize) < N
    }

    /// Row-major bit index on an `N` wide board.
    pub const fn index<const N: usize>(self) -> usize {
        self.y as usize * N + self.x as usize
    }

    pub const fn from_index<const N: usize>(index: usize) -> Self {
        Square {
            x: (index % N) as u8,
            y: (index / N) as u8,
        }
    }

    pub(crate) const fn bit<const N: usize>(self) -> u64 {
        1 << self.index::<N>()
    }

    /// rotates a square 1 quarter turn counterclockwise
    #[must_use]
    pub const fn rotate(self, n: u8) -> Self {
        Square {
            x: self.y,
            y: n - 1 - self.x,
        }
    }

    /// mirror along the x axis
    #[must_use]
    pub const fn mirror(self, n: u8) -> Self {
        Square {
            x: self.x,
            y: n - 1 - self.y,
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", COLUMNS[self.x as usize] as char, self.y + 1)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = chars
            .next()
            .and_then(|c| COLUMNS.iter().position(|&l| l as char == c.to_ascii_lowercase()));
        let row = chars.as_str().parse::<u8>().ok().filter(|r| (1..=8).contains(r));
        match (column, row) {
            (Some(x), Some(row)) => Ok(Square::new(x as u8, row - 1)),
            _ => Err(ParseError::Square(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn notation() {
        let square: Square = "c4".parse().unwrap();
        assert_eq!(square, Square::new(2, 3));
        assert_eq!(square.to_string(), "c4");
        assert_eq!(square.index::<6>(), 20);
        assert_eq!(Square::from_index::<6>(20), square);
    }

    #[test]
    fn bad_notation() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a0".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
        assert!("pass".parse::<Square>().is_err());
    }

    #[test]
    fn rotate_four_times() {
        let square = Square::new(1, 4);
        assert_eq!(square.rotate(6).rotate(6).rotate(6).rotate(6), square);
        assert_eq!(square.mirror(6).mirror(6), square);
        assert_eq!(square.rotate(6), Square::new(4, 4));
    }
}
