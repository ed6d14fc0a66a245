use std::{fmt::Display, str::FromStr};

use crate::{Board, Color, Game, ParseError, Square};

// Positions are written row by row from the top, rows separated by '/'.
// 'x' is a black disc, 'o' a white disc and '-' an empty square.

impl<const N: usize> Display for Game<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.board.rows().enumerate() {
            if y > 0 {
                write!(f, "/")?;
            }
            for disc in row {
                write!(f, "{}", match disc {
                    Some(Color::Black) => 'x',
                    Some(Color::White) => 'o',
                    None => '-',
                })?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> FromStr for Game<N> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != N {
            return Err(ParseError::RowCount {
                expected: N,
                found: rows.len(),
            });
        }

        let mut board = Board::empty_board();
        for (y, row) in rows.into_iter().enumerate() {
            let row = row.trim();
            let found = row.chars().count();
            if found != N {
                return Err(ParseError::RowWidth {
                    row: y + 1,
                    expected: N,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                let disc = match c {
                    'x' | 'X' => Some(Color::Black),
                    'o' | 'O' => Some(Color::White),
                    '-' | '.' => None,
                    _ => return Err(ParseError::Disc(c)),
                };
                board.set(Square::new(x as u8, y as u8), disc);
            }
        }
        Ok(Game { board })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, Game, ParseError};

    #[test]
    fn start_diagram() {
        assert_eq!(Game::<4>::default().to_string(), "----/-ox-/-xo-/----");
        assert_eq!("----/-ox-/-xo-/----".parse::<Game<4>>(), Ok(Game::default()));
    }

    #[test]
    fn full_board() {
        let game: Game<8> = ["xxxxxxxx"; 8].join("/").parse().unwrap();
        assert_eq!(game.count(Color::Black), 64);
        assert!(game.terminal());
        assert_eq!(game.value(), 64);
    }

    #[test]
    fn malformed() {
        assert_eq!("----/----/----".parse::<Game<4>>(), Err(ParseError::RowCount {
            expected: 4,
            found: 3
        }));
        assert_eq!("----/---/----/----".parse::<Game<4>>(), Err(ParseError::RowWidth {
            row: 2,
            expected: 4,
            found: 3
        }));
        assert_eq!("----/-ox-/-xq-/----".parse::<Game<4>>(), Err(ParseError::Disc('q')));
    }
}
