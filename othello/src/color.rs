use std::{fmt::Display, ops::Neg};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Black is the positive side: +1 for Black, -1 for White.
    pub const fn sign(self) -> i32 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /// Side to move on the given ply. Black moves first.
    pub const fn on_ply(ply: usize) -> Self {
        if ply % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl Neg for Color {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.next()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Color::Black => "Black",
            Color::White => "White",
        })
    }
}
