use std::{error::Error, fmt::Display};

use crate::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    OutOfBounds(Square),
    AlreadyOccupied(Square),
    NoFlips(Square),
    PassWithMoves,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use PlayError::*;
        match self {
            OutOfBounds(square) => write!(f, "square {square} is not on the board"),
            AlreadyOccupied(square) => write!(
                f,
                "cannot place a disc on {square} because it is already occupied"
            ),
            NoFlips(square) => write!(f, "placing a disc on {square} would not flip anything"),
            PassWithMoves => write!(f, "cannot pass while there is a legal placement"),
        }
    }
}

impl Error for PlayError {}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    Square(String),
    Move(String),
    RowCount { expected: usize, found: usize },
    RowWidth { row: usize, expected: usize, found: usize },
    Disc(char),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Square(s) => write!(f, "could not parse square {s:?}"),
            ParseError::Move(s) => write!(f, "could not parse move {s:?}"),
            ParseError::RowCount { expected, found } => {
                write!(f, "expected {expected} rows but found {found}")
            }
            ParseError::RowWidth { row, expected, found } => {
                write!(f, "row {row} should have {expected} squares but has {found}")
            }
            ParseError::Disc(c) => write!(f, "unexpected character {c:?}, expected 'x', 'o' or '-'"),
        }
    }
}

impl Error for ParseError {}
