mod board;
mod color;
mod diagram;
mod error;
mod game;
mod game_result;
mod move_gen;
mod moves;
mod record;
mod square;
mod symm;

pub use arrayvec;
pub use board::Board;
pub use color::Color;
pub use error::*;
pub use game::{Game, MAX_SQUARES};
pub use game_result::GameResult;
pub use moves::Move;
pub use record::{parse_moves, replay, RECORDED_GAME, RECORDED_WIDTH};
pub use square::Square;
pub use symm::Symmetry;
