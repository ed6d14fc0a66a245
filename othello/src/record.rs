use crate::{Color, Game, Move, ParseError, PlayError};

/// Width of the board [`RECORDED_GAME`] was played on.
pub const RECORDED_WIDTH: usize = 6;

/// A complete 6x6 game. White is forced to pass on ply 23, and the game
/// ends with a full board, 28 to 8 for Black.
pub const RECORDED_GAME: [&str; 33] = [
    "e4", "e3", "e2", "e5", "c2", "e1", "f5", "b2", "b3", "b5", "a1", "f4", "c5", "b1", "d1", "d5", "e6",
    "c1", "d2", "a2", "f6", "d6", "f1", "pass", "c6", "b4", "a3", "b6", "a6", "f2", "a4", "a5", "f3",
];

pub fn parse_moves(moves: &[&str]) -> Result<Vec<Move>, ParseError> {
    moves.iter().map(|s| s.parse()).collect()
}

/// Every position along the record paired with the side to move, from the
/// start position up to and including the final one. Black moves on even
/// plies, so passes have to be part of the record.
pub fn replay<const N: usize>(moves: &[Move]) -> Result<Vec<(Game<N>, Color)>, PlayError> {
    let mut game = Game::<N>::default();
    let mut positions = Vec::with_capacity(moves.len() + 1);
    for (ply, &my_move) in moves.iter().enumerate() {
        let color = Color::on_ply(ply);
        positions.push((game, color));
        game = game.play(color, my_move)?;
    }
    positions.push((game, Color::on_ply(moves.len())));
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::{parse_moves, replay, RECORDED_GAME, RECORDED_WIDTH};
    use crate::{Color, Move, PlayError};

    #[test]
    fn pass_is_parsed() {
        let moves = parse_moves(&["c2", "pass", "PASS"]).unwrap();
        assert_eq!(moves[1], Move::Pass);
        assert_eq!(moves[2], Move::Pass);
        assert!(parse_moves(&["c2", "skip"]).is_err());
    }

    #[test]
    fn illegal_record() {
        let moves = parse_moves(&["c2", "c2"]).unwrap();
        assert_eq!(
            replay::<6>(&moves),
            Err(PlayError::AlreadyOccupied("c2".parse().unwrap()))
        );
    }

    #[test]
    fn recorded_game_ends_full() {
        let moves = parse_moves(&RECORDED_GAME).unwrap();
        let positions = replay::<RECORDED_WIDTH>(&moves).unwrap();
        assert_eq!(positions.len(), RECORDED_GAME.len() + 1);
        let (last, _) = positions.last().unwrap();
        assert!(last.terminal());
        assert_eq!(last.count(Color::Black), 28);
        assert_eq!(last.count(Color::White), 8);
    }
}
