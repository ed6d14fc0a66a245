use othello::*;

fn recorded_positions() -> Vec<(Game<RECORDED_WIDTH>, Color)> {
    let moves = parse_moves(&RECORDED_GAME).unwrap();
    replay(&moves).unwrap()
}

#[test]
fn forced_pass() {
    let positions = recorded_positions();
    let (game, color) = positions[23];
    assert_eq!(color, Color::White);
    assert!(game.moves(Color::White).is_empty());
    assert!(game.has_moves(Color::Black));
    assert!(!game.terminal());
    assert_eq!(game.to_string(), "xxxxxx/ooooo-/-oooo-/--oooo/-oooox/---oxx");

    // the pass leaves the board as it is and hands the move to Black
    let (after, color) = positions[24];
    assert_eq!(after, game);
    assert_eq!(color, Color::Black);
}

#[test]
fn end_of_game() {
    let positions = recorded_positions();
    let (game, color) = positions[33];
    assert_eq!(color, Color::White);
    assert_eq!(game.to_string(), "xxxxxx/xxxoxx/xxoxxx/xoxoxx/oooxox/xxxxxx");
    assert!(game.terminal());
    assert_eq!(game.value(), 20);
    assert_eq!(game.result(), GameResult::Winner(Color::Black));
}

#[test]
fn sides_alternate() {
    for (ply, (game, color)) in recorded_positions().into_iter().enumerate() {
        assert_eq!(color, Color::on_ply(ply));
        assert_eq!(game.empties() as usize, 32 - ply.min(23) - ply.saturating_sub(24));
    }
}

#[test]
fn diagram_roundtrip_along_record() {
    for (game, _) in recorded_positions() {
        let parsed: Game<RECORDED_WIDTH> = game.to_string().parse().unwrap();
        assert_eq!(parsed, game);
    }
}
