use othello::Color;

use crate::{Context, Position, Score};

/// Decide whether the value of `state` (from Black's point of view) is
/// `>= score` when `inclusive`, or `> score` otherwise, without computing it.
///
/// Black is the maximizing side: it answers `true` as soon as one child does.
/// White answers `false` as soon as one child does. When no child settles
/// it, the answer is `true` for White and `false` for Black.
pub fn test<P: Position>(ctx: &mut Context<P>, state: &P, color: Color, score: Score, inclusive: bool) -> bool {
    ctx.generated += 1;
    if state.terminal() {
        let value = state.value();
        return if inclusive { value >= score } else { value > score };
    }

    ctx.expanded += 1;
    let maximizing = color == Color::Black;
    let mut moved = false;
    for my_move in state.moves(color) {
        moved = true;
        let answer = test(ctx, &state.play(color, my_move), -color, score, inclusive);
        if maximizing && answer {
            return true;
        }
        if !maximizing && !answer {
            return false;
        }
    }
    if !moved {
        // Passing: whatever the opponent's test says settles this node.
        return test(ctx, state, -color, score, inclusive);
    }

    !maximizing
}

/// Scout. Unlike the negamax family the result is always from Black's
/// point of view.
///
/// The first child is searched to get a value to beat; every later child is
/// only searched when [`test`] says it improves on that value for the side
/// to move.
pub fn scout<P: Position>(ctx: &mut Context<P>, state: &P, color: Color) -> Score {
    ctx.generated += 1;
    if state.terminal() {
        return state.value();
    }

    let mut score = 0;
    let mut moved = false;
    for (i, my_move) in state.moves(color).into_iter().enumerate() {
        moved = true;
        let child = state.play(color, my_move);
        if i == 0 {
            score = scout(ctx, &child, -color);
        } else if color == Color::Black && test(ctx, &child, -color, score, false) {
            score = scout(ctx, &child, -color);
        } else if color == Color::White && !test(ctx, &child, -color, score, true) {
            score = scout(ctx, &child, -color);
        }
    }
    if !moved {
        score = scout(ctx, state, -color);
    }

    ctx.expanded += 1;
    score
}
