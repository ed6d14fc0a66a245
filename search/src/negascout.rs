use othello::Color;

use crate::{Context, Position, Score};

/// Principal variation search. The first child gets the full window, the
/// others a null window around `alpha`, and are searched again with the full
/// window only when the probe lands strictly inside `(alpha, beta)`.
///
/// Fail-hard: the result is clamped to the window from below. Same
/// perspective as [`negamax`](crate::negamax).
pub fn negascout<P: Position>(
    ctx: &mut Context<P>,
    state: &P,
    mut alpha: Score,
    beta: Score,
    color: Color,
) -> Score {
    ctx.generated += 1;
    if state.terminal() {
        return color.sign() * state.value();
    }

    let mut moved = false;
    for (i, my_move) in state.moves(color).into_iter().enumerate() {
        moved = true;
        let child = state.play(color, my_move);
        let score = if i == 0 {
            -negascout(ctx, &child, -beta, -alpha, -color)
        } else {
            let probe = -negascout(ctx, &child, -alpha - 1, -alpha, -color);
            if alpha < probe && probe < beta {
                -negascout(ctx, &child, -beta, -probe, -color)
            } else {
                probe
            }
        };
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    if !moved {
        alpha = -negascout(ctx, state, -beta, -alpha, -color);
    }

    ctx.expanded += 1;
    alpha
}
