use othello::Color;

use crate::{Bound, Context, Entry, Position, Score, SearchError, INF};

/// Plain negamax. Scores are from the point of view of `color`; multiply
/// by `color.sign()` to get the score from Black's point of view.
///
/// A side without a legal move passes: the same position is searched with
/// the other side to move.
pub fn negamax<P: Position>(ctx: &mut Context<P>, state: &P, color: Color) -> Score {
    ctx.generated += 1;
    if state.terminal() {
        return color.sign() * state.value();
    }

    let mut score = -INF;
    let mut moved = false;
    for my_move in state.moves(color) {
        moved = true;
        score = score.max(-negamax(ctx, &state.play(color, my_move), -color));
    }
    if !moved {
        score = -negamax(ctx, state, -color);
    }

    ctx.expanded += 1;
    score
}

/// Fail-soft alpha-beta negamax, optionally backed by the transposition
/// tables of the context. Same perspective as [`negamax`].
///
/// The only error is a transposition table running out of room.
pub fn alpha_beta<P: Position>(
    ctx: &mut Context<P>,
    state: &P,
    mut alpha: Score,
    mut beta: Score,
    color: Color,
    transpositions: bool,
) -> Result<Score, SearchError> {
    ctx.generated += 1;
    if state.terminal() {
        return Ok(color.sign() * state.value());
    }

    let original_alpha = alpha;
    if transpositions {
        if let Some(entry) = ctx.table(color).get(state) {
            match entry.bound {
                Bound::Exact => return Ok(entry.value),
                Bound::Lower => alpha = alpha.max(entry.value),
                Bound::Upper => beta = beta.min(entry.value),
            }
            if alpha >= beta {
                return Ok(entry.value);
            }
        }
    }

    let mut score = -INF;
    let mut moved = false;
    for my_move in state.moves(color) {
        moved = true;
        let child = state.play(color, my_move);
        score = score.max(-alpha_beta(ctx, &child, -beta, -alpha, -color, transpositions)?);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    if !moved {
        score = -alpha_beta(ctx, state, -beta, -alpha, -color, transpositions)?;
    }

    if transpositions {
        let bound = if score <= original_alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        ctx.table_mut(color).insert(state.clone(), Entry { value: score, bound })?;
    }

    ctx.expanded += 1;
    Ok(score)
}
