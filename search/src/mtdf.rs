use log::trace;
use othello::Color;

use crate::{alpha_beta, Context, Position, Score, SearchError, INF};

/// MTD(f): converge on the value with null-window alpha-beta probes around a
/// guess. Transposition tables are always used. Same perspective as
/// [`negamax`](crate::negamax).
pub fn mtdf<P: Position>(ctx: &mut Context<P>, root: &P, color: Color, first_guess: Score) -> Result<Score, SearchError> {
    mtdf_with(ctx, root, color, first_guess, |_, _| {})
}

/// [`mtdf`] that reports the bounds `(lower, upper)` after every probe.
pub fn mtdf_with<P, F>(
    ctx: &mut Context<P>,
    root: &P,
    color: Color,
    first_guess: Score,
    mut on_probe: F,
) -> Result<Score, SearchError>
where
    P: Position,
    F: FnMut(Score, Score),
{
    let mut guess = first_guess.clamp(-INF, INF);
    let mut lower = -INF;
    let mut upper = INF;
    while lower < upper {
        let beta = if guess == lower { guess + 1 } else { guess };
        guess = alpha_beta(ctx, root, beta - 1, beta, color, true)?;
        if guess < beta {
            upper = guess;
        } else {
            lower = guess;
        }
        trace!("mtdf probe beta={beta} -> [{lower}, {upper}]");
        on_probe(lower, upper);
    }
    Ok(guess)
}
