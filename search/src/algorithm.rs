use std::fmt::Display;

use log::debug;
use othello::Color;

use crate::{alpha_beta, mtdf, negamax, negascout, scout, sss_star, Context, Position, Score, SearchError, INF};

/// The searches behind one interface, so callers can pick one by number or
/// run them all on the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Negamax,
    AlphaBeta { transpositions: bool },
    Scout,
    Negascout,
    SssStar,
    Mtdf { first_guess: Score },
}

impl Algorithm {
    /// Numbering used on the command line: 1 negamax, 2 alpha-beta, 3 Scout,
    /// 4 Negascout, 5 SSS*, 6 MTD(f).
    pub fn from_id(id: u8, transpositions: bool, first_guess: Score) -> Option<Self> {
        Some(match id {
            1 => Algorithm::Negamax,
            2 => Algorithm::AlphaBeta { transpositions },
            3 => Algorithm::Scout,
            4 => Algorithm::Negascout,
            5 => Algorithm::SssStar,
            6 => Algorithm::Mtdf { first_guess },
            _ => return None,
        })
    }

    pub fn id(&self) -> u8 {
        match self {
            Algorithm::Negamax => 1,
            Algorithm::AlphaBeta { .. } => 2,
            Algorithm::Scout => 3,
            Algorithm::Negascout => 4,
            Algorithm::SssStar => 5,
            Algorithm::Mtdf { .. } => 6,
        }
    }

    /// Every search, alpha-beta both with and without transposition tables.
    pub fn all(first_guess: Score) -> [Algorithm; 7] {
        [
            Algorithm::Negamax,
            Algorithm::AlphaBeta { transpositions: false },
            Algorithm::AlphaBeta { transpositions: true },
            Algorithm::Scout,
            Algorithm::Negascout,
            Algorithm::SssStar,
            Algorithm::Mtdf { first_guess },
        ]
    }

    pub fn uses_tables(&self) -> bool {
        matches!(
            self,
            Algorithm::AlphaBeta { transpositions: true } | Algorithm::Mtdf { .. }
        )
    }

    /// Value of `state` with `color` to move, from Black's point of view.
    ///
    /// The context is not reset, so counters and tables carry over from
    /// earlier calls until [`Context::reset`] is called.
    pub fn evaluate<P: Position>(&self, ctx: &mut Context<P>, state: &P, color: Color) -> Result<Score, SearchError> {
        let sign = color.sign();
        let value = match *self {
            Algorithm::Negamax => sign * negamax(ctx, state, color),
            Algorithm::AlphaBeta { transpositions } => {
                sign * alpha_beta(ctx, state, -INF, INF, color, transpositions)?
            }
            Algorithm::Scout => scout(ctx, state, color),
            Algorithm::Negascout => sign * negascout(ctx, state, -INF, INF, color),
            Algorithm::SssStar => sss_star(ctx, state, color, INF),
            Algorithm::Mtdf { first_guess } => sign * mtdf(ctx, state, color, first_guess)?,
        };
        debug!(
            "{self} with {color} to move: value={value} generated={} expanded={}",
            ctx.generated, ctx.expanded
        );
        Ok(value)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Negamax => write!(f, "Negamax (minmax version)"),
            Algorithm::AlphaBeta { transpositions } => {
                write!(f, "Negamax (alpha-beta version)")?;
                if *transpositions {
                    write!(f, " w/ transposition table")?;
                }
                Ok(())
            }
            Algorithm::Scout => write!(f, "Scout"),
            Algorithm::Negascout => write!(f, "Negascout"),
            Algorithm::SssStar => write!(f, "SSS*"),
            Algorithm::Mtdf { first_guess } => write!(f, "MTD(f) (first guess {first_guess})"),
        }
    }
}
