// Exhaustive game-tree searches over a two-player, perfect information game.
// Every search runs to the end of the game; there is no depth limit and no
// heuristic evaluation.

mod algorithm;
mod context;
mod error;
mod mtdf;
mod negamax;
mod negascout;
mod node;
mod position;
mod scout;
mod sss;
mod table;

pub use algorithm::Algorithm;
pub use context::{Context, Stats};
pub use error::SearchError;
pub use mtdf::{mtdf, mtdf_with};
pub use negamax::{alpha_beta, negamax};
pub use negascout::negascout;
pub use node::{Arena, NodeId};
pub use position::Position;
pub use scout::{scout, test};
pub use sss::{sss_star, sss_star_traced, SssTrace};
pub use table::{Bound, Entry, TranspositionTable};

pub type Score = i32;

/// Larger than the magnitude of any reachable score.
pub const INF: Score = 200;
