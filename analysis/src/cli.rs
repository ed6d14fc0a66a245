use clap::Parser;
use search::Score;

use crate::config::{DEFAULT_GUESS, DEFAULT_TO_PLY};

/// Solve the positions of a recorded Othello game, from the end backwards
#[derive(Parser)]
pub struct Args {
    /// 1 negamax, 2 alpha-beta, 3 Scout, 4 Negascout, 5 SSS*, 6 MTD(f)
    pub algorithm: u8,
    /// Use transposition tables in alpha-beta
    #[clap(short, long)]
    pub tt: bool,
    /// First guess for MTD(f)
    #[clap(short, long, default_value_t = DEFAULT_GUESS, allow_hyphen_values = true)]
    pub guess: Score,
    /// Latest ply to analyse [default: end of the game]
    #[clap(long)]
    pub from: Option<usize>,
    /// Earliest ply to analyse
    #[clap(long, default_value_t = DEFAULT_TO_PLY)]
    pub to: usize,
    /// Entry limit for each transposition table
    #[clap(long)]
    pub table_capacity: Option<usize>,
    /// Log search details
    #[clap(short, long)]
    pub verbose: bool,
}
