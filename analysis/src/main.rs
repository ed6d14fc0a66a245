use std::{error::Error, time::Instant};

use clap::Parser;
use cli::Args;
use config::N;
use log::{info, warn, LevelFilter};
use mimalloc::MiMalloc;
use othello::{parse_moves, replay, Color, RECORDED_GAME};
use search::{Algorithm, Context, SearchError};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;
mod config;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    simple_logging::log_to_stderr(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let mut algorithm = Algorithm::from_id(args.algorithm, args.tt, args.guess)
        .ok_or_else(|| format!("unknown algorithm {}, expected 1 to 6", args.algorithm))?;

    let moves = parse_moves(&RECORDED_GAME)?;
    let positions = replay::<N>(&moves)?;
    let last = positions.len() - 1;
    let from = args.from.unwrap_or(last).min(last);
    if args.to > from {
        return Err(format!("nothing to analyse between plies {} and {from}", args.to).into());
    }
    info!("replayed {} plies", moves.len());

    println!("Algorithm: {algorithm}");
    println!("Moving along the game (backwards):");

    let mut ctx = Context::<othello::Game<N>>::with_table_limit(args.table_capacity);
    for ply in (args.to..=from).rev() {
        let (game, color) = positions[ply];
        ctx.reset();
        let start = Instant::now();
        let result = algorithm.evaluate(&mut ctx, &game, color);
        let seconds = start.elapsed().as_secs_f64();

        let value = match result {
            Ok(value) => value.to_string(),
            Err(err @ SearchError::TableFull { .. }) => {
                warn!("{err} at ply {ply}");
                for side in [Color::Black, Color::White] {
                    let table = ctx.table(side);
                    warn!("table for {side}: size={}, capacity={}", table.len(), table.capacity());
                }
                if let Algorithm::AlphaBeta { transpositions: true } = algorithm {
                    warn!("continuing without transposition tables");
                    algorithm = Algorithm::AlphaBeta { transpositions: false };
                }
                "aborted".to_string()
            }
        };

        println!(
            "{}. {color} moves: value={value}, #expanded={}, #generated={}, seconds={seconds:.3}, #generated/second={:.0}",
            ply + 1,
            ctx.expanded,
            ctx.generated,
            ctx.generated as f64 / seconds.max(f64::EPSILON),
        );
    }

    Ok(())
}
