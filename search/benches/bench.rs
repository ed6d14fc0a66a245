use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use othello::{parse_moves, replay, Color, Game, RECORDED_GAME, RECORDED_WIDTH};
use search::{Algorithm, Context};

fn recorded(ply: usize) -> (Game<RECORDED_WIDTH>, Color) {
    let moves = parse_moves(&RECORDED_GAME).unwrap();
    replay(&moves).unwrap()[ply]
}

fn algorithms(c: &mut Criterion) {
    let (game, color) = recorded(24);
    for algorithm in Algorithm::all(0) {
        c.bench_function(&format!("{algorithm} 6x6 ply 24"), |b| {
            b.iter_batched_ref(
                Context::new,
                |ctx| algorithm.evaluate(ctx, black_box(&game), color),
                BatchSize::SmallInput,
            )
        });
    }
}

fn deeper(c: &mut Criterion) {
    let (game, color) = recorded(20);
    let mut group = c.benchmark_group("6x6 ply 20");
    group.sample_size(10);
    for algorithm in [
        Algorithm::AlphaBeta { transpositions: true },
        Algorithm::Negascout,
        Algorithm::Mtdf { first_guess: 0 },
    ] {
        group.bench_function(algorithm.to_string(), |b| {
            b.iter_batched_ref(
                Context::new,
                |ctx| algorithm.evaluate(ctx, black_box(&game), color),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, algorithms, deeper);
criterion_main!(benches);
