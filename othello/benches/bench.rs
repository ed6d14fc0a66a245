use criterion::{black_box, criterion_group, criterion_main, Criterion};
use othello::{Color, Game};

const MIDDLE: &str = "--o---/-oox--/xxxxo-/-xxoo-/--xo--/------";

const ENDGAME: &str = "xxxxxx/ooooo-/-oooo-/--oooo/-oooox/---oxx";

fn perf_count<const N: usize>(game: Game<N>, color: Color, depth: usize) -> usize {
    if depth == 0 || game.terminal() {
        return 1;
    }
    let moves = game.moves(color);
    if moves.is_empty() {
        return perf_count(game, color.next(), depth - 1);
    }
    moves
        .into_iter()
        .map(|square| perf_count(game.place(color, square), color.next(), depth - 1))
        .sum()
}

fn perft(c: &mut Criterion) {
    c.bench_function("perft 6x6 depth 6", |b| {
        let game = Game::<6>::default();
        b.iter(|| perf_count(game, Color::Black, black_box(6)))
    });
    c.bench_function("perft 8x8 depth 6", |b| {
        let game = Game::<8>::default();
        b.iter(|| perf_count(game, Color::Black, black_box(6)))
    });
}

fn move_gen(c: &mut Criterion) {
    c.bench_function("move_gen middle game", |b| {
        let game: Game<6> = MIDDLE.parse().unwrap();
        b.iter(|| black_box(game).moves(Color::White))
    });
    c.bench_function("move_gen endgame", |b| {
        let game: Game<6> = ENDGAME.parse().unwrap();
        b.iter(|| black_box(game).moves(Color::Black))
    });
}

fn making_moves(c: &mut Criterion) {
    c.bench_function("placing a disc", |b| {
        let game: Game<6> = MIDDLE.parse().unwrap();
        let square = "c2".parse().unwrap();
        b.iter(|| black_box(game).place(Color::White, black_box(square)))
    });
}

fn canonical(c: &mut Criterion) {
    c.bench_function("canonical endgame", |b| {
        let game: Game<6> = ENDGAME.parse().unwrap();
        b.iter(|| black_box(game).canonical())
    });
}

criterion_group!(benches, perft, move_gen, making_moves, canonical);
criterion_main!(benches);
