use caro::{Board, Engine, Stone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Opening exchange with both sides building around the center
const MIDGAME: &str = "
    ...............
    ...............
    ...............
    ...............
    ...............
    ......O........
    .....XXO.......
    ......XO.......
    .....OXX.......
    ........O......
    ...............
    ...............
    ...............
    ...............
    ...............";

fn search_benchmark(c: &mut Criterion) {
    let engine = Engine::new();
    let board: Board = MIDGAME.parse().unwrap();
    let ply = board.stone_count();

    c.bench_function(&format!("best_move_{ply}_stones"), |b| {
        b.iter(|| engine.best_move_with_stats(black_box(&board), black_box(Stone::X), black_box(ply)))
    });

    let empty = Board::new(15);
    c.bench_function("best_move_empty_board", |b| {
        b.iter(|| engine.best_move(black_box(&empty), black_box(Stone::X), 0))
    });
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
