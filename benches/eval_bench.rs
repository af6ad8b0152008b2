use caro::eval::{evaluate, ScoreTable};
use caro::search::candidate_moves;
use caro::{Board, Stone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn eval_benchmark(c: &mut Criterion) {
    let board: Board = "
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
        ..............."
        .parse()
        .unwrap();
    let scores = ScoreTable::default();

    c.bench_function("position evaluation", |b| {
        b.iter(|| evaluate(black_box(&board), black_box(Stone::X), &scores, 5))
    });

    c.bench_function("candidate generation", |b| {
        b.iter(|| candidate_moves(black_box(&board), 2))
    });
}

criterion_group!(benches, eval_benchmark);
criterion_main!(benches);
