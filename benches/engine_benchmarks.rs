//! Benchmarks for chess engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_engine::board::types::Variant;
use chess_engine::board::{generate_legal_moves, Position};
use chess_engine::engine::GameController;
use chess_engine::eval::{Evaluator, MaterialPst};

fn perft(position: &Position, side: chess_engine::board::types::Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_legal_moves(position, side);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in moves.iter() {
        let mut copy = *position;
        copy.apply_move(*mv).expect("legally generated move must apply");
        nodes += perft(&copy, side.opponent(), depth - 1);
    }
    nodes
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Position::new_position(Variant::Classic);
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&startpos, chess_engine::board::types::Color::White, black_box(depth)))
        });
    }

    let (kiwipete, side) =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft(&kiwipete, side, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Position::new_position(Variant::Classic);
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(generate_legal_moves(&startpos, chess_engine::board::types::Color::White)))
    });

    let (middlegame, side) =
        Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(generate_legal_moves(&middlegame, side)))
    });

    let (kiwipete, side) =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(generate_legal_moves(&kiwipete, side)))
    });

    let fairy_start = Position::new_position(Variant::FairyChess);
    group.bench_function("fairy_startpos", |b| {
        b.iter(|| black_box(generate_legal_moves(&fairy_start, chess_engine::board::types::Color::White)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let gc = GameController::new(Variant::Classic);
                gc.best_move(depth, 1)
            })
        });
    }

    for depth in [3, 4] {
        group.bench_with_input(BenchmarkId::new("tactical", depth), &depth, |b, &depth| {
            b.iter(|| {
                let (position, side) = Position::from_fen(
                    "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
                )
                .unwrap();
                let gc = GameController::from_position(position, side);
                gc.best_move(depth, 1)
            })
        });
    }

    for workers in [1, 2, 4] {
        group.bench_with_input(
            BenchmarkId::new("lazy_smp_startpos_depth4", workers),
            &workers,
            |b, &workers| {
                b.iter(|| {
                    let gc = GameController::new(Variant::Classic);
                    gc.best_move(4, workers)
                })
            },
        );
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        (
            "middlegame",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        ),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    let evaluator = MaterialPst;
    for (name, fen) in positions {
        let (position, _) = Position::from_fen(fen).unwrap();
        group.bench_with_input(BenchmarkId::new("position", name), &position, |b, position| {
            b.iter(|| black_box(evaluator.evaluate(position)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
