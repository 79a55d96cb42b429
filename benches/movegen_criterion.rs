//! Legal move generation and make/undo timings on the reference positions.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use grid_chess::game_state::game_state::Position;

const REFERENCE_POSITIONS: &[(&str, &str)] = &[
    ("start", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0"),
    ("en_passant", "rnbqkbnr/pp2pppp/8/2ppP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3"),
    ("castling", "r3k2r/pppqpppp/2n2n2/3p4/3P4/2N2N2/PPPQPPPP/R3K2R w KQkq - 0 1"),
    ("promotion", "8/3P4/8/8/8/8/8/k6K w - - 0 1"),
    ("kiwipete", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0"),
];

fn load(fen: &str) -> (Position, usize) {
    let mut position = Position::from_fen(fen).expect("benchmark FEN should parse");
    let count = position
        .all_legal_moves()
        .expect("generation should succeed")
        .len();
    assert!(count > 0, "{fen} has no legal moves to time");
    (position, count)
}

fn bench_all_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_legal_moves");
    group.measurement_time(Duration::from_secs(3));

    for &(label, fen) in REFERENCE_POSITIONS {
        let (mut position, count) = load(fen);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| {
                let moves = position
                    .all_legal_moves()
                    .expect("generation should succeed");
                black_box(moves.len())
            });
        });
    }

    group.finish();
}

fn bench_make_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_undo_cycle");
    group.measurement_time(Duration::from_secs(3));

    for &(label, fen) in REFERENCE_POSITIONS {
        let (mut position, _) = load(fen);
        let moves = position
            .all_legal_moves()
            .expect("generation should succeed");
        let root = position.clone();

        group.throughput(Throughput::Elements(moves.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            b.iter(|| {
                for &mv in &moves {
                    position
                        .make_move(black_box(mv))
                        .expect("legal move should apply");
                    position.undo_move().expect("undo should succeed");
                }
                black_box(position.history_len())
            });
        });
        assert_eq!(position, root, "{label} was not restored by make/undo");
    }

    group.finish();
}

criterion_group!(movegen_benches, bench_all_legal_moves, bench_make_undo);
criterion_main!(movegen_benches);
